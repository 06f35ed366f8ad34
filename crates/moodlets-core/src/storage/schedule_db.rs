//! SQLite-backed notification delivery store.
//!
//! Records what has been requested: one row per scheduled notification,
//! tagged with its reminder identifier and canonical wall-clock slot. The
//! mechanism that actually fires an OS-level alert at the scheduled time
//! is external and driven from these rows; as far as the schedule manager
//! is concerned, this *is* the delivery collaborator.

use rusqlite::{params, Connection};
use uuid::Uuid;

use super::data_dir;
use crate::error::{DeliveryError, StorageError};
use crate::notify::{
    NotificationDelivery, NotificationRequest, ReminderTag, ScheduledEntry, ScheduledTarget,
    Trigger, TriggerPreference,
};

// === Helper Functions ===

/// Parse a reminder tag from its database string; unknown tags are
/// skipped by callers rather than guessed at.
fn parse_tag(tag_str: &str) -> Option<ReminderTag> {
    ReminderTag::parse(tag_str).ok()
}

/// Format a trigger for database storage.
fn format_trigger(trigger: &Trigger) -> String {
    serde_json::to_string(trigger).unwrap_or_else(|_| String::from("{}"))
}

/// Parse a trigger from its database string.
fn parse_trigger(trigger_str: &str, target: ScheduledTarget) -> Trigger {
    serde_json::from_str(trigger_str).unwrap_or(Trigger::AtClockTime {
        hour: target.hour,
        minute: target.minute,
        repeats: false,
    })
}

/// SQLite store of pending notification requests.
pub struct ScheduleDb {
    conn: Connection,
}

impl ScheduleDb {
    /// Open the store at `~/.config/moodlets/schedule.db`.
    pub fn open() -> Result<Self, StorageError> {
        let path = data_dir()
            .map_err(|e| StorageError::QueryFailed(e.to_string()))?
            .join("schedule.db");
        let conn = Connection::open(&path).map_err(|source| StorageError::OpenFailed {
            path,
            source,
        })?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    /// Open an in-memory store (for tests and ephemeral runs).
    pub fn open_memory() -> Result<Self, StorageError> {
        let conn = Connection::open_in_memory().map_err(StorageError::from)?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    fn migrate(&self) -> Result<(), StorageError> {
        self.conn
            .execute_batch(
                "CREATE TABLE IF NOT EXISTS notifications (
                    handle     TEXT PRIMARY KEY,
                    title      TEXT NOT NULL,
                    body       TEXT NOT NULL,
                    tag        TEXT NOT NULL,
                    hour       INTEGER NOT NULL,
                    minute     INTEGER NOT NULL,
                    trigger    TEXT NOT NULL,
                    created_at TEXT NOT NULL
                );

                CREATE INDEX IF NOT EXISTS idx_notifications_tag
                    ON notifications(tag);",
            )
            .map_err(|e| StorageError::MigrationFailed(e.to_string()))
    }

    fn insert(&self, request: &NotificationRequest) -> Result<String, rusqlite::Error> {
        let handle = Uuid::new_v4().to_string();
        self.conn.execute(
            "INSERT INTO notifications
                (handle, title, body, tag, hour, minute, trigger, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                handle,
                request.title,
                request.body,
                request.tag.as_str(),
                request.target.hour,
                request.target.minute,
                format_trigger(&request.trigger),
                chrono::Utc::now().to_rfc3339(),
            ],
        )?;
        Ok(handle)
    }

    fn select_all(&self) -> Result<Vec<ScheduledEntry>, rusqlite::Error> {
        let mut stmt = self.conn.prepare(
            "SELECT handle, title, body, tag, hour, minute, trigger
             FROM notifications ORDER BY created_at",
        )?;
        let rows = stmt.query_map([], |row| {
            let tag_str: String = row.get(3)?;
            let target = ScheduledTarget {
                hour: row.get(4)?,
                minute: row.get(5)?,
            };
            let trigger_str: String = row.get(6)?;
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                tag_str,
                target,
                trigger_str,
            ))
        })?;

        let mut entries = Vec::new();
        for row in rows {
            let (handle, title, body, tag_str, target, trigger_str) = row?;
            let Some(tag) = parse_tag(&tag_str) else {
                continue;
            };
            entries.push(ScheduledEntry {
                handle,
                title,
                body,
                tag,
                target,
                trigger: parse_trigger(&trigger_str, target),
            });
        }
        Ok(entries)
    }
}

impl NotificationDelivery for ScheduleDb {
    /// The store records absolute wall-clock slots directly.
    fn trigger_preference(&self) -> TriggerPreference {
        TriggerPreference::WallClock
    }

    async fn schedule(&self, request: NotificationRequest) -> Result<String, DeliveryError> {
        self.insert(&request)
            .map_err(|e| DeliveryError::ScheduleFailed(e.to_string()))
    }

    async fn list_scheduled(&self) -> Result<Vec<ScheduledEntry>, DeliveryError> {
        self.select_all()
            .map_err(|e| DeliveryError::Unavailable(e.to_string()))
    }

    async fn cancel(&self, handle: &str) -> Result<(), DeliveryError> {
        self.conn
            .execute("DELETE FROM notifications WHERE handle = ?1", params![handle])
            .map(|_| ())
            .map_err(|e| DeliveryError::CancelFailed {
                handle: handle.to_string(),
                message: e.to_string(),
            })
    }

    async fn cancel_all(&self) -> Result<(), DeliveryError> {
        self.conn
            .execute("DELETE FROM notifications", [])
            .map(|_| ())
            .map_err(|e| DeliveryError::Unavailable(e.to_string()))
    }
}
