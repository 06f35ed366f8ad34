//! SQLite-based status observation storage.
//!
//! Every explicit save appends one row; the latest row is the
//! authoritative [`Snapshot`] the decay model reads. Rows are never
//! mutated afterwards.

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension};

use super::data_dir;
use crate::error::StorageError;
use crate::notify::StatusStore;
use crate::status::{Snapshot, StatusVector};

/// SQLite database for the status observation log.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open the database at `~/.config/moodlets/moodlets.db`.
    ///
    /// Creates the database file and schema if they don't exist.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or migrated.
    pub fn open() -> Result<Self, StorageError> {
        let path = data_dir()
            .map_err(|e| StorageError::QueryFailed(e.to_string()))?
            .join("moodlets.db");
        let conn = Connection::open(&path).map_err(|source| StorageError::OpenFailed {
            path,
            source,
        })?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    /// Open an in-memory database (for tests and ephemeral runs).
    pub fn open_memory() -> Result<Self, StorageError> {
        let conn = Connection::open_in_memory().map_err(StorageError::from)?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    fn migrate(&self) -> Result<(), StorageError> {
        self.conn
            .execute_batch(
                "CREATE TABLE IF NOT EXISTS status_log (
                    id         INTEGER PRIMARY KEY AUTOINCREMENT,
                    created_at TEXT NOT NULL,
                    hunger     REAL NOT NULL,
                    thirst     REAL NOT NULL,
                    energy     REAL NOT NULL,
                    hygiene    REAL NOT NULL,
                    social     REAL NOT NULL,
                    fun        REAL NOT NULL
                );

                CREATE INDEX IF NOT EXISTS idx_status_log_created_at
                    ON status_log(created_at);",
            )
            .map_err(|e| StorageError::MigrationFailed(e.to_string()))
    }

    /// Append one status observation.
    pub fn record_status(
        &self,
        vector: &StatusVector,
        created_at: DateTime<Utc>,
    ) -> Result<i64, StorageError> {
        let vector = vector.clamped();
        self.conn.execute(
            "INSERT INTO status_log
                (created_at, hunger, thirst, energy, hygiene, social, fun)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                created_at.to_rfc3339(),
                vector.hunger,
                vector.thirst,
                vector.energy,
                vector.hygiene,
                vector.social,
                vector.fun,
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// The most recent observation, if any.
    pub fn latest(&self) -> Result<Option<Snapshot>, StorageError> {
        let row = self
            .conn
            .query_row(
                "SELECT created_at, hunger, thirst, energy, hygiene, social, fun
                 FROM status_log ORDER BY id DESC LIMIT 1",
                [],
                row_to_snapshot,
            )
            .optional()?;
        Ok(row)
    }

    /// The most recent observations, newest first.
    pub fn recent(&self, limit: u32) -> Result<Vec<Snapshot>, StorageError> {
        let mut stmt = self.conn.prepare(
            "SELECT created_at, hunger, thirst, energy, hygiene, social, fun
             FROM status_log ORDER BY id DESC LIMIT ?1",
        )?;
        let rows = stmt.query_map(params![limit], row_to_snapshot)?;
        let mut snapshots = Vec::new();
        for row in rows {
            snapshots.push(row?);
        }
        Ok(snapshots)
    }

    /// Delete every observation. Caller-driven; used on account wipe.
    pub fn clear(&self) -> Result<(), StorageError> {
        self.conn.execute("DELETE FROM status_log", [])?;
        Ok(())
    }
}

fn row_to_snapshot(row: &rusqlite::Row<'_>) -> rusqlite::Result<Snapshot> {
    let created_at: String = row.get(0)?;
    let created_at = DateTime::parse_from_rfc3339(&created_at)
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|_| Utc::now());
    Ok(Snapshot {
        vector: StatusVector {
            hunger: row.get(1)?,
            thirst: row.get(2)?,
            energy: row.get(3)?,
            hygiene: row.get(4)?,
            social: row.get(5)?,
            fun: row.get(6)?,
        },
        created_at,
    })
}

impl StatusStore for Database {
    async fn latest_snapshot(&self) -> Result<Option<Snapshot>, StorageError> {
        self.latest()
    }
}
