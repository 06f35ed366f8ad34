//! Collaborator ports the schedule manager depends on.
//!
//! The core computes *when* and *whether* to request delivery; the
//! implementations behind these traits own the actual mechanisms
//! (OS-level alerts, secure local storage, the status document store).
//! Ports are injected into the manager, never reached as ambient global
//! state, so tests substitute in-memory fakes.

use serde::{Deserialize, Serialize};

use crate::error::{DeliveryError, RegistryError, StorageError, ValidationError};
use crate::status::{Dimension, Snapshot};

use super::planner::ScheduledTarget;

/// Identifies what a scheduled notification is for.
///
/// Every scheduled entry is tagged at creation time, and cancellation
/// matches on the tag exactly. A tag appears at most once in the reminder
/// registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ReminderTag {
    /// The singleton recurring daily check-in reminder.
    Daily,
    /// A per-dimension status reminder.
    Status(Dimension),
}

impl ReminderTag {
    /// Stable string identifier, as persisted in the registry.
    pub fn as_str(&self) -> &'static str {
        match self {
            ReminderTag::Daily => "daily",
            ReminderTag::Status(dimension) => dimension.as_str(),
        }
    }

    /// Parse a tag from its string identifier.
    pub fn parse(s: &str) -> Result<ReminderTag, ValidationError> {
        if s == "daily" {
            Ok(ReminderTag::Daily)
        } else {
            Dimension::parse(s).map(ReminderTag::Status)
        }
    }

    /// The full registry contents when the user opts into everything.
    pub fn all() -> impl Iterator<Item = ReminderTag> {
        std::iter::once(ReminderTag::Daily).chain(Dimension::ALL.into_iter().map(ReminderTag::Status))
    }
}

impl std::fmt::Display for ReminderTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which trigger form the delivery platform supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerPreference {
    /// The platform takes "fire in N seconds" triggers.
    RelativeSeconds,
    /// The platform takes absolute (hour, minute) triggers.
    WallClock,
}

/// Platform trigger for a scheduled notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Trigger {
    /// Fire after a relative number of seconds.
    AfterSeconds { seconds: i64, repeats: bool },
    /// Fire at the next occurrence of a wall-clock time.
    AtClockTime { hour: u32, minute: u32, repeats: bool },
}

impl Trigger {
    /// Whether the notification repeats.
    pub fn repeats(&self) -> bool {
        match self {
            Trigger::AfterSeconds { repeats, .. } => *repeats,
            Trigger::AtClockTime { repeats, .. } => *repeats,
        }
    }
}

/// A delivery request produced by the schedule manager.
#[derive(Debug, Clone, PartialEq)]
pub struct NotificationRequest {
    pub title: String,
    pub body: String,
    pub tag: ReminderTag,
    /// The canonical wall-clock slot, kept regardless of trigger form so
    /// later collision checks can see it.
    pub target: ScheduledTarget,
    pub trigger: Trigger,
}

/// A notification the delivery collaborator currently has scheduled.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduledEntry {
    pub handle: String,
    pub title: String,
    pub body: String,
    pub tag: ReminderTag,
    pub target: ScheduledTarget,
    pub trigger: Trigger,
}

/// The notification-delivery collaborator.
///
/// Implementations own the mechanism that actually fires an OS-level alert
/// at the scheduled time; the core only records what has been requested.
pub trait NotificationDelivery {
    /// Which trigger form this platform wants.
    fn trigger_preference(&self) -> TriggerPreference;

    /// Schedule a notification; returns an opaque handle.
    fn schedule(
        &self,
        request: NotificationRequest,
    ) -> impl std::future::Future<Output = Result<String, DeliveryError>>;

    /// Everything currently scheduled.
    fn list_scheduled(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<ScheduledEntry>, DeliveryError>>;

    /// Cancel one scheduled notification by handle.
    fn cancel(
        &self,
        handle: &str,
    ) -> impl std::future::Future<Output = Result<(), DeliveryError>>;

    /// Cancel everything.
    fn cancel_all(&self) -> impl std::future::Future<Output = Result<(), DeliveryError>>;
}

/// The persisted set of reminder tags currently considered "on".
///
/// Authoritative truth for "is X enabled"; last write wins.
pub trait ReminderRegistry {
    /// Read the current tag set.
    fn read(
        &self,
    ) -> impl std::future::Future<Output = Result<std::collections::BTreeSet<ReminderTag>, RegistryError>>;

    /// Replace the tag set.
    fn write(
        &self,
        tags: &std::collections::BTreeSet<ReminderTag>,
    ) -> impl std::future::Future<Output = Result<(), RegistryError>>;
}

/// Read-only access to the last persisted status observation.
pub trait StatusStore {
    /// The latest snapshot, if any observation has been recorded.
    fn latest_snapshot(
        &self,
    ) -> impl std::future::Future<Output = Result<Option<Snapshot>, StorageError>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_round_trip() {
        for tag in ReminderTag::all() {
            assert_eq!(ReminderTag::parse(tag.as_str()).unwrap(), tag);
        }
        assert!(ReminderTag::parse("weekly").is_err());
    }

    #[test]
    fn test_all_tags_count() {
        assert_eq!(ReminderTag::all().count(), 7);
    }

    #[test]
    fn test_trigger_repeats() {
        let t = Trigger::AfterSeconds { seconds: 60, repeats: true };
        assert!(t.repeats());
        let t = Trigger::AtClockTime { hour: 9, minute: 0, repeats: false };
        assert!(!t.repeats());
    }
}
