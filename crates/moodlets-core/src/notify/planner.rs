//! Notification time planning.
//!
//! Turns "now + tier delay" into a wall-clock (hour, minute) target. The
//! target carries no date component; the delivery collaborator resolves
//! "next occurrence", and [`seconds_until_next`] does that arithmetic for
//! platforms that only take relative triggers.

use chrono::{Duration, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::status::{DelayTable, Dimension};

/// A wall-clock slot proposed for a reminder. No date component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScheduledTarget {
    /// Hour of day, 0-23.
    pub hour: u32,
    /// Minute, 0-59.
    pub minute: u32,
}

impl std::fmt::Display for ScheduledTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// Plan the reminder slot for a dimension at its current value.
///
/// Classifies the value, looks up the delay, adds it to `now`, and keeps
/// only the resulting hour and minute (seconds and date discarded).
pub fn plan_target(
    dimension: Dimension,
    value: f64,
    table: &DelayTable,
    now: NaiveDateTime,
) -> ScheduledTarget {
    let delay_minutes = table.delay_minutes(dimension, value);
    let target = now + Duration::minutes(delay_minutes as i64);
    ScheduledTarget {
        hour: target.hour(),
        minute: target.minute(),
    }
}

/// Seconds from `now` until the next occurrence of the target clock time.
///
/// If the target time-of-day has already passed today, rolls to the same
/// time tomorrow.
pub fn seconds_until_next(target: ScheduledTarget, now: NaiveDateTime) -> i64 {
    let today = now
        .date()
        .and_hms_opt(target.hour, target.minute, 0)
        .unwrap_or(now);
    let next = if now > today {
        today + Duration::days(1)
    } else {
        today
    };
    (next - now).num_seconds()
}
