//! Reminder slot collision resolution.
//!
//! Collisions are detected by exact (hour, minute) match only, with no
//! dimension scoping, so two different dimensions requesting the same slot
//! will shift each other. The resolver performs at most one +30 minute
//! shift and does not re-check the shifted slot against further
//! collisions. Both are deliberate carry-overs from the source behavior;
//! downstream cadence was built against them.

use super::planner::ScheduledTarget;

/// Adjust a proposed slot so it does not exactly match an existing one.
///
/// Returns the target unchanged when it is free. On a collision, shifts
/// once by +30 minutes, rolling the hour (and wrapping past midnight) when
/// the minute overflows.
pub fn resolve(target: ScheduledTarget, existing: &[ScheduledTarget]) -> ScheduledTarget {
    if !existing.contains(&target) {
        return target;
    }

    let mut minute = target.minute + 30;
    let mut hour = target.hour;
    if minute >= 60 {
        minute -= 60;
        hour = (hour + 1) % 24;
    }
    ScheduledTarget { hour, minute }
}
