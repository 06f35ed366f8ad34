//! Reminder scheduling: notification time planning, collision resolution,
//! message selection, and the schedule manager that orchestrates them over
//! injected collaborator ports.

pub mod collision;
pub mod manager;
pub mod messages;
pub mod planner;
pub mod ports;

pub use collision::resolve;
pub use manager::{ReminderStates, ScheduleManager, SchedulerSettings};
pub use messages::update_message;
pub use planner::{plan_target, seconds_until_next, ScheduledTarget};
pub use ports::{
    NotificationDelivery, NotificationRequest, ReminderRegistry, ReminderTag, ScheduledEntry,
    StatusStore, Trigger, TriggerPreference,
};
