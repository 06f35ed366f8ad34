//! # Moodlets Core Library
//!
//! This library provides the core business logic for Moodlets, a well-being
//! tracker built around six status dimensions (hunger, thirst, energy,
//! hygiene, social, fun) that decay over time. It implements a CLI-first
//! philosophy where all operations are available via a standalone CLI
//! binary, with any GUI being a thin layer over the same core library.
//!
//! ## Architecture
//!
//! - **Status Model**: A pure decay calculator that turns a stored status
//!   snapshot plus elapsed time into the current status vector
//! - **Reminder Scheduling**: Tier classification, notification time
//!   planning, and single-shift collision resolution, orchestrated by a
//!   schedule manager over injected collaborator ports
//! - **Storage**: SQLite-based status log and pending-notification store,
//!   TOML-based configuration, keyring-backed reminder registry
//!
//! ## Key Components
//!
//! - [`StatusVector`]: The six-dimension well-being state
//! - [`ScheduleManager`]: Reminder orchestration over injected ports
//! - [`Database`]: Status observation persistence
//! - [`Config`]: Application configuration management

pub mod error;
pub mod notify;
pub mod status;
pub mod storage;

pub use error::{ConfigError, CoreError, DeliveryError, RegistryError, StorageError, ValidationError};
pub use notify::{
    resolve, seconds_until_next, NotificationDelivery, NotificationRequest, ReminderRegistry,
    ReminderStates, ReminderTag, ScheduleManager, ScheduledEntry, ScheduledTarget,
    SchedulerSettings, StatusStore, Trigger, TriggerPreference,
};
pub use status::{classify, decay, DecayRate, DecayRates, DelayTable, Dimension, Snapshot, StatusVector, Tier};
pub use storage::{Config, Database, KeyringRegistry, MemoryRegistry, ScheduleDb};
