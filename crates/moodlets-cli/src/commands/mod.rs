pub mod config;
pub mod remind;
pub mod schedule;
pub mod status;

use moodlets_core::{Config, Database, KeyringRegistry, ScheduleDb, ScheduleManager};

/// Wire a schedule manager over the production ports: the SQLite
/// notification store, the keyring-backed registry, and the status log.
pub(crate) fn build_manager(
) -> Result<ScheduleManager<ScheduleDb, KeyringRegistry, Database>, Box<dyn std::error::Error>> {
    let config = Config::load();
    let delivery = ScheduleDb::open()?;
    let registry = KeyringRegistry::open()?;
    let store = Database::open()?;
    Ok(ScheduleManager::new(
        delivery,
        registry,
        store,
        config.scheduler_settings(),
    ))
}

/// Single-threaded runtime for blocking on manager operations.
pub(crate) fn runtime() -> Result<tokio::runtime::Runtime, std::io::Error> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
}
