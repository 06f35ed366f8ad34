mod config;
pub mod database;
pub mod registry;
pub mod schedule_db;

pub use config::Config;
pub use database::Database;
pub use registry::{KeyringRegistry, MemoryRegistry};
pub use schedule_db::ScheduleDb;

use std::path::PathBuf;

/// Returns `~/.config/moodlets[-dev]/` based on MOODLETS_ENV.
///
/// Set MOODLETS_ENV=dev to use the development data directory.
///
/// # Errors
/// Returns an error if the home directory cannot be determined or if
/// creating the config directory fails.
pub fn data_dir() -> Result<PathBuf, Box<dyn std::error::Error>> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("MOODLETS_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("moodlets-dev")
    } else {
        base_dir.join("moodlets")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
