//! Core error types for moodlets-core.
//!
//! This module defines a comprehensive error hierarchy using thiserror
//! for better error handling and reporting across the library.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for moodlets-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Storage-related errors
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Notification delivery errors
    #[error("Delivery error: {0}")]
    Delivery(#[from] DeliveryError),

    /// Reminder registry errors
    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with context
    #[error("{0}")]
    Custom(String),
}

/// Storage-specific errors.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Failed to open database connection
    #[error("Failed to open database at {path}: {source}")]
    OpenFailed {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// Query execution failed
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Migration failed
    #[error("Database migration failed: {0}")]
    MigrationFailed(String),

    /// Database is locked
    #[error("Database is locked")]
    Locked,
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Unknown configuration key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),
}

/// Notification delivery errors.
#[derive(Error, Debug)]
pub enum DeliveryError {
    /// The platform denied notification permission. Operations that hit
    /// this must abort without writing to the reminder registry.
    #[error("Notification permission denied")]
    PermissionDenied,

    /// Scheduling a notification failed
    #[error("Failed to schedule notification: {0}")]
    ScheduleFailed(String),

    /// Cancelling a notification failed
    #[error("Failed to cancel notification '{handle}': {message}")]
    CancelFailed { handle: String, message: String },

    /// The delivery backend is unavailable
    #[error("Delivery backend unavailable: {0}")]
    Unavailable(String),
}

/// Reminder registry errors.
#[derive(Error, Debug)]
pub enum RegistryError {
    /// Reading the registry failed
    #[error("Failed to read reminder registry: {0}")]
    ReadFailed(String),

    /// Writing the registry failed
    #[error("Failed to write reminder registry: {0}")]
    WriteFailed(String),
}

/// Validation errors.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// A status value was outside [0, 1]
    #[error("Value {value} for '{field}' is outside [0.0, 1.0]")]
    OutOfRange { field: String, value: f64 },

    /// A wall-clock component was out of bounds
    #[error("Invalid clock time {hour:02}:{minute:02}")]
    InvalidClockTime { hour: u32, minute: u32 },

    /// An identifier could not be parsed
    #[error("Unknown identifier: {0}")]
    UnknownIdentifier(String),
}

// Helper implementations for converting from other error types

impl From<rusqlite::Error> for StorageError {
    fn from(err: rusqlite::Error) -> Self {
        match &err {
            rusqlite::Error::SqliteFailure(err, _msg) => {
                if err.code == rusqlite::ErrorCode::DatabaseLocked {
                    StorageError::Locked
                } else {
                    StorageError::QueryFailed(err.to_string())
                }
            }
            _ => StorageError::QueryFailed(err.to_string()),
        }
    }
}

impl From<Box<dyn std::error::Error + Send + Sync>> for CoreError {
    fn from(err: Box<dyn std::error::Error + Send + Sync>) -> Self {
        CoreError::Custom(err.to_string())
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
