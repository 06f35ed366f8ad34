//! TOML-based application configuration.
//!
//! Stores the tunable pieces of the reminder model:
//! - Per-dimension decay rates
//! - The tier delay table
//! - The daily reminder slot
//! - Notification titles and the daily reminder body
//!
//! Configuration is stored at `~/.config/moodlets/config.toml`. Every
//! field defaults to the values the original reminder cadence was tuned
//! against, so a missing or partial file is always usable.

use serde::{Deserialize, Serialize};

use super::data_dir;
use crate::error::ConfigError;
use crate::notify::{ScheduledTarget, SchedulerSettings};
use crate::status::{DecayRates, DelayTable};

/// Daily check-in reminder slot.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DailyConfig {
    #[serde(default = "default_daily_hour")]
    pub hour: u32,
    #[serde(default = "default_daily_minute")]
    pub minute: u32,
}

impl Default for DailyConfig {
    fn default() -> Self {
        Self {
            hour: default_daily_hour(),
            minute: default_daily_minute(),
        }
    }
}

/// Notification text configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessagesConfig {
    #[serde(default = "default_update_title")]
    pub update_title: String,
    #[serde(default = "default_daily_title")]
    pub daily_title: String,
    #[serde(default = "default_daily_body")]
    pub daily_body: String,
}

impl Default for MessagesConfig {
    fn default() -> Self {
        Self {
            update_title: default_update_title(),
            daily_title: default_daily_title(),
            daily_body: default_daily_body(),
        }
    }
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/moodlets/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub decay: DecayRates,
    #[serde(default)]
    pub delays: DelayTable,
    #[serde(default)]
    pub daily: DailyConfig,
    #[serde(default)]
    pub messages: MessagesConfig,
}

// Default functions
fn default_daily_hour() -> u32 {
    9
}
fn default_daily_minute() -> u32 {
    0
}
fn default_update_title() -> String {
    "❤️ Moodlets Update! ❤️".to_string()
}
fn default_daily_title() -> String {
    "❤️ Moodlets Reminder! ❤️".to_string()
}
fn default_daily_body() -> String {
    "How are you feeling today?".to_string()
}

impl Config {
    /// Load the configuration, falling back to defaults when the file is
    /// missing or unreadable.
    pub fn load() -> Self {
        let Ok(dir) = data_dir() else {
            return Self::default();
        };
        let path = dir.join("config.toml");
        match std::fs::read_to_string(&path) {
            Ok(contents) => toml::from_str(&contents).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }

    /// Save the configuration to disk.
    pub fn save(&self) -> Result<(), ConfigError> {
        let dir = data_dir().map_err(|e| ConfigError::SaveFailed {
            path: "~/.config/moodlets".into(),
            message: e.to_string(),
        })?;
        let path = dir.join("config.toml");
        let contents = toml::to_string_pretty(self).map_err(|e| ConfigError::SaveFailed {
            path: path.clone(),
            message: e.to_string(),
        })?;
        std::fs::write(&path, contents).map_err(|e| ConfigError::SaveFailed {
            path,
            message: e.to_string(),
        })
    }

    /// Get a config value by key.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "daily_hour" => Some(self.daily.hour.to_string()),
            "daily_minute" => Some(self.daily.minute.to_string()),
            "update_title" => Some(self.messages.update_title.clone()),
            "daily_title" => Some(self.messages.daily_title.clone()),
            "daily_body" => Some(self.messages.daily_body.clone()),
            _ => None,
        }
    }

    /// Set a config value by key and persist it.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        match key {
            "daily_hour" => {
                let hour: u32 = parse_value(key, value)?;
                if hour > 23 {
                    return Err(ConfigError::InvalidValue {
                        key: key.to_string(),
                        message: "hour must be 0-23".to_string(),
                    });
                }
                self.daily.hour = hour;
            }
            "daily_minute" => {
                let minute: u32 = parse_value(key, value)?;
                if minute > 59 {
                    return Err(ConfigError::InvalidValue {
                        key: key.to_string(),
                        message: "minute must be 0-59".to_string(),
                    });
                }
                self.daily.minute = minute;
            }
            "update_title" => self.messages.update_title = value.to_string(),
            "daily_title" => self.messages.daily_title = value.to_string(),
            "daily_body" => self.messages.daily_body = value.to_string(),
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        }
        self.save()
    }

    /// The scheduler settings this configuration describes.
    pub fn scheduler_settings(&self) -> SchedulerSettings {
        SchedulerSettings {
            decay: self.decay,
            delays: self.delays,
            daily_target: ScheduledTarget {
                hour: self.daily.hour,
                minute: self.daily.minute,
            },
            update_title: self.messages.update_title.clone(),
            daily_title: self.messages.daily_title.clone(),
            daily_body: self.messages.daily_body.clone(),
            seed: None,
        }
    }
}

fn parse_value<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value.parse().map_err(|_| ConfigError::InvalidValue {
        key: key.to_string(),
        message: format!("could not parse '{value}'"),
    })
}
