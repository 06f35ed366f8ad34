//! Reminder registry implementations.
//!
//! The registry is the persisted set of reminder tags currently "on". The
//! production implementation keeps it as a JSON array in the OS secure
//! store, mirroring how user-local state was kept on device; the
//! in-memory implementation backs tests and ephemeral runs.

use std::cell::RefCell;
use std::collections::BTreeSet;

use crate::error::RegistryError;
use crate::notify::{ReminderRegistry, ReminderTag};

const KEYRING_SERVICE: &str = "moodlets";
const KEYRING_USER: &str = "reminders";

/// Registry persisted in the OS secure store via keyring.
pub struct KeyringRegistry {
    entry: keyring::Entry,
}

impl KeyringRegistry {
    /// Open the registry entry.
    pub fn open() -> Result<Self, RegistryError> {
        let entry = keyring::Entry::new(KEYRING_SERVICE, KEYRING_USER)
            .map_err(|e| RegistryError::ReadFailed(e.to_string()))?;
        Ok(Self { entry })
    }
}

impl ReminderRegistry for KeyringRegistry {
    async fn read(&self) -> Result<BTreeSet<ReminderTag>, RegistryError> {
        match self.entry.get_password() {
            Ok(json) => {
                let names: Vec<String> = serde_json::from_str(&json)
                    .map_err(|e| RegistryError::ReadFailed(e.to_string()))?;
                Ok(names
                    .iter()
                    .filter_map(|name| ReminderTag::parse(name).ok())
                    .collect())
            }
            // No entry yet means nothing is enabled
            Err(keyring::Error::NoEntry) => Ok(BTreeSet::new()),
            Err(e) => Err(RegistryError::ReadFailed(e.to_string())),
        }
    }

    async fn write(&self, tags: &BTreeSet<ReminderTag>) -> Result<(), RegistryError> {
        let names: Vec<&str> = tags.iter().map(ReminderTag::as_str).collect();
        let json = serde_json::to_string(&names)
            .map_err(|e| RegistryError::WriteFailed(e.to_string()))?;
        self.entry
            .set_password(&json)
            .map_err(|e| RegistryError::WriteFailed(e.to_string()))
    }
}

/// In-memory registry for tests and ephemeral runs.
#[derive(Debug, Default)]
pub struct MemoryRegistry {
    tags: RefCell<BTreeSet<ReminderTag>>,
}

impl MemoryRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry pre-populated with the given tags.
    pub fn with_tags(tags: impl IntoIterator<Item = ReminderTag>) -> Self {
        Self {
            tags: RefCell::new(tags.into_iter().collect()),
        }
    }
}

impl ReminderRegistry for MemoryRegistry {
    async fn read(&self) -> Result<BTreeSet<ReminderTag>, RegistryError> {
        Ok(self.tags.borrow().clone())
    }

    async fn write(&self, tags: &BTreeSet<ReminderTag>) -> Result<(), RegistryError> {
        *self.tags.borrow_mut() = tags.clone();
        Ok(())
    }
}
