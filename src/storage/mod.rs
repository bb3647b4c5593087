//! Persistent key-value storage for app state
//!
//! The app keeps small documents (such as the voice settings) as JSON strings
//! under fixed keys. [`JsonFileStore`] keeps all keys in one JSON file,
//! [`MemoryStore`] keeps them in memory for tests and previews.

mod file;
mod voice;

use std::collections::HashMap;

use anyhow::Result;

pub(crate) use file::{lock_for_write, write_atomically};
pub use file::JsonFileStore;
pub use voice::{VoiceSettingsStore, VOICE_SETTINGS_KEY};

/// A string key-value store
pub trait KeyValueStore {
    /// Read the value stored under `key`
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Delete `key`. Returns `false` if it was not present.
    fn remove(&mut self, key: &str) -> Result<bool>;
}

/// In-memory store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<bool> {
        Ok(self.values.remove(key).is_some())
    }
}
