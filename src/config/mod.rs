//! Application configuration (`~/.commeazy/config.toml`)

mod io;

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::storage::JsonFileStore;

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Log level used when neither RUST_LOG nor --verbose is given
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Names offered as call/message targets in voice sessions
    #[serde(default)]
    pub contacts: Vec<String>,

    /// Storage settings
    #[serde(default)]
    pub storage: StorageConfig,
}

/// Where app state is persisted
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Storage file; defaults to `<data dir>/commeazy/storage.json`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            contacts: Vec::new(),
            storage: StorageConfig::default(),
        }
    }
}

impl Config {
    /// Storage file to use
    pub fn storage_path(&self) -> PathBuf {
        self.storage
            .path
            .clone()
            .unwrap_or_else(JsonFileStore::default_path)
    }
}
