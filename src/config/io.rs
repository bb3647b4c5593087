//! Configuration file I/O operations

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::Config;
use crate::storage::{lock_for_write, write_atomically};

impl Config {
    /// Get the global config directory path (~/.commeazy/)
    pub fn global_config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".commeazy")
    }

    /// Get the global config file path (~/.commeazy/config.toml)
    pub fn global_config_path() -> PathBuf {
        Self::global_config_dir().join("config.toml")
    }

    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Load configuration from an explicit path, or from the global config.
    ///
    /// The global config is created with defaults if it does not exist yet.
    /// An explicit path must exist.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::from_file(path);
        }

        let global_path = Self::global_config_path();
        if !global_path.exists() {
            Self::write_default(&global_path)?;
        }
        Self::from_file(&global_path)
    }

    /// Save configuration to a file with atomic write and file locking.
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).with_context(|| "Failed to serialize config")?;

        let _lock = lock_for_write(path)?;
        write_atomically(path, content.as_bytes())
            .with_context(|| format!("Failed to save config file: {}", path.display()))
    }

    /// Create a default config file unless another process got there first
    fn write_default(path: &Path) -> Result<()> {
        let result = Self::default().save_to_file(path);
        match result {
            Ok(()) => {
                tracing::info!("Created {}", path.display());
                Ok(())
            }
            // Another process may have created it concurrently
            Err(_) if path.exists() => Ok(()),
            Err(e) => Err(e),
        }
    }
}
