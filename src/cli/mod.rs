//! CLI command implementations

pub mod list;
pub mod matching;
pub mod session;
pub mod settings;

use std::path::Path;

use anyhow::Result;

use commeazy_voice::storage::{JsonFileStore, VoiceSettingsStore};

/// Open the voice settings kept in the storage file
pub fn open_store(storage_path: &Path) -> Result<VoiceSettingsStore<JsonFileStore>> {
    VoiceSettingsStore::load(JsonFileStore::new(storage_path))
}
