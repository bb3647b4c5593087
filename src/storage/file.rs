//! JSON file backed key-value store

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use fs2::FileExt;
use serde_json::{Map, Value};

use super::KeyValueStore;

/// Key-value store persisted as a single JSON object.
///
/// Every write re-reads the file under an exclusive lock and replaces it
/// atomically, so the CLI and the app can share one storage file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Default storage file (`<data dir>/commeazy/storage.json`)
    pub fn default_path() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("commeazy")
            .join("storage.json")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_map(&self) -> Result<Map<String, Value>> {
        if !self.path.exists() {
            return Ok(Map::new());
        }

        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read storage file: {}", self.path.display()))?;
        if content.trim().is_empty() {
            return Ok(Map::new());
        }

        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse storage file: {}", self.path.display()))
    }

    /// Apply `change` to the stored map under the file lock
    fn modify<T>(&self, change: impl FnOnce(&mut Map<String, Value>) -> T) -> Result<T> {
        let _lock = lock_for_write(&self.path)?;

        let mut map = self.read_map()?;
        let result = change(&mut map);

        let content = serde_json::to_string_pretty(&Value::Object(map))
            .with_context(|| "Failed to serialize storage")?;
        write_atomically(&self.path, content.as_bytes())?;

        Ok(result)
    }
}

/// `<path>.<suffix>` next to `path`, e.g. `storage.json.lock`
fn sibling(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".");
    name.push(suffix);
    path.with_file_name(name)
}

/// Take the exclusive write lock for `path`.
///
/// The lock lives in a separate `.lock` file so the data file can be
/// replaced by rename while it is held. It is released when the returned
/// file is dropped.
pub(crate) fn lock_for_write(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let lock_path = sibling(path, "lock");
    let lock_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&lock_path)
        .with_context(|| format!("Failed to create lock file: {}", lock_path.display()))?;

    lock_file
        .lock_exclusive()
        .with_context(|| format!("Failed to lock {}", path.display()))?;

    Ok(lock_file)
}

/// Replace `path` with `contents` via a synced temp file and rename.
///
/// Readers see either the old or the new contents, never a partial write.
pub(crate) fn write_atomically(path: &Path, contents: &[u8]) -> Result<()> {
    let temp_path = sibling(path, "tmp");
    let mut temp_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&temp_path)
        .with_context(|| format!("Failed to create temp file: {}", temp_path.display()))?;

    temp_file
        .write_all(contents)
        .with_context(|| format!("Failed to write {}", temp_path.display()))?;
    temp_file
        .sync_all()
        .with_context(|| format!("Failed to sync {}", temp_path.display()))?;

    std::fs::rename(&temp_path, path)
        .with_context(|| format!("Failed to replace {}", path.display()))?;

    Ok(())
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let map = self.read_map()?;
        Ok(map.get(key).map(|value| match value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.modify(|map| {
            map.insert(key.to_string(), Value::String(value.to_string()));
        })?;
        tracing::debug!("Stored '{}' in {}", key, self.path.display());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<bool> {
        if !self.path.exists() {
            return Ok(false);
        }
        self.modify(|map| map.remove(key).is_some())
    }
}
