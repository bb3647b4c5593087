//! Loading, persisting and publishing the voice settings

use anyhow::{Context, Result};
use tokio::sync::watch;

use super::KeyValueStore;
use crate::voice::{SettingsError, VoiceSettings};

/// Storage key of the voice settings document
pub const VOICE_SETTINGS_KEY: &str = "@commeazy/voice_settings";

/// Owner of the live voice settings.
///
/// Changes go through [`update`](Self::update), which persists the new value
/// and publishes it to subscribers. Matching code takes a
/// [`snapshot`](Self::snapshot) and never sees a half-applied change.
pub struct VoiceSettingsStore<S: KeyValueStore> {
    backend: S,
    tx: watch::Sender<VoiceSettings>,
}

impl<S: KeyValueStore> VoiceSettingsStore<S> {
    /// Load settings from the backend.
    ///
    /// A missing document yields the defaults. An unreadable document is
    /// logged and replaced by the defaults so voice control stays usable.
    /// Legacy documents are normalized and written back.
    pub fn load(mut backend: S) -> Result<Self> {
        let raw = backend.get(VOICE_SETTINGS_KEY)?;

        let mut settings = match raw {
            None => VoiceSettings::default(),
            Some(json) => match serde_json::from_str::<VoiceSettings>(&json) {
                Ok(settings) => settings,
                Err(e) => {
                    tracing::warn!("Stored voice settings are invalid, using defaults: {}", e);
                    VoiceSettings::default()
                }
            },
        };

        if settings.normalize() {
            tracing::info!("Normalized stored voice settings");
            if let Err(e) = Self::write(&mut backend, &settings) {
                tracing::warn!("Failed to save normalized voice settings: {}", e);
            }
        }

        let orphaned = settings.orphaned_customizations();
        if !orphaned.is_empty() {
            tracing::debug!("Ignoring customizations for unknown commands: {:?}", orphaned);
        }

        let (tx, _rx) = watch::channel(settings);
        Ok(Self { backend, tx })
    }

    fn write(backend: &mut S, settings: &VoiceSettings) -> Result<()> {
        let json = serde_json::to_string(settings).with_context(|| "Failed to serialize voice settings")?;
        backend.set(VOICE_SETTINGS_KEY, &json)
    }

    /// Consistent copy of the current settings
    pub fn snapshot(&self) -> VoiceSettings {
        self.tx.borrow().clone()
    }

    /// Receive every future settings change
    pub fn subscribe(&self) -> watch::Receiver<VoiceSettings> {
        self.tx.subscribe()
    }

    /// Apply a change, persist it and notify subscribers.
    ///
    /// The change runs on a copy: if it fails, nothing is stored and the
    /// current settings stay as they were. Unchanged settings are not
    /// written.
    pub fn update<T>(&mut self, change: impl FnOnce(&mut VoiceSettings) -> Result<T, SettingsError>) -> Result<T> {
        let mut next = self.snapshot();
        let result = change(&mut next)?;

        if next != *self.tx.borrow() {
            Self::write(&mut self.backend, &next)?;
            self.tx.send_replace(next);
            tracing::info!("Voice settings saved");
        }
        Ok(result)
    }

    /// Replace the settings wholesale (e.g. after a restore)
    pub fn replace(&mut self, settings: VoiceSettings) -> Result<()> {
        settings.validate()?;
        self.update(|current| {
            *current = settings;
            Ok(())
        })
    }

    /// Remove the stored document and fall back to defaults
    pub fn reset(&mut self) -> Result<()> {
        self.backend.remove(VOICE_SETTINGS_KEY)?;
        self.tx.send_replace(VoiceSettings::default());
        tracing::info!("Voice settings reset to defaults");
        Ok(())
    }

    /// The underlying store
    pub fn backend(&self) -> &S {
        &self.backend
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use crate::voice::Language;

    #[test]
    fn test_missing_document_uses_defaults() {
        let store = VoiceSettingsStore::load(MemoryStore::new()).unwrap();
        assert_eq!(store.snapshot(), VoiceSettings::default());
        assert_eq!(store.backend().get(VOICE_SETTINGS_KEY).unwrap(), None);
    }

    #[test]
    fn test_invalid_document_falls_back() {
        let mut backend = MemoryStore::new();
        backend.set(VOICE_SETTINGS_KEY, "{broken").unwrap();

        let store = VoiceSettingsStore::load(backend).unwrap();
        assert_eq!(store.snapshot(), VoiceSettings::default());
    }

    #[test]
    fn test_update_persists() {
        let mut store = VoiceSettingsStore::load(MemoryStore::new()).unwrap();
        store
            .update(|s| {
                s.set_language(Language::En);
                s.add_custom_pattern("list_next", "onward")
            })
            .unwrap();

        let json = store.backend().get(VOICE_SETTINGS_KEY).unwrap().unwrap();
        let stored: VoiceSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(stored.language, Language::En);
        assert_eq!(stored.customization("list_next").unwrap().custom_patterns, vec!["onward"]);
    }

    #[test]
    fn test_failed_update_changes_nothing() {
        let mut store = VoiceSettingsStore::load(MemoryStore::new()).unwrap();
        let err = store
            .update(|s| {
                s.set_language(Language::De);
                s.set_command_enabled("session_stop", false)
            })
            .unwrap_err();

        assert!(err.to_string().contains("cannot be disabled"));
        assert_eq!(store.snapshot().language, Language::Nl);
        assert_eq!(store.backend().get(VOICE_SETTINGS_KEY).unwrap(), None);
    }

    #[test]
    fn test_legacy_document_is_normalized_and_saved() {
        let mut backend = MemoryStore::new();
        backend
            .set(
                VOICE_SETTINGS_KEY,
                r#"{"customizations":{"list_next":{"commandId":"list_next","customPatterns":["Door"]}}}"#,
            )
            .unwrap();

        let store = VoiceSettingsStore::load(backend).unwrap();
        assert_eq!(store.snapshot().customization("list_next").unwrap().custom_patterns, vec!["door"]);

        let json = store.backend().get(VOICE_SETTINGS_KEY).unwrap().unwrap();
        assert!(json.contains("\"door\""));
    }

    #[tokio::test]
    async fn test_subscribers_see_updates() {
        let mut store = VoiceSettingsStore::load(MemoryStore::new()).unwrap();
        let mut rx = store.subscribe();

        store.update(|s| s.set_command_enabled("media_play", false)).unwrap();

        rx.changed().await.unwrap();
        assert!(!rx.borrow().customization("media_play").unwrap().is_enabled);
    }

    #[test]
    fn test_reset_removes_document() {
        let mut store = VoiceSettingsStore::load(MemoryStore::new()).unwrap();
        store.update(|s| s.add_custom_pattern("list_next", "door")).unwrap();
        store.reset().unwrap();

        assert!(store.snapshot().customizations.is_empty());
        assert_eq!(store.backend().get(VOICE_SETTINGS_KEY).unwrap(), None);
    }
}
