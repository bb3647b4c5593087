//! Voice control settings (the persisted aggregate)

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::catalog::command_by_id;
use super::command::VoiceCommand;
use super::customization::{normalize_pattern, VoiceCommandCustomization};
use super::language::Language;

/// Error type for settings changes made from the settings screen
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SettingsError {
    #[error("Unknown voice command: {0}")]
    UnknownCommand(String),

    #[error("Voice command '{0}' cannot be disabled")]
    CannotDisable(String),

    #[error("Voice phrase is empty")]
    EmptyPattern,

    #[error("'{pattern}' is not a default phrase of voice command '{command_id}'")]
    NotADefaultPattern { command_id: String, pattern: String },

    #[error("{field} must be between 0.0 and 1.0, got {value}")]
    ThresholdOutOfRange { field: &'static str, value: f32 },
}

/// Voice control settings for one user/device
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoiceSettings {
    /// Master switch: when off, transcripts must not be matched at all
    #[serde(default = "default_enabled")]
    pub is_enabled: bool,

    /// Active language for command phrases
    #[serde(default)]
    pub language: Language,

    /// User overrides keyed by command id
    #[serde(default)]
    pub customizations: BTreeMap<String, VoiceCommandCustomization>,

    /// How long a listening session waits for speech (milliseconds)
    #[serde(default = "default_session_timeout_ms")]
    pub session_timeout_ms: u64,

    /// Minimum recognizer confidence to accept a transcript (0.0-1.0)
    #[serde(default = "default_confidence_threshold")]
    pub confidence_threshold: f32,

    /// Minimum similarity for fuzzy name matching (0.0-1.0)
    #[serde(default = "default_fuzzy_matching_threshold")]
    pub fuzzy_matching_threshold: f32,

    /// Allow approximate matches when resolving spoken names
    #[serde(default = "default_enabled")]
    pub fuzzy_matching_enabled: bool,
}

fn default_enabled() -> bool {
    true
}

fn default_session_timeout_ms() -> u64 {
    30_000
}

fn default_confidence_threshold() -> f32 {
    0.6
}

fn default_fuzzy_matching_threshold() -> f32 {
    0.7
}

impl Default for VoiceSettings {
    fn default() -> Self {
        Self {
            is_enabled: default_enabled(),
            language: Language::default(),
            customizations: BTreeMap::new(),
            session_timeout_ms: default_session_timeout_ms(),
            confidence_threshold: default_confidence_threshold(),
            fuzzy_matching_threshold: default_fuzzy_matching_threshold(),
            fuzzy_matching_enabled: default_enabled(),
        }
    }
}

fn lookup(command_id: &str) -> Result<&'static VoiceCommand, SettingsError> {
    command_by_id(command_id).ok_or_else(|| SettingsError::UnknownCommand(command_id.to_string()))
}

fn check_threshold(field: &'static str, value: f32) -> Result<(), SettingsError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(SettingsError::ThresholdOutOfRange { field, value })
    }
}

impl VoiceSettings {
    /// Customization for a command, if the user has one
    pub fn customization(&self, command_id: &str) -> Option<&VoiceCommandCustomization> {
        self.customizations.get(command_id)
    }

    fn customization_mut(&mut self, command_id: &str) -> &mut VoiceCommandCustomization {
        self.customizations
            .entry(command_id.to_string())
            .or_insert_with(|| VoiceCommandCustomization::new(command_id))
    }

    /// Drop a customization that no longer changes anything, so that
    /// "no entry" keeps meaning "catalog defaults".
    fn prune(&mut self, command_id: &str) {
        if self.customizations.get(command_id).is_some_and(|c| c.is_noop()) {
            self.customizations.remove(command_id);
        }
    }

    /// Add a synonym to a command.
    ///
    /// The phrase is normalized (lowercase, single spaces) before it is
    /// stored. Returns `Ok(false)` if the synonym was already present.
    pub fn add_custom_pattern(&mut self, command_id: &str, pattern: &str) -> Result<bool, SettingsError> {
        lookup(command_id)?;
        let pattern = normalize_pattern(pattern);
        if pattern.is_empty() {
            return Err(SettingsError::EmptyPattern);
        }

        let custom = self.customization_mut(command_id);
        if custom.custom_patterns.contains(&pattern) {
            return Ok(false);
        }
        tracing::info!("Adding voice synonym '{}' to {}", pattern, command_id);
        custom.custom_patterns.push(pattern);
        Ok(true)
    }

    /// Remove a synonym from a command. Returns `false` if it was not there.
    pub fn remove_custom_pattern(&mut self, command_id: &str, pattern: &str) -> bool {
        let pattern = normalize_pattern(pattern);
        let Some(custom) = self.customizations.get_mut(command_id) else {
            return false;
        };

        let before = custom.custom_patterns.len();
        custom.custom_patterns.retain(|p| normalize_pattern(p) != pattern);
        let removed = custom.custom_patterns.len() != before;
        if removed {
            tracing::info!("Removed voice synonym '{}' from {}", pattern, command_id);
        }
        self.prune(command_id);
        removed
    }

    /// Switch off one of a command's default phrases.
    ///
    /// The phrase must be a default of the command in some language.
    /// Returns `Ok(false)` if it was already switched off.
    pub fn disable_pattern(&mut self, command_id: &str, pattern: &str) -> Result<bool, SettingsError> {
        let command = lookup(command_id)?;
        let pattern = normalize_pattern(pattern);
        if pattern.is_empty() {
            return Err(SettingsError::EmptyPattern);
        }
        if !command.has_default_pattern(&pattern) {
            return Err(SettingsError::NotADefaultPattern {
                command_id: command_id.to_string(),
                pattern,
            });
        }

        let custom = self.customization_mut(command_id);
        if custom.disabled_patterns.contains(&pattern) {
            return Ok(false);
        }
        tracing::info!("Disabling voice phrase '{}' of {}", pattern, command_id);
        custom.disabled_patterns.push(pattern);
        Ok(true)
    }

    /// Switch a default phrase back on. Returns `false` if it was not off.
    pub fn enable_pattern(&mut self, command_id: &str, pattern: &str) -> bool {
        let pattern = normalize_pattern(pattern);
        let Some(custom) = self.customizations.get_mut(command_id) else {
            return false;
        };

        let before = custom.disabled_patterns.len();
        custom.disabled_patterns.retain(|p| *p != pattern);
        let restored = custom.disabled_patterns.len() != before;
        if restored {
            tracing::info!("Re-enabled voice phrase '{}' of {}", pattern, command_id);
        }
        self.prune(command_id);
        restored
    }

    /// Turn a command on or off.
    ///
    /// Essential commands (stop, help, confirm, cancel) refuse to be
    /// turned off.
    pub fn set_command_enabled(&mut self, command_id: &str, enabled: bool) -> Result<(), SettingsError> {
        let command = lookup(command_id)?;
        if !enabled && !command.can_disable {
            return Err(SettingsError::CannotDisable(command_id.to_string()));
        }

        tracing::info!(
            "Voice command {} {}",
            command_id,
            if enabled { "enabled" } else { "disabled" }
        );
        self.customization_mut(command_id).is_enabled = enabled;
        self.prune(command_id);
        Ok(())
    }

    /// Change the active language
    pub fn set_language(&mut self, language: Language) {
        if self.language != language {
            tracing::info!("Voice language changed: {} -> {}", self.language, language);
            self.language = language;
        }
    }

    pub fn set_confidence_threshold(&mut self, value: f32) -> Result<(), SettingsError> {
        check_threshold("confidenceThreshold", value)?;
        self.confidence_threshold = value;
        Ok(())
    }

    pub fn set_fuzzy_matching_threshold(&mut self, value: f32) -> Result<(), SettingsError> {
        check_threshold("fuzzyMatchingThreshold", value)?;
        self.fuzzy_matching_threshold = value;
        Ok(())
    }

    /// Forget all customizations of one command. Returns `false` if there were none.
    pub fn reset_command(&mut self, command_id: &str) -> bool {
        self.customizations.remove(command_id).is_some()
    }

    /// Forget all customizations
    pub fn reset_all_commands(&mut self) {
        self.customizations.clear();
    }

    /// Customization keys that do not refer to a catalog command.
    ///
    /// These are kept (a newer app version may know them) but never
    /// take part in matching.
    pub fn orphaned_customizations(&self) -> Vec<&str> {
        self.customizations
            .keys()
            .filter(|id| command_by_id(id).is_none())
            .map(|id| id.as_str())
            .collect()
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<(), SettingsError> {
        check_threshold("confidenceThreshold", self.confidence_threshold)?;
        check_threshold("fuzzyMatchingThreshold", self.fuzzy_matching_threshold)?;
        Ok(())
    }

    /// Bring a loaded document in line with what the settings screen writes.
    ///
    /// Custom phrases stored by older versions may be mixed case; they are
    /// normalized and de-duplicated. Thresholds are clamped into 0.0-1.0 and
    /// the customization's `command_id` is aligned with its map key.
    /// Returns `true` if anything changed.
    pub fn normalize(&mut self) -> bool {
        let mut changed = false;

        for (id, custom) in self.customizations.iter_mut() {
            if custom.command_id != *id {
                custom.command_id = id.clone();
                changed = true;
            }

            let mut normalized: Vec<String> = Vec::with_capacity(custom.custom_patterns.len());
            for pattern in &custom.custom_patterns {
                let pattern = normalize_pattern(pattern);
                if !pattern.is_empty() && !normalized.contains(&pattern) {
                    normalized.push(pattern);
                }
            }
            if normalized != custom.custom_patterns {
                custom.custom_patterns = normalized;
                changed = true;
            }
        }

        for value in [&mut self.confidence_threshold, &mut self.fuzzy_matching_threshold] {
            let clamped = if value.is_nan() { 0.0 } else { (*value).clamp(0.0, 1.0) };
            if clamped != *value {
                *value = clamped;
                changed = true;
            }
        }

        changed
    }
}
