//! Per-command user overrides layered over the catalog defaults

use serde::{Deserialize, Serialize};

/// User customization of a single command.
///
/// Stored in [`VoiceSettings::customizations`](super::VoiceSettings) keyed by
/// command id. Entries for ids that are not in the catalog are kept as-is
/// and ignored when matching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoiceCommandCustomization {
    pub command_id: String,

    /// Extra phrases added by the user, in any language
    #[serde(default)]
    pub custom_patterns: Vec<String>,

    /// Default phrases the user switched off
    #[serde(default)]
    pub disabled_patterns: Vec<String>,

    /// Ignored for commands that cannot be disabled
    #[serde(default = "default_enabled")]
    pub is_enabled: bool,
}

fn default_enabled() -> bool {
    true
}

impl VoiceCommandCustomization {
    /// Create an empty customization for a command
    pub fn new(command_id: impl Into<String>) -> Self {
        Self {
            command_id: command_id.into(),
            custom_patterns: Vec::new(),
            disabled_patterns: Vec::new(),
            is_enabled: true,
        }
    }

    /// Add a custom phrase (builder style, taken verbatim)
    pub fn with_custom_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.custom_patterns.push(pattern.into());
        self
    }

    /// Suppress a default phrase (builder style)
    pub fn with_disabled_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.disabled_patterns.push(pattern.into());
        self
    }

    /// Set the enablement override (builder style)
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.is_enabled = enabled;
        self
    }

    /// True when the customization changes nothing compared to the defaults
    pub fn is_noop(&self) -> bool {
        self.custom_patterns.is_empty() && self.disabled_patterns.is_empty() && self.is_enabled
    }
}

/// Normalize a user-entered phrase the way catalog phrases are authored:
/// lowercase, trimmed, inner whitespace collapsed to single spaces.
pub fn normalize_pattern(pattern: &str) -> String {
    pattern
        .split_whitespace()
        .map(|word| word.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ")
}
