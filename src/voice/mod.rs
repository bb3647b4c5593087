//! Voice commands - catalog, user customization and transcript matching
//!
//! The catalog defines every built-in command with its phrases per language.
//! Users customize commands through [`VoiceSettings`]: extra synonyms,
//! switched-off default phrases and per-command on/off. The matcher combines
//! both to find the command a transcript triggers.
//!
//! Example:
//! - "volgende" (nl) -> `list_next` / `focusNext`
//! - "bel Oma" (nl) -> `action_call` / `call` with argument "Oma"

mod catalog;
mod command;
mod customization;
mod fuzzy;
mod language;
mod matcher;
mod registration;
mod resolver;
mod settings;

pub use catalog::{catalog, command_by_id, commands_by_category, Catalog};
pub use command::{CommandAction, CommandCategory, LocalizedPatterns, VoiceCommand};
pub use customization::{normalize_pattern, VoiceCommandCustomization};
pub use fuzzy::{find_best_name, name_similarity, NameMatch};
pub use language::Language;
pub use matcher::{find_command_by_pattern, match_command, CommandMatch};
pub use registration::{DispatchOutcome, VoiceAction, VoiceDispatcher, VoiceFormField};
pub use resolver::{get_command_patterns, is_command_enabled};
pub use settings::{SettingsError, VoiceSettings};

#[cfg(test)]
mod tests;
