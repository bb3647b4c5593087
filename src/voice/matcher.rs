//! Matching transcripts against command phrases
//!
//! A transcript matches a phrase when, after lowercasing and trimming, it is
//! exactly the phrase or starts with the phrase followed by a space. The
//! space requirement keeps "bel" from matching "bellen" while still letting
//! "bel oma" trigger the call command with "oma" as its argument.
//!
//! Commands are tried in catalog order and the first match wins.

use super::catalog::{catalog, Catalog};
use super::command::VoiceCommand;
use super::language::Language;
use super::resolver::{get_command_patterns, is_command_enabled};
use super::settings::VoiceSettings;

/// A transcript that matched a command
#[derive(Debug, Clone, PartialEq)]
pub struct CommandMatch<'a> {
    pub command: &'a VoiceCommand,
    /// The phrase that matched (lowercase)
    pub pattern: String,
    /// What was said after the phrase, in its original casing
    pub argument: Option<String>,
}

impl CommandMatch<'_> {
    /// Argument text, or an empty string when there is none
    pub fn argument_or_empty(&self) -> &str {
        self.argument.as_deref().unwrap_or("")
    }
}

/// Whether a normalized transcript triggers `pattern`
fn pattern_matches(normalized: &str, pattern: &str) -> bool {
    if pattern.is_empty() {
        return false;
    }
    match normalized.strip_prefix(pattern) {
        Some("") => true,
        Some(rest) => rest.starts_with(' '),
        None => false,
    }
}

/// Text that follows `pattern` in the trimmed original transcript.
///
/// The pattern was matched against the lowercased text, and lowercasing can
/// change lengths ('İ' becomes "i\u{307}"). The split point is where the
/// lowercased prefix of `trimmed` reaches the pattern's length.
fn extract_argument(trimmed: &str, pattern: &str) -> Option<String> {
    let mut lowered_len = 0;
    let mut rest_start = trimmed.len();
    for (idx, c) in trimmed.char_indices() {
        if lowered_len >= pattern.len() {
            rest_start = idx;
            break;
        }
        lowered_len += c.to_lowercase().map(char::len_utf8).sum::<usize>();
    }
    let rest = trimmed[rest_start..].trim();

    if rest.is_empty() { None } else { Some(rest.to_string()) }
}

impl Catalog {
    /// Find the first enabled command whose phrases match `text`.
    ///
    /// When several phrases of that command match (e.g. "llama" and
    /// "llama a"), the longest one is reported so the argument is as
    /// short as possible.
    pub fn match_text(&self, text: &str, language: Language, settings: &VoiceSettings) -> Option<CommandMatch<'_>> {
        let trimmed = text.trim();
        let normalized = trimmed.to_lowercase();
        if normalized.is_empty() {
            return None;
        }

        for command in self.commands() {
            let customization = settings.customization(command.id);
            if !is_command_enabled(command, customization) {
                continue;
            }

            let best = get_command_patterns(command, language, customization)
                .into_iter()
                .filter(|p| pattern_matches(&normalized, p))
                .max_by_key(|p| p.len());

            if let Some(pattern) = best {
                tracing::debug!(
                    "Voice match: '{}' -> {} ({}) via '{}'",
                    normalized,
                    command.id,
                    command.action,
                    pattern
                );
                let argument = extract_argument(trimmed, &pattern);
                return Some(CommandMatch { command, pattern, argument });
            }
        }

        tracing::debug!("Voice match: no command for '{}' ({})", normalized, language);
        None
    }

    /// Find the command a transcript triggers, if any
    pub fn find_by_pattern(&self, text: &str, language: Language, settings: &VoiceSettings) -> Option<&VoiceCommand> {
        self.match_text(text, language, settings).map(|m| m.command)
    }
}

/// Match a transcript against the built-in catalog
pub fn match_command(text: &str, language: Language, settings: &VoiceSettings) -> Option<CommandMatch<'static>> {
    catalog().match_text(text, language, settings)
}

/// Find the built-in command a transcript triggers, if any
pub fn find_command_by_pattern(text: &str, language: Language, settings: &VoiceSettings) -> Option<&'static VoiceCommand> {
    catalog().find_by_pattern(text, language, settings)
}
