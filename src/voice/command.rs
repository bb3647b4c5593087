//! Voice command types: categories, actions and per-language pattern tables

use serde::{Deserialize, Serialize};

use super::language::Language;

/// Where a command is contextually active; also drives settings grouping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommandCategory {
    Navigation,
    List,
    Form,
    Action,
    Media,
    Session,
    Confirmation,
}

impl CommandCategory {
    pub const ALL: [CommandCategory; 7] = [
        CommandCategory::Navigation,
        CommandCategory::List,
        CommandCategory::Form,
        CommandCategory::Action,
        CommandCategory::Media,
        CommandCategory::Session,
        CommandCategory::Confirmation,
    ];

    /// Parse a category name (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "navigation" | "nav" => Some(CommandCategory::Navigation),
            "list" => Some(CommandCategory::List),
            "form" => Some(CommandCategory::Form),
            "action" => Some(CommandCategory::Action),
            "media" => Some(CommandCategory::Media),
            "session" => Some(CommandCategory::Session),
            "confirmation" | "confirm" => Some(CommandCategory::Confirmation),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CommandCategory::Navigation => "navigation",
            CommandCategory::List => "list",
            CommandCategory::Form => "form",
            CommandCategory::Action => "action",
            CommandCategory::Media => "media",
            CommandCategory::Session => "session",
            CommandCategory::Confirmation => "confirmation",
        }
    }
}

impl std::fmt::Display for CommandCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Symbolic action handed to the dispatcher when a command matches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CommandAction {
    // Navigation
    NavigateBack,
    NavigateHome,
    OpenChats,
    OpenContacts,
    OpenSettings,
    // List
    FocusNext,
    FocusPrevious,
    Select,
    // Form
    Edit,
    Clear,
    Dictate,
    Send,
    // Action
    Call,
    Message,
    Delete,
    // Media
    Play,
    Pause,
    NextTrack,
    PreviousTrack,
    // Session
    StopSession,
    Help,
    // Confirmation
    Confirm,
    Cancel,
}

impl CommandAction {
    /// Action identifier as used by dispatch handlers
    pub fn as_str(&self) -> &'static str {
        match self {
            CommandAction::NavigateBack => "navigateBack",
            CommandAction::NavigateHome => "navigateHome",
            CommandAction::OpenChats => "openChats",
            CommandAction::OpenContacts => "openContacts",
            CommandAction::OpenSettings => "openSettings",
            CommandAction::FocusNext => "focusNext",
            CommandAction::FocusPrevious => "focusPrevious",
            CommandAction::Select => "select",
            CommandAction::Edit => "edit",
            CommandAction::Clear => "clear",
            CommandAction::Dictate => "dictate",
            CommandAction::Send => "send",
            CommandAction::Call => "call",
            CommandAction::Message => "message",
            CommandAction::Delete => "delete",
            CommandAction::Play => "play",
            CommandAction::Pause => "pause",
            CommandAction::NextTrack => "nextTrack",
            CommandAction::PreviousTrack => "previousTrack",
            CommandAction::StopSession => "stopSession",
            CommandAction::Help => "help",
            CommandAction::Confirm => "confirm",
            CommandAction::Cancel => "cancel",
        }
    }
}

impl std::fmt::Display for CommandAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Default phrases for one command, one list per supported language.
///
/// Every language is a required field, so a command cannot be declared
/// without deciding on its phrases (possibly none) for each language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LocalizedPatterns {
    pub nl: &'static [&'static str],
    pub en: &'static [&'static str],
    pub de: &'static [&'static str],
    pub fr: &'static [&'static str],
    pub es: &'static [&'static str],
}

impl LocalizedPatterns {
    /// Phrases for a language (empty when the command has none there)
    pub fn get(&self, language: Language) -> &'static [&'static str] {
        match language {
            Language::Nl => self.nl,
            Language::En => self.en,
            Language::De => self.de,
            Language::Fr => self.fr,
            Language::Es => self.es,
        }
    }

    /// Iterate over every language's phrases
    pub fn iter(&self) -> impl Iterator<Item = (Language, &'static [&'static str])> + '_ {
        Language::ALL.into_iter().map(move |lang| (lang, self.get(lang)))
    }
}

/// A built-in voice command
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VoiceCommand {
    /// Stable identifier, also the key of user customizations
    pub id: &'static str,
    pub category: CommandCategory,
    pub action: CommandAction,
    /// Match precedence: lower values are checked first
    pub priority: u16,
    pub default_patterns: LocalizedPatterns,
    /// Catalog default enablement
    pub is_enabled: bool,
    /// Whether users may switch this command off
    pub can_disable: bool,
}

impl VoiceCommand {
    /// Create an enabled, user-disableable command
    pub fn new(
        id: &'static str,
        category: CommandCategory,
        action: CommandAction,
        priority: u16,
        default_patterns: LocalizedPatterns,
    ) -> Self {
        Self {
            id,
            category,
            action,
            priority,
            default_patterns,
            is_enabled: true,
            can_disable: true,
        }
    }

    /// Mark the command as essential: it can never be disabled
    pub fn essential(mut self) -> Self {
        self.can_disable = false;
        self
    }

    /// Ship the command switched off by default
    pub fn disabled_by_default(mut self) -> Self {
        self.is_enabled = false;
        self
    }

    /// Whether `phrase` is one of the command's default phrases in any language
    pub fn has_default_pattern(&self, phrase: &str) -> bool {
        self.default_patterns
            .iter()
            .any(|(_, patterns)| patterns.contains(&phrase))
    }
}
