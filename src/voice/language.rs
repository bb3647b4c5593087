//! Supported speech languages and their recognizer locales

use serde::{Deserialize, Serialize};

/// A language the voice commands are available in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Dutch (the app's primary language)
    #[default]
    Nl,
    /// English
    En,
    /// German
    De,
    /// French
    Fr,
    /// Spanish
    Es,
}

impl Language {
    /// Every supported language, in settings-UI order
    pub const ALL: [Language; 5] = [
        Language::Nl,
        Language::En,
        Language::De,
        Language::Fr,
        Language::Es,
    ];

    /// Parse a language from user input.
    ///
    /// Accepts the bare code (`nl`), any casing, and full locales with
    /// either separator (`nl-NL`, `nl_NL`). Returns `None` for anything
    /// outside the supported set.
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim().to_lowercase();
        let base = code.split(['-', '_']).next().unwrap_or_default();
        match base {
            "nl" => Some(Language::Nl),
            "en" => Some(Language::En),
            "de" => Some(Language::De),
            "fr" => Some(Language::Fr),
            "es" => Some(Language::Es),
            _ => None,
        }
    }

    /// Short ISO 639-1 code
    pub fn code(&self) -> &'static str {
        match self {
            Language::Nl => "nl",
            Language::En => "en",
            Language::De => "de",
            Language::Fr => "fr",
            Language::Es => "es",
        }
    }

    /// Locale passed to the platform speech recognizer
    pub fn speech_locale(&self) -> &'static str {
        match self {
            Language::Nl => "nl-NL",
            Language::En => "en-US",
            Language::De => "de-DE",
            Language::Fr => "fr-FR",
            Language::Es => "es-ES",
        }
    }

    /// Name of the language in that language
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::Nl => "Nederlands",
            Language::En => "English",
            Language::De => "Deutsch",
            Language::Fr => "Français",
            Language::Es => "Español",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl std::str::FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::from_code(s).ok_or_else(|| {
            let supported: Vec<&str> = Language::ALL.iter().map(|l| l.code()).collect();
            format!("Unsupported language '{}' (expected one of: {})", s, supported.join(", "))
        })
    }
}
