//! Languages and commands listing

use std::path::Path;

use anyhow::{bail, Result};

use commeazy_voice::{
    catalog, get_command_patterns, is_command_enabled, CommandCategory, Language,
};

use super::open_store;

/// Print the supported languages
pub fn languages_command() {
    println!("Languages:\n");
    for lang in Language::ALL {
        println!("  {}  {:<12} {}", lang.code(), lang.display_name(), lang.speech_locale());
    }
}

/// Print commands with their effective phrases under the stored settings
pub fn commands_command(storage_path: &Path, category: Option<&str>, language: Option<Language>) -> Result<()> {
    let category = match category {
        Some(name) => match CommandCategory::from_str(name) {
            Some(c) => Some(c),
            None => bail!("Unknown category: {}", name),
        },
        None => None,
    };

    let settings = open_store(storage_path)?.snapshot();
    let language = language.unwrap_or(settings.language);

    let commands: Vec<_> = match category {
        Some(c) => catalog().by_category(c),
        None => catalog().commands().iter().collect(),
    };

    println!("Voice commands ({}, {}):\n", commands.len(), language.display_name());

    for command in commands {
        let customization = settings.customization(command.id);
        let enabled = is_command_enabled(command, customization);
        let patterns = get_command_patterns(command, language, customization);

        println!(
            "  {:<16} [{}] {} {}{}",
            command.id,
            command.category,
            command.action,
            if enabled { "" } else { "(off) " },
            if command.can_disable { "" } else { "(always on)" }
        );
        if patterns.is_empty() {
            println!("    (no phrases)");
        } else {
            println!("    {}", patterns.join(", "));
        }
    }

    if !settings.is_enabled {
        println!("\nVoice control is switched off.");
    }

    Ok(())
}
