//! Settings commands: synonyms, phrases, toggles, language and reset

use std::path::Path;

use anyhow::Result;
use clap::Subcommand;

use commeazy_voice::Language;

use super::open_store;

#[derive(Subcommand)]
pub enum SynonymAction {
    /// Add a synonym to a command
    Add {
        command_id: String,
        #[arg(required = true, num_args = 1..)]
        phrase: Vec<String>,
    },
    /// Remove a synonym from a command
    Remove {
        command_id: String,
        #[arg(required = true, num_args = 1..)]
        phrase: Vec<String>,
    },
}

#[derive(Subcommand)]
pub enum PatternAction {
    /// Stop a default phrase from triggering its command
    Disable {
        command_id: String,
        #[arg(required = true, num_args = 1..)]
        phrase: Vec<String>,
    },
    /// Let a switched-off default phrase trigger its command again
    Enable {
        command_id: String,
        #[arg(required = true, num_args = 1..)]
        phrase: Vec<String>,
    },
}

pub fn synonym_command(storage_path: &Path, action: SynonymAction) -> Result<()> {
    let mut store = open_store(storage_path)?;

    match action {
        SynonymAction::Add { command_id, phrase } => {
            let phrase = phrase.join(" ");
            if store.update(|s| s.add_custom_pattern(&command_id, &phrase))? {
                println!("Added synonym '{}' to {}", phrase.trim(), command_id);
            } else {
                println!("{} already has synonym '{}'", command_id, phrase.trim());
            }
        }
        SynonymAction::Remove { command_id, phrase } => {
            let phrase = phrase.join(" ");
            if store.update(|s| Ok(s.remove_custom_pattern(&command_id, &phrase)))? {
                println!("Removed synonym '{}' from {}", phrase.trim(), command_id);
            } else {
                println!("{} has no synonym '{}'", command_id, phrase.trim());
            }
        }
    }

    Ok(())
}

pub fn pattern_command(storage_path: &Path, action: PatternAction) -> Result<()> {
    let mut store = open_store(storage_path)?;

    match action {
        PatternAction::Disable { command_id, phrase } => {
            let phrase = phrase.join(" ");
            if store.update(|s| s.disable_pattern(&command_id, &phrase))? {
                println!("'{}' no longer triggers {}", phrase.trim(), command_id);
            } else {
                println!("'{}' was already off for {}", phrase.trim(), command_id);
            }
        }
        PatternAction::Enable { command_id, phrase } => {
            let phrase = phrase.join(" ");
            if store.update(|s| Ok(s.enable_pattern(&command_id, &phrase)))? {
                println!("'{}' triggers {} again", phrase.trim(), command_id);
            } else {
                println!("'{}' was not switched off for {}", phrase.trim(), command_id);
            }
        }
    }

    Ok(())
}

pub fn toggle_command(storage_path: &Path, command_id: &str, enabled: bool) -> Result<()> {
    let mut store = open_store(storage_path)?;
    store.update(|s| s.set_command_enabled(command_id, enabled))?;
    println!("{} is now {}", command_id, if enabled { "on" } else { "off" });
    Ok(())
}

pub fn voice_command(storage_path: &Path, enabled: bool) -> Result<()> {
    let mut store = open_store(storage_path)?;
    store.update(|s| {
        s.is_enabled = enabled;
        Ok(())
    })?;
    println!("Voice control is now {}", if enabled { "on" } else { "off" });
    Ok(())
}

pub fn language_command(storage_path: &Path, language: Language) -> Result<()> {
    let mut store = open_store(storage_path)?;
    store.update(|s| {
        s.set_language(language);
        Ok(())
    })?;
    println!("Voice language: {} ({})", language.display_name(), language.speech_locale());
    Ok(())
}

pub fn reset_command(storage_path: &Path, command_id: Option<&str>) -> Result<()> {
    let mut store = open_store(storage_path)?;

    match command_id {
        Some(id) => {
            if store.update(|s| Ok(s.reset_command(id)))? {
                println!("Reset {} to its defaults", id);
            } else {
                println!("{} has no customizations", id);
            }
        }
        None => {
            store.update(|s| {
                s.reset_all_commands();
                Ok(())
            })?;
            println!("Reset all voice commands to their defaults");
        }
    }

    Ok(())
}
