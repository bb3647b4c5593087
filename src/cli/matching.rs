//! Match command implementation

use std::path::Path;

use anyhow::Result;

use commeazy_voice::{match_command as match_transcript, Language};

use super::open_store;

/// Match one transcript and print the result
pub fn match_command(storage_path: &Path, text: &str, language: Option<Language>) -> Result<()> {
    let settings = open_store(storage_path)?.snapshot();
    if !settings.is_enabled {
        println!("Voice control is switched off.");
        return Ok(());
    }

    let language = language.unwrap_or(settings.language);

    match match_transcript(text, language, &settings) {
        Some(m) => {
            println!("{} -> {} ({})", text.trim(), m.command.id, m.command.action);
            println!("  phrase:   {}", m.pattern);
            if let Some(argument) = &m.argument {
                println!("  argument: {}", argument);
            }
        }
        None => println!("No match for '{}' ({})", text.trim(), language),
    }

    Ok(())
}
