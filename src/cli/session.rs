//! Interactive voice session: transcripts are read line by line from stdin

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

use commeazy_voice::config::Config;
use commeazy_voice::{
    catalog, command_by_id, get_command_patterns, is_command_enabled, match_command, CommandAction,
    DispatchOutcome, Language, VoiceAction, VoiceDispatcher, VoiceFormField, VoiceSettings,
};

use super::open_store;

/// Register the configured contacts and a message field
fn build_dispatcher(contacts: &[String]) -> VoiceDispatcher {
    let mut dispatcher = VoiceDispatcher::new();

    for (index, name) in contacts.iter().enumerate() {
        let (call_name, message_name) = (name.clone(), name.clone());
        dispatcher.register_action(
            VoiceAction::new(format!("contact-{}", index), name.clone())
                .on_call(move || println!("  Calling {}...", call_name))
                .on_message(move || println!("  New message to {}", message_name)),
        );
    }

    dispatcher.register_field(VoiceFormField::new(
        "message",
        "message",
        || println!("  Editing message"),
        || println!("  Message cleared"),
        |text| println!("  Message text: {}", text),
    ));
    dispatcher.focus_field("message");

    dispatcher
}

/// Print the phrases that work right now
fn print_help(language: Language, settings: &VoiceSettings) {
    println!("  You can say:");
    for command in catalog().commands() {
        let customization = settings.customization(command.id);
        if !is_command_enabled(command, customization) {
            continue;
        }
        let patterns = get_command_patterns(command, language, customization);
        if let Some(first) = patterns.first() {
            println!("    {:<20} ({})", first, command.action);
        }
    }
}

/// Why a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// Voice control is switched off; no input was read
    Disabled,
    /// The stop command was spoken
    Stopped,
    /// Nothing was heard within `session_timeout_ms`
    TimedOut,
    /// The transcript source closed
    EndOfInput,
}

/// Run a session until the stop command, end of input or the session timeout.
///
/// A `sessionTimeoutMs` of 0 disables the timeout.
pub async fn session_command(storage_path: &Path, config: &Config, language: Option<Language>) -> Result<()> {
    let settings = open_store(storage_path)?.snapshot();
    let language = language.unwrap_or(settings.language);
    let dispatcher = build_dispatcher(&config.contacts);
    tracing::debug!("Session starting with {} contacts", config.contacts.len());

    let input = BufReader::new(tokio::io::stdin());
    match run_session(input, &settings, language, &dispatcher).await? {
        SessionEnd::Disabled => {
            println!("Voice control is switched off. Turn it on with: commeazy-voice voice on");
        }
        SessionEnd::Stopped => println!("Session stopped"),
        SessionEnd::TimedOut => println!(
            "Session ended after {:.0}s without speech",
            Duration::from_millis(settings.session_timeout_ms).as_secs_f32()
        ),
        SessionEnd::EndOfInput => {}
    }

    Ok(())
}

/// Match and dispatch transcripts from `input`, one per line
pub async fn run_session<R>(
    input: R,
    settings: &VoiceSettings,
    language: Language,
    dispatcher: &VoiceDispatcher,
) -> Result<SessionEnd>
where
    R: AsyncBufRead + Unpin,
{
    if !settings.is_enabled {
        return Ok(SessionEnd::Disabled);
    }

    let timeout = (settings.session_timeout_ms > 0).then(|| Duration::from_millis(settings.session_timeout_ms));

    let stop_phrase = command_by_id("session_stop")
        .map(|stop| get_command_patterns(stop, language, settings.customization(stop.id)))
        .and_then(|patterns| patterns.into_iter().next())
        .unwrap_or_else(|| "stop".to_string());

    println!("Listening ({}). Say '{}' to end the session.", language.display_name(), stop_phrase);
    tracing::debug!("Session timeout {:?}", timeout);

    let mut lines = input.lines();

    loop {
        let next = match timeout {
            Some(limit) => match tokio::time::timeout(limit, lines.next_line()).await {
                Ok(next) => next,
                Err(_) => return Ok(SessionEnd::TimedOut),
            },
            None => lines.next_line().await,
        };

        let Some(line) = next.with_context(|| "Failed to read transcript")? else {
            return Ok(SessionEnd::EndOfInput);
        };
        if line.trim().is_empty() {
            continue;
        }

        let Some(matched) = match_command(&line, language, settings) else {
            println!("  (no command) {}", line.trim());
            continue;
        };

        match dispatcher.dispatch(&matched, settings) {
            DispatchOutcome::Forward(CommandAction::StopSession) => return Ok(SessionEnd::Stopped),
            DispatchOutcome::Forward(CommandAction::Help) => print_help(language, settings),
            DispatchOutcome::Forward(action) => println!("  -> {}", action),
            DispatchOutcome::Handled { action, target_id } => {
                tracing::debug!("{} handled by {}", action, target_id);
            }
            DispatchOutcome::NoTarget(action) => match matched.argument.as_deref() {
                Some(name) => println!("  {}: nobody called '{}'", action, name),
                None => println!("  {}: who?", action),
            },
            DispatchOutcome::Unsupported { action, target_id } => {
                println!("  {} is not available for {}", action, target_id);
            }
        }
    }
}
