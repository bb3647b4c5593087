use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use commeazy_voice::config::Config;
use commeazy_voice::Language;

mod cli;

#[derive(Parser)]
#[command(name = "commeazy-voice")]
#[command(about = "CommEazy voice commands - inspect, customize and try out voice control")]
#[command(version)]
struct Cli {
    /// Path to the config file (defaults to ~/.commeazy/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Path to the storage file (overrides the config)
    #[arg(short, long, global = true)]
    storage: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// On/off switch argument
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Switch {
    On,
    Off,
}

impl Switch {
    fn is_on(self) -> bool {
        self == Switch::On
    }
}

#[derive(Subcommand)]
enum Commands {
    /// List supported languages
    Languages,

    /// List voice commands with their effective phrases
    Commands {
        /// Only show this category (navigation, list, form, action, media, session, confirmation)
        #[arg(long)]
        category: Option<String>,

        /// Language to show phrases for (defaults to the active language)
        #[arg(short, long)]
        language: Option<Language>,
    },

    /// Match a transcript against the voice commands
    Match {
        /// The transcript, e.g. "bel oma"
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,

        /// Language to match in (defaults to the active language)
        #[arg(short, long)]
        language: Option<Language>,
    },

    /// Add or remove a custom synonym
    Synonym {
        #[command(subcommand)]
        action: cli::settings::SynonymAction,
    },

    /// Switch a default phrase off or back on
    Pattern {
        #[command(subcommand)]
        action: cli::settings::PatternAction,
    },

    /// Turn a single command on or off
    Toggle {
        command_id: String,

        #[arg(value_enum)]
        state: Switch,
    },

    /// Turn voice control as a whole on or off
    Voice {
        #[arg(value_enum)]
        state: Switch,
    },

    /// Set the active language
    Language { language: Language },

    /// Drop customizations of one command, or of all commands
    Reset { command_id: Option<String> },

    /// Read transcripts from stdin and act on them until "stop" or timeout
    Session {
        /// Language to listen in (defaults to the active language)
        #[arg(short, long)]
        language: Option<Language>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref())?;

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { config.log_level.as_str() };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    let storage_path = cli.storage.unwrap_or_else(|| config.storage_path());

    match cli.command {
        Commands::Languages => {
            cli::list::languages_command();
        }
        Commands::Commands { category, language } => {
            cli::list::commands_command(&storage_path, category.as_deref(), language)?;
        }
        Commands::Match { text, language } => {
            cli::matching::match_command(&storage_path, &text.join(" "), language)?;
        }
        Commands::Synonym { action } => {
            cli::settings::synonym_command(&storage_path, action)?;
        }
        Commands::Pattern { action } => {
            cli::settings::pattern_command(&storage_path, action)?;
        }
        Commands::Toggle { command_id, state } => {
            cli::settings::toggle_command(&storage_path, &command_id, state.is_on())?;
        }
        Commands::Voice { state } => {
            cli::settings::voice_command(&storage_path, state.is_on())?;
        }
        Commands::Language { language } => {
            cli::settings::language_command(&storage_path, language)?;
        }
        Commands::Reset { command_id } => {
            cli::settings::reset_command(&storage_path, command_id.as_deref())?;
        }
        Commands::Session { language } => {
            cli::session::session_command(&storage_path, &config, language).await?;
        }
    }

    Ok(())
}
