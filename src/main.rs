//! Wordle - CLI
//!
//! Play against the remote words API or the embedded dictionary, or score a
//! single guess.

use anyhow::Result;
use clap::{Parser, Subcommand};
use log::LevelFilter;
use std::path::PathBuf;
use wordle_engine::{
    commands::{run_play, score_guess},
    config::{DEFAULT_TIMEOUT_SECS, GameConfig, SourceKind},
    output::print_score_result,
};

#[derive(Parser)]
#[command(
    name = "wordle",
    about = "Five-letter word guessing game",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word source: http (default) or offline
    #[arg(long, global = true, value_enum, env = "WORDLE_SOURCE", default_value_t = SourceKind::Http)]
    source: SourceKind,

    /// Base URL of the words API
    #[arg(long, global = true, env = "WORDLE_API_URL")]
    api_url: Option<String>,

    /// Per-request timeout for the words API, in seconds
    #[arg(long, global = true, default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout_secs: u64,

    /// Fixed target word (offline only)
    #[arg(long, global = true)]
    target: Option<String>,

    /// Word list file, one word per line (offline only)
    #[arg(short = 'd', long, global = true)]
    dictionary: Option<PathBuf>,

    /// Log level: error, warn, info, debug, trace
    #[arg(long, global = true, env = "WORDLE_LOG", default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive game (default)
    Play,

    /// Score a guess against a target word
    Score {
        /// The guessed word
        guess: String,

        /// The target word
        target: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level_filter = cli.log_level.parse().unwrap_or(LevelFilter::Warn);
    env_logger::Builder::new()
        .filter_level(log_level_filter)
        .init();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            let config = GameConfig::resolve(
                cli.source,
                cli.api_url,
                cli.timeout_secs,
                cli.target.as_deref(),
                cli.dictionary,
            )?;
            let service = config.build_service()?;
            run_play(service).await
        }
        Commands::Score { guess, target } => {
            let result = score_guess(&guess, &target)?;
            print_score_result(&result);
            Ok(())
        }
    }
}
