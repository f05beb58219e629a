//! Line-based interactive game
//!
//! Each input line is turned into engine intents: letters are typed, `-` or
//! `<` is a backspace, and the end of the line submits.

use crate::engine::{Intent, Phase, Session, Update};
use crate::output::{print_board, print_share};
use crate::service::WordService;
use anyhow::Result;
use colored::Colorize;
use log::info;
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};

/// What one line of player input asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineCommand {
    Quit,
    NewGame,
    Share,
    Help,
    Intents(Vec<Intent>),
}

/// Parse a line of player input
#[must_use]
pub fn parse_line(line: &str) -> LineCommand {
    let trimmed = line.trim();
    match trimmed.to_lowercase().as_str() {
        ":q" | ":quit" | ":exit" => return LineCommand::Quit,
        ":n" | ":new" => return LineCommand::NewGame,
        ":s" | ":share" => return LineCommand::Share,
        ":h" | ":help" | "?" => return LineCommand::Help,
        _ => {}
    }

    let mut intents: Vec<Intent> = trimmed
        .chars()
        .filter(|ch| !ch.is_whitespace())
        .map(|ch| match ch {
            '-' | '<' => Intent::Backspace,
            other => Intent::Letter(other),
        })
        .collect();
    intents.push(Intent::Submit);
    LineCommand::Intents(intents)
}

fn print_help() {
    println!("Type a 5-letter word and press Enter to guess.");
    println!("  - or <   delete the last letter (e.g. 'cran-e')");
    println!("  :new     start a new game");
    println!("  :share   show the emoji grid");
    println!("  :quit    exit\n");
}

/// Run an interactive game against `service` on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading from stdin or flushing stdout fails.
pub async fn run_play<S: WordService>(service: S) -> Result<()> {
    println!("\n╔══════════════════════════════════════╗");
    println!("║               W O R D L E            ║");
    println!("╚══════════════════════════════════════╝\n");
    print_help();

    println!("{}", "Loading today's word…".bright_black());
    let (mut session, update) = Session::start(service).await;
    show(&session, &update);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print!("{} ", ">".bright_cyan());
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        match parse_line(&line) {
            LineCommand::Quit => break,
            LineCommand::Help => print_help(),
            LineCommand::Share => print_share(session.engine()),
            LineCommand::NewGame => {
                info!("Starting a new game");
                let update = session.restart().await;
                show(&session, &update);
            }
            LineCommand::Intents(intents) => {
                if session.phase().is_terminal() {
                    println!("Game over. Type :new for another game or :quit to exit.");
                    continue;
                }

                let mut last = None;
                for intent in intents {
                    last = Some(session.handle(intent).await);
                }
                if let Some(update) = last {
                    show(&session, &update);
                }
            }
        }
    }

    println!("\n👋 Thanks for playing!\n");
    Ok(())
}

fn show<S: WordService>(session: &Session<S>, update: &Update) {
    if session.phase() == Phase::Error {
        if let Some(rejection) = &update.rejection {
            println!("{}", format!("✗ {rejection}").red().bold());
        }
        println!("Type :new to try again or :quit to exit.");
        return;
    }

    print_board(session.engine(), update);

    if matches!(session.phase(), Phase::Won | Phase::Lost) {
        print_share(session.engine());
        println!("Type :new for another game or :quit to exit.");
    }
}
