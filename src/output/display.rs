//! Display functions for game state and command results

use super::formatters::{colored_row, entry_row, keyboard_rows, share_grid};
use crate::commands::ScoreResult;
use crate::core::{MAX_ROWS, TileResult};
use crate::engine::{GameStatus, GuessEngine, Phase, Update};
use colored::Colorize;

/// Print the board, any message carried by the update, and the keyboard
pub fn print_board(engine: &GuessEngine, update: &Update) {
    println!();
    for row in engine.history() {
        println!("  {}", colored_row(&row.word, &row.score));
    }
    if engine.phase() == Phase::Ready {
        println!("  {}", entry_row(engine.entry()));
    }
    for _ in engine.history().len() + usize::from(engine.phase() == Phase::Ready)..MAX_ROWS {
        println!("  {}", entry_row(""));
    }

    println!();
    for line in keyboard_rows(engine.keyboard()) {
        println!("  {line}");
    }
    println!();

    print_message(update);
}

fn print_message(update: &Update) {
    if let Some(rejection) = &update.rejection {
        println!("{}", format!("✗ {rejection}").red().bold());
        return;
    }

    match update.status() {
        GameStatus::Won => println!("{}", "🎉 Great!".bright_green().bold()),
        GameStatus::Lost => {
            if let Some(target) = &update.revealed_target {
                println!(
                    "{} {}",
                    "The word was".bright_white(),
                    target.text().to_uppercase().bright_yellow().bold()
                );
            }
        }
        GameStatus::InProgress => {}
    }
}

/// Print the share grid for a finished game
pub fn print_share(engine: &GuessEngine) {
    println!("\n{}\n", share_grid(engine.history(), engine.phase().status()));
}

/// Print the result of scoring one guess against a target
pub fn print_score_result(result: &ScoreResult) {
    let ScoreResult {
        guess,
        target,
        score,
        in_dictionary,
    } = result;

    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Guess {} against {}",
        guess.text().to_uppercase().bright_white().bold(),
        target.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(40).cyan());

    println!("\n  {}   {}", colored_row(guess, score), score.to_emoji());
    println!(
        "\n  Correct: {}  Present: {}  Absent: {}",
        score.count(TileResult::Correct),
        score.count(TileResult::Present),
        score.count(TileResult::Absent)
    );

    if score.is_win() {
        println!("\n{}", "✅ Exact match".green().bold());
    }
    if !in_dictionary {
        println!(
            "\n{}",
            "Note: not in the built-in word list, a game would reject it".yellow()
        );
    }
}
