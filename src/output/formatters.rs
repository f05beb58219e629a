//! Formatting utilities for terminal output

use crate::core::{Keyboard, MAX_ROWS, Score, TileResult, WORD_LENGTH, Word};
use crate::engine::{GameStatus, GuessRow};
use colored::{ColoredString, Colorize};

const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

fn paint(letter: char, hint: Option<TileResult>) -> ColoredString {
    let tile = format!(" {} ", letter.to_ascii_uppercase());
    match hint {
        Some(TileResult::Correct) => tile.black().on_green().bold(),
        Some(TileResult::Present) => tile.black().on_yellow().bold(),
        Some(TileResult::Absent) => tile.white().on_bright_black(),
        None => tile.normal(),
    }
}

/// Render a scored guess as colored tiles
#[must_use]
pub fn colored_row(guess: &Word, score: &Score) -> String {
    guess
        .text()
        .chars()
        .zip(score.tiles())
        .map(|(letter, &tile)| paint(letter, Some(tile)).to_string())
        .collect()
}

/// Render the in-progress entry, padding empty columns
#[must_use]
pub fn entry_row(entry: &str) -> String {
    let mut row: String = entry
        .chars()
        .map(|letter| paint(letter, None).to_string())
        .collect();
    for _ in entry.len()..WORD_LENGTH {
        row.push_str(" _ ");
    }
    row
}

/// Render the keyboard with the best hint per letter
#[must_use]
pub fn keyboard_rows(keyboard: &Keyboard) -> Vec<String> {
    KEYBOARD_ROWS
        .iter()
        .map(|row| {
            row.bytes()
                .map(|letter| paint(char::from(letter), keyboard.get(letter)).to_string())
                .collect::<String>()
        })
        .collect()
}

/// Spoiler-free emoji summary of a finished or ongoing game
///
/// # Examples
/// ```
/// use wordle_engine::core::{Score, Word};
/// use wordle_engine::engine::{GameStatus, GuessRow};
/// use wordle_engine::output::formatters::share_grid;
///
/// let row = GuessRow { word: Word::new("crane").unwrap(), score: Score::PERFECT };
/// assert_eq!(share_grid(&[row], GameStatus::Won), "Wordle 1/6\n🟩🟩🟩🟩🟩");
/// ```
#[must_use]
pub fn share_grid(history: &[GuessRow], status: GameStatus) -> String {
    let tries = match status {
        GameStatus::Won => history.len().to_string(),
        GameStatus::Lost => "X".to_string(),
        GameStatus::InProgress => "-".to_string(),
    };

    let mut grid = format!("Wordle {tries}/{MAX_ROWS}");
    for row in history {
        grid.push('\n');
        grid.push_str(&row.score.to_emoji());
    }
    grid
}
