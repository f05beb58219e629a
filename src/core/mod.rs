//! Core domain types for Wordle
//!
//! This module contains the fundamental domain types with no I/O.
//! Everything here is pure and deterministic.

mod keyboard;
mod score;
mod tile;
mod word;

pub use keyboard::Keyboard;
pub use score::Score;
pub use tile::TileResult;
pub use word::{Word, WordError};

/// Letters per word (columns on the board)
pub const WORD_LENGTH: usize = 5;

/// Attempts per game (rows on the board)
pub const MAX_ROWS: usize = 6;
