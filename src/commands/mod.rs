//! Command implementations

pub mod play;
pub mod score;

pub use play::{LineCommand, parse_line, run_play};
pub use score::{ScoreResult, score_guess};
