//! Result objects handed back to the caller after every intent

use super::{GameStatus, Phase};
use crate::core::{Keyboard, Score, Word};
use crate::service::ServiceError;
use thiserror::Error;

/// Player intents, already normalized by the input layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Letter(char),
    Backspace,
    Submit,
}

/// Why an intent was refused
///
/// The display strings are the player-facing alert texts.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    #[error("Not enough letters")]
    IncompleteGuess,
    #[error("Not in word list")]
    InvalidWord,
    #[error("Could not check the word, try again ({0})")]
    ServiceUnavailable(ServiceError),
    #[error("Could not load today's word ({0})")]
    TargetUnavailable(ServiceError),
}

impl Rejection {
    /// The game can continue after this rejection
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        !matches!(self, Self::TargetUnavailable(_))
    }
}

/// Service call the driver must perform and report back
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    FetchTarget,
    Validate(Word),
}

/// A committed row on the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRow {
    pub word: Word,
    pub score: Score,
}

/// Observable engine state after handling one intent or service result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Update {
    pub phase: Phase,
    /// Active row (or the winning row once won)
    pub row: usize,
    /// In-progress letters for the active row
    pub entry: String,
    /// Tiles for the row scored by this step
    pub tiles: Option<Score>,
    pub rejection: Option<Rejection>,
    /// Set only when the game is lost
    pub revealed_target: Option<Word>,
    pub request: Option<Request>,
    pub keyboard: Keyboard,
    /// The intent had no effect
    pub ignored: bool,
}

impl Update {
    /// See `Phase::status`: a failed target fetch reads as `InProgress` here
    /// while `phase` is `Error`
    #[inline]
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.phase.status()
    }
}
