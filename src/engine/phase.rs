//! Engine phases and the player-facing game status

use std::fmt;

/// Where the engine is in a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Waiting for the target word
    Loading,
    /// Accepting letters, backspace and submit
    Ready,
    /// A submitted guess is being checked against the dictionary
    AwaitingValidation,
    Won,
    Lost,
    /// The target word could not be fetched; the game cannot be played
    Error,
}

impl Phase {
    /// A service call is outstanding and player intents are ignored
    #[inline]
    #[must_use]
    pub const fn is_busy(self) -> bool {
        matches!(self, Self::Loading | Self::AwaitingValidation)
    }

    /// No further transitions are possible
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost | Self::Error)
    }

    /// Player-facing outcome so far
    ///
    /// `Error` reports `InProgress` because no game was ever decided. It is
    /// still terminal: check `is_terminal`, or the `TargetUnavailable`
    /// rejection on the update, before offering more input.
    #[must_use]
    pub const fn status(self) -> GameStatus {
        match self {
            Self::Won => GameStatus::Won,
            Self::Lost => GameStatus::Lost,
            Self::Loading | Self::Ready | Self::AwaitingValidation | Self::Error => {
                GameStatus::InProgress
            }
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Loading => "loading",
            Self::Ready => "ready",
            Self::AwaitingValidation => "awaiting validation",
            Self::Won => "won",
            Self::Lost => "lost",
            Self::Error => "error",
        };
        f.write_str(name)
    }
}

/// Outcome of the game so far
///
/// Only ever moves from `InProgress` to `Won` or `Lost`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn busy_phases() {
        assert!(Phase::Loading.is_busy());
        assert!(Phase::AwaitingValidation.is_busy());
        assert!(!Phase::Ready.is_busy());
        assert!(!Phase::Won.is_busy());
    }

    #[test]
    fn terminal_phases() {
        for phase in [Phase::Won, Phase::Lost, Phase::Error] {
            assert!(phase.is_terminal(), "{phase} should be terminal");
        }
        for phase in [Phase::Loading, Phase::Ready, Phase::AwaitingValidation] {
            assert!(!phase.is_terminal(), "{phase} should not be terminal");
        }
    }

    #[test]
    fn error_is_terminal_but_undecided() {
        assert!(Phase::Error.is_terminal());
        assert_eq!(Phase::Error.status(), GameStatus::InProgress);
    }

    #[test]
    fn status_follows_phase() {
        assert_eq!(Phase::Won.status(), GameStatus::Won);
        assert_eq!(Phase::Lost.status(), GameStatus::Lost);
        assert_eq!(Phase::Ready.status(), GameStatus::InProgress);
        assert_eq!(Phase::Error.status(), GameStatus::InProgress);
    }
}
