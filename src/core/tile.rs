//! Per-letter classification of a scored guess

use std::fmt;

/// Classification of a single letter position in a submitted guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileResult {
    /// Right letter, right position
    Correct,
    /// Letter is in the target at another, not yet matched position
    Present,
    /// No unmatched occurrence of the letter remains in the target
    Absent,
}

impl TileResult {
    /// Strength of the hint, used when folding tiles into keyboard state
    ///
    /// Correct beats Present beats Absent.
    #[inline]
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Correct => 2,
            Self::Present => 1,
            Self::Absent => 0,
        }
    }

    /// Emoji square for share grids
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }

    /// Parse a single feedback character
    ///
    /// Accepts 'G'/'g'/🟩, 'Y'/'y'/🟨 and '-'/'_'/⬜.
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Correct),
            'Y' | 'y' | '🟨' => Some(Self::Present),
            '-' | '_' | '⬜' => Some(Self::Absent),
            _ => None,
        }
    }
}

impl fmt::Display for TileResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Correct => "correct",
            Self::Present => "present",
            Self::Absent => "absent",
        };
        f.write_str(name)
    }
}
