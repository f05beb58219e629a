//! Guess scoring against the hidden target
//!
//! A score is the row of tiles produced for one submitted guess:
//! - Correct = letter in the correct position
//! - Present = letter in the word, wrong position
//! - Absent = letter not in the word (or all its occurrences already matched)

use super::{TileResult, WORD_LENGTH, Word};
use std::fmt;

/// Tile classifications for one submitted guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Score([TileResult; WORD_LENGTH]);

impl Score {
    /// All tiles correct (winning guess)
    pub const PERFECT: Self = Self([TileResult::Correct; WORD_LENGTH]);

    /// Build a score from raw tiles
    #[inline]
    #[must_use]
    pub const fn new(tiles: [TileResult; WORD_LENGTH]) -> Self {
        Self(tiles)
    }

    /// Score `guess` against `target`
    ///
    /// Implements Wordle's duplicate-letter rules.
    ///
    /// # Algorithm
    /// 1. Copy both words into slots; a consumed slot becomes `None`
    /// 2. First pass: exact matches are Correct and consume both slots
    /// 3. Second pass: each unconsumed guess letter takes the first unconsumed
    ///    target slot holding the same letter and becomes Present
    /// 4. Everything else is Absent
    ///
    /// Exact matches are resolved before any Present match, so a repeated guess
    /// letter is never credited more times than it occurs in the target.
    ///
    /// # Examples
    /// ```
    /// use wordle_engine::core::{Score, TileResult::*, Word};
    ///
    /// let guess = Word::new("banal").unwrap();
    /// let target = Word::new("abbey").unwrap();
    ///
    /// let score = Score::calculate(&guess, &target);
    /// assert_eq!(score.tiles(), &[Present, Present, Absent, Absent, Absent]);
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, target: &Word) -> Self {
        let mut target_slots: [Option<u8>; WORD_LENGTH] = (*target.chars()).map(Some);
        let mut guess_slots: [Option<u8>; WORD_LENGTH] = (*guess.chars()).map(Some);
        let mut result = [TileResult::Absent; WORD_LENGTH];

        // First pass: exact matches
        // Allow: Index needed to access both slot arrays and set result[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if guess_slots[i] == target_slots[i] {
                result[i] = TileResult::Correct;
                target_slots[i] = None;
                guess_slots[i] = None;
            }
        }

        // Second pass: right letter, wrong position
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            let Some(letter) = guess_slots[i] else {
                continue;
            };

            if let Some(slot) = target_slots.iter().position(|&s| s == Some(letter)) {
                result[i] = TileResult::Present;
                target_slots[slot] = None;
                guess_slots[i] = None;
            }
        }

        Self(result)
    }

    /// Tiles in letter order
    #[inline]
    #[must_use]
    pub const fn tiles(&self) -> &[TileResult; WORD_LENGTH] {
        &self.0
    }

    /// Check if every tile is Correct
    #[inline]
    #[must_use]
    pub fn is_win(&self) -> bool {
        *self == Self::PERFECT
    }

    /// Count tiles with the given classification
    #[must_use]
    pub fn count(&self, kind: TileResult) -> usize {
        self.0.iter().filter(|&&tile| tile == kind).count()
    }

    /// Parse a score from a string like "GY-GY" or "🟩🟨⬜🟩🟨"
    ///
    /// # Examples
    /// ```
    /// use wordle_engine::core::Score;
    ///
    /// let p1 = Score::from_str("GY-GY").unwrap();
    /// let p2 = Score::from_str("🟩🟨⬜🟩🟨").unwrap();
    /// assert_eq!(p1, p2);
    /// ```
    #[must_use]
    #[allow(clippy::should_implement_trait)] // Provides ergonomic Option API; FromStr trait also implemented below
    pub fn from_str(s: &str) -> Option<Self> {
        let mut tiles = [TileResult::Absent; WORD_LENGTH];
        let mut chars = s.chars();

        for tile in &mut tiles {
            *tile = TileResult::from_char(chars.next()?)?;
        }

        if chars.next().is_some() {
            return None;
        }

        Some(Self(tiles))
    }

    /// Convert to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.0.iter().map(|tile| tile.emoji()).collect()
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_emoji())
    }
}

impl std::str::FromStr for Score {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str(s).ok_or_else(|| format!("Invalid score string: {s}"))
    }
}
