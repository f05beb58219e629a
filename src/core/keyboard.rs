//! Best-known letter hints across all scored rows

use super::{Score, TileResult, Word};
use rustc_hash::FxHashMap;

/// Per-letter hint state for an on-screen keyboard
///
/// A letter only ever upgrades: Absent → Present → Correct.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Keyboard {
    letters: FxHashMap<u8, TileResult>,
}

impl Keyboard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a scored guess into the keyboard
    pub fn record(&mut self, guess: &Word, score: &Score) {
        for (&letter, &tile) in guess.chars().iter().zip(score.tiles()) {
            self.letters
                .entry(letter)
                .and_modify(|known| {
                    if tile.rank() > known.rank() {
                        *known = tile;
                    }
                })
                .or_insert(tile);
        }
    }

    /// Best hint seen for a letter, if it has been guessed
    #[inline]
    #[must_use]
    pub fn get(&self, letter: u8) -> Option<TileResult> {
        self.letters.get(&letter.to_ascii_lowercase()).copied()
    }

    /// Letters guessed so far with their hints, alphabetically
    #[must_use]
    pub fn letters(&self) -> Vec<(u8, TileResult)> {
        let mut letters: Vec<_> = self.letters.iter().map(|(&l, &t)| (l, t)).collect();
        letters.sort_unstable_by_key(|&(letter, _)| letter);
        letters
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(keyboard: &mut Keyboard, guess: &str, target: &str) {
        let guess = Word::new(guess).unwrap();
        let target = Word::new(target).unwrap();
        let score = Score::calculate(&guess, &target);
        keyboard.record(&guess, &score);
    }

    #[test]
    fn keyboard_starts_empty() {
        let keyboard = Keyboard::new();
        assert_eq!(keyboard.get(b'a'), None);
        assert!(keyboard.letters().is_empty());
    }

    #[test]
    fn keyboard_records_row() {
        let mut keyboard = Keyboard::new();
        record(&mut keyboard, "trace", "crane");

        assert_eq!(keyboard.get(b't'), Some(TileResult::Absent));
        assert_eq!(keyboard.get(b'r'), Some(TileResult::Correct));
        assert_eq!(keyboard.get(b'c'), Some(TileResult::Present));
        assert_eq!(keyboard.get(b'z'), None);
    }

    #[test]
    fn keyboard_correct_is_never_downgraded() {
        let mut keyboard = Keyboard::new();
        record(&mut keyboard, "crane", "cabin"); // C correct
        record(&mut keyboard, "bacon", "cabin"); // C present
        assert_eq!(keyboard.get(b'c'), Some(TileResult::Correct));
    }

    #[test]
    fn keyboard_duplicate_letter_keeps_best() {
        let mut keyboard = Keyboard::new();
        // First E present, second E absent within the same row
        record(&mut keyboard, "eerie", "abbey");
        assert_eq!(keyboard.get(b'e'), Some(TileResult::Present));
    }

    #[test]
    fn keyboard_upgrades_within_row() {
        let mut keyboard = Keyboard::new();
        // Leading E is absent, the E at index 3 is exact
        record(&mut keyboard, "emcee", "abbey");
        assert_eq!(keyboard.get(b'e'), Some(TileResult::Correct));
    }

    #[test]
    fn keyboard_accumulates_rows() {
        let mut keyboard = Keyboard::new();
        record(&mut keyboard, "eerie", "abbey");
        record(&mut keyboard, "dirty", "abbey");
        assert_eq!(keyboard.get(b'y'), Some(TileResult::Correct));
        assert_eq!(keyboard.get(b'i'), Some(TileResult::Absent));
        assert_eq!(keyboard.get(b'e'), Some(TileResult::Present));
    }

    #[test]
    fn keyboard_lookup_is_case_insensitive() {
        let mut keyboard = Keyboard::new();
        record(&mut keyboard, "crane", "crane");
        assert_eq!(keyboard.get(b'C'), Some(TileResult::Correct));
    }
}
