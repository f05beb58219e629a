//! Guess and target words
//!
//! Guesses and the hidden target are both built through `Word::new`, so they
//! share one normalized form (trimmed, lowercase) and compare case-insensitively.

use super::WORD_LENGTH;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A normalized five-letter word
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    chars: [u8; WORD_LENGTH],
}

/// Reasons a string is not a playable word
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    #[error("expected 5 letters, got {0}")]
    InvalidLength(usize),
    #[error("only ASCII letters are allowed")]
    NonAscii,
    #[error("only the letters a-z are allowed")]
    InvalidCharacters,
}

impl Word {
    /// Normalize and validate `text`
    ///
    /// Surrounding whitespace is dropped and letters are lowercased, so
    /// `" Crane\n"` and `"crane"` are the same word.
    ///
    /// # Errors
    /// `NonAscii` for any non-ASCII character, `InvalidLength` unless exactly
    /// five characters remain, `InvalidCharacters` for anything outside a-z.
    ///
    /// # Examples
    /// ```
    /// use wordle_engine::core::{Word, WordError};
    ///
    /// assert_eq!(Word::new(" Crane\n").unwrap().text(), "crane");
    /// assert_eq!(Word::new("cranes"), Err(WordError::InvalidLength(6)));
    /// assert_eq!(Word::new("cr4ne"), Err(WordError::InvalidCharacters));
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref().trim();
        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        let text = text.to_ascii_lowercase();
        let Ok(chars) = <[u8; WORD_LENGTH]>::try_from(text.as_bytes()) else {
            return Err(WordError::InvalidLength(text.len()));
        };
        if chars.iter().any(|b| !b.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self { text, chars })
    }

    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Letters as lowercase ASCII bytes
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; WORD_LENGTH] {
        &self.chars
    }

    /// Letter at `position`
    ///
    /// # Panics
    /// If `position >= WORD_LENGTH`.
    #[inline]
    #[must_use]
    pub const fn char_at(&self, position: usize) -> u8 {
        self.chars[position]
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
