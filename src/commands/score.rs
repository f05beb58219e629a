//! One-shot scoring of a guess against a known target

use crate::core::{Score, Word};
use crate::wordlists::is_allowed;
use anyhow::{Result, anyhow};

/// Result of scoring one guess
pub struct ScoreResult {
    pub guess: Word,
    pub target: Word,
    pub score: Score,
    /// The guess is in the embedded dictionary
    pub in_dictionary: bool,
}

/// Score `guess` against `target`
///
/// The guess is scored even when it is not a dictionary word; `in_dictionary`
/// says whether a game would have accepted it.
///
/// # Errors
///
/// Returns an error if either word is not exactly 5 ASCII letters.
pub fn score_guess(guess: &str, target: &str) -> Result<ScoreResult> {
    let guess = Word::new(guess).map_err(|e| anyhow!("Invalid guess: {e}"))?;
    let target = Word::new(target).map_err(|e| anyhow!("Invalid target word: {e}"))?;
    let score = Score::calculate(&guess, &target);
    let in_dictionary = is_allowed(guess.text());

    Ok(ScoreResult {
        guess,
        target,
        score,
        in_dictionary,
    })
}
