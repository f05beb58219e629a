//! Dictionary-backed word service that never touches the network

use super::{ServiceError, WordService};
use crate::core::Word;
use crate::wordlists::{ALLOWED, ANSWERS, loader::words_from_slice};
use async_trait::async_trait;
use log::debug;
use rand::prelude::IndexedRandom;
use rustc_hash::FxHashSet;

/// Word service answering from an in-memory dictionary
///
/// Targets are drawn uniformly from the answer list unless a fixed target is
/// set. A word is valid if it is in the allowed list or the answer list.
pub struct OfflineWordService {
    answers: Vec<Word>,
    allowed: FxHashSet<Word>,
    fixed_target: Option<Word>,
}

impl OfflineWordService {
    /// Service over the embedded word lists
    #[must_use]
    pub fn new() -> Self {
        Self::from_words(words_from_slice(ANSWERS), words_from_slice(ALLOWED))
    }

    /// Service over caller-supplied lists
    #[must_use]
    pub fn from_words(answers: Vec<Word>, allowed: impl IntoIterator<Item = Word>) -> Self {
        let mut allowed: FxHashSet<Word> = allowed.into_iter().collect();
        allowed.extend(answers.iter().cloned());

        Self {
            answers,
            allowed,
            fixed_target: None,
        }
    }

    /// Always hand out `target` instead of drawing one
    ///
    /// The target is also accepted as a valid guess.
    #[must_use]
    pub fn with_target(mut self, target: Word) -> Self {
        self.allowed.insert(target.clone());
        self.fixed_target = Some(target);
        self
    }

    #[must_use]
    pub fn dictionary_size(&self) -> usize {
        self.allowed.len()
    }
}

impl Default for OfflineWordService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl WordService for OfflineWordService {
    async fn fetch_target_word(&self) -> Result<Word, ServiceError> {
        if let Some(target) = &self.fixed_target {
            return Ok(target.clone());
        }

        let target = self
            .answers
            .choose(&mut rand::rng())
            .ok_or_else(|| ServiceError::Malformed("answer list is empty".to_string()))?;
        debug!("Drew offline target from {} answers", self.answers.len());
        Ok(target.clone())
    }

    async fn validate_word(&self, candidate: &Word) -> Result<bool, ServiceError> {
        Ok(self.allowed.contains(candidate))
    }
}
