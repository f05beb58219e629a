//! Word service boundary
//!
//! The engine depends on two questions only: what is the hidden word, and is a
//! given guess a real word. Implementations answer them over HTTP or from the
//! embedded dictionary.

mod error;
pub mod http;
mod offline;

pub use error::ServiceError;
pub use http::HttpWordService;
pub use offline::OfflineWordService;

use crate::core::Word;
use async_trait::async_trait;
use std::sync::Arc;

/// Source of target words and dictionary checks
#[async_trait]
pub trait WordService: Send + Sync {
    /// Retrieve the target word for a new game
    async fn fetch_target_word(&self) -> Result<Word, ServiceError>;

    /// Check whether `candidate` is an accepted dictionary word
    ///
    /// This says nothing about whether it matches the target.
    async fn validate_word(&self, candidate: &Word) -> Result<bool, ServiceError>;
}

#[async_trait]
impl<S: WordService + ?Sized> WordService for Arc<S> {
    async fn fetch_target_word(&self) -> Result<Word, ServiceError> {
        (**self).fetch_target_word().await
    }

    async fn validate_word(&self, candidate: &Word) -> Result<bool, ServiceError> {
        (**self).validate_word(candidate).await
    }
}

#[async_trait]
impl<S: WordService + ?Sized> WordService for Box<S> {
    async fn fetch_target_word(&self) -> Result<Word, ServiceError> {
        (**self).fetch_target_word().await
    }

    async fn validate_word(&self, candidate: &Word) -> Result<bool, ServiceError> {
        (**self).validate_word(candidate).await
    }
}
