//! Word service failures

use std::error::Error as _;
use thiserror::Error;

/// A word service call that could not produce an answer
///
/// The engine treats every variant the same way: the service is unavailable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    #[error("word service request failed: {0}")]
    Network(String),
    #[error("word service returned status {0}")]
    Status(u16),
    #[error("word service response was malformed: {0}")]
    Malformed(String),
}

impl From<reqwest::Error> for ServiceError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            ServiceError::Status(status.as_u16())
        } else if err.is_decode() && !err.is_timeout() && caused_by_json(&err) {
            ServiceError::Malformed(err.to_string())
        } else {
            // reqwest also tags interrupted or timed-out body reads as decode errors
            ServiceError::Network(err.to_string())
        }
    }
}

fn caused_by_json(err: &reqwest::Error) -> bool {
    let mut source = err.source();
    while let Some(cause) = source {
        if cause.is::<serde_json::Error>() {
            return true;
        }
        source = cause.source();
    }
    false
}
