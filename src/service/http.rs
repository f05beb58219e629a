//! Remote word API client
//!
//! Talks to a words API exposing two endpoints:
//! - `GET  /word-of-the-day` → `{"word": "crane"}`
//! - `POST /validate-word` with `{"word": "crane"}` → `{"validWord": true}`
//!
//! Each call is a single request with no retries. Timeouts, transport errors,
//! non-2xx statuses and unexpected payloads all come back as `ServiceError`.

use super::{ServiceError, WordService};
use crate::core::Word;
use async_trait::async_trait;
use log::{debug, warn};
use reqwest::{Client, Response};
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;

/// Public words API used when no other base URL is configured
pub const DEFAULT_API_URL: &str = "https://words.dev-apis.com";

#[derive(Serialize)]
struct ValidateRequest<'a> {
    word: &'a str,
}

pub struct HttpWordService {
    client: Client,
    base_url: String,
}

impl HttpWordService {
    /// Create a client for `base_url` with a per-request timeout
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Network` if the HTTP client cannot be built
    /// (TLS backend or resolver initialisation failed).
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ServiceError> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ServiceError::Network(format!("could not build HTTP client: {e}")))?;

        Ok(Self { client, base_url })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn read_json(response: Response) -> Result<Value, ServiceError> {
        let status = response.status();
        if !status.is_success() {
            return Err(ServiceError::Status(status.as_u16()));
        }

        response.json().await.map_err(|e| {
            warn!("Could not read response body: {e}");
            ServiceError::from(e)
        })
    }
}

#[async_trait]
impl WordService for HttpWordService {
    async fn fetch_target_word(&self) -> Result<Word, ServiceError> {
        let url = format!("{}/word-of-the-day", self.base_url);
        debug!("Fetching target word from {url}");

        let response = self.client.get(&url).send().await.map_err(|e| {
            warn!("Target word request failed: {e}");
            ServiceError::from(e)
        })?;
        let data = Self::read_json(response).await?;

        let text = data["word"]
            .as_str()
            .ok_or_else(|| ServiceError::Malformed("missing `word` field".to_string()))?;

        Word::new(text).map_err(|e| ServiceError::Malformed(format!("target {text:?}: {e}")))
    }

    async fn validate_word(&self, candidate: &Word) -> Result<bool, ServiceError> {
        let url = format!("{}/validate-word", self.base_url);
        debug!("Validating {candidate} against {url}");

        let payload = ValidateRequest {
            word: candidate.text(),
        };
        let response = self
            .client
            .post(&url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                warn!("Validation request for {candidate} failed: {e}");
                ServiceError::from(e)
            })?;
        let data = Self::read_json(response).await?;

        data["validWord"]
            .as_bool()
            .ok_or_else(|| ServiceError::Malformed("missing `validWord` field".to_string()))
    }
}
