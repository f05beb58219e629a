//! Game configuration
//!
//! Selects and builds the word service a game runs against.

use crate::core::Word;
use crate::service::{HttpWordService, OfflineWordService, WordService, http::DEFAULT_API_URL};
use crate::wordlists::loader::load_from_file;
use anyhow::{Context, Result, bail};
use clap::ValueEnum;
use log::info;
use std::path::PathBuf;
use std::time::Duration;

/// Default per-request timeout for the remote word API
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Which kind of word service to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SourceKind {
    /// Remote words API
    #[default]
    Http,
    /// Embedded or file-based dictionary, no network
    Offline,
}

/// Fully resolved word service settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordSource {
    Http {
        base_url: String,
        timeout: Duration,
    },
    Offline {
        target: Option<Word>,
        dictionary: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub source: WordSource,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            source: WordSource::Http {
                base_url: DEFAULT_API_URL.to_string(),
                timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            },
        }
    }
}

impl GameConfig {
    /// Resolve raw settings (CLI flags or environment) into a config
    ///
    /// # Errors
    ///
    /// Returns an error if a fixed target is not a valid 5-letter word, or if
    /// offline-only settings are combined with the HTTP source.
    pub fn resolve(
        kind: SourceKind,
        api_url: Option<String>,
        timeout_secs: u64,
        target: Option<&str>,
        dictionary: Option<PathBuf>,
    ) -> Result<Self> {
        let source = match kind {
            SourceKind::Http => {
                if target.is_some() || dictionary.is_some() {
                    bail!("--target and --dictionary require --source offline");
                }
                WordSource::Http {
                    base_url: api_url.unwrap_or_else(|| DEFAULT_API_URL.to_string()),
                    timeout: Duration::from_secs(timeout_secs),
                }
            }
            SourceKind::Offline => {
                let target = target
                    .map(Word::new)
                    .transpose()
                    .map_err(|e| anyhow::anyhow!("Invalid target word: {e}"))?;
                WordSource::Offline { target, dictionary }
            }
        };

        Ok(Self { source })
    }

    /// Construct the configured word service
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built, or if a custom
    /// dictionary cannot be read or holds no words.
    pub fn build_service(&self) -> Result<Box<dyn WordService>> {
        match &self.source {
            WordSource::Http { base_url, timeout } => {
                info!("Using word API at {base_url}");
                let service = HttpWordService::new(base_url.clone(), *timeout)
                    .context("Failed to set up the word API client")?;
                Ok(Box::new(service))
            }
            WordSource::Offline { target, dictionary } => {
                let mut service = match dictionary {
                    Some(path) => {
                        let words = load_from_file(path).with_context(|| {
                            format!("Failed to read dictionary {}", path.display())
                        })?;
                        if words.is_empty() {
                            bail!("Dictionary {} has no 5-letter words", path.display());
                        }
                        info!("Loaded {} words from {}", words.len(), path.display());
                        OfflineWordService::from_words(words, Vec::new())
                    }
                    None => OfflineWordService::new(),
                };

                if let Some(target) = target {
                    service = service.with_target(target.clone());
                }
                Ok(Box::new(service))
            }
        }
    }
}
