//! Async driver pairing a guess engine with a word service

use super::{GuessEngine, Intent, Phase, Request, Update};
use crate::service::WordService;
use log::debug;

/// One player's game against a word service
///
/// Runs the engine's service requests to completion. Because every method
/// takes `&mut self`, at most one request is in flight per session.
pub struct Session<S: WordService> {
    service: S,
    engine: GuessEngine,
}

impl<S: WordService> Session<S> {
    /// Create a session and fetch its target word
    ///
    /// Check the returned update: a failed fetch leaves the session in
    /// `Phase::Error` until `restart` succeeds.
    pub async fn start(service: S) -> (Self, Update) {
        let mut session = Self {
            service,
            engine: GuessEngine::new(),
        };
        let update = session.fulfil(Request::FetchTarget).await;
        (session, update)
    }

    /// Abandon the current game and fetch a new target
    pub async fn restart(&mut self) -> Update {
        let update = self.engine.reset();
        self.drive(update).await
    }

    #[must_use]
    pub const fn engine(&self) -> &GuessEngine {
        &self.engine
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.engine.phase()
    }

    #[must_use]
    pub const fn service(&self) -> &S {
        &self.service
    }

    pub fn enter_letter(&mut self, ch: char) -> Update {
        self.engine.enter_letter(ch)
    }

    pub fn backspace(&mut self) -> Update {
        self.engine.backspace()
    }

    /// Submit the entry, waiting for validation if the engine asks for it
    pub async fn submit(&mut self) -> Update {
        let update = self.engine.submit();
        self.drive(update).await
    }

    /// Apply an intent and run any service call it triggers
    pub async fn handle(&mut self, intent: Intent) -> Update {
        let update = self.engine.handle(intent);
        self.drive(update).await
    }

    async fn drive(&mut self, update: Update) -> Update {
        match update.request.clone() {
            Some(request) => self.fulfil(request).await,
            None => update,
        }
    }

    async fn fulfil(&mut self, request: Request) -> Update {
        debug!("Fulfilling {request:?}");
        match request {
            Request::FetchTarget => {
                let result = self.service.fetch_target_word().await;
                self.engine.target_resolved(result)
            }
            Request::Validate(word) => {
                let result = self.service.validate_word(&word).await;
                self.engine.validation_resolved(result)
            }
        }
    }
}
