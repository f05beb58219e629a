//! Guess engine state machine
//!
//! The engine never performs I/O. Whenever it needs the word service it moves
//! into a busy phase and returns an `Update` whose `request` tells the driver
//! what to call. The driver reports the answer through `target_resolved` or
//! `validation_resolved`. While busy, every player intent is a no-op, so a
//! slow response can never race new input or trigger a second request.

use super::{GuessRow, Intent, Phase, Rejection, Request, Update};
use crate::core::{Keyboard, MAX_ROWS, Score, WORD_LENGTH, Word};
use crate::service::ServiceError;
use log::{debug, info, warn};

/// Single-game state: target, active row, entry and board history
#[derive(Debug, Clone)]
pub struct GuessEngine {
    phase: Phase,
    target: Option<Word>,
    row: usize,
    entry: String,
    history: Vec<GuessRow>,
    keyboard: Keyboard,
    pending: Option<Word>,
}

impl GuessEngine {
    /// Create an engine waiting for its target word
    ///
    /// The driver must fetch the target (see `pending_request`) and report it
    /// with `target_resolved` before anything else is accepted.
    #[must_use]
    pub fn new() -> Self {
        Self {
            phase: Phase::Loading,
            target: None,
            row: 0,
            entry: String::with_capacity(WORD_LENGTH),
            history: Vec::with_capacity(MAX_ROWS),
            keyboard: Keyboard::new(),
            pending: None,
        }
    }

    /// Throw away the current game and wait for a new target
    pub fn reset(&mut self) -> Update {
        debug!("Resetting engine from {}", self.phase);
        *self = Self::new();
        let mut update = self.snapshot();
        update.request = Some(Request::FetchTarget);
        update
    }

    #[inline]
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    #[inline]
    #[must_use]
    pub const fn row(&self) -> usize {
        self.row
    }

    #[inline]
    #[must_use]
    pub fn entry(&self) -> &str {
        &self.entry
    }

    /// Committed rows in the order they were played
    #[must_use]
    pub fn history(&self) -> &[GuessRow] {
        &self.history
    }

    #[must_use]
    pub const fn keyboard(&self) -> &Keyboard {
        &self.keyboard
    }

    /// The target, once the game is over
    #[must_use]
    pub fn revealed_target(&self) -> Option<&Word> {
        match self.phase {
            Phase::Won | Phase::Lost => self.target.as_ref(),
            _ => None,
        }
    }

    /// The service call the engine is currently waiting on
    #[must_use]
    pub fn pending_request(&self) -> Option<Request> {
        match self.phase {
            Phase::Loading => Some(Request::FetchTarget),
            Phase::AwaitingValidation => self.pending.clone().map(Request::Validate),
            _ => None,
        }
    }

    /// Report the outcome of the target fetch
    ///
    /// A failure is fatal for this game: the engine enters `Error`.
    pub fn target_resolved(&mut self, result: Result<Word, ServiceError>) -> Update {
        if self.phase != Phase::Loading {
            debug!("Ignoring target result in phase {}", self.phase);
            return self.ignored();
        }

        match result {
            Ok(target) => {
                info!("Game ready, {MAX_ROWS} rows of {WORD_LENGTH} letters");
                self.target = Some(target);
                self.phase = Phase::Ready;
                self.snapshot()
            }
            Err(err) => {
                warn!("Target word unavailable: {err}");
                self.phase = Phase::Error;
                self.rejected(Rejection::TargetUnavailable(err))
            }
        }
    }

    /// Dispatch a normalized player intent
    pub fn handle(&mut self, intent: Intent) -> Update {
        if self.phase.is_busy() {
            debug!("Dropping {intent:?} while {}", self.phase);
            return self.ignored();
        }

        match intent {
            Intent::Letter(ch) => self.enter_letter(ch),
            Intent::Backspace => self.backspace(),
            Intent::Submit => self.submit(),
        }
    }

    /// Append a letter to the entry
    ///
    /// Input is lowercased first. Anything outside `a-z`, or a letter typed into
    /// a full entry, is ignored.
    pub fn enter_letter(&mut self, ch: char) -> Update {
        if self.phase != Phase::Ready {
            return self.ignored();
        }

        let ch = ch.to_ascii_lowercase();
        if !ch.is_ascii_lowercase() || self.entry.len() >= WORD_LENGTH {
            return self.ignored();
        }

        self.entry.push(ch);
        self.snapshot()
    }

    /// Remove the last letter of the entry, if any
    pub fn backspace(&mut self) -> Update {
        if self.phase != Phase::Ready || self.entry.pop().is_none() {
            return self.ignored();
        }

        self.snapshot()
    }

    /// Submit the entry for validation
    ///
    /// A full entry moves the engine to `AwaitingValidation` and the returned
    /// update carries `Request::Validate`. A short entry is rejected with
    /// `IncompleteGuess` and nothing changes.
    pub fn submit(&mut self) -> Update {
        if self.phase != Phase::Ready {
            debug!("Ignoring submit in phase {}", self.phase);
            return self.ignored();
        }

        // The entry only ever holds a-z, so length is the only way to fail
        let guess = match Word::new(&self.entry) {
            Ok(guess) => guess,
            Err(_) => return self.rejected(Rejection::IncompleteGuess),
        };

        debug!("Row {}: validating {guess}", self.row);
        self.phase = Phase::AwaitingValidation;
        self.pending = Some(guess.clone());

        let mut update = self.snapshot();
        update.request = Some(Request::Validate(guess));
        update
    }

    /// Report the outcome of the dictionary check for the pending guess
    pub fn validation_resolved(&mut self, result: Result<bool, ServiceError>) -> Update {
        if self.phase != Phase::AwaitingValidation {
            debug!("Ignoring validation result in phase {}", self.phase);
            return self.ignored();
        }

        let Some(guess) = self.pending.take() else {
            self.phase = Phase::Ready;
            return self.ignored();
        };

        match result {
            Ok(true) => self.commit(guess),
            Ok(false) => {
                debug!("{guess} is not in the word list");
                self.phase = Phase::Ready;
                self.rejected(Rejection::InvalidWord)
            }
            Err(err) => {
                warn!("Could not validate {guess}: {err}");
                self.phase = Phase::Ready;
                self.rejected(Rejection::ServiceUnavailable(err))
            }
        }
    }

    fn commit(&mut self, guess: Word) -> Update {
        let Some(target) = self.target.as_ref() else {
            self.phase = Phase::Ready;
            return self.ignored();
        };

        let score = Score::calculate(&guess, target);
        self.keyboard.record(&guess, &score);
        self.history.push(GuessRow {
            word: guess,
            score,
        });
        self.entry.clear();

        let mut revealed_target = None;
        if score.is_win() {
            info!("Won on row {}", self.row + 1);
            self.phase = Phase::Won;
        } else {
            self.row += 1;
            if self.row == MAX_ROWS {
                info!("Lost, target was {target}");
                revealed_target = Some(target.clone());
                self.phase = Phase::Lost;
            } else {
                self.phase = Phase::Ready;
            }
        }

        let mut update = self.snapshot();
        update.tiles = Some(score);
        update.revealed_target = revealed_target;
        update
    }

    fn snapshot(&self) -> Update {
        Update {
            phase: self.phase,
            row: self.row,
            entry: self.entry.clone(),
            tiles: None,
            rejection: None,
            revealed_target: None,
            request: None,
            keyboard: self.keyboard.clone(),
            ignored: false,
        }
    }

    fn ignored(&self) -> Update {
        Update {
            ignored: true,
            ..self.snapshot()
        }
    }

    fn rejected(&self, rejection: Rejection) -> Update {
        Update {
            rejection: Some(rejection),
            ..self.snapshot()
        }
    }
}

impl Default for GuessEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TileResult::{Absent, Correct, Present};
    use crate::engine::GameStatus;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn ready_engine(target: &str) -> GuessEngine {
        let mut engine = GuessEngine::new();
        engine.target_resolved(Ok(word(target)));
        engine
    }

    fn type_word(engine: &mut GuessEngine, text: &str) {
        for ch in text.chars() {
            engine.enter_letter(ch);
        }
    }

    /// Type, submit and accept a guess as a valid word
    fn play(engine: &mut GuessEngine, guess: &str) -> Update {
        type_word(engine, guess);
        let update = engine.submit();
        assert_eq!(update.request, Some(Request::Validate(word(guess))));
        engine.validation_resolved(Ok(true))
    }

    #[test]
    fn new_engine_is_loading() {
        let engine = GuessEngine::new();
        assert_eq!(engine.phase(), Phase::Loading);
        assert_eq!(engine.pending_request(), Some(Request::FetchTarget));
        assert_eq!(engine.row(), 0);
        assert_eq!(engine.entry(), "");
    }

    #[test]
    fn target_fetch_success_enters_ready() {
        let mut engine = GuessEngine::new();
        let update = engine.target_resolved(Ok(word("crane")));

        assert_eq!(update.phase, Phase::Ready);
        assert_eq!(update.row, 0);
        assert_eq!(update.entry, "");
        assert!(update.rejection.is_none());
        assert_eq!(engine.pending_request(), None);
    }

    #[test]
    fn target_fetch_failure_is_terminal() {
        let mut engine = GuessEngine::new();
        let err = ServiceError::Network("connection refused".to_string());
        let update = engine.target_resolved(Err(err.clone()));

        assert_eq!(update.phase, Phase::Error);
        assert_eq!(update.rejection, Some(Rejection::TargetUnavailable(err)));
        assert!(!update.rejection.unwrap().is_recoverable());

        // Nothing is accepted afterwards
        type_word(&mut engine, "crane");
        assert_eq!(engine.entry(), "");
        assert!(engine.submit().ignored);
        assert!(engine.target_resolved(Ok(word("crane"))).ignored);
        assert_eq!(engine.phase(), Phase::Error);
    }

    #[test]
    fn intents_while_loading_are_ignored() {
        let mut engine = GuessEngine::new();

        assert!(engine.enter_letter('a').ignored);
        assert!(engine.backspace().ignored);
        let update = engine.submit();
        assert!(update.ignored);
        assert!(update.request.is_none());

        assert_eq!(engine.entry(), "");
        assert_eq!(engine.phase(), Phase::Loading);
    }

    #[test]
    fn enter_letter_appends_lowercase() {
        let mut engine = ready_engine("crane");
        let update = engine.enter_letter('C');

        assert!(!update.ignored);
        assert_eq!(update.entry, "c");
    }

    #[test]
    fn enter_letter_rejects_non_letters_silently() {
        let mut engine = ready_engine("crane");
        for ch in ['1', ' ', '!', 'é', '\n'] {
            let update = engine.enter_letter(ch);
            assert!(update.ignored, "{ch:?} should be ignored");
            assert!(update.rejection.is_none());
        }
        assert_eq!(engine.entry(), "");
    }

    #[test]
    fn entry_never_exceeds_word_length() {
        let mut engine = ready_engine("crane");
        type_word(&mut engine, "cranes");

        assert_eq!(engine.entry(), "crane");
        assert!(engine.enter_letter('x').ignored);
    }

    #[test]
    fn backspace_removes_last_letter() {
        let mut engine = ready_engine("crane");
        type_word(&mut engine, "cra");

        let update = engine.backspace();
        assert_eq!(update.entry, "cr");
        assert!(!update.ignored);
    }

    #[test]
    fn backspace_on_empty_entry_is_noop() {
        let mut engine = ready_engine("crane");
        let update = engine.backspace();
        assert!(update.ignored);
        assert!(update.rejection.is_none());
        assert_eq!(engine.entry(), "");
    }

    #[test]
    fn submit_short_entry_is_incomplete_guess() {
        let mut engine = ready_engine("crane");
        type_word(&mut engine, "cra");

        let update = engine.submit();
        assert_eq!(update.rejection, Some(Rejection::IncompleteGuess));
        assert_eq!(update.rejection.unwrap().to_string(), "Not enough letters");
        assert!(update.request.is_none());
        assert_eq!(engine.entry(), "cra");
        assert_eq!(engine.phase(), Phase::Ready);
        assert_eq!(engine.row(), 0);
    }

    #[test]
    fn submit_full_entry_requests_validation() {
        let mut engine = ready_engine("crane");
        type_word(&mut engine, "trace");

        let update = engine.submit();
        assert_eq!(update.phase, Phase::AwaitingValidation);
        assert_eq!(update.request, Some(Request::Validate(word("trace"))));
        assert_eq!(
            engine.pending_request(),
            Some(Request::Validate(word("trace")))
        );
    }

    #[test]
    fn intents_while_validating_are_ignored() {
        let mut engine = ready_engine("crane");
        type_word(&mut engine, "trace");
        engine.submit();

        assert!(engine.enter_letter('x').ignored);
        assert!(engine.backspace().ignored);

        // A second submit must not issue another request
        let again = engine.submit();
        assert!(again.ignored);
        assert!(again.request.is_none());

        assert_eq!(engine.entry(), "trace");
        assert_eq!(engine.phase(), Phase::AwaitingValidation);
    }

    #[test]
    fn invalid_word_keeps_entry_and_row() {
        let mut engine = ready_engine("crane");
        type_word(&mut engine, "xyzzy");
        engine.submit();

        let update = engine.validation_resolved(Ok(false));
        assert_eq!(update.rejection, Some(Rejection::InvalidWord));
        assert_eq!(update.rejection.unwrap().to_string(), "Not in word list");
        assert_eq!(update.phase, Phase::Ready);
        assert_eq!(update.row, 0);
        assert_eq!(update.entry, "xyzzy");
        assert!(update.tiles.is_none());
        assert!(engine.history().is_empty());
    }

    #[test]
    fn validation_service_error_is_recoverable() {
        let mut engine = ready_engine("crane");
        type_word(&mut engine, "trace");
        engine.submit();

        let err = ServiceError::Status(503);
        let update = engine.validation_resolved(Err(err.clone()));
        assert_eq!(update.rejection, Some(Rejection::ServiceUnavailable(err)));
        assert!(update.rejection.unwrap().is_recoverable());
        assert_eq!(update.phase, Phase::Ready);
        assert_eq!(update.entry, "trace");
        assert_eq!(update.row, 0);

        // Retry goes through
        let retry = engine.submit();
        assert_eq!(retry.request, Some(Request::Validate(word("trace"))));
    }

    #[test]
    fn stray_validation_result_is_ignored() {
        let mut engine = ready_engine("crane");
        let update = engine.validation_resolved(Ok(true));
        assert!(update.ignored);
        assert!(engine.history().is_empty());
    }

    #[test]
    fn winning_guess_ends_game() {
        let mut engine = ready_engine("crane");
        let update = play(&mut engine, "CRANE");

        assert_eq!(update.tiles, Some(Score::PERFECT));
        assert_eq!(update.phase, Phase::Won);
        assert_eq!(update.status(), GameStatus::Won);
        assert_eq!(update.row, 0);
        assert!(update.revealed_target.is_none());
        assert_eq!(engine.revealed_target(), Some(&word("crane")));
    }

    #[test]
    fn wrong_guess_advances_row() {
        let mut engine = ready_engine("crane");
        let update = play(&mut engine, "trace");

        assert_eq!(
            update.tiles.unwrap().tiles(),
            &[Absent, Correct, Correct, Present, Correct]
        );
        assert_eq!(update.status(), GameStatus::InProgress);
        assert_eq!(update.phase, Phase::Ready);
        assert_eq!(update.row, 1);
        assert_eq!(update.entry, "");
        assert_eq!(update.keyboard.get(b't'), Some(Absent));
        assert_eq!(engine.history().len(), 1);
        assert_eq!(engine.revealed_target(), None);
    }

    #[test]
    fn duplicate_letter_scenario() {
        let mut engine = ready_engine("abbey");
        let update = play(&mut engine, "banal");
        assert_eq!(
            update.tiles.unwrap().tiles(),
            &[Present, Present, Absent, Absent, Absent]
        );
    }

    #[test]
    fn six_wrong_guesses_lose_exactly_on_the_last() {
        let mut engine = ready_engine("crane");
        let guesses = ["fight", "trace", "abbey", "dirty", "slate", "mouse"];

        for (i, guess) in guesses.iter().enumerate() {
            let update = play(&mut engine, guess);
            if i + 1 < MAX_ROWS {
                assert_eq!(update.status(), GameStatus::InProgress, "row {i}");
                assert!(update.revealed_target.is_none());
            } else {
                assert_eq!(update.status(), GameStatus::Lost);
                assert_eq!(update.row, MAX_ROWS);
                assert_eq!(update.revealed_target, Some(word("crane")));
            }
        }

        assert_eq!(engine.history().len(), MAX_ROWS);
        assert_eq!(engine.revealed_target(), Some(&word("crane")));
    }

    #[test]
    fn win_on_last_row() {
        let mut engine = ready_engine("crane");
        for guess in ["fight", "trace", "abbey", "dirty", "slate"] {
            play(&mut engine, guess);
        }
        let update = play(&mut engine, "crane");
        assert_eq!(update.status(), GameStatus::Won);
        assert_eq!(update.row, MAX_ROWS - 1);
    }

    #[test]
    fn terminal_state_ignores_everything() {
        let mut engine = ready_engine("crane");
        play(&mut engine, "crane");

        for intent in [Intent::Letter('a'), Intent::Backspace, Intent::Submit] {
            let update = engine.handle(intent);
            assert!(update.ignored);
            assert_eq!(update.status(), GameStatus::Won);
        }
        assert!(engine.validation_resolved(Ok(true)).ignored);
        assert_eq!(engine.history().len(), 1);
    }

    #[test]
    fn handle_dispatches_intents() {
        let mut engine = ready_engine("crane");
        engine.handle(Intent::Letter('c'));
        engine.handle(Intent::Letter('r'));
        engine.handle(Intent::Backspace);
        assert_eq!(engine.entry(), "c");

        let update = engine.handle(Intent::Submit);
        assert_eq!(update.rejection, Some(Rejection::IncompleteGuess));
    }

    #[test]
    fn reset_starts_a_new_game() {
        let mut engine = ready_engine("crane");
        play(&mut engine, "trace");

        let update = engine.reset();
        assert_eq!(update.phase, Phase::Loading);
        assert_eq!(update.request, Some(Request::FetchTarget));
        assert!(engine.history().is_empty());
        assert!(engine.keyboard().letters().is_empty());
        assert_eq!(engine.row(), 0);
    }
}
