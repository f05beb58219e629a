//! Wordle Engine
//!
//! Guess evaluation and game-state engine for a five-letter word game, with a
//! pluggable word service for the hidden target and dictionary checks.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_engine::core::{Word, Score, TileResult};
//!
//! let guess = Word::new("trace").unwrap();
//! let target = Word::new("crane").unwrap();
//!
//! let score = Score::calculate(&guess, &target);
//! assert_eq!(score.tiles()[1], TileResult::Correct);
//! println!("{score}");
//! ```
//!
//! Driving a full game:
//!
//! ```rust
//! use wordle_engine::core::Word;
//! use wordle_engine::engine::{GameStatus, Session};
//! use wordle_engine::service::OfflineWordService;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let service = OfflineWordService::new().with_target(Word::new("crane").unwrap());
//! let (mut session, _) = Session::start(service).await;
//!
//! for ch in "crane".chars() {
//!     session.enter_letter(ch);
//! }
//! let update = session.submit().await;
//! assert_eq!(update.status(), GameStatus::Won);
//! # }
//! ```

// Core domain types
pub mod core;

// Game-state engine
pub mod engine;

// Word service boundary
pub mod service;

// Embedded word lists
pub mod wordlists;

// Service selection
pub mod config;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
