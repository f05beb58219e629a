//! Game-state engine
//!
//! `GuessEngine` is the synchronous state machine; `Session` drives it against
//! a `WordService`.

mod machine;
mod phase;
mod session;
mod update;

pub use machine::GuessEngine;
pub use phase::{GameStatus, Phase};
pub use session::Session;
pub use update::{GuessRow, Intent, Rejection, Request, Update};
