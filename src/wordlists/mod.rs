//! Dictionaries for the offline word service
//!
//! `ANSWERS` holds the words that may be drawn as a target. `ALLOWED` is every
//! accepted guess (answers included), sorted for binary search.

mod embedded;
pub mod loader;

pub use embedded::{ALLOWED, ALLOWED_COUNT, ANSWERS, ANSWERS_COUNT};

/// Whether `text` is in the embedded dictionary
///
/// `text` must already be lowercase.
#[must_use]
pub fn is_allowed(text: &str) -> bool {
    ALLOWED.binary_search_by(|probe| (*probe).cmp(text)).is_ok()
}
