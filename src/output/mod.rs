//! Terminal output formatting
//!
//! Utilities for displaying game state with colors and formatting.

pub mod display;
pub mod formatters;

pub use display::{print_board, print_score_result, print_share};
