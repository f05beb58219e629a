//! Embedded word lists
//!
//! Generated by `build.rs` from `data/answers.txt` and `data/guesses.txt`.

include!(concat!(env!("OUT_DIR"), "/answers.rs"));
include!(concat!(env!("OUT_DIR"), "/allowed.rs"));
