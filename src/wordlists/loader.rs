//! Turning raw word lists into dictionary words

use crate::core::Word;
use log::debug;
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::Path;

/// Read a dictionary file, one word per line
///
/// See `parse_word_list` for the accepted format.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use wordle_engine::wordlists::loader::load_from_file;
///
/// let words = load_from_file("my_words.txt").unwrap();
/// println!("{} playable words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let path = path.as_ref();
    let words = parse_word_list(&fs::read_to_string(path)?);
    debug!("Read {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Parse dictionary text into distinct words, keeping first-seen order
///
/// Blank lines and `#` comments are skipped, as is any line that is not a
/// playable five-letter word.
#[must_use]
pub fn parse_word_list(content: &str) -> Vec<Word> {
    let mut seen = FxHashSet::default();
    let mut skipped = 0usize;
    let mut words = Vec::new();

    for line in content.lines().map(str::trim) {
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        match Word::new(line) {
            Ok(word) if seen.insert(word.clone()) => words.push(word),
            Ok(_) => {}
            Err(_) => skipped += 1,
        }
    }

    if skipped > 0 {
        debug!("Skipped {skipped} entries that are not {} letters", crate::core::WORD_LENGTH);
    }
    words
}

/// Convert an embedded list into words
///
/// # Examples
/// ```
/// use wordle_engine::wordlists::loader::words_from_slice;
/// use wordle_engine::wordlists::ANSWERS;
///
/// assert_eq!(words_from_slice(ANSWERS).len(), ANSWERS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}
