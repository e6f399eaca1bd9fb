//! Word list loading utilities
//!
//! Provides functions to load word lists from files or convert the embedded
//! constants.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Load words of one length from a file
///
/// Returns valid `Word`s of exactly `length` letters, skipping blank lines
/// and any entries that fail validation.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use slowko::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/answers_5.txt", 5).unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P, length: usize) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;

    let words = content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Word::with_length(trimmed, length).ok()
            }
        })
        .collect();

    Ok(words)
}

/// Convert an embedded string slice to a Word vector
///
/// # Examples
/// ```
/// use slowko::wordlists::{ANSWERS_5, loader::words_from_slice};
///
/// let words = words_from_slice(ANSWERS_5);
/// assert_eq!(words.len(), ANSWERS_5.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let input = &["rzeka", "radio", "serce"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "rzeka");
        assert_eq!(words[1].text(), "radio");
        assert_eq!(words[2].text(), "serce");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let input = &["rzeka", "kot", "quiz!", "dach"];
        let words = words_from_slice(input);

        // "kot" is too short, "quiz!" has foreign characters
        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "rzeka");
        assert_eq!(words[1].text(), "dach");
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        assert!(words_from_slice(input).is_empty());
    }

    #[test]
    fn load_from_embedded_answers() {
        use crate::wordlists::ANSWERS_5;

        let words = words_from_slice(ANSWERS_5);
        assert_eq!(words.len(), ANSWERS_5.len());
    }
}
