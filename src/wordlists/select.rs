//! Word list selection
//!
//! Picks the answer pool and valid-guess pool for a game configuration.
//! Selection is an explicit function of word length and the extra-hard
//! flag; nothing here reads shared state.

use super::embedded::{ANSWERS_4, ANSWERS_5, ANSWERS_6, ANSWERS_7, VALID_EXTRA};
use super::loader::words_from_slice;
use crate::core::{MAX_WORD_LENGTH, MIN_WORD_LENGTH, Word, WordError};

/// Answer and valid-guess pools for one game configuration
#[derive(Debug, Clone)]
pub struct WordList {
    answers: Vec<Word>,
    valid: Vec<Word>,
}

impl WordList {
    /// Build a list from explicit pools
    ///
    /// Guesses are accepted if they appear in either pool, so `valid` does
    /// not need to repeat the answers.
    #[must_use]
    pub fn from_parts(answers: Vec<Word>, valid: Vec<Word>) -> Self {
        Self { answers, valid }
    }

    /// Words that can be drawn as solutions
    #[inline]
    #[must_use]
    pub fn answers(&self) -> &[Word] {
        &self.answers
    }

    /// Additional words accepted as guesses
    #[inline]
    #[must_use]
    pub fn valid(&self) -> &[Word] {
        &self.valid
    }

    /// Whether a word is an acceptable guess
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.answers.contains(word) || self.valid.contains(word)
    }
}

/// Embedded answer words for one length
fn answers_for(length: usize) -> &'static [&'static str] {
    match length {
        4 => ANSWERS_4,
        5 => ANSWERS_5,
        6 => ANSWERS_6,
        _ => ANSWERS_7,
    }
}

/// Select the word lists for a game
///
/// With `extra_hard` the answer pool widens to every valid word of the
/// requested length, including obscure ones that are normally only
/// accepted as guesses.
///
/// # Errors
/// Returns `WordError::InvalidLength` for lengths outside 4-7.
pub fn select_word_list(length: usize, extra_hard: bool) -> Result<WordList, WordError> {
    if !(MIN_WORD_LENGTH..=MAX_WORD_LENGTH).contains(&length) {
        return Err(WordError::InvalidLength(length));
    }

    let answers = words_from_slice(answers_for(length));
    let valid: Vec<Word> = words_from_slice(VALID_EXTRA)
        .into_iter()
        .filter(|w| w.len() == length)
        .collect();

    if extra_hard {
        let mut all = answers;
        all.extend(valid.iter().cloned());
        Ok(WordList::from_parts(all, valid))
    } else {
        Ok(WordList::from_parts(answers, valid))
    }
}
