//! Word representation
//!
//! A Word stores a lowercase Polish word of 4-7 letters along with letter
//! position indices for evaluation and candidate filtering.

use super::alphabet;
use rustc_hash::FxHashMap;
use std::fmt;

/// Shortest supported word length
pub const MIN_WORD_LENGTH: usize = 4;
/// Longest supported word length
pub const MAX_WORD_LENGTH: usize = 7;

/// A Polish word of 4-7 letters with letter position tracking
///
/// Stores the normalized text plus a map of letter positions for duplicate
/// handling. Polish letters are non-ASCII, so positions index chars, never
/// bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    chars: Vec<char>,
    char_positions: FxHashMap<char, Vec<usize>>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    InvalidLength(usize),
    InvalidCharacter(char),
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(
                    f,
                    "Word must be {MIN_WORD_LENGTH}-{MAX_WORD_LENGTH} letters, got {len}"
                )
            }
            Self::InvalidCharacter(ch) => {
                write!(f, "'{ch}' is not a letter of the Polish alphabet")
            }
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// Input is lowercase-normalized before validation.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is outside 4-7 letters
    /// - Any character is not a Polish letter
    ///
    /// # Examples
    /// ```
    /// use slowko::core::Word;
    ///
    /// let word = Word::new("RZEKA").unwrap();
    /// assert_eq!(word.text(), "rzeka");
    ///
    /// assert!(Word::new("kot").is_err());
    /// assert!(Word::new("quiz").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let chars: Vec<char> = text.as_ref().chars().map(alphabet::normalize).collect();

        if !(MIN_WORD_LENGTH..=MAX_WORD_LENGTH).contains(&chars.len()) {
            return Err(WordError::InvalidLength(chars.len()));
        }

        if let Some(&bad) = chars.iter().find(|ch| !alphabet::is_polish_letter(**ch)) {
            return Err(WordError::InvalidCharacter(bad));
        }

        let text: String = chars.iter().collect();

        // Build position map for fast lookup
        let mut char_positions: FxHashMap<char, Vec<usize>> = FxHashMap::default();
        for (i, &ch) in chars.iter().enumerate() {
            char_positions.entry(ch).or_default().push(i);
        }

        Ok(Self {
            text,
            chars,
            char_positions,
        })
    }

    /// Create a Word that must have exactly `length` letters
    ///
    /// # Errors
    /// As [`Word::new`], plus `InvalidLength` when the letter count differs
    /// from `length`.
    pub fn with_length(text: impl AsRef<str>, length: usize) -> Result<Self, WordError> {
        let word = Self::new(text)?;
        if word.len() != length {
            return Err(WordError::InvalidLength(word.len()));
        }
        Ok(word)
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Always false; words are 4-7 letters by construction
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Get the word as a char slice
    #[inline]
    #[must_use]
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Get the character at a specific position
    ///
    /// # Panics
    /// Panics if position >= `len()`
    #[inline]
    #[must_use]
    pub fn char_at(&self, position: usize) -> char {
        self.chars[position]
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: char) -> bool {
        self.char_positions.contains_key(&letter)
    }

    /// Get all positions where a letter appears
    ///
    /// Returns an empty slice if the letter doesn't appear.
    #[inline]
    pub fn positions_of(&self, letter: char) -> &[usize] {
        self.char_positions
            .get(&letter)
            .map_or(&[], std::vec::Vec::as_slice)
    }

    /// How many times a letter occurs in the word
    #[inline]
    #[must_use]
    pub fn count_of(&self, letter: char) -> u8 {
        self.positions_of(letter).len() as u8
    }

    /// Get the count of each letter in the word
    ///
    /// Used for evaluation with duplicate letters.
    #[inline]
    pub(crate) fn char_counts(&self) -> FxHashMap<char, u8> {
        let mut counts = FxHashMap::default();
        for &ch in &self.chars {
            *counts.entry(ch).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
