//! Polish word lists
//!
//! Embedded answer and valid-guess lists compiled into the binary, plus
//! explicit list selection per game configuration.

mod embedded;
pub mod loader;
mod select;

pub use embedded::{
    ANSWERS_4, ANSWERS_4_COUNT, ANSWERS_5, ANSWERS_5_COUNT, ANSWERS_6, ANSWERS_6_COUNT, ANSWERS_7,
    ANSWERS_7_COUNT, VALID_EXTRA, VALID_EXTRA_COUNT,
};
pub use select::{WordList, select_word_list};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_match_consts() {
        assert_eq!(ANSWERS_4.len(), ANSWERS_4_COUNT);
        assert_eq!(ANSWERS_5.len(), ANSWERS_5_COUNT);
        assert_eq!(ANSWERS_6.len(), ANSWERS_6_COUNT);
        assert_eq!(ANSWERS_7.len(), ANSWERS_7_COUNT);
        assert_eq!(VALID_EXTRA.len(), VALID_EXTRA_COUNT);
    }

    #[test]
    fn answer_lists_have_uniform_lengths() {
        for (length, list) in [(4, ANSWERS_4), (5, ANSWERS_5), (6, ANSWERS_6), (7, ANSWERS_7)] {
            for &word in list {
                assert_eq!(
                    word.chars().count(),
                    length,
                    "word '{word}' is not {length} letters"
                );
            }
        }
    }

    #[test]
    fn answer_lists_are_lowercase_polish() {
        use crate::core::Word;

        for list in [ANSWERS_4, ANSWERS_5, ANSWERS_6, ANSWERS_7, VALID_EXTRA] {
            for &word in list {
                let parsed = Word::new(word).unwrap_or_else(|e| panic!("'{word}': {e}"));
                assert_eq!(parsed.text(), word, "'{word}' is not normalized");
            }
        }
    }

    #[test]
    fn no_duplicate_answers() {
        for list in [ANSWERS_4, ANSWERS_5, ANSWERS_6, ANSWERS_7] {
            let unique: std::collections::HashSet<_> = list.iter().collect();
            assert_eq!(unique.len(), list.len());
        }
    }
}
