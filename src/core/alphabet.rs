//! The Polish alphabet
//!
//! Słówko words use the 32-letter Polish alphabet (no q, v or x). All engine
//! comparisons run on lowercase-normalized characters.

/// The 32 letters of the Polish alphabet, in collation order
pub const ALPHABET: [char; 32] = [
    'a', 'ą', 'b', 'c', 'ć', 'd', 'e', 'ę', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'ł', 'm', 'n', 'ń',
    'o', 'ó', 'p', 'r', 's', 'ś', 't', 'u', 'w', 'y', 'z', 'ź', 'ż',
];

/// On-screen keyboard layout, QWERTY order with Polish diacritics inlined
pub const KEYBOARD_ROWS: [&str; 3] = ["qweęrtyuioóp", "aąsśdfghjklł", "zźżxcćvbnńm"];

/// Check whether a (lowercase) character is a Polish letter
#[must_use]
pub fn is_polish_letter(ch: char) -> bool {
    ALPHABET.contains(&ch)
}

/// Normalize a character to its lowercase form
///
/// Polish letters lowercase one-to-one, so the first mapped character is the
/// whole result.
#[must_use]
pub fn normalize(ch: char) -> char {
    ch.to_lowercase().next().unwrap_or(ch)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphabet_has_32_letters() {
        assert_eq!(ALPHABET.len(), 32);
    }

    #[test]
    fn diacritics_are_letters() {
        for ch in ['ą', 'ć', 'ę', 'ł', 'ń', 'ó', 'ś', 'ź', 'ż'] {
            assert!(is_polish_letter(ch), "'{ch}' should be a Polish letter");
        }
    }

    #[test]
    fn foreign_letters_rejected() {
        for ch in ['q', 'v', 'x'] {
            assert!(!is_polish_letter(ch), "'{ch}' is not a Polish letter");
        }
    }

    #[test]
    fn normalize_uppercase_diacritics() {
        assert_eq!(normalize('Ż'), 'ż');
        assert_eq!(normalize('Ł'), 'ł');
        assert_eq!(normalize('Ó'), 'ó');
        assert_eq!(normalize('A'), 'a');
    }

    #[test]
    fn normalize_is_idempotent() {
        for &ch in &ALPHABET {
            assert_eq!(normalize(ch), ch);
        }
    }
}
