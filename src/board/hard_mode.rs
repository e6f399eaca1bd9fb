//! Hard-mode validation
//!
//! In hard mode every guess must reuse the information revealed by the
//! previous guess: confirmed letters stay in place, present letters must
//! appear somewhere. Only the first violation is reported, with position
//! locks taking priority, matching the one-message-at-a-time UX.

use crate::core::{EvaluationRow, LetterState, Word};
use std::fmt;

/// What a guess failed to respect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationKind {
    /// A confirmed-correct letter was moved off its position
    PositionLock,
    /// A revealed-present letter is missing from the guess
    MustInclude,
}

/// A single hard-mode violation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Violation {
    /// Position in the previous guess that revealed the letter
    pub position: usize,
    /// The letter the rule is about
    pub letter: char,
    pub kind: ViolationKind,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = self.letter.to_uppercase();
        match self.kind {
            ViolationKind::PositionLock => {
                write!(
                    f,
                    "Litera {letter} musi stać na pozycji {}",
                    self.position + 1
                )
            }
            ViolationKind::MustInclude => {
                write!(f, "Słowo musi zawierać literę {letter}")
            }
        }
    }
}

/// Check a new guess against the previous guess's revealed constraints
///
/// Scans positions left to right: first all `Correct` cells (the letter must
/// stay put), then all `Present` cells (the letter must appear somewhere).
/// Returns the first violation found, or `None` when the guess is valid.
///
/// # Examples
/// ```
/// use slowko::board::{ViolationKind, check_hard_mode};
/// use slowko::core::{EvaluationRow, Word, evaluate};
///
/// let previous = Word::new("radio").unwrap();
/// let solution = Word::new("rzeka").unwrap();
/// let row = evaluate(&previous, &solution).unwrap();
///
/// // "kotek" drops the confirmed leading R
/// let violation = check_hard_mode(&previous, &row, &Word::new("kotek").unwrap());
/// assert_eq!(violation.unwrap().kind, ViolationKind::PositionLock);
/// ```
#[must_use]
pub fn check_hard_mode(
    previous_guess: &Word,
    previous_row: &EvaluationRow,
    new_guess: &Word,
) -> Option<Violation> {
    for (i, &state) in previous_row.states().iter().enumerate() {
        if state == LetterState::Correct && new_guess.char_at(i) != previous_guess.char_at(i) {
            return Some(Violation {
                position: i,
                letter: previous_guess.char_at(i),
                kind: ViolationKind::PositionLock,
            });
        }
    }

    for (i, &state) in previous_row.states().iter().enumerate() {
        if state == LetterState::Present && !new_guess.has_letter(previous_guess.char_at(i)) {
            return Some(Violation {
                position: i,
                letter: previous_guess.char_at(i),
                kind: ViolationKind::MustInclude,
            });
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::evaluate;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    fn previous(guess: &str, solution: &str) -> (Word, EvaluationRow) {
        let guess = word(guess);
        let row = evaluate(&guess, &word(solution)).unwrap();
        (guess, row)
    }

    #[test]
    fn valid_guess_passes() {
        // radio vs rzeka: r confirmed at 0, a present
        let (prev, row) = previous("radio", "rzeka");
        assert_eq!(check_hard_mode(&prev, &row, &word("rzeka")), None);
        assert_eq!(check_hard_mode(&prev, &row, &word("ranga")), None);
    }

    #[test]
    fn moved_correct_letter_reports_position_lock() {
        let (prev, row) = previous("radio", "rzeka");

        let violation = check_hard_mode(&prev, &row, &word("kotek")).unwrap();
        assert_eq!(violation.kind, ViolationKind::PositionLock);
        assert_eq!(violation.position, 0);
        assert_eq!(violation.letter, 'r');
    }

    #[test]
    fn missing_present_letter_reports_must_include() {
        // Starts with r but drops the revealed 'a'
        let (prev, row) = previous("radio", "rzeka");

        let violation = check_hard_mode(&prev, &row, &word("rzepy")).unwrap();
        assert_eq!(violation.kind, ViolationKind::MustInclude);
        assert_eq!(violation.letter, 'a');
        assert_eq!(violation.position, 1);
    }

    #[test]
    fn position_lock_takes_priority() {
        // Guess violates both rules; the position lock is reported
        let (prev, row) = previous("radio", "rzeka");

        let violation = check_hard_mode(&prev, &row, &word("kotki")).unwrap();
        assert_eq!(violation.kind, ViolationKind::PositionLock);
    }

    #[test]
    fn first_position_lock_wins() {
        let (prev, row) = previous("rzecz", "rzeka");

        // r, z, e all confirmed; breaking z and e reports z (leftmost)
        let violation = check_hard_mode(&prev, &row, &word("radio")).unwrap();
        assert_eq!(violation.position, 1);
        assert_eq!(violation.letter, 'z');
    }

    #[test]
    fn present_letter_accepted_at_any_position() {
        let (prev, row) = previous("radio", "rzeka");

        // 'a' moved to the end is fine
        assert_eq!(check_hard_mode(&prev, &row, &word("rzeka")), None);
    }

    #[test]
    fn absent_letters_are_unconstrained() {
        let (prev, row) = previous("radio", "rzeka");

        // d, i, o were absent; reusing them is allowed (hard mode only
        // enforces reuse of revealed letters)
        assert_eq!(check_hard_mode(&prev, &row, &word("rodak")), None);
    }
}
