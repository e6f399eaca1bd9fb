//! Per-cell letter feedback states
//!
//! Each board cell carries one of four states. The derive order doubles as
//! the "best known state" order used when merging keyboard colors:
//! `Empty < Absent < Present < Correct`.

use std::fmt;

/// Feedback state of a single letter cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum LetterState {
    /// Unrevealed cell
    #[default]
    Empty,
    /// Letter not in the solution (or all its copies already matched)
    Absent,
    /// Letter in the solution, wrong position
    Present,
    /// Letter in the correct position
    Correct,
}

impl LetterState {
    /// Whether the cell has been revealed by an evaluation
    #[inline]
    #[must_use]
    pub const fn is_revealed(self) -> bool {
        !matches!(self, Self::Empty)
    }

    /// Merge two observations, keeping the better-known state
    ///
    /// # Examples
    /// ```
    /// use slowko::core::LetterState;
    ///
    /// assert_eq!(LetterState::Present.merge(LetterState::Correct), LetterState::Correct);
    /// assert_eq!(LetterState::Correct.merge(LetterState::Absent), LetterState::Correct);
    /// ```
    #[inline]
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        self.max(other)
    }

    /// Display glyph for share grids and terminal boards
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬛',
            Self::Empty => '🔳',
        }
    }

    /// Parse a single feedback symbol
    ///
    /// Accepts `G`/`g`/🟩 for correct, `Y`/`y`/🟨 for present and
    /// `-`/`_`/⬛/⬜ for absent.
    #[must_use]
    pub const fn from_symbol(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Correct),
            'Y' | 'y' | '🟨' => Some(Self::Present),
            '-' | '_' | '⬛' | '⬜' => Some(Self::Absent),
            _ => None,
        }
    }
}

impl fmt::Display for LetterState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.emoji())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_total_order() {
        assert!(LetterState::Empty < LetterState::Absent);
        assert!(LetterState::Absent < LetterState::Present);
        assert!(LetterState::Present < LetterState::Correct);
    }

    #[test]
    fn merge_keeps_best_known() {
        use LetterState::{Absent, Correct, Empty, Present};

        assert_eq!(Empty.merge(Absent), Absent);
        assert_eq!(Absent.merge(Present), Present);
        assert_eq!(Present.merge(Absent), Present);
        assert_eq!(Correct.merge(Present), Correct);
        assert_eq!(Correct.merge(Correct), Correct);
    }

    #[test]
    fn from_symbol_variants() {
        assert_eq!(LetterState::from_symbol('G'), Some(LetterState::Correct));
        assert_eq!(LetterState::from_symbol('🟩'), Some(LetterState::Correct));
        assert_eq!(LetterState::from_symbol('y'), Some(LetterState::Present));
        assert_eq!(LetterState::from_symbol('-'), Some(LetterState::Absent));
        assert_eq!(LetterState::from_symbol('⬛'), Some(LetterState::Absent));
        assert_eq!(LetterState::from_symbol('z'), None);
    }

    #[test]
    fn default_is_empty() {
        assert_eq!(LetterState::default(), LetterState::Empty);
        assert!(!LetterState::default().is_revealed());
    }
}
