//! Board history aggregation
//!
//! Folds committed rows into the accumulated per-letter knowledge: letters
//! excluded from the whole solution, letters excluded from specific
//! positions, confirmed positions and minimum/exact occurrence counts. The
//! set is a pure function of the board and is recomputed from scratch on
//! every call rather than patched incrementally.

use super::board::Board;
use crate::core::{EvaluationRow, LetterState, Word};
use rustc_hash::{FxHashMap, FxHashSet};

/// Occurrence requirement for one letter
///
/// `min` is the number of copies the solution is known to contain. When a
/// guess reuses the letter more times than the solution holds, the surplus
/// copy comes back `Absent`, which proves the count is capped: `exact`
/// becomes true.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LetterCount {
    pub min: u8,
    pub exact: bool,
}

/// Accumulated constraints derived from a board's guess history
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintSet {
    word_length: usize,
    global_excluded: FxHashSet<char>,
    positional_excluded: Vec<FxHashSet<char>>,
    confirmed_position: Vec<Option<char>>,
    letter_count: FxHashMap<char, LetterCount>,
}

impl ConstraintSet {
    /// A neutral constraint set for the given word length
    #[must_use]
    pub fn new(word_length: usize) -> Self {
        Self {
            word_length,
            global_excluded: FxHashSet::default(),
            positional_excluded: vec![FxHashSet::default(); word_length],
            confirmed_position: vec![None; word_length],
            letter_count: FxHashMap::default(),
        }
    }

    /// Aggregate all committed rows of a board
    ///
    /// An empty board yields the neutral set; this is not an error.
    #[must_use]
    pub fn aggregate(board: &Board) -> Self {
        let mut constraints = Self::new(board.word_length());
        for entry in board.rows() {
            constraints.absorb_row(entry.guess(), entry.row());
        }
        constraints
    }

    /// Fold one evaluated row into the set
    ///
    /// An `Absent` cell only excludes its letter globally when no cell of
    /// the same row scored that letter as `Correct` or `Present`; otherwise
    /// the solution does contain the letter and the absent copy merely caps
    /// the occurrence count and excludes that single position.
    fn absorb_row(&mut self, guess: &Word, row: &EvaluationRow) {
        // Per-letter Correct/Present occurrences across the whole row,
        // counted up front so the result is independent of column order
        let mut scored: FxHashMap<char, u8> = FxHashMap::default();
        for (i, &state) in row.states().iter().enumerate() {
            if matches!(state, LetterState::Correct | LetterState::Present) {
                *scored.entry(guess.char_at(i)).or_insert(0) += 1;
            }
        }

        let mut capped: FxHashSet<char> = FxHashSet::default();

        for (i, &state) in row.states().iter().enumerate() {
            let ch = guess.char_at(i);
            match state {
                LetterState::Correct => {
                    self.confirmed_position[i] = Some(ch);
                    // A confirmed letter is never also excluded at its position
                    self.positional_excluded[i].remove(&ch);
                }
                LetterState::Present => {
                    if self.confirmed_position[i] != Some(ch) {
                        self.positional_excluded[i].insert(ch);
                    }
                }
                LetterState::Absent => {
                    if scored.contains_key(&ch) {
                        // Letter exists elsewhere in the solution; this copy
                        // was surplus
                        if self.confirmed_position[i] != Some(ch) {
                            self.positional_excluded[i].insert(ch);
                        }
                        capped.insert(ch);
                    } else {
                        self.global_excluded.insert(ch);
                    }
                }
                LetterState::Empty => {}
            }
        }

        for (ch, count) in scored {
            // Keep global exclusions disjoint from counted letters
            self.global_excluded.remove(&ch);

            let entry = self.letter_count.entry(ch).or_default();
            if count > entry.min {
                entry.min = count;
            }
            if capped.contains(&ch) {
                entry.exact = true;
            }
        }
    }

    /// Word length the constraints apply to
    #[inline]
    #[must_use]
    pub fn word_length(&self) -> usize {
        self.word_length
    }

    /// Whether a letter is known absent from the whole solution
    #[inline]
    #[must_use]
    pub fn is_globally_excluded(&self, letter: char) -> bool {
        self.global_excluded.contains(&letter)
    }

    /// Letters known not to occupy a specific position
    ///
    /// # Panics
    /// Panics if position >= `word_length()`
    #[inline]
    #[must_use]
    pub fn excluded_at(&self, position: usize) -> &FxHashSet<char> {
        &self.positional_excluded[position]
    }

    /// Letter confirmed correct at a position, if known
    ///
    /// # Panics
    /// Panics if position >= `word_length()`
    #[inline]
    #[must_use]
    pub fn confirmed_at(&self, position: usize) -> Option<char> {
        self.confirmed_position[position]
    }

    /// All confirmed positions
    #[inline]
    #[must_use]
    pub fn confirmed(&self) -> &[Option<char>] {
        &self.confirmed_position
    }

    /// Occurrence requirement for a letter, if tracked
    #[inline]
    #[must_use]
    pub fn count_for(&self, letter: char) -> Option<LetterCount> {
        self.letter_count.get(&letter).copied()
    }

    /// Iterate over all tracked occurrence requirements
    pub fn counts(&self) -> impl Iterator<Item = (char, LetterCount)> + '_ {
        self.letter_count.iter().map(|(&ch, &count)| (ch, count))
    }

    /// Letters excluded from the whole solution
    pub fn globally_excluded(&self) -> impl Iterator<Item = char> + '_ {
        self.global_excluded.iter().copied()
    }
}
