//! Candidate filtering
//!
//! Turns an accumulated [`ConstraintSet`] into a predicate over words:
//! positional character classes first (cheap reject), then occurrence-count
//! requirements. Used for solver assistance and for checking which words
//! remain playable under hard-mode style restrictions.

use super::constraints::ConstraintSet;
use crate::core::Word;
use rayon::prelude::*;

/// A word predicate derived from accumulated board history
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateFilter {
    constraints: ConstraintSet,
}

impl CandidateFilter {
    /// Build a filter from an aggregated constraint set
    #[must_use]
    pub fn new(constraints: ConstraintSet) -> Self {
        Self { constraints }
    }

    /// Build a filter directly from a board's history
    #[must_use]
    pub fn from_board(board: &super::board::Board) -> Self {
        Self::new(ConstraintSet::aggregate(board))
    }

    /// The constraints backing this filter
    #[must_use]
    pub fn constraints(&self) -> &ConstraintSet {
        &self.constraints
    }

    /// Test whether a candidate is still consistent with all revealed
    /// information
    ///
    /// A candidate of the wrong length never passes.
    #[must_use]
    pub fn allows(&self, candidate: &Word) -> bool {
        if candidate.len() != self.constraints.word_length() {
            return false;
        }

        // Positional classes first
        for (i, &ch) in candidate.chars().iter().enumerate() {
            match self.constraints.confirmed_at(i) {
                Some(confirmed) => {
                    if ch != confirmed {
                        return false;
                    }
                }
                None => {
                    if self.constraints.is_globally_excluded(ch)
                        || self.constraints.excluded_at(i).contains(&ch)
                    {
                        return false;
                    }
                }
            }
        }

        // Occurrence counts second
        for (ch, count) in self.constraints.counts() {
            let occurrences = candidate.count_of(ch);
            if occurrences < count.min {
                return false;
            }
            if count.exact && occurrences != count.min {
                return false;
            }
        }

        true
    }

    /// Filter a word list down to the surviving candidates
    #[must_use]
    pub fn filter<'a>(&self, words: &'a [Word]) -> Vec<&'a Word> {
        words.par_iter().filter(|w| self.allows(w)).collect()
    }

    /// Count surviving candidates in a word list
    #[must_use]
    pub fn count(&self, words: &[Word]) -> usize {
        words.par_iter().filter(|w| self.allows(w)).count()
    }

    /// Human-readable per-position pattern
    ///
    /// Confirmed positions show their letter, open positions show the
    /// excluded letters as a negated class, unconstrained positions show a
    /// dot: `r[^ad].k.`
    #[must_use]
    pub fn position_pattern(&self) -> String {
        let mut pattern = String::new();
        for i in 0..self.constraints.word_length() {
            if let Some(ch) = self.constraints.confirmed_at(i) {
                pattern.push(ch);
                continue;
            }

            let mut excluded: Vec<char> = self
                .constraints
                .globally_excluded()
                .chain(self.constraints.excluded_at(i).iter().copied())
                .collect();
            excluded.sort_unstable();
            excluded.dedup();

            if excluded.is_empty() {
                pattern.push('.');
            } else {
                pattern.push_str("[^");
                pattern.extend(excluded);
                pattern.push(']');
            }
        }
        pattern
    }
}
