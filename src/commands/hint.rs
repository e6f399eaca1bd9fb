//! Hint command
//!
//! Reconstructs a board from guess history given on the command line and
//! lists the answers still consistent with it.

use crate::board::{Board, CandidateFilter};
use crate::core::{EvaluationRow, Word};
use crate::wordlists::WordList;

/// Result of a hint query
pub struct HintResult {
    /// Regex-style position pattern, e.g. `rze[^c][^cz]`
    pub pattern: String,
    /// Letters known to be absent everywhere, sorted
    pub excluded_letters: Vec<char>,
    /// Known letter counts as `(letter, min, exact)`, sorted by letter
    pub letter_counts: Vec<(char, u8, bool)>,
    /// Answers consistent with the history
    pub candidates: Vec<String>,
    /// Size of the answer pool searched
    pub total_answers: usize,
}

/// Parse one `word=symbols` history entry
///
/// Symbols use `G`/`🟩` for correct, `Y`/`🟨` for present and `-`/`⬛` for
/// absent, one per letter: `radio=G-Y--`.
fn parse_entry(entry: &str, length: usize) -> Result<(Word, EvaluationRow), String> {
    let (word, symbols) = entry
        .split_once('=')
        .ok_or_else(|| format!("Oczekiwano formatu słowo=symbole, otrzymano \"{entry}\""))?;

    let word = Word::with_length(word, length).map_err(|e| format!("\"{word}\": {e}"))?;
    let row = EvaluationRow::from_symbols(symbols)
        .ok_or_else(|| format!("Nieprawidłowe symbole \"{symbols}\" (użyj G, Y, - lub emoji)"))?;

    if row.len() != length {
        return Err(format!(
            "\"{entry}\": {} symboli dla słowa o długości {length}",
            row.len()
        ));
    }
    Ok((word, row))
}

/// List the candidate answers for a guess history
///
/// # Errors
///
/// Returns an error if any history entry is malformed or describes an
/// already-finished board.
pub fn find_candidates(
    history: &[String],
    length: usize,
    list: &WordList,
) -> Result<HintResult, String> {
    let mut board = Board::new(length);
    for entry in history {
        let (word, row) = parse_entry(entry, length)?;
        board = board.commit(word, row).map_err(|e| e.to_string())?;
    }

    let filter = CandidateFilter::from_board(&board);
    let candidates = filter
        .filter(list.answers())
        .into_iter()
        .map(|w| w.text().to_string())
        .collect();

    let mut excluded_letters: Vec<char> = filter.constraints().globally_excluded().collect();
    excluded_letters.sort_unstable();

    let mut letter_counts: Vec<(char, u8, bool)> = filter
        .constraints()
        .counts()
        .map(|(ch, count)| (ch, count.min, count.exact))
        .collect();
    letter_counts.sort_unstable();

    Ok(HintResult {
        pattern: filter.position_pattern(),
        excluded_letters,
        letter_counts,
        candidates,
        total_answers: list.answers().len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::select_word_list;

    #[test]
    fn empty_history_keeps_every_answer() {
        let list = select_word_list(5, false).unwrap();
        let result = find_candidates(&[], 5, &list).unwrap();

        assert_eq!(result.candidates.len(), result.total_answers);
        assert_eq!(result.pattern, ".....");
    }

    #[test]
    fn history_narrows_candidates() {
        let list = select_word_list(5, false).unwrap();
        let history = vec!["radio=GY---".to_string()];
        let result = find_candidates(&history, 5, &list).unwrap();

        assert!(result.candidates.len() < result.total_answers);
        assert!(result.candidates.contains(&"rzeka".to_string()));
        // 'd' was absent
        assert!(result.excluded_letters.contains(&'d'));
        assert!(!result.candidates.iter().any(|w| w.contains('d')));
        // 'r' confirmed and 'a' present, each at least once
        assert!(result.letter_counts.contains(&('r', 1, false)));
        assert!(result.letter_counts.contains(&('a', 1, false)));
    }

    #[test]
    fn emoji_symbols_accepted() {
        let list = select_word_list(5, false).unwrap();
        let history = vec!["radio=🟩🟨⬛⬛⬛".to_string()];
        let result = find_candidates(&history, 5, &list).unwrap();
        assert!(result.candidates.contains(&"rzeka".to_string()));
    }

    #[test]
    fn rejects_malformed_entries() {
        let list = select_word_list(5, false).unwrap();

        assert!(find_candidates(&["radio".to_string()], 5, &list).is_err());
        assert!(find_candidates(&["radio=G-Y".to_string()], 5, &list).is_err());
        assert!(find_candidates(&["rad=G-Y--".to_string()], 5, &list).is_err());
        assert!(find_candidates(&["radio=G?Y--".to_string()], 5, &list).is_err());
    }
}
