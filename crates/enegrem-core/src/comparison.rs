//! The full comparison of a source text against a candidate anagram

use crate::counter::LetterCount;
use crate::letter::Letter;
use crate::matcher::{self, Alignment};
use crate::normalize::letters_of;
use serde::{Deserialize, Serialize};

/// Result of comparing a candidate against its source text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comparison {
    /// Source count minus candidate count, per letter
    pub letter_count: LetterCount,
    /// Source letters in order, `None` where the candidate used them
    pub source_remaining: Vec<Option<Letter>>,
    /// Candidate letters in order, `None` where the source supplied them
    pub candidate_surplus: Vec<Option<Letter>>,
    /// Source is non-empty and both sides have the same letters
    pub is_complete: bool,
    /// Source letters, grouped alphabetically
    pub source_letters: Vec<Letter>,
    /// Candidate letters, grouped alphabetically
    pub candidate_letters: Vec<Letter>,
}

/// Compare `candidate` against the letters available in `source`
///
/// Total and pure: every pair of strings yields a result, and the same pair
/// always yields the same result. Emptiness of the source is judged on the raw
/// string, so a source made only of digits or punctuation can still complete.
pub fn compare(source: &str, candidate: &str) -> Comparison {
    let source_order = letters_of(source);
    let candidate_order = letters_of(candidate);

    let source_letters = matcher::grouped(&source_order);
    let candidate_letters = matcher::grouped(&candidate_order);

    let Alignment {
        source_remaining,
        candidate_surplus,
    } = matcher::align(&source_order, &candidate_order);

    let letter_count = LetterCount::tally(&source_letters, &candidate_letters);
    let is_complete = !source.is_empty() && letter_count.is_balanced();

    Comparison {
        letter_count,
        source_remaining,
        candidate_surplus,
        is_complete,
        source_letters,
        candidate_letters,
    }
}

impl Comparison {
    /// Source letters the candidate has not used yet, in source order
    pub fn remaining(&self) -> impl Iterator<Item = Letter> + '_ {
        self.source_remaining.iter().flatten().copied()
    }

    /// Candidate letters the source cannot supply, in candidate order
    pub fn surplus(&self) -> impl Iterator<Item = Letter> + '_ {
        self.candidate_surplus.iter().flatten().copied()
    }

    /// Number of source letters matched by the candidate
    pub fn matched(&self) -> usize {
        self.source_remaining.iter().filter(|l| l.is_none()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spell(letters: impl Iterator<Item = Letter>) -> String {
        letters.map(|l| l.as_char()).collect()
    }

    #[test]
    fn test_identical_words_complete() {
        assert!(compare("cat", "cat").is_complete);
    }

    #[test]
    fn test_empty_source_never_completes() {
        assert!(!compare("", "").is_complete);
        assert!(!compare("", "abc").is_complete);
    }

    #[test]
    fn test_non_letter_source_completes_vacuously() {
        let result = compare("123", "");
        assert!(result.letter_count.is_empty());
        assert!(result.is_complete);

        assert!(!compare("123", "a").is_complete);
    }

    #[test]
    fn test_partial_overlap() {
        let result = compare("hello", "hole");
        assert!(!result.is_complete);
        assert_eq!(spell(result.remaining()), "L");
        assert_eq!(result.source_remaining[2], None);
        assert_eq!(result.source_remaining[3], Some(Letter::new('L').unwrap()));
        assert_eq!(result.surplus().count(), 0);
        assert_eq!(result.matched(), 4);
    }

    #[test]
    fn test_grouped_letter_lists() {
        let result = compare("Codroipo", "ocropoid");
        assert_eq!(spell(result.source_letters.iter().copied()), "CDIOOOPR");
        assert_eq!(result.source_letters, result.candidate_letters);
    }

    #[test]
    fn test_letter_count_order_follows_grouped_scan() {
        let result = compare("tac", "cab");
        let keys = spell(result.letter_count.iter().map(|(l, _)| l));
        assert_eq!(keys, "ACTB");
    }
}
