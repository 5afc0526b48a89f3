//! Signed per-letter difference between source and candidate

use crate::letter::Letter;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// How a single letter stands between source and candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LetterStatus {
    /// Used exactly as often as the source provides it
    Balanced,
    /// The source still has unused copies
    Missing,
    /// The candidate uses more copies than the source has
    Overused,
}

impl LetterStatus {
    /// Classify a signed difference (source minus candidate)
    pub fn from_diff(diff: i64) -> Self {
        match diff {
            0 => Self::Balanced,
            d if d > 0 => Self::Missing,
            _ => Self::Overused,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Balanced => "balanced",
            Self::Missing => "missing",
            Self::Overused => "overused",
        }
    }
}

/// Map from letter to `(occurrences in source) - (occurrences in candidate)`
///
/// Keys keep first-seen order: source letters first, then letters that only
/// the candidate has. Serializes as a JSON object keyed by letter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LetterCount(IndexMap<Letter, i64>);

impl LetterCount {
    /// Count source letters up and candidate letters down
    pub fn tally(source: &[Letter], candidate: &[Letter]) -> Self {
        let mut counts = IndexMap::new();
        for &letter in source {
            *counts.entry(letter).or_insert(0) += 1;
        }
        for &letter in candidate {
            *counts.entry(letter).or_insert(0) -= 1;
        }
        Self(counts)
    }

    /// Difference for a letter, `None` if neither side contains it
    pub fn get(&self, letter: Letter) -> Option<i64> {
        self.0.get(&letter).copied()
    }

    pub fn status(&self, letter: Letter) -> Option<LetterStatus> {
        self.get(letter).map(LetterStatus::from_diff)
    }

    /// Entries in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (Letter, i64)> + '_ {
        self.0.iter().map(|(&letter, &diff)| (letter, diff))
    }

    /// True when every observed letter has a difference of zero
    ///
    /// Vacuously true for an empty count.
    pub fn is_balanced(&self) -> bool {
        self.0.values().all(|&diff| diff == 0)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
