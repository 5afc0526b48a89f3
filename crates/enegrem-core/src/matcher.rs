//! Greedy first-match alignment between two letter sequences
//!
//! Each side keeps its original order. Letters of the other side are taken in
//! grouped (sorted) order and each one consumes the earliest unconsumed equal
//! letter. Consumed positions become `None`.

use crate::letter::Letter;
use serde::{Deserialize, Serialize};

/// Residual letters on both sides after matching
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alignment {
    /// Source letters in order, `None` where a candidate letter consumed them
    pub source_remaining: Vec<Option<Letter>>,
    /// Candidate letters in order, `None` where a source letter consumed them
    pub candidate_surplus: Vec<Option<Letter>>,
}

impl Alignment {
    /// Letters of the source that the candidate did not use
    pub fn remaining(&self) -> impl Iterator<Item = Letter> + '_ {
        self.source_remaining.iter().flatten().copied()
    }

    /// Letters of the candidate that the source cannot supply
    pub fn surplus(&self) -> impl Iterator<Item = Letter> + '_ {
        self.candidate_surplus.iter().flatten().copied()
    }
}

/// Align source letters against candidate letters
pub fn align(source: &[Letter], candidate: &[Letter]) -> Alignment {
    Alignment {
        source_remaining: consume(source, &grouped(candidate)),
        candidate_surplus: consume(candidate, &grouped(source)),
    }
}

/// Copy of `letters` with equal letters grouped together (alphabetical)
pub fn grouped(letters: &[Letter]) -> Vec<Letter> {
    let mut sorted = letters.to_vec();
    sorted.sort_unstable();
    sorted
}

/// Let each taker consume the first unconsumed equal position in `working`
fn consume(working: &[Letter], takers: &[Letter]) -> Vec<Option<Letter>> {
    let mut consumed = vec![false; working.len()];

    for &taker in takers {
        let hit = working
            .iter()
            .zip(&consumed)
            .position(|(&letter, &used)| !used && letter == taker);
        if let Some(pos) = hit {
            consumed[pos] = true;
        }
    }

    working
        .iter()
        .zip(consumed)
        .map(|(&letter, used)| (!used).then_some(letter))
        .collect()
}
