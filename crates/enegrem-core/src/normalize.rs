//! Text normalization and letter extraction

use crate::letter::Letter;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Uppercase, decompose (NFD) and drop combining marks
///
/// `"café"` becomes `"CAFE"`. Characters without a decomposition pass through
/// unchanged, so non-Latin scripts survive here and are dropped later by
/// [`extract_letters`].
pub fn normalize(text: &str) -> String {
    text.to_uppercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect()
}

/// Keep only ASCII letters, in order
pub fn extract_letters(normalized: &str) -> Vec<Letter> {
    normalized
        .chars()
        .filter_map(|c| Letter::new(c).ok())
        .collect()
}

/// Normalize raw text and extract its letters
pub fn letters_of(text: &str) -> Vec<Letter> {
    extract_letters(&normalize(text))
}
