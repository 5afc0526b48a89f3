//! Core comparison for ENEGREM
//!
//! This crate answers one question: can a candidate text be written using
//! exactly the letters of a source text? It provides the fundamental types
//! used by the other ENEGREM crates: Letter, LetterCount, Alignment and
//! Comparison.
//!
//! Text is uppercased, decomposed and stripped of diacritics, then reduced to
//! its ASCII letters. Everything else (digits, spaces, punctuation, emoji,
//! other scripts) is ignored.
//!
//! # Example
//!
//! ```
//! use enegrem_core::compare;
//!
//! let result = compare("Codroipo", "ocropoid");
//! assert!(result.is_complete);
//!
//! let result = compare("cat", "cats");
//! assert!(!result.is_complete);
//! assert_eq!(result.surplus().count(), 1);
//! ```

mod comparison;
mod counter;
mod letter;
pub mod matcher;
pub mod normalize;

pub use comparison::{compare, Comparison};
pub use counter::{LetterCount, LetterStatus};
pub use letter::{Letter, LetterError};
pub use matcher::Alignment;
pub use normalize::{extract_letters, letters_of, normalize};
