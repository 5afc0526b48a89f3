//! Letter type: a single case-folded A-Z character

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error type for values that are not a single comparable letter
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LetterError {
    #[error("'{0}' is not an ASCII letter")]
    NotALetter(char),

    #[error("a letter must be exactly one character")]
    InvalidLength,
}

/// A comparable letter (e.g., `A`)
///
/// Letters are always stored uppercase. Lowercase ASCII input is folded on
/// construction; anything outside `a-z`/`A-Z` is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Letter(u8);

impl Letter {
    /// Create a letter from a character, folding ASCII case
    pub fn new(c: char) -> Result<Self, LetterError> {
        if c.is_ascii_alphabetic() {
            Ok(Self(c.to_ascii_uppercase() as u8))
        } else {
            Err(LetterError::NotALetter(c))
        }
    }

    /// The uppercase character for this letter
    pub fn as_char(self) -> char {
        self.0 as char
    }

    /// Position in the alphabet (`A` is 0, `Z` is 25)
    pub fn index(self) -> usize {
        (self.0 - b'A') as usize
    }
}

impl TryFrom<char> for Letter {
    type Error = LetterError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Self::new(c)
    }
}

impl FromStr for Letter {
    type Err = LetterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::new(c),
            _ => Err(LetterError::InvalidLength),
        }
    }
}

impl TryFrom<String> for Letter {
    type Error = LetterError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Letter> for String {
    fn from(letter: Letter) -> String {
        letter.to_string()
    }
}

impl From<Letter> for char {
    fn from(letter: Letter) -> char {
        letter.as_char()
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
