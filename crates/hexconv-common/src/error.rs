//! Error types shared across hexconv crates

use thiserror::Error;

/// Input text is not a sequence of paired hex digits once whitespace is removed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MalformedHexError {
    #[error("odd number of hex digits ({digits}) after removing whitespace")]
    OddLength { digits: usize },

    /// `position` is the byte offset in the original, unstripped text.
    #[error("invalid hex character {character:?} at byte {position}")]
    InvalidCharacter { character: char, position: usize },
}

impl MalformedHexError {
    /// Byte offset of the offending character, when there is one.
    pub fn position(&self) -> Option<usize> {
        match self {
            Self::OddLength { .. } => None,
            Self::InvalidCharacter { position, .. } => Some(*position),
        }
    }
}
