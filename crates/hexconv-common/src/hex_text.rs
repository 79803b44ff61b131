//! Hex text decoding
//!
//! Hex text is a run of case-insensitive hex digit pairs (high nibble first)
//! that may be broken up by spaces and line endings. Decoding removes every
//! space, `\n` and `\r`, then converts the remaining digits pair by pair.
//! Any other character, tabs included, is malformed input.

use crate::error::MalformedHexError;

/// Characters removed before decoding.
pub const STRIPPED_CHARS: [u8; 3] = [b' ', b'\n', b'\r'];

fn is_stripped(byte: u8) -> bool {
    STRIPPED_CHARS.contains(&byte)
}

/// Remove spaces and line endings, keeping every other byte in order.
pub fn strip_whitespace(text: impl AsRef<[u8]>) -> Vec<u8> {
    text.as_ref()
        .iter()
        .copied()
        .filter(|b| !is_stripped(*b))
        .collect()
}

/// Decode hex text into bytes.
///
/// Pure and deterministic: the same input always yields the same result,
/// and empty (or whitespace-only) input decodes to an empty payload.
/// A bad character is reported before an odd digit count, so its position
/// is never lost.
pub fn decode(text: impl AsRef<[u8]>) -> Result<Vec<u8>, MalformedHexError> {
    let raw = text.as_ref();

    if let Some(position) = raw
        .iter()
        .position(|b| !is_stripped(*b) && !b.is_ascii_hexdigit())
    {
        return Err(invalid_character(raw, position));
    }

    // Only digits remain, so the only possible failure is an odd count.
    let digits = strip_whitespace(raw);
    hex::decode(&digits).map_err(|_| MalformedHexError::OddLength {
        digits: digits.len(),
    })
}

/// Build the error for the byte at `position` of the original text.
fn invalid_character(raw: &[u8], position: usize) -> MalformedHexError {
    // Every byte before `position` is a hex digit or stripped, so it starts a char.
    let end = (position + 4).min(raw.len());
    let character = raw
        .get(position..end)
        .and_then(|tail| String::from_utf8_lossy(tail).chars().next())
        .unwrap_or(char::REPLACEMENT_CHARACTER);

    MalformedHexError::InvalidCharacter {
        character,
        position,
    }
}
