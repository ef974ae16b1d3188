//! Parsing a typed guess.

use thiserror::Error;

/// Why a guess was rejected. The `Display` text is shown to the player as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("Please enter a number!")]
    Empty,

    #[error("Invalid number!")]
    NotANumber,

    #[error("Number must be between 1 and {max}!")]
    OutOfRange { max: u32 },
}

/// Parse `input` as a guess in `1..=max`.
///
/// Surrounding whitespace is ignored. Numbers too large to parse at all are
/// reported as [`GuessError::NotANumber`].
pub fn parse_guess(input: &str, max: u32) -> Result<u32, GuessError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(GuessError::Empty);
    }

    let value: i64 = trimmed.parse().map_err(|_| GuessError::NotANumber)?;
    if value < 1 || value > i64::from(max) {
        return Err(GuessError::OutOfRange { max });
    }

    u32::try_from(value).map_err(|_| GuessError::OutOfRange { max })
}
