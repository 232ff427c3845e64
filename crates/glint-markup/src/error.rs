//! Markup syntax errors.

use thiserror::Error;

/// Error returned when markup is malformed.
///
/// Positions are zero-based character (not byte) offsets into the input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MarkupError {
    /// A control character followed by a character that is not a known code.
    #[error("unknown format code '{character}' at position {position}")]
    UnknownFormatCode { position: usize, character: char },

    /// A true color code ended before six hex digits were read.
    #[error("incomplete true color code at position {position}: expected 6 hex digits, found {found:?}")]
    IncompleteTrueColor { position: usize, found: String },

    /// A true color code contained a character that is not a hex digit.
    #[error("invalid hex digit '{found}' in true color code at position {position}")]
    InvalidTrueColor { position: usize, found: char },

    /// The input ended directly after a control character.
    #[error("control character '{control}' at position {position} is not followed by a code")]
    DanglingControl { position: usize, control: char },
}

impl MarkupError {
    /// Offset of the offending character.
    pub fn position(&self) -> usize {
        match self {
            MarkupError::UnknownFormatCode { position, .. }
            | MarkupError::IncompleteTrueColor { position, .. }
            | MarkupError::InvalidTrueColor { position, .. }
            | MarkupError::DanglingControl { position, .. } => *position,
        }
    }

    /// The offending character.
    ///
    /// For an incomplete true color this is the `#` that opened it.
    pub fn character(&self) -> char {
        match self {
            MarkupError::UnknownFormatCode { character, .. } => *character,
            MarkupError::IncompleteTrueColor { .. } => '#',
            MarkupError::InvalidTrueColor { found, .. } => *found,
            MarkupError::DanglingControl { control, .. } => *control,
        }
    }
}
