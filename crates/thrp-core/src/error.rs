use thiserror::Error;

use crate::game::Game;

/// Failure kinds reported by [`crate::decode`].
///
/// Everything that goes wrong after a replay has been recognized is folded
/// into [`Error::CorruptReplay`]; callers never see the lower-level cause as
/// a type, only as the `reason` text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("Unsupported replay format (magic: {magic})")]
    UnsupportedFormat { magic: String },

    #[error("Corrupt {game} replay: {reason}")]
    CorruptReplay { game: Game, reason: String },
}

pub type Result<T> = std::result::Result<T, Error>;

/// Internal decode failures. Converted to [`Error::CorruptReplay`] by the
/// dispatcher.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub(crate) enum DecodeError {
    #[error("Read of {len} bytes at offset {offset:#x} exceeds buffer length {size:#x}")]
    OutOfBounds {
        offset: usize,
        len: usize,
        size: usize,
    },

    #[error("Signature mismatch at offset {offset:#x}: expected {expected:?}")]
    Signature {
        offset: usize,
        expected: &'static [u8],
    },

    #[error("Invalid {field}: {value}")]
    InvalidField { field: &'static str, value: String },

    #[error("Text decoding failed for {0}")]
    Text(&'static str),

    #[error("Record invariant violated: {0}")]
    Invariant(String),
}

impl DecodeError {
    pub(crate) fn invalid(field: &'static str, value: impl ToString) -> Self {
        Self::InvalidField {
            field,
            value: value.to_string(),
        }
    }
}

pub(crate) type DecodeResult<T> = std::result::Result<T, DecodeError>;
