//! Error types for guard configuration encoding/decoding and validation.

use thiserror::Error;

use crate::model::GuardKind;

/// Broad classification of an error, so callers can tell a bad request
/// from bad stored bytes without matching every variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The value handed to the codec cannot be represented (caller problem).
    InvalidInput,
    /// The bytes handed to the codec are truncated or malformed.
    CorruptData,
}

impl ErrorKind {
    /// Returns a short stable name (e.g., "invalid_input").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::InvalidInput => "invalid_input",
            ErrorKind::CorruptData => "corrupt_data",
        }
    }
}

/// Error during binary decoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("truncated input while reading {context}: needed {needed} bytes, {remaining} remaining")]
    TruncatedInput {
        context: &'static str,
        needed: usize,
        remaining: usize,
    },

    #[error("presence mask {mask:#018x} sets bits outside the guard catalog")]
    UnknownGuardBits { mask: u64 },

    #[error("invalid bool value {value} in {field} (expected 0x00 or 0x01)")]
    InvalidBool { field: &'static str, value: u8 },

    #[error("additional program list length {len} exceeds maximum {max}")]
    AdditionalListTooLong { len: usize, max: usize },

    #[error("{count} trailing bytes after guard configuration")]
    TrailingBytes { count: usize },
}

impl DecodeError {
    /// Returns the classification for this error.
    ///
    /// Every decode failure points at the stored bytes.
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::CorruptData
    }
}

/// Error during binary encoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    #[error("group label {label:?} is {len} bytes, maximum is {max}")]
    LabelTooLong {
        label: String,
        len: usize,
        max: usize,
    },

    #[error("additional program list length {len} exceeds maximum {max}")]
    AdditionalListTooLong { len: usize, max: usize },

    #[error("output buffer too small: need {needed} bytes, {available} available")]
    BufferTooSmall { needed: usize, available: usize },

    #[error("configuration failed validation: {0}")]
    Validation(#[from] ValidationError),
}

impl EncodeError {
    /// Returns the classification for this error.
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::InvalidInput
    }
}

/// Error during semantic validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("group label must not be empty")]
    EmptyGroupLabel,

    #[error("group label {label:?} is used by more than one group")]
    DuplicateGroupLabel { label: String },

    #[error("mint limit id {id} is used by more than one group")]
    DuplicateMintLimitId { id: u8 },

    #[error("allocation id {id} is used by more than one group")]
    DuplicateAllocationId { id: u8 },

    #[error("{guard} lists {len} additional programs, maximum is {max}")]
    AdditionalListTooLong {
        guard: GuardKind,
        len: usize,
        max: usize,
    },
}
