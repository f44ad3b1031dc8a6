//! # Domain Errors
//!
//! Error types for the block store.
//!
//! ## Design Principles
//!
//! - Expected outcomes ("already exists" during a create race) are not
//!   errors; they live in [`crate::ports::store::CreateOutcome`]
//! - Malformed keys and out-of-range accesses are caller bugs and fail fast
//! - I/O failures carry the underlying message and propagate to the caller,
//!   who decides retry or abort; nothing is swallowed in this layer

use crate::domain::key::BlockKey;
use std::fmt;

/// A malformed key string.
///
/// Key text is validated strictly and never coerced into a valid key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyError {
    /// The text is not exactly the canonical encoding length.
    WrongLength { expected: usize, actual: usize },

    /// The text contains a character outside `[0-9a-fA-F]`.
    NonHexCharacter,
}

impl fmt::Display for KeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyError::WrongLength { expected, actual } => {
                write!(f, "Invalid key: expected {} hex characters, got {}", expected, actual)
            }
            KeyError::NonHexCharacter => {
                write!(f, "Invalid key: non-hexadecimal character")
            }
        }
    }
}

impl std::error::Error for KeyError {}

/// Errors that can occur during store and block operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No block exists for this key.
    BlockNotFound { key: BlockKey },

    /// A read or write reaches beyond the block's current size.
    OutOfRange {
        offset: usize,
        requested: usize,
        size: usize,
    },

    /// Malformed key text.
    InvalidKey(KeyError),

    /// Underlying filesystem failure (permissions, disk full, hardware).
    Io { message: String },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::BlockNotFound { key } => {
                write!(f, "Block not found: {}", key)
            }
            StoreError::OutOfRange {
                offset,
                requested,
                size,
            } => {
                write!(
                    f,
                    "Range out of bounds: offset {} + {} bytes exceeds block size {}",
                    offset, requested, size
                )
            }
            StoreError::InvalidKey(err) => write!(f, "{}", err),
            StoreError::Io { message } => write!(f, "I/O error: {}", message),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<KeyError> for StoreError {
    fn from(err: KeyError) -> Self {
        StoreError::InvalidKey(err)
    }
}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError::Io {
            message: err.to_string(),
        }
    }
}
