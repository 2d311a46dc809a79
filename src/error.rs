//! Error types for fieldcodec
//!
//! Provides a unified error type for encode, decode and the helpers around them.

use thiserror::Error;

/// Result type alias using CodecError
pub type Result<T> = std::result::Result<T, CodecError>;

/// Unified error type for fieldcodec operations
#[derive(Debug, Error)]
pub enum CodecError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Decode Errors
    // -------------------------------------------------------------------------
    #[error("Truncated input at offset {offset}: needed {needed} bytes, {remaining} remaining")]
    Truncated {
        offset: usize,
        needed: usize,
        remaining: usize,
    },

    #[error("Scalar width mismatch: expected {expected} bytes, found {found}")]
    ScalarWidth { expected: usize, found: usize },

    #[error("Invalid UTF-8 in text field: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),

    #[error("Invalid bool byte: 0x{0:02x}")]
    InvalidBool(u8),

    #[error("Collection count {count} exceeds limit {limit}")]
    CollectionTooLarge { count: u32, limit: u32 },

    #[error("Collection nesting exceeds depth limit {limit}")]
    DepthExceeded { limit: usize },

    #[error("{remaining} trailing bytes left after decode")]
    TrailingBytes { remaining: usize },

    // -------------------------------------------------------------------------
    // Encode Errors
    // -------------------------------------------------------------------------
    #[error("Length {len} does not fit a u32 length tag")]
    LengthOverflow { len: usize },

    #[error("Adapter rejected value: {0}")]
    Rejected(String),

    // -------------------------------------------------------------------------
    // Diagnostic Errors
    // -------------------------------------------------------------------------
    #[error("Invalid hex dump: {0}")]
    InvalidHex(#[from] hex::FromHexError),
}

impl CodecError {
    /// Build the error an adapter returns when it declines to proceed
    pub fn rejected(reason: impl Into<String>) -> Self {
        CodecError::Rejected(reason.into())
    }

    /// True for bounds violations while reading
    pub fn is_truncated(&self) -> bool {
        matches!(self, CodecError::Truncated { .. })
    }
}
