//! # fieldcodec
//!
//! A symmetric binary codec where each type describes its fields once:
//! - One `describe` routine drives both encode and decode
//! - Length-prefixed records for every scalar
//! - Ordered collections nested to any depth
//! - Bounds-checked decoding that never reads past the input
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                  Codec::encode / decode                      │
//! │            (one CodecContext per call, Write|Read)           │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                 Describe::describe(ctx)                      │
//! │               (fields in declaration order)                  │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │   scalar    │◀─────────│ collection  │──┐
//!   │ [len][data] │  count   │ per element │  │ recurse
//!   └─────────────┘          └─────────────┘◀─┘
//! ```
//!
//! ## Example
//!
//! ```
//! use fieldcodec::samples::Company;
//!
//! let mut company = Company::sample();
//! let bytes = fieldcodec::encode(&mut company).unwrap();
//!
//! let mut decoded = Company::default();
//! fieldcodec::decode(&bytes, &mut decoded).unwrap();
//! assert_eq!(decoded, company);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod codec;
pub mod engine;
pub mod hexdump;
pub mod samples;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{CodecError, Result};
pub use config::CodecConfig;
pub use codec::{CodecContext, Describe, Direction, Scalar, Sequence};
pub use engine::Codec;
pub use hexdump::{hex_dump, parse_hex_dump};

/// Encode `value` with the default configuration
pub fn encode<T: Describe + ?Sized>(value: &mut T) -> Result<bytes::Bytes> {
    Codec::default().encode(value)
}

/// Decode `input` into `value` with the default configuration
pub fn decode<T: Describe + ?Sized>(input: &[u8], value: &mut T) -> Result<()> {
    Codec::default().decode(input, value)
}

// =============================================================================
// Version Info
// =============================================================================

/// Current version of fieldcodec
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
