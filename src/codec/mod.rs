//! Codec Module
//!
//! Field-registration based binary codec.
//!
//! ## Wire Format
//!
//! Every scalar is one record:
//! ```text
//! ┌──────────────┬─────────────────────────────┐
//! │  Len (4, NE) │       Payload (Len)         │
//! └──────────────┴─────────────────────────────┘
//! ```
//!
//! A collection is a count record followed by the records of each element:
//! ```text
//! ┌──────────┬───────────┬──────────────┬──────────────┬─────┐
//! │ Len = 4  │ Count (4) │ element[0].. │ element[1].. │ ... │
//! └──────────┴───────────┴──────────────┴──────────────┴─────┘
//! ```
//!
//! There is no magic, version or type metadata. The order of `describe`
//! calls at decode time is the schema, and must match the order used at
//! encode time. A mismatch is only caught when it happens to produce an
//! implausible record (wrong numeric width, bad UTF-8, oversized count,
//! truncated or trailing input); otherwise the value decodes to garbage.
//!
//! Length tags and numerics use native byte order.

mod adapter;
mod collection;
mod context;
mod cursor;
pub mod io;
mod scalar;

pub use adapter::Describe;
pub use collection::Sequence;
pub use context::{CodecContext, Direction};
pub use scalar::Scalar;
