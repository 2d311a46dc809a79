//! Engine Module
//!
//! Entry points for encode and decode.
//!
//! ## Responsibilities
//! - Create one [`CodecContext`] per call with the right direction
//! - Run the root adapter's `describe`
//! - Hand back the finished buffer, or check the input was fully consumed
//!
//! A `Codec` holds only configuration, so one instance can serve any
//! number of concurrent calls; each call gets its own context.

use bytes::Bytes;

use crate::codec::{CodecContext, Describe};
use crate::config::CodecConfig;
use crate::error::{CodecError, Result};

/// The codec engine
#[derive(Debug, Clone, Default)]
pub struct Codec {
    config: CodecConfig,
}

impl Codec {
    /// Create a codec with the given config
    pub fn new(config: CodecConfig) -> Self {
        Self { config }
    }

    /// Configuration applied to every call
    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Encode `value` into a new buffer
    ///
    /// `value` is taken mutably only because adapters share one `describe`
    /// with decode; encoding never modifies it. If `describe` fails the
    /// partial output is dropped.
    pub fn encode<T: Describe + ?Sized>(&self, value: &mut T) -> Result<Bytes> {
        let mut ctx = CodecContext::for_write(&self.config);
        value.describe(&mut ctx)?;

        let bytes = ctx.into_output();
        tracing::trace!(len = bytes.len(), "encoded value");
        Ok(bytes)
    }

    /// Decode `input` into `value`
    ///
    /// `value` is usually default-initialized; scalars are overwritten and
    /// collections are cleared before being refilled. On error `value` may
    /// be partially populated and should be discarded.
    pub fn decode<T: Describe + ?Sized>(&self, input: &[u8], value: &mut T) -> Result<()> {
        let mut ctx = CodecContext::for_read(input, &self.config);
        value.describe(&mut ctx)?;

        let remaining = ctx.remaining();
        if remaining > 0 && self.config.reject_trailing_bytes {
            return Err(CodecError::TrailingBytes { remaining });
        }

        tracing::trace!(len = input.len() - remaining, "decoded value");
        Ok(())
    }

    /// Decode `input` into a freshly default-constructed `T`
    pub fn decode_new<T: Describe + Default>(&self, input: &[u8]) -> Result<T> {
        let mut value = T::default();
        self.decode(input, &mut value)?;
        Ok(value)
    }
}
