//! Read cursor
//!
//! Bounds-checked view over the caller's input. Every read either returns
//! the requested bytes or a `Truncated` error; nothing is read past the end.

use bytes::Buf;

use crate::error::{CodecError, Result};

/// Size of a record's length tag
pub(crate) const LENGTH_TAG_SIZE: usize = 4;

/// Cursor over a borrowed input buffer
#[derive(Debug, Clone)]
pub(crate) struct ReadCursor<'a> {
    input: &'a [u8],
    position: usize,
}

impl<'a> ReadCursor<'a> {
    pub fn new(input: &'a [u8]) -> Self {
        Self { input, position: 0 }
    }

    /// Offset of the next unread byte
    pub fn position(&self) -> usize {
        self.position
    }

    /// Bytes left to read
    pub fn remaining(&self) -> usize {
        self.input.len() - self.position
    }

    /// Take exactly `len` bytes and advance past them
    pub fn take(&mut self, len: usize) -> Result<&'a [u8]> {
        let remaining = self.remaining();
        if len > remaining {
            return Err(CodecError::Truncated {
                offset: self.position,
                needed: len,
                remaining,
            });
        }

        let start = self.position;
        self.position += len;
        Ok(&self.input[start..self.position])
    }

    /// Read a native-order length tag
    pub fn read_length(&mut self) -> Result<usize> {
        let mut tag = self.take(LENGTH_TAG_SIZE)?;
        Ok(tag.get_u32_ne() as usize)
    }

    /// Read one length-prefixed record and return its payload
    pub fn read_record(&mut self) -> Result<&'a [u8]> {
        let len = self.read_length()?;
        self.take(len)
    }
}

// =============================================================================
// Tests
// =============================================================================
