//! Codec context
//!
//! Transient state for one encode or decode call. The context owns the
//! output buffer when writing and a cursor over the caller's input when
//! reading, never both. Adapters see it only through the registration
//! primitives below, which pick the write or read half of each operation
//! without changing how many records are visited.

use bytes::{BufMut, Bytes, BytesMut};

use crate::codec::cursor::{ReadCursor, LENGTH_TAG_SIZE};
use crate::codec::{Describe, Scalar, Sequence};
use crate::config::CodecConfig;
use crate::error::{CodecError, Result};

/// Which way bytes flow during the current call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Producing bytes from a value
    Write,
    /// Consuming bytes into a value
    Read,
}

/// Direction together with the buffer state it owns
enum Stream<'a> {
    Write(BytesMut),
    Read(ReadCursor<'a>),
}

/// Decode limits copied out of the codec config for one call
#[derive(Debug, Clone, Copy)]
struct Limits {
    max_collection_len: u32,
    max_depth: usize,
}

/// State for a single encode or decode traversal
pub struct CodecContext<'a> {
    stream: Stream<'a>,
    limits: Limits,
    depth: usize,
}

impl<'a> CodecContext<'a> {
    // =========================================================================
    // Construction (engine only)
    // =========================================================================

    pub(crate) fn for_write(config: &CodecConfig) -> Self {
        Self::with_stream(Stream::Write(BytesMut::new()), config)
    }

    pub(crate) fn for_read(input: &'a [u8], config: &CodecConfig) -> Self {
        Self::with_stream(Stream::Read(ReadCursor::new(input)), config)
    }

    fn with_stream(stream: Stream<'a>, config: &CodecConfig) -> Self {
        Self {
            stream,
            limits: Limits {
                max_collection_len: config.max_collection_len,
                max_depth: config.max_depth,
            },
            depth: 0,
        }
    }

    /// Hand the finished output to the caller (empty when reading)
    pub(crate) fn into_output(self) -> Bytes {
        match self.stream {
            Stream::Write(out) => out.freeze(),
            Stream::Read(_) => Bytes::new(),
        }
    }

    /// Unread input bytes (0 when writing)
    pub(crate) fn remaining(&self) -> usize {
        match &self.stream {
            Stream::Write(_) => 0,
            Stream::Read(cursor) => cursor.remaining(),
        }
    }

    // =========================================================================
    // Introspection
    // =========================================================================

    pub fn direction(&self) -> Direction {
        match self.stream {
            Stream::Write(_) => Direction::Write,
            Stream::Read(_) => Direction::Read,
        }
    }

    /// True while encoding
    ///
    /// Adapters may use this to validate a value before it is written.
    /// It must never change which fields get registered.
    pub fn is_writing(&self) -> bool {
        self.direction() == Direction::Write
    }

    /// Bytes written so far, or bytes consumed so far when reading
    pub fn position(&self) -> usize {
        match &self.stream {
            Stream::Write(out) => out.len(),
            Stream::Read(cursor) => cursor.position(),
        }
    }

    // =========================================================================
    // Registration Primitives
    // =========================================================================

    /// Register one scalar field
    ///
    /// Writes `[u32 length][payload]`, or reads one such record into `value`.
    pub fn scalar<S: Scalar + ?Sized>(&mut self, value: &mut S) -> Result<()> {
        match &mut self.stream {
            Stream::Write(out) => {
                let len = value.payload_len();
                let tag = u32::try_from(len).map_err(|_| CodecError::LengthOverflow { len })?;
                out.reserve(LENGTH_TAG_SIZE + len);
                out.put_u32_ne(tag);
                value.write_payload(out);
                Ok(())
            }
            Stream::Read(cursor) => {
                let payload = cursor.read_record()?;
                value.read_payload(payload)
            }
        }
    }

    /// Register an ordered collection
    ///
    /// The element count goes through [`scalar`](Self::scalar) as a `u32`.
    /// On decode the destination is cleared, then each element is
    /// default-constructed, populated by `per_element` and appended, one at
    /// a time. A forged count fails at the first missing element instead of
    /// allocating the whole collection up front.
    pub fn collection<C, F>(&mut self, items: &mut C, mut per_element: F) -> Result<()>
    where
        C: Sequence + ?Sized,
        F: FnMut(&mut Self, &mut C::Item) -> Result<()>,
    {
        if self.depth >= self.limits.max_depth {
            return Err(CodecError::DepthExceeded {
                limit: self.limits.max_depth,
            });
        }

        let mut count = match self.direction() {
            Direction::Write => {
                let len = items.count();
                u32::try_from(len).map_err(|_| CodecError::LengthOverflow { len })?
            }
            Direction::Read => 0,
        };
        self.scalar(&mut count)?;

        if self.direction() == Direction::Read && count > self.limits.max_collection_len {
            return Err(CodecError::CollectionTooLarge {
                count,
                limit: self.limits.max_collection_len,
            });
        }

        self.depth += 1;
        let result = match self.direction() {
            Direction::Write => items.items_mut().try_for_each(|item| per_element(self, item)),
            Direction::Read => {
                items.clear();
                (0..count).try_for_each(|_| {
                    let mut item = C::Item::default();
                    per_element(self, &mut item)?;
                    items.push_back(item);
                    Ok(())
                })
            }
        };
        self.depth -= 1;
        result
    }

    /// Register a collection whose elements describe themselves
    pub fn collection_of<C>(&mut self, items: &mut C) -> Result<()>
    where
        C: Sequence + ?Sized,
        C::Item: Describe,
    {
        self.collection(items, |ctx, item| item.describe(ctx))
    }

    /// Register a collection of scalars
    pub fn scalars<C>(&mut self, items: &mut C) -> Result<()>
    where
        C: Sequence + ?Sized,
        C::Item: Scalar,
    {
        self.collection(items, |ctx, item| ctx.scalar(item))
    }

    /// Register an embedded value's fields inline, without a header
    pub fn nested<T: Describe + ?Sized>(&mut self, value: &mut T) -> Result<()> {
        value.describe(self)
    }
}
