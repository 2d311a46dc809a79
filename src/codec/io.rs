//! Stream-based I/O helpers
//!
//! Whole-buffer helpers for moving encoded values through `Read`/`Write`.
//! Decoding always waits for the complete input; partial buffers are not
//! decoded incrementally.

use std::io::{Read, Write};

use crate::codec::Describe;
use crate::engine::Codec;
use crate::error::Result;

/// Encode `value` and write the whole buffer to `writer`
///
/// Returns the number of bytes written. Nothing is written if encoding fails.
pub fn write_encoded<W, T>(writer: &mut W, codec: &Codec, value: &mut T) -> Result<usize>
where
    W: Write,
    T: Describe + ?Sized,
{
    let bytes = codec.encode(value)?;
    writer.write_all(&bytes)?;
    writer.flush()?;
    Ok(bytes.len())
}

/// Read `reader` to its end and decode the buffer into `value`
pub fn read_decoded<R, T>(reader: &mut R, codec: &Codec, value: &mut T) -> Result<()>
where
    R: Read,
    T: Describe + ?Sized,
{
    let mut buffer = Vec::new();
    reader.read_to_end(&mut buffer)?;
    codec.decode(&buffer, value)
}
