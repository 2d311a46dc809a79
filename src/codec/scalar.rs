//! Scalar codec
//!
//! A scalar is any value encoded as a single length-prefixed record.
//! Numerics are copied in native byte order with `length == size_of`;
//! text carries its UTF-8 byte count.

use bytes::{BufMut, BytesMut};

use crate::error::{CodecError, Result};

/// A value that encodes as one `[u32 length][payload]` record
pub trait Scalar {
    /// Exact payload byte count written after the length tag
    fn payload_len(&self) -> usize;

    /// Append the payload bytes
    fn write_payload(&self, out: &mut BytesMut);

    /// Replace `self` with the value held in `payload`
    fn read_payload(&mut self, payload: &[u8]) -> Result<()>;
}

macro_rules! impl_numeric_scalar {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Scalar for $ty {
                fn payload_len(&self) -> usize {
                    std::mem::size_of::<$ty>()
                }

                fn write_payload(&self, out: &mut BytesMut) {
                    out.put_slice(&self.to_ne_bytes());
                }

                fn read_payload(&mut self, payload: &[u8]) -> Result<()> {
                    let raw: [u8; std::mem::size_of::<$ty>()] =
                        payload.try_into().map_err(|_| CodecError::ScalarWidth {
                            expected: std::mem::size_of::<$ty>(),
                            found: payload.len(),
                        })?;
                    *self = <$ty>::from_ne_bytes(raw);
                    Ok(())
                }
            }
        )*
    };
}

impl_numeric_scalar!(u8, u16, u32, u64, u128, i8, i16, i32, i64, i128, f32, f64);

impl Scalar for bool {
    fn payload_len(&self) -> usize {
        1
    }

    fn write_payload(&self, out: &mut BytesMut) {
        out.put_u8(u8::from(*self));
    }

    fn read_payload(&mut self, payload: &[u8]) -> Result<()> {
        match payload {
            [0] => *self = false,
            [1] => *self = true,
            [other] => return Err(CodecError::InvalidBool(*other)),
            _ => {
                return Err(CodecError::ScalarWidth {
                    expected: 1,
                    found: payload.len(),
                })
            }
        }
        Ok(())
    }
}

impl Scalar for String {
    fn payload_len(&self) -> usize {
        self.len()
    }

    fn write_payload(&self, out: &mut BytesMut) {
        out.put_slice(self.as_bytes());
    }

    fn read_payload(&mut self, payload: &[u8]) -> Result<()> {
        let text = std::str::from_utf8(payload)?;
        self.clear();
        self.push_str(text);
        Ok(())
    }
}

/// Raw byte blob, stored as-is in a single record
///
/// `Vec<u8>` is also a [`Sequence`](crate::Sequence): `ctx.scalar(&mut blob)`
/// writes one `[len][bytes]` record, while `ctx.scalars(&mut blob)` writes a
/// count followed by one 5-byte record per byte. The two are not
/// interchangeable on the wire.
impl Scalar for Vec<u8> {
    fn payload_len(&self) -> usize {
        self.len()
    }

    fn write_payload(&self, out: &mut BytesMut) {
        out.put_slice(self);
    }

    fn read_payload(&mut self, payload: &[u8]) -> Result<()> {
        self.clear();
        self.extend_from_slice(payload);
        Ok(())
    }
}
