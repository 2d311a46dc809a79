//! Type adapter protocol
//!
//! A type joins the codec by implementing [`Describe`]: one routine that
//! registers its fields, in declaration order, against a [`CodecContext`].
//! The same routine runs for encode and decode, so it must register the
//! same fields in the same order regardless of direction.

use crate::codec::CodecContext;
use crate::error::Result;

/// Field description shared by both codec directions
///
/// ```
/// use fieldcodec::{Codec, CodecContext, Describe, Result};
///
/// #[derive(Debug, Default, PartialEq)]
/// struct Point {
///     x: i32,
///     y: i32,
///     tags: Vec<String>,
/// }
///
/// impl Describe for Point {
///     fn describe(&mut self, ctx: &mut CodecContext<'_>) -> Result<()> {
///         ctx.scalar(&mut self.x)?;
///         ctx.scalar(&mut self.y)?;
///         ctx.scalars(&mut self.tags)
///     }
/// }
///
/// let codec = Codec::default();
/// let mut point = Point { x: 3, y: -4, tags: vec!["a".into()] };
/// let bytes = codec.encode(&mut point).unwrap();
/// let decoded: Point = codec.decode_new(&bytes).unwrap();
/// assert_eq!(decoded, point);
/// ```
pub trait Describe {
    /// Register every field with `ctx`
    ///
    /// Returning an error aborts the call; on encode the partial output is
    /// discarded. Use [`CodecError::rejected`](crate::CodecError::rejected)
    /// to decline a value that violates the type's own invariants.
    fn describe(&mut self, ctx: &mut CodecContext<'_>) -> Result<()>;
}

impl<T: Describe + ?Sized> Describe for Box<T> {
    fn describe(&mut self, ctx: &mut CodecContext<'_>) -> Result<()> {
        (**self).describe(ctx)
    }
}
