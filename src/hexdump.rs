//! Hex dump helpers
//!
//! Diagnostic rendering of encoded buffers. Nothing here affects encoding.

use crate::error::Result;

/// Render `bytes` as lowercase hex pairs separated by single spaces
///
/// With `line_width > 0` a newline replaces the separator after every
/// `line_width` pairs.
///
/// ```
/// use fieldcodec::hex_dump;
///
/// assert_eq!(hex_dump(&[0x00, 0xab, 0x10], 0), "00 ab 10");
/// assert_eq!(hex_dump(&[1, 2, 3, 4, 5], 2), "01 02\n03 04\n05");
/// ```
pub fn hex_dump(bytes: &[u8], line_width: usize) -> String {
    let digits = hex::encode(bytes);
    let mut out = String::with_capacity(bytes.len() * 3);

    for (i, pair) in digits.as_bytes().chunks(2).enumerate() {
        if i > 0 {
            if line_width > 0 && i % line_width == 0 {
                out.push('\n');
            } else {
                out.push(' ');
            }
        }
        out.extend(pair.iter().map(|&digit| char::from(digit)));
    }

    out
}

/// Parse the output of [`hex_dump`] back into bytes
///
/// All whitespace is ignored, so any line width is accepted.
pub fn parse_hex_dump(text: &str) -> Result<Vec<u8>> {
    let digits: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    Ok(hex::decode(digits)?)
}

// =============================================================================
// Tests
// =============================================================================
