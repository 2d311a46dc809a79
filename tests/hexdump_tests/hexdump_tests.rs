//! Hex Dump Tests
//!
//! Formatting of encoded buffers and parsing the dump back.

use fieldcodec::samples::Company;
use fieldcodec::{hex_dump, parse_hex_dump, Codec, CodecError};

#[test]
fn test_lowercase_two_digit_groups() {
    assert_eq!(hex_dump(&[0x0a, 0xff, 0x00, 0x7f], 0), "0a ff 00 7f");
}

#[test]
fn test_line_breaks_every_n_groups() {
    let bytes: Vec<u8> = (0..7).collect();
    assert_eq!(hex_dump(&bytes, 3), "00 01 02\n03 04 05\n06");
}

#[test]
fn test_exact_multiple_has_no_trailing_break() {
    let bytes: Vec<u8> = (0..4).collect();
    assert_eq!(hex_dump(&bytes, 2), "00 01\n02 03");
}

#[test]
fn test_zero_width_is_single_line() {
    let bytes = vec![0xab; 40];
    let dump = hex_dump(&bytes, 0);
    assert!(!dump.contains('\n'));
    assert_eq!(dump.len(), 40 * 3 - 1);
}

#[test]
fn test_width_one() {
    assert_eq!(hex_dump(&[1, 2], 1), "01\n02");
}

#[test]
fn test_encoded_company_dump_reverses() {
    let bytes = Codec::default().encode(&mut Company::sample()).unwrap();
    let dump = hex_dump(&bytes, 16);

    assert_eq!(dump.lines().count(), bytes.len().div_ceil(16));
    assert_eq!(parse_hex_dump(&dump).unwrap(), bytes.to_vec());
}

#[test]
fn test_parse_ignores_layout() {
    let parsed = parse_hex_dump("  0A ff\n\t00 \r\n7f ").unwrap();
    assert_eq!(parsed, vec![0x0a, 0xff, 0x00, 0x7f]);
}

#[test]
fn test_parse_rejects_garbage() {
    assert!(matches!(
        parse_hex_dump("0g"),
        Err(CodecError::InvalidHex(_))
    ));
}
