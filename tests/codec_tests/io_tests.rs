//! Stream Helper Tests
//!
//! Whole-buffer write/read through files and in-memory streams.

use std::fs::File;
use std::io::{Cursor, ErrorKind, Write};

use fieldcodec::codec::io::{read_decoded, write_encoded};
use fieldcodec::samples::{Company, Nested};
use fieldcodec::{Codec, CodecError};
use tempfile::TempDir;

#[test]
fn test_file_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("company.bin");
    let codec = Codec::default();

    let mut original = Company::sample();
    let written = write_encoded(&mut File::create(&path).unwrap(), &codec, &mut original).unwrap();
    assert_eq!(written as u64, std::fs::metadata(&path).unwrap().len());

    let mut decoded = Company::default();
    read_decoded(&mut File::open(&path).unwrap(), &codec, &mut decoded).unwrap();
    assert_eq!(decoded, original);
}

#[test]
fn test_written_bytes_match_encode() {
    let codec = Codec::default();
    let mut sink = Vec::new();
    write_encoded(&mut sink, &codec, &mut Nested::sample()).unwrap();

    let direct = codec.encode(&mut Nested::sample()).unwrap();
    assert_eq!(sink.as_slice(), &direct[..]);
}

#[test]
fn test_failed_encode_writes_nothing() {
    let codec = Codec::default();
    let mut sink = Vec::new();
    let mut nameless = Company::default();

    let result = write_encoded(&mut sink, &codec, &mut nameless);
    assert!(matches!(result, Err(CodecError::Rejected(_))));
    assert!(sink.is_empty());
}

#[test]
fn test_truncated_file_fails() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("short.bin");
    let codec = Codec::default();

    let bytes = codec.encode(&mut Company::sample()).unwrap();
    std::fs::write(&path, &bytes[..bytes.len() - 3]).unwrap();

    let mut decoded = Company::default();
    let err = read_decoded(&mut File::open(&path).unwrap(), &codec, &mut decoded).unwrap_err();
    assert!(err.is_truncated());
}

/// Sink whose writes always fail
struct BrokenPipe;

impl Write for BrokenPipe {
    fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
        Err(std::io::Error::new(ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_write_failure_is_io_error() {
    let result = write_encoded(&mut BrokenPipe, &Codec::default(), &mut Company::sample());
    match result {
        Err(CodecError::Io(e)) => assert_eq!(e.kind(), ErrorKind::BrokenPipe),
        other => panic!("Expected Io, got {:?}", other),
    }
}

#[test]
fn test_in_memory_reader() {
    let codec = Codec::default();
    let bytes = codec.encode(&mut Company::sample()).unwrap();

    let mut decoded = Company::default();
    read_decoded(&mut Cursor::new(bytes.to_vec()), &codec, &mut decoded).unwrap();
    assert_eq!(decoded, Company::sample());
}
