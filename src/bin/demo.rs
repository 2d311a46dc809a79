//! fieldcodec Demo Binary
//!
//! Encodes a sample record, dumps the bytes, decodes them back and
//! reports whether the round trip matched.

use std::fmt::Display;
use std::fs::File;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use fieldcodec::codec::io::{read_decoded, write_encoded};
use fieldcodec::samples::{Company, Nested};
use fieldcodec::{hex_dump, Codec, CodecConfig, Describe};
use tracing_subscriber::{fmt, EnvFilter};

/// fieldcodec round-trip demo
#[derive(Parser, Debug)]
#[command(name = "fieldcodec-demo")]
#[command(about = "Encode, dump and decode a sample record")]
#[command(version)]
struct Args {
    /// Which sample record to use
    #[arg(short, long, value_enum, default_value_t = Sample::Company)]
    sample: Sample,

    /// Hex groups per line in the dump (0 = single line)
    #[arg(short, long, default_value = "16")]
    line_width: usize,

    /// Write the encoded buffer here and decode from the file
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Sample {
    Company,
    Nested,
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,fieldcodec=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    let args = Args::parse();

    tracing::info!("fieldcodec demo v{}", fieldcodec::VERSION);

    let config = CodecConfig::builder()
        .hex_line_width(args.line_width)
        .build();
    let codec = Codec::new(config);

    let result = match args.sample {
        Sample::Company => run(&codec, Company::sample(), args.output),
        Sample::Nested => run(&codec, Nested::sample(), args.output),
    };

    match result {
        Ok(true) => {}
        Ok(false) => std::process::exit(2),
        Err(e) => {
            tracing::error!("Round trip failed: {}", e);
            std::process::exit(1);
        }
    }
}

/// Run one round trip; returns whether the decoded value matched
fn run<T>(codec: &Codec, mut original: T, output: Option<PathBuf>) -> fieldcodec::Result<bool>
where
    T: Describe + Default + PartialEq + Display,
{
    println!("------------------------------------");
    println!("original data:\n{}\n", original);

    let bytes = codec.encode(&mut original)?;
    tracing::debug!(len = bytes.len(), "encoded sample");

    println!("------------------------------------");
    println!(
        "encoded data ({} bytes):\n{}\n",
        bytes.len(),
        hex_dump(&bytes, codec.config().hex_line_width)
    );

    let decoded = match output {
        Some(path) => {
            let written = write_encoded(&mut File::create(&path)?, codec, &mut original)?;
            tracing::info!("Wrote {} bytes to {}", written, path.display());

            let mut decoded = T::default();
            read_decoded(&mut File::open(&path)?, codec, &mut decoded)?;
            decoded
        }
        None => codec.decode_new(&bytes)?,
    };

    println!("------------------------------------");
    println!("decoded data:\n{}\n", decoded);

    let equal = decoded == original;
    println!("------------------------------------");
    println!(
        "encode and decode: {}",
        if equal { "equal" } else { "not equal" }
    );
    Ok(equal)
}
