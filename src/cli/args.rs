use clap::{Args, ValueEnum};
use motif_index::CodecScheme;
use std::path::PathBuf;

/// Codec strategy selection (CLI enum)
#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum SchemeArg {
    /// Positional base-N numeral (supports any alphabet)
    #[default]
    Positional,
    /// Packed-bit representation (power-of-two alphabets only)
    Packed,
}

impl From<SchemeArg> for CodecScheme {
    fn from(arg: SchemeArg) -> Self {
        match arg {
            SchemeArg::Positional => CodecScheme::Positional,
            SchemeArg::Packed => CodecScheme::Packed,
        }
    }
}

/// Arguments for building an index
#[derive(Args, Debug)]
pub struct IndexArgs {
    /// Motif collection as JSON (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Alphabet to encode with
    #[arg(short, long, default_value = "dna")]
    pub alphabet: String,

    /// Codec scheme
    #[arg(short, long, value_enum, default_value = "positional")]
    pub scheme: SchemeArg,

    /// Add an occurrence-weight column to each entry
    #[arg(long)]
    pub occ: bool,

    /// Output file (writes to stdout if not provided)
    #[arg(short = 'o', long)]
    pub out: Option<PathBuf>,
}

/// Arguments for reverse-decoding an index
#[derive(Args, Debug)]
pub struct ReverseArgs {
    /// Motif length used when the index was built
    pub length: usize,

    /// Index file to decode (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Alphabet the index was built with
    #[arg(short, long, default_value = "dna")]
    pub alphabet: String,

    /// Codec scheme the index was built with
    #[arg(short, long, value_enum, default_value = "positional")]
    pub scheme: SchemeArg,
}
