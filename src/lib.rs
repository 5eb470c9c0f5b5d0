mod alphabet;
mod codec;
mod collection;
mod config;
mod errors;
mod index;
mod project;
mod reverse;

pub use alphabet::Alphabet;
pub use codec::CodecScheme;
pub use collection::{MotifCollection, OccurrenceMap, occurrence_weight};
pub use config::{AlphabetConfig, AlphabetRegistry};
pub use errors::{DecodeError, EncodeError};
pub use index::{IndexEntry, build_index, write_index, write_index_file};
pub use project::project;
pub use reverse::{ReverseError, ReverseIndex};

use num_bigint::BigUint;

/// Encodes a fixed-length word into its integer code under the given scheme.
///
/// If `expected_len` is provided it is checked against the word's actual
/// length before any arithmetic.
pub fn encode(
    word: &str,
    alphabet: &Alphabet,
    expected_len: Option<usize>,
    scheme: CodecScheme,
) -> Result<BigUint, EncodeError> {
    match scheme {
        CodecScheme::Positional => codec::positional::encode(word, alphabet, expected_len),
        CodecScheme::Packed => codec::packed::encode(word, alphabet, expected_len),
    }
}

/// Decodes an integer code back into a word of `length` symbols.
///
/// The code alone does not carry the word length; callers must supply the
/// length used at encode time.
pub fn decode(
    code: &BigUint,
    alphabet: &Alphabet,
    length: usize,
    scheme: CodecScheme,
) -> Result<String, DecodeError> {
    match scheme {
        CodecScheme::Positional => codec::positional::decode(code, alphabet, length),
        CodecScheme::Packed => codec::packed::decode(code, alphabet, length),
    }
}

#[cfg(test)]
mod tests;
