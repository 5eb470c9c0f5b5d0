use num_bigint::BigUint;
use std::fmt;

/// Errors that can occur while encoding a word.
#[derive(Debug, PartialEq, Eq)]
pub enum EncodeError {
    /// The word contains a symbol that is not in the alphabet
    UnknownSymbol { symbol: char, word: String },
    /// The word's actual length disagrees with the caller-declared length
    LengthMismatch { actual: usize, expected: usize },
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodeError::UnknownSymbol { symbol, word } => {
                write!(f, "Unknown symbol '{}' in word \"{}\"", symbol, word)
            }
            EncodeError::LengthMismatch { actual, expected } => {
                write!(
                    f,
                    "Irregular word length {} (expected {})",
                    actual, expected
                )
            }
        }
    }
}

impl std::error::Error for EncodeError {}

/// Errors that can occur while decoding a code back to a word.
#[derive(Debug, PartialEq, Eq)]
pub enum DecodeError {
    /// The code does not fit in the declared length for this alphabet.
    /// Usually means the caller supplied a length smaller than the one
    /// used at encode time.
    CodeOutOfRange {
        code: BigUint,
        length: usize,
        base: usize,
    },
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::CodeOutOfRange { code, length, base } => {
                write!(
                    f,
                    "Code {} does not fit in {} base-{} digits",
                    code, length, base
                )
            }
        }
    }
}

impl std::error::Error for DecodeError {}
