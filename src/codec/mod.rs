//! Interchangeable word/integer codec strategies.
//!
//! Both schemes are total bijections between length-L words over an alphabet
//! of size N and the integers `[0, N^L)`, and share the same error contract.
//! They produce different integers for the same word, so a scheme chosen at
//! encode time must also be used at decode time.

pub mod packed;
pub mod positional;

use crate::alphabet::Alphabet;
use crate::errors::EncodeError;

/// Selects which codec strategy the pipelines use.
///
/// Passed explicitly into every encode/decode call; there is no process-wide
/// codec state. Pick one scheme per index and stay with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CodecScheme {
    /// Positional base-N numeral. Works for any alphabet; codes sort in the
    /// alphabet's lexicographic order. The only scheme the range projector
    /// understands.
    #[default]
    Positional,
    /// Packed-bit representation, `log2(N)` bits per symbol. Requires a
    /// power-of-two alphabet size.
    Packed,
}

impl CodecScheme {
    /// Checks that the scheme can be used with the given alphabet.
    ///
    /// # Errors
    ///
    /// Returns a message when the packed scheme is paired with an alphabet
    /// whose size is not a power of two.
    pub fn check_alphabet(&self, alphabet: &Alphabet) -> Result<(), String> {
        match self {
            CodecScheme::Positional => Ok(()),
            CodecScheme::Packed => {
                if alphabet.base().is_power_of_two() {
                    Ok(())
                } else {
                    Err(format!(
                        "Packed scheme requires a power-of-two alphabet size, got {}",
                        alphabet.base()
                    ))
                }
            }
        }
    }
}

/// Checks a caller-declared length against the word's actual length.
///
/// Shared by both schemes; runs before any arithmetic.
pub(crate) fn check_length(word: &str, expected_len: Option<usize>) -> Result<(), EncodeError> {
    if let Some(expected) = expected_len {
        let actual = word.chars().count();
        if actual != expected {
            return Err(EncodeError::LengthMismatch { actual, expected });
        }
    }
    Ok(())
}
