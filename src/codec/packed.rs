//! Packed-bit codec.
//!
//! Each symbol's rank is stored in `log2(N)` bits, with the leftmost symbol
//! of the word occupying the least-significant bits. For the 4-symbol DNA
//! alphabet this is the usual 2-bit nucleotide packing. The resulting
//! integers differ from the positional scheme's (the symbol order within the
//! integer is reversed), so the two schemes are not mix-and-match.
//!
//! Only defined for power-of-two alphabet sizes; the digit-stripping range
//! projection does not apply to this scheme.

use crate::alphabet::Alphabet;
use crate::codec::check_length;
use crate::errors::{DecodeError, EncodeError};
use num_bigint::BigUint;
use num_traits::ToPrimitive;

fn bits_per_symbol(alphabet: &Alphabet) -> u64 {
    let base = alphabet.base();
    assert!(
        base.is_power_of_two(),
        "packed codec requires a power-of-two alphabet size, got {}",
        base
    );
    base.trailing_zeros() as u64
}

/// Encodes a word by packing symbol ranks into `log2(N)`-bit fields.
///
/// # Errors
///
/// Same contract as the positional scheme: `LengthMismatch` before any
/// arithmetic, `UnknownSymbol` on lookup failure.
///
/// # Panics
///
/// Panics if the alphabet size is not a power of two; callers select this
/// scheme only for such alphabets.
pub fn encode(
    word: &str,
    alphabet: &Alphabet,
    expected_len: Option<usize>,
) -> Result<BigUint, EncodeError> {
    check_length(word, expected_len)?;
    let bits = bits_per_symbol(alphabet);

    let mut code = BigUint::from(0u8);
    for (i, symbol) in word.chars().enumerate() {
        let rank = alphabet
            .rank(symbol)
            .ok_or_else(|| EncodeError::UnknownSymbol {
                symbol,
                word: word.to_string(),
            })?;
        code |= BigUint::from(rank) << (bits * i as u64);
    }

    Ok(code)
}

/// Unpacks a code back into a word of `length` symbols.
///
/// # Errors
///
/// Returns `CodeOutOfRange` when the code needs more than
/// `log2(N) * length` bits.
///
/// # Panics
///
/// Panics if the alphabet size is not a power of two.
pub fn decode(code: &BigUint, alphabet: &Alphabet, length: usize) -> Result<String, DecodeError> {
    let bits = bits_per_symbol(alphabet);

    if code.bits() > bits * length as u64 {
        return Err(DecodeError::CodeOutOfRange {
            code: code.clone(),
            length,
            base: alphabet.base(),
        });
    }

    let mask = BigUint::from(alphabet.base() - 1);
    let mut word = String::with_capacity(length);
    for i in 0..length {
        let rank = ((code >> (bits * i as u64)) & &mask).to_usize().unwrap();
        word.push(alphabet.symbol(rank).unwrap());
    }

    Ok(word)
}
