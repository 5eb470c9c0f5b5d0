//! Positional base-N numeral codec.
//!
//! A word is read as a base-N numeral with the leftmost symbol most
//! significant: the symbol at distance `i` from the right end contributes
//! `rank * base^i`. Codes are order-preserving in the alphabet's
//! lexicographic order, which the index build relies on when sorting.

use crate::alphabet::Alphabet;
use crate::codec::check_length;
use crate::errors::{DecodeError, EncodeError};
use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::ToPrimitive;

/// Encodes a word as its base-N positional value.
///
/// # Errors
///
/// - `LengthMismatch` when `expected_len` is given and differs from the
///   word's actual length (checked before any arithmetic).
/// - `UnknownSymbol` when the word contains a symbol outside the alphabet.
pub fn encode(
    word: &str,
    alphabet: &Alphabet,
    expected_len: Option<usize>,
) -> Result<BigUint, EncodeError> {
    check_length(word, expected_len)?;

    let base = BigUint::from(alphabet.base());
    let mut code = BigUint::from(0u8);

    for symbol in word.chars() {
        let rank = alphabet
            .rank(symbol)
            .ok_or_else(|| EncodeError::UnknownSymbol {
                symbol,
                word: word.to_string(),
            })?;
        code = code * &base + BigUint::from(rank);
    }

    Ok(code)
}

/// Decodes a base-N positional value back into a word of `length` symbols.
///
/// # Errors
///
/// Returns `CodeOutOfRange` when `code >= base^length`, i.e. the code cannot
/// be the encoding of any word of the given length.
pub fn decode(code: &BigUint, alphabet: &Alphabet, length: usize) -> Result<String, DecodeError> {
    let base = BigUint::from(alphabet.base());

    if *code >= base.pow(length as u32) {
        return Err(DecodeError::CodeOutOfRange {
            code: code.clone(),
            length,
            base: alphabet.base(),
        });
    }

    // Peel digits off the least-significant end, then reverse.
    let mut remaining = code.clone();
    let mut symbols = Vec::with_capacity(length);
    for _ in 0..length {
        let (quotient, remainder) = remaining.div_rem(&base);
        // remainder < base, and base fits in usize
        let rank = remainder.to_usize().unwrap();
        symbols.push(alphabet.symbol(rank).unwrap());
        remaining = quotient;
    }

    symbols.reverse();
    Ok(symbols.into_iter().collect())
}
