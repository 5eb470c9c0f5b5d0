use crate::alphabet::Alphabet;
use num_bigint::BigUint;

/// Re-expresses a code as if its word had been truncated to the `len_to`
/// rightmost symbols.
///
/// Strips the contribution of digit positions `len_from-1 ..= len_to` from
/// the numeral, leaving positions `len_to-1 ..= 0` untouched; arithmetically
/// this is `code mod base^len_to`. Only meaningful for the positional
/// scheme — the packed codec does not share the digit layout this relies on.
///
/// # Panics
///
/// Panics if `len_to > len_from`; the precondition is a caller contract.
pub fn project(code: &BigUint, len_from: usize, len_to: usize, alphabet: &Alphabet) -> BigUint {
    assert!(
        len_to <= len_from,
        "projection target length {} exceeds source length {}",
        len_to,
        len_from
    );

    let modulus = BigUint::from(alphabet.base()).pow(len_to as u32);
    code % modulus
}
