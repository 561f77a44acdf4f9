//! Little-endian word sequences and their `BigUint` conversions.

use num_bigint::BigUint;

use crate::arith::Word;

/// Drop trailing zero limbs so the last limb of a non-empty vector is non-zero.
pub(crate) fn trim(n: &mut Vec<Word>) {
    while n.last() == Some(&0) {
        n.pop();
    }
}

/// Interpret a little-endian limb slice as a `BigUint`.
pub(crate) fn to_biguint(words: &[Word]) -> BigUint {
    let bytes: Vec<u8> = words.iter().flat_map(|w| w.to_le_bytes()).collect();
    BigUint::from_bytes_le(&bytes)
}

/// Extract the little-endian limbs of a `BigUint` (no trailing zeros).
pub(crate) fn from_biguint(value: &BigUint) -> Vec<Word> {
    value.to_u64_digits()
}
