//! Property-based agreement tests against the host multiplier.

use num_bigint::{BigInt, BigUint, Sign};
use proptest::collection::vec;
use proptest::prelude::*;

fn bigint(words: Vec<u64>, negative: bool) -> BigInt {
    let bytes: Vec<u8> = words.iter().flat_map(|w| w.to_le_bytes()).collect();
    let mag = BigUint::from_bytes_le(&bytes);
    let sign = if mag == BigUint::ZERO {
        Sign::NoSign
    } else if negative {
        Sign::Minus
    } else {
        Sign::Plus
    };
    BigInt::from_biguint(sign, mag)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    /// The FFT path agrees with num-bigint bit for bit, whatever the size.
    #[test]
    fn fft_mul_agrees_with_host(
        xw in vec(any::<u64>(), 1..600),
        yw in vec(any::<u64>(), 1..600),
    ) {
        let x = bigint(xw, false);
        let y = bigint(yw, false);
        let got = bigfft::fft_mul(x.magnitude(), y.magnitude());
        prop_assert_eq!(got, x.magnitude() * y.magnitude());
    }

    /// The dispatching entry point handles signs and zero like the host.
    #[test]
    fn mul_agrees_with_host(
        xw in vec(any::<u64>(), 0..80),
        yw in vec(any::<u64>(), 0..80),
        xneg in any::<bool>(),
        yneg in any::<bool>(),
    ) {
        let x = bigint(xw, xneg);
        let y = bigint(yw, yneg);
        prop_assert_eq!(bigfft::mul(&x, &y), &x * &y);
    }

    /// Squaring matches multiplication by self.
    #[test]
    fn sqr_agrees_with_mul(xw in vec(any::<u64>(), 0..200), neg in any::<bool>()) {
        let x = bigint(xw, neg);
        prop_assert_eq!(bigfft::sqr(&x), &x * &x);
    }
}
