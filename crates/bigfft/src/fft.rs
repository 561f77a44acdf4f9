//! Public multiplication API and transform sizing.
//!
//! Operands below the FFT threshold go straight to `num-bigint`'s
//! Karatsuba/Toom multiplier; larger operands are multiplied as polynomials
//! over a Fermat ring (Schönhage–Strassen).

use num_bigint::{BigInt, BigUint, Sign};
use num_traits::Zero;

use crate::arith::{Word, WORD_BITS};
use crate::fft_poly::Poly;
use crate::nat;

/// Operands with at least this many bits take the FFT path.
pub const FFT_THRESHOLD_BITS: u64 = 250_000;

/// Upper edge (in total input bits) for each transform length 2^k. Sizes
/// past the last edge use k = 15. Calibrated so that chunk counts grow
/// roughly as sqrt of the input size.
const FFT_SIZE_EDGES: [(u64, u32); 10] = [
    (1 << 12, 4),
    (1 << 14, 6),
    (1 << 16, 7),
    (1 << 18, 8),
    (1 << 20, 9),
    (1 << 22, 10),
    (1 << 24, 11),
    (1 << 26, 12),
    (1 << 28, 13),
    (1 << 30, 14),
];

/// Pick the transform length 2^k and the chunk size m (in limbs) for inputs
/// totalling `xw + yw` limbs.
pub(crate) fn fft_size(xw: usize, yw: usize) -> (u32, usize) {
    let words = xw + yw;
    let bits = words as u64 * WORD_BITS as u64;
    let mut k = 15;
    for (edge, candidate) in FFT_SIZE_EDGES {
        if bits < edge {
            k = candidate;
            break;
        }
    }
    (k, (words >> k) + 1)
}

/// Ring size n (in limbs) for a transform of length 2^k over m-limb chunks:
/// the smallest n with n·64 divisible by 2^k and n·64 ≥ 2·m·64 + k, so that
/// pointwise chunk products cannot wrap modulo 2^(n·64)+1.
pub(crate) fn value_size(k: u32, m: usize) -> usize {
    let bits = 2 * m * WORD_BITS + k as usize;
    let step = (1usize << k).max(WORD_BITS);
    bits.div_ceil(step) * step / WORD_BITS
}

/// Multiply two limb vectors through the transform pipeline.
pub(crate) fn fft_mul_words(x: &[Word], y: &[Word]) -> Vec<Word> {
    let (k, m) = fft_size(x.len(), y.len());
    let n = value_size(k, m);
    tracing::debug!(k, m, n, xw = x.len(), yw = y.len(), "fft multiplication");

    let xp = Poly::from_nat(x, k, m);
    let yp = Poly::from_nat(y, k, m);
    // The product polynomial must fit the negacyclic length K.
    assert!(xp.a.len() + yp.a.len() <= (1 << k) + 1, "fft_mul: degree overflow");

    let xv = xp.transform(n);
    let yv = yp.transform(n);
    let zv = xv.mul(&yv);
    let mut zp = zv.inv_transform();
    zp.m = m;
    zp.int()
}

/// Multiply two unsigned integers, always taking the FFT path regardless of
/// size. Used by calibration and benchmarks; `mul` is the dispatching entry
/// point.
#[must_use]
pub fn fft_mul(x: &BigUint, y: &BigUint) -> BigUint {
    if x.is_zero() || y.is_zero() {
        return BigUint::ZERO;
    }
    let xw = nat::from_biguint(x);
    let yw = nat::from_biguint(y);
    nat::to_biguint(&fft_mul_words(&xw, &yw))
}

fn mul_uint(x: &BigUint, y: &BigUint) -> BigUint {
    if x.bits().max(y.bits()) >= FFT_THRESHOLD_BITS {
        fft_mul(x, y)
    } else {
        x * y
    }
}

/// Multiply two signed integers, using the FFT for large operands.
///
/// The transform works on magnitudes; the sign is reattached afterwards.
#[must_use]
pub fn mul(x: &BigInt, y: &BigInt) -> BigInt {
    let sign = match (x.sign(), y.sign()) {
        (Sign::NoSign, _) | (_, Sign::NoSign) => Sign::NoSign,
        (sx, sy) if sx == sy => Sign::Plus,
        _ => Sign::Minus,
    };
    BigInt::from_biguint(sign, mul_uint(x.magnitude(), y.magnitude()))
}

/// Multiply and store the result in `dst`.
pub fn mul_to(dst: &mut BigInt, x: &BigInt, y: &BigInt) {
    *dst = mul(x, y);
}

/// Square a limb vector, reusing a single forward transform.
pub(crate) fn fft_sqr_words(x: &[Word]) -> Vec<Word> {
    let (k, m) = fft_size(x.len(), x.len());
    let n = value_size(k, m);
    tracing::debug!(k, m, n, xw = x.len(), "fft squaring");

    let xp = Poly::from_nat(x, k, m);
    assert!(2 * xp.a.len() <= (1 << k) + 1, "fft_sqr: degree overflow");
    let xv = xp.transform(n);
    let zv = xv.mul(&xv);
    let mut zp = zv.inv_transform();
    zp.m = m;
    zp.int()
}

/// Square a signed integer, reusing a single forward transform on the FFT
/// path.
#[must_use]
pub fn sqr(x: &BigInt) -> BigInt {
    let mag = x.magnitude();
    if mag.bits() < FFT_THRESHOLD_BITS {
        return BigInt::from_biguint(Sign::Plus, mag * mag);
    }
    let xw = nat::from_biguint(mag);
    BigInt::from_biguint(Sign::Plus, nat::to_biguint(&fft_sqr_words(&xw)))
}

/// Square and store the result in `dst`.
pub fn sqr_to(dst: &mut BigInt, x: &BigInt) {
    *dst = sqr(x);
}
