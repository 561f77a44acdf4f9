//! FFT threshold search.
//!
//! Compares the host multiplier against the forced FFT path at a given
//! operand size, and bisects the sizes in between until the two are within a
//! 2% band of each other. The band keeps noisy measurements from bouncing
//! the bisection forever.

use std::time::Duration;

use num_bigint::BigUint;

use crate::runner::benchmark;

/// Speedup band treated as "equal": crossover search stops inside it.
const BAND_LOW: f64 = 0.98;
const BAND_HIGH: f64 = 1.02;

/// Default bracket: the host multiplier wins at the lower size, the FFT at
/// the upper one.
pub const DEFAULT_LOWER_BITS: usize = 1_000;
pub const DEFAULT_UPPER_BITS: usize = 300_000;

/// Time the host multiplier and the FFT path on same-size operands.
#[must_use]
pub fn measure_mul(bits: usize) -> (Duration, Duration) {
    let x = make_number(bits);
    let y = make_number(bits);
    let host = benchmark(10, || {
        std::hint::black_box(&x * &y);
    });
    let fft = benchmark(10, || {
        std::hint::black_box(bigfft::fft_mul(&x, &y));
    });
    (host, fft)
}

/// host time / FFT time at the given operand size: above 1.0 the FFT wins.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn speedup_at(bits: usize) -> f64 {
    let (host, fft) = measure_mul(bits);
    host.as_nanos() as f64 / fft.as_nanos().max(1) as f64
}

/// Find the operand size (in bits) where the FFT path starts to pay off,
/// bisecting between the default bracket sizes.
#[must_use]
pub fn find_threshold() -> usize {
    bisect(DEFAULT_LOWER_BITS, DEFAULT_UPPER_BITS, speedup_at)
}

/// Bisect `[lower, upper]` on a speedup curve until the measurement lands in
/// the 2% band or the bracket collapses. Taking the curve as a parameter
/// keeps the search testable without running benchmarks.
pub fn bisect<F>(mut lower: usize, mut upper: usize, mut speedup: F) -> usize
where
    F: FnMut(usize) -> f64,
{
    assert!(lower < upper);
    while upper - lower > 64 {
        let mid = (lower + upper) / 2;
        let x = speedup(mid);
        tracing::info!(bits = mid, speedup = x, "threshold probe");
        if x < BAND_LOW {
            lower = mid;
        } else if x > BAND_HIGH {
            upper = mid;
        } else {
            return mid;
        }
    }
    upper
}

/// A deterministic number of roughly `bits` bits with a set top bit.
fn make_number(bits: usize) -> BigUint {
    let mut bytes = vec![0xabu8; bits.div_ceil(8)];
    if let Some(last) = bytes.last_mut() {
        *last |= 0x80;
    }
    BigUint::from_bytes_le(&bytes)
}
