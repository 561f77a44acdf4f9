#![no_main]

use libfuzzer_sys::fuzz_target;
use num_bigint::BigUint;

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }
    // First byte picks the split point between the two operands.
    let split = (data[0] as usize + 1).min(data.len());
    let x = BigUint::from_bytes_le(&data[..split]);
    let y = BigUint::from_bytes_le(&data[split..]);

    // The FFT path must agree with the host multiplier bit for bit.
    assert_eq!(bigfft::fft_mul(&x, &y), &x * &y);
});
