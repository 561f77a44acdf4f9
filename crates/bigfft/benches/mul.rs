//! Criterion benchmarks: host multiplier vs the FFT path.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use num_bigint::BigUint;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_number(rng: &mut StdRng, bits: usize) -> BigUint {
    let bytes: Vec<u8> = (0..bits.div_ceil(8)).map(|_| rng.gen()).collect();
    BigUint::from_bytes_le(&bytes)
}

fn bench_mul(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0xb16f);
    let sizes: Vec<usize> = vec![10_000, 100_000, 1_000_000, 5_000_000];

    let mut group = c.benchmark_group("MulBig");
    for &bits in &sizes {
        let x = random_number(&mut rng, bits);
        let y = random_number(&mut rng, bits);
        group.bench_with_input(BenchmarkId::from_parameter(bits), &bits, |b, _| {
            b.iter(|| &x * &y);
        });
    }
    group.finish();

    let mut group = c.benchmark_group("MulFFT");
    for &bits in &sizes {
        let x = random_number(&mut rng, bits);
        let y = random_number(&mut rng, bits);
        group.bench_with_input(BenchmarkId::from_parameter(bits), &bits, |b, _| {
            b.iter(|| bigfft::fft_mul(&x, &y));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_mul);
criterion_main!(benches);
