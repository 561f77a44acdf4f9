//! Micro-benchmark timing helpers.

use std::time::{Duration, Instant};

/// Timing summary of repeated runs of one workload.
#[derive(Debug, Clone)]
pub struct Measurement {
    pub median: Duration,
    pub min: Duration,
    pub max: Duration,
    pub iterations: u32,
}

/// Run a workload once for warmup, then return its average duration over
/// `iterations` runs.
pub fn benchmark<F>(iterations: u32, mut f: F) -> Duration
where
    F: FnMut(),
{
    f();
    let start = Instant::now();
    for _ in 0..iterations {
        f();
    }
    start.elapsed() / iterations
}

/// Run a workload `warmup` times unmeasured, then time `iterations`
/// individual runs and summarize them.
pub fn measure<F>(warmup: u32, iterations: u32, mut f: F) -> Measurement
where
    F: FnMut(),
{
    assert!(iterations > 0);
    for _ in 0..warmup {
        f();
    }
    let mut runs: Vec<Duration> = (0..iterations)
        .map(|_| {
            let start = Instant::now();
            f();
            start.elapsed()
        })
        .collect();
    runs.sort();
    Measurement {
        median: runs[runs.len() / 2],
        min: runs[0],
        max: runs[runs.len() - 1],
        iterations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn benchmark_returns_a_duration() {
        let d = benchmark(5, || {
            std::hint::black_box(2 + 2);
        });
        assert!(d < Duration::from_millis(10));
    }

    #[test]
    fn measure_orders_summary() {
        let m = measure(1, 5, || {
            std::hint::black_box((0..100).sum::<u64>());
        });
        assert_eq!(m.iterations, 5);
        assert!(m.min <= m.median && m.median <= m.max);
    }
}
