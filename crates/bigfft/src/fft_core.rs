//! Forward and inverse transforms over the Fermat ring.
//!
//! The K-point transform evaluates a polynomial at the odd powers of
//! θ = 2^((n·64)>>k), a primitive (2K)-th root of unity: coefficients are
//! first twisted by θ^i, then run through a radix-2 Cooley–Tukey recursion
//! whose twiddle factors are all powers of two, so every butterfly
//! multiplication is a `fermat::shift`.

use std::borrow::Cow;

use crate::arith::{Word, WORD_BITS};
use crate::fermat;
use crate::fft_poly::{Poly, PolyValues};

/// Radix-2 decimation recursion state: the transform parameters plus two
/// scratch elements reused by every butterfly.
pub(crate) struct Fourier {
    n: usize,
    k: u32,
    backward: bool,
    u: Vec<Word>,
    v: Vec<Word>,
}

impl Fourier {
    pub(crate) fn new(n: usize, k: u32, backward: bool) -> Fourier {
        Fourier {
            n,
            k,
            backward,
            u: vec![0; n + 1],
            v: vec![0; n + 1],
        }
    }

    /// Transform the K slots of `src` into `dst`. Both are contiguous
    /// K·(n+1)-limb blocks; `src` is not modified.
    pub(crate) fn run(&mut self, dst: &mut [Word], src: &[Word]) {
        let width = self.n + 1;
        debug_assert_eq!(dst.len(), width << self.k);
        debug_assert_eq!(src.len(), width << self.k);
        self.recurse(dst, src, self.k);
    }

    /// One level of the recursion over a 2^size-slot sub-problem. `src` slots
    /// for this level sit 1<<(k−size) slots apart.
    fn recurse(&mut self, dst: &mut [Word], src: &[Word], size: u32) {
        let width = self.n + 1;
        if size == 0 {
            dst[..width].copy_from_slice(&src[..width]);
            return;
        }
        let stride = (1usize << (self.k - size)) * width;
        if size == 1 {
            let (d0, d1) = dst.split_at_mut(width);
            fermat::add(d0, &src[..width], &src[stride..stride + width]);
            fermat::sub(&mut d1[..width], &src[..width], &src[stride..stride + width]);
            return;
        }

        let half = 1usize << (size - 1);
        let (d1, d2) = dst.split_at_mut(half * width);
        self.recurse(d1, src, size - 1);
        self.recurse(d2, &src[stride..], size - 1);

        let mut w = ((2 * self.n * WORD_BITS) >> size) as isize;
        if self.backward {
            w = -w;
        }
        for i in 0..half {
            let lo = &mut d1[i * width..(i + 1) * width];
            let hi = &mut d2[i * width..(i + 1) * width];
            self.u.copy_from_slice(lo);
            fermat::shift(&mut self.v, hi, i as isize * w);
            fermat::add(lo, &self.u, &self.v);
            fermat::sub(hi, &self.u, &self.v);
        }
    }
}

impl Poly<'_> {
    /// Forward transform into a ring of size n: twist coefficient i by
    /// 2^(i·θshift), then run the fast transform.
    pub(crate) fn transform(&self, n: usize) -> PolyValues {
        let k = self.k;
        let slots = 1usize << k;
        assert!(self.a.len() <= slots, "transform: more than 2^k coefficients");
        // Pointwise products of m-limb chunks must not wrap mod 2^(n·64)+1.
        assert!(
            n * WORD_BITS >= 2 * self.m * WORD_BITS + k as usize,
            "transform: ring too small for chunk products"
        );

        let width = n + 1;
        let theta_shift = ((n * WORD_BITS) >> k) as isize;
        let mut twisted = vec![0; slots * width];
        let mut padded = vec![0; width];
        for (i, coeff) in self.a.iter().enumerate() {
            padded[..coeff.len()].copy_from_slice(coeff);
            padded[coeff.len()..].fill(0);
            let slot = &mut twisted[i * width..(i + 1) * width];
            fermat::shift(slot, &padded, i as isize * theta_shift);
        }

        let mut values = vec![0; slots * width];
        Fourier::new(n, k, false).run(&mut values, &twisted);
        PolyValues { k, n, values }
    }
}

impl PolyValues {
    /// Inverse transform: backward fast transform, then divide each slot by
    /// K and undo the twist. The caller restores the original m before
    /// evaluating the result.
    pub(crate) fn inv_transform(&self) -> Poly<'static> {
        let (k, n) = (self.k, self.n);
        let slots = 1usize << k;
        let width = n + 1;

        let mut q = vec![0; slots * width];
        Fourier::new(n, k, true).run(&mut q, &self.values);

        let theta_shift = ((n * WORD_BITS) >> k) as isize;
        let mut a = Vec::with_capacity(slots);
        for (i, slot) in q.chunks_exact(width).enumerate() {
            let mut coeff = vec![0; width];
            fermat::shift(&mut coeff, slot, -(k as isize) - i as isize * theta_shift);
            a.push(Cow::Owned(coeff));
        }
        Poly { k, m: 0, a }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    use crate::fft::{fft_size, value_size};
    use crate::nat;

    /// Naive O(K²) evaluation: dst[j] = Σ_i src[i] · 2^(ωshift·i·j).
    fn naive_fourier(src: &[Word], n: usize, k: u32) -> Vec<Word> {
        let width = n + 1;
        let slots = 1usize << k;
        let w_shift = ((2 * n * WORD_BITS) >> k) as isize;
        let mut dst = vec![0; slots * width];
        let mut tmp = vec![0; width];
        for i in 0..slots {
            for j in 0..slots {
                fermat::shift(
                    &mut tmp,
                    &src[i * width..(i + 1) * width],
                    (i * j) as isize * w_shift,
                );
                let out = &mut dst[j * width..(j + 1) * width];
                let prev = out.to_vec();
                fermat::add(out, &prev, &tmp);
            }
        }
        dst
    }

    fn check_fourier(n: usize, k: u32, rng: &mut StdRng) {
        let width = n + 1;
        let slots = 1usize << k;
        let mut src = vec![0; slots * width];
        for slot in src.chunks_exact_mut(width) {
            for limb in &mut slot[..n] {
                *limb = rng.gen();
            }
        }
        let want = naive_fourier(&src, n, k);
        let mut got = vec![0; slots * width];
        Fourier::new(n, k, false).run(&mut got, &src);
        for j in 0..slots {
            assert_eq!(
                got[j * width..(j + 1) * width],
                want[j * width..(j + 1) * width],
                "fourier mismatch at slot {j} (n={n}, k={k})"
            );
        }
    }

    #[test]
    fn fourier_matches_naive_evaluation() {
        let mut rng = StdRng::seed_from_u64(7);
        for (n, k) in [
            (1, 2),
            (1, 3),
            (1, 4),
            (2, 2),
            (2, 3),
            (2, 4),
            (4, 4),
            (4, 5),
            (4, 6),
        ] {
            check_fourier(n, k, &mut rng);
        }
    }

    #[test]
    fn forward_backward_is_scaling() {
        // A backward transform of a forward transform multiplies each slot
        // by K; dividing by K (shift by −k) must restore the input.
        let (n, k) = (2, 3);
        let width = n + 1;
        let slots = 1usize << k;
        let mut rng = StdRng::seed_from_u64(11);
        let mut src = vec![0; slots * width];
        for slot in src.chunks_exact_mut(width) {
            for limb in &mut slot[..n] {
                *limb = rng.gen();
            }
        }
        let mut fwd = vec![0; slots * width];
        Fourier::new(n, k, false).run(&mut fwd, &src);
        let mut back = vec![0; slots * width];
        Fourier::new(n, k, true).run(&mut back, &fwd);
        let mut tmp = vec![0; width];
        for (i, slot) in back.chunks_exact(width).enumerate() {
            fermat::shift(&mut tmp, slot, -(k as isize));
            let mut want = src[i * width..(i + 1) * width].to_vec();
            fermat::norm(&mut want);
            assert_eq!(tmp, want, "slot {i}");
        }
    }

    #[test]
    fn transform_round_trip_10k_words() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let x: Vec<Word> = (0..10_000).map(|_| rng.gen()).collect();
        let (k, m) = fft_size(x.len(), 0);
        let n = value_size(k, m);

        let p = Poly::from_nat(&x, k, m);
        let values = p.transform(n);
        let mut p2 = values.inv_transform();
        p2.m = m;

        assert_eq!(nat::to_biguint(&p2.int()), nat::to_biguint(&x));
    }
}
