//! Polynomial views of large integers.
//!
//! A `Poly` slices an integer x into up to K = 2^k coefficients of m limbs
//! each, so that x is the evaluation of the polynomial at 2^(m·64). A
//! `PolyValues` holds the K Fermat elements produced by evaluating that
//! polynomial at the odd powers of a (2K)-th root of unity.

use std::borrow::Cow;

use crate::arith::{add_assign_vv, add_vw, Word};
use crate::fermat;
use crate::nat;

/// An integer sliced into m-limb coefficients.
///
/// Full coefficients borrow the input's limb storage; the short tail is
/// copied into an owned, zero-padded m-limb buffer.
pub(crate) struct Poly<'a> {
    pub(crate) k: u32,
    pub(crate) m: usize,
    pub(crate) a: Vec<Cow<'a, [Word]>>,
}

impl<'a> Poly<'a> {
    /// Slice x into ⌊|x|/m⌋ borrowed coefficients plus one owned tail.
    pub(crate) fn from_nat(x: &'a [Word], k: u32, m: usize) -> Poly<'a> {
        assert!(m > 0);
        let mut a = Vec::with_capacity(x.len() / m + 1);
        let mut rest = x;
        loop {
            if rest.len() < m {
                let mut tail = vec![0; m];
                tail[..rest.len()].copy_from_slice(rest);
                a.push(Cow::Owned(tail));
                break;
            }
            a.push(Cow::Borrowed(&rest[..m]));
            rest = &rest[m..];
        }
        Poly { k, m, a }
    }

    /// Evaluate the polynomial back to an integer at 2^(m·64).
    ///
    /// Coefficients may be longer than m limbs (they are n+1 limbs after an
    /// inverse transform); overlapping chunks are summed with a rolling
    /// carry. The size choice n·64 ≥ 2·m·64 + k keeps every coefficient
    /// below 2^((n+1)·64), so the carry never outruns the output buffer.
    pub(crate) fn int(&self) -> Vec<Word> {
        debug_assert!(self.m > 0, "evaluating a poly before its m is set");
        let mut len = self.a.len() * self.m + 1;
        if let Some(last) = self.a.last() {
            len += last.len();
        }
        let mut out = vec![0; len];
        for (i, coeff) in self.a.iter().enumerate() {
            let off = i * self.m;
            let l = coeff.len();
            let carry = add_assign_vv(&mut out[off..off + l], coeff);
            if out[off + l] < Word::MAX {
                out[off + l] += carry;
            } else {
                add_vw(&mut out[off + l..], carry);
            }
        }
        nat::trim(&mut out);
        out
    }
}

/// The transform of a `Poly`: K Fermat elements of n+1 limbs, stored in one
/// contiguous K·(n+1)-limb block.
pub(crate) struct PolyValues {
    pub(crate) k: u32,
    pub(crate) n: usize,
    pub(crate) values: Vec<Word>,
}

impl PolyValues {
    /// Pointwise product in the ring, slot by slot.
    pub(crate) fn mul(&self, other: &PolyValues) -> PolyValues {
        assert_eq!(self.k, other.k, "pointwise mul: transform length mismatch");
        assert_eq!(self.n, other.n, "pointwise mul: ring size mismatch");
        let width = self.n + 1;
        let mut out = vec![0; self.values.len()];
        for ((z, x), y) in out
            .chunks_exact_mut(width)
            .zip(self.values.chunks_exact(width))
            .zip(other.values.chunks_exact(width))
        {
            fermat::mul(z, x, y);
        }
        PolyValues {
            k: self.k,
            n: self.n,
            values: out,
        }
    }
}
