//! Arithmetic modulo 2^(n·64)+1.
//!
//! A Fermat element of size n is a slice of n+1 limbs representing a residue
//! modulo M = 2^(n·64)+1. After `norm`, the top limb is 0 or 1, and when it
//! is 1 all lower limbs are 0 (the canonical form of −1 mod M). At most two
//! raw representations collide under this constraint, so equality checks must
//! normalize both sides first.
//!
//! Because 2 has multiplicative order 2·n·64 in this ring, every
//! root-of-unity multiplication in the transforms reduces to `shift`.
//!
//! Length mismatches between operands are programming errors and panic.

use crate::arith::{add_vv, add_vw, shl_vu, sub_assign_vv, sub_vv, sub_vw, Word, WORD_BITS};
use crate::nat;

/// Restore the 0/1 invariant on the top limb.
pub(crate) fn norm(z: &mut [Word]) {
    let n = z.len() - 1;
    let c = z[n];
    if c == 0 {
        return;
    }
    if z[0] >= c {
        // c·2^(n·64) ≡ −c: fold it into the low limb directly.
        z[n] = 0;
        z[0] -= c;
        return;
    }
    // z[0] < c: subtract c across the whole element, then add back 1.
    sub_vw(z, c);
    if c > 1 {
        z[n] -= c - 1;
    }
    if z[n] == 1 {
        z[n] = 0;
    } else {
        add_vw(z, 1);
    }
}

/// z = (x + y) mod M.
pub(crate) fn add(z: &mut [Word], x: &[Word], y: &[Word]) {
    assert_eq!(z.len(), x.len(), "fermat add: length mismatch");
    let carry = add_vv(z, x, y);
    // Top limbs are at most 1 each, so the sum cannot carry out.
    debug_assert_eq!(carry, 0);
    norm(z);
}

/// z = (x − y) mod M.
pub(crate) fn sub(z: &mut [Word], x: &[Word], y: &[Word]) {
    assert_eq!(z.len(), x.len(), "fermat sub: length mismatch");
    let n = z.len() - 1;
    let b = sub_vv(&mut z[..n], &x[..n], &y[..n]) + y[n];
    z[n] = x[n];
    // Subtracting b·2^(n·64) is the same as adding b.
    if z[0] <= Word::MAX - b {
        z[0] += b;
    } else {
        add_vw(z, b);
    }
    norm(z);
}

/// z = (−z) mod M. The input must satisfy the 0/1 invariant.
pub(crate) fn neg(z: &mut [Word]) {
    let n = z.len() - 1;
    let c = z[n];
    debug_assert!(c <= 1);
    // −z ≡ ~z_low + 2 + c: the complement covers 2^(n·64)−1−z_low and the
    // dropped top limb re-enters as +c since c·2^(n·64) ≡ −c.
    for limb in &mut z[..n] {
        *limb = !*limb;
    }
    z[n] = 0;
    add_vw(z, c + 2);
    norm(z);
}

/// z = (x · 2^s) mod M, for any (possibly negative) shift count s.
pub(crate) fn shift(z: &mut [Word], x: &[Word], s: isize) {
    assert_eq!(z.len(), x.len(), "fermat shift: length mismatch");
    let n = z.len() - 1;
    // 2 has order 2·n·64; a shift by n·64 is a negation.
    let order = (2 * n * WORD_BITS) as isize;
    let mut k = s.rem_euclid(order) as usize;
    let mut negate = false;
    if k >= n * WORD_BITS {
        k -= n * WORD_BITS;
        negate = true;
    }
    let kw = k / WORD_BITS;
    let kb = (k % WORD_BITS) as u32;

    // Word-level shift: with x = a·2^((n−kw)·64) + b,
    // x·2^(kw·64) ≡ b·2^(kw·64) − a (mod M).
    z[n] = 1; // the −1 cancelled by the +1 below
    z[..kw].fill(0);
    z[kw..n].copy_from_slice(&x[..n - kw]);
    let b = sub_assign_vv(&mut z[..kw + 1], &x[n - kw..]);
    if z[kw + 1] > 0 {
        z[kw + 1] -= b;
    } else {
        sub_vw(&mut z[kw + 1..], b);
    }
    // Add back 1.
    if z[0] < Word::MAX {
        z[0] += 1;
    } else {
        add_vw(z, 1);
    }
    shl_vu(z, kb);
    norm(z);
    if negate {
        neg(z);
    }
}

/// z = (x · y) mod M.
///
/// The 2n+1-limb product comes from the host big-integer library (Karatsuba
/// or Toom for limb counts that matter here); the reduction splits it at
/// limb n and folds the high half with 2^(n·64) ≡ −1.
pub(crate) fn mul(z: &mut [Word], x: &[Word], y: &[Word]) {
    assert!(
        z.len() == x.len() && x.len() == y.len(),
        "fermat mul: length mismatch"
    );
    let n = z.len() - 1;
    let product = nat::to_biguint(x) * nat::to_biguint(y);
    let mut digits = nat::from_biguint(&product);
    assert!(digits.len() <= 2 * n + 1, "fermat mul: product exceeds 2n+1 limbs");
    digits.resize(2 * n + 1, 0);

    let (lo, hi) = digits.split_at(n);
    // hi has n+1 limbs with a 0/1 top limb: the product of two normalized
    // residues is at most 2^(2·n·64).
    debug_assert!(hi[n] <= 1);
    let mut low = vec![0; n + 1];
    low[..n].copy_from_slice(lo);
    sub(z, &low, hi);
}
