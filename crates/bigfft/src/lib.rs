//! # bigfft
//!
//! FFT-based multiplication of very large integers (hundreds of thousands to
//! hundreds of millions of bits), asymptotically faster than the
//! Karatsuba/Toom multipliers of a conventional big-integer library.
//!
//! The Schönhage–Strassen pipeline: slice each operand into a polynomial of
//! m-limb chunks, evaluate it at roots of unity in the ring of integers
//! modulo 2^(n·64)+1 (where every root of unity is a power of two, so every
//! twiddle multiplication is a bit shift), multiply pointwise, transform
//! back, and reassemble with carry propagation.
//!
//! The crate is single-threaded and allocation-honest: one call to [`mul`]
//! owns all of its intermediate buffers and releases them on return, so
//! concurrent calls on disjoint operands are safe.

mod arith;
mod fermat;
mod fft;
mod fft_core;
mod fft_poly;
mod nat;

pub use fft::{fft_mul, mul, mul_to, sqr, sqr_to, FFT_THRESHOLD_BITS};
