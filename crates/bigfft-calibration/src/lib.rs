//! # bigfft-calibration
//!
//! Measures the crossover point where the FFT multiplier overtakes the host
//! big-integer multiplier on this machine, and persists the result as a
//! calibration profile.

pub mod io;
pub mod profile;
pub mod runner;
pub mod threshold;

pub use profile::CalibrationProfile;
pub use threshold::find_threshold;
