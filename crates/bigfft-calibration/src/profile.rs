//! Calibration profile (serializable).

use serde::{Deserialize, Serialize};

/// Current profile format version.
pub const PROFILE_VERSION: u32 = 1;

/// A measured FFT threshold, tagged with enough machine identity to know
/// when it should be re-measured.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalibrationProfile {
    /// Profile format version for compatibility checking.
    pub version: u32,
    /// Operand size in bits above which the FFT path wins.
    pub fft_threshold_bits: usize,
    /// CPU model used for calibration.
    pub cpu_model: String,
    /// Number of CPU cores.
    pub num_cores: usize,
    /// CPU fingerprint for invalidation.
    pub cpu_fingerprint: String,
    /// Calibration timestamp.
    pub timestamp: String,
}

impl Default for CalibrationProfile {
    fn default() -> Self {
        Self {
            version: PROFILE_VERSION,
            fft_threshold_bits: bigfft::FFT_THRESHOLD_BITS as usize,
            cpu_model: String::new(),
            num_cores: num_cpus(),
            cpu_fingerprint: String::new(),
            timestamp: String::new(),
        }
    }
}

impl CalibrationProfile {
    /// Build a profile from a measured threshold, stamped for this machine.
    #[must_use]
    pub fn measured(fft_threshold_bits: usize) -> Self {
        Self {
            version: PROFILE_VERSION,
            fft_threshold_bits,
            cpu_model: cpu_model(),
            num_cores: num_cpus(),
            cpu_fingerprint: cpu_fingerprint(),
            timestamp: current_timestamp(),
        }
    }

    /// Check whether this profile matches the current format version.
    #[must_use]
    pub fn is_compatible(&self) -> bool {
        self.version == PROFILE_VERSION
    }

    /// Check whether this profile was measured on the current CPU.
    #[must_use]
    pub fn matches_cpu(&self, current_fingerprint: &str) -> bool {
        if self.cpu_fingerprint.is_empty() || current_fingerprint.is_empty() {
            return true; // can't verify, assume compatible
        }
        self.cpu_fingerprint == current_fingerprint
    }

    /// Sanity bounds on the stored threshold.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.fft_threshold_bits >= 1_024 && self.fft_threshold_bits <= 100_000_000
    }
}

fn num_cpus() -> usize {
    std::thread::available_parallelism()
        .map(std::num::NonZero::get)
        .unwrap_or(4)
}

/// Fingerprint based on model and core count.
#[must_use]
pub fn cpu_fingerprint() -> String {
    format!("{}/cores={}", cpu_model(), num_cpus())
}

/// CPU model string of the current machine.
#[must_use]
pub fn cpu_model() -> String {
    use sysinfo::System;
    let sys = System::new_all();
    sys.cpus()
        .first()
        .map(|cpu| cpu.brand().to_string())
        .unwrap_or_default()
}

/// Seconds-resolution UTC timestamp.
#[must_use]
pub fn current_timestamp() -> String {
    let dur = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default();
    format!("unix:{}", dur.as_secs())
}
