//! Error types for the fixed-point transform

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DftError {
    #[error("Unsupported sample count: {0} (expected one of 32, 64, 128, 256, 512)")]
    UnsupportedSampleCount(usize),

    #[error("Invalid sample rate: {0} Hz")]
    InvalidSampleRate(f64),

    #[error("Invalid frequency range {low_hz}..{high_hz} Hz: {reason}")]
    InvalidRange {
        low_hz: f64,
        high_hz: f64,
        reason: &'static str,
    },

    #[error("Bin range ends at {end} but only {len} bins exist")]
    BinOutOfRange { end: usize, len: usize },

    #[error("Sample buffer has {actual} samples, table expects {expected}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("Output buffer holds {actual} bins, at least {required} required")]
    OutputTooShort { required: usize, actual: usize },

    #[error("Magnitude of bin {bin} exceeds u32; reduce the sample amplitude")]
    MagnitudeOverflow { bin: usize },

    #[error("Invalid lookup table: {0}")]
    InvalidTable(String),
}

pub type Result<T> = std::result::Result<T, DftError>;
