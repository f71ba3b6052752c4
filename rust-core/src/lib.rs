//! Fixed DFT - Integer Spectrum Core
//!
//! Discrete Fourier transform and power spectral density over small fixed
//! buffers (32 to 512 samples) using precomputed integer trig tables, with
//! optional Python bindings.

// Suppress PyO3 non-local impl warnings (harmless macro-generated code)
#![allow(non_local_definitions)]

pub mod error;
pub mod spectrum;
pub mod tables;

#[cfg(feature = "python")]
pub mod python_bindings;

pub use error::{DftError, Result};
pub use spectrum::{
    compute_psd, compute_spectrum, compute_spectrum_range, Analysis, AnalyzerConfig, BinRange,
    FixedDft, FrequencyRange, Sample, Spectrum, SpectrumAnalyzer, SpectrumMode,
};
pub use tables::{TrigTable, SUPPORTED_SIZES};
