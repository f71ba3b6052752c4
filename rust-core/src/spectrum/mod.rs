//! Fixed-point spectral analysis

pub mod analysis;
pub mod dft;
pub mod magnitude;
pub mod range;
pub mod sample;

pub use analysis::{Analysis, AnalyzerConfig, SpectrumAnalyzer, SpectrumMode};
pub use dft::{compute_psd, compute_spectrum, compute_spectrum_range, FixedDft, Spectrum};
pub use magnitude::{isqrt, magnitude, power};
pub use range::{bin_frequency, bin_width, frequency_axis, BinRange, FrequencyRange};
pub use sample::Sample;
