//! High-level spectrum analyzer
//!
//! Binds a configuration (length, sample rate, band, output mode) to a
//! fixed-point engine resolved once up front.

use super::dft::{FixedDft, Spectrum};
use super::range::{bin_frequency, frequency_axis, BinRange, FrequencyRange};
use super::sample::Sample;
use crate::error::Result;

/// What each computed bin holds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpectrumMode {
    /// `⌊sqrt(re² + im²)⌋`
    Magnitude,

    /// Magnitude squared (power spectral density)
    Power,
}

/// Spectrum analyzer configuration
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyzerConfig {
    /// Transform length; must be one of the supported table sizes
    pub sample_count: usize,

    /// Sample rate in Hz
    pub sample_rate: f64,

    /// Band to compute in Hz, `None` for every bin
    pub band: Option<(f64, f64)>,

    /// Output mode
    pub mode: SpectrumMode,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            sample_count: 256,
            sample_rate: 1000.0,
            band: None,
            mode: SpectrumMode::Magnitude,
        }
    }
}

impl AnalyzerConfig {
    /// Bins selected by the configured band
    pub fn bins(&self) -> Result<BinRange> {
        match self.band {
            Some((low, high)) => {
                FrequencyRange::new(self.sample_rate, low, high).bins(self.sample_count)
            }
            None => Ok(BinRange::full(self.sample_count)),
        }
    }
}

/// Analyzer output, tagged by mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Analysis {
    Magnitude(Spectrum<u32>),
    Power(Spectrum<u64>),
}

impl Analysis {
    pub fn bins(&self) -> BinRange {
        match self {
            Analysis::Magnitude(s) => s.bins,
            Analysis::Power(s) => s.bins,
        }
    }

    /// Dominant bin and its value widened to `u64`
    pub fn peak(&self) -> Option<(usize, u64)> {
        match self {
            Analysis::Magnitude(s) => s.peak().map(|(bin, v)| (bin, u64::from(v))),
            Analysis::Power(s) => s.peak(),
        }
    }
}

/// Fixed-point spectrum analyzer
pub struct SpectrumAnalyzer {
    config: AnalyzerConfig,
    engine: FixedDft<'static>,
    bins: BinRange,
}

impl SpectrumAnalyzer {
    /// Create a new analyzer, validating the length and band
    pub fn new(config: AnalyzerConfig) -> Result<Self> {
        let engine = FixedDft::new(config.sample_count)
            .inspect_err(|e| log::warn!("rejecting analyzer config: {}", e))?;
        let bins = config
            .bins()
            .inspect_err(|e| log::warn!("rejecting analyzer band: {}", e))?;

        log::debug!(
            "spectrum analyzer: n={}, fs={} Hz, bins {}..{}, mode {:?}",
            config.sample_count,
            config.sample_rate,
            bins.start,
            bins.end,
            config.mode
        );

        Ok(Self {
            config,
            engine,
            bins,
        })
    }

    /// Analyze one buffer of exactly `sample_count` samples
    pub fn analyze<T: Sample>(&self, samples: &[T]) -> Result<Analysis> {
        let n = self.engine.len();
        match self.config.mode {
            SpectrumMode::Magnitude => {
                let mut values = vec![0u32; n];
                let bins = self.engine.magnitude_bins_into(self.bins, samples, &mut values)?;
                Ok(Analysis::Magnitude(Spectrum { values, bins }))
            }
            SpectrumMode::Power => {
                let mut values = vec![0u64; n];
                let bins = self.engine.psd_bins_into(self.bins, samples, &mut values)?;
                Ok(Analysis::Power(Spectrum { values, bins }))
            }
        }
    }

    /// Frequency in Hz of the strongest bin in the configured band
    pub fn dominant_frequency<T: Sample>(&self, samples: &[T]) -> Result<Option<f64>> {
        let analysis = self.analyze(samples)?;
        Ok(analysis
            .peak()
            .map(|(bin, _)| bin_frequency(bin, self.config.sample_rate, self.engine.len())))
    }

    /// Bin center frequencies in Hz
    pub fn frequency_bins_hz(&self) -> Vec<f64> {
        frequency_axis(self.config.sample_rate, self.engine.len())
    }

    /// Update configuration
    ///
    /// The lookup table is only re-resolved when the length changes. On
    /// error the previous configuration stays active.
    pub fn update_config(&mut self, config: AnalyzerConfig) -> Result<()> {
        let engine = if config.sample_count != self.config.sample_count {
            FixedDft::new(config.sample_count)?
        } else {
            self.engine
        };
        let bins = config.bins()?;

        self.engine = engine;
        self.bins = bins;
        self.config = config;
        Ok(())
    }

    /// Get current configuration
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Bins computed on every call
    pub fn bins(&self) -> BinRange {
        self.bins
    }
}
