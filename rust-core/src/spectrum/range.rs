//! Frequency range to bin index mapping

use crate::error::{DftError, Result};

/// Half-open range of frequency bins `[start, end)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BinRange {
    pub start: usize,
    pub end: usize,
}

impl BinRange {
    /// Every bin of an `n`-point transform
    pub fn full(n: usize) -> Self {
        Self { start: 0, end: n }
    }

    /// Number of bins covered
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn contains(&self, bin: usize) -> bool {
        (self.start..self.end).contains(&bin)
    }

    pub fn iter(&self) -> std::ops::Range<usize> {
        self.start..self.end
    }
}

/// Requested frequency band in Hz
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrequencyRange {
    /// Sampling frequency fs in Hz
    pub sample_rate: f64,

    /// Low bound f1 (inclusive bin)
    pub low_hz: f64,

    /// High bound f2 (exclusive bin)
    pub high_hz: f64,
}

impl FrequencyRange {
    pub fn new(sample_rate: f64, low_hz: f64, high_hz: f64) -> Self {
        Self {
            sample_rate,
            low_hz,
            high_hz,
        }
    }

    /// `0..fs`, which maps to every bin
    pub fn full(sample_rate: f64) -> Self {
        Self::new(sample_rate, 0.0, sample_rate)
    }

    /// `0..fs/2`, the non-redundant half of a real signal's spectrum
    pub fn nyquist(sample_rate: f64) -> Self {
        Self::new(sample_rate, 0.0, sample_rate / 2.0)
    }

    /// Map the band onto bins of an `n`-point transform
    ///
    /// `start = ⌊f1 / (fs/n)⌋`, `end = ⌊f2 / (fs/n)⌋`. Both quotients are
    /// truncated toward zero.
    pub fn bins(&self, n: usize) -> Result<BinRange> {
        let fs = self.sample_rate;
        if !fs.is_finite() || fs <= 0.0 {
            return Err(DftError::InvalidSampleRate(fs));
        }
        if !self.low_hz.is_finite() || !self.high_hz.is_finite() {
            return Err(self.invalid("bounds must be finite"));
        }
        if self.low_hz < 0.0 {
            return Err(self.invalid("low bound is negative"));
        }
        if self.low_hz > self.high_hz {
            return Err(self.invalid("low bound exceeds high bound"));
        }

        let width = bin_width(fs, n);
        let start = (self.low_hz / width) as usize;
        let end = (self.high_hz / width) as usize;

        if end > n {
            return Err(DftError::BinOutOfRange { end, len: n });
        }

        Ok(BinRange { start, end })
    }

    fn invalid(&self, reason: &'static str) -> DftError {
        DftError::InvalidRange {
            low_hz: self.low_hz,
            high_hz: self.high_hz,
            reason,
        }
    }
}

/// Frequency step between adjacent bins, `fs / n`
#[inline]
pub fn bin_width(sample_rate: f64, n: usize) -> f64 {
    sample_rate / n as f64
}

/// Center frequency of `bin` in Hz
#[inline]
pub fn bin_frequency(bin: usize, sample_rate: f64, n: usize) -> f64 {
    bin as f64 * bin_width(sample_rate, n)
}

/// Center frequencies of all `n` bins
pub fn frequency_axis(sample_rate: f64, n: usize) -> Vec<f64> {
    (0..n).map(|bin| bin_frequency(bin, sample_rate, n)).collect()
}
