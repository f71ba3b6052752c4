//! Fixed-point DFT engine using integer lookup tables
//!
//! Direct O(n²) summation over a single fixed-length buffer. No FFT
//! decomposition: at these sizes deterministic timing matters more than
//! asymptotic speed.

use num_complex::Complex;

use super::magnitude::{magnitude, power};
use super::range::{BinRange, FrequencyRange};
use super::sample::Sample;
use crate::error::{DftError, Result};
use crate::tables::TrigTable;

/// Magnitudes or powers for a range of bins, returned by value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spectrum<V> {
    /// One slot per bin of the transform; only `bins` hold computed values,
    /// the rest are zero
    pub values: Vec<V>,

    /// Bins that were computed
    pub bins: BinRange,
}

impl<V: Copy + Ord> Spectrum<V> {
    /// Values of the computed bins only
    pub fn computed(&self) -> &[V] {
        &self.values[self.bins.start..self.bins.end]
    }

    /// Bin with the largest value inside the computed range
    ///
    /// Ties resolve to the lowest bin. `None` when the range is empty.
    pub fn peak(&self) -> Option<(usize, V)> {
        self.computed()
            .iter()
            .enumerate()
            .fold(None, |best, (offset, &value)| match best {
                Some((_, top)) if top >= value => best,
                _ => Some((self.bins.start + offset, value)),
            })
    }
}

/// Stateless transform engine bound to one lookup table
#[derive(Debug, Clone, Copy)]
pub struct FixedDft<'a> {
    table: TrigTable<'a>,
}

impl FixedDft<'static> {
    /// Create an engine for `n`-point transforms using the built-in tables
    ///
    /// # Arguments
    /// * `n` - Transform length, one of 32, 64, 128, 256 or 512
    pub fn new(n: usize) -> Result<Self> {
        let table = TrigTable::for_len(n)?;
        log::debug!("fixed-point DFT engine ready: n={}", n);
        Ok(Self { table })
    }
}

impl<'a> FixedDft<'a> {
    /// Create an engine over a caller-provided table
    pub fn with_table(table: TrigTable<'a>) -> Self {
        Self { table }
    }

    /// Transform length
    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn table(&self) -> &TrigTable<'a> {
        &self.table
    }

    /// Descaled real/imaginary sums for one bin
    ///
    /// The table index `(bin * j) mod n` wraps the complex exponential so a
    /// table of n entries serves every bin.
    #[inline]
    fn bin<T: Sample>(&self, bin: usize, samples: &[T]) -> Complex<i64> {
        let n = self.table.len();
        let cos = self.table.cos();
        let sin = self.table.sin();

        let mut acc = Complex::new(0i64, 0i64);
        for (j, &x) in samples.iter().enumerate() {
            let t = (bin * j) % n;
            acc.re = x.accumulate(acc.re, cos[t]);
            acc.im = x.accumulate(acc.im, sin[t]);
        }

        // Truncating division, same as the tables' integer scaling
        let scale = self.table.scale();
        Complex::new(acc.re / scale, acc.im / scale)
    }

    fn check_buffers<T, V>(&self, samples: &[T], out: &[V]) -> Result<()> {
        let n = self.table.len();
        if samples.len() != n {
            return Err(DftError::LengthMismatch {
                expected: n,
                actual: samples.len(),
            });
        }
        if out.len() < n {
            return Err(DftError::OutputTooShort {
                required: n,
                actual: out.len(),
            });
        }
        Ok(())
    }

    /// Magnitudes of every bin into `mag`
    pub fn magnitude_into<T: Sample>(&self, samples: &[T], mag: &mut [u32]) -> Result<BinRange> {
        self.magnitude_bins_into(BinRange::full(self.len()), samples, mag)
    }

    /// Magnitudes of the bins covering `range` into `mag`
    ///
    /// Slots outside the returned bin range are left untouched.
    pub fn magnitude_range_into<T: Sample>(
        &self,
        range: FrequencyRange,
        samples: &[T],
        mag: &mut [u32],
    ) -> Result<BinRange> {
        let bins = range.bins(self.len())?;
        self.magnitude_bins_into(bins, samples, mag)
    }

    /// Magnitudes of an explicit bin range into `mag`
    ///
    /// A bin whose magnitude exceeds `u32::MAX` fails the call with
    /// [`DftError::MagnitudeOverflow`]; bins before it have already been
    /// written. With 16-bit samples this cannot happen for any supported
    /// length; 32-bit samples must keep `amplitude * n` below about 4.2e9.
    pub fn magnitude_bins_into<T: Sample>(
        &self,
        bins: BinRange,
        samples: &[T],
        mag: &mut [u32],
    ) -> Result<BinRange> {
        self.check_bins(bins)?;
        self.check_buffers(samples, mag)?;
        log::trace!("dft magnitude: bins {}..{} of {}", bins.start, bins.end, self.len());

        for i in bins.iter() {
            let value = self.bin(i, samples);
            mag[i] = magnitude(value).ok_or(DftError::MagnitudeOverflow { bin: i })?;
        }
        Ok(bins)
    }

    /// Power spectral density of the bins covering `range` into `psd`
    ///
    /// Single pass over the samples per bin: each value is the magnitude
    /// squared, computed alongside the sums rather than from a second
    /// magnitude pass.
    pub fn psd_range_into<T: Sample>(
        &self,
        range: FrequencyRange,
        samples: &[T],
        psd: &mut [u64],
    ) -> Result<BinRange> {
        let bins = range.bins(self.len())?;
        self.psd_bins_into(bins, samples, psd)
    }

    /// Power spectral density of an explicit bin range into `psd`
    ///
    /// Fails with [`DftError::MagnitudeOverflow`] under the same condition
    /// as [`FixedDft::magnitude_bins_into`].
    pub fn psd_bins_into<T: Sample>(
        &self,
        bins: BinRange,
        samples: &[T],
        psd: &mut [u64],
    ) -> Result<BinRange> {
        self.check_bins(bins)?;
        self.check_buffers(samples, psd)?;
        log::trace!("dft psd: bins {}..{} of {}", bins.start, bins.end, self.len());

        for i in bins.iter() {
            let value = self.bin(i, samples);
            psd[i] = power(value).ok_or(DftError::MagnitudeOverflow { bin: i })?;
        }
        Ok(bins)
    }

    fn check_bins(&self, bins: BinRange) -> Result<()> {
        if bins.start > bins.end || bins.end > self.len() {
            return Err(DftError::BinOutOfRange {
                end: bins.end.max(bins.start),
                len: self.len(),
            });
        }
        Ok(())
    }

    /// Full-range magnitude spectrum, allocated
    pub fn spectrum<T: Sample>(&self, samples: &[T]) -> Result<Spectrum<u32>> {
        let mut values = vec![0; self.len()];
        let bins = self.magnitude_into(samples, &mut values)?;
        Ok(Spectrum { values, bins })
    }

    /// Magnitude spectrum over `range`, allocated
    pub fn spectrum_range<T: Sample>(
        &self,
        range: FrequencyRange,
        samples: &[T],
    ) -> Result<Spectrum<u32>> {
        let mut values = vec![0; self.len()];
        let bins = self.magnitude_range_into(range, samples, &mut values)?;
        Ok(Spectrum { values, bins })
    }

    /// Power spectral density over `range`, allocated
    pub fn psd<T: Sample>(&self, range: FrequencyRange, samples: &[T]) -> Result<Spectrum<u64>> {
        let mut values = vec![0; self.len()];
        let bins = self.psd_range_into(range, samples, &mut values)?;
        Ok(Spectrum { values, bins })
    }
}

/// Pick the engine for a buffer by its length
fn engine_for<T>(samples: &[T]) -> Result<FixedDft<'static>> {
    FixedDft::new(samples.len())
}

/// Full-range magnitude spectrum of `samples` into `mag`
///
/// The transform length is the buffer length; it must have a built-in table.
/// Magnitudes above `u32::MAX` (32-bit samples with `amplitude * n` past
/// about 4.2e9) fail with [`DftError::MagnitudeOverflow`].
pub fn compute_spectrum<T: Sample>(samples: &[T], mag: &mut [u32]) -> Result<BinRange> {
    engine_for(samples)?.magnitude_into(samples, mag)
}

/// Magnitude spectrum of `samples` over `range` into `mag`
///
/// Returns the bin range that was written.
pub fn compute_spectrum_range<T: Sample>(
    range: FrequencyRange,
    samples: &[T],
    mag: &mut [u32],
) -> Result<BinRange> {
    engine_for(samples)?.magnitude_range_into(range, samples, mag)
}

/// Power spectral density of `samples` over `range` into `psd`
///
/// Each value is the bin magnitude squared, so the same amplitude limit as
/// [`compute_spectrum`] applies.
pub fn compute_psd<T: Sample>(
    range: FrequencyRange,
    samples: &[T],
    psd: &mut [u64],
) -> Result<BinRange> {
    engine_for(samples)?.psd_range_into(range, samples, psd)
}
