//! Python bindings for the fixed-point transform

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use numpy::{PyArray1, PyReadonlyArray1};
use crate::error::DftError;
use crate::spectrum::{FixedDft, FrequencyRange};

fn to_py_err(err: DftError) -> PyErr {
    PyErr::new::<PyValueError, _>(err.to_string())
}

/// Fixed-point DFT exposed to Python
#[pyclass(name = "FixedDft")]
pub struct PyFixedDft {
    engine: FixedDft<'static>,
}

#[pymethods]
impl PyFixedDft {
    /// Create an engine for one of the supported lengths
    ///
    /// Args:
    ///     samples: Transform length (32, 64, 128, 256 or 512)
    #[new]
    fn new(samples: usize) -> PyResult<Self> {
        let engine = FixedDft::new(samples).map_err(to_py_err)?;
        Ok(Self { engine })
    }

    /// Magnitudes of every bin
    ///
    /// Args:
    ///     data: int32 numpy array of exactly `samples` values
    ///
    /// Returns:
    ///     uint32 magnitudes as numpy array
    fn spectrum<'py>(
        &self,
        py: Python<'py>,
        data: PyReadonlyArray1<i32>,
    ) -> PyResult<&'py PyArray1<u32>> {
        let spectrum = self.engine.spectrum(data.as_slice()?).map_err(to_py_err)?;
        Ok(PyArray1::from_vec(py, spectrum.values))
    }

    /// Magnitudes over a frequency band
    ///
    /// Args:
    ///     fs: Sample rate in Hz
    ///     f1: Low bound in Hz
    ///     f2: High bound in Hz
    ///     data: int32 numpy array
    ///
    /// Returns:
    ///     (magnitudes, start_index, end_index); bins outside the range are zero
    fn spectrum_range<'py>(
        &self,
        py: Python<'py>,
        fs: f64,
        f1: f64,
        f2: f64,
        data: PyReadonlyArray1<i32>,
    ) -> PyResult<(&'py PyArray1<u32>, usize, usize)> {
        let spectrum = self
            .engine
            .spectrum_range(FrequencyRange::new(fs, f1, f2), data.as_slice()?)
            .map_err(to_py_err)?;
        let bins = spectrum.bins;
        Ok((PyArray1::from_vec(py, spectrum.values), bins.start, bins.end))
    }

    /// Power spectral density over a frequency band
    ///
    /// Returns:
    ///     (powers, start_index, end_index)
    fn psd<'py>(
        &self,
        py: Python<'py>,
        fs: f64,
        f1: f64,
        f2: f64,
        data: PyReadonlyArray1<i32>,
    ) -> PyResult<(&'py PyArray1<u64>, usize, usize)> {
        let spectrum = self
            .engine
            .psd(FrequencyRange::new(fs, f1, f2), data.as_slice()?)
            .map_err(to_py_err)?;
        let bins = spectrum.bins;
        Ok((PyArray1::from_vec(py, spectrum.values), bins.start, bins.end))
    }

    /// Transform length
    fn samples(&self) -> usize {
        self.engine.len()
    }
}
