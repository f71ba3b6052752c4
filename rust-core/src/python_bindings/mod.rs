//! PyO3 bindings for Python integration

use pyo3::prelude::*;

mod spectrum_bindings;

/// Python module definition
#[pymodule]
fn fixed_dft(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_class::<spectrum_bindings::PyFixedDft>()?;
    m.add("SUPPORTED_SIZES", crate::tables::SUPPORTED_SIZES.to_vec())?;

    Ok(())
}
