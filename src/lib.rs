//! logbessel — log I(ν, z) for large orders and arguments, with Python bindings.
//!
//! Purpose
//! -------
//! Serve as the crate root for Rust callers and as the PyO3 bridge that exposes
//! the log-Bessel routines to Python via the `_logbessel` extension module.
//! When the `python-bindings` feature is enabled, this module defines the
//! Python-facing functions used by the `logbessel` package.
//!
//! Key behaviors
//! -------------
//! - Re-export the core Rust module (`log_bessel`) and its two public entry
//!   points, [`logbessel_i`] and [`ak_approx`].
//! - Define `#[pyfunction]` wrappers (`logbessel_I`, `Ak_approx`) and the
//!   `#[pymodule]` initializer for the `_logbessel` Python extension.
//! - Register a `log_bessel` submodule under `logbessel` so that dot-notation
//!   imports work as expected.
//!
//! Invariants & assumptions
//! ------------------------
//! - All numerical work is implemented in `log_bessel`; this file performs
//!   only FFI glue, input conversion and error mapping.
//! - Python-visible functions keep the argument order and defaults of their
//!   Rust counterparts (`fast = False`, `check = True`).
//!
//! Conventions
//! -----------
//! - Errors from core Rust code are propagated as [`LogBesselError`] and
//!   converted to `ValueError` at the PyO3 boundary.
//! - Scalars map to scalars and 1-D array-likes map to 1-D NumPy arrays.
//!
//! Downstream usage
//! ----------------
//! - Native Rust code should depend on `log_bessel` directly and can ignore
//!   the PyO3 items guarded by the `python-bindings` feature.
//!
//! Testing notes
//! -------------
//! - Core numerical behavior is covered by unit tests in the inner modules and
//!   by the integration tests in `tests/`; the bindings are exercised from
//!   Python.

pub mod log_bessel;
pub mod utils;

pub use crate::log_bessel::{
    LogBesselError, LogBesselOptions, LogBesselResult, ak_approx, logbessel_i,
};

#[cfg(feature = "python-bindings")]
use pyo3::{
    prelude::*,
    types::{PyAny, PyFloat, PyInt},
};

#[cfg(feature = "python-bindings")]
use crate::{
    log_bessel::{logbessel_i_scalar, options::RatioEstimate},
    utils::{array1_to_py, extract_array1},
};

/// logbessel_I — Python entry point for log I(ν, z).
///
/// Parameters
/// ----------
/// Called from Python as `logbessel_I(nu, z, fast=False, check=True)`:
/// - `nu`: `f64`
///   Order, finite and ≥ 0.
/// - `z`: `&PyAny`
///   A float, or a 1-D array-like of floats.
/// - `fast`: `bool`
///   Use the asymptotic fallback instead of telescoping.
/// - `check`: `bool`
///   Validate `z` and gate the direct values.
///
/// Returns
/// -------
/// A float when `z` is a float, otherwise a 1-D NumPy array of the same
/// length as `z`. With `check`, array entries with a negative or non-finite
/// `z` are NaN while the other entries are still computed.
///
/// Errors
/// ------
/// - `ValueError` for an invalid `nu`, or for a scalar `z` without a defined
///   result; `TypeError` when `z` is not convertible.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(
    name = "logbessel_I",
    text_signature = "(nu, z, /, fast=False, check=True)",
    signature = (nu, z, fast = false, check = true)
)]
pub fn logbessel_i_py<'py>(
    py: Python<'py>, nu: f64, z: &Bound<'py, PyAny>, fast: bool, check: bool,
) -> PyResult<PyObject> {
    let opts = LogBesselOptions::with_flags(fast, check);

    if z.is_instance_of::<PyFloat>() || z.is_instance_of::<PyInt>() {
        let value = logbessel_i_scalar(nu, z.extract::<f64>()?, &opts)?;
        return Ok(value.into_pyobject(py)?.into_any().unbind());
    }

    let z = extract_array1(py, z)?;
    let values = logbessel_i(nu, &z, &opts)?;
    Ok(array1_to_py(py, values))
}

/// Ak_approx — Python entry point for the batched ratio approximator.
///
/// Parameters
/// ----------
/// - `nu`: 1-D array-like of N0 orders, each ≥ ½ (smaller orders are
///   rejected; the ratio bounds do not hold there).
/// - `z`: 1-D array-like of N1 arguments, each ≥ 0.
///
/// Returns
/// -------
/// A list of N1 rows, each a list of N0 ratio estimates.
///
/// Errors
/// ------
/// - `ValueError` for invalid orders or arguments.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(name = "Ak_approx", text_signature = "(nu, z, /)")]
pub fn ak_approx_py<'py>(
    py: Python<'py>, nu: &Bound<'py, PyAny>, z: &Bound<'py, PyAny>,
) -> PyResult<Vec<Vec<f64>>> {
    let nu = extract_array1(py, nu)?;
    let z = extract_array1(py, z)?;
    let ratios = ak_approx(nu.view(), z.view(), RatioEstimate::default())?;
    Ok(ratios.outer_iter().map(|row| row.to_vec()).collect())
}

/// _logbessel — PyO3 module initializer for the Python extension.
///
/// Purpose
/// -------
/// Define the `_logbessel` Python module, attach both functions to it, and
/// register a `log_bessel` submodule holding the same functions.
///
/// Errors
/// ------
/// - `PyErr`
///   If creating the submodule or manipulating `sys.modules` fails.
///
/// Notes
/// -----
/// - Invoked automatically by Python when importing the compiled extension.
#[cfg(feature = "python-bindings")]
#[pymodule]
fn _logbessel<'py>(_py: Python<'py>, m: &Bound<'py, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(logbessel_i_py, m)?)?;
    m.add_function(wrap_pyfunction!(ak_approx_py, m)?)?;

    let log_bessel_mod = PyModule::new(_py, "log_bessel")?;
    register_log_bessel(_py, m, &log_bessel_mod)?;

    // Manually add the submodule into sys.modules to allow for dot notation.
    _py.import("sys")?.getattr("modules")?.set_item("logbessel.log_bessel", log_bessel_mod)?;
    Ok(())
}

#[cfg(feature = "python-bindings")]
fn register_log_bessel<'py>(
    _py: Python, logbessel: &Bound<'py, PyModule>, m: &Bound<'py, PyModule>,
) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(logbessel_i_py, m)?)?;
    m.add_function(wrap_pyfunction!(ak_approx_py, m)?)?;
    logbessel.add_submodule(m)?;
    Ok(())
}
