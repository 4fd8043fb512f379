//! utils — conversion helpers for the Python bindings.
//!
//! Converts Python array-likes (NumPy arrays, pandas Series, sequences of
//! floats) into contiguous `f64` buffers, and log-Bessel outputs back into
//! Python objects.

#[cfg(feature = "python-bindings")]
use ndarray::Array1;

#[cfg(feature = "python-bindings")]
use pyo3::{exceptions::PyTypeError, prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use numpy::{
    IntoPyArray,    // Array1 / Vec → PyArray
    PyArrayMethods, // .readonly()
    PyReadonlyArray1,
};

/// Borrow or copy a Python array-like as a read-only 1-D `f64` array.
///
/// Accepts, in order of preference: a contiguous 1-D `float64` NumPy array
/// (zero-copy), any object with `to_numpy()` returning one (e.g. a pandas
/// Series), or a sequence of floats (copied).
///
/// Errors
/// ------
/// - `TypeError` when the object is none of the above.
#[cfg(feature = "python-bindings")]
#[inline]
pub fn extract_f64_array<'py>(
    py: Python<'py>, raw_data: &Bound<'py, PyAny>,
) -> PyResult<PyReadonlyArray1<'py, f64>> {
    if let Ok(arr_ro) = raw_data.extract::<PyReadonlyArray1<f64>>() {
        if arr_ro.as_slice().is_ok() {
            return Ok(arr_ro);
        }
    }

    if let Ok(obj) = raw_data.call_method("to_numpy", (false,), None) {
        if let Ok(series_ro) = obj.extract::<PyReadonlyArray1<f64>>() {
            if series_ro.as_slice().is_ok() {
                return Ok(series_ro);
            }
        }
    }

    let vec: Vec<f64> = raw_data.extract().map_err(|_| {
        PyTypeError::new_err("expected a float, 1-D numpy.ndarray, pandas.Series, or sequence of float64")
    })?;
    Ok(vec.into_pyarray(py).readonly())
}

/// Copy a Python array-like into an owned `Array1<f64>`.
#[cfg(feature = "python-bindings")]
pub fn extract_array1<'py>(py: Python<'py>, raw_data: &Bound<'py, PyAny>) -> PyResult<Array1<f64>> {
    let arr = extract_f64_array(py, raw_data)?;
    Ok(arr.as_array().to_owned())
}

/// Hand an owned result back to Python as a NumPy array.
#[cfg(feature = "python-bindings")]
pub fn array1_to_py<'py>(py: Python<'py>, values: Array1<f64>) -> PyObject {
    values.into_pyarray(py).into_any().unbind()
}
