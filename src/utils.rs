//! Python-boundary conversion helpers used by the bindings in `lib.rs`.
#[cfg(feature = "python-bindings")]
use pyo3::{exceptions::PyTypeError, prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use numpy::{
    IntoPyArray,    // Vec → PyArray
    PyArrayMethods, // .readonly()
    PyReadonlyArray1,
};

#[cfg(feature = "python-bindings")]
use crate::common::{TailType, VarianceAssumption};

/// Borrow a 1-D float64 sample from a numpy array, a pandas Series, or any
/// sequence of floats, copying only when no contiguous view exists.
///
/// Attempts run cheapest first. A contiguous ndarray is borrowed as is. A
/// Series (or anything with `to_numpy`) is asked for a view with
/// `copy=False`, so its own buffer is reused when it is already float64.
/// Only a plain sequence pays for an element-by-element copy. Trying the
/// sequence extraction earlier would copy arrays and Series too, since both
/// also iterate as sequences.
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
        PyTypeError::new_err("expected a 1-D numpy.ndarray, pandas.Series, or sequence of float64")
    })?;
    Ok(vec.into_pyarray(py).readonly())
}

/// Copy one sample into an owned vector.
#[cfg(feature = "python-bindings")]
pub fn extract_sample<'py>(py: Python<'py>, raw_data: &Bound<'py, PyAny>) -> PyResult<Vec<f64>> {
    let arr = extract_f64_array(py, raw_data)?;
    Ok(arr.as_array().to_vec())
}

/// Copy every group of a Python sequence of samples.
#[cfg(feature = "python-bindings")]
pub fn extract_groups<'py>(
    py: Python<'py>, raw_groups: &Bound<'py, PyAny>,
) -> PyResult<Vec<Vec<f64>>> {
    raw_groups
        .try_iter()
        .map_err(|_| PyTypeError::new_err("groups must be a sequence of 1-D float64 samples"))?
        .map(|group| extract_sample(py, &group?))
        .collect()
}

/// Accept a `TailType` or its name, defaulting to two-sided.
#[cfg(feature = "python-bindings")]
pub fn parse_tail(tail: Option<&Bound<'_, PyAny>>) -> PyResult<TailType> {
    let Some(tail) = tail else {
        return Ok(TailType::Two);
    };
    if let Ok(tail) = tail.extract::<TailType>() {
        return Ok(tail);
    }
    let name: String = tail
        .extract()
        .map_err(|_| PyTypeError::new_err("tail must be a TailType or one of 'left', 'right', 'two'"))?;
    Ok(name.parse::<TailType>()?)
}

#[cfg(feature = "python-bindings")]
pub fn parse_variance(equal_var: Option<bool>) -> VarianceAssumption {
    match equal_var {
        Some(true) => VarianceAssumption::Pooled,
        _ => VarianceAssumption::Unpooled,
    }
}
