//! rust_hypotests — classical hypothesis tests with an immutable,
//! serializable result type and optional Python bindings.
//!
//! Purpose
//! -------
//! Serve as the crate root for Rust callers and as the PyO3 bridge that
//! exposes the test families to Python via the `_rust_hypotests` extension
//! module when the `python-bindings` feature is enabled.
//!
//! Key behaviors
//! -------------
//! - Re-export the core modules: `common` (tail type, result value,
//!   serialization, errors), `distribution` (reference distributions and
//!   tail arithmetic) and `statistical_tests` (the test families).
//! - Register `TailType`, a `#[pyclass]` wrapper around
//!   [`TestResult`](common::TestResult), and `#[pyfunction]` entry points
//!   `anova`, `t_test`, `t_test_paired` and `t_test_ind`.
//!
//! Invariants & assumptions
//! ------------------------
//! - All numerical work lives in the inner modules; this file performs only
//!   FFI glue, input conversion, and error mapping.
//! - Python-visible results are produced by the same Rust procedures and
//!   carry the same invariants as their Rust counterparts.
//!
//! Conventions
//! -----------
//! - Python dictionaries use the mapping keys of `common::serialization`;
//!   an infinite interval bound becomes `None`.
//! - Errors from core Rust code are converted to `ValueError` at the PyO3
//!   boundary with the Rust `Display` message preserved.
//!
//! Downstream usage
//! ----------------
//! - Native Rust code depends directly on the inner modules and can ignore
//!   everything gated behind `python-bindings`.
//!
//! Testing notes
//! -------------
//! - Numerical behavior is covered by unit tests in the inner modules and
//!   by `tests/integration_hypothesis_pipeline.rs`.
//! - The PyO3 layer is exercised by Python-level smoke tests.

pub mod common;
pub mod distribution;
pub mod statistical_tests;
pub mod utils;

#[cfg(feature = "python-bindings")]
use pyo3::{prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use crate::{
    common::{from_json, to_json, TailType, TestResult},
    statistical_tests::{anova, t_test},
    utils::{extract_groups, extract_sample, parse_tail, parse_variance},
};

/// TestResult — Python-facing wrapper for [`common::TestResult`].
///
/// Exposes every field as a read-only property plus `to_dict` /
/// `from_dict`, which route through the JSON mapping boundary so the
/// Python and Rust encodings agree key for key.
#[cfg(feature = "python-bindings")]
#[pyclass(name = "TestResult", module = "rust_hypotests", frozen)]
pub struct PyTestResult {
    inner: TestResult,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl PyTestResult {
    #[getter]
    pub fn test_statistic(&self) -> f64 {
        self.inner.test_statistic()
    }

    #[getter]
    pub fn p_value(&self) -> f64 {
        self.inner.p_value()
    }

    #[getter]
    pub fn confidence_interval(&self) -> (f64, f64) {
        self.inner.confidence_interval()
    }

    #[getter]
    pub fn null_hypothesis(&self) -> &str {
        self.inner.null_hypothesis()
    }

    #[getter]
    pub fn alt_hypothesis(&self) -> &str {
        self.inner.alt_hypothesis()
    }

    #[getter]
    pub fn reject_null(&self) -> bool {
        self.inner.reject_null()
    }

    pub fn to_dict<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyAny>> {
        let text = to_json(&self.inner)?;
        py.import("json")?.call_method1("loads", (text,))
    }

    #[staticmethod]
    pub fn from_dict<'py>(py: Python<'py>, mapping: &Bound<'py, PyAny>) -> PyResult<Self> {
        let text: String = py.import("json")?.call_method1("dumps", (mapping,))?.extract()?;
        Ok(PyTestResult { inner: from_json(&text)? })
    }

    fn __eq__(&self, other: PyRef<'_, Self>) -> bool {
        self.inner == other.inner
    }

    fn __repr__(&self) -> String {
        format!(
            "TestResult(test_statistic={}, p_value={}, confidence_interval={:?}, reject_null={})",
            self.inner.test_statistic(),
            self.inner.p_value(),
            self.inner.confidence_interval(),
            self.inner.reject_null(),
        )
    }
}

#[cfg(feature = "python-bindings")]
impl From<TestResult> for PyTestResult {
    fn from(inner: TestResult) -> Self {
        PyTestResult { inner }
    }
}

/// One-way ANOVA across a sequence of samples.
#[cfg(feature = "python-bindings")]
#[pyfunction(name = "anova")]
#[pyo3(signature = (groups, alpha = 0.05))]
fn py_anova<'py>(
    py: Python<'py>, groups: &Bound<'py, PyAny>, alpha: f64,
) -> PyResult<PyTestResult> {
    let groups = extract_groups(py, groups)?;
    Ok(anova::one_way_anova(&groups, alpha)?.into())
}

/// One-sample t-test; `tail` is a `TailType` or one of `"two"`, `"left"`,
/// `"right"`.
#[cfg(feature = "python-bindings")]
#[pyfunction(name = "t_test")]
#[pyo3(signature = (data, pop_mean, tail = None, alpha = 0.05))]
fn py_t_test<'py>(
    py: Python<'py>, data: &Bound<'py, PyAny>, pop_mean: f64, tail: Option<&Bound<'py, PyAny>>,
    alpha: f64,
) -> PyResult<PyTestResult> {
    let data = extract_sample(py, data)?;
    Ok(t_test::one_sample(&data, pop_mean, parse_tail(tail)?, alpha)?.into())
}

#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(signature = (data1, data2, tail = None, alpha = 0.05))]
fn t_test_paired<'py>(
    py: Python<'py>, data1: &Bound<'py, PyAny>, data2: &Bound<'py, PyAny>,
    tail: Option<&Bound<'py, PyAny>>, alpha: f64,
) -> PyResult<PyTestResult> {
    let (x, y) = (extract_sample(py, data1)?, extract_sample(py, data2)?);
    Ok(t_test::paired(&x, &y, parse_tail(tail)?, alpha)?.into())
}

/// Independent two-sample t-test; Welch's unless `equal_var=True`.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(signature = (data1, data2, equal_var = None, tail = None, alpha = 0.05))]
fn t_test_ind<'py>(
    py: Python<'py>, data1: &Bound<'py, PyAny>, data2: &Bound<'py, PyAny>,
    equal_var: Option<bool>, tail: Option<&Bound<'py, PyAny>>, alpha: f64,
) -> PyResult<PyTestResult> {
    let (x, y) = (extract_sample(py, data1)?, extract_sample(py, data2)?);
    Ok(t_test::independent(&x, &y, parse_variance(equal_var), parse_tail(tail)?, alpha)?.into())
}

/// _rust_hypotests — Python module initializer.
///
/// Registers the `TestResult` class and the procedure functions. Invoked by
/// Python when importing the compiled extension.
#[cfg(feature = "python-bindings")]
#[pymodule]
fn _rust_hypotests<'py>(_py: Python<'py>, m: &Bound<'py, PyModule>) -> PyResult<()> {
    m.add_class::<TailType>()?;
    m.add_class::<PyTestResult>()?;
    m.add_function(wrap_pyfunction!(py_anova, m)?)?;
    m.add_function(wrap_pyfunction!(py_t_test, m)?)?;
    m.add_function(wrap_pyfunction!(t_test_paired, m)?)?;
    m.add_function(wrap_pyfunction!(t_test_ind, m)?)?;
    Ok(())
}
