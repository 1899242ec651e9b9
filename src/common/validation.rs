//! common::validation — shared input guards for test procedures.
//!
//! Purpose
//! -------
//! Centralize the range and shape checks every test family performs before
//! it derives a statistic: significance and confidence levels, probability
//! parameters, strictly positive scale parameters, finiteness of sample
//! values, and minimum sample lengths.
//!
//! Invariants & assumptions
//! ------------------------
//! - alpha and confidence levels lie in the open interval (0, 1).
//! - All sample values are finite (no `NaN`, no ±∞).
//! - Guards are pure and allocate only when building an error payload.
//!
//! Downstream usage
//! ----------------
//! - Call these guards at the top of each procedure; a successful return is
//!   a guarantee that basic shape constraints hold so the remaining code can
//!   focus on the statistic itself.

use crate::common::errors::{StatError, StatResult};

/// Validate a significance level: `0 < alpha < 1`.
///
/// Errors
/// ------
/// - `StatError::InvalidAlpha(alpha)` when alpha is NaN or outside (0, 1).
///
/// Examples
/// --------
/// ```rust
/// # use rust_hypotests::common::validation::validate_alpha;
/// assert!(validate_alpha(0.05).is_ok());
/// assert!(validate_alpha(1.5).is_err());
/// ```
pub fn validate_alpha(alpha: f64) -> StatResult<()> {
    if alpha > 0.0 && alpha < 1.0 {
        Ok(())
    } else {
        Err(StatError::InvalidAlpha(alpha))
    }
}

/// Validate a confidence level: `0 < level < 1`.
pub fn validate_confidence(level: f64) -> StatResult<()> {
    if level > 0.0 && level < 1.0 {
        Ok(())
    } else {
        Err(StatError::InvalidConfidence(level))
    }
}

/// Validate a probability-valued parameter in the open interval (0, 1).
pub fn validate_open_unit(name: &'static str, value: f64) -> StatResult<()> {
    if value > 0.0 && value < 1.0 {
        Ok(())
    } else {
        Err(StatError::InvalidParameter {
            name,
            value,
            reason: "Must lie in the open interval (0, 1).",
        })
    }
}

/// Validate a strictly positive, finite parameter (σ, σ², effect size).
pub fn validate_positive(name: &'static str, value: f64) -> StatResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(StatError::InvalidParameter { name, value, reason: "Must be positive and finite." })
    }
}

/// Validate a finite parameter (hypothesized mean, etc.).
pub fn validate_finite(name: &'static str, value: f64) -> StatResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(StatError::InvalidParameter { name, value, reason: "Must be a finite number." })
    }
}

/// Reject the first non-finite element of `data`.
///
/// `label` names the sample in the error message.
pub fn validate_finite_data(label: &str, data: &[f64]) -> StatResult<()> {
    match data.iter().enumerate().find(|(_, v)| !v.is_finite()) {
        Some((index, &value)) => {
            Err(StatError::NonFiniteData { sample: label.to_string(), index, value })
        }
        None => Ok(()),
    }
}

/// Require at least `required` observations in `data`.
pub fn validate_min_len(label: &str, data: &[f64], required: usize) -> StatResult<()> {
    if data.len() < required {
        return Err(StatError::InsufficientData {
            sample: label.to_string(),
            required,
            found: data.len(),
        });
    }
    Ok(())
}

/// Finite values and at least `required` of them.
pub fn validate_sample(label: &str, data: &[f64], required: usize) -> StatResult<()> {
    validate_min_len(label, data, required)?;
    validate_finite_data(label, data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::errors::ErrorKind;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover every error branch of the shared guards plus the
    // success paths.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // alpha must be strictly inside (0, 1); the endpoints and NaN fail.
    //
    // Given
    // -----
    // - alpha ∈ {0.05, 0.0, 1.0, 1.5, NaN}.
    //
    // Expect
    // ------
    // - Only 0.05 passes; the rest map to ErrorKind::InvalidParameter.
    fn validate_alpha_accepts_only_open_unit_interval() {
        // Arrange / Act / Assert
        assert!(validate_alpha(0.05).is_ok());
        for bad in [0.0, 1.0, 1.5, -0.1, f64::NAN] {
            let err = validate_alpha(bad).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidParameter, "alpha = {bad}");
        }
    }

    #[test]
    // Purpose
    // -------
    // The finiteness guard reports the offending index and value.
    //
    // Given
    // -----
    // - data = [1.0, 2.0, ∞, NaN] labelled "group 1".
    //
    // Expect
    // ------
    // - `NonFiniteData { index: 2, value: ∞ }`.
    fn validate_finite_data_reports_first_offender() {
        // Arrange
        let data = [1.0, 2.0, f64::INFINITY, f64::NAN];

        // Act
        let err = validate_finite_data("group 1", &data).unwrap_err();

        // Assert
        match err {
            StatError::NonFiniteData { sample, index, value } => {
                assert_eq!(sample, "group 1");
                assert_eq!(index, 2);
                assert!(value.is_infinite());
            }
            other => panic!("expected NonFiniteData, got {other:?}"),
        }
    }

    #[test]
    // Purpose
    // -------
    // Too-short samples fail with InsufficientData before finiteness is checked.
    //
    // Given
    // -----
    // - A single NaN observation with required = 2.
    //
    // Expect
    // ------
    // - `InsufficientData { required: 2, found: 1 }`.
    fn validate_sample_checks_length_first() {
        // Arrange
        let data = [f64::NAN];

        // Act
        let err = validate_sample("sample", &data, 2).unwrap_err();

        // Assert
        assert_eq!(
            err,
            StatError::InsufficientData { sample: "sample".into(), required: 2, found: 1 }
        );
    }

    #[test]
    fn validate_positive_rejects_zero_negative_and_infinite() {
        assert!(validate_positive("sigma", 2.0).is_ok());
        for bad in [0.0, -1.0, f64::INFINITY, f64::NAN] {
            assert!(validate_positive("sigma", bad).is_err(), "value = {bad}");
        }
        assert!(validate_open_unit("power", 0.8).is_ok());
        assert!(validate_open_unit("power", 1.0).is_err());
        assert!(validate_confidence(0.95).is_ok());
        assert!(validate_confidence(0.0).is_err());
    }
}
