//! common::descriptive — sufficient statistics for location tests.
//!
//! Purpose
//! -------
//! Reduce a sample to `(n, mean, M2)` where `M2` is the sum of squared
//! deviations from the mean, so every test family works from the same
//! summary whether the caller supplied raw data or published moments.
//!
//! Conventions
//! -----------
//! - Sample variance uses the unbiased `n − 1` denominator.
//! - Accumulation is a fixed left-to-right two-pass sum, so identical
//!   inputs give bit-identical summaries.

use crate::common::{
    errors::{StatError, StatResult},
    validation::{validate_finite, validate_sample},
};

/// SampleSummary — count, mean and centered sum of squares of one sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleSummary {
    pub n: usize,
    pub mean: f64,
    /// Σ (xᵢ − mean)².
    pub m2: f64,
}

impl SampleSummary {
    /// Summarize raw observations.
    ///
    /// Errors
    /// ------
    /// - `StatError::InsufficientData` if `data` is empty.
    /// - `StatError::NonFiniteData` if any value is NaN or ±∞.
    pub fn from_slice(label: &str, data: &[f64]) -> StatResult<Self> {
        validate_sample(label, data, 1)?;
        let n = data.len();
        let mean = data.iter().sum::<f64>() / n as f64;
        let m2 = data.iter().map(|x| (x - mean).powi(2)).sum::<f64>();
        Ok(SampleSummary { n, mean, m2 })
    }

    /// Summarize from published moments (`variance` uses `n − 1`).
    ///
    /// Errors
    /// ------
    /// - `StatError::InsufficientData` if `n == 0`.
    /// - `StatError::InvalidParameter` if `mean` is non-finite or `variance`
    ///   is negative or non-finite.
    pub fn from_moments(n: usize, mean: f64, variance: f64) -> StatResult<Self> {
        if n == 0 {
            return Err(StatError::InsufficientData {
                sample: "summary".to_string(),
                required: 1,
                found: 0,
            });
        }
        validate_finite("mean", mean)?;
        if !(variance.is_finite() && variance >= 0.0) {
            return Err(StatError::InvalidParameter {
                name: "variance",
                value: variance,
                reason: "Must be non-negative and finite.",
            });
        }
        let m2 = if n > 1 { variance * (n - 1) as f64 } else { 0.0 };
        Ok(SampleSummary { n, mean, m2 })
    }

    /// Check a summary built by hand rather than through a constructor.
    ///
    /// Errors
    /// ------
    /// - `StatError::InsufficientData` naming `label` if `n == 0`.
    /// - `StatError::InvalidParameter` if `mean` is non-finite or `m2` is
    ///   negative or non-finite.
    pub fn validate(&self, label: &str) -> StatResult<()> {
        if self.n == 0 {
            return Err(StatError::InsufficientData {
                sample: label.to_string(),
                required: 1,
                found: 0,
            });
        }
        validate_finite("mean", self.mean)?;
        if !(self.m2.is_finite() && self.m2 >= 0.0) {
            return Err(StatError::InvalidParameter {
                name: "m2",
                value: self.m2,
                reason: "Must be non-negative and finite.",
            });
        }
        Ok(())
    }

    /// Unbiased sample variance.
    ///
    /// Errors
    /// ------
    /// - `StatError::InsufficientData` if `n < 2`.
    pub fn variance(&self, label: &str) -> StatResult<f64> {
        if self.n < 2 {
            return Err(StatError::InsufficientData {
                sample: label.to_string(),
                required: 2,
                found: self.n,
            });
        }
        Ok(self.m2 / (self.n - 1) as f64)
    }

    /// Standard error of the mean, `sqrt(s² / n)`.
    pub fn std_error(&self, label: &str) -> StatResult<f64> {
        Ok((self.variance(label)? / self.n as f64).sqrt())
    }
}
