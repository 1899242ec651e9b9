//! Shared tail of every location test (t, z, proportion).
//!
//! A location test standardizes `estimate − null_value` by a standard error,
//! refers the statistic to a symmetric reference, and reports a location
//! interval around the estimate.
use crate::{
    common::{errors::StatResult, tail::TailType, test_result::TestResult},
    distribution::{confidence_interval, p_value, Reference},
    statistical_tests::{
        hypotheses::{conclude, Hypotheses},
        validation::validate_spread,
    },
};

/// Point estimate with the standard errors used for the statistic and for
/// the interval. They differ only where the null fixes the variance
/// (one-sample proportion).
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct LocationEstimate {
    pub estimate: f64,
    pub null_value: f64,
    pub test_std_error: f64,
    pub interval_std_error: f64,
}

impl LocationEstimate {
    pub fn new(estimate: f64, null_value: f64, std_error: f64) -> Self {
        LocationEstimate {
            estimate,
            null_value,
            test_std_error: std_error,
            interval_std_error: std_error,
        }
    }
}

/// Statistic, p-value, interval and decision for a location estimate.
///
/// Errors
/// ------
/// - `StatError::DegenerateInput` if the test standard error is zero.
pub(crate) fn location_test(
    est: LocationEstimate, reference: &Reference, tail: TailType, alpha: f64,
    hypotheses: Hypotheses,
) -> StatResult<TestResult> {
    validate_spread(est.test_std_error, "standard error is zero")?;
    let statistic = (est.estimate - est.null_value) / est.test_std_error;
    let p = p_value(statistic, reference, tail)?;
    let interval =
        confidence_interval(est.estimate, est.interval_std_error, 1.0 - alpha, reference, tail)?;
    conclude(statistic, p, interval, hypotheses, alpha)
}
