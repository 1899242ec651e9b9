//! statistical_tests::proportion — large-sample z-tests for proportions.
//!
//! Purpose
//! -------
//! Test a single success rate against a hypothesized value, or compare two
//! independent success rates, from counts or from binary (0/1) data.
//!
//! Key behaviors
//! -------------
//! - One-sample: z = (p̂ − p₀) / √(p₀(1 − p₀)/n). The statistic uses the
//!   variance fixed by H0; the interval is the Wald interval
//!   p̂ ± q·√(p̂(1 − p̂)/n).
//! - Two-sample: z = (p̂₁ − p̂₂) / SE with
//!   - pooled SE   = √(p̄(1 − p̄)(1/n₁ + 1/n₂)), p̄ = (x₁ + x₂)/(n₁ + n₂),
//!   - unpooled SE = √(p̂₁(1 − p̂₁)/n₁ + p̂₂(1 − p̂₂)/n₂).
//!   The interval on p₁ − p₂ always uses the unpooled SE.
//!
//! Invariants & assumptions
//! ------------------------
//! - Counts satisfy `0 ≤ successes ≤ trials` and `trials ≥ 1`.
//! - `p₀` lies strictly inside (0, 1).
//! - Binary data contain only 0.0 and 1.0.
//! - A zero test SE (both samples all-success or all-failure) is degenerate.

use tracing::debug;

use crate::{
    common::{
        errors::{StatError, StatResult},
        options::VarianceAssumption,
        sample::{label_or, Sample},
        tail::TailType,
        test_result::TestResult,
        validation::{validate_alpha, validate_finite_data, validate_open_unit},
    },
    distribution::Reference,
    statistical_tests::{
        hypotheses::Hypotheses,
        location::{location_test, LocationEstimate},
    },
};

/// One-sample proportion test of `H0: p = pop_proportion`.
///
/// Errors
/// ------
/// - `StatError::InvalidAlpha`; `StatError::InvalidParameter` when
///   `pop_proportion ∉ (0, 1)` or `successes > trials`.
/// - `StatError::InsufficientData` when `trials == 0`.
///
/// Examples
/// --------
/// ```rust
/// use rust_hypotests::common::TailType;
/// use rust_hypotests::statistical_tests::proportion;
///
/// let r = proportion::one_sample(3, 5, 0.5, TailType::Two, 0.05).unwrap();
/// assert!((r.test_statistic() - 0.4472136).abs() < 1e-6);
/// ```
pub fn one_sample(
    successes: u64, trials: u64, pop_proportion: f64, tail: TailType, alpha: f64,
) -> StatResult<TestResult> {
    validate_alpha(alpha)?;
    validate_open_unit("pop_proportion", pop_proportion)?;
    let p_hat = sample_proportion("sample", successes, trials)?;
    let n = trials as f64;

    let est = LocationEstimate {
        estimate: p_hat,
        null_value: pop_proportion,
        test_std_error: (pop_proportion * (1.0 - pop_proportion) / n).sqrt(),
        interval_std_error: (p_hat * (1.0 - p_hat) / n).sqrt(),
    };
    let result = location_test(
        est,
        &Reference::StandardNormal,
        tail,
        alpha,
        Hypotheses::compare("p", pop_proportion, tail),
    )?;
    debug!(successes, trials, p_hat, z_statistic = result.test_statistic(), p_value = result.p_value(), %tail, "one-sample proportion test");
    Ok(result)
}

/// [`one_sample`] on binary observations.
///
/// Errors
/// ------
/// - `StatError::InvalidParameter` if a value is neither 0 nor 1.
pub fn one_sample_from_data<S: Sample + ?Sized>(
    data: &S, pop_proportion: f64, tail: TailType, alpha: f64,
) -> StatResult<TestResult> {
    let (successes, trials) = count_binary(&label_or(data, "sample"), &data.observations())?;
    one_sample(successes, trials, pop_proportion, tail, alpha)
}

/// Two-sample proportion test of `H0: p1 = p2`.
///
/// Errors
/// ------
/// - As [`one_sample`] for each sample's counts.
/// - `StatError::DegenerateInput` when the test SE is zero.
pub fn two_sample(
    successes1: u64, trials1: u64, successes2: u64, trials2: u64, variance: VarianceAssumption,
    tail: TailType, alpha: f64,
) -> StatResult<TestResult> {
    validate_alpha(alpha)?;
    let p1 = sample_proportion("sample 1", successes1, trials1)?;
    let p2 = sample_proportion("sample 2", successes2, trials2)?;
    let (n1, n2) = (trials1 as f64, trials2 as f64);

    let unpooled = (p1 * (1.0 - p1) / n1 + p2 * (1.0 - p2) / n2).sqrt();
    let test_std_error = match variance {
        VarianceAssumption::Pooled => {
            let p = (successes1 + successes2) as f64 / (n1 + n2);
            (p * (1.0 - p) * (1.0 / n1 + 1.0 / n2)).sqrt()
        }
        VarianceAssumption::Unpooled => unpooled,
    };

    let est = LocationEstimate {
        estimate: p1 - p2,
        null_value: 0.0,
        test_std_error,
        interval_std_error: unpooled,
    };
    let result = location_test(
        est,
        &Reference::StandardNormal,
        tail,
        alpha,
        Hypotheses::compare("p1", "p2", tail),
    )?;
    debug!(
        p1,
        p2,
        ?variance,
        z_statistic = result.test_statistic(),
        p_value = result.p_value(),
        %tail,
        "two-sample proportion test"
    );
    Ok(result)
}

/// [`two_sample`] on binary observations.
pub fn two_sample_from_data<A: Sample + ?Sized, B: Sample + ?Sized>(
    data1: &A, data2: &B, variance: VarianceAssumption, tail: TailType, alpha: f64,
) -> StatResult<TestResult> {
    let (x1, n1) = count_binary(&label_or(data1, "sample 1"), &data1.observations())?;
    let (x2, n2) = count_binary(&label_or(data2, "sample 2"), &data2.observations())?;
    two_sample(x1, n1, x2, n2, variance, tail, alpha)
}

fn sample_proportion(label: &str, successes: u64, trials: u64) -> StatResult<f64> {
    if trials == 0 {
        return Err(StatError::InsufficientData {
            sample: label.to_string(),
            required: 1,
            found: 0,
        });
    }
    if successes > trials {
        return Err(StatError::InvalidParameter {
            name: "successes",
            value: successes as f64,
            reason: "Must not exceed the number of trials.",
        });
    }
    Ok(successes as f64 / trials as f64)
}

fn count_binary(label: &str, data: &[f64]) -> StatResult<(u64, u64)> {
    validate_finite_data(label, data)?;
    let mut successes = 0u64;
    for &value in data {
        if value == 1.0 {
            successes += 1;
        } else if value != 0.0 {
            return Err(StatError::InvalidParameter {
                name: "observation",
                value,
                reason: "Binary data must be 0 or 1.",
            });
        }
    }
    Ok((successes, data.len() as u64))
}
