//! statistical_tests::chi_square — χ² goodness of fit, independence, variance.
//!
//! Purpose
//! -------
//! Three classical χ² procedures:
//!
//! - [`goodness_of_fit`]: χ² = Σ (Oᵢ − Eᵢ)² / Eᵢ, df = k − 1.
//! - [`independence`]: the same sum over an r × c contingency table with
//!   Eᵢⱼ = rowᵢ · colⱼ / N, df = (r − 1)(c − 1).
//! - [`variance`]: χ² = (n − 1)s² / σ₀², df = n − 1.
//!
//! Key behaviors
//! -------------
//! - Goodness of fit and independence are right-tailed; their interval is the
//!   (1 − α) acceptance region `[0, χ²₁₋α]`.
//! - The variance test honors the caller's tail and reports an interval on
//!   σ² itself:
//!   - Two   → ((n − 1)s² / q(1 − α/2), (n − 1)s² / q(α/2))
//!   - Right → ((n − 1)s² / q(1 − α), +∞)
//!   - Left  → (0, (n − 1)s² / q(α))
//!
//! Invariants & assumptions
//! ------------------------
//! - Observed counts are non-negative and finite; expected counts are
//!   strictly positive.
//! - Contingency tables are at least 2 × 2 with no empty row or column.
//! - No continuity correction is applied.

use ndarray::ArrayView2;
use tracing::debug;

use crate::{
    common::{
        descriptive::SampleSummary,
        errors::{StatError, StatResult},
        sample::{label_or, Sample},
        tail::TailType,
        test_result::TestResult,
        validation::{validate_alpha, validate_positive},
    },
    distribution::{acceptance_region, p_value, Reference},
    statistical_tests::{
        hypotheses::{conclude, Hypotheses},
        validation::{validate_contingency, validate_counts, validate_group_count},
    },
};

/// χ² goodness-of-fit test of observed against expected counts.
///
/// Errors
/// ------
/// - `StatError::InvalidAlpha`.
/// - `StatError::LengthMismatch` if the two vectors differ in length.
/// - `StatError::InsufficientGroups` for fewer than 2 categories.
/// - `StatError::InvalidParameter` for a negative observed or a
///   non-positive expected count.
///
/// Examples
/// --------
/// ```rust
/// use rust_hypotests::statistical_tests::chi_square::goodness_of_fit;
///
/// let r = goodness_of_fit(&[30.0, 10.0, 20.0], &[25.0, 15.0, 20.0], 0.05).unwrap();
/// assert!((r.test_statistic() - 8.0 / 3.0).abs() < 1e-12);
/// assert!(!r.reject_null());
/// ```
pub fn goodness_of_fit(observed: &[f64], expected: &[f64], alpha: f64) -> StatResult<TestResult> {
    validate_alpha(alpha)?;
    if observed.len() != expected.len() {
        return Err(StatError::LengthMismatch { left: observed.len(), right: expected.len() });
    }
    validate_group_count(observed.len(), 2)?;
    validate_counts("observed", observed)?;
    for &e in expected {
        validate_positive("expected count", e)?;
    }

    let statistic: f64 =
        observed.iter().zip(expected).map(|(o, e)| (o - e).powi(2) / e).sum();
    let df = (observed.len() - 1) as f64;

    let result = right_tailed(
        statistic,
        df,
        alpha,
        Hypotheses::new(
            "H0: Observed distribution matches expected distribution",
            "Ha: Observed distribution does not match expected distribution",
        ),
    )?;
    debug!(categories = observed.len(), df, chi2 = statistic, p_value = result.p_value(), "chi-square goodness of fit");
    Ok(result)
}

/// χ² test of independence on an r × c contingency table.
///
/// Errors
/// ------
/// - `StatError::InsufficientGroups` for fewer than 2 rows or columns.
/// - `StatError::NonFiniteData` / `StatError::InvalidParameter` for bad cells.
/// - `StatError::DegenerateInput` for an empty row or column.
pub fn independence(table: ArrayView2<'_, f64>, alpha: f64) -> StatResult<TestResult> {
    validate_alpha(alpha)?;
    validate_contingency(&table)?;

    let row_totals = table.sum_axis(ndarray::Axis(1));
    let col_totals = table.sum_axis(ndarray::Axis(0));
    let total = table.sum();

    let mut statistic = 0.0;
    for ((i, j), &observed) in table.indexed_iter() {
        let expected = row_totals[i] * col_totals[j] / total;
        statistic += (observed - expected).powi(2) / expected;
    }
    let (rows, cols) = table.dim();
    let df = ((rows - 1) * (cols - 1)) as f64;

    let result = right_tailed(
        statistic,
        df,
        alpha,
        Hypotheses::new("H0: Variables are independent", "Ha: Variables are not independent"),
    )?;
    debug!(rows, cols, df, chi2 = statistic, p_value = result.p_value(), "chi-square independence");
    Ok(result)
}

/// χ² test of a single variance, `H0: σ² = pop_variance`.
///
/// Errors
/// ------
/// - `StatError::InvalidParameter` for a non-positive `pop_variance`.
/// - `StatError::InsufficientData` for fewer than 2 observations.
/// - `StatError::NonFiniteData` for NaN / ±∞.
pub fn variance<S: Sample + ?Sized>(
    data: &S, pop_variance: f64, tail: TailType, alpha: f64,
) -> StatResult<TestResult> {
    validate_alpha(alpha)?;
    validate_positive("pop_variance", pop_variance)?;
    let label = label_or(data, "sample");
    let summary = SampleSummary::from_slice(&label, &data.observations())?;
    let s2 = summary.variance(&label)?;

    let df = (summary.n - 1) as f64;
    let reference = Reference::chi_squared(df)?;
    let scaled = df * s2;
    let statistic = scaled / pop_variance;
    let p = p_value(statistic, &reference, tail)?;

    let confidence = 1.0 - alpha;
    let interval = match tail {
        TailType::Two => (
            scaled / reference.quantile(1.0 - alpha / 2.0)?,
            scaled / reference.quantile(alpha / 2.0)?,
        ),
        TailType::Right => (scaled / reference.quantile(confidence)?, f64::INFINITY),
        TailType::Left => (0.0, scaled / reference.quantile(alpha)?),
    };

    debug!(n = summary.n, df, chi2 = statistic, p_value = p, %tail, "chi-square variance test");
    conclude(statistic, p, interval, Hypotheses::compare("σ²", pop_variance, tail), alpha)
}

fn right_tailed(
    statistic: f64, df: f64, alpha: f64, hypotheses: Hypotheses,
) -> StatResult<TestResult> {
    let reference = Reference::chi_squared(df)?;
    let p = p_value(statistic, &reference, TailType::Right)?;
    let interval = acceptance_region(1.0 - alpha, &reference, TailType::Right)?;
    conclude(statistic, p, interval, hypotheses, alpha)
}
