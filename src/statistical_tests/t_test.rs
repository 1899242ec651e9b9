//! statistical_tests::t_test — Student and Welch t-tests.
//!
//! Purpose
//! -------
//! Compare means when population variances are unknown: one sample against
//! a hypothesized mean, paired samples through their differences, and two
//! independent samples under a pooled or separate-variance assumption.
//!
//! Key behaviors
//! -------------
//! - One-sample: t = (x̄ − µ₀) / (s / √n), df = n − 1.
//! - Paired: the one-sample test on dᵢ = xᵢ − yᵢ against 0.
//! - Independent, pooled:
//!     s²ₚ = ((n₁ − 1)s₁² + (n₂ − 1)s₂²) / (n₁ + n₂ − 2),
//!     SE = sₚ √(1/n₁ + 1/n₂), df = n₁ + n₂ − 2.
//! - Independent, Welch: SE = √(s₁²/n₁ + s₂²/n₂) with Welch–Satterthwaite df.
//! - Intervals are on the mean (or mean difference) and follow the tail:
//!   two-sided, or one-sided with an infinite bound.
//!
//! Invariants & assumptions
//! ------------------------
//! - Each sample has at least 2 finite observations.
//! - A zero standard error is degenerate and rejected.
//!
//! Testing notes
//! -------------
//! - Unit tests pin t, p and intervals on a small fixed data set for each
//!   variant and cover length mismatch and zero-variance inputs.

use tracing::debug;

use crate::{
    common::{
        descriptive::SampleSummary,
        errors::{StatError, StatResult},
        options::{TestOptions, VarianceAssumption},
        sample::{label_or, Sample},
        tail::TailType,
        test_result::TestResult,
        validation::{validate_alpha, validate_finite},
    },
    distribution::Reference,
    statistical_tests::{
        hypotheses::Hypotheses,
        location::{location_test, LocationEstimate},
        validation::{validate_paired, validate_spread},
    },
};

/// One-sample t-test of `H0: µ = pop_mean` (or ≥ / ≤ for one tail).
///
/// Errors
/// ------
/// - `StatError::InvalidAlpha`, or `StatError::InvalidParameter` for a
///   non-finite `pop_mean`.
/// - `StatError::InsufficientData` for fewer than 2 observations.
/// - `StatError::NonFiniteData` for NaN / ±∞.
/// - `StatError::DegenerateInput` for a constant sample.
///
/// Examples
/// --------
/// ```rust
/// use rust_hypotests::common::TailType;
/// use rust_hypotests::statistical_tests::t_test;
///
/// let r = t_test::one_sample(&[2.0, 3.0, 5.0, 7.0, 11.0], 5.0, TailType::Two, 0.05).unwrap();
/// assert!((r.test_statistic() - 0.375).abs() < 1e-12);
/// assert!(!r.reject_null());
/// ```
pub fn one_sample<S: Sample + ?Sized>(
    data: &S, pop_mean: f64, tail: TailType, alpha: f64,
) -> StatResult<TestResult> {
    validate_alpha(alpha)?;
    let label = label_or(data, "sample");
    let summary = SampleSummary::from_slice(&label, &data.observations())?;
    one_sample_core(&summary, &label, pop_mean, tail, alpha, Hypotheses::compare("µ", pop_mean, tail))
}

/// One-sample t-test from `(n, mean, variance)`.
pub fn one_sample_from_summary(
    summary: &SampleSummary, pop_mean: f64, tail: TailType, alpha: f64,
) -> StatResult<TestResult> {
    validate_alpha(alpha)?;
    summary.validate("sample")?;
    one_sample_core(summary, "sample", pop_mean, tail, alpha, Hypotheses::compare("µ", pop_mean, tail))
}

/// Paired t-test of `H0: µ1 = µ2` on element-wise differences.
///
/// Errors
/// ------
/// - `StatError::LengthMismatch` for samples of unequal length.
/// - Otherwise as [`one_sample`], applied to the differences.
pub fn paired<A: Sample + ?Sized, B: Sample + ?Sized>(
    data1: &A, data2: &B, tail: TailType, alpha: f64,
) -> StatResult<TestResult> {
    validate_alpha(alpha)?;
    let (x, y) = (data1.observations(), data2.observations());
    validate_paired(&x, &y)?;
    let diffs: Vec<f64> = x.iter().zip(y.iter()).map(|(a, b)| a - b).collect();
    let summary = SampleSummary::from_slice("paired differences", &diffs)?;
    one_sample_core(
        &summary,
        "paired differences",
        0.0,
        tail,
        alpha,
        Hypotheses::compare("µ1", "µ2", tail),
    )
}

/// Two-sample t-test of `H0: µ1 = µ2` on independent samples.
///
/// Parameters
/// ----------
/// - `variance`: [`VarianceAssumption::Pooled`] for Student's test,
///   [`VarianceAssumption::Unpooled`] for Welch's.
///
/// Errors
/// ------
/// - `StatError::InsufficientData` if either sample has fewer than 2 values.
/// - `StatError::DegenerateInput` if both samples are constant.
pub fn independent<A: Sample + ?Sized, B: Sample + ?Sized>(
    data1: &A, data2: &B, variance: VarianceAssumption, tail: TailType, alpha: f64,
) -> StatResult<TestResult> {
    validate_alpha(alpha)?;
    let (l1, l2) = (label_or(data1, "sample 1"), label_or(data2, "sample 2"));
    let s1 = SampleSummary::from_slice(&l1, &data1.observations())?;
    let s2 = SampleSummary::from_slice(&l2, &data2.observations())?;
    independent_core((&s1, &l1), (&s2, &l2), variance, tail, alpha)
}

/// [`independent`] configured by a [`TestOptions`] record.
pub fn independent_with<A: Sample + ?Sized, B: Sample + ?Sized>(
    data1: &A, data2: &B, options: &TestOptions,
) -> StatResult<TestResult> {
    independent(data1, data2, options.variance, options.tail, options.alpha)
}

/// Two-sample t-test from per-sample summaries.
pub fn independent_from_summaries(
    s1: &SampleSummary, s2: &SampleSummary, variance: VarianceAssumption, tail: TailType,
    alpha: f64,
) -> StatResult<TestResult> {
    validate_alpha(alpha)?;
    s1.validate("sample 1")?;
    s2.validate("sample 2")?;
    independent_core((s1, "sample 1"), (s2, "sample 2"), variance, tail, alpha)
}

/// Welch–Satterthwaite degrees of freedom for `a = s₁²/n₁`, `b = s₂²/n₂`.
///
/// Errors
/// ------
/// - `StatError::InsufficientData` if either sample has fewer than 2
///   observations.
/// - `StatError::DegenerateInput` if `a + b` is not positive.
pub fn welch_df(a: f64, n1: usize, b: f64, n2: usize) -> StatResult<f64> {
    for (label, n) in [("sample 1", n1), ("sample 2", n2)] {
        if n < 2 {
            return Err(StatError::InsufficientData {
                sample: label.to_string(),
                required: 2,
                found: n,
            });
        }
    }
    validate_spread(a + b, "both samples have zero variance")?;
    Ok((a + b).powi(2) / (a.powi(2) / (n1 - 1) as f64 + b.powi(2) / (n2 - 1) as f64))
}

fn one_sample_core(
    summary: &SampleSummary, label: &str, pop_mean: f64, tail: TailType, alpha: f64,
    hypotheses: Hypotheses,
) -> StatResult<TestResult> {
    validate_finite("pop_mean", pop_mean)?;
    let se = summary.std_error(label)?;
    validate_spread(se, "sample has zero variance")?;
    let df = (summary.n - 1) as f64;
    let reference = Reference::students_t(df)?;

    let result = location_test(
        LocationEstimate::new(summary.mean, pop_mean, se),
        &reference,
        tail,
        alpha,
        hypotheses,
    )?;
    debug!(
        n = summary.n,
        df,
        t_statistic = result.test_statistic(),
        p_value = result.p_value(),
        %tail,
        "one-sample t-test"
    );
    Ok(result)
}

fn independent_core(
    (s1, l1): (&SampleSummary, &str), (s2, l2): (&SampleSummary, &str),
    variance: VarianceAssumption, tail: TailType, alpha: f64,
) -> StatResult<TestResult> {
    let (v1, v2) = (s1.variance(l1)?, s2.variance(l2)?);
    let (n1, n2) = (s1.n as f64, s2.n as f64);

    let (se, df) = match variance {
        VarianceAssumption::Pooled => {
            let df = n1 + n2 - 2.0;
            let pooled = ((n1 - 1.0) * v1 + (n2 - 1.0) * v2) / df;
            ((pooled * (1.0 / n1 + 1.0 / n2)).sqrt(), df)
        }
        VarianceAssumption::Unpooled => {
            let (a, b) = (v1 / n1, v2 / n2);
            ((a + b).sqrt(), welch_df(a, s1.n, b, s2.n)?)
        }
    };
    validate_spread(se, "both samples have zero variance")?;
    let reference = Reference::students_t(df)?;

    let result = location_test(
        LocationEstimate::new(s1.mean - s2.mean, 0.0, se),
        &reference,
        tail,
        alpha,
        Hypotheses::compare("µ1", "µ2", tail),
    )?;
    debug!(
        n1 = s1.n,
        n2 = s2.n,
        df,
        ?variance,
        t_statistic = result.test_statistic(),
        p_value = result.p_value(),
        %tail,
        "two-sample t-test"
    );
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::errors::ErrorKind;
    use approx::assert_abs_diff_eq;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - One-sample, paired, pooled and Welch t-tests on a fixed pair of
    //   samples, pinning statistic, p-value and interval.
    // - One-sided intervals and hypothesis text.
    // - Error branches (length mismatch, singleton, zero variance).
    // -------------------------------------------------------------------------

    const X: [f64; 5] = [2.0, 3.0, 5.0, 7.0, 11.0];
    const Y: [f64; 5] = [1.0, 3.0, 6.0, 7.0, 10.0];

    #[test]
    // Purpose
    // -------
    // One-sample t against µ₀ = 5.
    //
    // Given
    // -----
    // - x̄ = 5.6, s = √12.8, n = 5.
    //
    // Expect
    // ------
    // - t = 0.375, p ≈ 0.7267, CI ≈ (1.1577, 10.0423).
    fn one_sample_matches_reference_values() {
        // Act
        let r = one_sample(&X, 5.0, TailType::Two, 0.05).unwrap();

        // Assert
        assert_abs_diff_eq!(r.test_statistic(), 0.375, epsilon = 1e-12);
        assert_abs_diff_eq!(r.p_value(), 0.726697, epsilon = 1e-5);
        let (lo, hi) = r.confidence_interval();
        assert_abs_diff_eq!(lo, 1.1577, epsilon = 1e-3);
        assert_abs_diff_eq!(hi, 10.0423, epsilon = 1e-3);
        assert_eq!(r.null_hypothesis(), "H0: µ = 5");
        assert_eq!(r.alt_hypothesis(), "Ha: µ ≠ 5");
        assert!(!r.reject_null());
    }

    #[test]
    // Purpose
    // -------
    // One-sided tails halve the two-sided p-value on the matching side and
    // produce half-open intervals.
    fn one_sample_one_sided_tails() {
        let two = one_sample(&X, 5.0, TailType::Two, 0.05).unwrap();
        let right = one_sample(&X, 5.0, TailType::Right, 0.05).unwrap();
        let left = one_sample(&X, 5.0, TailType::Left, 0.05).unwrap();

        assert_abs_diff_eq!(right.p_value(), two.p_value() / 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(left.p_value(), 1.0 - two.p_value() / 2.0, epsilon = 1e-12);
        assert_eq!(right.confidence_interval().1, f64::INFINITY);
        assert_eq!(left.confidence_interval().0, f64::NEG_INFINITY);
        assert_eq!(right.null_hypothesis(), "H0: µ <= 5");
        assert_eq!(left.alt_hypothesis(), "Ha: µ < 5");
    }

    #[test]
    // Purpose
    // -------
    // Paired test on d = X − Y = [1, 0, −1, 0, 1].
    //
    // Expect
    // ------
    // - t ≈ 0.5345, p ≈ 0.621, CI ≈ (−0.83885, 1.23885).
    fn paired_matches_reference_values() {
        let r = paired(&X, &Y, TailType::Two, 0.05).unwrap();

        assert_abs_diff_eq!(r.test_statistic(), 0.534522, epsilon = 1e-5);
        assert_abs_diff_eq!(r.p_value(), 0.621, epsilon = 1e-3);
        let (lo, hi) = r.confidence_interval();
        assert_abs_diff_eq!(lo, -0.83885, epsilon = 1e-4);
        assert_abs_diff_eq!(hi, 1.23885, epsilon = 1e-4);
        assert_eq!(r.null_hypothesis(), "H0: µ1 = µ2");
    }

    #[test]
    // Purpose
    // -------
    // Welch and pooled variants share SE here (equal n) but differ in df.
    //
    // Expect
    // ------
    // - t ≈ 0.0893, p ≈ 0.931 for both.
    // - Welch CI ≈ (−4.967041, 5.367041); pooled CI ≈ (−4.966684, 5.366684).
    fn independent_welch_and_pooled() {
        let welch = independent(&X, &Y, VarianceAssumption::Unpooled, TailType::Two, 0.05).unwrap();
        let pooled = independent(&X, &Y, VarianceAssumption::Pooled, TailType::Two, 0.05).unwrap();

        assert_abs_diff_eq!(welch.test_statistic(), 0.089264, epsilon = 1e-5);
        assert_abs_diff_eq!(welch.p_value(), 0.931, epsilon = 1e-3);
        assert_abs_diff_eq!(welch.confidence_interval().0, -4.967041, epsilon = 1e-3);
        assert_abs_diff_eq!(welch.confidence_interval().1, 5.367041, epsilon = 1e-3);

        assert_abs_diff_eq!(pooled.test_statistic(), welch.test_statistic(), epsilon = 1e-12);
        assert_abs_diff_eq!(pooled.confidence_interval().0, -4.966684, epsilon = 1e-4);
        assert_abs_diff_eq!(pooled.confidence_interval().1, 5.366684, epsilon = 1e-4);

        let via_options = independent_with(&X, &Y, &TestOptions::default()).unwrap();
        assert_eq!(via_options, welch);
    }

    #[test]
    fn welch_df_matches_hand_value() {
        let df = welch_df(12.8 / 5.0, 5, 12.3 / 5.0, 5).unwrap();
        assert_abs_diff_eq!(df, 7.99683, epsilon = 1e-4);
    }

    #[test]
    // Purpose
    // -------
    // Sample sizes below 2 have no n − 1 denominator.
    //
    // Expect
    // ------
    // - InsufficientData for n = 0 or n = 1 on either side, never a panic.
    // - DegenerateInput when both variances are zero.
    fn welch_df_rejects_small_or_flat_samples() {
        assert_eq!(welch_df(1.0, 0, 1.0, 5).unwrap_err().kind(), ErrorKind::InsufficientData);
        assert_eq!(welch_df(1.0, 5, 1.0, 1).unwrap_err().kind(), ErrorKind::InsufficientData);
        assert_eq!(welch_df(0.0, 5, 0.0, 5).unwrap_err().kind(), ErrorKind::DegenerateInput);
    }

    #[test]
    fn summary_forms_reject_hand_built_summaries() {
        let good = SampleSummary::from_moments(5, 5.6, 12.8).unwrap();
        let empty = SampleSummary { n: 0, mean: 1.0, m2: 0.0 };
        let negative = SampleSummary { n: 5, mean: 1.0, m2: -4.0 };

        assert_eq!(
            one_sample_from_summary(&negative, 0.0, TailType::Two, 0.05).unwrap_err().kind(),
            ErrorKind::InvalidParameter
        );
        assert_eq!(
            independent_from_summaries(&good, &empty, VarianceAssumption::Unpooled, TailType::Two, 0.05)
                .unwrap_err()
                .kind(),
            ErrorKind::InsufficientData
        );
    }

    #[test]
    fn summary_forms_agree_with_raw_forms() {
        let s1 = SampleSummary::from_moments(5, 5.6, 12.8).unwrap();
        let s2 = SampleSummary::from_moments(5, 5.4, 12.3).unwrap();

        let raw = one_sample(&X, 5.0, TailType::Two, 0.05).unwrap();
        let summ = one_sample_from_summary(&s1, 5.0, TailType::Two, 0.05).unwrap();
        assert_abs_diff_eq!(raw.p_value(), summ.p_value(), epsilon = 1e-12);

        let raw = independent(&X, &Y, VarianceAssumption::Pooled, TailType::Left, 0.05).unwrap();
        let summ =
            independent_from_summaries(&s1, &s2, VarianceAssumption::Pooled, TailType::Left, 0.05)
                .unwrap();
        assert_abs_diff_eq!(raw.test_statistic(), summ.test_statistic(), epsilon = 1e-10);
    }

    #[test]
    // Purpose
    // -------
    // Structural failures map to their error kinds.
    fn error_branches() {
        assert_eq!(
            paired(&X, &Y[..4], TailType::Two, 0.05).unwrap_err().kind(),
            ErrorKind::InvalidInput
        );
        assert_eq!(
            one_sample(&[1.0], 0.0, TailType::Two, 0.05).unwrap_err().kind(),
            ErrorKind::InsufficientData
        );
        assert_eq!(
            one_sample(&[4.0, 4.0, 4.0], 0.0, TailType::Two, 0.05).unwrap_err().kind(),
            ErrorKind::DegenerateInput
        );
        assert_eq!(
            paired(&X, &X, TailType::Two, 0.05).unwrap_err().kind(),
            ErrorKind::DegenerateInput
        );
        assert_eq!(
            independent(&[1.0, 1.0], &[2.0, 2.0], VarianceAssumption::Unpooled, TailType::Two, 0.05)
                .unwrap_err()
                .kind(),
            ErrorKind::DegenerateInput
        );
        assert_eq!(
            one_sample(&X, f64::NAN, TailType::Two, 0.05).unwrap_err().kind(),
            ErrorKind::InvalidParameter
        );
        assert_eq!(
            one_sample(&X, 5.0, TailType::Two, 0.0).unwrap_err().kind(),
            ErrorKind::InvalidParameter
        );
    }
}
