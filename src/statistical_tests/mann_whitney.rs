//! statistical_tests::mann_whitney — Mann–Whitney U (Wilcoxon rank-sum) test.
//!
//! Purpose
//! -------
//! Rank-based comparison of two independent samples without a normality
//! assumption.
//!
//! Key behaviors
//! -------------
//! - All observations are ranked jointly; tied values share the average of
//!   the ranks they span.
//! - The statistic is U₁ = R₁ − n₁(n₁ + 1)/2 for the first sample, so
//!   `TailType::Right` means "sample 1 tends to be larger".
//! - p-values use the normal approximation with tie-corrected variance
//!     σ²_U = n₁n₂/12 · ((N + 1) − Σ(tⱼ³ − tⱼ) / (N(N − 1))),
//!   without continuity correction.
//! - The interval is the (1 − α) acceptance region for U, mapped from the
//!   normal quantiles and clipped to the attainable range [0, n₁n₂].
//!
//! Invariants & assumptions
//! ------------------------
//! - Both samples are non-empty and finite.
//! - If every observation is tied, σ²_U = 0 and the input is degenerate.

use tracing::debug;

use crate::{
    common::{
        errors::StatResult,
        sample::{label_or, Sample},
        tail::TailType,
        test_result::TestResult,
        validation::{validate_alpha, validate_sample},
    },
    distribution::{acceptance_region, p_value, Reference},
    statistical_tests::{
        hypotheses::{conclude, Hypotheses},
        validation::validate_spread,
    },
};

/// Rank-sum decomposition for two samples.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankSums {
    pub n1: usize,
    pub n2: usize,
    pub rank_sum1: f64,
    pub u1: f64,
    /// Σ (tⱼ³ − tⱼ) over groups of tied values.
    pub tie_term: f64,
}

impl RankSums {
    pub fn mean_u(&self) -> f64 {
        (self.n1 * self.n2) as f64 / 2.0
    }

    pub fn variance_u(&self) -> f64 {
        let (n1, n2) = (self.n1 as f64, self.n2 as f64);
        let n = n1 + n2;
        n1 * n2 / 12.0 * ((n + 1.0) - self.tie_term / (n * (n - 1.0)))
    }
}

/// Average ranks and U₁ for `x` against `y`. Both must be finite.
pub fn rank_sums(x: &[f64], y: &[f64]) -> RankSums {
    let mut combined: Vec<(f64, bool)> =
        x.iter().map(|&v| (v, true)).chain(y.iter().map(|&v| (v, false))).collect();
    combined.sort_by(|a, b| a.0.total_cmp(&b.0));

    let mut rank_sum1 = 0.0;
    let mut tie_term = 0.0;
    let mut start = 0;
    while start < combined.len() {
        let mut end = start;
        while end + 1 < combined.len() && combined[end + 1].0 == combined[start].0 {
            end += 1;
        }
        let avg_rank = (start + end + 2) as f64 / 2.0;
        let in_first = combined[start..=end].iter().filter(|(_, first)| *first).count();
        rank_sum1 += avg_rank * in_first as f64;
        let t = (end - start + 1) as f64;
        tie_term += t.powi(3) - t;
        start = end + 1;
    }

    let n1 = x.len();
    RankSums {
        n1,
        n2: y.len(),
        rank_sum1,
        u1: rank_sum1 - (n1 * (n1 + 1)) as f64 / 2.0,
        tie_term,
    }
}

/// Mann–Whitney U test.
///
/// Parameters
/// ----------
/// - `data1`, `data2`: independent samples, each non-empty and finite.
/// - `tail`: `Right` if sample 1 is expected to be larger, `Left` if smaller.
/// - `alpha`: significance level in (0, 1).
///
/// Errors
/// ------
/// - `StatError::InvalidAlpha`.
/// - `StatError::InsufficientData` for an empty sample.
/// - `StatError::NonFiniteData` for NaN / ±∞.
/// - `StatError::DegenerateInput` when all observations are tied.
///
/// Examples
/// --------
/// ```rust
/// use rust_hypotests::common::TailType;
/// use rust_hypotests::statistical_tests::mann_whitney::u_test;
///
/// let r = u_test(&[1.0, 2.0, 3.0, 4.0, 5.0], &[3.0, 4.0, 5.0, 6.0, 7.0], TailType::Two, 0.05)
///     .unwrap();
/// assert_eq!(r.test_statistic(), 4.5);
/// ```
pub fn u_test<A: Sample + ?Sized, B: Sample + ?Sized>(
    data1: &A, data2: &B, tail: TailType, alpha: f64,
) -> StatResult<TestResult> {
    validate_alpha(alpha)?;
    let (x, y) = (data1.observations(), data2.observations());
    validate_sample(&label_or(data1, "sample 1"), &x, 1)?;
    validate_sample(&label_or(data2, "sample 2"), &y, 1)?;

    let sums = rank_sums(&x, &y);
    let variance = sums.variance_u();
    validate_spread(variance, "all observations are tied")?;
    let (mean, sd) = (sums.mean_u(), variance.sqrt());

    let z = (sums.u1 - mean) / sd;
    let p = p_value(z, &Reference::StandardNormal, tail)?;
    let (z_lo, z_hi) = acceptance_region(1.0 - alpha, &Reference::StandardNormal, tail)?;
    let u_max = (sums.n1 * sums.n2) as f64;
    // Both bounds lie in [0, n₁n₂] with lower <= upper, even when the
    // region falls entirely outside the attainable range of U.
    let lower = (mean + z_lo * sd).clamp(0.0, u_max);
    let upper = (mean + z_hi * sd).clamp(lower, u_max);

    debug!(n1 = sums.n1, n2 = sums.n2, u1 = sums.u1, z, p_value = p, %tail, "Mann-Whitney U test");
    conclude(sums.u1, p, (lower, upper), hypotheses(tail), alpha)
}

fn hypotheses(tail: TailType) -> Hypotheses {
    let null = "H0: The distributions of both groups are equal.";
    match tail {
        TailType::Two => Hypotheses::new(null, "Ha: The distributions of both groups are not equal."),
        TailType::Right => {
            Hypotheses::new(null, "Ha: Values in group 1 tend to be larger than in group 2.")
        }
        TailType::Left => {
            Hypotheses::new(null, "Ha: Values in group 1 tend to be smaller than in group 2.")
        }
    }
}
