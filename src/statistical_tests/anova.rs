//! statistical_tests::anova — one-way analysis of variance.
//!
//! Purpose
//! -------
//! Test whether `k ≥ 2` independent groups share a common mean by comparing
//! between-group and within-group variability with an F statistic.
//!
//! Key behaviors
//! -------------
//! - Sums of squares:
//!     SSB = Σᵢ nᵢ (x̄ᵢ − x̄)²,  SSW = Σᵢ Σⱼ (xᵢⱼ − x̄ᵢ)²,
//!   with df_between = k − 1 and df_within = N − k.
//! - F = (SSB / df_between) / (SSW / df_within), referred to F(k − 1, N − k)
//!   on the right tail only.
//! - The reported interval is the (1 − α) acceptance region of F under H0,
//!   `[0, F₁₋α(k − 1, N − k)]`, so `reject_null` holds exactly when F lies
//!   above it (up to floating-point ties at the boundary).
//!
//! Invariants & assumptions
//! ------------------------
//! - Every group has at least one finite observation and N > k.
//! - Pooled within-group variance must be positive; identical values inside
//!   every group make F undefined and are rejected as degenerate.
//! - Group labels only feed diagnostics.
//!
//! Downstream usage
//! ----------------
//! - [`one_way_anova`] for raw groups in any [`Sample`] representation,
//!   [`one_way_anova_from_summaries`] when only (n, mean, variance) per group
//!   are known, and [`AnovaTable`] for the intermediate decomposition.
//!
//! Testing notes
//! -------------
//! - Unit tests pin F and p for hand-computed data, cover every error branch,
//!   and check F / p monotonicity under growing separation with proptest.

use tracing::debug;

use crate::{
    common::{
        descriptive::SampleSummary,
        errors::{StatError, StatResult},
        sample::{label_or, Sample},
        tail::TailType,
        test_result::TestResult,
        validation::validate_alpha,
    },
    distribution::{acceptance_region, p_value, Reference},
    statistical_tests::{
        hypotheses::{conclude, Hypotheses},
        validation::{validate_group_count, validate_spread},
    },
};

/// AnovaTable — the one-way ANOVA decomposition.
///
/// Fields
/// ------
/// - `k`, `n_total`: number of groups and total observations.
/// - `ss_between`, `ss_within`: sums of squares.
/// - `df_between`, `df_within`: `k − 1` and `N − k`.
/// - `ms_between`, `ms_within`: mean squares.
/// - `f_statistic`: `ms_between / ms_within`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnovaTable {
    pub k: usize,
    pub n_total: usize,
    pub ss_between: f64,
    pub ss_within: f64,
    pub df_between: f64,
    pub df_within: f64,
    pub ms_between: f64,
    pub ms_within: f64,
    pub f_statistic: f64,
}

impl AnovaTable {
    /// Build the decomposition from per-group summaries.
    ///
    /// Errors
    /// ------
    /// - `StatError::InsufficientGroups` if fewer than 2 groups.
    /// - `StatError::InsufficientData` if a group is empty or N ≤ k (no
    ///   within-group df).
    /// - `StatError::InvalidParameter` if a group has a non-finite mean or a
    ///   negative M2.
    /// - `StatError::DegenerateInput` if the within-group mean square is 0.
    pub fn from_summaries(groups: &[SampleSummary]) -> StatResult<Self> {
        validate_group_count(groups.len(), 2)?;
        for (i, group) in groups.iter().enumerate() {
            group.validate(&format!("group {}", i + 1))?;
        }
        let k = groups.len();
        let n_total: usize = groups.iter().map(|g| g.n).sum();
        if n_total <= k {
            return Err(StatError::InsufficientData {
                sample: "all groups combined".to_string(),
                required: k + 1,
                found: n_total,
            });
        }

        let grand_mean =
            groups.iter().map(|g| g.n as f64 * g.mean).sum::<f64>() / n_total as f64;
        let ss_between =
            groups.iter().map(|g| g.n as f64 * (g.mean - grand_mean).powi(2)).sum::<f64>();
        let ss_within = groups.iter().map(|g| g.m2).sum::<f64>();

        let df_between = (k - 1) as f64;
        let df_within = (n_total - k) as f64;
        let ms_between = ss_between / df_between;
        let ms_within = ss_within / df_within;
        validate_spread(ms_within, "within-group variance is zero")?;

        Ok(AnovaTable {
            k,
            n_total,
            ss_between,
            ss_within,
            df_between,
            df_within,
            ms_between,
            ms_within,
            f_statistic: ms_between / ms_within,
        })
    }

    /// Build the decomposition from raw groups.
    ///
    /// Errors
    /// ------
    /// - As [`AnovaTable::from_summaries`], plus `StatError::InsufficientData`
    ///   for an empty group and `StatError::NonFiniteData` for NaN / ±∞.
    pub fn from_groups<G: Sample>(groups: &[G]) -> StatResult<Self> {
        validate_group_count(groups.len(), 2)?;
        let summaries = summarize(groups)?;
        Self::from_summaries(&summaries)
    }

    pub fn reference(&self) -> StatResult<Reference> {
        Reference::fisher_snedecor(self.df_between, self.df_within)
    }
}

/// One-way ANOVA on raw groups.
///
/// Parameters
/// ----------
/// - `groups`: `&[G]` with `G: Sample`
///   Two or more non-empty groups of finite observations.
/// - `alpha`: `f64`
///   Significance level in (0, 1).
///
/// Returns
/// -------
/// `StatResult<TestResult>` with F, its right-tail p-value, the acceptance
/// region `[0, F₁₋α]`, and `reject_null = p ≤ alpha`.
///
/// Errors
/// ------
/// - `StatError::InvalidAlpha` if alpha is outside (0, 1).
/// - `StatError::InsufficientGroups` for fewer than 2 groups.
/// - `StatError::InsufficientData` for an empty group or N ≤ k.
/// - `StatError::NonFiniteData` for NaN / ±∞ values.
/// - `StatError::DegenerateInput` when every group is constant.
///
/// Examples
/// --------
/// ```rust
/// use rust_hypotests::statistical_tests::anova::one_way_anova;
///
/// let groups = [
///     vec![2.0, 3.0, 3.0, 5.0, 6.0],
///     vec![3.0, 4.0, 4.0, 6.0, 8.0],
///     vec![5.0, 6.0, 7.0, 8.0, 9.0],
/// ];
/// let r = one_way_anova(&groups, 0.05).unwrap();
/// assert!(r.test_statistic() > 0.0);
/// assert_eq!(r.reject_null(), r.p_value() <= 0.05);
/// ```
pub fn one_way_anova<G: Sample>(groups: &[G], alpha: f64) -> StatResult<TestResult> {
    validate_alpha(alpha)?;
    let table = AnovaTable::from_groups(groups)?;
    finish(&table, alpha)
}

/// One-way ANOVA from per-group summaries.
///
/// Errors
/// ------
/// - As [`one_way_anova`], minus the raw-data checks.
pub fn one_way_anova_from_summaries(
    groups: &[SampleSummary], alpha: f64,
) -> StatResult<TestResult> {
    validate_alpha(alpha)?;
    let table = AnovaTable::from_summaries(groups)?;
    finish(&table, alpha)
}

fn summarize<G: Sample>(groups: &[G]) -> StatResult<Vec<SampleSummary>> {
    groups
        .iter()
        .enumerate()
        .map(|(i, g)| {
            let label = label_or(g, &format!("group {}", i + 1));
            SampleSummary::from_slice(&label, &g.observations())
        })
        .collect()
}

fn finish(table: &AnovaTable, alpha: f64) -> StatResult<TestResult> {
    let reference = table.reference()?;
    let p = p_value(table.f_statistic, &reference, TailType::Right)?;
    let interval = acceptance_region(1.0 - alpha, &reference, TailType::Right)?;

    debug!(
        k = table.k,
        n_total = table.n_total,
        df_between = table.df_between,
        df_within = table.df_within,
        f_statistic = table.f_statistic,
        p_value = p,
        "one-way ANOVA"
    );

    conclude(table.f_statistic, p, interval, hypotheses(table.k), alpha)
}

fn hypotheses(k: usize) -> Hypotheses {
    let means = (1..=k).map(|i| format!("µ{i}")).collect::<Vec<_>>().join(" = ");
    Hypotheses::new(
        format!("H0: all group means are equal ({means})"),
        "Ha: at least one group mean differs",
    )
}
