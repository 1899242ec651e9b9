//! statistical_tests — classical hypothesis-test families.
//!
//! Purpose
//! -------
//! Collect the test procedures of this crate. Each family takes samples (or
//! counts / summaries) plus a tail and a significance level, and returns an
//! immutable [`TestResult`](crate::common::TestResult).
//!
//! Key behaviors
//! -------------
//! - [`anova`]: one-way ANOVA F-test across k ≥ 2 groups.
//! - [`t_test`]: one-sample, paired and independent (pooled or Welch)
//!   t-tests.
//! - [`z_test`]: the same three designs with known population σ.
//! - [`proportion`]: one- and two-sample large-sample proportion z-tests.
//! - [`chi_square`]: goodness of fit, independence and single-variance χ²
//!   tests.
//! - [`mann_whitney`]: the rank-based U test for two independent samples.
//! - [`sample_size`]: required observations per group for a target power.
//!
//! Invariants & assumptions
//! ------------------------
//! - Procedures validate `alpha` first, then sample shape and finiteness,
//!   then spread; the first failing guard is the error returned.
//! - `reject_null` is always `p_value <= alpha`.
//! - Procedures are pure functions of their arguments: no shared state, no
//!   randomness, and no partially-built results on error.
//!
//! Conventions
//! -----------
//! - Location tests (t, z, proportion) report a confidence interval for the
//!   estimated quantity that follows the tail: two-sided, or one-sided with
//!   an infinite bound.
//! - Tests without a natural location estimate (ANOVA, χ² goodness of fit
//!   and independence, Mann–Whitney) report the (1 − α) acceptance region
//!   of their statistic instead.
//! - Hypothesis text uses `µ`, `p` and `σ²` with `=`, `≠`, `<`, `>`, `<=`
//!   and `>=`, e.g. `"H0: µ = 5"` / `"Ha: µ ≠ 5"`.
//!
//! Downstream usage
//! ----------------
//! - Typical Rust code imports the main surface as:
//!
//!   ```rust
//!   use rust_hypotests::statistical_tests::prelude::*;
//!
//!   let r = t_test::one_sample(&[2.0, 3.0, 5.0, 7.0, 11.0], 5.0, TailType::Two, 0.05)?;
//!   let json = to_json(&r)?;
//!   # let _ = json;
//!   # Ok::<(), StatError>(())
//!   ```
//!
//! Testing notes
//! -------------
//! - Each family module carries unit tests pinned to hand-checked reference
//!   values, plus error-branch coverage for every guard it applies.
//! - `tests/integration_hypothesis_pipeline.rs` drives every family through
//!   the mapping / JSON boundary.

pub mod anova;
pub mod chi_square;
pub(crate) mod hypotheses;
pub(crate) mod location;
pub mod mann_whitney;
pub mod proportion;
pub mod sample_size;
pub mod t_test;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::anova::{one_way_anova, AnovaTable};
pub use self::mann_whitney::{u_test, RankSums};
pub use self::sample_size::{prop_sample_size, t_sample_size, z_sample_size};

// ---- Optional convenience prelude for downstream crates -------------------

pub mod prelude {
    pub use super::{anova, chi_square, mann_whitney, proportion, sample_size, t_test, z_test};
    pub use crate::common::{
        from_json, from_mapping, to_json, to_mapping, StatError, StatResult, TailType,
        TestOptions, TestResult, VarianceAssumption,
    };
}
