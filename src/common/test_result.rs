//! common::test_result — immutable outcome of a hypothesis test.
//!
//! Purpose
//! -------
//! Represent the terminal output of every test-family procedure: the
//! statistic, its p-value, a confidence interval, the hypothesis pair as
//! human-readable text, and the reject / fail-to-reject decision.
//!
//! Key behaviors
//! -------------
//! - Fields are private and set once by [`TestResult::new`], which enforces
//!   the value invariants; there are no setters.
//! - Equality is structural and field-wise (derived `PartialEq`), including
//!   exact tuple-element equality on the interval and exact string equality
//!   on the hypothesis text.
//! - The serialization boundary lives in `common::serialization`; the
//!   derived-looking `Serialize`/`Deserialize` impls route through it.
//!
//! Invariants
//! ----------
//! - `test_statistic` is finite.
//! - `p_value` lies in [0, 1].
//! - The interval holds no NaN, `lower <= upper`, and only `lower` may be
//!   −∞ and only `upper` may be +∞.
//!
//! Notes
//! -----
//! - A `TestResult` owns its strings and holds no reference back to the
//!   samples that produced it, so it is `Send + Sync` and freely clonable.

use crate::common::errors::{StatError, StatResult};

/// TestResult — outcome of a single hypothesis test.
///
/// Fields
/// ------
/// - `test_statistic`: computed statistic (F, t, z, χ², U, …).
/// - `p_value`: probability under H0 of a statistic at least as extreme.
/// - `confidence_interval`: `(lower, upper)` at confidence `1 − alpha`.
/// - `null_hypothesis`, `alt_hypothesis`: H0 / H1 text.
/// - `reject_null`: decision at the procedure's significance level.
///
/// Examples
/// --------
/// ```rust
/// use rust_hypotests::common::TestResult;
///
/// let r = TestResult::new(2.5, 0.05, (1.0, 3.0), "No effect", "There is an effect", true)
///     .unwrap();
/// assert_eq!(r.test_statistic(), 2.5);
/// assert_eq!(r.confidence_interval(), (1.0, 3.0));
/// assert!(r.reject_null());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TestResult {
    test_statistic: f64,
    p_value: f64,
    confidence_interval: (f64, f64),
    null_hypothesis: String,
    alt_hypothesis: String,
    reject_null: bool,
}

impl TestResult {
    /// Build a result, checking every field invariant.
    ///
    /// Errors
    /// ------
    /// - `StatError::InvalidParameter` naming the offending field when the
    ///   statistic is non-finite, the p-value is outside [0, 1], or the
    ///   interval is NaN, inverted, or infinite on the wrong side.
    pub fn new(
        test_statistic: f64, p_value: f64, confidence_interval: (f64, f64),
        null_hypothesis: impl Into<String>, alt_hypothesis: impl Into<String>,
        reject_null: bool,
    ) -> StatResult<Self> {
        if !test_statistic.is_finite() {
            return Err(StatError::InvalidParameter {
                name: "test_statistic",
                value: test_statistic,
                reason: "Must be a finite number.",
            });
        }
        if !(0.0..=1.0).contains(&p_value) {
            return Err(StatError::InvalidParameter {
                name: "p_value",
                value: p_value,
                reason: "Must lie in [0, 1].",
            });
        }
        validate_interval(confidence_interval)?;

        Ok(TestResult {
            test_statistic,
            p_value,
            confidence_interval,
            null_hypothesis: null_hypothesis.into(),
            alt_hypothesis: alt_hypothesis.into(),
            reject_null,
        })
    }

    pub fn test_statistic(&self) -> f64 {
        self.test_statistic
    }

    pub fn p_value(&self) -> f64 {
        self.p_value
    }

    pub fn confidence_interval(&self) -> (f64, f64) {
        self.confidence_interval
    }

    pub fn null_hypothesis(&self) -> &str {
        &self.null_hypothesis
    }

    pub fn alt_hypothesis(&self) -> &str {
        &self.alt_hypothesis
    }

    pub fn reject_null(&self) -> bool {
        self.reject_null
    }
}

fn validate_interval((lower, upper): (f64, f64)) -> StatResult<()> {
    if lower.is_nan() || lower == f64::INFINITY {
        return Err(StatError::InvalidParameter {
            name: "confidence_interval.lower",
            value: lower,
            reason: "Must be finite or negative infinity.",
        });
    }
    if upper.is_nan() || upper == f64::NEG_INFINITY {
        return Err(StatError::InvalidParameter {
            name: "confidence_interval.upper",
            value: upper,
            reason: "Must be finite or positive infinity.",
        });
    }
    if lower > upper {
        return Err(StatError::InvalidParameter {
            name: "confidence_interval.lower",
            value: lower,
            reason: "Must not exceed the upper bound.",
        });
    }
    Ok(())
}
