//! distribution::adapter — statistic → p-value and confidence → critical values.
//!
//! Purpose
//! -------
//! The single place where a tail convention meets a reference distribution.
//! Test families derive a statistic and its shape parameters, then call into
//! this module for the p-value, the critical values, and the interval they
//! report.
//!
//! Key behaviors
//! -------------
//! - [`p_value`]:
//!   - Left  → `cdf(t)`
//!   - Right → `sf(t)`
//!   - Two   → `min(1, 2 · min(cdf(t), sf(t)))`
//! - [`critical_value`] maps a confidence level `c = 1 − α` to the quantiles
//!   that bound the tail(s): `q(α)` for Left, `q(1 − α)` for Right, and
//!   `(q(α/2), q(1 − α/2))` for Two.
//! - [`confidence_interval`] builds a location interval around an estimate;
//!   [`acceptance_region`] builds the `(1 − α)` region of the statistic itself.
//!
//! Invariants & assumptions
//! ------------------------
//! - Every function is pure: same inputs, bit-identical outputs.
//! - Results of [`p_value`] are clamped into `[0, 1]`.
//! - Interval bounds are infinite only as lower = −∞ or upper = +∞.
//!
//! Testing notes
//! -------------
//! - Unit tests pin tail arithmetic against hand-computed normal and F
//!   values and check the symmetric-interval identity.

use crate::{
    common::{
        errors::{StatError, StatResult},
        tail::TailType,
        validation::validate_confidence,
    },
    distribution::reference::Reference,
};

/// Critical value(s) for a tail at a given confidence level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CriticalValue {
    /// `q(α)`: reject below.
    Lower(f64),
    /// `q(1 − α)`: reject above.
    Upper(f64),
    /// `(q(α/2), q(1 − α/2))`: reject outside.
    TwoSided { lower: f64, upper: f64 },
}

/// p-value of `statistic` under `reference` for the given tail.
///
/// Parameters
/// ----------
/// - `statistic`: observed test statistic. Must be finite.
/// - `reference`: null distribution with validated shape parameters.
/// - `tail`: which side(s) count as more extreme.
///
/// Returns
/// -------
/// `StatResult<f64>` in `[0, 1]`.
///
/// Errors
/// ------
/// - `StatError::InvalidStatistic` if `statistic` is NaN or ±∞.
/// - `StatError::InvalidShape` if the reference carries bad shape parameters.
///
/// Examples
/// --------
/// ```rust
/// use rust_hypotests::common::TailType;
/// use rust_hypotests::distribution::{p_value, Reference};
///
/// let p = p_value(0.0, &Reference::StandardNormal, TailType::Two).unwrap();
/// assert_eq!(p, 1.0);
/// ```
pub fn p_value(statistic: f64, reference: &Reference, tail: TailType) -> StatResult<f64> {
    if !statistic.is_finite() {
        return Err(StatError::InvalidStatistic(statistic));
    }
    let p = match tail {
        TailType::Left => reference.cdf(statistic)?,
        TailType::Right => reference.sf(statistic)?,
        TailType::Two => {
            let lower = reference.cdf(statistic)?;
            let upper = reference.sf(statistic)?;
            (2.0 * lower.min(upper)).min(1.0)
        }
    };
    Ok(p.clamp(0.0, 1.0))
}

/// Critical value(s) at confidence level `confidence` (`= 1 − α`).
///
/// Errors
/// ------
/// - `StatError::InvalidConfidence` if `confidence` is outside (0, 1).
/// - `StatError::InvalidShape` if the reference carries bad shape parameters.
pub fn critical_value(
    confidence: f64, reference: &Reference, tail: TailType,
) -> StatResult<CriticalValue> {
    validate_confidence(confidence)?;
    let alpha = 1.0 - confidence;
    Ok(match tail {
        TailType::Left => CriticalValue::Lower(reference.quantile(alpha)?),
        TailType::Right => CriticalValue::Upper(reference.quantile(confidence)?),
        TailType::Two => CriticalValue::TwoSided {
            lower: reference.quantile(alpha / 2.0)?,
            upper: reference.quantile(1.0 - alpha / 2.0)?,
        },
    })
}

/// Location interval `estimate ± margin` at confidence level `confidence`.
///
/// - Two   → `estimate ∓ q(1 − α/2) · se`
/// - Left  → `(−∞, estimate + q(1 − α) · se)`
/// - Right → `(estimate − q(1 − α) · se, +∞)`
///
/// Notes
/// -----
/// - Intended for references symmetric about zero (standard normal, t);
///   the upper quantile is used on both sides.
///
/// Errors
/// ------
/// - `StatError::InvalidParameter` if `estimate` is non-finite or
///   `std_error` is negative or non-finite.
/// - `StatError::InvalidConfidence` for a confidence level outside (0, 1).
pub fn confidence_interval(
    estimate: f64, std_error: f64, confidence: f64, reference: &Reference, tail: TailType,
) -> StatResult<(f64, f64)> {
    if !estimate.is_finite() {
        return Err(StatError::InvalidParameter {
            name: "estimate",
            value: estimate,
            reason: "Must be a finite number.",
        });
    }
    if !(std_error.is_finite() && std_error >= 0.0) {
        return Err(StatError::InvalidParameter {
            name: "std_error",
            value: std_error,
            reason: "Must be non-negative and finite.",
        });
    }
    validate_confidence(confidence)?;
    let alpha = 1.0 - confidence;

    Ok(match tail {
        TailType::Two => {
            let margin = reference.quantile(1.0 - alpha / 2.0)? * std_error;
            (estimate - margin, estimate + margin)
        }
        TailType::Left => (f64::NEG_INFINITY, estimate + reference.quantile(confidence)? * std_error),
        TailType::Right => (estimate - reference.quantile(confidence)? * std_error, f64::INFINITY),
    })
}

/// `(1 − α)` acceptance region of the statistic under the null.
///
/// - Right → `(support_lower, q(1 − α))`; `[0, q(1 − α)]` for F and χ².
/// - Left  → `(q(α), +∞)`
/// - Two   → `(q(α/2), q(1 − α/2))`
///
/// A statistic outside the region has p ≤ α, up to floating-point ties.
pub fn acceptance_region(
    confidence: f64, reference: &Reference, tail: TailType,
) -> StatResult<(f64, f64)> {
    Ok(match critical_value(confidence, reference, tail)? {
        CriticalValue::Upper(q) => (reference.support_lower(), q),
        CriticalValue::Lower(q) => (q, f64::INFINITY),
        CriticalValue::TwoSided { lower, upper } => (lower, upper),
    })
}
