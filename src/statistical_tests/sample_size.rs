//! Required sample size per group for a target power.
//!
//! - z: n = ((z₁₋ₐ + z_power) σ / δ)², with a = α/2 for two tails.
//! - t: the z formula with t quantiles at df = n − 1, iterated from the z
//!   answer until n stops changing.
//! - two proportions:
//!   n = (z₁₋ₐ √(2p̄(1 − p̄)) + z_power √(p₁(1 − p₁) + p₂(1 − p₂)))² / (p₁ − p₂)²,
//!   p̄ = (p₁ + p₂)/2.
//!
//! Every result is rounded up to the next whole observation.
use tracing::debug;

use crate::{
    common::{
        errors::{StatError, StatResult},
        tail::TailType,
        validation::{validate_alpha, validate_open_unit, validate_positive},
    },
    distribution::Reference,
};

const MAX_T_ITERATIONS: usize = 100;

/// Sample size for a z-test detecting `effect_size` with known `std_dev`.
///
/// Errors
/// ------
/// - `StatError::InvalidAlpha`; `StatError::InvalidParameter` when `power`
///   is outside (0, 1) or `effect_size` / `std_dev` is not positive.
///
/// Examples
/// --------
/// ```rust
/// use rust_hypotests::common::TailType;
/// use rust_hypotests::statistical_tests::sample_size::z_sample_size;
///
/// assert_eq!(z_sample_size(0.3, 0.05, 0.8, 1.0, TailType::Two).unwrap(), 88);
/// ```
pub fn z_sample_size(
    effect_size: f64, alpha: f64, power: f64, std_dev: f64, tail: TailType,
) -> StatResult<u64> {
    validate_inputs(alpha, power)?;
    validate_positive("effect_size", effect_size)?;
    validate_positive("std_dev", std_dev)?;

    let z = Reference::StandardNormal;
    let n = raw_size(&z, effect_size, alpha, power, std_dev, tail)?;
    let size = ceil_to_count(n)?;
    debug!(effect_size, alpha, power, std_dev, %tail, n = size, "z-test sample size");
    Ok(size)
}

/// Sample size for a one-sample t-test; refines the z answer with t
/// quantiles at df = n − 1.
///
/// Errors
/// ------
/// - As [`z_sample_size`].
pub fn t_sample_size(
    effect_size: f64, alpha: f64, power: f64, std_dev: f64, tail: TailType,
) -> StatResult<u64> {
    let mut n = z_sample_size(effect_size, alpha, power, std_dev, tail)?.max(2);
    for _ in 0..MAX_T_ITERATIONS {
        let t = Reference::students_t((n - 1) as f64)?;
        let next = ceil_to_count(raw_size(&t, effect_size, alpha, power, std_dev, tail)?)?.max(2);
        if next == n {
            break;
        }
        n = next;
    }
    debug!(effect_size, alpha, power, std_dev, %tail, n, "t-test sample size");
    Ok(n)
}

/// Per-group sample size to distinguish proportions `p1` and `p2`.
///
/// Errors
/// ------
/// - `StatError::InvalidParameter` when `p1`, `p2` or `power` lie outside
///   (0, 1) or `p1 == p2`.
///
/// Examples
/// --------
/// ```rust
/// use rust_hypotests::common::TailType;
/// use rust_hypotests::statistical_tests::sample_size::prop_sample_size;
///
/// assert_eq!(prop_sample_size(0.4, 0.6, 0.05, 0.8, TailType::Two).unwrap(), 97);
/// ```
pub fn prop_sample_size(
    p1: f64, p2: f64, alpha: f64, power: f64, tail: TailType,
) -> StatResult<u64> {
    validate_inputs(alpha, power)?;
    validate_open_unit("p1", p1)?;
    validate_open_unit("p2", p2)?;
    if p1 == p2 {
        return Err(StatError::InvalidParameter {
            name: "p2",
            value: p2,
            reason: "Must differ from p1.",
        });
    }

    let z = Reference::StandardNormal;
    let z_alpha = z.quantile(1.0 - tail_alpha(alpha, tail))?;
    let z_beta = z.quantile(power)?;
    let p_bar = (p1 + p2) / 2.0;
    let n = (z_alpha * (2.0 * p_bar * (1.0 - p_bar)).sqrt()
        + z_beta * (p1 * (1.0 - p1) + p2 * (1.0 - p2)).sqrt())
    .powi(2)
        / (p1 - p2).powi(2);

    let size = ceil_to_count(n)?;
    debug!(p1, p2, alpha, power, %tail, n = size, "two-proportion sample size");
    Ok(size)
}

fn validate_inputs(alpha: f64, power: f64) -> StatResult<()> {
    validate_alpha(alpha)?;
    validate_open_unit("power", power)
}

fn tail_alpha(alpha: f64, tail: TailType) -> f64 {
    match tail {
        TailType::Two => alpha / 2.0,
        TailType::Left | TailType::Right => alpha,
    }
}

fn raw_size(
    reference: &Reference, effect_size: f64, alpha: f64, power: f64, std_dev: f64,
    tail: TailType,
) -> StatResult<f64> {
    let q_alpha = reference.quantile(1.0 - tail_alpha(alpha, tail))?;
    let q_beta = reference.quantile(power)?;
    Ok(((q_alpha + q_beta) * std_dev / effect_size).powi(2))
}

fn ceil_to_count(n: f64) -> StatResult<u64> {
    if !n.is_finite() || n > u64::MAX as f64 {
        return Err(StatError::InvalidParameter {
            name: "sample size",
            value: n,
            reason: "Required sample size is not representable.",
        });
    }
    Ok((n.ceil() as u64).max(1))
}
