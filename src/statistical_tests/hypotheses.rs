//! Hypothesis text and the final reject / fail-to-reject step.
//!
//! Every family renders H0 / Ha the same way for a given tail:
//!
//! | tail  | H0            | Ha            |
//! |-------|---------------|---------------|
//! | Two   | `lhs = rhs`   | `lhs ≠ rhs`   |
//! | Left  | `lhs >= rhs`  | `lhs < rhs`   |
//! | Right | `lhs <= rhs`  | `lhs > rhs`   |
use std::fmt::Display;

use crate::common::{errors::StatResult, tail::TailType, test_result::TestResult};

/// An H0 / Ha pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Hypotheses {
    pub null: String,
    pub alt: String,
}

impl Hypotheses {
    pub fn new(null: impl Into<String>, alt: impl Into<String>) -> Self {
        Hypotheses { null: null.into(), alt: alt.into() }
    }

    /// `lhs` against `rhs` under the tail's direction.
    pub fn compare(lhs: impl Display, rhs: impl Display, tail: TailType) -> Self {
        let (h0, ha) = match tail {
            TailType::Two => ("=", "≠"),
            TailType::Left => (">=", "<"),
            TailType::Right => ("<=", ">"),
        };
        Hypotheses { null: format!("H0: {lhs} {h0} {rhs}"), alt: format!("Ha: {lhs} {ha} {rhs}") }
    }
}

/// Build the result with `reject_null = p_value <= alpha`.
pub(crate) fn conclude(
    statistic: f64, p_value: f64, interval: (f64, f64), hypotheses: Hypotheses, alpha: f64,
) -> StatResult<TestResult> {
    TestResult::new(statistic, p_value, interval, hypotheses.null, hypotheses.alt, p_value <= alpha)
}
