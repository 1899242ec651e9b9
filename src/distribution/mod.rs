//! Distribution adapter: reference distributions and tail arithmetic.
//!
//! [`Reference`] names the null distribution of a statistic with validated
//! shape parameters; [`p_value`], [`critical_value`], [`confidence_interval`]
//! and [`acceptance_region`] turn a statistic or a confidence level into the
//! numbers a `TestResult` reports. Everything here is pure and reentrant.
pub mod adapter;
pub mod reference;

pub use self::adapter::{
    acceptance_region, confidence_interval, critical_value, p_value, CriticalValue,
};
pub use self::reference::Reference;
