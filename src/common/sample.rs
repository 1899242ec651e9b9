//! Host-agnostic read-only view over a numeric sample.
//!
//! Procedures accept anything implementing [`Sample`]: plain slices and
//! vectors, fixed-size arrays, `ndarray` one-dimensional arrays and views,
//! and [`Labeled`] wrappers that attach a name used only in diagnostics.
//! Contiguous inputs are borrowed; non-contiguous `ndarray` views are copied
//! once into an owned buffer.
use std::borrow::Cow;

use ndarray::{Array1, ArrayView1};

/// An ordered, finite-length sequence of observations.
pub trait Sample {
    /// The observations in order.
    fn observations(&self) -> Cow<'_, [f64]>;

    /// Optional name used in error messages.
    fn label(&self) -> Option<&str> {
        None
    }
}

impl Sample for [f64] {
    fn observations(&self) -> Cow<'_, [f64]> {
        Cow::Borrowed(self)
    }
}

impl Sample for Vec<f64> {
    fn observations(&self) -> Cow<'_, [f64]> {
        Cow::Borrowed(self.as_slice())
    }
}

impl<const N: usize> Sample for [f64; N] {
    fn observations(&self) -> Cow<'_, [f64]> {
        Cow::Borrowed(self.as_slice())
    }
}

impl Sample for Array1<f64> {
    fn observations(&self) -> Cow<'_, [f64]> {
        match self.as_slice() {
            Some(s) => Cow::Borrowed(s),
            None => Cow::Owned(self.to_vec()),
        }
    }
}

impl Sample for ArrayView1<'_, f64> {
    fn observations(&self) -> Cow<'_, [f64]> {
        match self.as_slice() {
            Some(s) => Cow::Borrowed(s),
            None => Cow::Owned(self.to_vec()),
        }
    }
}

impl<T: Sample + ?Sized> Sample for &T {
    fn observations(&self) -> Cow<'_, [f64]> {
        (**self).observations()
    }

    fn label(&self) -> Option<&str> {
        (**self).label()
    }
}

/// A sample with a caller-supplied name.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Labeled<'a> {
    pub label: &'a str,
    pub values: &'a [f64],
}

impl<'a> Labeled<'a> {
    pub fn new(label: &'a str, values: &'a [f64]) -> Self {
        Labeled { label, values }
    }
}

impl Sample for Labeled<'_> {
    fn observations(&self) -> Cow<'_, [f64]> {
        Cow::Borrowed(self.values)
    }

    fn label(&self) -> Option<&str> {
        Some(self.label)
    }
}

/// Label for diagnostics: the sample's own name, else `fallback`.
pub(crate) fn label_or<S: Sample + ?Sized>(sample: &S, fallback: &str) -> String {
    sample.label().map_or_else(|| fallback.to_string(), str::to_string)
}
