//! distribution::reference — reference distributions of the test statistics.
//!
//! Purpose
//! -------
//! Name the null distribution of each statistic together with its shape
//! parameters, validate those parameters once at construction, and expose
//! CDF, survival function and quantile evaluation backed by `statrs`.
//!
//! Key behaviors
//! -------------
//! - [`Reference`] is a small `Copy` value; the `statrs` distribution is
//!   rebuilt on every evaluation, so there is no cache and no shared state.
//! - Right-tail probabilities use the distribution's survival function
//!   rather than `1 − cdf`.
//!
//! Invariants & assumptions
//! ------------------------
//! - Degrees of freedom are strictly positive and finite. Non-integer values
//!   are allowed (Welch–Satterthwaite df).
//! - `StandardNormal` and `StudentsT` are symmetric about zero; `FisherSnedecor`
//!   and `ChiSquared` are supported on `[0, ∞)`.

use statrs::distribution::{ChiSquared, ContinuousCDF, FisherSnedecor, Normal, StudentsT};

use crate::common::errors::{StatError, StatResult};

/// Null distribution of a test statistic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Reference {
    /// N(0, 1): z-tests, proportion tests, Mann–Whitney normal approximation.
    StandardNormal,
    /// Student's t with `df` degrees of freedom.
    StudentsT { df: f64 },
    /// F(`df1`, `df2`): one-way ANOVA.
    FisherSnedecor { df1: f64, df2: f64 },
    /// χ²(`df`): goodness of fit, independence, variance.
    ChiSquared { df: f64 },
}

impl Reference {
    /// Student's t reference.
    ///
    /// Errors
    /// ------
    /// - `StatError::InvalidShape` if `df` is not positive and finite.
    pub fn students_t(df: f64) -> StatResult<Self> {
        check_df("df", df)?;
        Ok(Reference::StudentsT { df })
    }

    /// F reference with numerator `df1` and denominator `df2`.
    pub fn fisher_snedecor(df1: f64, df2: f64) -> StatResult<Self> {
        check_df("df1", df1)?;
        check_df("df2", df2)?;
        Ok(Reference::FisherSnedecor { df1, df2 })
    }

    /// χ² reference.
    pub fn chi_squared(df: f64) -> StatResult<Self> {
        check_df("df", df)?;
        Ok(Reference::ChiSquared { df })
    }

    /// Smallest value in the support: −∞ or 0.
    pub fn support_lower(&self) -> f64 {
        match self {
            Reference::StandardNormal | Reference::StudentsT { .. } => f64::NEG_INFINITY,
            Reference::FisherSnedecor { .. } | Reference::ChiSquared { .. } => 0.0,
        }
    }

    pub fn is_symmetric(&self) -> bool {
        matches!(self, Reference::StandardNormal | Reference::StudentsT { .. })
    }

    pub fn cdf(&self, x: f64) -> StatResult<f64> {
        Ok(self.build()?.cdf(x))
    }

    /// Survival function `P(X > x)`.
    pub fn sf(&self, x: f64) -> StatResult<f64> {
        Ok(self.build()?.sf(x))
    }

    /// Quantile function; `p` must lie in `[0, 1]`.
    pub fn quantile(&self, p: f64) -> StatResult<f64> {
        if !(0.0..=1.0).contains(&p) {
            return Err(StatError::InvalidParameter {
                name: "probability",
                value: p,
                reason: "Must lie in [0, 1].",
            });
        }
        Ok(self.build()?.inverse_cdf(p))
    }

    /// Re-validate shape parameters and build the `statrs` distribution.
    ///
    /// Variants can be built directly (they are public), so shape checks
    /// run here too and not only in the named constructors.
    fn build(&self) -> StatResult<Built> {
        match *self {
            Reference::StandardNormal => Normal::new(0.0, 1.0)
                .map(Built::Normal)
                .map_err(|_| StatError::InvalidShape { name: "std_dev", value: 1.0 }),
            Reference::StudentsT { df } => {
                check_df("df", df)?;
                StudentsT::new(0.0, 1.0, df)
                    .map(Built::StudentsT)
                    .map_err(|_| StatError::InvalidShape { name: "df", value: df })
            }
            Reference::FisherSnedecor { df1, df2 } => {
                check_df("df1", df1)?;
                check_df("df2", df2)?;
                FisherSnedecor::new(df1, df2)
                    .map(Built::FisherSnedecor)
                    .map_err(|_| StatError::InvalidShape { name: "df1", value: df1 })
            }
            Reference::ChiSquared { df } => {
                check_df("df", df)?;
                ChiSquared::new(df)
                    .map(Built::ChiSquared)
                    .map_err(|_| StatError::InvalidShape { name: "df", value: df })
            }
        }
    }
}

enum Built {
    Normal(Normal),
    StudentsT(StudentsT),
    FisherSnedecor(FisherSnedecor),
    ChiSquared(ChiSquared),
}

impl Built {
    fn cdf(&self, x: f64) -> f64 {
        match self {
            Built::Normal(d) => d.cdf(x),
            Built::StudentsT(d) => d.cdf(x),
            Built::FisherSnedecor(d) => d.cdf(x),
            Built::ChiSquared(d) => d.cdf(x),
        }
    }

    fn sf(&self, x: f64) -> f64 {
        match self {
            Built::Normal(d) => d.sf(x),
            Built::StudentsT(d) => d.sf(x),
            Built::FisherSnedecor(d) => d.sf(x),
            Built::ChiSquared(d) => d.sf(x),
        }
    }

    fn inverse_cdf(&self, p: f64) -> f64 {
        match self {
            Built::Normal(d) => d.inverse_cdf(p),
            Built::StudentsT(d) => d.inverse_cdf(p),
            Built::FisherSnedecor(d) => bisect_quantile(|x| d.cdf(x), p),
            Built::ChiSquared(d) => bisect_quantile(|x| d.cdf(x), p),
        }
    }
}

/// Quantile of a distribution supported on `[0, ∞)` by bracketing and
/// bisection on its CDF, to near machine precision.
fn bisect_quantile(cdf: impl Fn(f64) -> f64, p: f64) -> f64 {
    if p <= 0.0 {
        return 0.0;
    }
    if p >= 1.0 {
        return f64::INFINITY;
    }
    let mut low = 0.0_f64;
    let mut high = 1.0_f64;
    while cdf(high) < p {
        low = high;
        high *= 2.0;
        if !high.is_finite() {
            return f64::INFINITY;
        }
    }
    for _ in 0..200 {
        let mid = 0.5 * (low + high);
        if mid <= low || mid >= high {
            break;
        }
        if cdf(mid) < p {
            low = mid;
        } else {
            high = mid;
        }
    }
    0.5 * (low + high)
}

fn check_df(name: &'static str, value: f64) -> StatResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(StatError::InvalidShape { name, value })
    }
}
