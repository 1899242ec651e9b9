//! Per-call configuration shared by the test families.
use serde::{Deserialize, Serialize};

use crate::common::{errors::StatResult, tail::TailType, validation::validate_alpha};

/// Significance level used when the caller does not supply one.
pub const DEFAULT_ALPHA: f64 = 0.05;

/// How two-sample procedures combine the sample variances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum VarianceAssumption {
    /// Common variance (pooled t-test, pooled proportion SE).
    Pooled,
    /// Separate variances (Welch t-test, unpooled proportion SE).
    #[default]
    Unpooled,
}

/// TestOptions — significance level, tail and variance assumption.
///
/// `Default` is `alpha = 0.05`, two-tailed, unpooled. Deserialized values
/// are not validated until [`TestOptions::validate`] (or a procedure) runs.
///
/// Examples
/// --------
/// ```rust
/// use rust_hypotests::common::{TailType, TestOptions};
///
/// let opts = TestOptions::new(0.01).unwrap().with_tail(TailType::Right);
/// assert_eq!(opts.alpha, 0.01);
/// assert!(TestOptions::new(1.5).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TestOptions {
    pub alpha: f64,
    pub tail: TailType,
    pub variance: VarianceAssumption,
}

impl Default for TestOptions {
    fn default() -> Self {
        TestOptions {
            alpha: DEFAULT_ALPHA,
            tail: TailType::Two,
            variance: VarianceAssumption::Unpooled,
        }
    }
}

impl TestOptions {
    pub fn new(alpha: f64) -> StatResult<Self> {
        validate_alpha(alpha)?;
        Ok(TestOptions { alpha, ..Self::default() })
    }

    pub fn with_tail(mut self, tail: TailType) -> Self {
        self.tail = tail;
        self
    }

    pub fn with_variance(mut self, variance: VarianceAssumption) -> Self {
        self.variance = variance;
        self
    }

    pub fn validate(&self) -> StatResult<()> {
        validate_alpha(self.alpha)
    }
}
