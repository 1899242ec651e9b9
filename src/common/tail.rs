//! Tail conventions for p-values and confidence intervals.
//!
//! - [`TailType::Left`]: reject when the statistic is unusually small.
//! - [`TailType::Right`]: reject when the statistic is unusually large.
//! - [`TailType::Two`]: reject when the statistic is extreme in either direction.
//!
//! The set is closed. Parsing (`FromStr`) and integer conversion
//! (`TryFrom<u8>`) reject anything outside it with
//! [`StatError::InvalidTail`].
use std::{fmt, str::FromStr};

#[cfg(feature = "python-bindings")]
use pyo3::prelude::*;
use serde::{Deserialize, Serialize};

use crate::common::errors::StatError;

/// Which side(s) of the reference distribution count as "more extreme".
#[cfg_attr(feature = "python-bindings", pyclass(eq, eq_int, module = "rust_hypotests.common"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TailType {
    Left,
    Right,
    Two,
}

impl TailType {
    /// Canonical variant name, as used in serialized configuration.
    pub fn as_str(self) -> &'static str {
        match self {
            TailType::Left => "Left",
            TailType::Right => "Right",
            TailType::Two => "Two",
        }
    }
}

impl fmt::Display for TailType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TailType {
    type Err = StatError;

    /// Accepts the variant names case-insensitively plus the common
    /// alternative spellings `less`, `greater`, `two-sided`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" | "less" => Ok(TailType::Left),
            "right" | "greater" => Ok(TailType::Right),
            "two" | "two-sided" | "two_sided" | "both" => Ok(TailType::Two),
            _ => Err(StatError::InvalidTail(s.to_string())),
        }
    }
}

impl TryFrom<u8> for TailType {
    type Error = StatError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(TailType::Left),
            1 => Ok(TailType::Right),
            2 => Ok(TailType::Two),
            other => Err(StatError::InvalidTail(other.to_string())),
        }
    }
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl TailType {
    #[getter]
    fn name(&self) -> &'static str {
        self.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::errors::ErrorKind;

    const ALL: [TailType; 3] = [TailType::Left, TailType::Right, TailType::Two];

    #[test]
    fn equality_holds_only_for_same_variant() {
        for (i, a) in ALL.iter().enumerate() {
            for (j, b) in ALL.iter().enumerate() {
                assert_eq!(a == b, i == j, "{a} vs {b}");
            }
        }
        assert_ne!(TailType::Left, TailType::Right);
        assert_eq!(TailType::Two, TailType::Two);
    }

    #[test]
    fn parses_names_and_aliases() {
        assert_eq!("left".parse::<TailType>().unwrap(), TailType::Left);
        assert_eq!("Greater".parse::<TailType>().unwrap(), TailType::Right);
        assert_eq!(" two-sided ".parse::<TailType>().unwrap(), TailType::Two);
        for t in ALL {
            assert_eq!(t.to_string().parse::<TailType>().unwrap(), t);
        }
    }

    #[test]
    fn out_of_set_values_are_invalid_enum_errors() {
        let err = "sideways".parse::<TailType>().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidEnumValue);

        let err = TailType::try_from(3u8).unwrap_err();
        assert_eq!(err, StatError::InvalidTail("3".into()));
        assert_eq!(TailType::try_from(2u8).unwrap(), TailType::Two);
    }

    #[test]
    fn serde_uses_variant_names() {
        let json = serde_json::to_string(&TailType::Right).unwrap();
        assert_eq!(json, "\"Right\"");
        assert!(serde_json::from_str::<TailType>("\"Up\"").is_err());
    }
}
