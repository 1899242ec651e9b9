//! common::serialization — mapping / JSON boundary for [`TestResult`].
//!
//! Purpose
//! -------
//! Convert a [`TestResult`] to and from a plain, ordered keyed mapping that
//! survives text-based interchange, and provide JSON helpers on top of it.
//! The wire shape is an explicit contract rather than a by-product of
//! derive macros.
//!
//! Wire shape
//! ----------
//! Keys, in this order and no others:
//! `test_statistic`, `p_value`, `confidence_interval`, `null_hypothesis`,
//! `alt_hypothesis`, `reject_null`.
//!
//! - `confidence_interval` is a two-element array `[lower, upper]`.
//! - An infinite bound is written as `null`: `null` in the lower slot
//!   decodes to −∞, in the upper slot to +∞. `TestResult` forbids +∞ as a
//!   lower bound and −∞ as an upper bound, so the encoding is lossless.
//!
//! Invariants & assumptions
//! ------------------------
//! - `from_mapping(&to_mapping(r)) == r` for every valid `r`.
//! - JSON text produced by [`to_json`] decodes to a mapping equal to
//!   [`to_mapping`] of the encoded result; `serde_json` is built with
//!   `float_roundtrip`, so finite floats are bit-identical after decoding.
//! - Every decode failure is `StatError::MalformedInput`.

use serde::{de::Error as _, Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Number, Value};

use crate::common::{
    errors::{StatError, StatResult},
    test_result::TestResult,
};

/// Ordered keyed mapping used at the serialization boundary.
pub type Mapping = Map<String, Value>;

pub const KEY_TEST_STATISTIC: &str = "test_statistic";
pub const KEY_P_VALUE: &str = "p_value";
pub const KEY_CONFIDENCE_INTERVAL: &str = "confidence_interval";
pub const KEY_NULL_HYPOTHESIS: &str = "null_hypothesis";
pub const KEY_ALT_HYPOTHESIS: &str = "alt_hypothesis";
pub const KEY_REJECT_NULL: &str = "reject_null";

/// The exact key set, in wire order.
pub const KEYS: [&str; 6] = [
    KEY_TEST_STATISTIC,
    KEY_P_VALUE,
    KEY_CONFIDENCE_INTERVAL,
    KEY_NULL_HYPOTHESIS,
    KEY_ALT_HYPOTHESIS,
    KEY_REJECT_NULL,
];

/// Encode a result as an ordered mapping.
///
/// Examples
/// --------
/// ```rust
/// use rust_hypotests::common::{to_mapping, TestResult};
///
/// let r = TestResult::new(2.5, 0.05, (1.0, 3.0), "No effect", "There is an effect", true)
///     .unwrap();
/// let map = to_mapping(&r);
/// let keys: Vec<&str> = map.keys().map(String::as_str).collect();
/// assert_eq!(keys[2], "confidence_interval");
/// assert_eq!(map["confidence_interval"], serde_json::json!([1.0, 3.0]));
/// ```
pub fn to_mapping(result: &TestResult) -> Mapping {
    let (lower, upper) = result.confidence_interval();
    let mut map = Map::new();
    map.insert(KEY_TEST_STATISTIC.into(), number_or_null(result.test_statistic()));
    map.insert(KEY_P_VALUE.into(), number_or_null(result.p_value()));
    map.insert(
        KEY_CONFIDENCE_INTERVAL.into(),
        Value::Array(vec![number_or_null(lower), number_or_null(upper)]),
    );
    map.insert(KEY_NULL_HYPOTHESIS.into(), Value::String(result.null_hypothesis().to_string()));
    map.insert(KEY_ALT_HYPOTHESIS.into(), Value::String(result.alt_hypothesis().to_string()));
    map.insert(KEY_REJECT_NULL.into(), Value::Bool(result.reject_null()));
    map
}

/// Decode a mapping produced by [`to_mapping`].
///
/// Errors
/// ------
/// - `StatError::MalformedInput` when a key is missing or unknown, a value
///   has the wrong JSON type, the interval is not a two-element array, or
///   the decoded fields violate a [`TestResult`] invariant.
pub fn from_mapping(map: &Mapping) -> StatResult<TestResult> {
    if let Some(unknown) = map.keys().find(|k| !KEYS.contains(&k.as_str())) {
        return Err(StatError::MalformedInput(format!("unknown key `{unknown}`")));
    }

    let test_statistic = get_f64(map, KEY_TEST_STATISTIC)?;
    let p_value = get_f64(map, KEY_P_VALUE)?;
    let confidence_interval = get_interval(map)?;
    let null_hypothesis = get_str(map, KEY_NULL_HYPOTHESIS)?;
    let alt_hypothesis = get_str(map, KEY_ALT_HYPOTHESIS)?;
    let reject_null = require(map, KEY_REJECT_NULL)?.as_bool().ok_or_else(|| {
        StatError::MalformedInput(format!("`{KEY_REJECT_NULL}` must be a boolean"))
    })?;

    TestResult::new(
        test_statistic,
        p_value,
        confidence_interval,
        null_hypothesis,
        alt_hypothesis,
        reject_null,
    )
    .map_err(|err| StatError::MalformedInput(err.to_string()))
}

/// Encode a result as compact JSON text.
pub fn to_json(result: &TestResult) -> StatResult<String> {
    serde_json::to_string(&Value::Object(to_mapping(result)))
        .map_err(|err| StatError::MalformedInput(err.to_string()))
}

/// Decode JSON text produced by [`to_json`].
pub fn from_json(text: &str) -> StatResult<TestResult> {
    let value: Value =
        serde_json::from_str(text).map_err(|err| StatError::MalformedInput(err.to_string()))?;
    match value {
        Value::Object(map) => from_mapping(&map),
        other => Err(StatError::MalformedInput(format!("expected a JSON object, got {other}"))),
    }
}

impl TestResult {
    /// See [`to_mapping`].
    pub fn to_mapping(&self) -> Mapping {
        to_mapping(self)
    }

    /// See [`from_mapping`].
    pub fn from_mapping(map: &Mapping) -> StatResult<Self> {
        from_mapping(map)
    }
}

impl Serialize for TestResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        to_mapping(self).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for TestResult {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let map = Mapping::deserialize(deserializer)?;
        from_mapping(&map).map_err(D::Error::custom)
    }
}

// ---- Private helpers ----

fn number_or_null(x: f64) -> Value {
    Number::from_f64(x).map(Value::Number).unwrap_or(Value::Null)
}

fn require<'a>(map: &'a Mapping, key: &str) -> StatResult<&'a Value> {
    map.get(key).ok_or_else(|| StatError::MalformedInput(format!("missing key `{key}`")))
}

fn get_f64(map: &Mapping, key: &str) -> StatResult<f64> {
    require(map, key)?
        .as_f64()
        .ok_or_else(|| StatError::MalformedInput(format!("`{key}` must be a number")))
}

fn get_str(map: &Mapping, key: &str) -> StatResult<String> {
    require(map, key)?
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| StatError::MalformedInput(format!("`{key}` must be a string")))
}

fn get_interval(map: &Mapping) -> StatResult<(f64, f64)> {
    let malformed = || {
        StatError::MalformedInput(format!(
            "`{KEY_CONFIDENCE_INTERVAL}` must be a two-element array of numbers or nulls"
        ))
    };
    let items = require(map, KEY_CONFIDENCE_INTERVAL)?.as_array().ok_or_else(malformed)?;
    let [lower, upper] = items.as_slice() else {
        return Err(malformed());
    };
    let lower = match lower {
        Value::Null => f64::NEG_INFINITY,
        v => v.as_f64().ok_or_else(malformed)?,
    };
    let upper = match upper {
        Value::Null => f64::INFINITY,
        v => v.as_f64().ok_or_else(malformed)?,
    };
    Ok((lower, upper))
}
