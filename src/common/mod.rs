//! Building blocks shared by every test family: the tail convention, the
//! result value and its serialization boundary, sample views, summary
//! statistics, configuration, errors and input guards.
pub mod descriptive;
pub mod errors;
pub mod options;
pub mod sample;
pub mod serialization;
pub mod tail;
pub mod test_result;
pub mod validation;

pub use self::descriptive::SampleSummary;
pub use self::errors::{ErrorKind, StatError, StatResult};
pub use self::options::{TestOptions, VarianceAssumption, DEFAULT_ALPHA};
pub use self::sample::{Labeled, Sample};
pub use self::serialization::{from_json, from_mapping, to_json, to_mapping, Mapping};
pub use self::tail::TailType;
pub use self::test_result::TestResult;
