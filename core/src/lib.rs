pub mod anvl;
pub mod creation;
pub mod environment;
pub mod http;
pub mod jobs;
pub mod record;
pub mod report;

pub use anvl::encode as encode_anvl;
pub use creation::{parse_created_identifier, CreationResult, ShoulderFixture, SHOULDER_FIXTURES};
pub use environment::Environment;
pub use http::{truncate_message, HttpOutcome, NO_RESPONSE_STATUS};
pub use jobs::{job_verdict, JobExpectation, JobTier, JobVerdict, RUNNING_MARKER};
pub use record::{Record, RecordError};
pub use report::{CheckId, CheckStatus, ReportLine};
