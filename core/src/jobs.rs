use crate::report::CheckStatus;

/// Substring of `<tool> status <job>` output that marks a running unit.
pub const RUNNING_MARKER: &str = "active (running)";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct JobExpectation {
    pub job: &'static str,
    pub should_be_running: bool,
}

const fn entry(job: &'static str, should_be_running: bool) -> JobExpectation {
    JobExpectation {
        job,
        should_be_running,
    }
}

const PRODUCTION_JOBS: [JobExpectation; 10] = [
    entry("ezid-proc-binder", true),
    entry("ezid-proc-crossref", true),
    entry("ezid-proc-datacite", true),
    entry("ezid-proc-download", true),
    entry("ezid-proc-expunge", true),
    entry("ezid-proc-newsfeed", true),
    entry("ezid-proc-search-indexer", true),
    entry("ezid-proc-stats", true),
    entry("ezid-proc-link-checker", true),
    entry("ezid-proc-link-checker-update", true),
];

// Link checking only runs in production.
const STAGING_JOBS: [JobExpectation; 10] = [
    entry("ezid-proc-binder", true),
    entry("ezid-proc-crossref", true),
    entry("ezid-proc-datacite", true),
    entry("ezid-proc-download", true),
    entry("ezid-proc-expunge", true),
    entry("ezid-proc-newsfeed", true),
    entry("ezid-proc-search-indexer", true),
    entry("ezid-proc-stats", true),
    entry("ezid-proc-link-checker", false),
    entry("ezid-proc-link-checker-update", false),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum JobTier {
    Production,
    Staging,
}

impl JobTier {
    pub fn expectations(self) -> &'static [JobExpectation] {
        match self {
            JobTier::Production => &PRODUCTION_JOBS,
            JobTier::Staging => &STAGING_JOBS,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum JobVerdict {
    Running,
    UnexpectedlyRunning,
    NotRunning,
    IdleAsExpected,
}

impl JobVerdict {
    pub fn status(self) -> CheckStatus {
        match self {
            JobVerdict::Running => CheckStatus::Ok,
            JobVerdict::UnexpectedlyRunning | JobVerdict::NotRunning => CheckStatus::Error,
            JobVerdict::IdleAsExpected => CheckStatus::Info,
        }
    }

    pub fn describe(self, job: &str) -> String {
        match self {
            JobVerdict::Running => format!("{job} active running"),
            JobVerdict::UnexpectedlyRunning => format!("{job} should not be running"),
            JobVerdict::NotRunning | JobVerdict::IdleAsExpected => format!("{job} is not running"),
        }
    }
}

pub fn job_verdict(should_be_running: bool, is_running: bool) -> JobVerdict {
    match (should_be_running, is_running) {
        (true, true) => JobVerdict::Running,
        (false, true) => JobVerdict::UnexpectedlyRunning,
        (true, false) => JobVerdict::NotRunning,
        (false, false) => JobVerdict::IdleAsExpected,
    }
}
