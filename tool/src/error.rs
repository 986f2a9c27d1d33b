use ezid_verify_core::RecordError;
use thiserror::Error;

/// Failures that abort the run. Check failures are report lines, not errors.
#[derive(Debug, Error)]
pub enum ToolError {
    #[error(transparent)]
    Fixture(#[from] RecordError),

    #[error("cannot write report: {0}")]
    Output(#[from] std::io::Error),

    #[error("{key}={value}: {reason}")]
    Settings {
        key: &'static str,
        value: String,
        reason: &'static str,
    },
}

impl ToolError {
    pub fn code(&self) -> &'static str {
        match self {
            ToolError::Fixture(err) => err.code(),
            ToolError::Output(_) => "E_REPORT_WRITE",
            ToolError::Settings { .. } => "E_SETTINGS_INVALID",
        }
    }
}
