/// Numeric status reported when no response was received.
pub const NO_RESPONSE_STATUS: i32 = -1;

const MAX_ERROR_CHARS: usize = 200;

/// Result of one HTTP call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HttpOutcome {
    Response { status: u16, body: String },
    Failed { status: Option<u16>, message: String },
}

impl HttpOutcome {
    /// Builds a failure with the `HTTPError: ` prefix and a truncated description.
    pub fn failed(status: Option<u16>, detail: &str) -> Self {
        HttpOutcome::Failed {
            status,
            message: format!("HTTPError: {}", truncate_message(detail)),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, HttpOutcome::Response { .. })
    }

    pub fn status_code(&self) -> i32 {
        match self {
            HttpOutcome::Response { status, .. } => i32::from(*status),
            HttpOutcome::Failed {
                status: Some(status),
                ..
            } => i32::from(*status),
            HttpOutcome::Failed { status: None, .. } => NO_RESPONSE_STATUS,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            HttpOutcome::Response { .. } => None,
            HttpOutcome::Failed { message, .. } => Some(message),
        }
    }

    /// `code(<status>): <message>` for failures, as printed in report lines.
    pub fn failure_summary(&self) -> Option<String> {
        self.error_message()
            .map(|message| format!("code({}): {}", self.status_code(), message))
    }
}

pub fn truncate_message(detail: &str) -> String {
    detail.chars().take(MAX_ERROR_CHARS).collect()
}
