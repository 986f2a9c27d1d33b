use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::ToolError;

pub const FIXTURE_DIR_VAR: &str = "EZID_VERIFY_FIXTURE_DIR";
pub const HTTP_TIMEOUT_VAR: &str = "EZID_VERIFY_HTTP_TIMEOUT_SECS";
pub const STATUS_TOOL_VAR: &str = "EZID_VERIFY_STATUS_TOOL";
pub const JOB_TIMEOUT_VAR: &str = "EZID_VERIFY_JOB_TIMEOUT_SECS";
pub const LOG_JSON_VAR: &str = "EZID_VERIFY_LOG_JSON";

const DEFAULT_FIXTURE_DIR: &str = "./test_records";
const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;
const DEFAULT_STATUS_TOOL: &str = "cdlsysctl";
const DEFAULT_JOB_TIMEOUT_SECS: u64 = 10;

/// Operational knobs read from the process environment once at startup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    pub fixture_dir: PathBuf,
    pub http_timeout: Duration,
    pub status_tool: String,
    pub job_timeout: Duration,
    pub log_json: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            fixture_dir: PathBuf::from(DEFAULT_FIXTURE_DIR),
            http_timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
            status_tool: DEFAULT_STATUS_TOOL.to_string(),
            job_timeout: Duration::from_secs(DEFAULT_JOB_TIMEOUT_SECS),
            log_json: false,
        }
    }
}

impl Settings {
    pub fn from_env() -> Result<Self, ToolError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ToolError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Settings::default();
        if let Some(dir) = lookup(FIXTURE_DIR_VAR).filter(|v| !v.is_empty()) {
            settings.fixture_dir = PathBuf::from(dir);
        }
        if let Some(raw) = lookup(HTTP_TIMEOUT_VAR) {
            settings.http_timeout = parse_secs(HTTP_TIMEOUT_VAR, raw)?;
        }
        if let Some(tool) = lookup(STATUS_TOOL_VAR).filter(|v| !v.is_empty()) {
            settings.status_tool = tool;
        }
        if let Some(raw) = lookup(JOB_TIMEOUT_VAR) {
            settings.job_timeout = parse_secs(JOB_TIMEOUT_VAR, raw)?;
        }
        if let Some(raw) = lookup(LOG_JSON_VAR) {
            settings.log_json = parse_bool(LOG_JSON_VAR, raw)?;
        }
        Ok(settings)
    }
}

fn parse_secs(key: &'static str, raw: String) -> Result<Duration, ToolError> {
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(ToolError::Settings {
            key,
            value: raw,
            reason: "expected a positive number of seconds",
        }),
    }
}

fn parse_bool(key: &'static str, raw: String) -> Result<bool, ToolError> {
    match raw.trim() {
        "1" | "true" | "TRUE" | "yes" | "YES" => Ok(true),
        "0" | "false" | "FALSE" | "no" | "NO" | "" => Ok(false),
        _ => Err(ToolError::Settings {
            key,
            value: raw,
            reason: "expected true|false",
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_without_overrides() {
        let settings = Settings::from_lookup(lookup_from(&[])).expect("settings");
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.status_tool, "cdlsysctl");
        assert_eq!(settings.fixture_dir, PathBuf::from("./test_records"));
    }

    #[test]
    fn overrides_are_applied() {
        let settings = Settings::from_lookup(lookup_from(&[
            (FIXTURE_DIR_VAR, "/srv/fixtures"),
            (HTTP_TIMEOUT_VAR, "5"),
            (STATUS_TOOL_VAR, "systemctl"),
            (JOB_TIMEOUT_VAR, "3"),
            (LOG_JSON_VAR, "yes"),
        ]))
        .expect("settings");
        assert_eq!(settings.fixture_dir, PathBuf::from("/srv/fixtures"));
        assert_eq!(settings.http_timeout, Duration::from_secs(5));
        assert_eq!(settings.status_tool, "systemctl");
        assert_eq!(settings.job_timeout, Duration::from_secs(3));
        assert!(settings.log_json);
    }

    #[test]
    fn bad_timeout_is_rejected() {
        let err = Settings::from_lookup(lookup_from(&[(HTTP_TIMEOUT_VAR, "soon")])).unwrap_err();
        assert_eq!(err.code(), "E_SETTINGS_INVALID");
        let err = Settings::from_lookup(lookup_from(&[(JOB_TIMEOUT_VAR, "0")])).unwrap_err();
        assert!(err.to_string().starts_with("EZID_VERIFY_JOB_TIMEOUT_SECS=0"));
    }

    #[test]
    fn bad_bool_is_rejected() {
        assert!(Settings::from_lookup(lookup_from(&[(LOG_JSON_VAR, "maybe")])).is_err());
    }
}
