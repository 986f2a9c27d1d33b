use std::fmt;

use crate::jobs::JobTier;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Environment {
    Test,
    Dev,
    Stg,
    Prd,
}

impl Environment {
    pub fn name(self) -> &'static str {
        match self {
            Environment::Test => "test",
            Environment::Dev => "dev",
            Environment::Stg => "stg",
            Environment::Prd => "prd",
        }
    }

    pub fn base_url(self) -> &'static str {
        match self {
            Environment::Test => "http://127.0.0.1:8000",
            Environment::Dev => "http://uc3-ezidui01x2-dev.cdlib.org",
            Environment::Stg => "https://ezid-stg.cdlib.org",
            Environment::Prd => "https://ezid.cdlib.org",
        }
    }

    /// Background jobs are only checked where they are deployed.
    pub fn job_tier(self) -> Option<JobTier> {
        match self {
            Environment::Test | Environment::Dev => None,
            Environment::Stg => Some(JobTier::Staging),
            Environment::Prd => Some(JobTier::Production),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_uses_cli_names() {
        assert_eq!(Environment::Test.to_string(), "test");
        assert_eq!(Environment::Dev.to_string(), "dev");
        assert_eq!(Environment::Stg.to_string(), "stg");
        assert_eq!(Environment::Prd.to_string(), "prd");
    }

    #[test]
    fn base_urls_are_fixed() {
        assert_eq!(Environment::Test.base_url(), "http://127.0.0.1:8000");
        assert_eq!(Environment::Prd.base_url(), "https://ezid.cdlib.org");
    }

    #[test]
    fn only_stg_and_prd_have_job_tiers() {
        assert_eq!(Environment::Test.job_tier(), None);
        assert_eq!(Environment::Dev.job_tier(), None);
        assert_eq!(Environment::Stg.job_tier(), Some(JobTier::Staging));
        assert_eq!(Environment::Prd.job_tier(), Some(JobTier::Production));
    }
}
