use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CheckStatus {
    Ok,
    Error,
    Info,
}

impl CheckStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            CheckStatus::Ok => "ok",
            CheckStatus::Error => "error",
            CheckStatus::Info => "info",
        }
    }
}

/// Check ordinal, `3` or `3.1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct CheckId {
    pub item: u32,
    pub sub: Option<u32>,
}

impl CheckId {
    pub fn item(item: u32) -> Self {
        Self { item, sub: None }
    }

    pub fn sub(item: u32, sub: u32) -> Self {
        Self {
            item,
            sub: Some(sub),
        }
    }
}

impl fmt::Display for CheckId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.sub {
            Some(sub) => write!(f, "{}.{}", self.item, sub),
            None => write!(f, "{}", self.item),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportLine {
    pub status: CheckStatus,
    pub id: CheckId,
    pub description: String,
}

impl ReportLine {
    pub fn new(status: CheckStatus, id: CheckId, description: impl Into<String>) -> Self {
        Self {
            status,
            id,
            description: description.into(),
        }
    }

    pub fn ok(id: CheckId, description: impl Into<String>) -> Self {
        Self::new(CheckStatus::Ok, id, description)
    }

    pub fn error(id: CheckId, description: impl Into<String>) -> Self {
        Self::new(CheckStatus::Error, id, description)
    }

    pub fn info(id: CheckId, description: impl Into<String>) -> Self {
        Self::new(CheckStatus::Info, id, description)
    }
}

impl fmt::Display for ReportLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} - {}", self.status.as_str(), self.id, self.description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_item_and_sub_ids() {
        assert_eq!(
            ReportLine::ok(CheckId::item(1), "Verify EZID status").to_string(),
            "ok 1 - Verify EZID status"
        );
        assert_eq!(
            ReportLine::info(CheckId::sub(4, 9), "ezid-proc-link-checker is not running")
                .to_string(),
            "info 4.9 - ezid-proc-link-checker is not running"
        );
    }

    #[test]
    fn ids_order_numerically() {
        assert!(CheckId::item(2) < CheckId::sub(3, 1));
        assert!(CheckId::sub(3, 2) < CheckId::sub(3, 10));
    }
}
