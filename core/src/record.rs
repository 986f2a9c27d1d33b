use std::collections::btree_map;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RecordError {
    #[error("cannot read fixture '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("fixture '{path}' line {line}: missing ':' separator")]
    MissingSeparator { path: PathBuf, line: usize },
}

impl RecordError {
    pub fn code(&self) -> &'static str {
        match self {
            RecordError::Io { .. } => "E_FIXTURE_READ",
            RecordError::MissingSeparator { .. } => "E_FIXTURE_PARSE",
        }
    }
}

/// Flat metadata record keyed by field name. Iteration is always in key order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Record {
    fields: BTreeMap<String, String>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, String> {
        self.fields.iter()
    }

    /// Parses `key:value` lines. Each line is trimmed, then split on the first `:`.
    /// `origin` only labels errors.
    pub fn parse(text: &str, origin: &Path) -> Result<Self, RecordError> {
        let mut record = Record::new();
        for (index, raw) in text.lines().enumerate() {
            let line = raw.trim();
            let Some((key, value)) = line.split_once(':') else {
                return Err(RecordError::MissingSeparator {
                    path: origin.to_path_buf(),
                    line: index + 1,
                });
            };
            record.insert(key, value);
        }
        Ok(record)
    }

    pub fn load(path: &Path) -> Result<Self, RecordError> {
        let text = fs::read_to_string(path).map_err(|source| RecordError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text, path)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Record::new();
        for (key, value) in iter {
            record.insert(key, value);
        }
        record
    }
}
