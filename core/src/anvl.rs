use std::sync::OnceLock;

use regex::{Captures, Regex};

use crate::record::Record;

fn key_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"[%:\r\n]").expect("anvl key escape pattern"))
}

fn value_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"[%\r\n]").expect("anvl value escape pattern"))
}

/// Percent-escapes `%`, CR and LF as `%XX` (uppercase hex). `colon_too` adds `:`,
/// which only keys need.
fn escape(text: &str, colon_too: bool) -> String {
    let pattern = if colon_too {
        key_pattern()
    } else {
        value_pattern()
    };
    pattern
        .replace_all(text, |caps: &Captures| {
            let mut out = String::new();
            for ch in caps[0].chars() {
                out.push_str(&format!("%{:02X}", ch as u32));
            }
            out
        })
        .into_owned()
}

/// Serializes a record as ANVL, one `key: value` line per entry in key order.
pub fn encode(record: &Record) -> String {
    let mut out = String::new();
    for (key, value) in record.iter() {
        out.push_str(&escape(key, true));
        out.push_str(": ");
        out.push_str(&escape(value, false));
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_value_keeps_colon() {
        assert_eq!(escape("v:1\n", false), "v:1%0A");
        assert_eq!(escape("50%\r\n", false), "50%25%0D%0A");
    }

    #[test]
    fn escape_key_escapes_colon() {
        assert_eq!(escape("a:b", true), "a%3Ab");
        assert_eq!(escape("%", true), "%25");
    }

    #[test]
    fn escape_leaves_plain_text_alone() {
        assert_eq!(escape("datacite.title", true), "datacite.title");
        assert_eq!(escape("", false), "");
    }

    #[test]
    fn encode_sorts_by_key() {
        let mut record = Record::new();
        record.insert("b", "2");
        record.insert("a", "1");
        assert_eq!(encode(&record), "a: 1\nb: 2\n");
    }

    #[test]
    fn encode_escapes_key_and_value_separately() {
        let mut record = Record::new();
        record.insert("k:x", "v:1\n");
        assert_eq!(encode(&record), "k%3Ax: v:1%0A\n");
    }

    #[test]
    fn encode_empty_record_is_empty() {
        assert_eq!(encode(&Record::new()), "");
    }
}
