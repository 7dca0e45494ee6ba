//! Ad-hoc field extraction from free-text log entries.
//!
//! Entries are scanned for logfmt-style `key=value` tokens. A token starts at
//! the beginning of the entry or after whitespace; the value is either a bare
//! run of non-whitespace characters or a double-quoted string that extends to
//! the next quote (or the end of the entry). Quotes are stripped and no escape
//! processing is done. Anything that does not fit this shape is ignored.
//!
//! Entries that are JSON objects can optionally be read member by member.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use serde_json::Value;

/// `key=value` token; group 1 is the key, group 2 the raw value
static LOGFMT_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?:^|\s)([A-Za-z0-9_()\[\]{}]+)=("[^"]*(?:"|$)|[^"\s]\S*)"#)
        .expect("logfmt token regex is valid")
});

/// A key/value pair parsed out of an entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetectedField {
    pub name: String,
    pub value: String,
}

impl DetectedField {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// LogParser
// ─────────────────────────────────────────────────────────────────────────────

/// Field syntax recognised in an entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogParser {
    /// `key=value` tokens
    Logfmt,
    /// A JSON object; top-level members become fields
    Json,
}

impl LogParser {
    /// Pick the parser for an entry, or `None` if it carries no fields.
    ///
    /// JSON is only considered when `allow_json` is set and the entry is a
    /// JSON object.
    pub fn detect(entry: &str, allow_json: bool) -> Option<Self> {
        if allow_json && parse_json_object(entry).is_some() {
            return Some(LogParser::Json);
        }
        LOGFMT_TOKEN.is_match(entry).then_some(LogParser::Logfmt)
    }

    /// Extract the fields of `entry` with this parser.
    pub fn fields(&self, entry: &str) -> Vec<DetectedField> {
        match self {
            LogParser::Logfmt => extract_fields(entry),
            LogParser::Json => json_fields(entry),
        }
    }
}

/// Detect and extract fields in one step.
pub fn detect_fields(entry: &str, allow_json: bool) -> Vec<DetectedField> {
    LogParser::detect(entry, allow_json)
        .map(|parser| parser.fields(entry))
        .unwrap_or_default()
}

// ─────────────────────────────────────────────────────────────────────────────
// Logfmt
// ─────────────────────────────────────────────────────────────────────────────

/// Scan `entry` for `key=value` tokens.
///
/// When a key repeats, the last value wins and the field keeps the position
/// of its first occurrence.
pub fn extract_fields(entry: &str) -> Vec<DetectedField> {
    let mut fields: Vec<DetectedField> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for caps in LOGFMT_TOKEN.captures_iter(entry) {
        let name = &caps[1];
        let value = unquote(&caps[2]);

        match positions.get(name) {
            Some(&pos) => fields[pos].value = value.to_string(),
            None => {
                positions.insert(name.to_string(), fields.len());
                fields.push(DetectedField::new(name, value));
            }
        }
    }

    fields
}

/// Value of `key` in `entry`, if the entry carries it.
///
/// Uses the same detection as the details model, so JSON members count when
/// `allow_json` is set.
pub fn field_value(entry: &str, key: &str, allow_json: bool) -> Option<String> {
    detect_fields(entry, allow_json)
        .into_iter()
        .find(|f| f.name == key)
        .map(|f| f.value)
}

fn unquote(raw: &str) -> &str {
    match raw.strip_prefix('"') {
        Some(inner) => inner.strip_suffix('"').unwrap_or(inner),
        None => raw,
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// JSON
// ─────────────────────────────────────────────────────────────────────────────

fn parse_json_object(entry: &str) -> Option<serde_json::Map<String, Value>> {
    let trimmed = entry.trim();
    if !trimmed.starts_with('{') {
        return None;
    }
    match serde_json::from_str::<Value>(trimmed) {
        Ok(Value::Object(map)) => Some(map),
        _ => None,
    }
}

fn json_fields(entry: &str) -> Vec<DetectedField> {
    let Some(map) = parse_json_object(entry) else {
        return Vec::new();
    };

    map.into_iter()
        .filter_map(|(name, value)| match value {
            Value::Null => None,
            Value::String(s) => Some(DetectedField::new(name, s)),
            other => Some(DetectedField::new(name, other.to_string())),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(fields: &[DetectedField]) -> Vec<(&str, &str)> {
        fields
            .iter()
            .map(|f| (f.name.as_str(), f.value.as_str()))
            .collect()
    }

    #[test]
    fn test_single_token() {
        let fields = extract_fields("test=successful");
        assert_eq!(pairs(&fields), vec![("test", "successful")]);
    }

    #[test]
    fn test_quoted_value_is_unquoted() {
        let fields = extract_fields(r#"traceId=1234 msg="some message""#);
        assert_eq!(
            pairs(&fields),
            vec![("traceId", "1234"), ("msg", "some message")]
        );
    }

    #[test]
    fn test_empty_and_whitespace_entries() {
        assert!(extract_fields("").is_empty());
        assert!(extract_fields("   \t ").is_empty());
    }

    #[test]
    fn test_plain_text_has_no_fields() {
        assert!(extract_fields("connection reset by peer").is_empty());
        assert!(extract_fields("a = b").is_empty());
    }

    #[test]
    fn test_last_duplicate_wins_in_first_position() {
        let fields = extract_fields("a=1 b=2 a=3");
        assert_eq!(pairs(&fields), vec![("a", "3"), ("b", "2")]);
    }

    #[test]
    fn test_token_must_start_a_word() {
        // "x:a=1" is a single non-whitespace run that does not start with a key
        assert!(extract_fields("x:a=1").is_empty());
        let fields = extract_fields("level:info status=200");
        assert_eq!(pairs(&fields), vec![("status", "200")]);
    }

    #[test]
    fn test_bare_value_keeps_extra_equals() {
        let fields = extract_fields("query=a=b");
        assert_eq!(pairs(&fields), vec![("query", "a=b")]);
    }

    #[test]
    fn test_unterminated_quote_runs_to_end() {
        let fields = extract_fields(r#"a=1 msg="never closed b=2"#);
        assert_eq!(pairs(&fields), vec![("a", "1"), ("msg", "never closed b=2")]);
    }

    #[test]
    fn test_empty_quoted_value() {
        let fields = extract_fields(r#"user="" id=7"#);
        assert_eq!(pairs(&fields), vec![("user", ""), ("id", "7")]);
    }

    #[test]
    fn test_key_allows_brackets_and_parens() {
        let fields = extract_fields("tags[0]=a fn(x)=y");
        assert_eq!(pairs(&fields), vec![("tags[0]", "a"), ("fn(x)", "y")]);
    }

    #[test]
    fn test_field_value_lookup() {
        let entry = r#"method=GET path="/api/v1" status=200"#;
        assert_eq!(field_value(entry, "path", false).as_deref(), Some("/api/v1"));
        assert_eq!(field_value(entry, "missing", false), None);
    }

    #[test]
    fn test_field_value_in_json_entry() {
        let entry = r#"{"status":"404","path":"/a"}"#;
        assert_eq!(field_value(entry, "status", true).as_deref(), Some("404"));
        assert_eq!(field_value(entry, "status", false), None);
    }

    #[test]
    fn test_detect_logfmt() {
        assert_eq!(LogParser::detect("a=1", false), Some(LogParser::Logfmt));
        assert_eq!(LogParser::detect("no fields here", false), None);
        assert_eq!(LogParser::detect("", true), None);
    }

    #[test]
    fn test_json_only_when_allowed() {
        let entry = r#"{"level":"info","status":200,"ok":true,"gone":null}"#;
        assert_eq!(LogParser::detect(entry, false), None);
        assert_eq!(LogParser::detect(entry, true), Some(LogParser::Json));

        let fields = detect_fields(entry, true);
        assert_eq!(
            pairs(&fields),
            vec![("level", "info"), ("ok", "true"), ("status", "200")]
        );
    }

    #[test]
    fn test_json_array_is_not_an_object() {
        assert_eq!(LogParser::detect(r#"[1, 2]"#, true), None);
    }

    #[test]
    fn test_json_with_logfmt_fallback() {
        // Not valid JSON, but carries a token
        let entry = r#"{broken a=1"#;
        assert_eq!(LogParser::detect(entry, true), Some(LogParser::Logfmt));
    }
}
