//! Core log domain types

use std::collections::BTreeMap;
use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Labels attached to a log line at ingestion, ordered by key
pub type Labels = BTreeMap<String, String>;

// ─────────────────────────────────────────────────────────────────────────────
// LogLevel
// ─────────────────────────────────────────────────────────────────────────────

/// Log severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warning,
    Error,
    Critical,
    #[default]
    Unknown,
}

/// Level keywords as they appear in free-text log lines
static LEVEL_KEYWORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(trace|debug|dbug|info|warn(?:ing)?|err(?:or)?|eror|crit(?:ical)?|fatal)\b")
        .expect("level keyword regex is valid")
});

impl LogLevel {
    /// Parse a level name, accepting the common short and long spellings.
    ///
    /// Unrecognised names map to [`LogLevel::Unknown`].
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "trace" => LogLevel::Trace,
            "debug" | "dbug" => LogLevel::Debug,
            "info" | "information" | "informational" | "notice" => LogLevel::Info,
            "warn" | "warning" => LogLevel::Warning,
            "error" | "err" | "eror" => LogLevel::Error,
            "critical" | "crit" | "fatal" | "emerg" | "alert" => LogLevel::Critical,
            _ => LogLevel::Unknown,
        }
    }

    /// Detect the level of a free-text line from the first level keyword in it.
    pub fn detect(text: &str) -> Self {
        LEVEL_KEYWORD
            .captures(text)
            .map(|caps| LogLevel::from_name(&caps[1]))
            .unwrap_or_default()
    }

    /// Lowercase name used in serialized output and the level indicator
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warning => "warning",
            LogLevel::Error => "error",
            LogLevel::Critical => "critical",
            LogLevel::Unknown => "unknown",
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, LogLevel::Error | LogLevel::Critical)
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for LogLevel {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        Ok(LogLevel::from_name(&name))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// LogLine
// ─────────────────────────────────────────────────────────────────────────────

/// A single log line as shown in the log list.
///
/// Immutable once constructed. The details view only ever borrows it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogLine {
    /// Raw entry text
    #[serde(default)]
    pub entry: String,

    /// Milliseconds since the Unix epoch
    #[serde(default)]
    pub timestamp_ms: i64,

    #[serde(default)]
    pub level: LogLevel,

    #[serde(default)]
    pub labels: Labels,

    /// Row failed processing upstream; suppresses the level indicator
    #[serde(default)]
    pub has_error: bool,

    /// Stable identifier; defaults to the line's position when loaded
    #[serde(default)]
    pub uid: String,
}

impl LogLine {
    /// Create a line from entry text with no labels.
    pub fn new(entry: impl Into<String>) -> Self {
        Self {
            entry: entry.into(),
            timestamp_ms: 0,
            level: LogLevel::Unknown,
            labels: Labels::new(),
            has_error: false,
            uid: String::new(),
        }
    }

    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    pub fn with_timestamp_ms(mut self, timestamp_ms: i64) -> Self {
        self.timestamp_ms = timestamp_ms;
        self
    }

    pub fn with_label(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.labels.insert(key.into(), value.into());
        self
    }

    pub fn with_labels<K, V>(mut self, labels: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.labels
            .extend(labels.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    pub fn with_error(mut self, has_error: bool) -> Self {
        self.has_error = has_error;
        self
    }

    /// Timestamp as a UTC datetime, if it is representable
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.timestamp_ms)
    }

    /// Formatted time-of-day for the log list
    pub fn formatted_time(&self) -> String {
        self.timestamp()
            .map(|ts| ts.format("%H:%M:%S%.3f").to_string())
            .unwrap_or_default()
    }

    pub fn label(&self, key: &str) -> Option<&str> {
        self.labels.get(key).map(String::as_str)
    }
}
