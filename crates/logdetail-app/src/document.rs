//! Log documents: the lines shown in the list plus their backing frame.
//!
//! Two file formats are accepted:
//! - `.json`: `{ "lines": [...], "frame": { "columns": [...] }, "entry_column": "entry" }`.
//!   Every member is optional. When `lines` is empty the lines are built
//!   from the frame's entry column.
//! - anything else: plain text, one entry per non-empty line.

use std::io::Read;
use std::path::Path;

use chrono::DateTime;
use logdetail_core::prelude::*;
use logdetail_core::{DataFrame, FrameRow, LogLevel, LogLine};
use serde::Deserialize;

/// Entry column used when a document names none
pub const DEFAULT_ENTRY_COLUMN: &str = "entry";

#[derive(Debug, Default, Deserialize)]
struct RawDocument {
    #[serde(default)]
    lines: Vec<LogLine>,
    #[serde(default)]
    frame: Option<DataFrame>,
    #[serde(default)]
    entry_column: Option<String>,
}

/// Lines and the optional frame backing them. Row `i` of the frame belongs
/// to line `i`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LogsDocument {
    lines: Vec<LogLine>,
    frame: Option<DataFrame>,
    entry_column: usize,
}

impl LogsDocument {
    pub fn new(lines: Vec<LogLine>) -> Self {
        Self {
            lines: with_default_uids(lines),
            frame: None,
            entry_column: 0,
        }
    }

    /// Attach `frame`, with raw entries in column `entry_column`
    pub fn with_frame(mut self, frame: DataFrame, entry_column: usize) -> Self {
        self.frame = Some(frame);
        self.entry_column = entry_column;
        self
    }

    /// Load a document, choosing the format from the file extension
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::document_not_found(path));
        }
        let content = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let document = if is_json {
            Self::from_json(&content)?
        } else {
            Self::from_text(&content)
        };
        info!(
            "Loaded {} lines from {:?} (frame: {})",
            document.len(),
            path,
            document.frame.is_some()
        );
        Ok(document)
    }

    /// Read a plain-text document from `reader` (usually stdin)
    pub fn read_text(mut reader: impl Read) -> Result<Self> {
        let mut content = String::new();
        reader.read_to_string(&mut content)?;
        Ok(Self::from_text(&content))
    }

    /// Parse a JSON document
    pub fn from_json(content: &str) -> Result<Self> {
        let raw: RawDocument = serde_json::from_str(content)
            .map_err(|e| Error::document_invalid(e.to_string()))?;

        let Some(frame) = raw.frame else {
            return Ok(Self::new(raw.lines));
        };

        let entry_name = raw.entry_column.as_deref().unwrap_or(DEFAULT_ENTRY_COLUMN);
        let entry_column = match frame.column_index(entry_name) {
            Some(index) => index,
            None if raw.entry_column.is_some() => {
                return Err(Error::document_invalid(format!(
                    "entry column {:?} not found in frame",
                    entry_name
                )));
            }
            // No entry column: every column is a field
            None => frame.columns.len(),
        };

        let lines = if raw.lines.is_empty() {
            lines_from_frame(&frame, entry_column)
        } else {
            raw.lines
        };

        if lines.len() != frame.len() {
            warn!(
                "Document has {} lines but its frame has {} rows",
                lines.len(),
                frame.len()
            );
        }

        Ok(Self::new(lines).with_frame(frame, entry_column))
    }

    /// Parse plain text, one entry per non-empty line
    pub fn from_text(content: &str) -> Self {
        let lines = content
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(parse_text_line)
            .collect();
        Self::new(lines)
    }

    pub fn lines(&self) -> &[LogLine] {
        &self.lines
    }

    pub fn line(&self, index: usize) -> Option<&LogLine> {
        self.lines.get(index)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn frame(&self) -> Option<&DataFrame> {
        self.frame.as_ref()
    }

    pub fn entry_column(&self) -> usize {
        self.entry_column
    }

    /// Frame row backing line `index`, if the frame covers it
    pub fn frame_row(&self, index: usize) -> Option<FrameRow<'_>> {
        self.frame
            .as_ref()
            .and_then(|frame| frame.row(index, self.entry_column))
    }
}

fn with_default_uids(mut lines: Vec<LogLine>) -> Vec<LogLine> {
    for (index, line) in lines.iter_mut().enumerate() {
        if line.uid.is_empty() {
            line.uid = index.to_string();
        }
    }
    lines
}

fn lines_from_frame(frame: &DataFrame, entry_column: usize) -> Vec<LogLine> {
    (0..frame.len())
        .map(|index| {
            let entry = frame
                .row(index, entry_column)
                .and_then(|row| row.entry())
                .unwrap_or_default();
            LogLine::new(entry).with_level(LogLevel::detect(entry))
        })
        .collect()
}

/// Plain-text line: optional RFC 3339 timestamp prefix, level from keywords
fn parse_text_line(text: &str) -> LogLine {
    let text = text.trim_end();
    let mut line = LogLine::new(text).with_level(LogLevel::detect(text));

    if let Some(first) = text.split_whitespace().next() {
        if let Ok(ts) = DateTime::parse_from_rfc3339(first) {
            line = line.with_timestamp_ms(ts.timestamp_millis());
        }
    }

    line
}
