//! Column-oriented data frames backing a set of log lines.
//!
//! Row `i` of a frame belongs to log line `i`. One column (the entry column)
//! holds the raw entry text; the others carry structured values that may
//! shadow fields detected in the entry, and may declare link templates.

use serde::{Deserialize, Serialize};

/// Placeholder in a link template that is replaced with the cell's text value
pub const VALUE_TEXT_MARKER: &str = "${__value.text}";

// ─────────────────────────────────────────────────────────────────────────────
// Links
// ─────────────────────────────────────────────────────────────────────────────

/// Where a followed link should open
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LinkTarget {
    /// New window / tab
    #[default]
    #[serde(rename = "_blank")]
    Blank,
    /// Current window
    #[serde(rename = "_self")]
    Current,
}

impl LinkTarget {
    pub fn as_str(&self) -> &'static str {
        match self {
            LinkTarget::Blank => "_blank",
            LinkTarget::Current => "_self",
        }
    }
}

/// A link declared on a column (or configured for a field name)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkTemplate {
    /// Text shown for the link
    pub title: String,
    /// Destination; may contain [`VALUE_TEXT_MARKER`]
    pub url: String,
    #[serde(default)]
    pub target: LinkTarget,
}

impl LinkTemplate {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            target: LinkTarget::default(),
        }
    }

    /// Substitute the cell value into the URL (a single literal replace).
    pub fn interpolate(&self, value: &str) -> String {
        self.url.replace(VALUE_TEXT_MARKER, value)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Columns
// ─────────────────────────────────────────────────────────────────────────────

/// Per-column display configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnConfig {
    #[serde(default)]
    pub links: Vec<LinkTemplate>,
}

/// A named column of optional string cells
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    #[serde(default)]
    pub values: Vec<Option<String>>,
    #[serde(default)]
    pub config: ColumnConfig,
}

impl Column {
    pub fn new<I, S>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            values: values.into_iter().map(|v| Some(v.into())).collect(),
            config: ColumnConfig::default(),
        }
    }

    /// Add a link template to this column
    pub fn with_link(mut self, link: LinkTemplate) -> Self {
        self.config.links.push(link);
        self
    }

    /// Cell value at `row`; `None` when the cell is missing or out of range
    pub fn value(&self, row: usize) -> Option<&str> {
        self.values.get(row).and_then(|v| v.as_deref())
    }

    pub fn has_links(&self) -> bool {
        !self.config.links.is_empty()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// DataFrame
// ─────────────────────────────────────────────────────────────────────────────

/// Column-oriented table
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataFrame {
    #[serde(default)]
    pub columns: Vec<Column>,
}

impl DataFrame {
    pub fn new(columns: Vec<Column>) -> Self {
        Self { columns }
    }

    /// Number of rows (length of the longest column)
    pub fn len(&self) -> usize {
        self.columns.iter().map(|c| c.values.len()).max().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    /// View of row `index`, with `entry_column` marking the raw entry column.
    ///
    /// Returns `None` when `index` is out of range.
    pub fn row(&self, index: usize, entry_column: usize) -> Option<FrameRow<'_>> {
        FrameRow::new(self, index, entry_column)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// FrameRow
// ─────────────────────────────────────────────────────────────────────────────

/// Read-only view of one row of a [`DataFrame`]
#[derive(Debug, Clone, Copy)]
pub struct FrameRow<'a> {
    frame: &'a DataFrame,
    index: usize,
    entry_column: usize,
}

impl<'a> FrameRow<'a> {
    /// Create a row view. `None` if `index` is past the end of the frame.
    pub fn new(frame: &'a DataFrame, index: usize, entry_column: usize) -> Option<Self> {
        (index < frame.len()).then_some(Self {
            frame,
            index,
            entry_column,
        })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn frame(&self) -> &'a DataFrame {
        self.frame
    }

    pub fn entry_column(&self) -> usize {
        self.entry_column
    }

    /// Raw entry text stored in the entry column, if any
    pub fn entry(&self) -> Option<&'a str> {
        self.frame
            .columns
            .get(self.entry_column)
            .and_then(|c| c.value(self.index))
    }

    /// Iterate `(column_index, column, value)` for every non-entry column
    /// that has a value in this row.
    pub fn cells(&self) -> impl Iterator<Item = (usize, &'a Column, &'a str)> + 'a {
        let frame = self.frame;
        let index = self.index;
        let entry_column = self.entry_column;
        frame
            .columns
            .iter()
            .enumerate()
            .filter(move |(i, _)| *i != entry_column)
            .filter_map(move |(i, column)| column.value(index).map(|v| (i, column, v)))
    }
}
