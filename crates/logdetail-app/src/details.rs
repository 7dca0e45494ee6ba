//! Log details model.
//!
//! Builds everything the details table shows for one log line:
//! - label rows, one per label, ordered by key
//! - reconciled fields: fields detected in the entry text, overlaid by the
//!   columns of the line's data frame row (a column replaces a detected field
//!   of the same name)
//! - the links of every field, from the injected [`FieldLinkResolver`]
//!
//! The model is rebuilt from its inputs on every render and never mutates
//! them.

use logdetail_core::{detect_fields, DetectedField, FrameRow, Labels, LogLevel, LogLine};
use serde::Serialize;

use crate::config::FieldSettings;
use crate::filter::FilterMode;
use crate::links::{FieldLink, FieldLinkResolver, FieldRef};

// ─────────────────────────────────────────────────────────────────────────────
// Labels
// ─────────────────────────────────────────────────────────────────────────────

/// One row of the labels section
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabelRow {
    pub key: String,
    pub value: String,
}

/// Build one row per label, in key order. Empty labels give no rows.
pub fn build_label_rows(labels: &Labels) -> Vec<LabelRow> {
    labels
        .iter()
        .map(|(key, value)| LabelRow {
            key: key.clone(),
            value: value.clone(),
        })
        .collect()
}

// ─────────────────────────────────────────────────────────────────────────────
// Field reconciliation
// ─────────────────────────────────────────────────────────────────────────────

/// Where a field's value came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldSource {
    /// Frame column at this index
    Column(usize),
    /// Parsed out of the entry text
    Detected,
}

/// A field name with its authoritative value, before link resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconciledField {
    pub name: String,
    pub value: String,
    pub source: FieldSource,
}

/// Options controlling field reconciliation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailsOptions {
    /// Read JSON object entries member by member
    pub parse_json: bool,
    /// Frame columns never shown as fields
    pub hidden_columns: Vec<String>,
}

impl Default for DetailsOptions {
    fn default() -> Self {
        Self::from(&FieldSettings::default())
    }
}

impl From<&FieldSettings> for DetailsOptions {
    fn from(settings: &FieldSettings) -> Self {
        Self {
            parse_json: settings.parse_json,
            hidden_columns: settings.hidden_columns.clone(),
        }
    }
}

impl DetailsOptions {
    fn is_hidden(&self, column: &str) -> bool {
        self.hidden_columns.iter().any(|c| c == column)
    }
}

/// Merge the fields detected in `entry` with the columns of `row`.
///
/// Phase one collects the detected fields. Phase two overlays every visible
/// column that has a value in the row: a column whose name matches a detected
/// field replaces its value, other columns are appended. The entry column,
/// hidden columns and missing cells never become fields.
pub fn reconcile_fields(
    entry: &str,
    row: Option<FrameRow<'_>>,
    options: &DetailsOptions,
) -> Vec<ReconciledField> {
    let mut fields: Vec<ReconciledField> = detect_fields(entry, options.parse_json)
        .into_iter()
        .map(|f| ReconciledField {
            name: f.name,
            value: f.value,
            source: FieldSource::Detected,
        })
        .collect();

    let Some(row) = row else {
        return fields;
    };

    for (index, column, value) in row.cells() {
        if options.is_hidden(&column.name) {
            continue;
        }
        match fields.iter_mut().find(|f| f.name == column.name) {
            Some(shadowed) => {
                shadowed.value = value.to_string();
                shadowed.source = FieldSource::Column(index);
            }
            None => fields.push(ReconciledField {
                name: column.name.clone(),
                value: value.to_string(),
                source: FieldSource::Column(index),
            }),
        }
    }

    fields
}

// ─────────────────────────────────────────────────────────────────────────────
// Resolved fields
// ─────────────────────────────────────────────────────────────────────────────

/// A field row as rendered: name, value and zero or more links
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedField {
    pub name: String,
    pub value: String,
    pub links: Vec<FieldLink>,
    pub source: FieldSource,
}

impl ResolvedField {
    pub fn has_links(&self) -> bool {
        !self.links.is_empty()
    }
}

fn resolve_field(
    field: ReconciledField,
    row: Option<FrameRow<'_>>,
    row_index: usize,
    resolver: &dyn FieldLinkResolver,
) -> ResolvedField {
    let column = match (field.source, row) {
        (FieldSource::Column(index), Some(row)) => row.frame().columns.get(index),
        _ => None,
    };

    let links = match column {
        Some(column) => resolver.field_links(FieldRef::Column(column), row_index),
        None => {
            let detected = DetectedField::new(field.name.as_str(), field.value.as_str());
            resolver.field_links(FieldRef::Detected(&detected), row_index)
        }
    };

    ResolvedField {
        name: field.name,
        value: field.value,
        links,
        source: field.source,
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// LogDetailsModel
// ─────────────────────────────────────────────────────────────────────────────

/// A selectable row of the details table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailsRow<'a> {
    Label(&'a LabelRow),
    Field(&'a ResolvedField),
}

impl<'a> DetailsRow<'a> {
    pub fn key(&self) -> &'a str {
        match self {
            DetailsRow::Label(label) => &label.key,
            DetailsRow::Field(field) => &field.name,
        }
    }

    pub fn value(&self) -> &'a str {
        match self {
            DetailsRow::Label(label) => &label.value,
            DetailsRow::Field(field) => &field.value,
        }
    }

    pub fn links(&self) -> &'a [FieldLink] {
        match self {
            DetailsRow::Label(_) => &[],
            DetailsRow::Field(field) => &field.links,
        }
    }

    pub fn is_label(&self) -> bool {
        matches!(self, DetailsRow::Label(_))
    }
}

/// Everything the details table renders for one line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogDetailsModel {
    /// Level marker; `None` for rows flagged with an error
    pub level_indicator: Option<LogLevel>,
    pub labels: Vec<LabelRow>,
    /// Fields with links first, then by name
    pub fields: Vec<ResolvedField>,
}

impl LogDetailsModel {
    /// Build the model for `line`, the `row_index`-th line of its document.
    ///
    /// `frame_row` must be the frame row for the same index, when the
    /// document has a frame covering it.
    pub fn build(
        line: &LogLine,
        row_index: usize,
        frame_row: Option<FrameRow<'_>>,
        resolver: &dyn FieldLinkResolver,
        options: &DetailsOptions,
    ) -> Self {
        debug_assert!(frame_row.map_or(true, |row| row.index() == row_index));

        let mut fields: Vec<ResolvedField> = reconcile_fields(&line.entry, frame_row, options)
            .into_iter()
            .map(|field| resolve_field(field, frame_row, row_index, resolver))
            .collect();

        fields.sort_by(|a, b| {
            b.has_links()
                .cmp(&a.has_links())
                .then_with(|| a.name.cmp(&b.name))
        });

        Self {
            level_indicator: (!line.has_error).then_some(line.level),
            labels: build_label_rows(&line.labels),
            fields,
        }
    }

    pub fn show_labels_section(&self) -> bool {
        !self.labels.is_empty()
    }

    pub fn show_fields_section(&self) -> bool {
        !self.fields.is_empty()
    }

    /// True when neither section is shown
    pub fn is_empty(&self) -> bool {
        !self.show_labels_section() && !self.show_fields_section()
    }

    /// Number of selectable rows (labels then fields)
    pub fn row_count(&self) -> usize {
        self.labels.len() + self.fields.len()
    }

    /// Selectable row at `index`, labels first
    pub fn row(&self, index: usize) -> Option<DetailsRow<'_>> {
        if index < self.labels.len() {
            return self.labels.get(index).map(DetailsRow::Label);
        }
        self.fields
            .get(index - self.labels.len())
            .map(DetailsRow::Field)
    }

    pub fn rows(&self) -> impl Iterator<Item = DetailsRow<'_>> {
        self.labels
            .iter()
            .map(DetailsRow::Label)
            .chain(self.fields.iter().map(DetailsRow::Field))
    }

    pub fn field(&self, name: &str) -> Option<&ResolvedField> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Pass a filter action on row `index` to `callbacks`.
    ///
    /// Only label rows carry filter actions; returns whether a callback ran.
    pub fn activate_filter(
        &self,
        index: usize,
        mode: FilterMode,
        callbacks: &mut dyn DetailsCallbacks,
    ) -> bool {
        let Some(DetailsRow::Label(label)) = self.row(index) else {
            return false;
        };
        match mode {
            FilterMode::Include => callbacks.filter_label(&label.key, &label.value),
            FilterMode::Exclude => callbacks.filter_out_label(&label.key, &label.value),
        }
        true
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Callbacks
// ─────────────────────────────────────────────────────────────────────────────

/// Host actions triggered from label rows.
///
/// Both methods default to doing nothing. Arguments are passed through
/// verbatim.
pub trait DetailsCallbacks {
    /// Show only lines carrying `key=value`
    fn filter_label(&mut self, _key: &str, _value: &str) {}

    /// Hide lines carrying `key=value`
    fn filter_out_label(&mut self, _key: &str, _value: &str) {}
}

/// Callbacks used when the host supplies none
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopCallbacks;

impl DetailsCallbacks for NoopCallbacks {}
