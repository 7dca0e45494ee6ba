//! Application state (Model in TEA pattern)

use logdetail_core::prelude::*;
use logdetail_core::LogLine;

use crate::config::Settings;
use crate::details::{DetailsCallbacks, DetailsOptions, DetailsRow, FieldSource, LogDetailsModel};
use crate::document::LogsDocument;
use crate::filter::{FilterMode, LabelFilter, LabelFilters};
use crate::links::TemplateLinks;
use crate::stats::{
    calculate_column_stats, calculate_field_stats, calculate_label_stats, StatsSummary,
};

/// Lines moved by PageUp/PageDown
pub const PAGE_SIZE: usize = 10;

/// Which pane receives navigation keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    List,
    Details,
}

/// Value statistics for one details row
#[derive(Debug, Clone, PartialEq)]
pub struct RowStats {
    /// Label key or field name the stats were computed for
    pub key: String,
    pub summary: StatsSummary,
}

/// Complete application state
#[derive(Debug)]
pub struct AppState {
    pub settings: Settings,
    pub document: LogsDocument,
    pub filters: LabelFilters,

    /// Name of the loaded file, shown in the header
    pub source_name: Option<String>,

    /// Document indices of the lines passing the filters
    visible: Vec<usize>,

    /// Selected position in `visible`
    pub selected: usize,

    /// Details panel shown for the selected line
    pub details_open: bool,

    pub focus: Focus,

    /// Selected row of the details table (labels first, then fields)
    pub details_selected: usize,

    /// Stats panel shown for the selected details row
    pub stats_open: bool,

    /// Transient message for the status bar
    pub status: Option<String>,

    pub should_quit: bool,

    resolver: TemplateLinks,
    options: DetailsOptions,
}

impl AppState {
    pub fn new(document: LogsDocument, settings: Settings) -> Self {
        let visible = (0..document.len()).collect();
        Self {
            resolver: TemplateLinks::from_settings(&settings),
            options: DetailsOptions::from(&settings.fields),
            settings,
            document,
            filters: LabelFilters::new(),
            source_name: None,
            visible,
            selected: 0,
            details_open: false,
            focus: Focus::List,
            details_selected: 0,
            stats_open: false,
            status: None,
            should_quit: false,
        }
    }

    pub fn with_source_name(mut self, name: impl Into<String>) -> Self {
        self.source_name = Some(name.into());
        self
    }

    /// Select document line `index` and open its details
    pub fn open_line(&mut self, index: usize) -> Result<()> {
        let Some(position) = self.visible.iter().position(|&i| i == index) else {
            return Err(Error::RowOutOfRange {
                index,
                len: self.document.len(),
            });
        };
        self.select(position);
        self.details_open = true;
        Ok(())
    }

    // ─────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────

    /// Document indices of the visible lines, in order
    pub fn visible(&self) -> &[usize] {
        &self.visible
    }

    pub fn selected_line_index(&self) -> Option<usize> {
        self.visible.get(self.selected).copied()
    }

    pub fn selected_line(&self) -> Option<&LogLine> {
        self.selected_line_index()
            .and_then(|index| self.document.line(index))
    }

    /// Details of document line `index`, rebuilt from the document
    pub fn details_for(&self, index: usize) -> Option<LogDetailsModel> {
        let line = self.document.line(index)?;
        Some(LogDetailsModel::build(
            line,
            index,
            self.document.frame_row(index),
            &self.resolver,
            &self.options,
        ))
    }

    /// Details of the selected line while the details panel is open
    pub fn details(&self) -> Option<LogDetailsModel> {
        if !self.details_open {
            return None;
        }
        self.selected_line_index()
            .and_then(|index| self.details_for(index))
    }

    /// Stats for the selected details row while the stats panel is open
    pub fn selected_row_stats(&self) -> Option<RowStats> {
        if !self.stats_open {
            return None;
        }
        let model = self.details()?;
        let row = model.row(self.details_selected)?;
        let lines = self.document.lines();

        let stats = match row {
            DetailsRow::Label(label) => calculate_label_stats(lines, &label.key),
            DetailsRow::Field(field) => match (field.source, self.document.frame()) {
                (FieldSource::Column(index), Some(frame)) => frame
                    .columns
                    .get(index)
                    .map(calculate_column_stats)
                    .unwrap_or_default(),
                _ => calculate_field_stats(lines, &field.name, self.options.parse_json),
            },
        };

        Some(RowStats {
            key: row.key().to_string(),
            summary: StatsSummary::new(stats, self.settings.ui.stats_limit),
        })
    }

    // ─────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status = Some(message.into());
    }

    /// Select visible position `position`, resetting the details cursor
    /// when a different line ends up selected
    pub fn select(&mut self, position: usize) {
        let previous = self.selected_line_index();
        self.place_cursor(position, previous);
    }

    /// Move the list cursor; `previous` is the document line selected before
    fn place_cursor(&mut self, position: usize, previous: Option<usize>) {
        self.selected = position.min(self.visible.len().saturating_sub(1));
        if self.selected_line_index() != previous {
            self.details_selected = 0;
            self.stats_open = false;
        }
    }

    /// Move the cursor of the focused pane by `delta` rows
    pub fn move_cursor(&mut self, delta: isize) {
        match self.focus {
            Focus::List => {
                let target = self.selected.saturating_add_signed(delta);
                self.select(target);
            }
            Focus::Details => {
                let rows = self.details().map_or(0, |m| m.row_count());
                let target = self.details_selected.saturating_add_signed(delta);
                self.details_selected = target.min(rows.saturating_sub(1));
            }
        }
    }

    /// Move the cursor of the focused pane to the first or last row
    pub fn move_cursor_to_end(&mut self, last: bool) {
        self.move_cursor(if last { isize::MAX } else { isize::MIN });
    }

    pub fn toggle_details(&mut self) {
        self.details_open = !self.details_open;
        self.details_selected = 0;
        self.stats_open = false;
        if !self.details_open {
            self.focus = Focus::List;
        }
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::List if self.details_open => Focus::Details,
            _ => Focus::List,
        };
    }

    /// Recompute the visible lines, keeping the selected line when it passes
    pub fn refresh_visible(&mut self) {
        let previous = self.selected_line_index();
        self.visible = self.filters.visible_indices(self.document.lines());

        let position = previous
            .and_then(|index| self.visible.iter().position(|&i| i == index))
            .unwrap_or(self.selected);
        self.place_cursor(position, previous);
        debug!(
            "{} of {} lines visible with {} filters",
            self.visible.len(),
            self.document.len(),
            self.filters.len()
        );
    }

    fn apply_filter(&mut self, key: &str, value: &str, mode: FilterMode) {
        let filter = LabelFilter::new(key, value, mode);
        self.set_status(format!("Filter {}", filter));
        self.filters.add(filter);
        self.refresh_visible();
    }

    pub fn clear_filters(&mut self) {
        self.filters.clear();
        self.refresh_visible();
        self.set_status("Filters cleared");
    }
}

impl DetailsCallbacks for AppState {
    fn filter_label(&mut self, key: &str, value: &str) {
        self.apply_filter(key, value, FilterMode::Include);
    }

    fn filter_out_label(&mut self, key: &str, value: &str) {
        self.apply_filter(key, value, FilterMode::Exclude);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use logdetail_core::{Column, DataFrame, LinkTemplate};

    fn state() -> AppState {
        let lines = vec![
            LogLine::new("status=200 path=/a").with_label("app", "api"),
            LogLine::new("status=500 path=/b").with_label("app", "web"),
            LogLine::new("status=200 path=/c").with_label("app", "api"),
        ];
        AppState::new(LogsDocument::new(lines), Settings::default())
    }

    #[test]
    fn test_new_state_shows_all_lines() {
        let state = state();
        assert_eq!(state.visible(), &[0, 1, 2]);
        assert_eq!(state.selected_line_index(), Some(0));
        assert!(state.details().is_none());
    }

    #[test]
    fn test_list_cursor_is_clamped() {
        let mut state = state();
        state.move_cursor(-1);
        assert_eq!(state.selected, 0);
        state.move_cursor(10);
        assert_eq!(state.selected, 2);
        state.move_cursor_to_end(false);
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn test_details_cursor_is_clamped_to_rows() {
        let mut state = state();
        state.toggle_details();
        state.toggle_focus();
        assert_eq!(state.focus, Focus::Details);

        // 1 label + 2 fields
        state.move_cursor_to_end(true);
        assert_eq!(state.details_selected, 2);
        state.move_cursor(-5);
        assert_eq!(state.details_selected, 0);
    }

    #[test]
    fn test_focus_stays_on_list_without_details() {
        let mut state = state();
        state.toggle_focus();
        assert_eq!(state.focus, Focus::List);
    }

    #[test]
    fn test_changing_line_resets_details_cursor() {
        let mut state = state();
        state.toggle_details();
        state.details_selected = 2;
        state.stats_open = true;
        state.select(1);
        assert_eq!(state.details_selected, 0);
        assert!(!state.stats_open);
    }

    #[test]
    fn test_filter_callbacks_update_visible_lines() {
        let mut state = state();
        state.select(2);
        state.filter_label("app", "api");
        assert_eq!(state.visible(), &[0, 2]);
        // Selected line survives the filter
        assert_eq!(state.selected_line_index(), Some(2));
        assert_eq!(state.status.as_deref(), Some("Filter app=\"api\""));

        state.filter_out_label("app", "api");
        assert_eq!(state.visible(), &[1]);
        assert_eq!(state.selected_line_index(), Some(1));

        state.clear_filters();
        assert_eq!(state.visible().len(), 3);
    }

    #[test]
    fn test_open_line() {
        let mut state = state();
        state.open_line(1).unwrap();
        assert_eq!(state.selected_line_index(), Some(1));
        assert!(state.details().is_some());

        let err = state.open_line(7).unwrap_err();
        assert!(matches!(err, Error::RowOutOfRange { index: 7, len: 3 }));
    }

    #[test]
    fn test_stats_for_label_and_field_rows() {
        let mut state = state();
        state.toggle_details();
        state.stats_open = true;

        let stats = state.selected_row_stats().unwrap();
        assert_eq!(stats.key, "app");
        assert_eq!(stats.summary.entries[0].value, "api");
        assert_eq!(stats.summary.entries[0].count, 2);

        // Fields sort by name: path, status
        state.details_selected = 2;
        let stats = state.selected_row_stats().unwrap();
        assert_eq!(stats.key, "status");
        assert_eq!(stats.summary.entries[0].value, "200");
    }

    #[test]
    fn test_stats_for_column_field_use_column_values() {
        let frame = DataFrame::new(vec![
            Column::new("entry", ["a", "b", "c"]),
            Column::new("traceId", ["t1", "t2", "t1"])
                .with_link(LinkTemplate::new("link", "localhost:3210/${__value.text}")),
        ]);
        let document = LogsDocument::new(vec![
            LogLine::new("a"),
            LogLine::new("b"),
            LogLine::new("c"),
        ])
        .with_frame(frame, 0);
        let mut state = AppState::new(document, Settings::default());
        state.toggle_details();
        state.stats_open = true;

        let stats = state.selected_row_stats().unwrap();
        assert_eq!(stats.key, "traceId");
        assert_eq!(stats.summary.entries[0].value, "t1");
        assert_eq!(stats.summary.entries[0].count, 2);
    }

    #[test]
    fn test_stats_for_json_field_follow_parse_json() {
        let lines = vec![
            LogLine::new(r#"{"status":"404"}"#),
            LogLine::new(r#"{"status":"404"}"#),
        ];
        let mut settings = Settings::default();
        settings.fields.parse_json = true;
        let mut state = AppState::new(LogsDocument::new(lines), settings);
        state.toggle_details();
        state.stats_open = true;

        let stats = state.selected_row_stats().unwrap();
        assert_eq!(stats.key, "status");
        assert_eq!(stats.summary.total, 2);
        assert_eq!(stats.summary.entries[0].value, "404");
    }

    #[test]
    fn test_filter_replacing_selected_line_resets_details_cursor() {
        let mut state = state();
        state.select(1);
        state.toggle_details();
        state.details_selected = 1;
        state.stats_open = true;

        // Line 1 is hidden and line 2 slides into position 1
        state.filter_out_label("app", "web");
        assert_eq!(state.selected, 1);
        assert_eq!(state.selected_line_index(), Some(2));
        assert_eq!(state.details_selected, 0);
        assert!(!state.stats_open);
    }

    #[test]
    fn test_filter_keeping_selected_line_keeps_details_cursor() {
        let mut state = state();
        state.toggle_details();
        state.details_selected = 1;
        state.stats_open = true;

        state.filter_out_label("app", "web");
        assert_eq!(state.selected_line_index(), Some(0));
        assert_eq!(state.details_selected, 1);
        assert!(state.stats_open);
    }
}
