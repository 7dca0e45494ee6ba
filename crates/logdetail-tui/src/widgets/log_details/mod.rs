//! Log details table
//!
//! Renders a [`LogDetailsModel`] as a two-column table of key/value rows:
//! a "Log labels" section when the line has labels, a "Detected fields"
//! section when it has fields, and a placeholder when it has neither. Field
//! links are listed in a third column. A colored bar on the left marks the
//! line's level unless the line is flagged with an error.


use logdetail_app::{DetailsRow, LogDetailsModel, RowStats};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, StatefulWidget, Table, TableState, Widget},
};
use unicode_width::UnicodeWidthStr;

use super::StatsPanel;
use crate::theme::styles;

pub const LABELS_HEADING: &str = "Log labels";
pub const FIELDS_HEADING: &str = "Detected fields";
pub const NO_DETAILS: &str = "No details available";

/// Glyph of the level bar
pub const LEVEL_BAR: &str = "▌";

const MAX_KEY_WIDTH: usize = 30;
const LABEL_ACTIONS: &str = "+/-";

/// Details table for one log line
pub struct LogDetails<'a> {
    model: &'a LogDetailsModel,
    selected: Option<usize>,
    focused: bool,
    stats: Option<&'a RowStats>,
}

impl<'a> LogDetails<'a> {
    pub fn new(model: &'a LogDetailsModel) -> Self {
        Self {
            model,
            selected: None,
            focused: false,
            stats: None,
        }
    }

    /// Highlight selectable row `index` (labels first, then fields)
    pub fn selected(mut self, index: Option<usize>) -> Self {
        self.selected = index;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Show value statistics next to the table
    pub fn stats(mut self, stats: Option<&'a RowStats>) -> Self {
        self.stats = stats;
        self
    }

    fn key_width(&self) -> u16 {
        let widest = self
            .model
            .rows()
            .map(|row| row.key().width())
            .chain([LABELS_HEADING.width(), FIELDS_HEADING.width()])
            .max()
            .unwrap_or(0);
        widest.min(MAX_KEY_WIDTH) as u16
    }

    fn actions_width(&self) -> u16 {
        self.model
            .rows()
            .map(|row| actions_line(row).width())
            .max()
            .unwrap_or(0) as u16
    }

    fn render_table(&self, area: Rect, buf: &mut Buffer) {
        let mut rows = Vec::with_capacity(self.model.row_count() + 2);
        let mut highlighted = None;

        let mut sections = Vec::with_capacity(2);
        if self.model.show_labels_section() {
            sections.push((LABELS_HEADING, 0..self.model.labels.len()));
        }
        if self.model.show_fields_section() {
            let start = self.model.labels.len();
            sections.push((FIELDS_HEADING, start..self.model.row_count()));
        }

        for (heading, range) in sections {
            rows.push(Row::new([Cell::from(Span::styled(
                heading,
                styles::section_heading(),
            ))]));
            for index in range {
                let Some(row) = self.model.row(index) else {
                    continue;
                };
                if self.selected == Some(index) {
                    highlighted = Some(rows.len());
                }
                rows.push(Row::new([
                    Cell::from(Span::styled(row.key(), styles::text_secondary())),
                    Cell::from(Span::styled(row.value(), styles::text_primary())),
                    Cell::from(actions_line(row)),
                ]));
            }
        }

        let highlight = if self.focused {
            styles::focused_selected()
        } else {
            styles::unfocused_selected()
        };

        let table = Table::new(
            rows,
            [
                Constraint::Length(self.key_width()),
                Constraint::Min(8),
                Constraint::Length(self.actions_width()),
            ],
        )
        .column_spacing(2)
        .row_highlight_style(highlight);

        let mut state = TableState::default().with_selected(highlighted);
        StatefulWidget::render(table, area, buf, &mut state);
    }
}

/// Filter hint for label rows, link titles for field rows
fn actions_line(row: DetailsRow<'_>) -> Line<'_> {
    match row {
        DetailsRow::Label(_) => Line::from(Span::styled(LABEL_ACTIONS, styles::text_muted())),
        DetailsRow::Field(field) => {
            let mut spans = Vec::with_capacity(field.links.len() * 2);
            for (i, link) in field.links.iter().enumerate() {
                if i > 0 {
                    spans.push(Span::raw(" "));
                }
                spans.push(Span::styled(format!("↗ {}", link.title), styles::link()));
            }
            Line::from(spans)
        }
    }
}

impl Widget for LogDetails<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.focused).title(" Details ");
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width < 3 {
            return;
        }

        let content = match self.model.level_indicator {
            Some(level) => {
                for y in inner.top()..inner.bottom() {
                    buf.set_string(inner.x, y, LEVEL_BAR, styles::level(level));
                }
                Rect {
                    x: inner.x + 2,
                    width: inner.width - 2,
                    ..inner
                }
            }
            None => inner,
        };

        if self.model.is_empty() {
            Paragraph::new(Span::styled(NO_DETAILS, styles::text_muted())).render(content, buf);
            return;
        }

        match self.stats {
            Some(stats) => {
                let [table_area, stats_area] =
                    Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)])
                        .areas(content);
                self.render_table(table_area, buf);
                StatsPanel::new(stats).render(stats_area, buf);
            }
            None => self.render_table(content, buf),
        }
    }
}
