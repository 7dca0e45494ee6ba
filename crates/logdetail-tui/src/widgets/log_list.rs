//! Log list widget
//!
//! One row per visible line: optional time-of-day, level and entry text.

use logdetail_core::{LogLevel, LogLine};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph, StatefulWidget, Widget},
};

use crate::theme::styles;

/// Scrollable list of the visible log lines
pub struct LogList<'a> {
    lines: &'a [LogLine],
    visible: &'a [usize],
    selected: usize,
    focused: bool,
    show_timestamps: bool,
    filtered: bool,
}

impl<'a> LogList<'a> {
    /// `visible` holds indices into `lines`; `selected` is a position in it
    pub fn new(lines: &'a [LogLine], visible: &'a [usize], selected: usize) -> Self {
        Self {
            lines,
            visible,
            selected,
            focused: true,
            show_timestamps: true,
            filtered: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn show_timestamps(mut self, show: bool) -> Self {
        self.show_timestamps = show;
        self
    }

    /// Mark the list as filtered (changes the title and empty message)
    pub fn filtered(mut self, filtered: bool) -> Self {
        self.filtered = filtered;
        self
    }

    fn item(&self, line: &'a LogLine) -> ListItem<'a> {
        let mut spans = Vec::with_capacity(4);
        if self.show_timestamps && line.timestamp_ms != 0 {
            spans.push(Span::styled(
                format!("{} ", line.formatted_time()),
                styles::text_muted(),
            ));
        }
        spans.push(Span::styled(
            format!("{:<5} ", level_tag(line.level)),
            styles::level(line.level),
        ));
        spans.push(Span::styled(line.entry.as_str(), styles::text_primary()));
        ListItem::new(Line::from(spans))
    }

    fn title(&self) -> String {
        if self.filtered {
            format!(" Logs ({} of {}, filtered) ", self.visible.len(), self.lines.len())
        } else {
            format!(" Logs ({}) ", self.lines.len())
        }
    }
}

/// Short level tag for the list column
fn level_tag(level: LogLevel) -> &'static str {
    match level {
        LogLevel::Trace => "TRACE",
        LogLevel::Debug => "DEBUG",
        LogLevel::Info => "INFO",
        LogLevel::Warning => "WARN",
        LogLevel::Error => "ERROR",
        LogLevel::Critical => "CRIT",
        LogLevel::Unknown => "-",
    }
}

impl Widget for LogList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.focused).title(self.title());

        if self.visible.is_empty() {
            let message = if self.filtered {
                "No lines match the active filters"
            } else {
                "No log lines"
            };
            Paragraph::new(Span::styled(message, styles::text_muted()))
                .alignment(Alignment::Center)
                .block(block)
                .render(area, buf);
            return;
        }

        let items: Vec<ListItem> = self
            .visible
            .iter()
            .filter_map(|&index| self.lines.get(index))
            .map(|line| self.item(line))
            .collect();

        let highlight = if self.focused {
            styles::focused_selected()
        } else {
            styles::unfocused_selected()
        };

        let list = List::new(items)
            .block(block)
            .highlight_style(highlight)
            .highlight_symbol("▶ ");

        let mut state = ListState::default().with_selected(Some(self.selected));
        StatefulWidget::render(list, area, buf, &mut state);
    }
}
