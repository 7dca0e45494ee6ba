//! Status bar widget
//!
//! Focused pane, line counts, active filters and the last status message.

use logdetail_app::{AppState, Focus};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::styles;

/// Single-line status bar
pub struct StatusBar<'a> {
    state: &'a AppState,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn focus_span(&self) -> Span<'static> {
        let label = match self.state.focus {
            Focus::List => " LIST ",
            Focus::Details => " DETAILS ",
        };
        Span::styled(label, styles::focused_selected())
    }

    fn position_span(&self) -> Span<'static> {
        let visible = self.state.visible().len();
        let position = if visible == 0 {
            0
        } else {
            self.state.selected + 1
        };
        Span::styled(format!(" {}/{} ", position, visible), styles::text_secondary())
    }

    fn filter_spans(&self) -> Vec<Span<'static>> {
        if self.state.filters.is_empty() {
            return Vec::new();
        }
        let filters: Vec<String> = self.state.filters.iter().map(|f| f.to_string()).collect();
        vec![
            Span::styled("│ ", styles::text_muted()),
            Span::styled(format!("{{{}}} ", filters.join(", ")), styles::accent()),
            Span::styled("[c] clear ", styles::text_muted()),
        ]
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let mut spans = vec![self.focus_span(), self.position_span()];
        spans.extend(self.filter_spans());
        let left = Line::from(spans);
        let left_width = left.width() as u16;
        buf.set_line(area.x, area.y, &left, area.width);

        if let Some(status) = &self.state.status {
            let message = Line::from(Span::styled(format!("{} ", status), styles::keybinding()));
            let width = message.width() as u16;
            if left_width + width < area.width {
                buf.set_line(area.x + area.width - width, area.y, &message, width);
            }
        }
    }
}
