//! Header bar widget
//!
//! App title, loaded source name and the main keybindings.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::styles;

const KEY_HINTS: &[(&str, &str)] = &[
    ("Enter", "details"),
    ("Tab", "focus"),
    ("+/-", "filter"),
    ("s", "stats"),
    ("q", "quit"),
];

/// Main header showing app title, source name, and keybindings
pub struct MainHeader<'a> {
    source_name: Option<&'a str>,
}

impl<'a> MainHeader<'a> {
    pub fn new(source_name: Option<&'a str>) -> Self {
        Self { source_name }
    }

    fn hints_line() -> Line<'static> {
        let mut spans = Vec::new();
        for (key, action) in KEY_HINTS {
            spans.push(Span::styled(format!("[{}]", key), styles::keybinding()));
            spans.push(Span::styled(format!(" {} ", action), styles::text_muted()));
        }
        Line::from(spans)
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let title = Line::from(vec![
            Span::raw(" "),
            Span::styled("logdetail", styles::accent_bold()),
            Span::raw(" "),
            Span::styled("/", styles::text_muted()),
            Span::raw(" "),
            Span::styled(self.source_name.unwrap_or("stdin"), styles::text_secondary()),
        ]);
        let title_width = title.width() as u16;
        buf.set_line(inner.x, inner.y, &title, inner.width);

        // Hints are right-aligned and dropped when they would overlap the title
        let hints = Self::hints_line();
        let hints_width = hints.width() as u16;
        if title_width + hints_width + 1 <= inner.width {
            let x = inner.x + inner.width - hints_width;
            buf.set_line(x, inner.y, &hints, hints_width);
        }
    }
}
