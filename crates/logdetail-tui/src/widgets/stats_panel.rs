//! Value statistics panel for a details row

use logdetail_app::{LabelStat, RowStats};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthChar;

use crate::theme::{palette, styles};

/// Width of the " 100% (n)" suffix budget
const SUFFIX_WIDTH: usize = 12;

/// Top values of a label or field, with proportion bars
pub struct StatsPanel<'a> {
    stats: &'a RowStats,
}

impl<'a> StatsPanel<'a> {
    pub fn new(stats: &'a RowStats) -> Self {
        Self { stats }
    }

    fn stat_line(stat: &LabelStat, value_width: usize, bar_width: usize) -> Line<'static> {
        let filled = ((stat.proportion * bar_width as f64).round() as usize).min(bar_width);
        let percent = (stat.proportion * 100.0).round() as u32;
        Line::from(vec![
            Span::styled(
                format!("{:<width$} ", truncate(&stat.value, value_width), width = value_width),
                styles::text_primary(),
            ),
            Span::styled("█".repeat(filled), Style::default().fg(palette::STATS_BAR)),
            Span::styled(
                format!("{} {:>3}% ({})", " ".repeat(bar_width - filled), percent, stat.count),
                styles::text_muted(),
            ),
        ])
    }
}

/// Cut `text` to at most `width` terminal columns, marking the cut with `…`
pub fn truncate(text: &str, width: usize) -> String {
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > width {
            if width > 0 {
                // Make room for the ellipsis
                while used + 1 > width {
                    match out.pop() {
                        Some(c) => used -= c.width().unwrap_or(0),
                        None => break,
                    }
                }
                out.push('…');
            }
            return out;
        }
        out.push(ch);
        used += w;
    }
    out
}

impl Widget for StatsPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let summary = &self.stats.summary;
        let title = format!(" {} ({}) ", self.stats.key, summary.total);
        let block = styles::glass_block(false).title(title);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        if summary.is_empty() {
            Paragraph::new(Span::styled("No values", styles::text_muted())).render(inner, buf);
            return;
        }

        let width = inner.width as usize;
        let value_width = (width / 3).max(1);
        let bar_width = width.saturating_sub(value_width + 1 + SUFFIX_WIDTH);

        let lines: Vec<Line> = summary
            .rows()
            .map(|stat| Self::stat_line(stat, value_width, bar_width))
            .collect();
        Paragraph::new(lines).render(inner, buf);
    }
}
