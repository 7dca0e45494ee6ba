//! Rendering helpers for widget tests
//!
//! Widgets and whole frames are drawn into a `TestBackend` and inspected as
//! rows of text.

use logdetail_app::config::Settings;
use logdetail_app::{AppState, LogsDocument};
use logdetail_core::LogLine;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use ratatui::{Frame, Terminal};

pub const TEST_WIDTH: u16 = 80;
pub const TEST_HEIGHT: u16 = 24;

/// In-memory terminal with text queries over the last drawn frame
pub struct TestTerminal {
    terminal: Terminal<TestBackend>,
}

impl TestTerminal {
    pub fn new() -> Self {
        Self::with_size(TEST_WIDTH, TEST_HEIGHT)
    }

    pub fn with_size(width: u16, height: u16) -> Self {
        let terminal =
            Terminal::new(TestBackend::new(width, height)).expect("TestBackend never fails");
        Self { terminal }
    }

    pub fn area(&self) -> Rect {
        self.buffer().area
    }

    pub fn render_widget<W: Widget>(&mut self, widget: W, area: Rect) {
        self.draw_with(|frame| frame.render_widget(widget, area));
    }

    /// Draw a full frame, e.g. `term.draw_with(|frame| view(frame, &state))`
    pub fn draw_with<F>(&mut self, f: F)
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(f).expect("draw to TestBackend");
    }

    pub fn buffer(&self) -> &Buffer {
        self.terminal.backend().buffer()
    }

    /// Text of row `y`, one symbol per cell
    pub fn row_text(&self, y: u16) -> String {
        let buffer = self.buffer();
        if y >= buffer.area.height {
            return String::new();
        }
        (0..buffer.area.width)
            .map(|x| buffer[(x, y)].symbol())
            .collect()
    }

    /// Every row, newline-terminated
    pub fn content(&self) -> String {
        (0..self.area().height)
            .map(|y| self.row_text(y) + "\n")
            .collect()
    }

    pub fn buffer_contains(&self, text: &str) -> bool {
        self.content().contains(text)
    }

    /// Occurrences of `text` anywhere on screen
    pub fn count(&self, text: &str) -> usize {
        self.content().matches(text).count()
    }

    pub fn line_contains(&self, y: u16, text: &str) -> bool {
        self.row_text(y).contains(text)
    }

    /// First row containing `text`
    pub fn find_line(&self, text: &str) -> Option<u16> {
        (0..self.area().height).find(|&y| self.line_contains(y, text))
    }

    pub fn cell_at(&self, x: u16, y: u16) -> Option<&str> {
        let buffer = self.buffer();
        buffer.cell((x, y)).map(|cell| cell.symbol())
    }
}

impl Default for TestTerminal {
    fn default() -> Self {
        Self::new()
    }
}

/// AppState over `lines` with default settings
pub fn create_test_state(lines: Vec<LogLine>) -> AppState {
    AppState::new(LogsDocument::new(lines), Settings::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::widgets::Paragraph;

    #[test]
    fn test_default_size() {
        let term = TestTerminal::new();
        assert_eq!(term.area(), Rect::new(0, 0, TEST_WIDTH, TEST_HEIGHT));
    }

    #[test]
    fn test_text_queries() {
        let mut term = TestTerminal::with_size(20, 5);
        term.render_widget(Paragraph::new("ab ab ab"), term.area());

        assert!(term.buffer_contains("ab ab"));
        assert!(!term.buffer_contains("cd"));
        assert_eq!(term.count("ab"), 3);
        assert_eq!(term.find_line("ab"), Some(0));
        assert_eq!(term.cell_at(1, 0), Some("b"));
        assert_eq!(term.cell_at(30, 0), None);
        assert_eq!(term.row_text(9), "");
    }
}
