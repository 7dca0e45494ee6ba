//! Keys as the app sees them.
//!
//! The TUI converts crossterm events into [`InputKey`] so the handler can be
//! driven from tests without a terminal.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    Char(char),
    /// Character pressed with Ctrl
    CharCtrl(char),

    Up,
    Down,
    Home,
    End,
    PageUp,
    PageDown,

    Enter,
    Esc,
    Tab,
    /// Shift+Tab
    BackTab,
}
