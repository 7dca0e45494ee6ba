//! Named styles used by the widgets

use logdetail_core::LogLevel;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType};

use super::palette;

// --- Text styles ---
pub const fn text_primary() -> Style {
    Style::new().fg(palette::TEXT_PRIMARY)
}

pub const fn text_secondary() -> Style {
    Style::new().fg(palette::TEXT_SECONDARY)
}

pub const fn text_muted() -> Style {
    Style::new().fg(palette::TEXT_MUTED)
}

// --- Border styles ---
pub const fn border_inactive() -> Style {
    Style::new().fg(palette::BORDER_DIM)
}

pub const fn border_active() -> Style {
    Style::new().fg(palette::BORDER_ACTIVE)
}

// --- Accent styles ---
pub const fn accent() -> Style {
    Style::new().fg(palette::ACCENT)
}

pub const fn accent_bold() -> Style {
    Style::new()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

pub const fn keybinding() -> Style {
    Style::new().fg(palette::KEY_HINT)
}

// --- Selection styles ---

/// "Black on Cyan" for the selected row of the focused pane
pub const fn focused_selected() -> Style {
    Style::new()
        .fg(palette::CONTRAST_FG)
        .bg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

/// Selected row of an unfocused pane
pub const fn unfocused_selected() -> Style {
    Style::new().add_modifier(Modifier::REVERSED)
}

// --- Details table ---
pub const fn section_heading() -> Style {
    Style::new()
        .fg(palette::TEXT_SECONDARY)
        .add_modifier(Modifier::BOLD.union(Modifier::UNDERLINED))
}

pub const fn link() -> Style {
    Style::new()
        .fg(palette::LINK)
        .add_modifier(Modifier::UNDERLINED)
}

pub const fn level_color(level: LogLevel) -> Color {
    match level {
        LogLevel::Critical => palette::LOG_CRITICAL,
        LogLevel::Error => palette::LOG_ERROR,
        LogLevel::Warning => palette::LOG_WARNING,
        LogLevel::Info => palette::LOG_INFO,
        LogLevel::Debug => palette::LOG_DEBUG,
        LogLevel::Trace => palette::LOG_TRACE,
        LogLevel::Unknown => palette::LOG_UNKNOWN,
    }
}

pub const fn level(level: LogLevel) -> Style {
    Style::new().fg(level_color(level))
}

// --- Block builders ---
pub fn glass_block(focused: bool) -> Block<'static> {
    Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            border_active()
        } else {
            border_inactive()
        })
}
