//! Terminal color palette (16-color safe)

use ratatui::style::Color;

pub const DEEPEST_BG: Color = Color::Black;

// --- Borders ---
pub const BORDER_DIM: Color = Color::DarkGray;
pub const BORDER_ACTIVE: Color = Color::Cyan;

// --- Accent ---
pub const ACCENT: Color = Color::Cyan;
pub const CONTRAST_FG: Color = Color::Black;

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Gray;
pub const TEXT_MUTED: Color = Color::DarkGray;

pub const KEY_HINT: Color = Color::Yellow;

// --- Log level colors ---
pub const LOG_CRITICAL: Color = Color::Magenta;
pub const LOG_ERROR: Color = Color::Red;
pub const LOG_WARNING: Color = Color::Yellow;
pub const LOG_INFO: Color = Color::Green;
pub const LOG_DEBUG: Color = Color::Blue;
pub const LOG_TRACE: Color = Color::LightBlue;
pub const LOG_UNKNOWN: Color = Color::DarkGray;

// --- Details table ---
pub const LINK: Color = Color::LightBlue;
pub const STATS_BAR: Color = Color::Cyan;
