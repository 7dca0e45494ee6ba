//! Message types for the application (TEA pattern)

use crate::filter::FilterMode;
use crate::input_key::InputKey;

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    // ─────────────────────────────────────────────────────────
    // Navigation (applies to the focused pane)
    // ─────────────────────────────────────────────────────────
    MoveUp,
    MoveDown,
    MoveToTop,
    MoveToBottom,
    PageUp,
    PageDown,

    /// Switch focus between the log list and the details table
    ToggleFocus,

    // ─────────────────────────────────────────────────────────
    // Details
    // ─────────────────────────────────────────────────────────
    /// Enter: expand/collapse details, or follow a link in the details table
    Activate,
    /// Show or hide details for the selected line
    ToggleDetails,
    /// Follow the first link of the selected details row
    OpenSelectedLink,
    /// Show or hide value statistics for the selected details row
    ToggleStats,

    // ─────────────────────────────────────────────────────────
    // Filters
    // ─────────────────────────────────────────────────────────
    /// Filter by the selected label row
    FilterSelectedLabel(FilterMode),
    ClearFilters,

    // ─────────────────────────────────────────────────────────
    // Link results (from the action handler)
    // ─────────────────────────────────────────────────────────
    LinkOpened { url: String },
    LinkFailed { error: String },

    Quit,
}
