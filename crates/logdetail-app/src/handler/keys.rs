//! Key event handlers

use crate::filter::FilterMode;
use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, Focus};

/// Convert key events to messages based on the focused pane
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        // Quit
        InputKey::Char('q') | InputKey::Esc | InputKey::CharCtrl('c') => Some(Message::Quit),

        // Navigation
        InputKey::Char('j') | InputKey::Down => Some(Message::MoveDown),
        InputKey::Char('k') | InputKey::Up => Some(Message::MoveUp),
        InputKey::Char('g') | InputKey::Home => Some(Message::MoveToTop),
        InputKey::Char('G') | InputKey::End => Some(Message::MoveToBottom),
        InputKey::PageUp => Some(Message::PageUp),
        InputKey::PageDown => Some(Message::PageDown),
        InputKey::Tab | InputKey::BackTab => Some(Message::ToggleFocus),

        InputKey::Enter => Some(Message::Activate),

        // Details table actions
        InputKey::Char('+' | '=') if state.focus == Focus::Details => {
            Some(Message::FilterSelectedLabel(FilterMode::Include))
        }
        InputKey::Char('-') if state.focus == Focus::Details => {
            Some(Message::FilterSelectedLabel(FilterMode::Exclude))
        }
        InputKey::Char('s') if state.details_open => Some(Message::ToggleStats),
        InputKey::Char('o') if state.focus == Focus::Details => Some(Message::OpenSelectedLink),

        InputKey::Char('c') => Some(Message::ClearFilters),

        _ => None,
    }
}
