//! Main update function - handles state transitions (TEA pattern)

use logdetail_core::prelude::*;

use crate::details::DetailsRow;
use crate::filter::FilterMode;
use crate::message::Message;
use crate::state::{AppState, Focus, PAGE_SIZE};

use super::{keys::handle_key, UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Key(key) => match handle_key(state, key) {
            Some(msg) => UpdateResult::then(msg),
            None => UpdateResult::idle(),
        },

        Message::Quit => {
            state.should_quit = true;
            UpdateResult::idle()
        }

        // ─────────────────────────────────────────────────────────
        // Navigation
        // ─────────────────────────────────────────────────────────
        Message::MoveUp => {
            state.move_cursor(-1);
            UpdateResult::idle()
        }
        Message::MoveDown => {
            state.move_cursor(1);
            UpdateResult::idle()
        }
        Message::PageUp => {
            state.move_cursor(-(PAGE_SIZE as isize));
            UpdateResult::idle()
        }
        Message::PageDown => {
            state.move_cursor(PAGE_SIZE as isize);
            UpdateResult::idle()
        }
        Message::MoveToTop => {
            state.move_cursor_to_end(false);
            UpdateResult::idle()
        }
        Message::MoveToBottom => {
            state.move_cursor_to_end(true);
            UpdateResult::idle()
        }
        Message::ToggleFocus => {
            state.toggle_focus();
            UpdateResult::idle()
        }

        // ─────────────────────────────────────────────────────────
        // Details
        // ─────────────────────────────────────────────────────────
        Message::Activate => match state.focus {
            Focus::List => UpdateResult::then(Message::ToggleDetails),
            Focus::Details => UpdateResult::then(Message::OpenSelectedLink),
        },

        Message::ToggleDetails => {
            if state.selected_line().is_some() {
                state.toggle_details();
            }
            UpdateResult::idle()
        }

        Message::OpenSelectedLink => handle_open_selected_link(state),

        Message::ToggleStats => {
            if state.details_open {
                state.stats_open = !state.stats_open;
            }
            UpdateResult::idle()
        }

        // ─────────────────────────────────────────────────────────
        // Filters
        // ─────────────────────────────────────────────────────────
        Message::FilterSelectedLabel(mode) => {
            handle_filter_selected_label(state, mode);
            UpdateResult::idle()
        }

        Message::ClearFilters => {
            state.clear_filters();
            UpdateResult::idle()
        }

        // ─────────────────────────────────────────────────────────
        // Link results
        // ─────────────────────────────────────────────────────────
        Message::LinkOpened { url } => {
            state.set_status(format!("Opened {}", url));
            UpdateResult::idle()
        }

        Message::LinkFailed { error } => {
            warn!("Link failed: {}", error);
            state.set_status(error);
            UpdateResult::idle()
        }
    }
}

fn handle_open_selected_link(state: &mut AppState) -> UpdateResult {
    let Some(model) = state.details() else {
        return UpdateResult::idle();
    };

    let href = model
        .row(state.details_selected)
        .and_then(|row| row.links().first())
        .map(|link| link.href.clone());

    match href {
        Some(href) => UpdateResult::act(UpdateAction::OpenLink { href }),
        None => {
            state.set_status("No link on this row");
            UpdateResult::idle()
        }
    }
}

fn handle_filter_selected_label(state: &mut AppState, mode: FilterMode) {
    let Some(model) = state.details() else {
        return;
    };

    if !matches!(model.row(state.details_selected), Some(DetailsRow::Label(_))) {
        state.set_status("Only label rows can be filtered");
        return;
    }

    model.activate_filter(state.details_selected, mode, state);
}
