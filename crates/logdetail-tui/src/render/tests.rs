//! Full-frame rendering tests

use super::*;
use crate::test_utils::{create_test_state, TestTerminal};
use crate::widgets::log_details::{FIELDS_HEADING, LABELS_HEADING, NO_DETAILS};
use logdetail_app::{process_message, Message};
use logdetail_core::LogLine;

fn state() -> AppState {
    create_test_state(vec![
        LogLine::new("level=info msg=started port=8080").with_label("app", "api"),
        LogLine::new("plain text line"),
    ])
    .with_source_name("app.log")
}

fn draw(state: &AppState) -> TestTerminal {
    let mut term = TestTerminal::new();
    term.draw_with(|frame| view(frame, state));
    term
}

#[test]
fn test_initial_view_shows_list_only() {
    let term = draw(&state());

    assert!(term.buffer_contains("app.log"));
    assert!(term.buffer_contains("msg=started"));
    assert!(term.buffer_contains("plain text line"));
    assert!(!term.buffer_contains(" Details "));
}

#[test]
fn test_enter_opens_details_for_selected_line() {
    let mut state = state();
    process_message(&mut state, Message::ToggleDetails);
    let term = draw(&state);

    assert!(term.buffer_contains(" Details "));
    assert_eq!(term.count(LABELS_HEADING), 1);
    assert_eq!(term.count(FIELDS_HEADING), 1);
    assert!(term.buffer_contains("8080"));
}

#[test]
fn test_details_placeholder_for_bare_line() {
    let mut state = state();
    process_message(&mut state, Message::MoveDown);
    process_message(&mut state, Message::ToggleDetails);
    let term = draw(&state);

    assert!(term.buffer_contains(NO_DETAILS));
}

#[test]
fn test_stats_panel_for_selected_row() {
    let mut state = state();
    process_message(&mut state, Message::ToggleDetails);
    process_message(&mut state, Message::ToggleFocus);
    process_message(&mut state, Message::ToggleStats);
    let term = draw(&state);

    assert!(term.buffer_contains("DETAILS"));
    assert!(term.buffer_contains("app (1)"));
}

#[test]
fn test_filtered_view() {
    let mut state = state();
    process_message(&mut state, Message::ToggleDetails);
    process_message(&mut state, Message::ToggleFocus);
    process_message(
        &mut state,
        Message::FilterSelectedLabel(logdetail_app::FilterMode::Include),
    );
    let term = draw(&state);

    assert!(term.buffer_contains("1 of 2, filtered"));
    assert!(!term.buffer_contains("plain text line"));
}
