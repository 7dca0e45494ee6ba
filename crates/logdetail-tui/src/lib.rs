//! logdetail-tui - Terminal UI for logdetail
//!
//! Renders the [`AppState`](logdetail_app::AppState) of logdetail-app with
//! ratatui: a log list, the expandable details table of the selected line and
//! a status bar. Crossterm events are converted to app messages at this
//! boundary.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry point
pub use runner::run;
