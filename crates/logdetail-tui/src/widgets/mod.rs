//! Custom widget components

mod header;
pub mod log_details;
mod log_list;
mod stats_panel;
mod status_bar;

pub use header::MainHeader;
pub use log_details::LogDetails;
pub use log_list::LogList;
pub use stats_panel::{truncate, StatsPanel};
pub use status_bar::StatusBar;
