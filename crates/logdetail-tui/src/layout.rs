//! Screen layout definitions for the TUI

use ratatui::layout::{Constraint, Layout, Rect};

/// Header height: top border + title row + bottom border
const HEADER_HEIGHT: u16 = 3;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Title, source name and key hints
    pub header: Rect,

    /// Log list
    pub list: Rect,

    /// Details panel, present while details are open
    pub details: Option<Rect>,

    /// Single-line status bar
    pub status: Rect,
}

/// Create the main screen layout
///
/// # Arguments
/// * `area` - Total screen area
/// * `details_open` - Whether the details panel is shown
/// * `details_percent` - Share of the body given to the details panel
pub fn create(area: Rect, details_open: bool, details_percent: u16) -> ScreenAreas {
    let [header, body, status] = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .areas(area);

    if !details_open {
        return ScreenAreas {
            header,
            list: body,
            details: None,
            status,
        };
    }

    let percent = details_percent.clamp(10, 90);
    let [list, details] = Layout::vertical([
        Constraint::Percentage(100 - percent),
        Constraint::Percentage(percent),
    ])
    .areas(body);

    ScreenAreas {
        header,
        list,
        details: Some(details),
        status,
    }
}
