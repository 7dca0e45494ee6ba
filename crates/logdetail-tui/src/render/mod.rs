//! Main render/view function (View in TEA pattern)

#[cfg(test)]
mod tests;

use logdetail_app::{AppState, Focus};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::layout;
use crate::theme::palette;
use crate::widgets::{LogDetails, LogList, MainHeader, StatusBar};

/// Render the complete UI (View function in TEA)
///
/// Pure: the details model is rebuilt from the state on every frame.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(palette::DEEPEST_BG)),
        area,
    );

    let areas = layout::create(area, state.details_open, state.settings.ui.details_height);

    frame.render_widget(MainHeader::new(state.source_name.as_deref()), areas.header);

    let list = LogList::new(state.document.lines(), state.visible(), state.selected)
        .focused(state.focus == Focus::List)
        .show_timestamps(state.settings.ui.show_timestamps)
        .filtered(!state.filters.is_empty());
    frame.render_widget(list, areas.list);

    if let (Some(details_area), Some(model)) = (areas.details, state.details()) {
        let stats = state.selected_row_stats();
        let focused = state.focus == Focus::Details;
        let details = LogDetails::new(&model)
            .focused(focused)
            .selected(focused.then_some(state.details_selected))
            .stats(stats.as_ref());
        frame.render_widget(details, details_area);
    }

    frame.render_widget(StatusBar::new(state), areas.status);
}
