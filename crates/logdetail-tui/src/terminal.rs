//! Terminal restoration on panic

use tracing::error;

/// Chain a panic hook that puts the terminal back into cooked mode and
/// records the panic in the log file before the default report is printed.
pub fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        ratatui::restore();
        error!("Viewer panicked: {}", info);
        previous(info);
    }));
}
