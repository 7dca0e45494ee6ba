//! Main TUI runner - terminal lifecycle and event loop

use logdetail_app::{process_message, AppState};
use logdetail_core::prelude::*;
use ratatui::DefaultTerminal;

use crate::{event, render, terminal};

/// Run the viewer until the user quits
pub fn run(mut state: AppState) -> Result<()> {
    terminal::install_panic_hook();
    let mut term = ratatui::init();
    info!("Viewer started with {} lines", state.document.len());

    let result = run_loop(&mut term, &mut state);

    ratatui::restore();
    if let Err(e) = &result {
        error!("Viewer stopped with error: {}", e);
    }
    result
}

fn run_loop(term: &mut DefaultTerminal, state: &mut AppState) -> Result<()> {
    while !state.should_quit {
        term.draw(|frame| render::view(frame, state))?;

        if let Some(message) = event::poll()? {
            process_message(state, message);
        }
    }
    info!("Viewer quit");
    Ok(())
}
