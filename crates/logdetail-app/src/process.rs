//! Message processing and action dispatch
//!
//! Runs a message through the TEA update loop, following up on returned
//! messages and performing returned actions. Actions are synchronous: opening
//! a link spawns a detached process and reports back with a message.

use std::collections::VecDeque;

use logdetail_core::prelude::*;

use crate::handler::{self, UpdateAction};
use crate::message::Message;
use crate::opener;
use crate::state::AppState;

/// Process a message through the TEA update function
pub fn process_message(state: &mut AppState, message: Message) {
    let mut queue = VecDeque::from([message]);
    while let Some(msg) = queue.pop_front() {
        let result = handler::update(state, msg);
        queue.extend(result.message);

        if let Some(action) = result.action {
            queue.extend(handle_action(state, action));
        }
    }
}

/// Perform an action, returning the message that reports its outcome
pub fn handle_action(state: &AppState, action: UpdateAction) -> Option<Message> {
    match action {
        UpdateAction::OpenLink { href } => {
            match opener::open_link(&href, &state.settings.ui.browser) {
                Ok(url) => Some(Message::LinkOpened { url }),
                Err(e) => {
                    error!("{}", e);
                    Some(Message::LinkFailed {
                        error: e.to_string(),
                    })
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::document::LogsDocument;
    use logdetail_core::{Column, DataFrame, LinkTemplate, LogLine};

    #[test]
    fn test_failed_link_reports_in_status() {
        let frame = DataFrame::new(vec![
            Column::new("entry", ["a"]),
            Column::new("traceId", ["1234"])
                .with_link(LinkTemplate::new("link", "localhost:3210/${__value.text}")),
        ]);
        let document = LogsDocument::new(vec![LogLine::new("a")]).with_frame(frame, 0);
        let mut settings = Settings::default();
        settings.ui.browser = "/nonexistent/logdetail-browser".into();
        let mut state = AppState::new(document, settings);

        process_message(&mut state, Message::ToggleDetails);
        process_message(&mut state, Message::ToggleFocus);
        process_message(&mut state, Message::Activate);

        let status = state.status.unwrap();
        assert!(status.contains("http://localhost:3210/1234"), "{}", status);
    }

    #[test]
    fn test_quit_through_key() {
        let mut state = AppState::new(LogsDocument::default(), Settings::default());
        process_message(&mut state, Message::Key(crate::InputKey::Char('q')));
        assert!(state.should_quit);
    }
}
