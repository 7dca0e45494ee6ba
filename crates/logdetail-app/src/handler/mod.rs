//! Update side of the TEA loop
//!
//! [`handle_key`] maps a key to a message for the focused pane and
//! [`update`] applies a message to the state. Side effects are never run
//! here; they are returned as an [`UpdateAction`] for `process` to perform.

pub(crate) mod keys;
pub(crate) mod update;


use crate::message::Message;

pub use keys::handle_key;
pub use update::update;

/// Side effect requested by an update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// Open a field link with the platform opener or configured browser
    OpenLink { href: String },
}

/// What an update asks for next
#[derive(Debug, Default)]
pub struct UpdateResult {
    pub message: Option<Message>,
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    /// Nothing further to do
    pub fn idle() -> Self {
        Self::default()
    }

    /// Process `msg` next
    pub fn then(msg: Message) -> Self {
        Self {
            message: Some(msg),
            ..Self::default()
        }
    }

    /// Perform `action`
    pub fn act(action: UpdateAction) -> Self {
        Self {
            action: Some(action),
            ..Self::default()
        }
    }
}
