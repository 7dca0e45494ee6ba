//! logdetail-app - Details model, state and configuration for logdetail
//!
//! This crate turns a log line (plus its data frame row) into the
//! [`LogDetailsModel`] rendered by the details table, and implements the TEA
//! (The Elm Architecture) state and update loop used by the terminal viewer.
//! It has no dependency on any terminal library.

pub mod config;
pub mod details;
pub mod document;
pub mod filter;
pub mod handler;
pub mod input_key;
pub mod links;
pub mod message;
pub mod opener;
pub mod process;
pub mod state;
pub mod stats;

// Re-export primary types
pub use details::{
    build_label_rows, reconcile_fields, DetailsCallbacks, DetailsOptions, DetailsRow, FieldSource,
    LabelRow, LogDetailsModel, NoopCallbacks, ReconciledField, ResolvedField,
};
pub use document::LogsDocument;
pub use filter::{FilterMode, LabelFilter, LabelFilters};
pub use handler::{handle_key, update, UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use links::{FieldLink, FieldLinkResolver, FieldRef, NoLinks, TemplateLinks};
pub use message::Message;
pub use process::{handle_action, process_message};
pub use state::{AppState, Focus, RowStats};
pub use stats::{LabelStat, StatsSummary};
