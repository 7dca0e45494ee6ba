//! Error type shared by every logdetail crate
//!
//! Building a details model never fails; errors come from the edges:
//! reading documents and config, opening links, and driving the terminal.

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ── Documents ────────────────────────────────────────────────
    #[error("Log document not found: {path}")]
    DocumentNotFound { path: PathBuf },

    #[error("Invalid log document: {message}")]
    DocumentInvalid { message: String },

    #[error("Row {index} is out of range (document has {len} lines)")]
    RowOutOfRange { index: usize, len: usize },

    // ── Config ───────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    // ── Links and terminal ───────────────────────────────────────
    #[error("Failed to open link {href}: {reason}")]
    LinkOpen { href: String, reason: String },

    #[error("Terminal error: {message}")]
    Terminal { message: String },
}

impl Error {
    pub fn document_not_found(path: impl Into<PathBuf>) -> Self {
        Self::DocumentNotFound { path: path.into() }
    }

    pub fn document_invalid(message: impl Into<String>) -> Self {
        Self::DocumentInvalid {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn link_open(href: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::LinkOpen {
            href: href.into(),
            reason: reason.into(),
        }
    }

    pub fn terminal(message: impl Into<String>) -> Self {
        Self::Terminal {
            message: message.into(),
        }
    }

    /// Errors the viewer reports in the status bar and keeps running
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::LinkOpen { .. } | Self::Config { .. } | Self::ConfigParse(_)
        )
    }

    /// Errors that stop the program before or instead of the viewer
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::DocumentNotFound { .. }
                | Self::DocumentInvalid { .. }
                | Self::RowOutOfRange { .. }
                | Self::Terminal { .. }
        )
    }
}
