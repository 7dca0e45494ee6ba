//! # logdetail-core - Core Domain Types
//!
//! Foundation crate for logdetail. Provides the log line and data frame
//! types, ad-hoc field extraction, error handling and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, chrono, thiserror, regex, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`LogLine`] - A single log line with entry text, level, timestamp and labels
//! - [`LogLevel`] - Log severity (Trace through Critical, plus Unknown)
//!
//! ### Data Frames (`frame`)
//! - [`DataFrame`], [`Column`] - Column-oriented table backing a set of log lines
//! - [`FrameRow`] - Read-only view of one row of a frame
//! - [`LinkTemplate`] - Column link with a `${__value.text}` placeholder
//!
//! ### Field Extraction (`parser`)
//! - [`extract_fields()`] - Scan an entry for `key=value` tokens
//! - [`LogParser`] - Logfmt or JSON field detection for an entry
//! - [`DetectedField`] - A key/value pair parsed out of an entry
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use logdetail_core::prelude::*;
//! ```

pub mod error;
pub mod frame;
pub mod logging;
pub mod parser;
pub mod types;

/// Prelude for common imports used throughout all logdetail crates
pub mod prelude {
    pub use super::error::{Error, Result};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result};
pub use frame::{
    Column, ColumnConfig, DataFrame, FrameRow, LinkTarget, LinkTemplate, VALUE_TEXT_MARKER,
};
pub use parser::{detect_fields, extract_fields, field_value, DetectedField, LogParser};
pub use types::{Labels, LogLevel, LogLine};
