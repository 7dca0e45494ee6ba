//! Headless mode - details as NDJSON on stdout
//!
//! One event per line. Without `--row` every line of the document is
//! emitted; with it only that line.
//!
//! ```json
//! {"event":"details","row":0,"uid":"0","entry":"traceId=1234","details":{"level_indicator":"info","labels":[],"fields":[...]}}
//! ```

use std::io::Write;

use logdetail_app::{AppState, LogDetailsModel};
use logdetail_core::prelude::*;
use serde::Serialize;

/// Events emitted in headless mode
#[derive(Debug, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent<'a> {
    /// Details of one log line
    Details {
        row: usize,
        uid: &'a str,
        entry: &'a str,
        details: LogDetailsModel,
    },
}

impl HeadlessEvent<'_> {
    /// Write this event as one JSON line
    pub fn emit(&self, out: &mut impl Write) -> Result<()> {
        serde_json::to_writer(&mut *out, self)?;
        writeln!(out)?;
        Ok(())
    }
}

/// Emit the details of `row`, or of every line when `row` is `None`
pub fn run(state: &AppState, row: Option<usize>, mut out: impl Write) -> Result<()> {
    let rows: Vec<usize> = match row {
        Some(row) => vec![row],
        None => (0..state.document.len()).collect(),
    };

    for index in rows {
        let (Some(line), Some(details)) = (state.document.line(index), state.details_for(index))
        else {
            return Err(Error::RowOutOfRange {
                index,
                len: state.document.len(),
            });
        };
        HeadlessEvent::Details {
            row: index,
            uid: &line.uid,
            entry: &line.entry,
            details,
        }
        .emit(&mut out)?;
    }

    out.flush()?;
    debug!("Headless output complete");
    Ok(())
}
