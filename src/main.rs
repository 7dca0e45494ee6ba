//! logdetail - terminal log viewer with expandable per-line details
//!
//! Binary entry point: argument parsing, config and document loading, then
//! either the TUI or headless JSON output.

mod headless;

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::Parser;
use logdetail_app::config::{default_config_path, init_config_file, load_settings};
use logdetail_app::{AppState, LogsDocument};
use logdetail_core::logging;
use logdetail_core::prelude::*;

/// logdetail - terminal log viewer with expandable per-line details
#[derive(Parser, Debug)]
#[command(name = "logdetail", version)]
#[command(about = "Browse log lines and their labels, fields and links", long_about = None)]
struct Args {
    /// Log document (.json) or plain-text log file; reads stdin when omitted
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Open the details of this line (0-based)
    #[arg(long, value_name = "N")]
    row: Option<usize>,

    /// Print details as JSON instead of starting the TUI
    #[arg(long)]
    headless: bool,

    /// Config file (default: <config_dir>/logdetail/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write the default config file and exit
    #[arg(long)]
    init_config: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    if args.headless || args.init_config {
        logging::init_stderr();
    } else {
        logging::init()?;
    }

    if args.init_config {
        return write_default_config(args.config);
    }

    let settings = load_settings(args.config.as_deref());
    let (document, source_name) = load_document(args.file.as_ref())?;

    let mut state = AppState::new(document, settings);
    if let Some(name) = source_name {
        state = state.with_source_name(name);
    }
    if let Some(row) = args.row {
        state.open_line(row)?;
    }

    let result = if args.headless {
        headless::run(&state, args.row, std::io::stdout().lock())
    } else {
        logdetail_tui::run(state)
    };

    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }
    info!("logdetail exiting");
    result
}

fn load_document(file: Option<&PathBuf>) -> Result<(LogsDocument, Option<String>)> {
    match file {
        Some(path) => {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            Ok((LogsDocument::load(path)?, Some(name)))
        }
        None => {
            let stdin = std::io::stdin();
            if stdin.is_terminal() {
                return Err(Error::document_invalid(
                    "no input: pass a FILE or pipe log lines on stdin",
                ));
            }
            Ok((LogsDocument::read_text(stdin.lock())?, None))
        }
    }
}

fn write_default_config(explicit: Option<PathBuf>) -> Result<()> {
    let path = explicit
        .or_else(default_config_path)
        .ok_or_else(|| Error::config("no config directory available"))?;

    if init_config_file(&path)? {
        eprintln!("Wrote default config to {}", path.display());
    } else {
        eprintln!("Config already exists at {}", path.display());
    }
    Ok(())
}
