//! Settings loader for config.toml

use super::types::Settings;
use logdetail_core::prelude::*;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.toml";
const APP_DIR: &str = "logdetail";

const DEFAULT_CONFIG: &str = r#"# logdetail configuration

[ui]
show_timestamps = true
# Values listed per stats panel before the rest is folded into "Other"
stats_limit = 5
# Percentage of the screen used by the details panel
details_height = 45
# Command used to open links (empty: xdg-open / open / start)
browser = ""

[fields]
# Read JSON object entries member by member
parse_json = false
# Frame columns never shown as fields
hidden_columns = ["id"]

# Links attached to fields by name. ${__value.text} is replaced by the value.
# [[links]]
# field = "traceId"
# title = "Trace"
# url = "http://localhost:3000/trace/${__value.text}"
# target = "_blank"
"#;

/// Default config file location (`<config_dir>/logdetail/config.toml`)
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILENAME))
}

/// Parse settings from TOML text
pub fn parse_settings(content: &str) -> Result<Settings> {
    Ok(toml::from_str(content)?)
}

/// Load settings from `explicit` or the default location.
///
/// Never fails: a missing, unreadable or invalid file yields defaults.
pub fn load_settings(explicit: Option<&Path>) -> Settings {
    let Some(config_path) = explicit
        .map(Path::to_path_buf)
        .or_else(default_config_path)
    else {
        debug!("No config directory available, using defaults");
        return Settings::default();
    };

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match parse_settings(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Write the commented default config to `path` unless a file exists there.
///
/// Returns `true` when a new file was written.
pub fn init_config_file(path: &Path) -> Result<bool> {
    if path.exists() {
        return Ok(false);
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| Error::config(format!("Failed to create {}: {}", parent.display(), e)))?;
    }

    std::fs::write(path, DEFAULT_CONFIG)?;
    info!("Wrote default config to {:?}", path);
    Ok(true)
}
