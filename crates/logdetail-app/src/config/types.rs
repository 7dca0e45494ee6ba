//! Configuration types

use logdetail_core::{LinkTarget, LinkTemplate};
use serde::{Deserialize, Serialize};

/// Application settings (config.toml)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub ui: UiSettings,

    #[serde(default)]
    pub fields: FieldSettings,

    /// Links attached to fields by name (`[[links]]` tables)
    #[serde(default)]
    pub links: Vec<DerivedLink>,
}

/// UI settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Show timestamps in the log list
    #[serde(default = "default_true")]
    pub show_timestamps: bool,

    /// Number of values listed in a stats panel before folding into "Other"
    #[serde(default = "default_stats_limit")]
    pub stats_limit: usize,

    /// Share of the screen height given to the details panel (percent)
    #[serde(default = "default_details_height")]
    pub details_height: u16,

    /// Command used to open links; empty means the platform default
    #[serde(default)]
    pub browser: String,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            show_timestamps: true,
            stats_limit: default_stats_limit(),
            details_height: default_details_height(),
            browser: String::new(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_stats_limit() -> usize {
    5
}

fn default_details_height() -> u16 {
    45
}

/// Field extraction settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct FieldSettings {
    /// Read JSON object entries member by member
    #[serde(default)]
    pub parse_json: bool,

    /// Frame columns never shown as fields
    #[serde(default = "default_hidden_columns")]
    pub hidden_columns: Vec<String>,
}

impl Default for FieldSettings {
    fn default() -> Self {
        Self {
            parse_json: false,
            hidden_columns: default_hidden_columns(),
        }
    }
}

fn default_hidden_columns() -> Vec<String> {
    vec!["id".to_string()]
}

/// A link template bound to a field name.
///
/// Applies to both frame columns and ad-hoc detected fields of that name.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DerivedLink {
    /// Field name the link applies to
    pub field: String,
    pub title: String,
    /// URL template; `${__value.text}` is replaced by the field value
    pub url: String,
    #[serde(default)]
    pub target: LinkTarget,
}

impl DerivedLink {
    pub fn template(&self) -> LinkTemplate {
        LinkTemplate {
            title: self.title.clone(),
            url: self.url.clone(),
            target: self.target,
        }
    }
}
