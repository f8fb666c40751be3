//! Host application configuration
//!
//! Every key is optional. A missing key means "use the built-in default",
//! which is not the same as an empty list.

use serde::{Deserialize, Deserializer, Serialize, de};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::{Error, Result};

/// Per-dataset override of the built-in file schema
///
/// `filename` and `filenames` are mutually exclusive; resolution rejects an
/// override that sets both.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileOverride {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filenames: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub urls: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<String>>,
}

/// Settings supplied by the host application
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostSettings {
    /// File schema overrides keyed by dataset name
    pub files: Option<BTreeMap<String, FileOverride>>,
    /// Locales to keep translations for; may contain `LANGUAGES`
    pub locales: Option<Vec<String>>,
    /// Host language list as `(code, display name)` pairs
    pub languages: Vec<(String, String)>,
    /// Directory downloaded files are stored in
    pub data_dir: Option<PathBuf>,
    /// Countries to import postal codes for
    pub postal_codes: Option<Vec<String>>,
    /// Plugin identifiers, in call order
    pub plugins: Option<Vec<String>>,
    /// Skip regions that end up without any city
    #[serde(deserialize_with = "deserialize_flexible_bool")]
    pub ignore_empty_regions: Option<bool>,
    /// Replacement list of withdrawn country codes
    pub no_longer_existent_country_codes: Option<Vec<String>>,
}

impl HostSettings {
    /// Load host settings from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Overlay `CITIES_*` environment variables
    pub fn merge_with_env(self) -> Result<Self> {
        self.merge_with_vars(|key| std::env::var(key).ok())
    }

    /// Overlay variables from an arbitrary lookup
    ///
    /// List values are comma separated; blank entries are dropped.
    pub fn merge_with_vars<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(dir) = lookup("CITIES_DATA_DIR") {
            debug!("CITIES_DATA_DIR overrides data directory");
            self.data_dir = Some(PathBuf::from(dir));
        }

        if let Some(locales) = lookup("CITIES_LOCALES") {
            self.locales = Some(split_list(&locales));
        }

        if let Some(codes) = lookup("CITIES_POSTAL_CODES") {
            self.postal_codes = Some(split_list(&codes));
        }

        if let Some(plugins) = lookup("CITIES_PLUGINS") {
            self.plugins = Some(split_list(&plugins));
        }

        if let Some(flag) = lookup("CITIES_IGNORE_EMPTY_REGIONS") {
            self.ignore_empty_regions = Some(parse_flag(&flag).ok_or_else(|| {
                Error::config(format!("Invalid CITIES_IGNORE_EMPTY_REGIONS: {}", flag))
            })?);
        }

        Ok(self)
    }
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// Deserialize a boolean given as `true`, `1` or `"true"`
///
/// Integers above zero are true. Strings go through [`parse_flag`], so the
/// file accepts the same spellings as `CITIES_IGNORE_EMPTY_REGIONS`.
fn deserialize_flexible_bool<'de, D>(deserializer: D) -> std::result::Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum FlexibleBool {
        Bool(bool),
        Int(i64),
        String(String),
    }

    match Option::<FlexibleBool>::deserialize(deserializer)? {
        None => Ok(None),
        Some(FlexibleBool::Bool(b)) => Ok(Some(b)),
        Some(FlexibleBool::Int(i)) => Ok(Some(i > 0)),
        Some(FlexibleBool::String(s)) => parse_flag(&s)
            .map(Some)
            .ok_or_else(|| de::Error::custom(format!("invalid boolean string: {}", s))),
    }
}

/// Accepts `true`/`false`/`1`/`0`, case-insensitive
fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}
