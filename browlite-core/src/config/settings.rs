//! Application settings for Browlite.
//!
//! Settings are persisted to `config.ini` as flat key/value pairs.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use super::format::{self, parse_bool};

// =============================================================================
// Keys and Defaults
// =============================================================================

pub const KEY_HOMEPAGE: &str = "homepage";
pub const KEY_DARK_MODE: &str = "dark_mode";
pub const KEY_BLOCK_ADS: &str = "block_ads";
pub const KEY_DISABLE_IMAGES: &str = "disable_images";
pub const KEY_DEFAULT_SEARCH_ENGINE: &str = "default_search_engine";
pub const KEY_AVAILABLE_SEARCH_ENGINES: &str = "available_search_engines";

/// Homepage used when the config does not name one.
pub const DEFAULT_HOMEPAGE: &str = "https://www.google.com";

/// Search engine used when the config does not name one.
pub const DEFAULT_SEARCH_ENGINE: &str = "google";

/// Engines offered when the config does not list any.
pub const DEFAULT_AVAILABLE_ENGINES: &[&str] = &["google", "duckduckgo"];

// =============================================================================
// Application Settings
// =============================================================================

/// Application settings - persisted to the INI config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Page opened at startup and by "Home".
    pub homepage: String,

    /// Dark window theme.
    #[serde(serialize_with = "write_bool", deserialize_with = "bool_or_true")]
    pub dark_mode: bool,

    /// Ask the page view to block ads where it can.
    #[serde(serialize_with = "write_bool", deserialize_with = "bool_or_true")]
    pub block_ads: bool,

    /// Ask the page view not to load images.
    #[serde(serialize_with = "write_bool", deserialize_with = "bool_or_false")]
    pub disable_images: bool,

    /// Search engine identifier used for non-URL input.
    pub default_search_engine: String,

    /// Engines offered in the "change search engine" dialog.
    #[serde(serialize_with = "write_engine_list", deserialize_with = "read_engine_list")]
    pub available_search_engines: Vec<String>,

    /// Keys found in the file that Browlite does not use, kept for round-trips.
    #[serde(flatten)]
    pub extra: BTreeMap<String, String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            homepage: DEFAULT_HOMEPAGE.to_string(),
            dark_mode: true,
            block_ads: true,
            disable_images: false,
            default_search_engine: DEFAULT_SEARCH_ENGINE.to_string(),
            available_search_engines: DEFAULT_AVAILABLE_ENGINES
                .iter()
                .map(|s| s.to_string())
                .collect(),
            extra: BTreeMap::new(),
        }
    }
}

impl Settings {
    /// Parse settings from INI text.
    ///
    /// Missing keys, and booleans that do not parse, take their defaults.
    /// Text that is not valid INI yields the defaults.
    pub fn from_ini_str(text: &str) -> Self {
        let entries = match format::read_entries(text) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to parse config, using defaults");
                return Self::default();
            }
        };

        match serde_json::from_value(Value::Object(entries)) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!(error = %e, "Invalid config values, using defaults");
                Self::default()
            }
        }
    }

    /// Serialize to INI text, known keys first then any extra keys.
    pub fn to_ini_string(&self) -> std::io::Result<String> {
        match serde_json::to_value(self)? {
            Value::Object(entries) => format::write_entries(&entries),
            other => Err(std::io::Error::other(format!(
                "settings serialized to {other} instead of a map"
            ))),
        }
    }
}

// =============================================================================
// Field Codecs
// =============================================================================

fn bool_or<'de, D>(deserializer: D, default: bool) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(parse_bool(&raw).unwrap_or_else(|| {
        tracing::warn!(value = %raw, default, "Invalid boolean in config, using default");
        default
    }))
}

fn bool_or_true<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    bool_or(deserializer, true)
}

fn bool_or_false<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    bool_or(deserializer, false)
}

fn write_bool<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(if *value { "true" } else { "false" })
}

/// Comma-joined on disk; blanks around and between ids are dropped.
fn read_engine_list<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    let raw = String::deserialize(deserializer)?;
    Ok(raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect())
}

fn write_engine_list<S: Serializer>(engines: &[String], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&engines.join(","))
}

// =============================================================================
// Tests
// =============================================================================
