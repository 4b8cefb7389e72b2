//! Construction options: a theme name plus overrides.

use std::path::Path;

use serde::{Deserialize, Deserializer};

use crate::model::Overrides;
use crate::ConfigError;

/// Theme used when the options do not name one.
pub const DEFAULT_THEME: &str = "default";

/// Options accepted by the stylesheet generator.
///
/// Mirrors the JSON object form:
/// `{ "theme": "default", "fontFamily": "...", "colors": [...], "variables": [...], "classes": [...] }`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Options {
    #[serde(default = "default_theme", deserialize_with = "theme_or_default")]
    pub theme: String,
    #[serde(flatten)]
    pub overrides: Overrides,
}

fn default_theme() -> String {
    DEFAULT_THEME.to_string()
}

/// An explicit `null` selects the default theme, like a missing key.
fn theme_or_default<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(default_theme))
}

impl Default for Options {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            overrides: Overrides::default(),
        }
    }
}

impl Options {
    /// Options selecting `theme` with no overrides.
    pub fn with_theme(theme: impl Into<String>) -> Self {
        Self {
            theme: theme.into(),
            overrides: Overrides::default(),
        }
    }

    /// Parse options from JSON text.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a JSON options file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }
}
