//! MagicCSS configuration
//!
//! Holds the theme data model, the registry of built-in themes, and the
//! merger that overlays caller overrides on a theme. Loosely shaped JSON
//! entries are resolved into tagged unions here, once, at decode time.
//!
//! ```text
//! ThemeRegistry::lookup(name) → merge(theme, overrides) → MergedConfig
//! ```
//!
//! # Example
//!
//! ```
//! use magiccss_config::{merge, ColorEntry, Overrides, ThemeRegistry};
//!
//! let theme = ThemeRegistry::builtin().lookup("bogus");
//! let overrides = Overrides {
//!     colors: vec![ColorEntry::named("red")],
//!     ..Overrides::default()
//! };
//! let merged = merge(theme, overrides);
//! assert_eq!(merged.font_family, "initial");
//! assert_eq!(merged.colors.len(), 1);
//! ```

pub mod merge;
pub mod model;
pub mod options;
pub mod registry;
mod themes;

pub use merge::{merge, FALLBACK_FONT_FAMILY};
pub use model::{
    ClassEntry, ColorEntry, Declaration, MergedConfig, Overrides, ThemeConfig, Variant,
    VariableEntry, VariableValue,
};
pub use options::{Options, DEFAULT_THEME};
pub use registry::ThemeRegistry;

use std::path::PathBuf;

/// Error raised while loading configuration or theme files.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
