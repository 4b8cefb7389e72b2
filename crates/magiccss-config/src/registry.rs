//! Theme registry.
//!
//! A name → [`ThemeConfig`] table. Lookups never fail: an unknown name
//! resolves to an empty theme so a mistyped name cannot break generation.

use std::collections::{BTreeMap, BTreeSet};

use once_cell::sync::Lazy;

use crate::model::ThemeConfig;
use crate::{themes, ConfigError};

static BUILTIN: Lazy<ThemeRegistry> = Lazy::new(themes::builtin);

static EMPTY_THEME: ThemeConfig = ThemeConfig::empty();

/// A registry holding themes keyed by normalized name.
#[derive(Debug, Clone, Default)]
pub struct ThemeRegistry {
    themes: BTreeMap<String, ThemeConfig>,
}

impl ThemeRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// The shared catalog of built-in themes.
    pub fn builtin() -> &'static ThemeRegistry {
        &BUILTIN
    }

    /// Add or replace a theme.
    pub fn insert(&mut self, name: &str, theme: ThemeConfig) {
        self.themes.insert(normalize(name), theme);
    }

    /// Load themes from a JSON object mapping names to theme configs.
    ///
    /// Returns the number of distinct theme names loaded. Names that
    /// normalize to the same key count once; the last one wins.
    pub fn load_json(&mut self, json: &str) -> Result<usize, ConfigError> {
        let themes: BTreeMap<String, ThemeConfig> = serde_json::from_str(json)?;
        let mut loaded = BTreeSet::new();
        for (name, theme) in themes {
            loaded.insert(normalize(&name));
            self.insert(&name, theme);
        }
        Ok(loaded.len())
    }

    /// Get a theme by name, if registered.
    pub fn get(&self, name: &str) -> Option<&ThemeConfig> {
        self.themes.get(&normalize(name))
    }

    /// Get a theme by name, falling back to an empty theme.
    pub fn lookup(&self, name: &str) -> &ThemeConfig {
        match self.get(name) {
            Some(theme) => theme,
            None => {
                tracing::warn!(theme = name, "unknown theme, using an empty theme");
                &EMPTY_THEME
            }
        }
    }

    /// Check if a theme exists.
    pub fn contains(&self, name: &str) -> bool {
        self.themes.contains_key(&normalize(name))
    }

    /// All theme names, sorted.
    pub fn names(&self) -> Vec<String> {
        self.themes.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.themes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }
}

fn normalize(name: &str) -> String {
    name.to_lowercase().replace('_', "-")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ColorEntry;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_builtin_has_default() {
        let registry = ThemeRegistry::builtin();
        assert!(registry.contains("default"));
        assert!(registry.contains("dark"));
        assert_eq!(registry.names(), vec!["dark", "default"]);
    }

    #[test]
    fn test_unknown_theme_is_empty() {
        let theme = ThemeRegistry::builtin().lookup("bogus");
        assert!(theme.is_empty());
    }

    #[test]
    fn test_lookup_normalizes_name() {
        let mut registry = ThemeRegistry::new();
        registry.insert("High_Contrast", ThemeConfig::empty());
        assert!(registry.contains("high-contrast"));
        assert!(registry.get("HIGH_CONTRAST").is_some());
    }

    #[test]
    fn test_insert_replaces() {
        let mut registry = ThemeRegistry::new();
        registry.insert("mine", ThemeConfig::empty());
        registry.insert(
            "mine",
            ThemeConfig {
                colors: vec![ColorEntry::named("red")],
                ..ThemeConfig::default()
            },
        );
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.lookup("mine").colors, vec![ColorEntry::named("red")]);
    }

    #[test]
    fn test_load_json() {
        let mut registry = ThemeRegistry::new();
        assert!(registry.is_empty());
        let count = registry
            .load_json(r##"{"brand": {"fontFamily": "serif", "colors": [["accent", "#f00"]]}}"##)
            .unwrap();
        assert_eq!(count, 1);
        let theme = registry.lookup("brand");
        assert_eq!(theme.font_family.as_deref(), Some("serif"));
        assert_eq!(theme.colors, vec![ColorEntry::keyed("accent", "#f00")]);
    }

    #[test]
    fn test_load_json_counts_normalized_names() {
        let mut registry = ThemeRegistry::new();
        let count = registry
            .load_json(r#"{"Dark": {"fontFamily": "serif"}, "dark": {"fontFamily": "mono"}}"#)
            .unwrap();
        assert_eq!(count, 1);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_load_json_rejects_bad_shape() {
        let mut registry = ThemeRegistry::new();
        assert!(registry.load_json(r#"{"brand": {"colors": [{"x": 1}]}}"#).is_err());
        assert!(registry.is_empty());
    }
}
