//! Overlay of caller overrides on a theme.

use crate::model::{MergedConfig, Overrides, ThemeConfig};

/// Font family used when neither the overrides nor the theme name one.
pub const FALLBACK_FONT_FAMILY: &str = "initial";

/// Merge a theme with caller overrides.
///
/// Each sequence is the theme's entries followed by the override entries, in
/// their original order. The font family resolves override → theme →
/// [`FALLBACK_FONT_FAMILY`]; empty strings count as unset.
pub fn merge(theme: &ThemeConfig, overrides: Overrides) -> MergedConfig {
    let font_family = non_empty(overrides.font_family)
        .or_else(|| non_empty(theme.font_family.clone()))
        .unwrap_or_else(|| FALLBACK_FONT_FAMILY.to_string());

    let merged = MergedConfig {
        font_family,
        colors: concat(&theme.colors, overrides.colors),
        variables: concat(&theme.variables, overrides.variables),
        classes: concat(&theme.classes, overrides.classes),
    };

    tracing::debug!(
        colors = merged.colors.len(),
        variables = merged.variables.len(),
        classes = merged.classes.len(),
        "merged theme with overrides"
    );

    merged
}

fn concat<T: Clone>(theme: &[T], overrides: Vec<T>) -> Vec<T> {
    theme.iter().cloned().chain(overrides).collect()
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ClassEntry, ColorEntry, Declaration, VariableEntry};
    use pretty_assertions::assert_eq;

    fn theme() -> ThemeConfig {
        ThemeConfig {
            font_family: Some("serif".into()),
            colors: vec![ColorEntry::named("red"), ColorEntry::keyed("primary", "#000")],
            variables: vec![VariableEntry::scalar("gap", "4px")],
            classes: vec![ClassEntry::new("card", vec![Declaration::pair("padding", "8px")])],
        }
    }

    #[test]
    fn test_theme_entries_come_first() {
        let overrides = Overrides {
            colors: vec![ColorEntry::named("blue")],
            variables: vec![VariableEntry::variant("size", "sm", "12px")],
            classes: vec![ClassEntry::new("flag", vec![Declaration::token("x")])],
            ..Overrides::default()
        };
        let merged = merge(&theme(), overrides);

        assert_eq!(
            merged.colors,
            vec![
                ColorEntry::named("red"),
                ColorEntry::keyed("primary", "#000"),
                ColorEntry::named("blue"),
            ]
        );
        assert_eq!(
            merged.variables,
            vec![
                VariableEntry::scalar("gap", "4px"),
                VariableEntry::variant("size", "sm", "12px"),
            ]
        );
        assert_eq!(merged.classes.len(), 2);
        assert_eq!(merged.classes[0].name, "card");
        assert_eq!(merged.classes[1].name, "flag");
    }

    #[test]
    fn test_collisions_are_kept() {
        let overrides = Overrides {
            colors: vec![ColorEntry::keyed("primary", "#fff")],
            ..Overrides::default()
        };
        let merged = merge(&theme(), overrides);
        let primaries: Vec<_> = merged
            .colors
            .iter()
            .filter(|c| c.name() == "primary")
            .map(|c| c.value())
            .collect();
        assert_eq!(primaries, vec!["#000", "#fff"]);
    }

    #[test]
    fn test_theme_is_untouched() {
        let original = theme();
        let overrides = Overrides {
            colors: vec![ColorEntry::named("blue")],
            ..Overrides::default()
        };
        let _ = merge(&original, overrides);
        assert_eq!(original, theme());
    }

    // =========================================================================
    // Font family precedence
    // =========================================================================

    #[test]
    fn test_font_override_wins() {
        let overrides = Overrides {
            font_family: Some("monospace".into()),
            ..Overrides::default()
        };
        assert_eq!(merge(&theme(), overrides).font_family, "monospace");
    }

    #[test]
    fn test_font_falls_back_to_theme() {
        assert_eq!(merge(&theme(), Overrides::default()).font_family, "serif");
    }

    #[test]
    fn test_empty_font_override_falls_through() {
        let overrides = Overrides {
            font_family: Some(String::new()),
            ..Overrides::default()
        };
        assert_eq!(merge(&theme(), overrides).font_family, "serif");
    }

    #[test]
    fn test_font_falls_back_to_initial() {
        let merged = merge(&ThemeConfig::empty(), Overrides::default());
        assert_eq!(merged.font_family, FALLBACK_FONT_FAMILY);
        assert!(merged.colors.is_empty());
        assert!(merged.variables.is_empty());
        assert!(merged.classes.is_empty());
    }
}
