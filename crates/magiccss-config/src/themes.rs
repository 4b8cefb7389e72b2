//! Built-in theme catalog.

use crate::model::{ClassEntry, ColorEntry, Declaration, ThemeConfig, VariableEntry};
use crate::registry::ThemeRegistry;

const SYSTEM_FONT: &str =
    "-apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, 'Helvetica Neue', Arial, sans-serif";

pub(crate) fn builtin() -> ThemeRegistry {
    let mut registry = ThemeRegistry::new();
    registry.insert("default", default_theme());
    registry.insert("dark", dark_theme());
    registry
}

fn default_theme() -> ThemeConfig {
    ThemeConfig {
        font_family: Some(SYSTEM_FONT.into()),
        colors: vec![
            ColorEntry::named("white"),
            ColorEntry::named("black"),
            ColorEntry::named("transparent"),
            ColorEntry::keyed("primary", "#3b82f6"),
            ColorEntry::keyed("secondary", "#64748b"),
            ColorEntry::keyed("success", "#22c55e"),
            ColorEntry::keyed("danger", "#ef4444"),
            ColorEntry::keyed("gray", "#e5e7eb"),
        ],
        variables: vec![
            VariableEntry::scalar("border-radius", "4px"),
            VariableEntry::variants("padding", [("sm", "4px"), ("md", "8px"), ("lg", "16px")]),
            VariableEntry::variants("margin", [("sm", "4px"), ("md", "8px"), ("lg", "16px")]),
            VariableEntry::variants(
                "font-size",
                [("sm", "12px"), ("md", "16px"), ("lg", "20px"), ("xl", "28px")],
            ),
        ],
        classes: vec![
            ClassEntry::new(
                "card",
                vec![
                    Declaration::pair("padding", "var(--padding-md)"),
                    Declaration::pair("border-radius", "var(--border-radius)"),
                    Declaration::pair("background-color", "var(--color-white)"),
                ],
            ),
            ClassEntry::new("hidden", vec![Declaration::pair("display", "none")]),
        ],
    }
}

fn dark_theme() -> ThemeConfig {
    ThemeConfig {
        font_family: Some(SYSTEM_FONT.into()),
        colors: vec![
            ColorEntry::keyed("background", "#111827"),
            ColorEntry::keyed("surface", "#1f2937"),
            ColorEntry::keyed("text", "#f9fafb"),
            ColorEntry::keyed("muted", "#9ca3af"),
            ColorEntry::keyed("primary", "#60a5fa"),
            ColorEntry::keyed("danger", "#f87171"),
        ],
        variables: vec![
            VariableEntry::scalar("border-radius", "6px"),
            VariableEntry::variants("padding", [("sm", "4px"), ("md", "8px"), ("lg", "16px")]),
            VariableEntry::variants("font-size", [("sm", "12px"), ("md", "16px"), ("lg", "20px")]),
        ],
        classes: vec![ClassEntry::new(
            "card",
            vec![
                Declaration::pair("padding", "var(--padding-md)"),
                Declaration::pair("border-radius", "var(--border-radius)"),
                Declaration::pair("background-color", "var(--color-surface)"),
                Declaration::pair("color", "var(--color-text)"),
            ],
        )],
    }
}
