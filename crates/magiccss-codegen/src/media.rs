//! Responsive declaration helpers.
//!
//! Breakpoint tiers are fixed: general (unconditioned), mobile, tablet,
//! 2x and 3x. Declarations are emitted in that order, one `@media` block
//! per tier that has a value. Empty values count as absent.

/// A conditional breakpoint tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Breakpoint {
    Mobile,
    Tablet,
    Media2x,
    Media3x,
}

impl Breakpoint {
    /// All conditional tiers in emission order.
    pub const ALL: [Breakpoint; 4] = [
        Breakpoint::Mobile,
        Breakpoint::Tablet,
        Breakpoint::Media2x,
        Breakpoint::Media3x,
    ];

    /// The `@media` prelude for this tier.
    pub fn query(self) -> &'static str {
        match self {
            Breakpoint::Mobile => "@media all and (max-width: 577px)",
            Breakpoint::Tablet => "@media all and (max-width: 767px)",
            Breakpoint::Media2x => "@media all and (min-width: 2400px)",
            Breakpoint::Media3x => "@media all and (min-width: 3200px)",
        }
    }
}

/// One value per tier for a single property.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Responsive {
    pub general: Option<String>,
    pub mobile: Option<String>,
    pub tablet: Option<String>,
    pub media2x: Option<String>,
    pub media3x: Option<String>,
}

impl Responsive {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn general(mut self, value: impl Into<String>) -> Self {
        self.general = Some(value.into());
        self
    }

    pub fn at(mut self, breakpoint: Breakpoint, value: impl Into<String>) -> Self {
        let value = Some(value.into());
        match breakpoint {
            Breakpoint::Mobile => self.mobile = value,
            Breakpoint::Tablet => self.tablet = value,
            Breakpoint::Media2x => self.media2x = value,
            Breakpoint::Media3x => self.media3x = value,
        }
        self
    }

    /// Value for a conditional tier, if present and non-empty.
    pub fn value(&self, breakpoint: Breakpoint) -> Option<&str> {
        let value = match breakpoint {
            Breakpoint::Mobile => &self.mobile,
            Breakpoint::Tablet => &self.tablet,
            Breakpoint::Media2x => &self.media2x,
            Breakpoint::Media3x => &self.media3x,
        };
        present(value.as_deref())
    }

    /// Render the declarations, wrapped in `selector { ... }` when given.
    pub fn render(&self, selector: Option<&str>, property: &str) -> String {
        let mut lines = Vec::new();

        if let Some(general) = present(self.general.as_deref()) {
            lines.push(format!("{property}: {general};"));
        }
        for breakpoint in Breakpoint::ALL {
            if let Some(value) = self.value(breakpoint) {
                lines.push(format!("{} {{ {property}: {value}; }}", breakpoint.query()));
            }
        }

        match present(selector) {
            Some(selector) => {
                let mut css = format!("{selector} {{\n");
                for line in &lines {
                    css.push_str(&format!("  {line}\n"));
                }
                css.push_str("}\n");
                css
            }
            None => lines.iter().map(|line| format!("{line}\n")).collect(),
        }
    }
}

/// Emit `property` across tiers given as `[general, 2x, 3x, mobile]`.
pub fn with_media(selector: Option<&str>, property: &str, tiers: [Option<&str>; 4]) -> String {
    let [general, media2x, media3x, mobile] = tiers.map(|v| v.map(str::to_string));
    let values = Responsive {
        general,
        mobile,
        tablet: None,
        media2x,
        media3x,
    };
    values.render(selector, property)
}

/// Emit one mobile-only block per property, pairing `properties[i]` with
/// `values[i]`. Extra entries on either side are dropped.
pub fn with_mobile<P, V>(properties: &[P], values: &[V]) -> String
where
    P: AsRef<str>,
    V: AsRef<str>,
{
    properties
        .iter()
        .zip(values)
        .map(|(property, value)| {
            format!(
                "{} {{ {}: {}; }}\n",
                Breakpoint::Mobile.query(),
                property.as_ref(),
                value.as_ref()
            )
        })
        .collect()
}

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    // =========================================================================
    // with_media
    // =========================================================================

    #[test]
    fn test_general_and_mobile_unwrapped() {
        let css = with_media(None, "color", [Some("red"), None, None, Some("blue")]);
        assert_eq!(
            css,
            "color: red;\n@media all and (max-width: 577px) { color: blue; }\n"
        );
        assert!(!css.contains("2400px"));
        assert!(!css.contains("3200px"));
    }

    #[test]
    fn test_all_tiers_wrapped() {
        let css = with_media(
            Some(".title"),
            "font-size",
            [Some("20px"), Some("28px"), Some("36px"), Some("14px")],
        );
        assert_eq!(
            css,
            ".title {\n  font-size: 20px;\n  @media all and (max-width: 577px) { font-size: 14px; }\n  @media all and (min-width: 2400px) { font-size: 28px; }\n  @media all and (min-width: 3200px) { font-size: 36px; }\n}\n"
        );
    }

    #[test]
    fn test_absent_general() {
        let css = with_media(None, "gap", [None, Some("16px"), None, None]);
        assert_eq!(css, "@media all and (min-width: 2400px) { gap: 16px; }\n");
    }

    #[test]
    fn test_empty_values_are_absent() {
        let css = with_media(Some(""), "color", [Some(""), None, Some(""), None]);
        assert_eq!(css, "");
    }

    #[test]
    fn test_selector_with_no_values() {
        assert_eq!(with_media(Some(".x"), "color", [None; 4]), ".x {\n}\n");
    }

    // =========================================================================
    // Responsive
    // =========================================================================

    #[test]
    fn test_tablet_tier() {
        let css = Responsive::new()
            .general("row")
            .at(Breakpoint::Media3x, "row-reverse")
            .at(Breakpoint::Tablet, "column")
            .render(None, "flex-direction");
        assert_eq!(
            css,
            "flex-direction: row;\n@media all and (max-width: 767px) { flex-direction: column; }\n@media all and (min-width: 3200px) { flex-direction: row-reverse; }\n"
        );
    }

    #[test]
    fn test_value_lookup() {
        let values = Responsive::new().at(Breakpoint::Mobile, "1px").at(Breakpoint::Tablet, "");
        assert_eq!(values.value(Breakpoint::Mobile), Some("1px"));
        assert_eq!(values.value(Breakpoint::Tablet), None);
        assert_eq!(values.value(Breakpoint::Media2x), None);
    }

    // =========================================================================
    // with_mobile
    // =========================================================================

    #[test]
    fn test_with_mobile_pairs() {
        let css = with_mobile(&["display", "width"], &["none", "100%"]);
        assert_eq!(
            css,
            "@media all and (max-width: 577px) { display: none; }\n@media all and (max-width: 577px) { width: 100%; }\n"
        );
    }

    #[test]
    fn test_with_mobile_truncates() {
        let css = with_mobile(&["display", "width", "height"], &["none"]);
        assert_eq!(css.matches("@media").count(), 1);

        let empty: [&str; 0] = [];
        assert_eq!(with_mobile(&empty, &["none"]), "");
    }
}
