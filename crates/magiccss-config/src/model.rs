//! Theme data model.
//!
//! Callers describe colors, variables and classes with loosely shaped JSON
//! (`"red"`, `["primary", "#123456"]`, `["size", ["sm", "12px"]]`). Those
//! shapes are resolved into the tagged unions below when the configuration
//! is decoded, so the synthesizer never has to inspect shapes itself.

use serde::{Deserialize, Deserializer};

// ---------------------------------------------------------------------------
// Colors
// ---------------------------------------------------------------------------

/// A named color registered as `--color-<name>`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RawColor")]
pub enum ColorEntry {
    /// The CSS value is the name itself (`red`, `transparent`).
    Named(String),
    /// An explicit value under a custom name.
    Keyed { name: String, value: String },
}

impl ColorEntry {
    pub fn named(name: impl Into<String>) -> Self {
        ColorEntry::Named(name.into())
    }

    pub fn keyed(name: impl Into<String>, value: impl Into<String>) -> Self {
        ColorEntry::Keyed {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Identity key, used in `--color-<name>`, `.col-<name>` and `.bg-<name>`.
    pub fn name(&self) -> &str {
        match self {
            ColorEntry::Named(name) => name,
            ColorEntry::Keyed { name, .. } => name,
        }
    }

    /// The CSS value assigned to the custom property.
    pub fn value(&self) -> &str {
        match self {
            ColorEntry::Named(name) => name,
            ColorEntry::Keyed { value, .. } => value,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawColor {
    Named(String),
    Keyed(String, String),
    Single((String,)),
}

impl From<RawColor> for ColorEntry {
    fn from(raw: RawColor) -> Self {
        match raw {
            RawColor::Named(name) | RawColor::Single((name,)) => ColorEntry::Named(name),
            RawColor::Keyed(name, value) => ColorEntry::Keyed { name, value },
        }
    }
}

// ---------------------------------------------------------------------------
// Variables
// ---------------------------------------------------------------------------

/// A CSS custom property, either a single value or a family of variants.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RawVariable")]
pub struct VariableEntry {
    pub key: String,
    pub value: VariableValue,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VariableValue {
    /// Rendered as `--<key>`.
    Scalar(String),
    /// Rendered as `--<key>-<variant>`, one property per variant.
    Variants(Vec<Variant>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variant {
    pub name: String,
    pub value: String,
}

impl VariableEntry {
    pub fn scalar(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: VariableValue::Scalar(value.into()),
        }
    }

    pub fn variant(
        key: impl Into<String>,
        variant: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self::variants(key, [(variant, value)])
    }

    pub fn variants<N, V>(key: impl Into<String>, variants: impl IntoIterator<Item = (N, V)>) -> Self
    where
        N: Into<String>,
        V: Into<String>,
    {
        Self {
            key: key.into(),
            value: VariableValue::Variants(
                variants
                    .into_iter()
                    .map(|(name, value)| Variant {
                        name: name.into(),
                        value: value.into(),
                    })
                    .collect(),
            ),
        }
    }
}

#[derive(Deserialize)]
struct RawVariable(String, RawVariableValue);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawVariableValue {
    Scalar(RawScalar),
    Variant(String, RawScalar),
    Variants(Vec<(String, RawScalar)>),
}

impl From<RawVariable> for VariableEntry {
    fn from(RawVariable(key, value): RawVariable) -> Self {
        match value {
            RawVariableValue::Scalar(value) => VariableEntry::scalar(key, value),
            RawVariableValue::Variant(name, value) => VariableEntry::variant(key, name, value),
            RawVariableValue::Variants(pairs) => VariableEntry::variants(key, pairs),
        }
    }
}

// ---------------------------------------------------------------------------
// Classes
// ---------------------------------------------------------------------------

/// A caller-defined utility class.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RawClass")]
pub struct ClassEntry {
    pub name: String,
    pub declarations: Vec<Declaration>,
}

impl ClassEntry {
    pub fn new(name: impl Into<String>, declarations: Vec<Declaration>) -> Self {
        Self {
            name: name.into(),
            declarations,
        }
    }
}

/// One entry inside a class body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Declaration {
    /// Emitted verbatim, without a value or trailing semicolon.
    BareToken(String),
    /// Emitted as `<property>: <value>;`.
    KeyValue { property: String, value: String },
}

impl Declaration {
    pub fn token(token: impl Into<String>) -> Self {
        Declaration::BareToken(token.into())
    }

    pub fn pair(property: impl Into<String>, value: impl Into<String>) -> Self {
        Declaration::KeyValue {
            property: property.into(),
            value: value.into(),
        }
    }
}

#[derive(Deserialize)]
struct RawClass(String, Vec<RawDeclaration>);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawDeclaration {
    Token(String),
    Pair(String, Option<RawScalar>),
    Single((String,)),
}

impl From<RawClass> for ClassEntry {
    fn from(RawClass(name, declarations): RawClass) -> Self {
        let declarations = declarations
            .into_iter()
            .map(|raw| match raw {
                RawDeclaration::Token(token) | RawDeclaration::Single((token,)) => {
                    Declaration::BareToken(token)
                }
                RawDeclaration::Pair(property, value) => {
                    let value = value.map(String::from).unwrap_or_default();
                    if value.is_empty() {
                        Declaration::BareToken(property)
                    } else {
                        Declaration::KeyValue { property, value }
                    }
                }
            })
            .collect();
        ClassEntry { name, declarations }
    }
}

// ---------------------------------------------------------------------------
// Scalars
// ---------------------------------------------------------------------------

/// A CSS value written either as a string or as a bare JSON number.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawScalar {
    Text(String),
    Number(serde_json::Number),
}

impl From<RawScalar> for String {
    fn from(raw: RawScalar) -> Self {
        match raw {
            RawScalar::Text(text) => text,
            RawScalar::Number(n) => format_json_number(&n),
        }
    }
}

/// Integers keep every digit; floats go through [`format_number`].
fn format_json_number(n: &serde_json::Number) -> String {
    if let Some(i) = n.as_i64() {
        i.to_string()
    } else if let Some(u) = n.as_u64() {
        u.to_string()
    } else {
        n.as_f64().map(format_number).unwrap_or_else(|| n.to_string())
    }
}

/// Format a number in plain decimal notation, without a trailing `.0`.
pub fn format_number(n: f64) -> String {
    format!("{n}")
}

/// Treat an explicit `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// ---------------------------------------------------------------------------
// Themes
// ---------------------------------------------------------------------------

/// A named bundle of default font, colors, variables and classes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ThemeConfig {
    pub font_family: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub colors: Vec<ColorEntry>,
    #[serde(deserialize_with = "null_as_default")]
    pub variables: Vec<VariableEntry>,
    #[serde(deserialize_with = "null_as_default")]
    pub classes: Vec<ClassEntry>,
}

impl ThemeConfig {
    /// A theme with no font, colors, variables or classes.
    pub const fn empty() -> Self {
        Self {
            font_family: None,
            colors: Vec::new(),
            variables: Vec::new(),
            classes: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.font_family.is_none()
            && self.colors.is_empty()
            && self.variables.is_empty()
            && self.classes.is_empty()
    }
}

/// Caller-supplied entries overlaid on a theme. Same shape as a theme.
pub type Overrides = ThemeConfig;

/// A theme combined with overrides, ready for rendering.
///
/// Sequences keep theme entries first and override entries after them;
/// nothing is deduplicated, so repeated names cascade by source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergedConfig {
    pub font_family: String,
    pub colors: Vec<ColorEntry>,
    pub variables: Vec<VariableEntry>,
    pub classes: Vec<ClassEntry>,
}
