//! MagicCSS code generator
//!
//! Turns a theme name plus overrides into a single CSS stylesheet, and
//! provides helpers for ad-hoc responsive fragments.
//!
//! ```text
//! Options → ThemeRegistry::lookup → merge() → css::render() → String
//! ```
//!
//! # Example
//!
//! ```
//! use magiccss_codegen::MagicCss;
//! use magiccss_config::Options;
//!
//! let css = MagicCss::new(Options::with_theme("bogus")).get_style();
//! assert!(css.contains("--font-family: initial;"));
//! ```

pub mod css;
pub mod media;

pub use media::{with_media, with_mobile, Breakpoint, Responsive};

use magiccss_config::{merge, MergedConfig, Options, ThemeRegistry};

/// A stylesheet generator bound to one merged configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct MagicCss {
    config: MergedConfig,
}

impl MagicCss {
    /// Resolve `options` against the built-in themes.
    pub fn new(options: Options) -> Self {
        Self::with_registry(ThemeRegistry::builtin(), options)
    }

    /// Resolve `options` against a caller-supplied registry.
    pub fn with_registry(registry: &ThemeRegistry, options: Options) -> Self {
        let theme = registry.lookup(&options.theme);
        Self {
            config: merge(theme, options.overrides),
        }
    }

    /// The merged configuration that will be rendered.
    pub fn config(&self) -> &MergedConfig {
        &self.config
    }

    /// Generate the full stylesheet.
    pub fn get_style(&self) -> String {
        css::render(&self.config)
    }
}

impl Default for MagicCss {
    fn default() -> Self {
        Self::new(Options::default())
    }
}
