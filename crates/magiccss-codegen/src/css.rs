//! Stylesheet synthesizer.
//!
//! Renders a merged configuration into CSS text, in a fixed order:
//! the `:root` custom properties, the preset utility classes, then the
//! classes derived from colors, variables and caller-defined classes.
//! Nothing is deduplicated; repeated names produce repeated rules.

use magiccss_config::{
    ClassEntry, ColorEntry, Declaration, MergedConfig, VariableEntry, VariableValue,
};

/// Layout and typography utilities emitted after `:root`.
/// Independent of configuration.
pub const PRESET: &str = r#"body { font-family: var(--font-family); }
body * { box-sizing: border-box; }
h1, h2, h3, h4, h5, p { margin-top: 0; margin-bottom: 0; }
a, button, .cursor { cursor: pointer; user-select: none; }
button { border: none; }
.center { text-align: center; }
.left { text-align: left; }
.right { text-align: right; }
.flex { display: flex; }
.flex-all { display: flex; flex-direction: column; justify-content: center; align-items: center; }
.flex-wrap { display: flex; flex-wrap: wrap; }
.flex-center { display: flex; align-items: center; }
.flex-row { display: flex; flex-direction: row; }
.flex-column { display: flex; flex-direction: column; }
.flex-start { display: flex; align-items: flex-start; }
.flex-end { display: flex; align-items: flex-end; }
.justify-center { justify-content: center; }
.justify-between { justify-content: space-between; }
.justify-around { justify-content: space-around; }
.relative { position: relative; }
.fill { position: absolute; left: 0; right: 0; top: 0; bottom: 0; }
.uppercase { text-transform: uppercase; }
.lowercase { text-transform: lowercase; }
.capitalize { text-transform: capitalize; }
.bold { font-weight: bold; }
.normal { font-weight: normal; }
"#;

/// Render a merged configuration to CSS.
pub fn render(config: &MergedConfig) -> String {
    let mut css = String::new();

    render_root(config, &mut css);
    css.push_str(PRESET);
    for color in &config.colors {
        render_color_classes(color, &mut css);
    }
    for variable in &config.variables {
        render_variable_classes(variable, &mut css);
    }
    for class in &config.classes {
        render_class(class, &mut css);
    }

    tracing::debug!(bytes = css.len(), "rendered stylesheet");
    css
}

fn render_root(config: &MergedConfig, out: &mut String) {
    out.push_str(":root {\n");
    out.push_str(&format!("  --font-family: {};\n", config.font_family));

    for color in &config.colors {
        out.push_str(&format!("  --color-{}: {};\n", color.name(), color.value()));
    }

    for variable in &config.variables {
        let key = &variable.key;
        match &variable.value {
            VariableValue::Scalar(value) => {
                out.push_str(&format!("  --{key}: {value};\n"));
            }
            VariableValue::Variants(variants) => {
                for variant in variants {
                    out.push_str(&format!("  --{key}-{}: {};\n", variant.name, variant.value));
                }
            }
        }
    }

    out.push_str("}\n");
}

fn render_color_classes(color: &ColorEntry, out: &mut String) {
    let name = color.name();
    out.push_str(&format!(".col-{name} {{ color: var(--color-{name}); }}\n"));
    out.push_str(&format!(
        ".bg-{name} {{ background-color: var(--color-{name}); }}\n"
    ));
}

/// The variable key doubles as the CSS property of the derived class.
fn render_variable_classes(variable: &VariableEntry, out: &mut String) {
    let key = &variable.key;
    match &variable.value {
        VariableValue::Scalar(_) => {
            out.push_str(&format!(".{key} {{ {key}: var(--{key}); }}\n"));
        }
        VariableValue::Variants(variants) => {
            for variant in variants {
                let name = &variant.name;
                out.push_str(&format!(
                    ".{key}-{name} {{ {key}: var(--{key}-{name}); }}\n"
                ));
            }
        }
    }
}

fn render_class(class: &ClassEntry, out: &mut String) {
    let body: Vec<String> = class.declarations.iter().map(render_declaration).collect();
    if body.is_empty() {
        out.push_str(&format!(".{} {{ }}\n", class.name));
    } else {
        out.push_str(&format!(".{} {{ {} }}\n", class.name, body.join(" ")));
    }
}

fn render_declaration(declaration: &Declaration) -> String {
    match declaration {
        Declaration::BareToken(token) => token.clone(),
        Declaration::KeyValue { property, value } => format!("{property}: {value};"),
    }
}
