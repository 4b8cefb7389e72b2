//! WASM bindings for MagicCSS.
//!
//! Exposes the generator as plain module exports via wasm-bindgen:
//! `getStyle(options)`, `withMedia(...)`, `withMobile(...)` and `version()`.

use magiccss_codegen::MagicCss;
use magiccss_config::model::format_number;
use magiccss_config::Options;
use wasm_bindgen::prelude::*;

/// Generate a stylesheet from an options object.
///
/// Accepts `{ theme?, fontFamily?, colors?, variables?, classes? }` and
/// returns the CSS text. Throws a JS error if the options are malformed.
#[wasm_bindgen(js_name = getStyle)]
pub fn get_style(options: JsValue) -> Result<String, JsError> {
    let options: Options = if options.is_undefined() || options.is_null() {
        Options::default()
    } else {
        serde_wasm_bindgen::from_value(options).map_err(|e| JsError::new(&e.to_string()))?
    };
    Ok(MagicCss::new(options).get_style())
}

/// Emit `property` across tiers given as `[general, 2x, 3x, mobile]`.
///
/// Strings are used as-is and numbers are printed in plain decimal form.
/// Missing, `null` or other entries are treated as absent.
#[wasm_bindgen(js_name = withMedia)]
pub fn with_media(selector: Option<String>, property: &str, tiers: js_sys::Array) -> String {
    let tiers: [Option<String>; 4] = std::array::from_fn(|i| tier_value(&tiers.get(i as u32)));
    magiccss_codegen::with_media(
        selector.as_deref(),
        property,
        tiers.each_ref().map(|tier| tier.as_deref()),
    )
}

fn tier_value(value: &JsValue) -> Option<String> {
    value
        .as_string()
        .or_else(|| value.as_f64().map(format_number))
}

/// Emit one mobile-only block per property, paired positionally with `values`.
#[wasm_bindgen(js_name = withMobile)]
pub fn with_mobile(properties: Vec<String>, values: Vec<String>) -> String {
    magiccss_codegen::with_mobile(&properties, &values)
}

/// Get the generator version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
