//! WASM bindings for datatree-core.
//!
//! The host page owns the opened set. On every user action it applies the
//! action's `op` to its own list of identities and calls [`render`] again.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p datatree-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir packages/datatree-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/datatree_wasm.wasm
//! ```

use datatree_core::{DisclosureState, Renderer};
use wasm_bindgen::prelude::*;

/// Render a JSON value and return the render tree as JSON.
///
/// `opened_json` is a JSON array of opened identity strings. Throws a JS
/// error if either argument is not valid JSON.
#[wasm_bindgen]
pub fn render(
    json: &str,
    identity: &str,
    opened_json: &str,
    hide_type: Option<String>,
) -> std::result::Result<String, JsValue> {
    let disclosure = parse_opened(opened_json)?;
    let tree = Renderer::default()
        .render_json(json, identity, &disclosure, hide_type.as_deref())
        .map_err(to_js_error)?;
    serde_json::to_string(&tree).map_err(to_js_error)
}

/// Render a JSON value as indented plain text.
#[wasm_bindgen(js_name = renderText)]
pub fn render_text(
    json: &str,
    identity: &str,
    opened_json: &str,
) -> std::result::Result<String, JsValue> {
    let disclosure = parse_opened(opened_json)?;
    let tree = Renderer::default()
        .render_json(json, identity, &disclosure, None)
        .map_err(to_js_error)?;
    Ok(tree.to_string())
}

fn parse_opened(opened_json: &str) -> std::result::Result<DisclosureState, JsValue> {
    let ids: Vec<String> = serde_json::from_str(opened_json).map_err(to_js_error)?;
    Ok(ids.into_iter().collect())
}

fn to_js_error(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}
