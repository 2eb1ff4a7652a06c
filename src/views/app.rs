// ============================================================================
// APP VIEW - Dispatch de rutas
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::state::AppState;
use crate::views::{render_admin, render_home};

/// Renderizar la vista que corresponde al path actual (/ o /admin)
pub fn render_app(state: &AppState) -> Result<Element, JsValue> {
    let pathname = web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string());

    if pathname.starts_with("/admin") {
        render_admin(state)
    } else {
        render_home(state)
    }
}
