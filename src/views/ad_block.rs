// ============================================================================
// AD BLOCK - Bloque publicitario con fallback a placeholder
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{ElementBuilder, append_child};
use crate::models::AdPosition;
use crate::state::AppState;

/// Renderizar un slot publicitario: la creatividad completa con su link,
/// o el placeholder si el slot no tiene creatividad servible
pub fn render_ad_block(state: &AppState, position: AdPosition, label: &str) -> Result<Element, JsValue> {
    let block = ElementBuilder::new("div")?
        .class("ad-block")
        .attr("data-testid", &format!("ad-{}", position.as_str()))?
        .build();

    let ad_label = ElementBuilder::new("div")?
        .class("ad-label")
        .text(label)
        .build();
    append_child(&block, &ad_label)?;

    match state.ads.creative_for(position) {
        Some(ad) => {
            // creative_for garantiza ambas URLs presentes
            let link = ElementBuilder::new("a")?
                .attr("href", ad.link_url.as_deref().unwrap_or_default())?
                .attr("target", "_blank")?
                .attr("rel", "noopener noreferrer")?
                .build();

            let image = ElementBuilder::new("img")?
                .class("ad-image")
                .attr("src", ad.image_url.as_deref().unwrap_or_default())?
                .attr("alt", label)?
                .build();

            append_child(&link, &image)?;
            append_child(&block, &link)?;
        }
        None => {
            let placeholder = ElementBuilder::new("div")?
                .class("ad-placeholder")
                .text("Ad Placeholder")
                .build();
            append_child(&block, &placeholder)?;
        }
    }

    Ok(block)
}
