// ============================================================================
// HOME VIEW - Vista pública (subida de imágenes + generación + ads)
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, HtmlInputElement};
use crate::dom::{ElementBuilder, append_child, on_change, on_click, set_attribute};
use crate::models::{AdPosition, GenerationKind};
use crate::state::AppState;
use crate::viewmodels::home_viewmodel;
use crate::views::render_ad_block;

/// Renderizar la vista pública
pub fn render_home(state: &AppState) -> Result<Element, JsValue> {
    home_viewmodel::mount_home(state);

    let container = ElementBuilder::new("div")?
        .class("app-container")
        .build();

    append_child(&container, &create_header()?)?;

    // Ads mobile (top)
    let mobile_top = ElementBuilder::new("div")?.class("mobile-ads").build();
    append_child(&mobile_top, &render_ad_block(state, AdPosition::Top, "Sponsored")?)?;
    append_child(&container, &mobile_top)?;

    // Layout principal: columnas de ads a los lados, contenido al centro
    let layout = ElementBuilder::new("div")?.class("main-layout").build();

    let left = ElementBuilder::new("aside")?.class("ad-column").build();
    append_child(&left, &render_ad_block(state, AdPosition::Left1, "Sponsored")?)?;
    append_child(&left, &render_ad_block(state, AdPosition::Left2, "Sponsored")?)?;
    append_child(&layout, &left)?;

    append_child(&layout, &create_content(state)?)?;

    let right = ElementBuilder::new("aside")?.class("ad-column").build();
    append_child(&right, &render_ad_block(state, AdPosition::Right1, "Sponsored")?)?;
    append_child(&right, &render_ad_block(state, AdPosition::Right2, "Sponsored")?)?;
    append_child(&layout, &right)?;

    append_child(&container, &layout)?;

    // Ads mobile (bottom)
    let mobile_bottom = ElementBuilder::new("div")?.class("mobile-ads").build();
    append_child(&mobile_bottom, &render_ad_block(state, AdPosition::Bottom, "Sponsored")?)?;
    append_child(&container, &mobile_bottom)?;

    Ok(container)
}

fn create_header() -> Result<Element, JsValue> {
    let header = ElementBuilder::new("header")?.class("header").build();
    let content = ElementBuilder::new("div")?.class("header-content").build();
    let logo = ElementBuilder::new("a")?
        .class("logo")
        .attr("href", "/")?
        .text("Exam Bot")
        .build();
    append_child(&content, &logo)?;
    append_child(&header, &content)?;
    Ok(header)
}

fn create_content(state: &AppState) -> Result<Element, JsValue> {
    let content = ElementBuilder::new("main")?.class("content-area").build();

    let title = ElementBuilder::new("h1")?
        .class("content-title")
        .text("Exam Bot - AI Study Assistant")
        .build();
    append_child(&content, &title)?;

    let subtitle = ElementBuilder::new("p")?
        .class("content-subtitle")
        .text("Upload your study materials and generate summaries or question papers instantly")
        .build();
    append_child(&content, &subtitle)?;

    append_child(&content, &create_upload_zone(state)?)?;

    if !state.images.is_empty() {
        append_child(&content, &create_preview_grid(state)?)?;
    }

    append_child(&content, &create_button_group(state)?)?;

    if let Some(error) = state.generation.error() {
        let error_box = ElementBuilder::new("div")?
            .class("error-message")
            .text(&error)
            .build();
        append_child(&content, &error_box)?;
    }

    if state.generation.is_loading() {
        let loading = ElementBuilder::new("div")?.class("loading").build();
        let spinner = ElementBuilder::new("div")?.class("loading-spinner").build();
        append_child(&loading, &spinner)?;
        append_child(&content, &loading)?;
    }

    if let Some(result) = state.generation.result() {
        let result_container = ElementBuilder::new("div")?.class("result-container").build();
        let result_title = ElementBuilder::new("h2")?
            .class("result-title")
            .text(result.kind.title())
            .build();
        let result_content = ElementBuilder::new("div")?
            .class("result-content")
            .text(&result.text)
            .build();
        append_child(&result_container, &result_title)?;
        append_child(&result_container, &result_content)?;
        append_child(&content, &result_container)?;
    }

    Ok(content)
}

fn create_upload_zone(state: &AppState) -> Result<Element, JsValue> {
    let zone = ElementBuilder::new("div")?.class("upload-zone").build();

    let icon = ElementBuilder::new("div")?.class("upload-icon").text("📁").build();
    let heading = ElementBuilder::new("h3")?.text("Upload Images").build();
    let hint = ElementBuilder::new("p")?.text("Click to select images from your gallery").build();
    append_child(&zone, &icon)?;
    append_child(&zone, &heading)?;
    append_child(&zone, &hint)?;

    let input = ElementBuilder::new("input")?
        .id("file-input")?
        .attr("type", "file")?
        .attr("multiple", "")?
        .attr("accept", "image/*")?
        .attr("style", "display: none")?
        .build();

    // change → decodificar y añadir los archivos seleccionados
    {
        let state = state.clone();
        on_change(&input, move |event: web_sys::Event| {
            let Some(input) = event.target().and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) else {
                return;
            };
            let mut files = Vec::new();
            if let Some(list) = input.files() {
                for i in 0..list.length() {
                    if let Some(file) = list.item(i) {
                        files.push(file);
                    }
                }
            }
            // Dejar el input limpio: el mismo archivo se puede volver a elegir
            input.set_value("");
            home_viewmodel::add_files(&state, files);
        })?;
    }

    // click en la zona → abrir el picker
    {
        let input = input.clone();
        on_click(&zone, move |event| {
            // El click programático del input burbujea hasta la zona
            if let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) {
                if target.id() == "file-input" {
                    return;
                }
            }
            if let Some(html_input) = input.dyn_ref::<HtmlElement>() {
                html_input.click();
            }
        })?;
    }

    append_child(&zone, &input)?;
    Ok(zone)
}

fn create_preview_grid(state: &AppState) -> Result<Element, JsValue> {
    let grid = ElementBuilder::new("div")?.class("image-preview-grid").build();

    for (index, data_url) in state.images.data_urls().into_iter().enumerate() {
        let item = ElementBuilder::new("div")?.class("image-preview-item").build();

        let img = ElementBuilder::new("img")?
            .attr("src", &data_url)?
            .attr("alt", &format!("Preview {}", index + 1))?
            .build();
        append_child(&item, &img)?;

        let remove_btn = ElementBuilder::new("button")?
            .class("remove-image-btn")
            .text("×")
            .build();
        {
            let state = state.clone();
            on_click(&remove_btn, move |_| {
                home_viewmodel::remove_image(&state, index);
            })?;
        }
        append_child(&item, &remove_btn)?;

        append_child(&grid, &item)?;
    }

    Ok(grid)
}

fn create_button_group(state: &AppState) -> Result<Element, JsValue> {
    let group = ElementBuilder::new("div")?.class("button-group").build();

    let loading = state.generation.is_loading();
    let no_images = state.images.is_empty();

    let summary_btn = ElementBuilder::new("button")?
        .class("btn btn-primary")
        .text("📝 Generate Summary")
        .build();
    if loading || no_images {
        set_attribute(&summary_btn, "disabled", "")?;
    }
    {
        let state = state.clone();
        on_click(&summary_btn, move |_| {
            home_viewmodel::generate(&state, GenerationKind::Summary);
        })?;
    }
    append_child(&group, &summary_btn)?;

    let questions_btn = ElementBuilder::new("button")?
        .class("btn btn-primary")
        .text("📋 Generate Question Paper")
        .build();
    if loading || no_images {
        set_attribute(&questions_btn, "disabled", "")?;
    }
    {
        let state = state.clone();
        on_click(&questions_btn, move |_| {
            home_viewmodel::generate(&state, GenerationKind::Questions);
        })?;
    }
    append_child(&group, &questions_btn)?;

    if !no_images {
        let clear_btn = ElementBuilder::new("button")?
            .class("btn btn-secondary")
            .text("🗑️ Clear All")
            .build();
        if loading {
            set_attribute(&clear_btn, "disabled", "")?;
        }
        {
            let state = state.clone();
            on_click(&clear_btn, move |_| {
                home_viewmodel::clear_images(&state);
            })?;
        }
        append_child(&group, &clear_btn)?;
    }

    Ok(group)
}
