// ============================================================================
// ADMIN VIEW - Login y dashboard (analíticas + gestión de creatividades)
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlInputElement};
use crate::dom::{ElementBuilder, append_child, get_element_by_id, on_click, on_input, set_text_content};
use crate::models::{AdPosition, VisitorStats};
use crate::state::{AdField, AppState};
use crate::viewmodels::admin_viewmodel;

/// Renderizar la vista admin: login o dashboard según la sesión
pub fn render_admin(state: &AppState) -> Result<Element, JsValue> {
    if state.admin.is_logged_in() {
        render_dashboard(state)
    } else {
        render_login(state)
    }
}

/// Formulario de login. Las credenciales viven en closures locales a la
/// vista; al estado global solo llega el flag de sesión.
fn render_login(state: &AppState) -> Result<Element, JsValue> {
    let container = ElementBuilder::new("div")?.class("admin-container").build();
    let card = ElementBuilder::new("div")?.class("admin-card").build();

    let title = ElementBuilder::new("h1")?
        .class("admin-title")
        .text("Admin Login")
        .build();
    append_child(&card, &title)?;

    let form = ElementBuilder::new("form")?.class("login-form").build();

    let username = Rc::new(RefCell::new(String::new()));
    let password = Rc::new(RefCell::new(String::new()));

    append_child(&form, &create_form_input("Username", "text", username.clone())?)?;
    append_child(&form, &create_form_input("Password", "password", password.clone())?)?;

    if let Some(error) = state.admin.login_error() {
        let error_box = ElementBuilder::new("div")?
            .class("error-message")
            .text(&error)
            .build();
        append_child(&form, &error_box)?;
    }

    let login_btn = ElementBuilder::new("button")?
        .class("btn btn-primary btn-block")
        .attr("type", "button")?
        .text("Login")
        .build();
    {
        let state = state.clone();
        on_click(&login_btn, move |_| {
            admin_viewmodel::login(&state, username.borrow().clone(), password.borrow().clone());
        })?;
    }
    append_child(&form, &login_btn)?;

    append_child(&card, &form)?;
    append_child(&container, &card)?;
    Ok(container)
}

fn create_form_input(label: &str, input_type: &str, value: Rc<RefCell<String>>) -> Result<Element, JsValue> {
    let group = ElementBuilder::new("div")?.class("form-group").build();
    let label_el = ElementBuilder::new("label")?
        .class("form-label")
        .text(label)
        .build();
    append_child(&group, &label_el)?;

    let input = ElementBuilder::new("input")?
        .class("form-input")
        .attr("type", input_type)?
        .build();
    on_input(&input, move |event| {
        if let Some(input) = event.target().and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) {
            *value.borrow_mut() = input.value();
        }
    })?;
    append_child(&group, &input)?;
    Ok(group)
}

fn render_dashboard(state: &AppState) -> Result<Element, JsValue> {
    let container = ElementBuilder::new("div")?.class("app-container").build();
    append_child(&container, &create_admin_header(state)?)?;

    let content = ElementBuilder::new("div")?.class("admin-content").build();
    let card = ElementBuilder::new("div")?.class("admin-card").build();

    let stats_title = ElementBuilder::new("h2")?
        .class("admin-title")
        .text("Visitor Analytics")
        .build();
    append_child(&card, &stats_title)?;

    if let Some(stats) = state.admin.stats() {
        append_child(&card, &create_stats_grid(&stats)?)?;
    }

    let ads_title = ElementBuilder::new("h2")?
        .class("admin-title")
        .text("Ad Management")
        .build();
    append_child(&card, &ads_title)?;

    if let Some(notice) = state.admin.notice() {
        let notice_box = ElementBuilder::new("div")?
            .class("admin-notice")
            .text(&notice)
            .build();
        append_child(&card, &notice_box)?;
    }

    let grid = ElementBuilder::new("div")?.class("ad-management-grid").build();
    for position in AdPosition::ALL {
        append_child(&grid, &create_ad_edit_card(state, position)?)?;
    }
    append_child(&card, &grid)?;

    append_child(&content, &card)?;
    append_child(&container, &content)?;
    Ok(container)
}

fn create_admin_header(state: &AppState) -> Result<Element, JsValue> {
    let header = ElementBuilder::new("header")?.class("header").build();
    let content = ElementBuilder::new("div")?.class("header-content").build();

    let logo = ElementBuilder::new("a")?
        .class("logo")
        .attr("href", "/admin")?
        .text("Exam Bot Admin")
        .build();
    append_child(&content, &logo)?;

    let actions = ElementBuilder::new("div")?.class("header-actions").build();

    let home_link = ElementBuilder::new("a")?
        .class("btn btn-secondary")
        .attr("href", "/")?
        .text("Back to Home")
        .build();
    append_child(&actions, &home_link)?;

    let logout_btn = ElementBuilder::new("button")?
        .class("btn btn-secondary")
        .text("Logout")
        .build();
    {
        let state = state.clone();
        on_click(&logout_btn, move |_| {
            admin_viewmodel::logout(&state);
        })?;
    }
    append_child(&actions, &logout_btn)?;

    append_child(&content, &actions)?;
    append_child(&header, &content)?;
    Ok(header)
}

fn create_stats_grid(stats: &VisitorStats) -> Result<Element, JsValue> {
    let grid = ElementBuilder::new("div")?.class("stats-grid").build();
    let cards = [
        ("stat-realtime", stats.realtime, "Real-time (5 min)"),
        ("stat-daily", stats.daily, "Daily Visitors"),
        ("stat-weekly", stats.weekly, "Weekly Visitors"),
        ("stat-monthly", stats.monthly, "Monthly Visitors"),
    ];

    for (id, value, label) in cards {
        let card = ElementBuilder::new("div")?.class("stat-card").build();
        let value_el = ElementBuilder::new("div")?
            .class("stat-value")
            .id(id)?
            .text(&value.to_string())
            .build();
        let label_el = ElementBuilder::new("div")?
            .class("stat-label")
            .text(label)
            .build();
        append_child(&card, &value_el)?;
        append_child(&card, &label_el)?;
        append_child(&grid, &card)?;
    }

    Ok(grid)
}

/// Actualizar los valores del grid de analíticas in-place (un re-render
/// completo destruiría el foco de los inputs de edición). Devuelve false
/// si el grid todavía no está en el DOM.
pub fn update_stats_display(stats: &VisitorStats) -> bool {
    let cells = [
        ("stat-realtime", stats.realtime),
        ("stat-daily", stats.daily),
        ("stat-weekly", stats.weekly),
        ("stat-monthly", stats.monthly),
    ];

    for (id, value) in cells {
        match get_element_by_id(id) {
            Some(element) => set_text_content(&element, &value.to_string()),
            None => return false,
        }
    }
    true
}

fn create_ad_edit_card(state: &AppState, position: AdPosition) -> Result<Element, JsValue> {
    let card = ElementBuilder::new("div")?.class("ad-edit-card").build();

    let title = ElementBuilder::new("h3")?
        .class("ad-edit-title")
        .text(&position.as_str().to_uppercase())
        .build();
    append_child(&card, &title)?;

    let current = state.ads.raw_for(position);
    let draft = state.admin.draft_for(position);

    let image_placeholder = current
        .as_ref()
        .and_then(|ad| ad.image_url.clone())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "Enter image URL".to_string());
    let link_placeholder = current
        .as_ref()
        .and_then(|ad| ad.link_url.clone())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "Enter link URL".to_string());

    append_child(&card, &create_draft_input(
        state,
        position,
        AdField::ImageUrl,
        "Image URL",
        &image_placeholder,
        draft.image_url.as_deref().unwrap_or(""),
    )?)?;
    append_child(&card, &create_draft_input(
        state,
        position,
        AdField::LinkUrl,
        "Link URL",
        &link_placeholder,
        draft.link_url.as_deref().unwrap_or(""),
    )?)?;

    // Preview: el borrador manda; si no hay, la creatividad servida
    let preview_url = draft
        .image_url
        .clone()
        .filter(|s| !s.is_empty())
        .or_else(|| current.as_ref().and_then(|ad| ad.image_url.clone()).filter(|s| !s.is_empty()));
    if let Some(url) = preview_url {
        let preview = ElementBuilder::new("div")?.class("ad-preview").build();
        let img = ElementBuilder::new("img")?
            .attr("src", &url)?
            .attr("alt", &format!("{} preview", position.as_str()))?
            .build();
        append_child(&preview, &img)?;
        append_child(&card, &preview)?;
    }

    let update_btn = ElementBuilder::new("button")?
        .class("btn btn-primary btn-block")
        .text("Update Ad")
        .build();
    {
        let state = state.clone();
        on_click(&update_btn, move |_| {
            admin_viewmodel::commit_ad(&state, position);
        })?;
    }
    append_child(&card, &update_btn)?;

    Ok(card)
}

fn create_draft_input(
    state: &AppState,
    position: AdPosition,
    field: AdField,
    label: &str,
    placeholder: &str,
    value: &str,
) -> Result<Element, JsValue> {
    let group = ElementBuilder::new("div")?.class("form-group").build();
    let label_el = ElementBuilder::new("label")?
        .class("form-label")
        .text(label)
        .build();
    append_child(&group, &label_el)?;

    let input = ElementBuilder::new("input")?
        .class("form-input")
        .attr("type", "text")?
        .attr("placeholder", placeholder)?
        .build();
    if !value.is_empty() {
        if let Some(input) = input.dyn_ref::<HtmlInputElement>() {
            input.set_value(value);
        }
    }

    {
        let state = state.clone();
        on_input(&input, move |event| {
            if let Some(input) = event.target().and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) {
                // Merge en el borrador; sin re-render (el input conserva el foco)
                state.admin.update_draft_field(position, field, input.value());
            }
        })?;
    }

    append_child(&group, &input)?;
    Ok(group)
}
