// ============================================================================
// EXAM BOT APP - FRONTEND MVVM (RUST PURO)
// ============================================================================
// Arquitectura MVVM estricta:
// - Views: funciones que renderizan DOM (sin lógica)
// - ViewModels: lógica UI + orquestación de requests
// - Services: SOLO comunicación API
// - State: state management con Rc<RefCell>
// - Models: estructuras compartidas con el backend
// ============================================================================

mod app;
mod dom;
mod models;
mod services;
mod state;
mod utils;
mod viewmodels;
mod views;

use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use crate::app::App;

// Instancia global de la app (un solo hilo lógico en el navegador)
thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    // Panic hook para mejor debugging
    console_error_panic_hook::set_once();

    // Inicializar logging
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("🚀 Exam Bot App - Rust puro + MVVM");

    let app = App::new()?;
    app.render()?;

    APP.with(|app_cell| {
        *app_cell.borrow_mut() = Some(app);
    });

    Ok(())
}

/// Re-render completo de la app (state → DOM), llamable desde cualquier
/// viewmodel después de mutar estado
pub fn rerender_app() {
    APP.with(|app_cell| {
        if let Some(ref app) = *app_cell.borrow() {
            if let Err(e) = app.render() {
                log::error!("❌ Error re-renderizando: {:?}", e);
            }
        }
    });
}
