// ============================================================================
// HOME VIEWMODEL - Lógica de la vista pública
// ============================================================================
// Intake de imágenes, orquestación de la generación y efectos de montaje
// (carga de creatividades + notificación de visita)
// ============================================================================

use wasm_bindgen_futures::spawn_local;
use crate::models::GenerationKind;
use crate::services::api_client::ApiClient;
use crate::services::visitor_service;
use crate::state::AppState;

/// Efectos de montaje de la vista pública. Idempotente: los flags en
/// AppState garantizan una sola ejecución por carga de página aunque la
/// vista se re-renderice.
pub fn mount_home(state: &AppState) {
    ensure_visit_tracked(state);
    ensure_ads_loaded(state);
}

fn ensure_visit_tracked(state: &AppState) {
    if *state.visit_tracked.borrow() {
        return;
    }
    *state.visit_tracked.borrow_mut() = true;
    visitor_service::track_visit();
}

fn ensure_ads_loaded(state: &AppState) {
    // Una fetch por montaje: ni repetida ni re-disparada mientras está en vuelo
    if state.ads.is_loaded() || *state.ads_requested.borrow() {
        return;
    }
    *state.ads_requested.borrow_mut() = true;

    let state = state.clone();
    spawn_local(async move {
        let api = ApiClient::new();
        match api.get_ads().await {
            Ok(ads) => {
                log::info!("📢 {} creatividades recibidas", ads.len());
                state.ads.set_ads(ads);
                crate::rerender_app();
            }
            Err(e) => {
                log::error!("❌ Error cargando creatividades: {}", e);
            }
        }
    });
}

/// Añadir los archivos seleccionados. Cada uno se decodifica a data URL
/// y se añade en ORDEN DE SELECCIÓN: los decodes se esperan uno a uno en
/// ese orden, no en orden de llegada.
pub fn add_files(state: &AppState, files: Vec<web_sys::File>) {
    if files.is_empty() {
        return;
    }

    let state = state.clone();
    spawn_local(async move {
        for file in files {
            let file = gloo_file::File::from(file);
            match gloo_file::futures::read_as_data_url(&file).await {
                Ok(data_url) => {
                    state.images.push(data_url);
                    crate::rerender_app();
                }
                Err(e) => {
                    log::error!("❌ Error leyendo archivo '{}': {}", file.name(), e);
                }
            }
        }
    });
}

/// Quitar una imagen por posición
pub fn remove_image(state: &AppState, index: usize) {
    state.images.remove_at(index);
    crate::rerender_app();
}

/// Vaciar todas las imágenes
pub fn clear_images(state: &AppState) {
    state.images.clear();
    crate::rerender_app();
}

/// Orquestación de la generación (resumen o cuestionario).
/// Sin imágenes no hay request; el resultado anterior no se toca.
pub fn generate(state: &AppState, kind: GenerationKind) {
    if state.images.is_empty() {
        state.generation.set_validation_error("Please upload at least one image");
        crate::rerender_app();
        return;
    }

    // Snapshot de payloads antes de ceder el hilo: el request lleva las
    // imágenes vigentes en el momento del click
    let payloads = state.images.payloads();
    let token = state.generation.begin();
    crate::rerender_app();

    let state = state.clone();
    spawn_local(async move {
        let api = ApiClient::new();
        match api.generate(kind, payloads).await {
            Ok(response) => {
                if state.generation.complete_success(token, kind, response.result) {
                    crate::rerender_app();
                }
            }
            Err(e) => {
                log::error!("❌ Error generando '{}': {}", kind.endpoint(), e);
                if state.generation.complete_failure(token, kind.error_message().to_string()) {
                    crate::rerender_app();
                }
            }
        }
    });
}
