// ============================================================================
// VISITOR SERVICE - Notificación de visita (fire-and-forget)
// ============================================================================

use wasm_bindgen_futures::spawn_local;
use crate::services::api_client::ApiClient;

/// Notificar la visita al backend sin bloquear nada más.
/// El fallo se loggea y nunca se muestra ni afecta a otro componente.
pub fn track_visit() {
    // Pseudo-identificador de visitante (no es una IP real)
    let visitor_id = format!("user_{}", js_sys::Date::now() as u64);

    spawn_local(async move {
        let api = ApiClient::new();
        match api.track_visitor(&visitor_id).await {
            Ok(()) => {
                log::info!("👋 Visita registrada: {}", visitor_id);
            }
            Err(e) => {
                log::error!("❌ Error registrando visita: {}", e);
            }
        }
    });
}
