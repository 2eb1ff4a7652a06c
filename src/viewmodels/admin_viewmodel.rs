// ============================================================================
// ADMIN VIEWMODEL - Sesión, analíticas y edición de creatividades
// ============================================================================

use gloo_timers::callback::Interval;
use wasm_bindgen_futures::spawn_local;
use crate::models::{AdPosition, AdUpdateRequest};
use crate::services::api_client::ApiClient;
use crate::state::AppState;
use crate::utils::constants::STATS_REFRESH_MS;

/// Login del admin. Las credenciales solo viajan en el request; después
/// del call solo queda el flag de sesión.
pub fn login(state: &AppState, username: String, password: String) {
    if username.is_empty() || password.is_empty() {
        state.admin.set_login_error(Some("Please enter username and password".to_string()));
        crate::rerender_app();
        return;
    }

    state.admin.set_login_error(None);

    let state = state.clone();
    spawn_local(async move {
        let api = ApiClient::new();
        match api.login(&username, &password).await {
            Ok(response) if response.success => {
                log::info!("✅ Login de admin correcto");
                state.admin.set_logged_in(true);
                load_ads(&state);
                start_stats_polling(&state);
            }
            Ok(response) => {
                // Rechazo del dominio: el mensaje del servidor tal cual
                let message = response.message.unwrap_or_else(|| "Login failed".to_string());
                state.admin.set_login_error(Some(message));
            }
            Err(e) => {
                log::error!("❌ Error en login: {}", e);
                state.admin.set_login_error(Some("Login failed. Please try again.".to_string()));
            }
        }
        crate::rerender_app();
    });
}

/// Logout client-side: la sesión es stateless, no hay call al servidor.
/// Parar el polling es parte del teardown.
pub fn logout(state: &AppState) {
    log::info!("🚪 Logout de admin");
    state.admin.logout();
    crate::rerender_app();
}

/// Arrancar el polling de analíticas: un fetch inmediato y después un
/// tick cada 5 segundos. El handle queda en AdminState; soltarlo (logout
/// o teardown) cancela el timer.
pub fn start_stats_polling(state: &AppState) {
    fetch_stats(state);

    let tick_state = state.clone();
    let interval = Interval::new(STATS_REFRESH_MS, move || {
        // Un tick que corra después del logout no debe hacer fetch
        if !tick_state.admin.is_logged_in() {
            return;
        }
        fetch_stats(&tick_state);
    });

    state.admin.set_stats_poller(Some(interval));
}

/// Un fetch de analíticas. El fallo se loggea y el snapshot anterior
/// sigue en pantalla; el polling continúa.
fn fetch_stats(state: &AppState) {
    let state = state.clone();
    spawn_local(async move {
        let api = ApiClient::new();
        match api.get_stats().await {
            Ok(stats) => {
                // Llegada tardía después del logout: ignorar
                if !state.admin.is_logged_in() {
                    return;
                }
                state.admin.set_stats(Some(stats.clone()));
                // Actualización in-place para no destruir el foco de los
                // inputs de edición; re-render completo solo la primera vez
                if !crate::views::admin::update_stats_display(&stats) {
                    crate::rerender_app();
                }
            }
            Err(e) => {
                log::error!("❌ Error cargando analíticas: {}", e);
            }
        }
    });
}

/// Cargar la lista de creatividades para la vista admin
pub fn load_ads(state: &AppState) {
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

/// Commit de la creatividad de un slot. Precondición: borrador con ambas
/// URLs; si no, error de validación y ningún call.
pub fn commit_ad(state: &AppState, position: AdPosition) {
    let draft = state.admin.draft_for(position);
    let Some((image_url, link_url)) = draft.complete() else {
        state.admin.set_notice(Some("Please provide both image URL and link URL".to_string()));
        crate::rerender_app();
        return;
    };

    let request = AdUpdateRequest {
        position: position.as_str().to_string(),
        image_url,
        link_url,
    };

    let state = state.clone();
    spawn_local(async move {
        let api = ApiClient::new();
        match api.update_ad(&request).await {
            Ok(()) => {
                state.admin.set_notice(Some("Ad updated successfully!".to_string()));
                reload_ads_after_commit(&state, position);
            }
            Err(e) => {
                // El borrador queda intacto para reintentar
                log::error!("❌ Error actualizando creatividad: {}", e);
                state.admin.set_notice(Some("Error updating ad. Please try again.".to_string()));
                crate::rerender_app();
            }
        }
    });
}

/// Reload de la lista después de un commit exitoso: el resolver pasa a
/// reflejar el estado commiteado y el borrador del slot se limpia. Si el
/// reload falla, el borrador se conserva.
fn reload_ads_after_commit(state: &AppState, position: AdPosition) {
    let state = state.clone();
    spawn_local(async move {
        let api = ApiClient::new();
        match api.get_ads().await {
            Ok(ads) => {
                state.ads.set_ads(ads);
                state.admin.clear_draft(position);
            }
            Err(e) => {
                log::error!("❌ Error recargando creatividades: {}", e);
            }
        }
        crate::rerender_app();
    });
}
