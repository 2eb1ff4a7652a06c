// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO tiene lógica de negocio, solo hace requests HTTP contra {backend}/api
// ============================================================================

use gloo_net::http::Request;
use crate::models::{Ad, AdUpdateRequest, GenerationKind, GenerationRequest, GenerationResponse, LoginRequest, LoginResponse, VisitorStats};
use crate::utils::constants::BACKEND_URL;

/// Cliente API - SOLO comunicación HTTP (stateless)
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            base_url: format!("{}/api", BACKEND_URL),
        }
    }

    /// Listar creatividades publicitarias (todas las posiciones con contenido)
    pub async fn get_ads(&self) -> Result<Vec<Ad>, String> {
        let url = format!("{}/admin/ads", self.base_url);
        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;
        if !response.ok() {
            return Err(format!("HTTP {}: {}", response.status(), response.status_text()));
        }
        response.json::<Vec<Ad>>()
            .await
            .map_err(|e| format!("Parse error: {}", e))
    }

    /// Actualizar la creatividad de un slot (ambos campos obligatorios)
    pub async fn update_ad(&self, request: &AdUpdateRequest) -> Result<(), String> {
        let url = format!("{}/admin/ads", self.base_url);

        log::info!("📢 Actualizando creatividad del slot: {}", request.position);

        let response = Request::post(&url)
            .json(request)
            .map_err(|e| format!("Serialization error: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if response.ok() {
            Ok(())
        } else {
            Err(format!("HTTP {}: {}", response.status(), response.status_text()))
        }
    }

    /// Login del admin. El flag `success` de la respuesta decide la sesión;
    /// las credenciales no se retienen después de este call.
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, String> {
        let url = format!("{}/admin/login", self.base_url);
        let request = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };

        log::info!("🔐 Enviando login de admin: {}", username);

        let response = Request::post(&url)
            .json(&request)
            .map_err(|e| format!("Serialization error: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if response.ok() {
            response.json::<LoginResponse>().await
                .map_err(|e| format!("Parse error: {}", e))
        } else {
            Err(format!("HTTP {}: {}", response.status(), response.status_text()))
        }
    }

    /// Obtener snapshot de analíticas de visitantes
    pub async fn get_stats(&self) -> Result<VisitorStats, String> {
        let url = format!("{}/admin/stats", self.base_url);
        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;
        if !response.ok() {
            return Err(format!("HTTP {}: {}", response.status(), response.status_text()));
        }
        response.json::<VisitorStats>()
            .await
            .map_err(|e| format!("Parse error: {}", e))
    }

    /// Notificar una visita (identificador pseudo-anónimo via query param)
    pub async fn track_visitor(&self, visitor_id: &str) -> Result<(), String> {
        let url = format!("{}/visitor/track", self.base_url);
        let response = Request::post(&url)
            .query([("ip_address", visitor_id)])
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if response.ok() {
            Ok(())
        } else {
            Err(format!("HTTP {}: {}", response.status(), response.status_text()))
        }
    }

    /// Generar resumen o cuestionario a partir de los payloads de imágenes
    pub async fn generate(
        &self,
        kind: GenerationKind,
        images: Vec<String>,
    ) -> Result<GenerationResponse, String> {
        let url = format!("{}/generate/{}", self.base_url, kind.endpoint());
        let request = GenerationRequest { images };

        log::info!("🧠 Solicitando generación '{}' con {} imágenes", kind.endpoint(), request.images.len());

        let response = Request::post(&url)
            .json(&request)
            .map_err(|e| format!("Serialization error: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            let status = response.status();
            let error_text = response.text().await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(format!("HTTP error {}: {}", status, error_text));
        }

        response
            .json::<GenerationResponse>()
            .await
            .map_err(|e| format!("Parse error: {}", e))
    }
}
