use serde::{Deserialize, Serialize};

/// Credenciales de login del admin. Solo viven en el body del request.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Respuesta de login: flag explícito + mensaje del servidor si falló
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_login_carries_the_server_message() {
        let response: LoginResponse =
            serde_json::from_str(r#"{"success":false,"message":"bad credentials"}"#).unwrap();
        assert!(!response.success);
        assert_eq!(response.message.as_deref(), Some("bad credentials"));
    }

    #[test]
    fn success_response_may_omit_the_message() {
        let response: LoginResponse = serde_json::from_str(r#"{"success":true}"#).unwrap();
        assert!(response.success);
        assert!(response.message.is_none());
    }
}
