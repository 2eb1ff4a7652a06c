use serde::{Deserialize, Serialize};

/// Tipo de generación solicitada al backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationKind {
    Summary,
    Questions,
}

impl GenerationKind {
    /// Segmento de endpoint: /generate/{summary|questions}
    pub fn endpoint(&self) -> &'static str {
        match self {
            GenerationKind::Summary => "summary",
            GenerationKind::Questions => "questions",
        }
    }

    /// Título mostrado sobre el resultado
    pub fn title(&self) -> &'static str {
        match self {
            GenerationKind::Summary => "📝 Summary",
            GenerationKind::Questions => "📋 Question Paper",
        }
    }

    /// Mensaje genérico de error para el usuario (reintentar)
    pub fn error_message(&self) -> &'static str {
        match self {
            GenerationKind::Summary => "Error generating summary. Please try again.",
            GenerationKind::Questions => "Error generating questions. Please try again.",
        }
    }
}

/// Request de generación: payloads base64 de todas las imágenes actuales
#[derive(Debug, Clone, Serialize)]
pub struct GenerationRequest {
    pub images: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenerationResponse {
    pub result: String,
}

/// Resultado vivo en la UI, etiquetado con el tipo que lo produjo
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationResult {
    pub kind: GenerationKind,
    pub text: String,
}
