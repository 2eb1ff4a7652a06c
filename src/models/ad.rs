use serde::{Deserialize, Serialize};

/// Posición de un bloque publicitario. Conjunto cerrado de seis slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdPosition {
    Top,
    Bottom,
    Left1,
    Left2,
    Right1,
    Right2,
}

impl AdPosition {
    /// Todas las posiciones, en el orden del grid de administración
    pub const ALL: [AdPosition; 6] = [
        AdPosition::Left1,
        AdPosition::Left2,
        AdPosition::Right1,
        AdPosition::Right2,
        AdPosition::Top,
        AdPosition::Bottom,
    ];

    /// Identificador wire ("top", "left1", ...)
    pub fn as_str(&self) -> &'static str {
        match self {
            AdPosition::Top => "top",
            AdPosition::Bottom => "bottom",
            AdPosition::Left1 => "left1",
            AdPosition::Left2 => "left2",
            AdPosition::Right1 => "right1",
            AdPosition::Right2 => "right2",
        }
    }
}

/// Creatividad servida para un slot.
/// La posición se mantiene como string wire: una posición desconocida
/// devuelta por el backend no debe romper la deserialización de la lista.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ad {
    pub position: String,
    pub image_url: Option<String>,
    pub link_url: Option<String>,
}

impl Ad {
    /// Una creatividad solo es servible con ambas URLs presentes y no vacías
    pub fn is_complete(&self) -> bool {
        let filled = |v: &Option<String>| v.as_deref().map(|s| !s.is_empty()).unwrap_or(false);
        filled(&self.image_url) && filled(&self.link_url)
    }
}

/// Request de actualización de una creatividad (ambos campos obligatorios)
#[derive(Debug, Clone, Serialize)]
pub struct AdUpdateRequest {
    pub position: String,
    pub image_url: String,
    pub link_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_wire_ids_are_lowercase() {
        let ids: Vec<&str> = AdPosition::ALL.iter().map(|p| p.as_str()).collect();
        assert_eq!(ids, vec!["left1", "left2", "right1", "right2", "top", "bottom"]);
    }

    #[test]
    fn partial_creative_is_not_complete() {
        let ad = Ad {
            position: "top".to_string(),
            image_url: Some("https://cdn.example.com/banner.png".to_string()),
            link_url: None,
        };
        assert!(!ad.is_complete());

        let ad = Ad {
            position: "top".to_string(),
            image_url: Some(String::new()),
            link_url: Some("https://example.com".to_string()),
        };
        assert!(!ad.is_complete());
    }

    #[test]
    fn full_creative_is_complete() {
        let ad = Ad {
            position: "left1".to_string(),
            image_url: Some("https://cdn.example.com/banner.png".to_string()),
            link_url: Some("https://example.com".to_string()),
        };
        assert!(ad.is_complete());
    }
}
