// ============================================================================
// APP STATE - Estado global de la aplicación
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use crate::state::{AdminState, AdsState, GenerationState, ImageState};

/// Estado global de la aplicación. Cada componente es dueño de su propio
/// struct de estado; no hay globals mutables sueltos.
#[derive(Clone)]
pub struct AppState {
    pub images: ImageState,
    pub generation: GenerationState,
    pub ads: AdsState,
    pub admin: AdminState,

    // Flags de montaje: efectos que corren una sola vez por carga de página
    pub visit_tracked: Rc<RefCell<bool>>,
    pub ads_requested: Rc<RefCell<bool>>,
}

impl AppState {
    /// Crear nuevo estado de aplicación
    pub fn new() -> Self {
        Self {
            images: ImageState::new(),
            generation: GenerationState::new(),
            ads: AdsState::new(),
            admin: AdminState::new(),
            visit_tracked: Rc::new(RefCell::new(false)),
            ads_requested: Rc::new(RefCell::new(false)),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GenerationKind;

    #[test]
    fn summary_flow_keeps_result_while_store_changes() {
        let state = AppState::new();
        state.images.push("data:image/png;base64,AAA".to_string());
        state.images.push("data:image/png;base64,BBB".to_string());

        let token = state.generation.begin();
        assert!(state.generation.complete_success(token, GenerationKind::Summary, "X".to_string()));
        let result = state.generation.result().unwrap();
        assert_eq!(result.kind, GenerationKind::Summary);
        assert_eq!(result.text, "X");

        // Quitar una imagen después no toca el resultado mostrado
        state.images.remove_at(0);
        assert_eq!(state.images.payloads(), vec!["BBB"]);
        assert_eq!(state.generation.result().unwrap().text, "X");
    }

    #[test]
    fn empty_store_means_no_generation_precondition() {
        let state = AppState::new();
        assert!(state.images.is_empty());

        // La validación local no invalida un resultado anterior
        let token = state.generation.begin();
        state.generation.complete_success(token, GenerationKind::Questions, "Q".to_string());
        state.images.clear();
        state.generation.set_validation_error("Please upload at least one image");
        assert_eq!(state.generation.result().unwrap().text, "Q");
    }
}
