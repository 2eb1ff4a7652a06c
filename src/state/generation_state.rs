// ============================================================================
// GENERATION STATE - Máquina de estados de la generación
// ============================================================================
// Un request nuevo supera al que esté en vuelo: cada request recibe un
// token de la secuencia monotónica y su completion se descarta si el
// token ya no es el actual.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use crate::models::{GenerationKind, GenerationResult};

/// Estado de la generación (resumen / cuestionario)
#[derive(Clone)]
pub struct GenerationState {
    loading: Rc<RefCell<bool>>,
    result: Rc<RefCell<Option<GenerationResult>>>,
    error: Rc<RefCell<Option<String>>>,
    request_seq: Rc<RefCell<u64>>,
}

impl GenerationState {
    pub fn new() -> Self {
        Self {
            loading: Rc::new(RefCell::new(false)),
            result: Rc::new(RefCell::new(None)),
            error: Rc::new(RefCell::new(None)),
            request_seq: Rc::new(RefCell::new(0)),
        }
    }

    /// Empezar un request: invalida el resultado y el error anteriores y
    /// devuelve el token del request nuevo
    pub fn begin(&self) -> u64 {
        *self.result.borrow_mut() = None;
        *self.error.borrow_mut() = None;
        *self.loading.borrow_mut() = true;
        let mut seq = self.request_seq.borrow_mut();
        *seq += 1;
        *seq
    }

    fn is_current(&self, token: u64) -> bool {
        *self.request_seq.borrow() == token
    }

    /// Aplicar un resultado exitoso. Devuelve false si el token quedó
    /// obsoleto (otro request lo superó) y el resultado fue descartado.
    pub fn complete_success(&self, token: u64, kind: GenerationKind, text: String) -> bool {
        if !self.is_current(token) {
            log::warn!("⚠️ Respuesta de generación obsoleta descartada (token {})", token);
            return false;
        }
        *self.result.borrow_mut() = Some(GenerationResult { kind, text });
        *self.loading.borrow_mut() = false;
        true
    }

    /// Aplicar un fallo. Mismo descarte por token que el caso exitoso.
    pub fn complete_failure(&self, token: u64, message: String) -> bool {
        if !self.is_current(token) {
            log::warn!("⚠️ Fallo de generación obsoleto descartado (token {})", token);
            return false;
        }
        *self.error.borrow_mut() = Some(message);
        *self.loading.borrow_mut() = false;
        true
    }

    /// Error de validación local (sin request). No toca el resultado actual.
    pub fn set_validation_error(&self, message: &str) {
        *self.error.borrow_mut() = Some(message.to_string());
    }

    pub fn is_loading(&self) -> bool {
        *self.loading.borrow()
    }

    pub fn result(&self) -> Option<GenerationResult> {
        self.result.borrow().clone()
    }

    pub fn error(&self) -> Option<String> {
        self.error.borrow().clone()
    }
}

impl Default for GenerationState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_clears_previous_result_while_in_flight() {
        let state = GenerationState::new();
        let t1 = state.begin();
        assert!(state.complete_success(t1, GenerationKind::Summary, "X".to_string()));
        assert!(state.result().is_some());

        let _t2 = state.begin();
        assert!(state.result().is_none());
        assert!(state.is_loading());
    }

    #[test]
    fn stale_success_is_dropped() {
        let state = GenerationState::new();
        let t1 = state.begin();
        let t2 = state.begin();

        // El primer request resuelve después del segundo: se descarta
        assert!(!state.complete_success(t1, GenerationKind::Summary, "viejo".to_string()));
        assert!(state.result().is_none());
        assert!(state.is_loading());

        assert!(state.complete_success(t2, GenerationKind::Questions, "nuevo".to_string()));
        let result = state.result().unwrap();
        assert_eq!(result.kind, GenerationKind::Questions);
        assert_eq!(result.text, "nuevo");
        assert!(!state.is_loading());
    }

    #[test]
    fn stale_failure_is_dropped() {
        let state = GenerationState::new();
        let t1 = state.begin();
        let t2 = state.begin();

        assert!(!state.complete_failure(t1, "error viejo".to_string()));
        assert!(state.error().is_none());

        assert!(state.complete_failure(t2, "error actual".to_string()));
        assert_eq!(state.error().as_deref(), Some("error actual"));
        assert!(!state.is_loading());
    }

    #[test]
    fn validation_error_leaves_prior_result_untouched() {
        let state = GenerationState::new();
        let t1 = state.begin();
        assert!(state.complete_success(t1, GenerationKind::Summary, "X".to_string()));

        state.set_validation_error("Please upload at least one image");
        assert_eq!(state.result().unwrap().text, "X");
        assert_eq!(state.error().as_deref(), Some("Please upload at least one image"));
    }
}
