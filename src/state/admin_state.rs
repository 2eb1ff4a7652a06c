// ============================================================================
// ADMIN STATE - Sesión admin, analíticas y borradores de creatividades
// ============================================================================
// La sesión es volátil: vive en memoria y muere con la vista. El handle
// del polling de analíticas vive aquí; soltarlo cancela el timer.
// ============================================================================

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use gloo_timers::callback::Interval;
use crate::models::{AdPosition, VisitorStats};

/// Campo editable de una creatividad
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdField {
    ImageUrl,
    LinkUrl,
}

/// Borrador parcial de la creatividad de un slot. Cada cambio de campo
/// se mergea sobre el borrador existente, nunca lo reemplaza entero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdDraft {
    pub image_url: Option<String>,
    pub link_url: Option<String>,
}

impl AdDraft {
    /// Par (image_url, link_url) solo si ambos campos están listos
    pub fn complete(&self) -> Option<(String, String)> {
        let image = self.image_url.as_deref().filter(|s| !s.is_empty())?;
        let link = self.link_url.as_deref().filter(|s| !s.is_empty())?;
        Some((image.to_string(), link.to_string()))
    }
}

/// Estado de la sesión admin
#[derive(Clone)]
pub struct AdminState {
    logged_in: Rc<RefCell<bool>>,
    login_error: Rc<RefCell<Option<String>>>,
    stats: Rc<RefCell<Option<VisitorStats>>>,
    drafts: Rc<RefCell<HashMap<AdPosition, AdDraft>>>,
    notice: Rc<RefCell<Option<String>>>,
    stats_poller: Rc<RefCell<Option<Interval>>>,
}

impl AdminState {
    pub fn new() -> Self {
        Self {
            logged_in: Rc::new(RefCell::new(false)),
            login_error: Rc::new(RefCell::new(None)),
            stats: Rc::new(RefCell::new(None)),
            drafts: Rc::new(RefCell::new(HashMap::new())),
            notice: Rc::new(RefCell::new(None)),
            stats_poller: Rc::new(RefCell::new(None)),
        }
    }

    pub fn set_logged_in(&self, logged_in: bool) {
        *self.logged_in.borrow_mut() = logged_in;
    }

    pub fn is_logged_in(&self) -> bool {
        *self.logged_in.borrow()
    }

    pub fn set_login_error(&self, error: Option<String>) {
        *self.login_error.borrow_mut() = error;
    }

    pub fn login_error(&self) -> Option<String> {
        self.login_error.borrow().clone()
    }

    /// Solo se llama con un snapshot nuevo; un fetch fallido no pasa por
    /// aquí y el snapshot anterior sigue en pantalla
    pub fn set_stats(&self, stats: Option<VisitorStats>) {
        *self.stats.borrow_mut() = stats;
    }

    pub fn stats(&self) -> Option<VisitorStats> {
        self.stats.borrow().clone()
    }

    /// Mergear un cambio de campo en el borrador del slot
    pub fn update_draft_field(&self, position: AdPosition, field: AdField, value: String) {
        let mut drafts = self.drafts.borrow_mut();
        let draft = drafts.entry(position).or_default();
        match field {
            AdField::ImageUrl => draft.image_url = Some(value),
            AdField::LinkUrl => draft.link_url = Some(value),
        }
    }

    pub fn draft_for(&self, position: AdPosition) -> AdDraft {
        self.drafts.borrow().get(&position).cloned().unwrap_or_default()
    }

    /// Limpiar el borrador de un slot (después del reload que sigue a un
    /// commit exitoso)
    pub fn clear_draft(&self, position: AdPosition) {
        self.drafts.borrow_mut().remove(&position);
    }

    pub fn set_notice(&self, notice: Option<String>) {
        *self.notice.borrow_mut() = notice;
    }

    pub fn notice(&self) -> Option<String> {
        self.notice.borrow().clone()
    }

    /// Guardar el handle del polling; el anterior (si lo hay) se suelta
    /// y con ello se cancela
    pub fn set_stats_poller(&self, poller: Option<Interval>) {
        *self.stats_poller.borrow_mut() = poller;
    }

    /// Parar el polling soltando el handle
    pub fn stop_stats_polling(&self) {
        *self.stats_poller.borrow_mut() = None;
    }

    /// Logout client-side: de vuelta a no autenticado, polling parado,
    /// todo el estado transitorio limpio
    pub fn logout(&self) {
        self.stop_stats_polling();
        *self.logged_in.borrow_mut() = false;
        *self.login_error.borrow_mut() = None;
        *self.stats.borrow_mut() = None;
        self.drafts.borrow_mut().clear();
        *self.notice.borrow_mut() = None;
    }
}

impl Default for AdminState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_merge_preserves_the_other_field() {
        let state = AdminState::new();
        state.update_draft_field(AdPosition::Top, AdField::ImageUrl, "https://a/img.png".to_string());
        state.update_draft_field(AdPosition::Top, AdField::LinkUrl, "https://a".to_string());
        state.update_draft_field(AdPosition::Top, AdField::ImageUrl, "https://a/otro.png".to_string());

        let draft = state.draft_for(AdPosition::Top);
        assert_eq!(draft.image_url.as_deref(), Some("https://a/otro.png"));
        assert_eq!(draft.link_url.as_deref(), Some("https://a"));
    }

    #[test]
    fn drafts_are_keyed_per_slot() {
        let state = AdminState::new();
        state.update_draft_field(AdPosition::Left1, AdField::ImageUrl, "https://a/img.png".to_string());
        assert_eq!(state.draft_for(AdPosition::Left2), AdDraft::default());
    }

    #[test]
    fn incomplete_draft_is_not_committable() {
        let state = AdminState::new();
        state.update_draft_field(AdPosition::Top, AdField::ImageUrl, "https://a/img.png".to_string());
        assert!(state.draft_for(AdPosition::Top).complete().is_none());

        // Un campo vaciado tampoco cuenta como listo
        state.update_draft_field(AdPosition::Top, AdField::LinkUrl, String::new());
        assert!(state.draft_for(AdPosition::Top).complete().is_none());
    }

    #[test]
    fn complete_draft_yields_both_urls() {
        let state = AdminState::new();
        state.update_draft_field(AdPosition::Bottom, AdField::ImageUrl, "https://a/img.png".to_string());
        state.update_draft_field(AdPosition::Bottom, AdField::LinkUrl, "https://a".to_string());
        assert_eq!(
            state.draft_for(AdPosition::Bottom).complete(),
            Some(("https://a/img.png".to_string(), "https://a".to_string()))
        );
    }

    #[test]
    fn clear_draft_only_touches_that_slot() {
        let state = AdminState::new();
        state.update_draft_field(AdPosition::Top, AdField::ImageUrl, "https://a/img.png".to_string());
        state.update_draft_field(AdPosition::Bottom, AdField::ImageUrl, "https://b/img.png".to_string());

        state.clear_draft(AdPosition::Top);
        assert_eq!(state.draft_for(AdPosition::Top), AdDraft::default());
        assert_eq!(state.draft_for(AdPosition::Bottom).image_url.as_deref(), Some("https://b/img.png"));
    }

    #[test]
    fn logout_resets_the_session_state() {
        let state = AdminState::new();
        state.set_logged_in(true);
        state.set_stats(Some(VisitorStats { realtime: 1, daily: 2, weekly: 3, monthly: 4 }));
        state.update_draft_field(AdPosition::Top, AdField::ImageUrl, "https://a/img.png".to_string());
        state.set_notice(Some("Ad updated successfully!".to_string()));

        state.logout();
        assert!(!state.is_logged_in());
        assert!(state.stats().is_none());
        assert!(state.notice().is_none());
        assert_eq!(state.draft_for(AdPosition::Top), AdDraft::default());
    }
}
