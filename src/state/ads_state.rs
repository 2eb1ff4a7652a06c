// ============================================================================
// ADS STATE - Lista de creatividades y resolución de slots
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use crate::models::{Ad, AdPosition};

/// Lista de creatividades obtenida del backend. `None` significa que
/// todavía no se cargó en este montaje (una fetch por montaje).
#[derive(Clone)]
pub struct AdsState {
    ads: Rc<RefCell<Option<Vec<Ad>>>>,
}

impl AdsState {
    pub fn new() -> Self {
        Self {
            ads: Rc::new(RefCell::new(None)),
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.ads.borrow().is_some()
    }

    pub fn set_ads(&self, ads: Vec<Ad>) {
        *self.ads.borrow_mut() = Some(ads);
    }

    /// Resolución de slot: la creatividad del slot solo si está completa
    /// (ambas URLs presentes y no vacías); si no, None → placeholder
    pub fn creative_for(&self, position: AdPosition) -> Option<Ad> {
        self.ads.borrow().as_ref().and_then(|ads| {
            ads.iter()
                .find(|ad| ad.position == position.as_str() && ad.is_complete())
                .cloned()
        })
    }

    /// Creatividad cruda del slot, completa o no (la usa el admin para
    /// placeholders de inputs y preview)
    pub fn raw_for(&self, position: AdPosition) -> Option<Ad> {
        self.ads.borrow().as_ref().and_then(|ads| {
            ads.iter().find(|ad| ad.position == position.as_str()).cloned()
        })
    }
}

impl Default for AdsState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ad(position: &str, image_url: Option<&str>, link_url: Option<&str>) -> Ad {
        Ad {
            position: position.to_string(),
            image_url: image_url.map(str::to_string),
            link_url: link_url.map(str::to_string),
        }
    }

    #[test]
    fn absent_position_resolves_to_none() {
        let state = AdsState::new();
        state.set_ads(vec![ad("top", Some("https://a/img.png"), Some("https://a"))]);
        assert!(state.creative_for(AdPosition::Left1).is_none());
    }

    #[test]
    fn unloaded_list_resolves_to_none() {
        let state = AdsState::new();
        assert!(!state.is_loaded());
        assert!(state.creative_for(AdPosition::Top).is_none());
    }

    #[test]
    fn partial_creative_resolves_to_none() {
        let state = AdsState::new();
        state.set_ads(vec![
            ad("top", Some("https://a/img.png"), None),
            ad("bottom", None, Some("https://b")),
            ad("left1", Some(""), Some("https://c")),
        ]);
        assert!(state.creative_for(AdPosition::Top).is_none());
        assert!(state.creative_for(AdPosition::Bottom).is_none());
        assert!(state.creative_for(AdPosition::Left1).is_none());
    }

    #[test]
    fn complete_creative_is_resolved() {
        let state = AdsState::new();
        state.set_ads(vec![ad("right2", Some("https://a/img.png"), Some("https://a"))]);
        let creative = state.creative_for(AdPosition::Right2).unwrap();
        assert_eq!(creative.image_url.as_deref(), Some("https://a/img.png"));
        assert_eq!(creative.link_url.as_deref(), Some("https://a"));
    }

    #[test]
    fn raw_for_returns_incomplete_creatives() {
        let state = AdsState::new();
        state.set_ads(vec![ad("top", Some("https://a/img.png"), None)]);
        assert!(state.creative_for(AdPosition::Top).is_none());
        assert!(state.raw_for(AdPosition::Top).is_some());
    }
}
