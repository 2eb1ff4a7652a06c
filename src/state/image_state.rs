// ============================================================================
// IMAGE STATE - Imágenes subidas por el usuario
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

/// Imagen subida: el encoding data-URL completo tal como lo produjo el
/// file reader. El payload de transmisión se deriva de él.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedImage {
    pub data_url: String,
}

impl UploadedImage {
    pub fn new(data_url: String) -> Self {
        Self { data_url }
    }

    /// Payload de transmisión: el encoding sin su cabecera `data:...;base64,`
    /// (todo lo que sigue a la primera coma)
    pub fn payload(&self) -> String {
        self.data_url
            .split_once(',')
            .map(|(_, body)| body.to_string())
            .unwrap_or_default()
    }
}

/// Estado de imágenes subidas. El orden de la secuencia es el orden de
/// selección; la identidad es posicional.
#[derive(Clone)]
pub struct ImageState {
    images: Rc<RefCell<Vec<UploadedImage>>>,
}

impl ImageState {
    pub fn new() -> Self {
        Self {
            images: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Añadir una imagen decodificada al final de la secuencia
    pub fn push(&self, data_url: String) {
        self.images.borrow_mut().push(UploadedImage::new(data_url));
    }

    /// Quitar la imagen en la posición dada; no-op si está fuera de rango
    pub fn remove_at(&self, index: usize) {
        let mut images = self.images.borrow_mut();
        if index < images.len() {
            images.remove(index);
        }
    }

    /// Vaciar la secuencia
    pub fn clear(&self) {
        self.images.borrow_mut().clear();
    }

    pub fn is_empty(&self) -> bool {
        self.images.borrow().is_empty()
    }

    pub fn count(&self) -> usize {
        self.images.borrow().len()
    }

    /// Data URLs para las previews, en orden
    pub fn data_urls(&self) -> Vec<String> {
        self.images.borrow().iter().map(|img| img.data_url.clone()).collect()
    }

    /// Payloads de transmisión de todas las imágenes actuales, en orden
    pub fn payloads(&self) -> Vec<String> {
        self.images.borrow().iter().map(|img| img.payload()).collect()
    }
}

impl Default for ImageState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data_url(n: u32) -> String {
        format!("data:image/png;base64,IMAGEN{}", n)
    }

    #[test]
    fn order_is_the_surviving_subsequence_of_additions() {
        let state = ImageState::new();
        for n in 0..4 {
            state.push(data_url(n));
        }

        state.remove_at(1);
        assert_eq!(state.payloads(), vec!["IMAGEN0", "IMAGEN2", "IMAGEN3"]);

        state.remove_at(2);
        assert_eq!(state.payloads(), vec!["IMAGEN0", "IMAGEN2"]);

        state.push(data_url(4));
        assert_eq!(state.payloads(), vec!["IMAGEN0", "IMAGEN2", "IMAGEN4"]);
    }

    #[test]
    fn remove_at_out_of_range_is_a_noop() {
        let state = ImageState::new();
        state.remove_at(0);
        assert!(state.is_empty());

        state.push(data_url(1));
        state.remove_at(5);
        assert_eq!(state.count(), 1);
    }

    #[test]
    fn clear_empties_unconditionally() {
        let state = ImageState::new();
        state.push(data_url(1));
        state.push(data_url(2));
        state.clear();
        assert!(state.is_empty());
        assert!(state.payloads().is_empty());
    }

    #[test]
    fn payload_strips_the_data_url_header() {
        let img = UploadedImage::new("data:image/jpeg;base64,AAAA/9j4".to_string());
        assert_eq!(img.payload(), "AAAA/9j4");
    }

    #[test]
    fn payload_without_header_is_empty() {
        let img = UploadedImage::new("sin-cabecera".to_string());
        assert_eq!(img.payload(), "");
    }
}
