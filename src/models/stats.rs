use serde::Deserialize;

/// Snapshot de analíticas de visitantes, calculado por el backend.
/// El cliente solo muestra el último snapshot recibido.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct VisitorStats {
    pub realtime: u64,
    pub daily: u64,
    pub weekly: u64,
    pub monthly: u64,
}
