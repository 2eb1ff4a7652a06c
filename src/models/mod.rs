// ============================================================================
// MODELS - Estructuras compartidas con el backend
// ============================================================================

pub mod ad;
pub mod auth;
pub mod generation;
pub mod stats;

pub use ad::*;
pub use auth::*;
pub use generation::*;
pub use stats::*;
