//! Travel product domains understood by the engine.

use serde::{Deserialize, Serialize};

/// Product surface a search targets.
///
/// The domain drives request validation (hotels need a check-out date),
/// de-duplication keying, and cache TTL selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum TravelDomain {
    /// Point-to-point air itineraries.
    Flight,
    /// Hotel stays.
    Hotel,
}

impl std::fmt::Display for TravelDomain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Flight => write!(f, "flight"),
            Self::Hotel => write!(f, "hotel"),
        }
    }
}
