use async_trait::async_trait;

use crate::ValigiaError;
pub use valigia_types::ProviderKey;
use valigia_types::{Offer, SearchRequest, TravelDomain};

/// Focused role trait for connectors that can search flight inventory.
#[async_trait]
pub trait FlightSearchProvider: Send + Sync {
    /// Translate the canonical request into provider-specific calls and
    /// return canonical offers.
    ///
    /// Adapters must map upstream errors (HTTP status, malformed JSON,
    /// missing required fields) into typed [`ValigiaError`]s and must
    /// drop-and-skip malformed individual records rather than failing the
    /// whole response.
    async fn search_flights(&self, req: &SearchRequest) -> Result<Vec<Offer>, ValigiaError>;
}

/// Focused role trait for connectors that can search hotel inventory.
#[async_trait]
pub trait HotelSearchProvider: Send + Sync {
    /// Translate the canonical request into provider-specific calls and
    /// return canonical offers. Same error-mapping obligations as
    /// [`FlightSearchProvider::search_flights`].
    async fn search_hotels(&self, req: &SearchRequest) -> Result<Vec<Offer>, ValigiaError>;
}

/// Main connector trait implemented by provider crates. Exposes capability
/// discovery plus the static hints the coordinator and ranking engine use.
pub trait ValigiaConnector: Send + Sync {
    /// A stable identifier for priority lists (e.g., "valigia-skyport").
    fn name(&self) -> &'static str;

    /// Canonical provider key constructed from the static name.
    fn key(&self) -> ProviderKey {
        ProviderKey::new(self.name())
    }

    /// Human-friendly vendor string.
    fn vendor(&self) -> &'static str {
        "unknown"
    }

    /// Whether this connector *claims* to serve a given travel domain.
    ///
    /// Default: returns `false` for all domains. Connectors must
    /// explicitly override this to declare what they support.
    fn supports_domain(&self, domain: TravelDomain) -> bool {
        let _ = domain;
        false
    }

    /// Static priority/quality weight in `[0, 1]`.
    ///
    /// The coordinator orders connectors by descending weight; the
    /// ranking engine uses the same value as the provider-quality prior.
    fn weight(&self) -> f64 {
        0.5
    }

    /// Estimated relative cost of one upstream call. Breaks ordering ties
    /// among equal-weight connectors (cheaper first).
    fn cost_hint(&self) -> u32 {
        100
    }

    /// Advertise flight search by returning a usable trait object when supported.
    fn as_flight_provider(&self) -> Option<&dyn FlightSearchProvider> {
        None
    }

    /// Advertise hotel search by returning a usable trait object when supported.
    fn as_hotel_provider(&self) -> Option<&dyn HotelSearchProvider> {
        None
    }
}
