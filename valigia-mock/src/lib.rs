//! Mock connector for CI-safe tests and examples. Produces deterministic
//! offers from static fixtures, plus scripted misbehavior via sentinel
//! destination codes:
//!
//! - destination `FAIL`: the call fails with a network error;
//! - destination `SLOW`: the call sleeps long enough to trip short
//!   per-provider timeouts;
//! - destination `EMPTY`: the call succeeds with zero offers.

use async_trait::async_trait;

use valigia_core::connector::{FlightSearchProvider, HotelSearchProvider};
use valigia_core::{
    Offer, ProviderFailure, SearchRequest, TravelDomain, ValigiaConnector, ValigiaError,
};

mod fixtures;

/// Mock connector with deterministic fixture data.
pub struct MockConnector;

impl Default for MockConnector {
    fn default() -> Self {
        Self::new()
    }
}

impl MockConnector {
    /// Create the mock connector.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    async fn maybe_misbehave(req: &SearchRequest) -> Result<bool, ValigiaError> {
        match req.destination().as_str() {
            "FAIL" => Err(ValigiaError::provider(
                "valigia-mock",
                ProviderFailure::Network("forced failure".to_string()),
            )),
            "SLOW" => {
                // Long enough to trip short per-provider timeouts in tests
                // without stalling suites that use generous ones.
                tokio::time::sleep(std::time::Duration::from_millis(200)).await;
                Ok(false)
            }
            "EMPTY" => Ok(true),
            _ => Ok(false),
        }
    }
}

impl ValigiaConnector for MockConnector {
    fn name(&self) -> &'static str {
        "valigia-mock"
    }

    fn vendor(&self) -> &'static str {
        "Mock"
    }

    fn supports_domain(&self, _domain: TravelDomain) -> bool {
        true
    }

    fn weight(&self) -> f64 {
        0.2
    }

    fn cost_hint(&self) -> u32 {
        1
    }

    fn as_flight_provider(&self) -> Option<&dyn FlightSearchProvider> {
        Some(self as &dyn FlightSearchProvider)
    }

    fn as_hotel_provider(&self) -> Option<&dyn HotelSearchProvider> {
        Some(self as &dyn HotelSearchProvider)
    }
}

#[async_trait]
impl FlightSearchProvider for MockConnector {
    async fn search_flights(&self, req: &SearchRequest) -> Result<Vec<Offer>, ValigiaError> {
        if Self::maybe_misbehave(req).await? {
            return Ok(vec![]);
        }
        Ok(fixtures::flights::offers(req))
    }
}

#[async_trait]
impl HotelSearchProvider for MockConnector {
    async fn search_hotels(&self, req: &SearchRequest) -> Result<Vec<Offer>, ValigiaError> {
        if Self::maybe_misbehave(req).await? {
            return Ok(vec![]);
        }
        Ok(fixtures::hotels::offers(req))
    }
}
