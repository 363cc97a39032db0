#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::time::{Duration, sleep};

use valigia_core::connector::{FlightSearchProvider, HotelSearchProvider};
use valigia_core::{Offer, SearchRequest, TravelDomain, ValigiaConnector, ValigiaError};

type SearchFn = Arc<dyn Fn(&SearchRequest) -> Result<Vec<Offer>, ValigiaError> + Send + Sync>;

/// Simple in-memory connector used by integration tests. Behavior is
/// tailored per test via the closure hooks; every capability call bumps
/// the shared counter so tests can spy on invocation counts.
pub struct TestConnector {
    name: &'static str,
    weight: f64,
    cost_hint: u32,
    delay: Duration,
    flights_fn: Option<SearchFn>,
    hotels_fn: Option<SearchFn>,
    calls: Arc<AtomicUsize>,
}

impl TestConnector {
    pub fn builder(name: &'static str) -> TestConnectorBuilder {
        TestConnectorBuilder::new(name)
    }

    /// Shared call counter: incremented once per capability invocation.
    pub fn calls(&self) -> Arc<AtomicUsize> {
        self.calls.clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl FlightSearchProvider for TestConnector {
    async fn search_flights(&self, req: &SearchRequest) -> Result<Vec<Offer>, ValigiaError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.delay > Duration::ZERO {
            sleep(self.delay).await;
        }
        match &self.flights_fn {
            Some(f) => (f)(req),
            None => Err(ValigiaError::unsupported("search/flight")),
        }
    }
}

#[async_trait]
impl HotelSearchProvider for TestConnector {
    async fn search_hotels(&self, req: &SearchRequest) -> Result<Vec<Offer>, ValigiaError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.delay > Duration::ZERO {
            sleep(self.delay).await;
        }
        match &self.hotels_fn {
            Some(f) => (f)(req),
            None => Err(ValigiaError::unsupported("search/hotel")),
        }
    }
}

impl ValigiaConnector for TestConnector {
    fn name(&self) -> &'static str {
        self.name
    }

    fn supports_domain(&self, domain: TravelDomain) -> bool {
        match domain {
            TravelDomain::Flight => self.flights_fn.is_some(),
            TravelDomain::Hotel => self.hotels_fn.is_some(),
            _ => unreachable!("unhandled travel domain"),
        }
    }

    fn weight(&self) -> f64 {
        self.weight
    }

    fn cost_hint(&self) -> u32 {
        self.cost_hint
    }

    fn as_flight_provider(&self) -> Option<&dyn FlightSearchProvider> {
        if self.flights_fn.is_some() {
            Some(self as &dyn FlightSearchProvider)
        } else {
            None
        }
    }

    fn as_hotel_provider(&self) -> Option<&dyn HotelSearchProvider> {
        if self.hotels_fn.is_some() {
            Some(self as &dyn HotelSearchProvider)
        } else {
            None
        }
    }
}

pub struct TestConnectorBuilder {
    name: &'static str,
    weight: f64,
    cost_hint: u32,
    delay: Duration,
    flights_fn: Option<SearchFn>,
    hotels_fn: Option<SearchFn>,
}

impl TestConnectorBuilder {
    fn new(name: &'static str) -> Self {
        Self {
            name,
            weight: 0.5,
            cost_hint: 100,
            delay: Duration::ZERO,
            flights_fn: None,
            hotels_fn: None,
        }
    }

    pub fn weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    pub fn cost_hint(mut self, cost_hint: u32) -> Self {
        self.cost_hint = cost_hint;
        self
    }

    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_flights_fn<F>(mut self, f: F) -> Self
    where
        F: Fn(&SearchRequest) -> Result<Vec<Offer>, ValigiaError> + Send + Sync + 'static,
    {
        self.flights_fn = Some(Arc::new(f));
        self
    }

    pub fn returns_flights(self, offers: Vec<Offer>) -> Self {
        self.with_flights_fn(move |_req| Ok(offers.clone()))
    }

    pub fn fails_flights(self, err: impl Fn() -> ValigiaError + Send + Sync + 'static) -> Self {
        self.with_flights_fn(move |_req| Err(err()))
    }

    pub fn with_hotels_fn<F>(mut self, f: F) -> Self
    where
        F: Fn(&SearchRequest) -> Result<Vec<Offer>, ValigiaError> + Send + Sync + 'static,
    {
        self.hotels_fn = Some(Arc::new(f));
        self
    }

    pub fn returns_hotels(self, offers: Vec<Offer>) -> Self {
        self.with_hotels_fn(move |_req| Ok(offers.clone()))
    }

    pub fn build(self) -> Arc<TestConnector> {
        Arc::new(TestConnector {
            name: self.name,
            weight: self.weight,
            cost_hint: self.cost_hint,
            delay: self.delay,
            flights_fn: self.flights_fn,
            hotels_fn: self.hotels_fn,
            calls: Arc::new(AtomicUsize::new(0)),
        })
    }
}
