//! Valigia aggregates travel searches across multiple inventory providers.
//!
//! Overview
//! - Routes one canonical `SearchRequest` to connectors implementing the
//!   `valigia_core` contracts, under a per-provider timeout and an
//!   overall request deadline.
//! - Tolerates any subset of providers failing: outcomes are recorded,
//!   never propagated, and a synthetic fallback keeps the caller's
//!   response well-formed when every real provider fails.
//! - Normalizes provider responses into one offer list (currency
//!   conversion, UTC anchoring, cross-provider de-duplication), ranks it
//!   deterministically, and memoizes the result per query fingerprint.
//! - Enforces a per-caller fixed-window rate limit ahead of any fan-out.
//!
//! Key behaviors and trade-offs
//! - Fetch strategy:
//!   - `Sequential`: deterministic priority order, stop at the first
//!     provider with usable offers; economical on provider quotas.
//!   - `Fanout`: race every eligible provider for maximum coverage and
//!     price comparison; higher request fan-out.
//! - Degraded mode: when all real providers fail, fabricated offers are
//!   returned tagged `synthetic` — availability is deliberately chosen
//!   over correctness, and callers must check the tag.
//! - The only errors crossing [`Valigia::search`] are request validation
//!   (at `SearchRequest` construction) and rate limiting; upstream
//!   outages never surface as engine errors.
//!
//! Example
//! ```rust,ignore
//! use std::sync::Arc;
//! use valigia::Valigia;
//! use valigia_core::{Currency, DateRange, Place, SearchRequest, TravelDomain};
//!
//! let skyport = Arc::new(SkyportConnector::builder("key").build()?);
//! let gds = Arc::new(GdsLineConnector::new("id", "secret")?);
//!
//! let engine = Valigia::builder()
//!     .with_connector(skyport)
//!     .with_connector(gds)
//!     .fetch_strategy(valigia::FetchStrategy::Fanout)
//!     .build()?;
//!
//! let req = SearchRequest::builder(TravelDomain::Flight)
//!     .origin(Place::new("NYC")?)
//!     .destination(Place::new("LON")?)
//!     .dates(DateRange::new(depart, Some(ret))?)
//!     .currency(Currency::USD)
//!     .build()?;
//!
//! let result = engine.search("caller-42", req).await?;
//! for offer in &result.offers {
//!     println!("{} {}", offer.price, offer.provider);
//! }
//! ```
#![warn(missing_docs)]

pub(crate) mod core;
mod router;

pub use core::{Valigia, ValigiaBuilder};

pub use valigia_middleware::{FixedWindowLimiter, InMemoryCache, RateLimiter, ResultCache};

// Re-export core types for convenience
pub use valigia_core::{
    Amenities,
    CacheConfig,
    Currency,
    DateRange,
    FetchStrategy,
    Filters,
    Fingerprint,
    Money,
    NoopTelemetry,
    Offer,
    Party,
    Place,
    ProviderFailure,
    ProviderKey,
    ProviderOutcome,
    ProviderReport,
    RankedResult,
    RankingWeights,
    RateLimitConfig,
    RateSource,
    SearchMetadata,
    SearchRequest,
    Segment,
    StaticRates,
    TelemetrySink,
    TracingTelemetry,
    TravelDomain,
    ValidationError,
    ValigiaConfig,
    ValigiaConnector,
    ValigiaError,
};
