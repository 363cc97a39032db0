//! valigia-core
//!
//! Core types, traits, and utilities shared across the valigia ecosystem.
//!
//! - `connector`: the `ValigiaConnector` trait and capability provider traits.
//! - `normalize`: helpers to validate, currency-normalize, and de-duplicate
//!   offers gathered from multiple connectors.
//! - `rank`: the deterministic composite scoring and ordering of a merged
//!   offer set.
//! - `rates` / `telemetry`: seams for the exchange-rate source and the
//!   usage-event sink, both implemented externally.
//!
//! Async runtime (Tokio)
//! ---------------------
//! This crate assumes the Tokio ecosystem as the async runtime: the
//! capability traits are `async_trait` futures that the orchestrator
//! bounds with `tokio::time::timeout`, so connectors must run under a
//! Tokio 1.x runtime.
#![warn(missing_docs)]

/// Connector capability traits and the primary `ValigiaConnector` interface.
pub mod connector;
mod error;
/// Offer validation, currency normalization, and de-duplication.
pub mod normalize;
mod outcome;
/// Deterministic scoring and ordering of merged offer sets.
pub mod rank;
mod rates;
mod telemetry;

pub use connector::ValigiaConnector;
pub use error::ValigiaError;
pub use outcome::{ProviderFailure, ProviderOutcome};
pub use rates::{RateSource, StaticRates};
pub use telemetry::{NoopTelemetry, TelemetrySink, TracingTelemetry};

pub use valigia_types::{
    Amenities, CacheConfig, Currency, DateRange, FetchStrategy, Filters, Fingerprint, Money,
    Offer, Party, Place, ProviderKey, ProviderReport, RankedResult, RankingWeights,
    RateLimitConfig, SearchMetadata, SearchRequest, SearchRequestBuilder, Segment, TravelDomain,
    ValidationError, ValigiaConfig,
};
