//! Report envelopes produced by the orchestrator.

use serde::{Deserialize, Serialize};

use crate::fingerprint::Fingerprint;
use crate::offer::Offer;

/// How one connector invocation went, as reflected to callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderReport {
    /// Connector name.
    pub provider: String,
    /// Whether the call returned at least one valid offer.
    pub succeeded: bool,
    /// Offers returned before merging.
    pub offers: u32,
    /// Wall-clock latency of the call.
    pub latency_ms: u64,
    /// Failure description for unsuccessful calls.
    pub failure: Option<String>,
}

/// Metadata accompanying a ranked result set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchMetadata {
    /// Per-connector outcomes for every provider consulted.
    pub providers: Vec<ProviderReport>,
    /// End-to-end latency of the search (zero on cache hits).
    pub total_latency_ms: u64,
    /// True when the result was served from the cache.
    pub cached: bool,
    /// True when every real provider failed and the offers are
    /// fabricated placeholders.
    pub synthetic: bool,
    /// Offers dropped during normalization (invariant violations,
    /// missing exchange rates).
    pub dropped_offers: u32,
    /// Fingerprint the result is cached under.
    pub fingerprint: Fingerprint,
}

/// Ordered, de-duplicated, currency-normalized result set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedResult {
    /// Offers in descending score order.
    pub offers: Vec<Offer>,
    /// How the result was produced.
    pub meta: SearchMetadata,
}
