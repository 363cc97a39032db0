//! Configuration types shared across the orchestrator and connectors.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::domain::TravelDomain;

/// Strategy for consulting the configured providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[non_exhaustive]
pub enum FetchStrategy {
    /// Try providers in descending priority order and stop at the first
    /// one that returns at least one valid offer. Economical on provider
    /// quotas; redundant coverage is skipped.
    #[default]
    Sequential,
    /// Query all eligible providers concurrently under the overall
    /// deadline and merge every outcome that completes in time. Maximum
    /// coverage at the cost of fan-out load.
    Fanout,
}

/// Weights for the composite ranking score.
///
/// Tunable per product surface; they are normalized against their sum at
/// scoring time, so only relative magnitudes matter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RankingWeights {
    /// Price competitiveness (cheaper scores higher).
    pub price: f64,
    /// Convenience: fewer stops, shorter duration.
    pub convenience: f64,
    /// Static per-provider quality prior.
    pub provider_quality: f64,
    /// Bonus for amenities matching the caller's filters.
    pub amenity_match: f64,
}

impl Default for RankingWeights {
    fn default() -> Self {
        Self {
            price: 0.45,
            convenience: 0.30,
            provider_quality: 0.15,
            amenity_match: 0.10,
        }
    }
}

/// Fixed-window admission quota applied per caller identity.
///
/// Deliberately a coarse fixed window rather than a sliding window or
/// token bucket: burstiness at window boundaries is an accepted tradeoff
/// for a state footprint of one counter per caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateLimitConfig {
    /// Maximum admissions within a single window.
    pub max_requests: u64,
    /// Duration of the accounting window.
    pub window: Duration,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            max_requests: 100,
            window: Duration::from_secs(900),
        }
    }
}

/// Result cache sizing and expiry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// TTL for flight results (fast-moving prices).
    pub flight_ttl: Duration,
    /// TTL for hotel results (relatively stable inventory).
    pub hotel_ttl: Duration,
    /// Maximum number of cached result sets.
    pub max_entries: usize,
}

impl CacheConfig {
    /// The TTL applicable to a given product surface.
    #[must_use]
    pub const fn ttl_for(&self, domain: TravelDomain) -> Duration {
        match domain {
            TravelDomain::Flight => self.flight_ttl,
            TravelDomain::Hotel => self.hotel_ttl,
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            flight_ttl: Duration::from_secs(120),
            hotel_ttl: Duration::from_secs(3600),
            max_entries: 1024,
        }
    }
}

/// Global configuration for the `Valigia` orchestrator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValigiaConfig {
    /// Strategy for consulting providers.
    pub fetch_strategy: FetchStrategy,
    /// Timeout for individual provider requests. Must be strictly less
    /// than `request_timeout` when the latter is set.
    pub provider_timeout: Duration,
    /// Overall deadline for one search, bounding the whole fan-out.
    pub request_timeout: Option<Duration>,
    /// Per-caller admission quota.
    pub rate_limit: RateLimitConfig,
    /// Result cache sizing and expiry.
    pub cache: CacheConfig,
    /// Ranking weights.
    pub ranking: RankingWeights,
}

impl Default for ValigiaConfig {
    fn default() -> Self {
        Self {
            fetch_strategy: FetchStrategy::default(),
            provider_timeout: Duration::from_secs(5),
            request_timeout: Some(Duration::from_secs(15)),
            rate_limit: RateLimitConfig::default(),
            cache: CacheConfig::default(),
            ranking: RankingWeights::default(),
        }
    }
}
