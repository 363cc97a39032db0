use std::collections::HashMap;
use std::sync::Arc;

use valigia_core::{
    NoopTelemetry, ProviderOutcome, RateSource, StaticRates, TelemetrySink, TravelDomain,
    ValigiaConnector, ValigiaError,
};
use valigia_middleware::{FixedWindowLimiter, InMemoryCache, RateLimiter, ResultCache};
use valigia_types::{FetchStrategy, RankingWeights, ValigiaConfig};

/// Orchestrator that fans one search out across registered providers.
pub struct Valigia {
    pub(crate) connectors: Vec<Arc<dyn ValigiaConnector>>,
    pub(crate) cfg: ValigiaConfig,
    pub(crate) cache: Arc<dyn ResultCache>,
    pub(crate) limiter: Arc<dyn RateLimiter>,
    pub(crate) rates: Arc<dyn RateSource>,
    pub(crate) telemetry: Arc<dyn TelemetrySink>,
    /// Connector name → static quality weight, for the ranking prior.
    pub(crate) quality: HashMap<String, f64>,
}

impl std::fmt::Debug for Valigia {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Valigia")
            .field(
                "connectors",
                &self.connectors.iter().map(|c| c.name()).collect::<Vec<_>>(),
            )
            .field("cfg", &self.cfg)
            .field("quality", &self.quality)
            .finish_non_exhaustive()
    }
}

/// Builder for constructing a `Valigia` orchestrator with custom
/// configuration and pluggable stores.
pub struct ValigiaBuilder {
    connectors: Vec<Arc<dyn ValigiaConnector>>,
    cfg: ValigiaConfig,
    cache: Option<Arc<dyn ResultCache>>,
    limiter: Option<Arc<dyn RateLimiter>>,
    rates: Option<Arc<dyn RateSource>>,
    telemetry: Option<Arc<dyn TelemetrySink>>,
}

impl Default for ValigiaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ValigiaBuilder {
    /// Create a new builder with sensible defaults.
    ///
    /// Behavior and trade-offs:
    /// - Starts with no connectors; you must register at least one via
    ///   [`with_connector`](Self::with_connector).
    /// - Defaults are conservative: sequential fallback, 5s provider
    ///   timeout under a 15s overall deadline, in-memory cache and
    ///   limiter, identity-only rate table, no telemetry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            connectors: vec![],
            cfg: ValigiaConfig::default(),
            cache: None,
            limiter: None,
            rates: None,
            telemetry: None,
        }
    }

    /// Register a provider connector.
    ///
    /// Behavior and trade-offs:
    /// - Ordering among connectors is decided by their static weight
    ///   (descending), then cost hint (ascending); registration order
    ///   only breaks remaining ties.
    /// - Duplicates are not deduplicated; avoid registering the same
    ///   connector twice.
    #[must_use]
    pub fn with_connector(mut self, c: Arc<dyn ValigiaConnector>) -> Self {
        self.connectors.push(c);
        self
    }

    /// Select the strategy for consulting providers.
    ///
    /// Behavior and trade-offs:
    /// - `Sequential`: deterministic order, stops at the first provider
    ///   returning usable offers; predictable and economical on quotas.
    /// - `Fanout`: queries every eligible provider concurrently; maximum
    ///   coverage and price comparison at the cost of fan-out load.
    #[must_use]
    pub const fn fetch_strategy(mut self, strategy: FetchStrategy) -> Self {
        self.cfg.fetch_strategy = strategy;
        self
    }

    /// Set the per-provider request timeout.
    ///
    /// Must be strictly less than the overall deadline so a single hung
    /// upstream cannot consume the whole budget; validated in
    /// [`build`](Self::build).
    #[must_use]
    pub const fn provider_timeout(mut self, timeout: std::time::Duration) -> Self {
        self.cfg.provider_timeout = timeout;
        self
    }

    /// Set the overall request deadline bounding the whole provider phase.
    #[must_use]
    pub const fn request_timeout(mut self, timeout: std::time::Duration) -> Self {
        self.cfg.request_timeout = Some(timeout);
        self
    }

    /// Remove the overall request deadline (provider timeouts still apply).
    #[must_use]
    pub const fn no_request_timeout(mut self) -> Self {
        self.cfg.request_timeout = None;
        self
    }

    /// Set the ranking weights.
    #[must_use]
    pub const fn ranking_weights(mut self, weights: RankingWeights) -> Self {
        self.cfg.ranking = weights;
        self
    }

    /// Replace the whole configuration at once (e.g. deserialized from a
    /// config file).
    #[must_use]
    pub fn config(mut self, cfg: ValigiaConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Plug in a result cache implementation. Defaults to the in-memory
    /// LRU store sized by `cfg.cache.max_entries`.
    #[must_use]
    pub fn result_cache(mut self, cache: Arc<dyn ResultCache>) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Plug in a rate limiter implementation. Defaults to the in-process
    /// fixed-window limiter configured by `cfg.rate_limit`.
    #[must_use]
    pub fn rate_limiter(mut self, limiter: Arc<dyn RateLimiter>) -> Self {
        self.limiter = Some(limiter);
        self
    }

    /// Plug in an exchange-rate source. Defaults to identity conversions
    /// only, meaning foreign-currency offers are dropped.
    #[must_use]
    pub fn rate_source(mut self, rates: Arc<dyn RateSource>) -> Self {
        self.rates = Some(rates);
        self
    }

    /// Plug in a usage-telemetry sink. Defaults to a no-op sink.
    #[must_use]
    pub fn telemetry(mut self, sink: Arc<dyn TelemetrySink>) -> Self {
        self.telemetry = Some(sink);
        self
    }

    /// Build the `Valigia` orchestrator.
    ///
    /// # Errors
    /// Returns `InvalidArg` if no connectors are registered, or if the
    /// per-provider timeout is not strictly below the overall deadline.
    pub fn build(self) -> Result<Valigia, ValigiaError> {
        if self.connectors.is_empty() {
            return Err(ValigiaError::InvalidArg(
                "no connectors registered; add at least one via with_connector(...)".to_string(),
            ));
        }
        if let Some(overall) = self.cfg.request_timeout
            && self.cfg.provider_timeout >= overall
        {
            return Err(ValigiaError::InvalidArg(format!(
                "provider_timeout ({:?}) must be strictly less than request_timeout ({overall:?})",
                self.cfg.provider_timeout
            )));
        }

        let quality = self
            .connectors
            .iter()
            .map(|c| (c.name().to_string(), c.weight()))
            .collect();

        let cache = self
            .cache
            .unwrap_or_else(|| Arc::new(InMemoryCache::new(self.cfg.cache.max_entries)));
        let limiter = self
            .limiter
            .unwrap_or_else(|| Arc::new(FixedWindowLimiter::new(self.cfg.rate_limit.clone())));
        let rates = self.rates.unwrap_or_else(|| Arc::new(StaticRates::new()));
        let telemetry = self.telemetry.unwrap_or_else(|| Arc::new(NoopTelemetry));

        Ok(Valigia {
            connectors: self.connectors,
            cfg: self.cfg,
            cache,
            limiter,
            rates,
            telemetry,
            quality,
        })
    }
}

impl Valigia {
    /// Start building a new `Valigia` instance.
    #[must_use]
    pub fn builder() -> ValigiaBuilder {
        ValigiaBuilder::new()
    }

    /// Connectors eligible for `domain`, ordered by descending static
    /// weight, then ascending cost hint, then registration order.
    pub(crate) fn ordered(&self, domain: TravelDomain) -> Vec<Arc<dyn ValigiaConnector>> {
        let mut out: Vec<(usize, Arc<dyn ValigiaConnector>)> = self
            .connectors
            .iter()
            .cloned()
            .enumerate()
            .filter(|(_, c)| c.supports_domain(domain))
            .collect();
        out.sort_by(|(ia, a), (ib, b)| {
            b.weight()
                .partial_cmp(&a.weight())
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.cost_hint().cmp(&b.cost_hint()))
                .then_with(|| ia.cmp(ib))
        });
        out.into_iter().map(|(_, c)| c).collect()
    }

    /// Wrap a provider future with the per-provider timeout, producing a
    /// settled [`ProviderOutcome`] either way.
    pub(crate) async fn provider_call_with_timeout<Fut>(
        connector_name: &'static str,
        timeout: std::time::Duration,
        fut: Fut,
    ) -> ProviderOutcome
    where
        Fut: core::future::Future<Output = Result<Vec<valigia_core::Offer>, ValigiaError>>,
    {
        let started = std::time::Instant::now();
        let result = match tokio::time::timeout(timeout, fut).await {
            Ok(Ok(offers)) => Ok(offers),
            Ok(Err(e)) => Err(valigia_core::ProviderFailure::classify(&e)),
            Err(_) => Err(valigia_core::ProviderFailure::Timeout),
        };
        ProviderOutcome {
            provider: connector_name.to_string(),
            latency: started.elapsed(),
            result,
        }
    }
}
