//! The public search pipeline: cache → rate limit → coordinator →
//! normalize → rank → cache write.

use std::time::Instant;

use crate::Valigia;
use crate::router::synthetic;
use valigia_core::{normalize, rank};
use valigia_types::{Fingerprint, RankedResult, SearchMetadata, SearchRequest};

impl Valigia {
    /// Execute one aggregated search on behalf of `caller_id`.
    ///
    /// Behavior and trade-offs:
    /// - A cache hit returns the stored result with `meta.cached == true`
    ///   and consults neither the rate limiter nor any provider.
    /// - On a miss the caller is charged one admission against its
    ///   fixed-window quota before any provider is contacted.
    /// - Provider failures never surface here: if every real provider
    ///   fails or returns nothing, deterministic placeholder offers are
    ///   returned with `meta.synthetic == true`.
    /// - Dropping the returned future abandons in-flight provider calls
    ///   and skips the cache write.
    ///
    /// # Errors
    /// Returns `RateLimited` (with a retry-after hint) when the caller's
    /// quota is exhausted. Malformed requests are rejected earlier, at
    /// `SearchRequest` construction.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            target = "valigia::router",
            skip(self, req),
            fields(domain = %req.domain(), destination = %req.destination()),
        )
    )]
    pub async fn search(
        &self,
        caller_id: &str,
        req: SearchRequest,
    ) -> Result<RankedResult, valigia_core::ValigiaError> {
        let started = Instant::now();
        let fingerprint = Fingerprint::of(&req);

        if let Some(mut hit) = self.cache.get(&fingerprint).await {
            hit.meta.cached = true;
            self.telemetry.record(
                "cache.hit",
                &[("fingerprint", fingerprint.to_string())],
            );
            return Ok(hit);
        }
        self.telemetry.record(
            "cache.miss",
            &[("fingerprint", fingerprint.to_string())],
        );

        if let Err(e) = self.limiter.check(caller_id) {
            self.telemetry.record(
                "rate_limit.rejected",
                &[("caller", caller_id.to_string())],
            );
            return Err(e);
        }

        let outcomes = self.run_providers(&req).await;
        let normalized = normalize::merge_outcomes(&outcomes, &req, self.rates.as_ref());

        let mut synthetic = false;
        let offers = if normalized.offers.is_empty() {
            synthetic = true;
            self.telemetry.record(
                "search.synthetic",
                &[("fingerprint", fingerprint.to_string())],
            );
            synthetic::offers(&req, fingerprint)
        } else {
            normalized.offers
        };

        let offers = rank::rank(offers, &req, &self.cfg.ranking, &self.quality);

        let meta = SearchMetadata {
            providers: outcomes.iter().map(|o| o.to_report()).collect(),
            total_latency_ms: u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
            cached: false,
            synthetic,
            dropped_offers: normalized.dropped,
            fingerprint,
        };
        let result = RankedResult { offers, meta };

        self.cache
            .put(
                fingerprint,
                result.clone(),
                self.cfg.cache.ttl_for(req.domain()),
            )
            .await;

        Ok(result)
    }
}
