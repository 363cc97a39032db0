//! The fallback coordinator: runs the configured provider strategy and
//! settles every attempt into a `ProviderOutcome`.

use std::sync::Arc;
use std::time::Instant;

use futures::stream::{FuturesUnordered, StreamExt};

use crate::Valigia;
use valigia_core::normalize::validate::is_well_formed;
use valigia_core::{
    Offer, ProviderFailure, ProviderOutcome, SearchRequest, TravelDomain, ValigiaConnector,
    ValigiaError,
};
use valigia_types::FetchStrategy;

fn capability_call(
    connector: Arc<dyn ValigiaConnector>,
    req: SearchRequest,
) -> impl core::future::Future<Output = Result<Vec<Offer>, ValigiaError>> {
    async move {
        match req.domain() {
            TravelDomain::Flight => match connector.as_flight_provider() {
                Some(p) => p.search_flights(&req).await,
                None => Err(ValigiaError::unsupported("search/flight")),
            },
            TravelDomain::Hotel => match connector.as_hotel_provider() {
                Some(p) => p.search_hotels(&req).await,
                None => Err(ValigiaError::unsupported("search/hotel")),
            },
            _ => unreachable!("unhandled travel domain"),
        }
    }
}

fn has_capability(connector: &Arc<dyn ValigiaConnector>, domain: TravelDomain) -> bool {
    match domain {
        TravelDomain::Flight => connector.as_flight_provider().is_some(),
        TravelDomain::Hotel => connector.as_hotel_provider().is_some(),
        _ => unreachable!("unhandled travel domain"),
    }
}

impl Valigia {
    /// Run the configured fetch strategy and return one settled outcome
    /// per consulted provider. Never fails: provider errors are absorbed
    /// into the outcomes.
    pub(crate) async fn run_providers(&self, req: &SearchRequest) -> Vec<ProviderOutcome> {
        let eligible: Vec<Arc<dyn ValigiaConnector>> = self
            .ordered(req.domain())
            .into_iter()
            .filter(|c| has_capability(c, req.domain()))
            .collect();

        match self.cfg.fetch_strategy {
            FetchStrategy::Sequential => self.run_sequential(eligible, req).await,
            FetchStrategy::Fanout => self.run_fanout(eligible, req).await,
            _ => unreachable!("unhandled fetch strategy"),
        }
    }

    /// Descending-priority fallback: consult the next provider only when
    /// the previous one failed or returned no usable offer. A failing
    /// adapter is never retried within one request; recovery is fallback
    /// only.
    async fn run_sequential(
        &self,
        eligible: Vec<Arc<dyn ValigiaConnector>>,
        req: &SearchRequest,
    ) -> Vec<ProviderOutcome> {
        let started = Instant::now();
        let mut outcomes = Vec::new();

        for connector in eligible {
            // Stop consulting providers once the overall deadline is spent.
            let per_call = match self.remaining_budget(started) {
                Some(remaining) => self.cfg.provider_timeout.min(remaining),
                None => break,
            };

            let name = connector.name();
            self.record_adapter_call(name);
            let outcome = Self::provider_call_with_timeout(
                name,
                per_call,
                capability_call(connector, req.clone()),
            )
            .await;
            self.record_adapter_outcome(&outcome);

            let usable = matches!(
                &outcome.result,
                Ok(offers) if offers.iter().any(is_well_formed)
            );
            outcomes.push(outcome);
            if usable {
                break;
            }
        }

        outcomes
    }

    /// Fan-out-merge: every eligible provider concurrently under the
    /// shared deadline; providers still in flight when it elapses are
    /// settled as timeouts so the caller's metadata stays complete.
    async fn run_fanout(
        &self,
        eligible: Vec<Arc<dyn ValigiaConnector>>,
        req: &SearchRequest,
    ) -> Vec<ProviderOutcome> {
        let mut pending: Vec<&'static str> = Vec::with_capacity(eligible.len());
        let mut futs = FuturesUnordered::new();
        for connector in eligible {
            let name = connector.name();
            pending.push(name);
            self.record_adapter_call(name);
            let per_call = self.cfg.provider_timeout;
            let call = capability_call(connector, req.clone());
            futs.push(async move {
                Self::provider_call_with_timeout(name, per_call, call).await
            });
        }

        let mut outcomes = Vec::with_capacity(pending.len());
        let overall = self.cfg.request_timeout;
        let deadline = async {
            match overall {
                Some(d) => tokio::time::sleep(d).await,
                // No deadline: wait forever; the loop ends when the
                // stream drains.
                None => std::future::pending::<()>().await,
            }
        };
        tokio::pin!(deadline);

        loop {
            tokio::select! {
                () = &mut deadline => break,
                next = futs.next() => match next {
                    Some(outcome) => {
                        self.record_adapter_outcome(&outcome);
                        pending.retain(|n| *n != outcome.provider);
                        outcomes.push(outcome);
                    }
                    None => break,
                },
            }
        }

        // Anything still in flight at the deadline is abandoned and
        // reported as a timeout.
        for name in pending {
            if outcomes.iter().any(|o| o.provider == name) {
                continue;
            }
            let outcome = ProviderOutcome {
                provider: name.to_string(),
                latency: overall.unwrap_or_default(),
                result: Err(ProviderFailure::Timeout),
            };
            self.record_adapter_outcome(&outcome);
            outcomes.push(outcome);
        }

        outcomes
    }

    fn remaining_budget(&self, started: Instant) -> Option<std::time::Duration> {
        match self.cfg.request_timeout {
            None => Some(self.cfg.provider_timeout),
            Some(overall) => {
                let remaining = overall.checked_sub(started.elapsed())?;
                (!remaining.is_zero()).then_some(remaining)
            }
        }
    }

    fn record_adapter_call(&self, name: &str) {
        self.telemetry
            .record("adapter.call", &[("provider", name.to_string())]);
    }

    fn record_adapter_outcome(&self, outcome: &ProviderOutcome) {
        let event = if outcome.result.is_ok() {
            "adapter.ok"
        } else {
            "adapter.err"
        };
        self.telemetry.record(
            event,
            &[
                ("provider", outcome.provider.clone()),
                ("latency_ms", outcome.latency.as_millis().to_string()),
                ("offers", outcome.offer_count().to_string()),
            ],
        );
    }
}
