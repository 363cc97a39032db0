use std::time::Duration;

use thiserror::Error;

use crate::error::ValigiaError;
use valigia_types::{Offer, ProviderReport};

/// Classified failure of one upstream call.
///
/// Adapters translate raw transport/parse errors into this taxonomy so
/// the coordinator can make uniform fallback decisions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderFailure {
    /// The call did not complete within its per-provider timeout.
    #[error("timed out")]
    Timeout,
    /// The upstream rejected the adapter's credentials.
    #[error("authentication rejected: {0}")]
    Auth(String),
    /// The upstream reported its own quota as exhausted.
    #[error("upstream quota exceeded")]
    QuotaExceeded,
    /// The response could not be parsed into the canonical model.
    #[error("malformed response: {0}")]
    Malformed(String),
    /// Transport-level failure (DNS, connect, 5xx, ...).
    #[error("network error: {0}")]
    Network(String),
}

impl ProviderFailure {
    /// Classify an engine error produced while invoking a connector.
    #[must_use]
    pub fn classify(err: &ValigiaError) -> Self {
        match err {
            ValigiaError::ProviderTimeout { .. } | ValigiaError::RequestTimeout => Self::Timeout,
            ValigiaError::Provider { failure, .. } => failure.clone(),
            ValigiaError::Data(msg) => Self::Malformed(msg.clone()),
            other => Self::Network(other.to_string()),
        }
    }
}

/// Result of invoking one connector for one search request.
///
/// Created per invocation, consumed immediately by normalization, and
/// reflected into [`ProviderReport`] metadata; never persisted.
#[derive(Debug)]
pub struct ProviderOutcome {
    /// Connector name.
    pub provider: String,
    /// Wall-clock latency of the call.
    pub latency: Duration,
    /// Raw canonical offers, or the classified failure.
    pub result: Result<Vec<Offer>, ProviderFailure>,
}

impl ProviderOutcome {
    /// Whether the call produced at least one offer.
    #[must_use]
    pub fn succeeded(&self) -> bool {
        matches!(&self.result, Ok(offers) if !offers.is_empty())
    }

    /// Number of offers returned (zero on failure).
    #[must_use]
    pub fn offer_count(&self) -> usize {
        self.result.as_ref().map_or(0, Vec::len)
    }

    /// Caller-facing summary of this outcome.
    #[must_use]
    pub fn to_report(&self) -> ProviderReport {
        ProviderReport {
            provider: self.provider.clone(),
            succeeded: self.succeeded(),
            offers: u32::try_from(self.offer_count()).unwrap_or(u32::MAX),
            latency_ms: u64::try_from(self.latency.as_millis()).unwrap_or(u64::MAX),
            failure: self.result.as_ref().err().map(ToString::to_string),
        }
    }
}
