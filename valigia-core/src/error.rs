use std::time::Duration;

use thiserror::Error;

use crate::outcome::ProviderFailure;
use valigia_types::ValidationError;

/// Unified error type for the valigia workspace.
///
/// Only `Validation` and `RateLimited` ever cross the public search
/// boundary; provider-level failures are absorbed by the coordinator and
/// reflected as result metadata.
#[derive(Debug, Error)]
pub enum ValigiaError {
    /// The request failed canonical-model validation before any network call.
    #[error("invalid request: {0}")]
    Validation(#[from] ValidationError),

    /// The caller exceeded its admission quota for the current window.
    #[error("rate limit exceeded; retry in {retry_after:?}")]
    RateLimited {
        /// Time until the current window resets.
        retry_after: Duration,
    },

    /// The requested capability is not implemented by the target connector.
    #[error("unsupported capability: {capability}")]
    Unsupported {
        /// A capability string describing what was requested (e.g. "search/hotel").
        capability: &'static str,
    },

    /// An individual connector failed with a classified upstream failure.
    #[error("{provider} failed: {failure}")]
    Provider {
        /// Connector name that failed.
        provider: String,
        /// Classified upstream failure.
        failure: ProviderFailure,
    },

    /// An individual provider call exceeded the configured timeout.
    #[error("provider timed out: {provider}")]
    ProviderTimeout {
        /// Connector name that timed out.
        provider: String,
    },

    /// The overall request exceeded the configured deadline.
    #[error("request timed out")]
    RequestTimeout,

    /// All selected providers failed; contains the individual failures.
    #[error("all providers failed: {0:?}")]
    AllProvidersFailed(Vec<ValigiaError>),

    /// Issues with returned or expected data (missing rate, bad record).
    #[error("data issue: {0}")]
    Data(String),

    /// Invalid input argument outside the canonical model (builder misuse).
    #[error("invalid argument: {0}")]
    InvalidArg(String),
}

impl ValigiaError {
    /// Helper: build an `Unsupported` error for a capability string.
    #[must_use]
    pub const fn unsupported(capability: &'static str) -> Self {
        Self::Unsupported { capability }
    }

    /// Helper: build a `Provider` error with the connector name and failure.
    pub fn provider(provider: impl Into<String>, failure: ProviderFailure) -> Self {
        Self::Provider {
            provider: provider.into(),
            failure,
        }
    }

    /// Helper: build a `ProviderTimeout` error.
    pub fn provider_timeout(provider: impl Into<String>) -> Self {
        Self::ProviderTimeout {
            provider: provider.into(),
        }
    }

    /// Helper: build a `RateLimited` error.
    #[must_use]
    pub const fn rate_limited(retry_after: Duration) -> Self {
        Self::RateLimited { retry_after }
    }
}
