use std::time::Duration;

use crate::SkyportConnector;
use valigia_core::ValigiaError;

/// Builder for [`SkyportConnector`].
pub struct SkyportBuilder {
    api_key: String,
    base_url: String,
    timeout: Duration,
}

impl SkyportBuilder {
    pub(crate) fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: "https://api.skyport.io".to_string(),
            timeout: Duration::from_secs(10),
        }
    }

    /// Override the API base URL (tests point this at a local mock).
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Transport-level timeout for individual HTTP calls. The
    /// orchestrator applies its own per-provider timeout on top; this one
    /// exists so a hung socket cannot outlive the client either.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the connector.
    ///
    /// # Errors
    /// Returns `InvalidArg` when the HTTP client cannot be constructed or
    /// the API key is empty.
    pub fn build(self) -> Result<SkyportConnector, ValigiaError> {
        if self.api_key.is_empty() {
            return Err(ValigiaError::InvalidArg(
                "skyport: api key must not be empty".to_string(),
            ));
        }
        let http = reqwest::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| ValigiaError::InvalidArg(format!("skyport: http client: {e}")))?;
        Ok(SkyportConnector::from_parts(
            http,
            self.api_key,
            self.base_url.trim_end_matches('/').to_string(),
        ))
    }
}
