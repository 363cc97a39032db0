//! GDSLine connector: a secondary GDS feed, flights only.
//!
//! GDSLine authenticates with a client-credential token exchange and
//! prices fares in integer minor units with UTC epoch segment times, so
//! translation is mostly unit conversion rather than time-zone work. The
//! bearer token is fetched lazily and re-fetched once when a call comes
//! back 401 (tokens expire server-side).
#![warn(missing_docs)]

mod wire;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use tokio::sync::Mutex;

use valigia_core::connector::FlightSearchProvider;
use valigia_core::{
    Amenities, Currency, Money, Offer, Place, ProviderFailure, SearchRequest, Segment,
    TravelDomain, ValigiaConnector, ValigiaError,
};

const NAME: &str = "valigia-gdsline";

/// Connector backed by the GDSLine fares API.
pub struct GdsLineConnector {
    http: reqwest::Client,
    base_url: String,
    client_id: String,
    client_secret: String,
    token: Mutex<Option<String>>,
}

impl GdsLineConnector {
    /// Create a connector for the production endpoint.
    ///
    /// # Errors
    /// Returns `InvalidArg` when the HTTP client cannot be constructed.
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Result<Self, ValigiaError> {
        Self::with_base_url(client_id, client_secret, "https://api.gdsline.net")
    }

    /// Create a connector against a custom endpoint (tests point this at
    /// a local mock).
    ///
    /// # Errors
    /// Returns `InvalidArg` when the HTTP client cannot be constructed.
    pub fn with_base_url(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Result<Self, ValigiaError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()
            .map_err(|e| ValigiaError::InvalidArg(format!("gdsline: http client: {e}")))?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            token: Mutex::new(None),
        })
    }

    async fn token(&self) -> Result<String, ValigiaError> {
        let mut guard = self.token.lock().await;
        if let Some(token) = guard.as_ref() {
            return Ok(token.clone());
        }

        let resp = self
            .http
            .post(format!("{}/auth/token", self.base_url))
            .json(&wire::TokenRequest {
                client_id: &self.client_id,
                client_secret: &self.client_secret,
            })
            .send()
            .await
            .map_err(|e| ValigiaError::provider(NAME, ProviderFailure::Network(e.to_string())))?;

        if resp.status() == reqwest::StatusCode::UNAUTHORIZED {
            return Err(ValigiaError::provider(
                NAME,
                ProviderFailure::Auth("credentials rejected".to_string()),
            ));
        }
        if !resp.status().is_success() {
            return Err(ValigiaError::provider(
                NAME,
                ProviderFailure::Network(format!("http {}", resp.status())),
            ));
        }

        let body: wire::TokenResponse = resp.json().await.map_err(|e| {
            ValigiaError::provider(NAME, ProviderFailure::Malformed(e.to_string()))
        })?;
        *guard = Some(body.access_token.clone());
        Ok(body.access_token)
    }

    async fn fetch_fares(
        &self,
        token: &str,
        req: &SearchRequest,
        origin: &Place,
    ) -> Result<reqwest::Response, ValigiaError> {
        self.http
            .get(format!("{}/fares", self.base_url))
            .bearer_auth(token)
            .query(&[
                ("orig", origin.as_str()),
                ("dest", req.destination().as_str()),
                ("date", &req.dates().start().to_string()),
                ("pax", &req.party().adults().to_string()),
            ])
            .send()
            .await
            .map_err(|e| ValigiaError::provider(NAME, ProviderFailure::Network(e.to_string())))
    }
}

fn epoch_utc(secs: i64) -> Option<DateTime<Utc>> {
    DateTime::<Utc>::from_timestamp(secs, 0)
}

fn offer_from_fare(fare: &wire::Fare) -> Option<Offer> {
    let currency = Currency::from_code(&fare.currency).ok()?;
    let price = Money::new(Decimal::new(fare.total_cents, 2), currency).ok()?;
    let segments: Vec<Segment> = fare
        .segments
        .iter()
        .map(|s| {
            Some(Segment {
                origin: Place::new(&s.board).ok()?,
                destination: Place::new(&s.off).ok()?,
                depart: epoch_utc(s.dep_utc)?,
                arrive: epoch_utc(s.arr_utc)?,
                operator: s.marketing_carrier.clone(),
            })
        })
        .collect::<Option<_>>()?;
    if segments.is_empty() {
        return None;
    }

    let amenities = match fare.brand.as_deref() {
        Some("FLEX") => Amenities::FLEX_CANCEL | Amenities::CHECKED_BAG,
        Some("PLUS") => Amenities::CHECKED_BAG,
        _ => Amenities::empty(),
    };

    Some(Offer {
        id: format!("gdsline:{}", fare.fare_id),
        provider: NAME.to_string(),
        price,
        domain: TravelDomain::Flight,
        segments,
        amenities,
        rating: None,
        deep_link: None,
        confidence: 0.75,
        synthetic: false,
    })
}

impl ValigiaConnector for GdsLineConnector {
    fn name(&self) -> &'static str {
        NAME
    }

    fn vendor(&self) -> &'static str {
        "GDSLine"
    }

    fn supports_domain(&self, domain: TravelDomain) -> bool {
        matches!(domain, TravelDomain::Flight)
    }

    fn weight(&self) -> f64 {
        0.6
    }

    fn cost_hint(&self) -> u32 {
        200
    }

    fn as_flight_provider(&self) -> Option<&dyn FlightSearchProvider> {
        Some(self as &dyn FlightSearchProvider)
    }
}

#[async_trait]
impl FlightSearchProvider for GdsLineConnector {
    async fn search_flights(&self, req: &SearchRequest) -> Result<Vec<Offer>, ValigiaError> {
        let origin = req
            .origin()
            .ok_or_else(|| ValigiaError::InvalidArg("flight search needs an origin".into()))?
            .clone();

        let mut resp = self.fetch_fares(&self.token().await?, req, &origin).await?;

        // One retry with a fresh token when the cached one expired.
        if resp.status() == reqwest::StatusCode::UNAUTHORIZED {
            self.token.lock().await.take();
            resp = self.fetch_fares(&self.token().await?, req, &origin).await?;
        }

        let status = resp.status();
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(ValigiaError::provider(
                NAME,
                ProviderFailure::Auth("token rejected".to_string()),
            ));
        }
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(ValigiaError::provider(NAME, ProviderFailure::QuotaExceeded));
        }
        if !status.is_success() {
            return Err(ValigiaError::provider(
                NAME,
                ProviderFailure::Network(format!("http {status}")),
            ));
        }

        let body: wire::FaresResponse = resp.json().await.map_err(|e| {
            ValigiaError::provider(NAME, ProviderFailure::Malformed(e.to_string()))
        })?;

        let mut out = Vec::with_capacity(body.fares.len());
        let mut skipped = 0usize;
        for fare in &body.fares {
            match offer_from_fare(fare) {
                Some(o) => out.push(o),
                None => skipped += 1,
            }
        }
        if skipped > 0 {
            tracing::debug!(target: "valigia::gdsline", skipped, "skipped untranslatable fares");
        }
        Ok(out)
    }
}
