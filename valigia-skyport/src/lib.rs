//! Skyport connector: the primary aggregator API (flights and hotels).
//!
//! Skyport speaks JSON over HTTPS with an `X-Api-Key` header. Leg times
//! arrive as local wall-clock strings plus IANA zone names; this adapter
//! anchors them to UTC before anything downstream sees them. Individual
//! records that fail translation are skipped and logged, never fatal.
#![warn(missing_docs)]

mod builder;
mod wire;

pub use builder::SkyportBuilder;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;
use serde::de::DeserializeOwned;

use valigia_core::connector::{FlightSearchProvider, HotelSearchProvider};
use valigia_core::{
    Amenities, Currency, Money, Offer, Place, ProviderFailure, SearchRequest, Segment,
    TravelDomain, ValigiaConnector, ValigiaError,
};

const NAME: &str = "valigia-skyport";

/// Connector backed by the Skyport aggregator API.
pub struct SkyportConnector {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl SkyportConnector {
    /// Start building a connector with the given API key.
    #[must_use]
    pub fn builder(api_key: impl Into<String>) -> SkyportBuilder {
        SkyportBuilder::new(api_key)
    }

    pub(crate) const fn from_parts(
        http: reqwest::Client,
        api_key: String,
        base_url: String,
    ) -> Self {
        Self {
            http,
            api_key,
            base_url,
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ValigiaError> {
        let url = format!("{}{path}", self.base_url);
        let resp = self
            .http
            .get(&url)
            .header("X-Api-Key", &self.api_key)
            .query(query)
            .send()
            .await
            .map_err(|e| {
                ValigiaError::provider(NAME, ProviderFailure::Network(e.to_string()))
            })?;

        let status = resp.status();
        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(ValigiaError::provider(
                NAME,
                ProviderFailure::Auth(format!("http {status}")),
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

        resp.json::<T>().await.map_err(|e| {
            ValigiaError::provider(NAME, ProviderFailure::Malformed(e.to_string()))
        })
    }
}

fn parse_local(ts: &str, zone: &str) -> Option<DateTime<Utc>> {
    let naive = NaiveDateTime::parse_from_str(ts, "%Y-%m-%dT%H:%M:%S").ok()?;
    let tz: Tz = zone.parse().ok()?;
    // Ambiguous or skipped local times (DST transitions) are rejected
    // rather than guessed.
    tz.from_local_datetime(&naive)
        .single()
        .map(|dt| dt.with_timezone(&Utc))
}

fn flight_amenities(extras: &[String]) -> Amenities {
    let mut out = Amenities::empty();
    for extra in extras {
        out |= match extra.to_ascii_lowercase().as_str() {
            "wifi" => Amenities::WIFI,
            "checked_bag" | "bag" => Amenities::CHECKED_BAG,
            "seat_selection" => Amenities::SEAT_SELECTION,
            "lounge" => Amenities::LOUNGE,
            "flex_cancel" => Amenities::FLEX_CANCEL,
            _ => Amenities::empty(),
        };
    }
    out
}

fn hotel_amenities(tags: &[String]) -> Amenities {
    let mut out = Amenities::empty();
    for tag in tags {
        out |= match tag.to_ascii_lowercase().as_str() {
            "wifi" => Amenities::WIFI,
            "breakfast" => Amenities::BREAKFAST,
            "pool" => Amenities::POOL,
            "parking" => Amenities::PARKING,
            "pets" => Amenities::PETS,
            "gym" => Amenities::GYM,
            "flex_cancel" => Amenities::FLEX_CANCEL,
            _ => Amenities::empty(),
        };
    }
    out
}

fn price_from_wire(price: &wire::Price) -> Option<Money> {
    let currency = Currency::from_code(&price.currency).ok()?;
    Money::new(price.amount, currency).ok()
}

fn segment_from_leg(leg: &wire::Leg) -> Option<Segment> {
    Some(Segment {
        origin: Place::new(&leg.from).ok()?,
        destination: Place::new(&leg.to).ok()?,
        depart: parse_local(&leg.departure_local, &leg.departure_tz)?,
        arrive: parse_local(&leg.arrival_local, &leg.arrival_tz)?,
        operator: leg.carrier.clone(),
    })
}

fn offer_from_itinerary(it: &wire::Itinerary) -> Option<Offer> {
    let price = price_from_wire(&it.price)?;
    let segments: Vec<Segment> = it.legs.iter().map(segment_from_leg).collect::<Option<_>>()?;
    if segments.is_empty() {
        return None;
    }
    Some(Offer {
        id: format!("skyport:{}", it.id),
        provider: NAME.to_string(),
        price,
        domain: TravelDomain::Flight,
        segments,
        amenities: flight_amenities(&it.extras),
        rating: None,
        deep_link: it.deeplink.as_deref().and_then(|u| u.parse().ok()),
        confidence: it
            .score
            .map_or(0.7, |s| f64::from(s.min(100)) / 100.0),
        synthetic: false,
    })
}

fn offer_from_property(prop: &wire::Property, req: &SearchRequest) -> Option<Offer> {
    let price = price_from_wire(&prop.total)?;
    let location = req.destination().clone();
    let check_in = req.dates().start().and_hms_opt(14, 0, 0)?.and_utc();
    let check_out = req.dates().end()?.and_hms_opt(10, 0, 0)?.and_utc();
    Some(Offer {
        id: format!("skyport:{}", prop.id),
        provider: NAME.to_string(),
        price,
        domain: TravelDomain::Hotel,
        segments: vec![Segment {
            origin: location.clone(),
            destination: location,
            depart: check_in,
            arrive: check_out,
            operator: prop.name.clone(),
        }],
        amenities: hotel_amenities(&prop.amenities),
        rating: prop.stars,
        deep_link: prop.url.as_deref().and_then(|u| u.parse().ok()),
        confidence: 0.8,
        synthetic: false,
    })
}

fn collect_skipping_bad<T, O>(records: &[T], f: impl Fn(&T) -> Option<O>) -> Vec<O> {
    let mut out = Vec::with_capacity(records.len());
    let mut skipped = 0usize;
    for record in records {
        match f(record) {
            Some(o) => out.push(o),
            None => skipped += 1,
        }
    }
    if skipped > 0 {
        tracing::debug!(target: "valigia::skyport", skipped, "skipped untranslatable records");
    }
    out
}

impl ValigiaConnector for SkyportConnector {
    fn name(&self) -> &'static str {
        NAME
    }

    fn vendor(&self) -> &'static str {
        "Skyport"
    }

    fn supports_domain(&self, _domain: TravelDomain) -> bool {
        true
    }

    fn weight(&self) -> f64 {
        0.8
    }

    fn cost_hint(&self) -> u32 {
        120
    }

    fn as_flight_provider(&self) -> Option<&dyn FlightSearchProvider> {
        Some(self as &dyn FlightSearchProvider)
    }

    fn as_hotel_provider(&self) -> Option<&dyn HotelSearchProvider> {
        Some(self as &dyn HotelSearchProvider)
    }
}

#[async_trait]
impl FlightSearchProvider for SkyportConnector {
    async fn search_flights(&self, req: &SearchRequest) -> Result<Vec<Offer>, ValigiaError> {
        let origin = req
            .origin()
            .ok_or_else(|| ValigiaError::InvalidArg("flight search needs an origin".into()))?;

        let mut query = vec![
            ("origin", origin.as_str().to_string()),
            ("destination", req.destination().as_str().to_string()),
            ("depart", req.dates().start().to_string()),
            ("adults", req.party().adults().to_string()),
            ("children", req.party().children().to_string()),
            ("currency", req.currency().as_str().to_string()),
        ];
        if let Some(ret) = req.dates().end() {
            query.push(("return", ret.to_string()));
        }

        let resp: wire::FlightSearchResponse =
            self.get_json("/v2/flights/search", &query).await?;
        Ok(collect_skipping_bad(&resp.itineraries, offer_from_itinerary))
    }
}

#[async_trait]
impl HotelSearchProvider for SkyportConnector {
    async fn search_hotels(&self, req: &SearchRequest) -> Result<Vec<Offer>, ValigiaError> {
        let check_out = req
            .dates()
            .end()
            .ok_or_else(|| ValigiaError::InvalidArg("hotel search needs a check-out".into()))?;

        let query = vec![
            ("destination", req.destination().as_str().to_string()),
            ("checkin", req.dates().start().to_string()),
            ("checkout", check_out.to_string()),
            ("adults", req.party().adults().to_string()),
            ("rooms", req.party().rooms().to_string()),
            ("currency", req.currency().as_str().to_string()),
        ];

        let resp: wire::HotelSearchResponse = self.get_json("/v2/hotels/search", &query).await?;
        Ok(collect_skipping_bad(&resp.properties, |p| {
            offer_from_property(p, req)
        }))
    }
}
