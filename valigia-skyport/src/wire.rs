//! Skyport wire format. Nothing here escapes the adapter boundary; every
//! record is translated into the canonical `Offer` or skipped.

use rust_decimal::Decimal;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(crate) struct FlightSearchResponse {
    pub itineraries: Vec<Itinerary>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Itinerary {
    pub id: String,
    pub price: Price,
    pub legs: Vec<Leg>,
    #[serde(default)]
    pub extras: Vec<String>,
    #[serde(default)]
    pub deeplink: Option<String>,
    /// Skyport's own 0-100 quality score.
    #[serde(default)]
    pub score: Option<u8>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Price {
    /// Decimal amount as a string, e.g. `"480.00"`.
    pub amount: Decimal,
    pub currency: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Leg {
    pub from: String,
    pub to: String,
    /// Local wall-clock departure, e.g. `"2024-06-01T08:05:00"`.
    pub departure_local: String,
    pub arrival_local: String,
    /// IANA zone names for the endpoint airports.
    pub departure_tz: String,
    pub arrival_tz: String,
    pub carrier: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct HotelSearchResponse {
    pub properties: Vec<Property>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Property {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub stars: Option<u8>,
    pub total: Price,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default)]
    pub url: Option<String>,
}
