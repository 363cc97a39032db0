//! GDSLine wire format. Prices are integer minor units; segment times are
//! UTC epoch seconds.

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub(crate) struct TokenRequest<'a> {
    pub client_id: &'a str,
    pub client_secret: &'a str,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TokenResponse {
    pub access_token: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct FaresResponse {
    pub fares: Vec<Fare>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Fare {
    pub fare_id: String,
    pub total_cents: i64,
    pub currency: String,
    pub segments: Vec<FareSegment>,
    #[serde(default)]
    pub brand: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct FareSegment {
    pub board: String,
    pub off: String,
    pub dep_utc: i64,
    pub arr_utc: i64,
    pub marketing_carrier: String,
}
