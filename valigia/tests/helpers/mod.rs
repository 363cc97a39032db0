#![allow(dead_code)]

pub mod mock_connector;

pub use mock_connector::TestConnector;

use chrono::{NaiveDate, TimeZone, Utc};
use rust_decimal::Decimal;
use valigia_core::{
    Amenities, Currency, DateRange, Money, Offer, Place, SearchRequest, Segment, TravelDomain,
};

pub fn usd(amount: i64) -> Money {
    Money::new(Decimal::new(amount, 0), Currency::USD).unwrap()
}

pub fn place(code: &str) -> Place {
    Place::new(code).unwrap()
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// NYC → LON, 2024-06-01 → 2024-06-08, 1 adult, USD.
pub fn flight_request() -> SearchRequest {
    flight_request_to("LON")
}

pub fn flight_request_to(destination: &str) -> SearchRequest {
    SearchRequest::builder(TravelDomain::Flight)
        .origin(place("NYC"))
        .destination(place(destination))
        .dates(DateRange::new(date(2024, 6, 1), Some(date(2024, 6, 8))).unwrap())
        .currency(Currency::USD)
        .build()
        .unwrap()
}

pub fn hotel_request_to(destination: &str) -> SearchRequest {
    SearchRequest::builder(TravelDomain::Hotel)
        .destination(place(destination))
        .dates(DateRange::new(date(2024, 6, 1), Some(date(2024, 6, 4))).unwrap())
        .currency(Currency::USD)
        .build()
        .unwrap()
}

/// Single-leg NYC → LON flight offer departing 08:00 UTC on 2024-06-01.
pub fn flight_offer(provider: &str, amount: i64, operator: &str) -> Offer {
    flight_offer_at(provider, amount, operator, 8)
}

pub fn flight_offer_at(provider: &str, amount: i64, operator: &str, depart_hour: u32) -> Offer {
    let depart = Utc
        .with_ymd_and_hms(2024, 6, 1, depart_hour, 0, 0)
        .unwrap();
    Offer {
        id: format!("{provider}-{amount}"),
        provider: provider.to_string(),
        price: usd(amount),
        domain: TravelDomain::Flight,
        segments: vec![Segment {
            origin: place("NYC"),
            destination: place("LON"),
            depart,
            arrive: depart + chrono::Duration::hours(7),
            operator: operator.to_string(),
        }],
        amenities: Amenities::empty(),
        rating: None,
        deep_link: None,
        confidence: 0.5,
        synthetic: false,
    }
}
