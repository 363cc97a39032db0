use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use url::Url;

use valigia_core::{Amenities, Currency, Money, Offer, SearchRequest, Segment, TravelDomain};

fn stay_bounds(req: &SearchRequest) -> (DateTime<Utc>, DateTime<Utc>) {
    let check_in = req
        .dates()
        .start()
        .and_hms_opt(14, 0, 0)
        .unwrap_or_default()
        .and_utc();
    let check_out = req
        .dates()
        .end()
        .unwrap_or(req.dates().start())
        .and_hms_opt(10, 0, 0)
        .unwrap_or_default()
        .and_utc();
    (check_in, check_out)
}

/// Deterministic hotel offers for the requested stay.
pub fn offers(req: &SearchRequest) -> Vec<Offer> {
    let (check_in, check_out) = stay_bounds(req);
    let nights = req.dates().nights().unwrap_or(1).max(1);
    let location = req.destination().clone();

    let mk_offer = |suffix: &str,
                    property: &str,
                    nightly: i64,
                    rating: u8,
                    amenities: Amenities| Offer {
        id: format!("mock-{location}-{suffix}"),
        provider: "valigia-mock".to_string(),
        price: Money::new(Decimal::new(nightly * nights, 0), Currency::USD).unwrap(),
        domain: TravelDomain::Hotel,
        segments: vec![Segment {
            origin: location.clone(),
            destination: location.clone(),
            depart: check_in,
            arrive: check_out,
            operator: property.to_string(),
        }],
        amenities,
        rating: Some(rating),
        deep_link: Url::parse(&format!("https://mock.valigia.dev/stay/{location}/{suffix}")).ok(),
        confidence: 0.85,
        synthetic: false,
    };

    vec![
        mk_offer(
            "grand",
            "Grand Meridian",
            240,
            5,
            Amenities::WIFI | Amenities::POOL | Amenities::BREAKFAST | Amenities::GYM,
        ),
        mk_offer(
            "aurora",
            "Hotel Aurora",
            150,
            4,
            Amenities::WIFI | Amenities::BREAKFAST,
        ),
        mk_offer("transit", "Transit Inn", 90, 3, Amenities::PARKING),
    ]
}
