use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;
use url::Url;

use valigia_core::{Amenities, Currency, Money, Offer, Place, SearchRequest, Segment, TravelDomain};

fn depart_at(req: &SearchRequest, hour: u32) -> DateTime<Utc> {
    req.dates()
        .start()
        .and_hms_opt(hour, 0, 0)
        .unwrap_or_default()
        .and_utc()
}

fn leg(
    origin: &Place,
    destination: &Place,
    depart: DateTime<Utc>,
    hours: i64,
    operator: &str,
) -> Segment {
    Segment {
        origin: origin.clone(),
        destination: destination.clone(),
        depart,
        arrive: depart + Duration::hours(hours),
        operator: operator.to_string(),
    }
}

/// Deterministic flight offers for the requested city pair.
pub fn offers(req: &SearchRequest) -> Vec<Offer> {
    let origin = req.origin().cloned().unwrap_or_else(|| req.destination().clone());
    let destination = req.destination().clone();
    // Vary the fixture prices by route so distinct searches look distinct.
    let base = 300
        + i64::from(
            destination
                .as_str()
                .bytes()
                .fold(0u8, u8::wrapping_add),
        );

    let mk_offer = |suffix: &str, amount: i64, segments: Vec<Segment>, amenities: Amenities| Offer {
        id: format!("mock-{}-{}-{suffix}", origin, destination),
        provider: "valigia-mock".to_string(),
        price: Money::new(Decimal::new(amount, 0), Currency::USD).unwrap(),
        domain: TravelDomain::Flight,
        segments,
        amenities,
        rating: None,
        deep_link: Url::parse(&format!(
            "https://mock.valigia.dev/book/{origin}/{destination}/{suffix}"
        ))
        .ok(),
        confidence: 0.9,
        synthetic: false,
    };

    let via = Place::new("HUB").unwrap_or_else(|_| destination.clone());
    vec![
        mk_offer(
            "nonstop",
            base + 120,
            vec![leg(&origin, &destination, depart_at(req, 8), 7, "VA")],
            Amenities::WIFI | Amenities::SEAT_SELECTION,
        ),
        mk_offer(
            "onestop",
            base,
            vec![
                leg(&origin, &via, depart_at(req, 6), 3, "VA"),
                leg(&via, &destination, depart_at(req, 10), 5, "VA"),
            ],
            Amenities::CHECKED_BAG,
        ),
        mk_offer(
            "redeye",
            base + 45,
            vec![leg(&origin, &destination, depart_at(req, 22), 7, "NX")],
            Amenities::empty(),
        ),
    ]
}
