//! Degraded-mode placeholder offers.
//!
//! When every real provider fails or returns nothing, the coordinator
//! fabricates plausible offers so the caller still receives a non-empty,
//! well-formed response. Every fabricated offer carries `synthetic: true`
//! and a rock-bottom confidence; callers must not present these prices as
//! real quotes.

use chrono::Duration;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;

use valigia_core::{
    Amenities, Currency, Fingerprint, Money, Offer, Place, SearchRequest, Segment, TravelDomain,
};

const PROVIDER: &str = "synthetic";

/// Deterministic placeholder offers for a failed search.
///
/// Seeded by the query fingerprint: the same degraded query fabricates
/// the same offers, which keeps cache entries and tests stable.
pub(crate) fn offers(req: &SearchRequest, fingerprint: Fingerprint) -> Vec<Offer> {
    let mut rng = StdRng::seed_from_u64(fingerprint.as_u64());
    match req.domain() {
        TravelDomain::Flight => flights(req, &mut rng),
        TravelDomain::Hotel => hotels(req, &mut rng),
        _ => unreachable!("unhandled travel domain"),
    }
}

fn money(amount: i64, currency: Currency) -> Money {
    // Amounts below are always positive.
    Money::new(Decimal::new(amount.max(1), 0), currency).unwrap_or_else(|_| {
        unreachable!("synthetic amounts are positive")
    })
}

fn flights(req: &SearchRequest, rng: &mut StdRng) -> Vec<Offer> {
    let origin = req
        .origin()
        .cloned()
        .unwrap_or_else(|| req.destination().clone());
    let destination = req.destination().clone();
    let depart_base = req
        .dates()
        .start()
        .and_hms_opt(9, 0, 0)
        .unwrap_or_default()
        .and_utc();

    (0..2)
        .map(|i| {
            let price = rng.random_range(220..=680);
            let hours = rng.random_range(6..=11);
            let depart = depart_base + Duration::hours(i64::from(i) * 4);
            Offer {
                id: format!("synthetic-flight-{i}"),
                provider: PROVIDER.to_string(),
                price: money(price, req.currency()),
                domain: TravelDomain::Flight,
                segments: vec![Segment {
                    origin: origin.clone(),
                    destination: destination.clone(),
                    depart,
                    arrive: depart + Duration::hours(hours),
                    operator: String::new(),
                }],
                amenities: Amenities::empty(),
                rating: None,
                deep_link: None,
                confidence: 0.05,
                synthetic: true,
            }
        })
        .collect()
}

fn hotels(req: &SearchRequest, rng: &mut StdRng) -> Vec<Offer> {
    let location: Place = req.destination().clone();
    let nights = req.dates().nights().unwrap_or(1).max(1);
    let check_in = req
        .dates()
        .start()
        .and_hms_opt(14, 0, 0)
        .unwrap_or_default()
        .and_utc();
    let check_out = check_in + Duration::days(nights) - Duration::hours(4);

    (0..2)
        .map(|i| {
            let nightly = rng.random_range(70..=260);
            Offer {
                id: format!("synthetic-hotel-{i}"),
                provider: PROVIDER.to_string(),
                price: money(nightly * nights, req.currency()),
                domain: TravelDomain::Hotel,
                segments: vec![Segment {
                    origin: location.clone(),
                    destination: location.clone(),
                    depart: check_in,
                    arrive: check_out,
                    operator: format!("Placeholder Stay {}", i + 1),
                }],
                amenities: Amenities::empty(),
                rating: None,
                deep_link: None,
                confidence: 0.05,
                synthetic: true,
            }
        })
        .collect()
}
