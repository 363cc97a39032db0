use chrono::{TimeZone, Utc};
use rust_decimal::Decimal;
use valigia_core::normalize::currency::convert_offers;
use valigia_core::{RateSource, StaticRates};
use valigia_types::{Amenities, Currency, Money, Offer, Place, Segment, TravelDomain};

fn offer(amount: i64, currency: Currency) -> Offer {
    let depart = Utc.with_ymd_and_hms(2024, 6, 1, 8, 0, 0).unwrap();
    Offer {
        id: format!("o-{amount}-{currency}"),
        provider: "alpha".to_string(),
        price: Money::new(Decimal::new(amount, 0), currency).unwrap(),
        domain: TravelDomain::Flight,
        segments: vec![Segment {
            origin: Place::new("NYC").unwrap(),
            destination: Place::new("LON").unwrap(),
            depart,
            arrive: depart + chrono::Duration::hours(7),
            operator: "BA".to_string(),
        }],
        amenities: Amenities::empty(),
        rating: None,
        deep_link: None,
        confidence: 0.5,
        synthetic: false,
    }
}

#[test]
fn identity_conversion_needs_no_table_entry() {
    let rates = StaticRates::new();
    assert_eq!(rates.rate(Currency::USD, Currency::USD).unwrap(), Decimal::ONE);

    let (kept, dropped) = convert_offers(vec![offer(100, Currency::USD)], Currency::USD, &rates);
    assert_eq!(kept.len(), 1);
    assert_eq!(dropped, 0);
    assert_eq!(kept[0].price.amount(), Decimal::new(100, 0));
}

#[test]
fn conversion_rounds_to_cents() {
    let rates = StaticRates::new().with_rate(
        Currency::EUR,
        Currency::USD,
        Decimal::new(10937, 4), // 1.0937
    );
    let (kept, dropped) = convert_offers(vec![offer(199, Currency::EUR)], Currency::USD, &rates);
    assert_eq!(dropped, 0);
    assert_eq!(kept[0].price.currency(), Currency::USD);
    assert_eq!(kept[0].price.amount(), Decimal::new(21765, 2)); // 217.6463 -> 217.65
}

#[test]
fn offers_without_a_rate_are_dropped_not_mispriced() {
    let rates = StaticRates::new();
    let (kept, dropped) = convert_offers(
        vec![offer(100, Currency::USD), offer(90, Currency::JPY)],
        Currency::USD,
        &rates,
    );
    assert_eq!(kept.len(), 1);
    assert_eq!(dropped, 1);
    assert!(kept.iter().all(|o| o.price.currency() == Currency::USD));
}
