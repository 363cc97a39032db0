use chrono::NaiveDate;
use rust_decimal::Decimal;
use valigia_types::{
    Currency, DateRange, Filters, Fingerprint, Party, Place, SearchRequest, TravelDomain,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn nyc_lon() -> valigia_types::SearchRequestBuilder {
    SearchRequest::builder(TravelDomain::Flight)
        .origin(Place::new("NYC").unwrap())
        .destination(Place::new("LON").unwrap())
        .dates(DateRange::new(date(2024, 6, 1), Some(date(2024, 6, 8))).unwrap())
        .party(Party::new(1, 0, 1).unwrap())
        .currency(Currency::USD)
}

#[test]
fn locale_does_not_affect_the_fingerprint() {
    let a = nyc_lon().build().unwrap();
    let b = nyc_lon().locale("en-GB").build().unwrap();
    assert_eq!(Fingerprint::of(&a), Fingerprint::of(&b));
}

#[test]
fn defaulted_optionals_fingerprint_like_explicit_defaults() {
    let a = nyc_lon().build().unwrap();
    let b = nyc_lon()
        .party(Party::default())
        .filters(Filters::default())
        .build()
        .unwrap();
    assert_eq!(Fingerprint::of(&a), Fingerprint::of(&b));
}

#[test]
fn price_filter_scale_is_normalized() {
    let a = nyc_lon()
        .filters(Filters {
            max_price: Some(Decimal::new(100, 0)),
            ..Filters::default()
        })
        .build()
        .unwrap();
    let b = nyc_lon()
        .filters(Filters {
            max_price: Some(Decimal::new(10_000, 2)),
            ..Filters::default()
        })
        .build()
        .unwrap();
    assert_eq!(Fingerprint::of(&a), Fingerprint::of(&b));
}

#[test]
fn semantic_changes_move_the_fingerprint() {
    let base = Fingerprint::of(&nyc_lon().build().unwrap());

    let other_dates = nyc_lon()
        .dates(DateRange::new(date(2024, 6, 2), Some(date(2024, 6, 8))).unwrap())
        .build()
        .unwrap();
    assert_ne!(base, Fingerprint::of(&other_dates));

    let other_currency = nyc_lon().currency(Currency::EUR).build().unwrap();
    assert_ne!(base, Fingerprint::of(&other_currency));

    let other_party = nyc_lon()
        .party(Party::new(2, 0, 1).unwrap())
        .build()
        .unwrap();
    assert_ne!(base, Fingerprint::of(&other_party));
}
