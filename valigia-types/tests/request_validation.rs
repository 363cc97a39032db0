use chrono::NaiveDate;
use valigia_types::{
    Currency, DateRange, Party, Place, SearchRequest, TravelDomain, ValidationError,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn flight_request_requires_origin() {
    let err = SearchRequest::builder(TravelDomain::Flight)
        .destination(Place::new("LON").unwrap())
        .dates(DateRange::new(date(2024, 6, 1), Some(date(2024, 6, 8))).unwrap())
        .build()
        .unwrap_err();
    assert_eq!(err, ValidationError::Missing("origin"));
}

#[test]
fn hotel_request_requires_at_least_one_night() {
    let err = SearchRequest::builder(TravelDomain::Hotel)
        .destination(Place::new("PAR").unwrap())
        .dates(DateRange::new(date(2024, 6, 1), Some(date(2024, 6, 1))).unwrap())
        .build()
        .unwrap_err();
    assert!(matches!(err, ValidationError::Dates(_)));

    let err = SearchRequest::builder(TravelDomain::Hotel)
        .destination(Place::new("PAR").unwrap())
        .dates(DateRange::new(date(2024, 6, 1), None).unwrap())
        .build()
        .unwrap_err();
    assert!(matches!(err, ValidationError::Dates(_)));
}

#[test]
fn date_range_rejects_reversed_dates() {
    let err = DateRange::new(date(2024, 6, 8), Some(date(2024, 6, 1))).unwrap_err();
    assert!(matches!(err, ValidationError::Dates(_)));
}

#[test]
fn party_requires_an_adult_and_a_room() {
    assert!(matches!(
        Party::new(0, 2, 1),
        Err(ValidationError::Party(_))
    ));
    assert!(matches!(
        Party::new(2, 0, 0),
        Err(ValidationError::Party(_))
    ));
    assert!(Party::new(1, 0, 1).is_ok());
}

#[test]
fn place_codes_are_canonicalized() {
    let p = Place::new(" nyc ").unwrap();
    assert_eq!(p.as_str(), "NYC");
    assert!(Place::new("x").is_err());
    assert!(Place::new("TOO-LONG!").is_err());
}

#[test]
fn currency_codes_are_validated() {
    assert_eq!(Currency::from_code("usd").unwrap(), Currency::USD);
    assert!(Currency::from_code("US").is_err());
    assert!(Currency::from_code("U5D").is_err());
}
