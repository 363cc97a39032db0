use chrono::NaiveDate;
use httpmock::prelude::*;
use serde_json::json;

use valigia_core::connector::FlightSearchProvider;
use valigia_core::{
    Amenities, Currency, DateRange, Place, ProviderFailure, SearchRequest, TravelDomain,
    ValigiaError,
};
use valigia_skyport::SkyportConnector;

fn request() -> SearchRequest {
    SearchRequest::builder(TravelDomain::Flight)
        .origin(Place::new("NYC").unwrap())
        .destination(Place::new("LON").unwrap())
        .dates(
            DateRange::new(
                NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
                Some(NaiveDate::from_ymd_opt(2024, 6, 8).unwrap()),
            )
            .unwrap(),
        )
        .currency(Currency::USD)
        .build()
        .unwrap()
}

fn connector(server: &MockServer) -> SkyportConnector {
    SkyportConnector::builder("test-key")
        .base_url(server.base_url())
        .build()
        .unwrap()
}

#[tokio::test]
async fn parses_itineraries_and_anchors_times_to_utc() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v2/flights/search")
            .header("X-Api-Key", "test-key")
            .query_param("origin", "NYC")
            .query_param("destination", "LON");
        then.status(200).json_body(json!({
            "itineraries": [{
                "id": "it-1",
                "price": { "amount": "480.00", "currency": "USD" },
                "legs": [{
                    "from": "JFK",
                    "to": "LHR",
                    "departure_local": "2024-06-01T08:05:00",
                    "arrival_local": "2024-06-01T20:10:00",
                    "departure_tz": "America/New_York",
                    "arrival_tz": "Europe/London",
                    "carrier": "BA"
                }],
                "extras": ["wifi", "checked_bag"],
                "deeplink": "https://skyport.io/book/it-1",
                "score": 90
            }]
        }));
    });

    let offers = connector(&server).search_flights(&request()).await.unwrap();
    mock.assert();

    assert_eq!(offers.len(), 1);
    let offer = &offers[0];
    assert_eq!(offer.provider, "valigia-skyport");
    assert_eq!(offer.price.currency(), Currency::USD);
    assert!(offer.amenities.contains(Amenities::WIFI | Amenities::CHECKED_BAG));
    // 08:05 New York in June is 12:05 UTC.
    assert_eq!(
        offer.segments[0].depart.to_rfc3339(),
        "2024-06-01T12:05:00+00:00"
    );
    assert!((offer.confidence - 0.9).abs() < 1e-9);
    assert!(!offer.synthetic);
}

#[tokio::test]
async fn malformed_records_are_skipped_not_fatal() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/v2/flights/search");
        then.status(200).json_body(json!({
            "itineraries": [
                {
                    "id": "bad-tz",
                    "price": { "amount": "100.00", "currency": "USD" },
                    "legs": [{
                        "from": "JFK", "to": "LHR",
                        "departure_local": "2024-06-01T08:05:00",
                        "arrival_local": "2024-06-01T20:10:00",
                        "departure_tz": "Not/AZone",
                        "arrival_tz": "Europe/London",
                        "carrier": "BA"
                    }]
                },
                {
                    "id": "bad-currency",
                    "price": { "amount": "100.00", "currency": "DOLLARS" },
                    "legs": [{
                        "from": "JFK", "to": "LHR",
                        "departure_local": "2024-06-01T09:00:00",
                        "arrival_local": "2024-06-01T21:00:00",
                        "departure_tz": "America/New_York",
                        "arrival_tz": "Europe/London",
                        "carrier": "BA"
                    }]
                },
                {
                    "id": "ok",
                    "price": { "amount": "250.00", "currency": "USD" },
                    "legs": [{
                        "from": "JFK", "to": "LHR",
                        "departure_local": "2024-06-01T10:00:00",
                        "arrival_local": "2024-06-01T22:00:00",
                        "departure_tz": "America/New_York",
                        "arrival_tz": "Europe/London",
                        "carrier": "VS"
                    }]
                }
            ]
        }));
    });

    let offers = connector(&server).search_flights(&request()).await.unwrap();
    assert_eq!(offers.len(), 1);
    assert_eq!(offers[0].id, "skyport:ok");
}

#[tokio::test]
async fn auth_rejections_map_to_typed_failures() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/v2/flights/search");
        then.status(401);
    });

    let err = connector(&server)
        .search_flights(&request())
        .await
        .unwrap_err();
    match err {
        ValigiaError::Provider { provider, failure } => {
            assert_eq!(provider, "valigia-skyport");
            assert!(matches!(failure, ProviderFailure::Auth(_)));
        }
        other => panic!("unexpected: {other:?}"),
    }
}

#[tokio::test]
async fn upstream_quota_exhaustion_maps_to_quota_failure() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/v2/flights/search");
        then.status(429);
    });

    let err = connector(&server)
        .search_flights(&request())
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ValigiaError::Provider {
            failure: ProviderFailure::QuotaExceeded,
            ..
        }
    ));
}

#[tokio::test]
async fn non_json_bodies_map_to_malformed() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/v2/flights/search");
        then.status(200).body("<html>gateway error</html>");
    });

    let err = connector(&server)
        .search_flights(&request())
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ValigiaError::Provider {
            failure: ProviderFailure::Malformed(_),
            ..
        }
    ));
}
