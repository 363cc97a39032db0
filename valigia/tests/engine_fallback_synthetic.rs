mod helpers;

use helpers::{TestConnector, flight_request, hotel_request_to};
use valigia::{ProviderFailure, Valigia, ValigiaError};

#[tokio::test]
async fn all_providers_failing_yields_a_synthetic_result_not_an_error() {
    let a = TestConnector::builder("alpha")
        .fails_flights(|| {
            ValigiaError::provider("alpha", ProviderFailure::Network("boom".into()))
        })
        .build();
    let b = TestConnector::builder("beta")
        .fails_flights(|| ValigiaError::provider("beta", ProviderFailure::QuotaExceeded))
        .build();

    let engine = Valigia::builder()
        .with_connector(a)
        .with_connector(b)
        .fetch_strategy(valigia::FetchStrategy::Fanout)
        .build()
        .unwrap();

    let result = engine.search("caller-1", flight_request()).await.unwrap();

    assert!(result.meta.synthetic);
    assert!(!result.offers.is_empty(), "degraded mode still returns offers");
    assert!(result.offers.iter().all(|o| o.synthetic));
    assert!(result.offers.iter().all(|o| o.confidence < 0.1));
    // Both failures are visible in the metadata.
    assert_eq!(result.meta.providers.len(), 2);
    assert!(result.meta.providers.iter().all(|p| !p.succeeded));
}

#[tokio::test]
async fn empty_provider_results_also_degrade_to_synthetic() {
    let empty = TestConnector::builder("alpha")
        .returns_flights(vec![])
        .build();

    let engine = Valigia::builder().with_connector(empty).build().unwrap();
    let result = engine.search("caller-1", flight_request()).await.unwrap();

    assert!(result.meta.synthetic);
    assert!(!result.offers.is_empty());
}

#[tokio::test]
async fn no_connector_for_the_domain_still_returns_offers() {
    // Flights-only connector, hotel request.
    let flights_only = TestConnector::builder("alpha")
        .returns_flights(vec![])
        .build();

    let engine = Valigia::builder()
        .with_connector(flights_only)
        .build()
        .unwrap();
    let result = engine
        .search("caller-1", hotel_request_to("PAR"))
        .await
        .unwrap();

    assert!(result.meta.synthetic);
    assert!(result.meta.providers.is_empty(), "nothing was consulted");
    assert!(!result.offers.is_empty());
}

#[tokio::test]
async fn synthetic_offers_are_deterministic_per_query() {
    let failing = TestConnector::builder("alpha")
        .fails_flights(|| {
            ValigiaError::provider("alpha", ProviderFailure::Network("down".into()))
        })
        .build();

    // Two engines with no shared cache: the fabricated offers must still
    // agree because they are seeded by the query fingerprint.
    let mk_engine = || {
        Valigia::builder()
            .with_connector(failing.clone())
            .build()
            .unwrap()
    };
    let a = mk_engine().search("c", flight_request()).await.unwrap();
    let b = mk_engine().search("c", flight_request()).await.unwrap();

    assert_eq!(a.offers, b.offers);
}
