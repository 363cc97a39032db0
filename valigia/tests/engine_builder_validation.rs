mod helpers;

use std::time::Duration;

use helpers::{TestConnector, flight_offer};
use valigia::{Valigia, ValigiaError};

#[test]
fn building_without_connectors_is_rejected() {
    let err = Valigia::builder().build().unwrap_err();
    match err {
        ValigiaError::InvalidArg(msg) => assert!(msg.contains("no connectors")),
        other => panic!("unexpected: {other:?}"),
    }
}

#[test]
fn provider_timeout_must_sit_strictly_below_the_overall_deadline() {
    let connector = TestConnector::builder("alpha")
        .returns_flights(vec![flight_offer("alpha", 480, "BA")])
        .build();

    let err = Valigia::builder()
        .with_connector(connector.clone())
        .provider_timeout(Duration::from_secs(10))
        .request_timeout(Duration::from_secs(10))
        .build()
        .unwrap_err();
    assert!(matches!(err, ValigiaError::InvalidArg(_)));

    // Dropping the overall deadline lifts the constraint.
    assert!(
        Valigia::builder()
            .with_connector(connector)
            .provider_timeout(Duration::from_secs(10))
            .no_request_timeout()
            .build()
            .is_ok()
    );
}
