use std::time::Duration;

use valigia_core::{ProviderFailure, ValigiaError};
use valigia_types::ValidationError;

#[test]
fn validation_errors_convert_into_engine_errors() {
    let err: ValigiaError = ValidationError::Missing("destination").into();
    assert!(matches!(err, ValigiaError::Validation(_)));
    assert!(err.to_string().contains("destination"));
}

#[test]
fn rate_limited_carries_retry_after() {
    let err = ValigiaError::rate_limited(Duration::from_secs(30));
    match err {
        ValigiaError::RateLimited { retry_after } => {
            assert_eq!(retry_after, Duration::from_secs(30));
        }
        other => panic!("unexpected: {other:?}"),
    }
}

#[test]
fn provider_errors_render_the_connector_name() {
    let err = ValigiaError::provider("skyport", ProviderFailure::Auth("401".into()));
    assert!(err.to_string().contains("skyport"));
    assert!(err.to_string().contains("authentication"));
}

#[test]
fn classify_maps_timeouts_and_data_issues() {
    let t = ProviderFailure::classify(&ValigiaError::provider_timeout("gdsline"));
    assert_eq!(t, ProviderFailure::Timeout);

    let m = ProviderFailure::classify(&ValigiaError::Data("missing price".into()));
    assert!(matches!(m, ProviderFailure::Malformed(_)));

    let passthrough = ProviderFailure::classify(&ValigiaError::provider(
        "skyport",
        ProviderFailure::QuotaExceeded,
    ));
    assert_eq!(passthrough, ProviderFailure::QuotaExceeded);
}
