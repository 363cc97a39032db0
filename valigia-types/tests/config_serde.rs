use std::time::Duration;

use valigia_types::{CacheConfig, FetchStrategy, RankingWeights, RateLimitConfig, ValigiaConfig};

#[test]
fn config_round_trips_through_json() {
    let cfg = ValigiaConfig {
        fetch_strategy: FetchStrategy::Fanout,
        provider_timeout: Duration::from_millis(2_500),
        request_timeout: Some(Duration::from_secs(10)),
        rate_limit: RateLimitConfig {
            max_requests: 42,
            window: Duration::from_secs(60),
        },
        cache: CacheConfig {
            flight_ttl: Duration::from_secs(30),
            hotel_ttl: Duration::from_secs(600),
            max_entries: 16,
        },
        ranking: RankingWeights {
            price: 0.5,
            convenience: 0.2,
            provider_quality: 0.2,
            amenity_match: 0.1,
        },
    };

    let json = serde_json::to_string(&cfg).expect("serialize");
    let back: ValigiaConfig = serde_json::from_str(&json).expect("deserialize");

    assert_eq!(back.fetch_strategy, FetchStrategy::Fanout);
    assert_eq!(back.provider_timeout, cfg.provider_timeout);
    assert_eq!(back.request_timeout, cfg.request_timeout);
    assert_eq!(back.rate_limit.max_requests, 42);
    assert_eq!(back.cache.flight_ttl, Duration::from_secs(30));
    assert!((back.ranking.price - 0.5).abs() < f64::EPSILON);
}

#[test]
fn defaults_favor_sequential_and_short_flight_ttl() {
    let cfg = ValigiaConfig::default();
    assert_eq!(cfg.fetch_strategy, FetchStrategy::Sequential);
    assert!(cfg.cache.flight_ttl < cfg.cache.hotel_ttl);
    let overall = cfg.request_timeout.expect("default overall deadline");
    assert!(cfg.provider_timeout < overall);
}

#[test]
fn ttl_selection_is_domain_dependent() {
    let cache = CacheConfig::default();
    assert_eq!(
        cache.ttl_for(valigia_types::TravelDomain::Flight),
        cache.flight_ttl
    );
    assert_eq!(
        cache.ttl_for(valigia_types::TravelDomain::Hotel),
        cache.hotel_ttl
    );
}
