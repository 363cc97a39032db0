use std::sync::Arc;

use valigia::Valigia;
use valigia_core::{Currency, DateRange, Place, SearchRequest, TravelDomain};
use valigia_mock::MockConnector;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    // 1. Build the engine and register a connector (the mock keeps this
    //    runnable offline; swap in SkyportConnector for live data).
    let engine = Valigia::builder()
        .with_connector(Arc::new(MockConnector::new()))
        .build()?;

    // 2. Describe the trip.
    let request = SearchRequest::builder(TravelDomain::Flight)
        .origin(Place::new("NYC")?)
        .destination(Place::new("LON")?)
        .dates(DateRange::new(
            "2024-06-01".parse()?,
            Some("2024-06-08".parse()?),
        )?)
        .currency(Currency::USD)
        .build()?;

    // 3. Search. The engine handles caching, rate limits, and fallback.
    let result = engine.search("example-caller", request).await?;

    println!(
        "{} offers ({} providers consulted, synthetic: {})",
        result.offers.len(),
        result.meta.providers.len(),
        result.meta.synthetic
    );
    for offer in &result.offers {
        println!(
            "  {} via {} — {} stops, {}",
            offer.price,
            offer.provider,
            offer.stops(),
            offer.segments[0].operator
        );
    }

    Ok(())
}
