use std::sync::Arc;

use valigia::{FetchStrategy, Valigia};
use valigia_core::{Currency, DateRange, Place, SearchRequest, TravelDomain};
use valigia_mock::MockConnector;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let engine = Valigia::builder()
        .with_connector(Arc::new(MockConnector::new()))
        .fetch_strategy(FetchStrategy::Fanout)
        .build()?;

    // The mock treats destination FAIL as a hard provider outage, which
    // pushes the coordinator into its synthetic fallback.
    let request = SearchRequest::builder(TravelDomain::Hotel)
        .destination(Place::new("FAIL")?)
        .dates(DateRange::new(
            "2024-07-10".parse()?,
            Some("2024-07-13".parse()?),
        )?)
        .currency(Currency::USD)
        .build()?;

    let result = engine.search("example-caller", request).await?;

    println!("synthetic: {}", result.meta.synthetic);
    for report in &result.meta.providers {
        println!(
            "  provider {} succeeded={} failure={:?}",
            report.provider, report.succeeded, report.failure
        );
    }
    for offer in &result.offers {
        // Synthetic prices must never be shown as bookable quotes.
        println!(
            "  placeholder: {} at {} (confidence {:.2})",
            offer.segments[0].operator, offer.price, offer.confidence
        );
    }

    Ok(())
}
