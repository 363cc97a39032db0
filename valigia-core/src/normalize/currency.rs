//! Price re-denomination into the request currency.

use crate::rates::RateSource;
use valigia_types::{Currency, Offer};

/// Convert every offer's price into `target`.
///
/// Offers whose currency has no known rate are dropped and counted; a
/// wrong price is worse than a missing offer.
#[must_use]
pub fn convert_offers(
    offers: Vec<Offer>,
    target: Currency,
    rates: &dyn RateSource,
) -> (Vec<Offer>, u32) {
    let mut out = Vec::with_capacity(offers.len());
    let mut dropped = 0u32;

    for mut offer in offers {
        let from = offer.price.currency();
        if from == target {
            out.push(offer);
            continue;
        }
        match rates.rate(from, target) {
            Ok(rate) => {
                offer.price = offer.price.converted(rate, target);
                out.push(offer);
            }
            Err(_) => {
                dropped += 1;
                tracing::debug!(
                    target: "valigia::normalize",
                    provider = %offer.provider,
                    currency = %from,
                    "dropping offer with no exchange rate"
                );
            }
        }
    }

    (out, dropped)
}
