//! Turning raw provider outcomes into one clean, canonical offer list.
//!
//! The pipeline is synchronous CPU-bound work performed after every
//! provider sub-task has settled: validate invariants, convert prices to
//! the request currency, apply hard caller filters, then collapse
//! near-duplicates across providers.

pub mod currency;
pub mod dedup;
pub mod validate;

use crate::outcome::ProviderOutcome;
use crate::rates::RateSource;
use valigia_types::{Offer, SearchRequest};

/// Result of the normalization pass.
#[derive(Debug)]
pub struct Normalized {
    /// Clean, merged offers (unranked).
    pub offers: Vec<Offer>,
    /// Offers dropped for invariant violations or missing exchange rates.
    pub dropped: u32,
}

/// Merge the successful outcomes of a multi-provider search into one
/// validated, currency-normalized, de-duplicated offer list.
pub fn merge_outcomes(
    outcomes: &[ProviderOutcome],
    req: &SearchRequest,
    rates: &dyn RateSource,
) -> Normalized {
    let raw: Vec<Offer> = outcomes
        .iter()
        .filter_map(|o| o.result.as_ref().ok())
        .flatten()
        .cloned()
        .collect();

    let (valid, dropped_invalid) = validate::retain_well_formed(raw);
    let (priced, dropped_unpriced) = currency::convert_offers(valid, req.currency(), rates);
    let filtered = apply_filters(priced, req);
    let offers = dedup::dedup_offers(filtered);

    Normalized {
        offers,
        dropped: dropped_invalid + dropped_unpriced,
    }
}

/// Hard caller filters: price ceiling, stop count, minimum rating.
/// Amenity preferences are soft and handled as a ranking bonus instead.
fn apply_filters(offers: Vec<Offer>, req: &SearchRequest) -> Vec<Offer> {
    let filters = req.filters();
    offers
        .into_iter()
        .filter(|o| {
            if let Some(max) = filters.max_price
                && o.price.amount() > max
            {
                return false;
            }
            if let Some(max_stops) = filters.max_stops
                && o.stops() > usize::from(max_stops)
            {
                return false;
            }
            if let Some(min_rating) = filters.min_rating
                && o.rating.is_none_or(|r| r < min_rating)
            {
                return false;
            }
            true
        })
        .collect()
}
