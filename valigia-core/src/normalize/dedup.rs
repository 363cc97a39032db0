//! Collapsing near-duplicate offers returned by different providers.

use std::collections::HashMap;

use valigia_types::{Offer, TravelDomain};

/// Identity under which two offers from different providers are
/// considered the same logical product.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum DedupKey {
    Flight {
        origin: String,
        destination: String,
        /// Departure truncated to the minute; sub-minute skew between
        /// providers is noise.
        depart_minute: i64,
        operator: String,
    },
    // Room count is request-level and therefore constant within one
    // merge set, so the stay key needs only property and dates.
    Hotel {
        property: String,
        start: chrono::NaiveDate,
        end: chrono::NaiveDate,
    },
}

fn key_for(offer: &Offer) -> Option<DedupKey> {
    let first = offer.segments.first()?;
    let last = offer.segments.last()?;
    Some(match offer.domain {
        TravelDomain::Flight => DedupKey::Flight {
            origin: first.origin.as_str().to_string(),
            destination: last.destination.as_str().to_string(),
            depart_minute: first.depart.timestamp() / 60,
            operator: first.operator.to_ascii_uppercase(),
        },
        TravelDomain::Hotel => DedupKey::Hotel {
            property: normalize_property(&first.operator),
            start: first.depart.date_naive(),
            end: last.arrive.date_naive(),
        },
        _ => return None,
    })
}

/// Property names compared case-insensitively with punctuation stripped,
/// so "The Grand Hotel" and "the grand-hotel" collide.
fn normalize_property(name: &str) -> String {
    name.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// How much optional detail an offer carries; richer offers win merges
/// when prices tie.
#[must_use]
pub fn richness(offer: &Offer) -> usize {
    let mut score = offer.segments.len() * 2;
    score += offer
        .segments
        .iter()
        .filter(|s| !s.operator.is_empty())
        .count();
    score += usize::try_from(offer.amenities.bits().count_ones()).unwrap_or(0);
    if offer.deep_link.is_some() {
        score += 1;
    }
    if offer.rating.is_some() {
        score += 1;
    }
    score
}

/// Merge two offers that collided on the dedup key.
///
/// The cheaper offer wins the price and identity; amenity flags are
/// unioned; the more detailed segment data is kept regardless of which
/// side was cheaper.
fn merge(a: Offer, b: Offer) -> Offer {
    let (mut keep, other) = if b.price.amount() < a.price.amount()
        || (b.price.amount() == a.price.amount() && richness(&b) > richness(&a))
    {
        (b, a)
    } else {
        (a, b)
    };

    keep.amenities |= other.amenities;
    if richness_of_segments(&other) > richness_of_segments(&keep) {
        keep.segments = other.segments;
    }
    if keep.deep_link.is_none() {
        keep.deep_link = other.deep_link;
    }
    if keep.rating.is_none() {
        keep.rating = other.rating;
    }
    keep.confidence = keep.confidence.max(other.confidence);
    keep
}

fn richness_of_segments(offer: &Offer) -> usize {
    offer.segments.len() * 2
        + offer
            .segments
            .iter()
            .filter(|s| !s.operator.is_empty())
            .count()
}

/// Collapse offers that share a dedup key, preserving first-seen order of
/// the surviving entries.
#[must_use]
pub fn dedup_offers(offers: Vec<Offer>) -> Vec<Offer> {
    let mut out: Vec<Offer> = Vec::with_capacity(offers.len());
    let mut index: HashMap<DedupKey, usize> = HashMap::new();

    for offer in offers {
        let Some(key) = key_for(&offer) else {
            // Segment-less offers were already filtered by validation.
            continue;
        };
        match index.get(&key) {
            Some(&i) => {
                let existing = out[i].clone();
                out[i] = merge(existing, offer);
            }
            None => {
                index.insert(key, out.len());
                out.push(offer);
            }
        }
    }

    out
}
