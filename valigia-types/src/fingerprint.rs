//! Stable query fingerprints for cache keying.

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::request::SearchRequest;

/// Stable identity of a search query.
///
/// Two requests that are logically identical for pricing purposes
/// fingerprint identically: the hash covers domain, places, dates, party,
/// currency, and filters, and excludes caller identity, locale, and
/// request time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fingerprint(u64);

impl Fingerprint {
    /// Compute the fingerprint of a request.
    #[must_use]
    pub fn of(req: &SearchRequest) -> Self {
        // DefaultHasher with default keys is deterministic within a build,
        // which is all the process-local cache needs.
        let mut h = std::collections::hash_map::DefaultHasher::new();

        req.domain().hash(&mut h);
        match req.origin() {
            Some(p) => {
                1u8.hash(&mut h);
                p.as_str().hash(&mut h);
            }
            None => 0u8.hash(&mut h),
        }
        req.destination().as_str().hash(&mut h);
        req.dates().start().hash(&mut h);
        req.dates().end().hash(&mut h);
        req.party().adults().hash(&mut h);
        req.party().children().hash(&mut h);
        req.party().rooms().hash(&mut h);
        req.currency().as_str().hash(&mut h);

        let filters = req.filters();
        match filters.max_price {
            // Normalize so 100 and 100.00 key identically.
            Some(p) => {
                1u8.hash(&mut h);
                p.normalize().to_string().hash(&mut h);
            }
            None => 0u8.hash(&mut h),
        }
        filters.max_stops.hash(&mut h);
        filters.min_rating.hash(&mut h);
        filters.amenities.bits().hash(&mut h);

        Self(h.finish())
    }

    /// The raw 64-bit value.
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}
