//! Canonical offer model produced by provider adapters.

use bitflags::bitflags;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use url::Url;

use crate::domain::TravelDomain;
use crate::money::Money;
use crate::request::Place;

bitflags! {
    /// Amenity flags attached to an offer. Providers map their own
    /// vocabularies onto this set; unknown upstream amenities are dropped.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Amenities: u32 {
        /// In-room or in-flight wifi.
        const WIFI = 1 << 0;
        /// Breakfast included.
        const BREAKFAST = 1 << 1;
        /// Pool access.
        const POOL = 1 << 2;
        /// Parking included.
        const PARKING = 1 << 3;
        /// Pets allowed.
        const PETS = 1 << 4;
        /// Free cancellation.
        const FLEX_CANCEL = 1 << 5;
        /// Checked bag included.
        const CHECKED_BAG = 1 << 6;
        /// Seat selection included.
        const SEAT_SELECTION = 1 << 7;
        /// Lounge access.
        const LOUNGE = 1 << 8;
        /// Gym access.
        const GYM = 1 << 9;
    }
}

impl Serialize for Amenities {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u32(self.bits())
    }
}

impl<'de> Deserialize<'de> for Amenities {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let bits = u32::deserialize(deserializer)?;
        // Unknown bits from newer writers are dropped rather than rejected.
        Ok(Self::from_bits_truncate(bits))
    }
}

/// One leg of an itinerary, UTC-anchored.
///
/// For hotel offers there is exactly one segment: origin and destination
/// both carry the stay location, the timestamps span the stay, and the
/// operator is the property name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// Departure place.
    pub origin: Place,
    /// Arrival place.
    pub destination: Place,
    /// Departure instant, UTC.
    pub depart: DateTime<Utc>,
    /// Arrival instant, UTC.
    pub arrive: DateTime<Utc>,
    /// Operating carrier or property name.
    pub operator: String,
}

/// Canonical, provider-independent offer.
///
/// Created by a provider adapter from raw upstream data, possibly merged
/// with a near-duplicate during normalization, scored by the ranking
/// engine, and not mutated after ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Offer {
    /// Provider-scoped offer identifier.
    pub id: String,
    /// Name of the connector that produced the offer.
    pub provider: String,
    /// Price in the request's target currency after normalization.
    pub price: Money,
    /// Product surface this offer belongs to.
    pub domain: TravelDomain,
    /// Non-empty, chronologically contiguous itinerary.
    pub segments: Vec<Segment>,
    /// Amenity flags.
    pub amenities: Amenities,
    /// Star rating for hotel offers.
    pub rating: Option<u8>,
    /// Deep link for booking hand-off.
    pub deep_link: Option<Url>,
    /// Provider-assigned quality/confidence hint in `[0, 1]`.
    pub confidence: f64,
    /// True when fabricated by the degraded-mode fallback generator.
    /// Callers must not present synthetic prices as real quotes.
    pub synthetic: bool,
}

impl Offer {
    /// Number of intermediate stops.
    #[must_use]
    pub fn stops(&self) -> usize {
        self.segments.len().saturating_sub(1)
    }

    /// Departure instant of the first segment.
    #[must_use]
    pub fn departure(&self) -> Option<DateTime<Utc>> {
        self.segments.first().map(|s| s.depart)
    }

    /// Total elapsed time from first departure to last arrival.
    #[must_use]
    pub fn total_duration(&self) -> Duration {
        match (self.segments.first(), self.segments.last()) {
            (Some(first), Some(last)) => last.arrive - first.depart,
            _ => Duration::zero(),
        }
    }
}
