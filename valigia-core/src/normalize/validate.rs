//! Offer invariant checks applied before any merging.

use rust_decimal::Decimal;

use valigia_types::Offer;

/// Whether an offer satisfies the canonical-model invariants: a positive
/// price and a non-empty, chronologically contiguous segment list (each
/// segment's departure at or after the previous arrival).
#[must_use]
pub fn is_well_formed(offer: &Offer) -> bool {
    if offer.price.amount() <= Decimal::ZERO {
        return false;
    }
    if offer.segments.is_empty() {
        return false;
    }
    let mut prev_arrive = None;
    for seg in &offer.segments {
        if seg.arrive < seg.depart {
            return false;
        }
        if let Some(prev) = prev_arrive
            && seg.depart < prev
        {
            return false;
        }
        prev_arrive = Some(seg.arrive);
    }
    true
}

/// Drop invariant-violating offers, counting what was removed.
///
/// A malformed individual offer is never fatal to the search; it is
/// removed here and surfaced only as a drop count in result metadata.
#[must_use]
pub fn retain_well_formed(offers: Vec<Offer>) -> (Vec<Offer>, u32) {
    let before = offers.len();
    let kept: Vec<Offer> = offers.into_iter().filter(is_well_formed).collect();
    let dropped = before - kept.len();
    if dropped > 0 {
        tracing::debug!(target: "valigia::normalize", dropped, "dropped malformed offers");
    }
    (kept, u32::try_from(dropped).unwrap_or(u32::MAX))
}
