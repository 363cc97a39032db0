//! Deterministic composite scoring and ordering of merged offer sets.
//!
//! Scores are relative to the result set being ranked: price and duration
//! are normalized against the minimum and maximum observed in the set,
//! so the same offer can score differently in different result sets.

use std::cmp::Ordering;
use std::collections::HashMap;

use rust_decimal::prelude::ToPrimitive;

use valigia_types::{Offer, RankingWeights, SearchRequest};

/// Two scores within this distance are treated as a tie and broken by
/// price, then provider name, so tests can assert exact ordering.
pub const SCORE_EPSILON: f64 = 1e-6;

/// Observed extremes of the result set being ranked.
#[derive(Debug, Clone, Copy)]
pub struct ScoreBounds {
    /// Lowest price in the set.
    pub min_price: f64,
    /// Highest price in the set.
    pub max_price: f64,
    /// Shortest total duration in seconds.
    pub min_duration_s: f64,
    /// Longest total duration in seconds.
    pub max_duration_s: f64,
}

impl ScoreBounds {
    /// Compute the bounds of an offer set.
    #[must_use]
    pub fn of(offers: &[Offer]) -> Self {
        let mut min_price = f64::MAX;
        let mut max_price = f64::MIN;
        let mut min_dur = f64::MAX;
        let mut max_dur = f64::MIN;
        for o in offers {
            let p = o.price.amount().to_f64().unwrap_or(0.0);
            let d = o.total_duration().num_seconds().max(0) as f64;
            min_price = min_price.min(p);
            max_price = max_price.max(p);
            min_dur = min_dur.min(d);
            max_dur = max_dur.max(d);
        }
        Self {
            min_price,
            max_price,
            min_duration_s: min_dur,
            max_duration_s: max_dur,
        }
    }
}

/// Composite score for one offer; higher is better.
///
/// Sub-scores, each in `[0, 1]`, weighted by [`RankingWeights`] and
/// normalized against the weight sum:
/// - price competitiveness, inverted so cheaper scores higher;
/// - convenience (stop count and total duration);
/// - the provider's static quality prior;
/// - the fraction of requested amenities the offer carries.
#[must_use]
pub fn score(
    offer: &Offer,
    req: &SearchRequest,
    weights: &RankingWeights,
    quality_prior: f64,
    bounds: &ScoreBounds,
) -> f64 {
    let price = offer.price.amount().to_f64().unwrap_or(0.0);
    let price_score = if bounds.max_price > bounds.min_price {
        (bounds.max_price - price) / (bounds.max_price - bounds.min_price)
    } else {
        1.0
    };

    let stops_score = 1.0 / (1.0 + offer.stops() as f64);
    let duration = offer.total_duration().num_seconds().max(0) as f64;
    let duration_score = if bounds.max_duration_s > bounds.min_duration_s {
        (bounds.max_duration_s - duration) / (bounds.max_duration_s - bounds.min_duration_s)
    } else {
        1.0
    };
    let convenience_score = (stops_score + duration_score) / 2.0;

    let requested = req.filters().amenities;
    let amenity_score = if requested.is_empty() {
        0.0
    } else {
        let matched = (offer.amenities & requested).bits().count_ones();
        f64::from(matched) / f64::from(requested.bits().count_ones())
    };

    let total_weight =
        weights.price + weights.convenience + weights.provider_quality + weights.amenity_match;
    if total_weight <= 0.0 {
        return 0.0;
    }

    (weights.price * price_score
        + weights.convenience * convenience_score
        + weights.provider_quality * quality_prior.clamp(0.0, 1.0)
        + weights.amenity_match * amenity_score)
        / total_weight
}

/// Sort offers into descending score order.
///
/// The sort is stable; scores within [`SCORE_EPSILON`] tie-break by lower
/// price, then provider name. `quality` maps connector names to their
/// static weight; offers from unknown providers fall back to their own
/// confidence hint.
#[must_use]
pub fn rank(
    offers: Vec<Offer>,
    req: &SearchRequest,
    weights: &RankingWeights,
    quality: &HashMap<String, f64>,
) -> Vec<Offer> {
    if offers.len() <= 1 {
        return offers;
    }

    let bounds = ScoreBounds::of(&offers);
    let mut scored: Vec<(f64, Offer)> = offers
        .into_iter()
        .map(|o| {
            let prior = quality.get(&o.provider).copied().unwrap_or(o.confidence);
            (score(&o, req, weights, prior, &bounds), o)
        })
        .collect();

    scored.sort_by(|(sa, a), (sb, b)| {
        if (sa - sb).abs() <= SCORE_EPSILON {
            a.price
                .amount()
                .cmp(&b.price.amount())
                .then_with(|| a.provider.cmp(&b.provider))
        } else {
            sb.partial_cmp(sa).unwrap_or(Ordering::Equal)
        }
    });

    scored.into_iter().map(|(_, o)| o).collect()
}
