//! Polling aggregation and exact-sum percentage rounding
//!
//! The aggregate poll for a candidate is the support-base-weighted average
//! of its per-coalition scores. Integer percentages come from a floor plus
//! largest-remainder distribution, so they sum to exactly 100 regardless of
//! floating-point rounding.

use ahash::AHashMap;
use ordered_float::OrderedFloat;

use crate::coalition::store::CoalitionStore;
use crate::core::types::{CandidateId, CandidateRecord, CoalitionId};
use crate::scoring;

/// One candidate's weighted polling inputs
#[derive(Debug, Clone, Copy)]
pub struct CandidateWeight {
    pub id: CandidateId,
    /// Raw weighted mass: sum of score * support_base over coalitions
    pub weight: f32,
    /// Support-base-weighted average score in [0, 100]
    pub score: f32,
}

/// Compute every coalition's score for a candidate, filling the store's
/// polling-cache column
pub fn coalition_scores(
    store: &mut CoalitionStore,
    candidate: &CandidateRecord,
) -> AHashMap<CoalitionId, f32> {
    let mut scores = AHashMap::with_capacity(store.len());
    for slot in 0..store.len() {
        let score = scoring::score_candidate(store, slot, candidate);
        store.cache_score(slot, candidate.id, score);
        scores.insert(store.ids[slot], score);
    }
    scores
}

/// Weighted polling mass and average for one candidate's score map
///
/// The support-base weighting is canonical; zero total support degrades to
/// the neutral score rather than dividing by zero.
pub fn weigh_scores(
    store: &CoalitionStore,
    scores: &AHashMap<CoalitionId, f32>,
) -> (f32, f32) {
    let mut weighted = 0.0;
    let mut base_total = 0.0;
    for slot in 0..store.len() {
        let Some(score) = scores.get(&store.ids[slot]) else {
            continue;
        };
        if !score.is_finite() {
            continue;
        }
        let base = store.support_bases[slot];
        weighted += score * base;
        base_total += base;
    }

    if base_total > f32::EPSILON {
        (weighted, weighted / base_total)
    } else {
        (0.0, scoring::NEUTRAL_SCORE)
    }
}

/// Convert weighted masses into integer percentages summing to exactly 100
///
/// Each candidate gets the floor of its proportional share; the remaining
/// deficit goes to the largest fractional remainders, ties broken by larger
/// raw weight, then larger average score, then input order.
pub fn distribute_percentages(entries: &[CandidateWeight]) -> Vec<(CandidateId, u32)> {
    if entries.is_empty() {
        return Vec::new();
    }

    let total: f64 = entries.iter().map(|e| e.weight.max(0.0) as f64).sum();

    // All-zero weights: an even split, deficit to the front of the list
    let shares: Vec<f64> = if total > f64::EPSILON {
        entries
            .iter()
            .map(|e| e.weight.max(0.0) as f64 / total * 100.0)
            .collect()
    } else {
        vec![100.0 / entries.len() as f64; entries.len()]
    };

    let mut floors: Vec<u32> = shares.iter().map(|s| s.floor() as u32).collect();
    let assigned: u32 = floors.iter().sum();
    let deficit = 100 - assigned;

    let mut order: Vec<usize> = (0..entries.len()).collect();
    order.sort_by_key(|&i| {
        let remainder = shares[i] - shares[i].floor();
        (
            std::cmp::Reverse(OrderedFloat(remainder)),
            std::cmp::Reverse(OrderedFloat(entries[i].weight)),
            std::cmp::Reverse(OrderedFloat(entries[i].score)),
        )
    });

    for &i in order.iter().take(deficit as usize) {
        floors[i] += 1;
    }

    entries
        .iter()
        .zip(floors)
        .map(|(e, percent)| (e.id, percent))
        .collect()
}
