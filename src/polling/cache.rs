//! Polling cache and query layer
//!
//! The cache is an explicit object owned by the session and threaded through
//! the query functions; there is no module-level state, so tests run with
//! independent caches. All time arrives as `Instant` arguments, never from
//! hidden clock reads.

use std::time::Instant;

use ahash::AHashMap;

use crate::coalition::store::CoalitionStore;
use crate::core::config::EngineConfig;
use crate::core::types::{CandidateId, CandidateRecord, CoalitionId};
use crate::polling::aggregate::{
    coalition_scores, distribute_percentages, weigh_scores, CandidateWeight,
};

/// Cached per-candidate polling computation
#[derive(Debug, Clone)]
struct CacheEntry {
    scores: AHashMap<CoalitionId, f32>,
    weight: f32,
    aggregate: f32,
    computed_at: Instant,
}

/// The most recent percentage distribution, kept for the stability skip
#[derive(Debug, Clone)]
struct Distribution {
    percentages: Vec<(CandidateId, u32)>,
    total_weight: f32,
    at: Instant,
}

/// Session-owned polling cache
///
/// Entries are keyed by candidate id plus coalition count; the count acts as
/// a cheap invalidation signal when the store is regenerated or edited.
pub struct PollingCache {
    entries: AHashMap<(CandidateId, usize), CacheEntry>,
    last_distribution: Option<Distribution>,
    last_full_clear: Option<Instant>,
    pub hits: u64,
    pub misses: u64,
    pub stability_skips: u64,
}

impl Default for PollingCache {
    fn default() -> Self {
        Self::new()
    }
}

impl PollingCache {
    pub fn new() -> Self {
        Self {
            entries: AHashMap::new(),
            last_distribution: None,
            last_full_clear: None,
            hits: 0,
            misses: 0,
            stability_skips: 0,
        }
    }

    /// Periodic full clear, bounding memory growth
    fn maintain(&mut self, now: Instant, config: &EngineConfig) {
        match self.last_full_clear {
            None => self.last_full_clear = Some(now),
            Some(last) => {
                if now.duration_since(last) >= config.cache_clear_interval {
                    self.entries.clear();
                    self.last_distribution = None;
                    self.last_full_clear = Some(now);
                    tracing::debug!("polling cache cleared");
                }
            }
        }
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }
}

/// Look up or recompute the cached polling entry for one candidate
fn ensure_entry<'a>(
    store: &mut CoalitionStore,
    candidate: &CandidateRecord,
    cache: &'a mut PollingCache,
    now: Instant,
    config: &EngineConfig,
) -> &'a CacheEntry {
    cache.maintain(now, config);

    let key = (candidate.id, store.len());
    let fresh = cache
        .entries
        .get(&key)
        .map(|e| now.duration_since(e.computed_at) < config.cache_window)
        .unwrap_or(false);

    if fresh {
        cache.hits += 1;
        tracing::debug!(candidate = candidate.id.0, "polling cache hit");
    } else {
        cache.misses += 1;
        let scores = coalition_scores(store, candidate);
        let (weight, aggregate) = weigh_scores(store, &scores);
        cache.entries.insert(
            key,
            CacheEntry {
                scores,
                weight,
                aggregate,
                computed_at: now,
            },
        );
    }

    &cache.entries[&key]
}

/// Per-coalition score map for one candidate, cache-aware
///
/// Recomputes only when no entry exists for (candidate, coalition count)
/// within the cache window; a recompute refreshes the store's per-coalition
/// polling column as well.
pub fn poll_candidate(
    store: &mut CoalitionStore,
    candidate: &CandidateRecord,
    cache: &mut PollingCache,
    now: Instant,
    config: &EngineConfig,
) -> AHashMap<CoalitionId, f32> {
    ensure_entry(store, candidate, cache, now, config).scores.clone()
}

/// Support-base-weighted average polling score for one candidate
pub fn aggregate_score(
    store: &mut CoalitionStore,
    candidate: &CandidateRecord,
    cache: &mut PollingCache,
    now: Instant,
    config: &EngineConfig,
) -> f32 {
    ensure_entry(store, candidate, cache, now, config).aggregate
}

/// Integer polling percentages for a candidate set, summing to exactly 100
///
/// When the candidate-set's total weighted mass has moved less than the
/// stability threshold since a distribution computed within the stability
/// window, the previous percentages are returned unchanged.
pub fn aggregate_polling(
    store: &mut CoalitionStore,
    candidates: &[CandidateRecord],
    cache: &mut PollingCache,
    now: Instant,
    config: &EngineConfig,
) -> Vec<(CandidateId, u32)> {
    if candidates.is_empty() {
        return Vec::new();
    }

    let mut weights = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        let entry = ensure_entry(store, candidate, cache, now, config);
        weights.push(CandidateWeight {
            id: candidate.id,
            weight: entry.weight,
            score: entry.aggregate,
        });
    }

    let total_weight: f32 = weights.iter().map(|w| w.weight).sum();

    if let Some(last) = &cache.last_distribution {
        let same_set = last.percentages.len() == candidates.len()
            && last
                .percentages
                .iter()
                .zip(candidates)
                .all(|((id, _), c)| *id == c.id);
        if same_set
            && now.duration_since(last.at) < config.stability_window
            && (total_weight - last.total_weight).abs() < config.stability_threshold
        {
            cache.stability_skips += 1;
            tracing::debug!("polling distribution reused (stability skip)");
            return last.percentages.clone();
        }
    }

    let percentages = distribute_percentages(&weights);
    cache.last_distribution = Some(Distribution {
        percentages: percentages.clone(),
        total_weight,
        at: now,
    });
    percentages
}
