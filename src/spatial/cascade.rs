//! Three-tier cascading effect aggregation
//!
//! City events roll up into state buckets weighted by capped population
//! share, state buckets roll up into the national bucket weighted by
//! population share, and the national bucket applies only above a noise
//! floor. Higher-tier effects are never re-derived from raw lower-tier
//! sums; the weighting happens exactly once per tier boundary.

use std::time::{Duration, Instant};

use ahash::AHashMap;
use rand_chacha::ChaCha8Rng;

use crate::coalition::store::CoalitionStore;
use crate::core::config::EngineConfig;
use crate::core::types::{EventRecord, JurisdictionId};
use crate::simulation::batch::{accumulate_event, apply_batch, EffectBatch};
use crate::spatial::hierarchy::SpatialHierarchy;

/// An event magnitude after spatial weighting, queued for a higher tier
#[derive(Debug, Clone)]
pub struct WeightedEvent {
    pub event_type: String,
    pub magnitude: f32,
}

/// What one cascading pass did
#[derive(Debug, Clone, Default)]
pub struct CascadeSummary {
    pub city_events: usize,
    pub state_events: usize,
    pub national_events: usize,
    pub dropped_events: usize,
    pub coalitions_touched: usize,
    /// False when the national bucket fell below the noise floor
    pub national_applied: bool,
    pub duration: Duration,
}

/// Build per-jurisdiction effect batches from one tick's events
///
/// Stores are only read here; nothing is applied. Jurisdictions without a
/// generated store still roll their weighted magnitudes upward.
pub fn cascade_into_batches(
    stores: &AHashMap<JurisdictionId, CoalitionStore>,
    hierarchy: &SpatialHierarchy,
    events: &[EventRecord],
    rng: &mut ChaCha8Rng,
    config: &EngineConfig,
) -> (AHashMap<JurisdictionId, EffectBatch>, CascadeSummary) {
    let mut batches: AHashMap<JurisdictionId, EffectBatch> = AHashMap::new();
    let mut state_buckets: AHashMap<JurisdictionId, Vec<WeightedEvent>> = AHashMap::new();
    let mut national_bucket: Vec<WeightedEvent> = Vec::new();
    let mut summary = CascadeSummary::default();

    // 1. City events: apply locally, roll up weighted into state buckets
    for event in events {
        if !hierarchy.is_city(event.jurisdiction) {
            continue;
        }
        summary.city_events += 1;

        if let Some(store) = stores.get(&event.jurisdiction) {
            let batch = batches.entry(event.jurisdiction).or_default();
            accumulate_event(batch, store, &event.event_type, event.magnitude, rng, config);
        }

        let weight = hierarchy.city_weight(event.jurisdiction, config.city_weight_cap);
        if let Some(state) = hierarchy.state_of(event.jurisdiction) {
            state_buckets.entry(state).or_default().push(WeightedEvent {
                event_type: event.event_type.clone(),
                magnitude: event.magnitude * weight,
            });
        }
    }

    // 2. State buckets (city-derived plus direct state events): apply to
    //    state coalitions, roll up weighted into the national bucket.
    //    States iterate in registration order so spillover draws are
    //    reproducible under a fixed seed.
    for &state in hierarchy.states() {
        let mut bucket = state_buckets.remove(&state).unwrap_or_default();
        for event in events {
            if event.jurisdiction == state {
                summary.state_events += 1;
                bucket.push(WeightedEvent {
                    event_type: event.event_type.clone(),
                    magnitude: event.magnitude,
                });
            }
        }
        if bucket.is_empty() {
            continue;
        }

        let store = stores.get(&state);
        let weight = hierarchy.state_weight(state);
        for weighted in bucket {
            if let Some(store) = store {
                let batch = batches.entry(state).or_default();
                accumulate_event(
                    batch,
                    store,
                    &weighted.event_type,
                    weighted.magnitude,
                    rng,
                    config,
                );
            }
            national_bucket.push(WeightedEvent {
                event_type: weighted.event_type,
                magnitude: weighted.magnitude * weight,
            });
        }
    }

    // 3. National bucket plus direct national events, gated by noise floor
    for event in events {
        if event.jurisdiction == hierarchy.national() {
            summary.national_events += 1;
            national_bucket.push(WeightedEvent {
                event_type: event.event_type.clone(),
                magnitude: event.magnitude,
            });
        } else if !hierarchy.is_city(event.jurisdiction) && !hierarchy.is_state(event.jurisdiction)
        {
            summary.dropped_events += 1;
            tracing::debug!(
                jurisdiction = event.jurisdiction.0,
                event_type = %event.event_type,
                "event for unknown jurisdiction dropped"
            );
        }
    }

    let aggregated: f32 = national_bucket.iter().map(|w| w.magnitude.abs()).sum();
    if aggregated > config.cascade_noise_floor {
        summary.national_applied = true;
        if let Some(store) = stores.get(&hierarchy.national()) {
            for weighted in national_bucket {
                let batch = batches.entry(hierarchy.national()).or_default();
                accumulate_event(
                    batch,
                    store,
                    &weighted.event_type,
                    weighted.magnitude,
                    rng,
                    config,
                );
            }
        }
    }

    (batches, summary)
}

/// The cascading-update entry point: build batches, apply them, summarize
///
/// Every batch applies in one atomic pass per store; jurisdictions apply in
/// id order so a fixed seed reproduces the pass exactly.
pub fn cascade_events(
    stores: &mut AHashMap<JurisdictionId, CoalitionStore>,
    hierarchy: &SpatialHierarchy,
    events: &[EventRecord],
    rng: &mut ChaCha8Rng,
    config: &EngineConfig,
) -> CascadeSummary {
    let start = Instant::now();
    let (mut batches, mut summary) = cascade_into_batches(stores, hierarchy, events, rng, config);

    let mut order: Vec<JurisdictionId> = batches.keys().copied().collect();
    order.sort();

    for jurisdiction in order {
        let Some(batch) = batches.remove(&jurisdiction) else {
            continue;
        };
        if let Some(store) = stores.get_mut(&jurisdiction) {
            let applied = apply_batch(store, batch);
            summary.coalitions_touched += applied.coalitions_updated;
            store.normalize_support_bases();
        }
    }

    summary.duration = start.elapsed();
    tracing::info!(
        city = summary.city_events,
        state = summary.state_events,
        national = summary.national_events,
        coalitions = summary.coalitions_touched,
        ms = summary.duration.as_secs_f64() * 1000.0,
        "cascade pass complete"
    );
    summary
}
