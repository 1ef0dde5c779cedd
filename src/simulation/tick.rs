//! The simulation tick
//!
//! One tick is: accumulate every pending effect into per-store batches
//! (events via the spatial cascade, policies directly), apply each batch in
//! a single atomic pass, then decay and renormalize. Nothing is applied
//! until everything is accumulated.

use std::time::{Duration, Instant};

use crate::core::types::{EventRecord, JurisdictionId, PolicyRecord, Tick};
use crate::session::CampaignSession;
use crate::simulation::batch::{accumulate_policy, apply_batch};
use crate::simulation::decay::apply_decay;
use crate::spatial::cascade::{cascade_into_batches, CascadeSummary};

/// What one tick did
#[derive(Debug, Clone)]
pub struct TickSummary {
    pub tick: Tick,
    pub cascade: CascadeSummary,
    pub policies_applied: usize,
    pub coalitions_updated: usize,
    pub duration: Duration,
}

/// Advance the session by one tick
pub fn run_simulation_tick(
    session: &mut CampaignSession,
    events: &[EventRecord],
    policies: &[(JurisdictionId, PolicyRecord)],
) -> TickSummary {
    let start = Instant::now();

    // 1. Accumulate. Events cascade through the spatial hierarchy into
    //    per-store batches; policies accumulate into the same batches.
    let (mut batches, cascade) = cascade_into_batches(
        &session.stores,
        &session.hierarchy,
        events,
        &mut session.rng,
        &session.config,
    );

    let mut policies_applied = 0;
    for (jurisdiction, policy) in policies {
        if let Some(store) = session.stores.get(jurisdiction) {
            let batch = batches.entry(*jurisdiction).or_default();
            accumulate_policy(batch, store, policy);
            policies_applied += 1;
        }
    }

    // 2. Apply, one atomic pass per store, in id order so spillover draws
    //    reproduce under a fixed seed.
    let mut order: Vec<JurisdictionId> = batches.keys().copied().collect();
    order.sort();

    let mut coalitions_updated = 0;
    for jurisdiction in order {
        let Some(batch) = batches.remove(&jurisdiction) else {
            continue;
        };
        if let Some(store) = session.stores.get_mut(&jurisdiction) {
            coalitions_updated += apply_batch(store, batch).coalitions_updated;
        }
    }

    // 3. Decay and renormalize every store, batched deltas first per the
    //    update ordering contract.
    let mut store_ids: Vec<JurisdictionId> = session.stores.keys().copied().collect();
    store_ids.sort();
    for jurisdiction in store_ids {
        if let Some(store) = session.stores.get_mut(&jurisdiction) {
            apply_decay(store, &mut session.rng, &session.config);
            store.normalize_support_bases();
        }
    }

    session.current_tick += 1;
    let duration = start.elapsed();
    session.metrics.record(duration, &session.config);

    TickSummary {
        tick: session.current_tick,
        cascade,
        policies_applied,
        coalitions_updated,
        duration,
    }
}
