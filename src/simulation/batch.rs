//! Effect batching and atomic state application
//!
//! A batch is plain data: accumulated deltas per coalition plus the source
//! labels that contributed them. Accumulation and application are separate
//! passes; application consumes the batch by value, so a batch can never be
//! applied twice or half-applied.

use ahash::AHashMap;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::coalition::store::CoalitionStore;
use crate::core::config::EngineConfig;
use crate::core::types::{CoalitionId, PolicyRecord};
use crate::simulation::patterns::{event_pattern, policy_pattern, EffectDelta};

/// Accumulated, not-yet-applied deltas for one coalition
#[derive(Debug, Clone, Default)]
pub struct PendingEffect {
    pub mobilization: f32,
    pub satisfaction: f32,
    pub sources: Vec<String>,
}

impl PendingEffect {
    fn add(&mut self, delta: EffectDelta, source: &str) {
        self.mobilization += delta.mobilization;
        self.satisfaction += delta.satisfaction;
        self.sources.push(source.to_string());
    }
}

/// One tick's worth of pending effects for a single store
///
/// Created per tick, consumed exactly once by [`apply_batch`], discarded.
#[derive(Debug, Clone, Default)]
pub struct EffectBatch {
    pub pending: AHashMap<CoalitionId, PendingEffect>,
}

impl EffectBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

/// What one atomic application pass did
#[derive(Debug, Clone, Copy, Default)]
pub struct ApplySummary {
    pub coalitions_updated: usize,
    pub total_mobilization_delta: f32,
    pub total_satisfaction_delta: f32,
}

/// Accumulate one event's deltas into the batch
///
/// Mapped archetypes take the pattern delta; everyone else takes a smaller
/// random spillover. Unknown event types degrade to spillover for all
/// coalitions. Every delta scales by the event's magnitude and the store's
/// tier factor.
pub fn accumulate_event(
    batch: &mut EffectBatch,
    store: &CoalitionStore,
    event_type: &str,
    magnitude: f32,
    rng: &mut ChaCha8Rng,
    config: &EngineConfig,
) {
    let scale = magnitude * store.tier.effect_scale();
    let pattern = event_pattern(event_type);

    for slot in 0..store.len() {
        let delta = match pattern {
            Some(entries) => {
                match entries.iter().find(|(k, _)| *k == store.archetypes[slot]) {
                    Some((_, base)) => base.scaled(scale),
                    None => spillover(rng, config.unlisted_spillover, scale),
                }
            }
            None => spillover(rng, config.unmapped_spillover, scale),
        };
        batch
            .pending
            .entry(store.ids[slot])
            .or_default()
            .add(delta, event_type);
    }
}

/// Accumulate one policy action's deltas into the batch
///
/// The category pattern is oriented at direction +1.0; the policy's signed
/// direction scales it, as does the store's tier factor. Archetypes outside
/// the pattern are untouched; policies have no spillover.
pub fn accumulate_policy(
    batch: &mut EffectBatch,
    store: &CoalitionStore,
    policy: &PolicyRecord,
) {
    let direction = if policy.direction.is_finite() {
        policy.direction.clamp(-1.0, 1.0)
    } else {
        return;
    };
    let scale = direction * store.tier.effect_scale();
    let pattern = policy_pattern(policy.category);

    for slot in 0..store.len() {
        if let Some((_, base)) = pattern.iter().find(|(k, _)| *k == store.archetypes[slot]) {
            batch
                .pending
                .entry(store.ids[slot])
                .or_default()
                .add(base.scaled(scale), "policy");
        }
    }
}

fn spillover(rng: &mut ChaCha8Rng, half_width: f32, scale: f32) -> EffectDelta {
    EffectDelta {
        mobilization: rng.gen_range(-half_width..=half_width) * scale,
        satisfaction: rng.gen_range(-half_width..=half_width) * scale,
    }
}

/// Apply every pending delta in one atomic pass, clamping state
///
/// Coalitions missing from the store are skipped, never fatal. One summary
/// log line per pass.
pub fn apply_batch(store: &mut CoalitionStore, batch: EffectBatch) -> ApplySummary {
    let mut summary = ApplySummary::default();

    for (id, pending) in batch.pending {
        let Some(slot) = store.index_of(id) else {
            continue;
        };
        store.mobilizations[slot] =
            (store.mobilizations[slot] + pending.mobilization).clamp(0.0, 1.0);
        store.satisfactions[slot] =
            (store.satisfactions[slot] + pending.satisfaction).clamp(0.0, 1.0);
        summary.coalitions_updated += 1;
        summary.total_mobilization_delta += pending.mobilization;
        summary.total_satisfaction_delta += pending.satisfaction;
    }

    tracing::info!(
        jurisdiction = store.jurisdiction.0,
        coalitions = summary.coalitions_updated,
        mobilization_delta = summary.total_mobilization_delta,
        "effect batch applied"
    );

    summary
}
