//! Passive per-tick state decay
//!
//! Runs after batch application each tick: mood bleeds toward 0,
//! satisfaction drifts toward its 0.5 neutral point, and mobilization takes
//! a small random walk so it never freezes between events.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::coalition::store::CoalitionStore;
use crate::core::config::EngineConfig;

/// Apply one tick of decay to every coalition in the store
pub fn apply_decay(store: &mut CoalitionStore, rng: &mut ChaCha8Rng, config: &EngineConfig) {
    for slot in 0..store.len() {
        store.moods[slot] = (store.moods[slot] * (1.0 - config.mood_decay_rate)).clamp(-1.0, 1.0);

        let gap = 0.5 - store.satisfactions[slot];
        store.satisfactions[slot] =
            (store.satisfactions[slot] + gap * config.satisfaction_decay_rate).clamp(0.0, 1.0);

        let walk = rng.gen_range(-config.mobilization_walk..=config.mobilization_walk);
        store.mobilizations[slot] = (store.mobilizations[slot] + walk).clamp(0.0, 1.0);
    }
}
