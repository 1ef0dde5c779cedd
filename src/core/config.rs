//! Engine configuration with documented constants
//!
//! All magic numbers are collected here with explanations of their purpose
//! and how they interact with each other.

use std::time::Duration;

/// Tuning constants for the polling engine
///
/// These values are the tuned defaults. Changing them shifts
/// pacing and responsiveness, not correctness: every invariant (support
/// bases summing to 1.0, polling summing to 100, clamped state) holds for
/// any setting.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    // === GENERATION ===
    /// Lower bound on the demographic-fit size multiplier
    ///
    /// Keeps a badly-matched archetype from vanishing entirely; even a
    /// rural coalition in a dense city retains 30% of its baseline size.
    pub size_multiplier_min: f32,

    /// Upper bound on the demographic-fit size multiplier
    ///
    /// Keeps a perfectly-matched archetype from swallowing the electorate.
    pub size_multiplier_max: f32,

    /// Initial mood jitter: mood starts in [-jitter, +jitter] around 0
    pub mood_jitter: f32,

    /// Initial satisfaction jitter around the 0.5 neutral point
    pub satisfaction_jitter: f32,

    /// Initial mobilization jitter around the 0.5 neutral point
    pub mobilization_jitter: f32,

    // === STATE DECAY ===
    /// Fraction of mood that bleeds off toward 0 each tick
    ///
    /// At 0.05, a strong mood swing (±1.0) halves in ~14 ticks, so event
    /// reactions are visible for a while without becoming permanent.
    pub mood_decay_rate: f32,

    /// Fraction of the gap to neutral (0.5) that satisfaction closes each tick
    ///
    /// Slower than mood decay: grievances and approval both linger.
    pub satisfaction_decay_rate: f32,

    /// Half-width of the per-tick mobilization random walk
    ///
    /// Keeps mobilization from freezing between events. Small relative to
    /// event deltas (an unscaled pattern delta is ~0.05).
    pub mobilization_walk: f32,

    // === SPILLOVER ===
    /// Half-width of the random delta for event types with no pattern entry
    pub unmapped_spillover: f32,

    /// Half-width of the random delta for coalitions a mapped event does
    /// not explicitly target
    ///
    /// Half the unmapped magnitude: a known event concentrates its impact
    /// on its listed coalitions.
    pub unlisted_spillover: f32,

    // === POLLING CACHE ===
    /// How long a cached per-candidate score map short-circuits recomputation
    pub cache_window: Duration,

    /// Interval between full cache clears, bounding memory growth
    pub cache_clear_interval: Duration,

    /// Minimum total-weight movement that forces a fresh distribution
    ///
    /// Below this, a polling query issued within `stability_window` of the
    /// previous one returns the previous percentages unchanged.
    pub stability_threshold: f32,

    /// How recent the previous distribution must be for the stability skip
    pub stability_window: Duration,

    // === SPATIAL CASCADE ===
    /// Cap on a single city's weight within its state
    ///
    /// At 0.5, even a city holding most of a state's population cannot
    /// contribute more than half of the state-level aggregate.
    pub city_weight_cap: f32,

    /// Aggregated national magnitude below which the national bucket is
    /// dropped as noise
    pub cascade_noise_floor: f32,

    // === TURNOUT ===
    /// Baseline turnout rate before demographic offsets
    pub turnout_baseline: f32,

    /// Clamp range for the demographic base rate
    pub base_rate_min: f32,
    pub base_rate_max: f32,

    /// Clamp range for the final (mobilization-adjusted) turnout rate
    pub turnout_min: f32,
    pub turnout_max: f32,

    /// How strongly mobilization moves turnout: rate += (mob - 0.5) * this
    pub mobilization_turnout_factor: f32,

    // === PERFORMANCE ===
    /// Tick duration above which a warning is logged
    ///
    /// Ticks are expected to fit inside one scheduling quantum; exceeding
    /// this degrades responsiveness but is not an error.
    pub tick_budget: Duration,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            size_multiplier_min: 0.3,
            size_multiplier_max: 2.0,
            mood_jitter: 0.2,
            satisfaction_jitter: 0.1,
            mobilization_jitter: 0.15,
            mood_decay_rate: 0.05,
            satisfaction_decay_rate: 0.02,
            mobilization_walk: 0.01,
            unmapped_spillover: 0.01,
            unlisted_spillover: 0.005,
            cache_window: Duration::from_secs(5),
            cache_clear_interval: Duration::from_secs(300),
            stability_threshold: 0.5,
            stability_window: Duration::from_secs(1),
            city_weight_cap: 0.5,
            cascade_noise_floor: 0.001,
            turnout_baseline: 0.65,
            base_rate_min: 0.25,
            base_rate_max: 0.90,
            turnout_min: 0.15,
            turnout_max: 0.95,
            mobilization_turnout_factor: 0.25,
            tick_budget: Duration::from_millis(50),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tuning_values() {
        let config = EngineConfig::default();
        assert!((config.size_multiplier_min - 0.3).abs() < f32::EPSILON);
        assert!((config.size_multiplier_max - 2.0).abs() < f32::EPSILON);
        assert_eq!(config.cache_window, Duration::from_secs(5));
        assert_eq!(config.cache_clear_interval, Duration::from_secs(300));
        assert!((config.stability_threshold - 0.5).abs() < f32::EPSILON);
        assert!((config.cascade_noise_floor - 0.001).abs() < f32::EPSILON);
    }

    #[test]
    fn test_turnout_clamps_nested() {
        let config = EngineConfig::default();
        // The final clamp range contains the base-rate clamp range
        assert!(config.turnout_min < config.base_rate_min);
        assert!(config.turnout_max > config.base_rate_max);
    }
}
