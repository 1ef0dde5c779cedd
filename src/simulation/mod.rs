//! Tick-driven state updates: effect batching, decay, and timing

pub mod batch;
pub mod decay;
pub mod metrics;
pub mod patterns;
pub mod tick;

pub use batch::{
    accumulate_event, accumulate_policy, apply_batch, ApplySummary, EffectBatch, PendingEffect,
};
pub use decay::apply_decay;
pub use metrics::TickMetrics;
pub use patterns::{event_pattern, policy_pattern, EffectDelta};
pub use tick::{run_simulation_tick, TickSummary};
