//! Polling aggregation, exact-sum rounding, and the session polling cache

pub mod aggregate;
pub mod cache;

pub use aggregate::{
    coalition_scores, distribute_percentages, weigh_scores, CandidateWeight,
};
pub use cache::{aggregate_polling, aggregate_score, poll_candidate, PollingCache};
