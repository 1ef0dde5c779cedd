//! Alignment scoring between candidates and coalitions

pub mod alignment;

pub use alignment::{
    base_affinity, demographic_score, ideology_score, modulate, party_score, policy_score,
    score_candidate, NEUTRAL_SCORE,
};
