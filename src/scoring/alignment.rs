//! Candidate-coalition alignment scoring
//!
//! Four independent sub-scores, each in [0, 100], combined into one affinity
//! score and modulated by the coalition's current mood and satisfaction.
//! Every function here is pure; missing or non-finite inputs resolve to
//! documented neutral defaults, never to NaN.

use ahash::AHashMap;

use crate::coalition::store::CoalitionStore;
use crate::core::types::{
    CandidateAttributes, CandidateRecord, Demographics, PartyId, PolicyQuestionId,
};
use crate::ideology::IdealPoint;

/// Neutral default used whenever a sub-score has nothing to work with
pub const NEUTRAL_SCORE: f32 = 50.0;

/// Sub-score weights in the combined affinity
const IDEOLOGY_WEIGHT: f32 = 0.35;
const POLICY_WEIGHT: f32 = 0.25;
const PARTY_WEIGHT: f32 = 0.25;
const DEMOGRAPHIC_WEIGHT: f32 = 0.15;

/// Ideological proximity: 100 at distance zero, 0 at distance 10 or more
pub fn ideology_score(candidate: &IdealPoint, coalition: &IdealPoint) -> f32 {
    (100.0 - 10.0 * candidate.distance(coalition)).max(0.0)
}

/// Stance agreement averaged over the questions both sides answered
///
/// A per-question difference of 10 or more scores zero; with no comparable
/// questions the score is the neutral 50. Non-finite stances on either side
/// are skipped.
pub fn policy_score(
    candidate: &AHashMap<PolicyQuestionId, f32>,
    coalition: &AHashMap<PolicyQuestionId, f32>,
) -> f32 {
    let mut total = 0.0;
    let mut count = 0u32;

    for (question, candidate_stance) in candidate {
        if !candidate_stance.is_finite() {
            continue;
        }
        let Some(coalition_stance) = coalition.get(question) else {
            continue;
        };
        if !coalition_stance.is_finite() {
            continue;
        }
        let difference = (candidate_stance - coalition_stance).abs();
        let question_score = if difference >= 10.0 {
            0.0
        } else {
            100.0 - 10.0 * difference
        };
        total += question_score;
        count += 1;
    }

    if count == 0 {
        NEUTRAL_SCORE
    } else {
        total / count as f32
    }
}

/// Party preference scaled to [0, 100]; 50 for a partyless candidate
///
/// A coalition with no alignment entry for the candidate's party prefers it
/// with probability zero.
pub fn party_score(alignment: &AHashMap<PartyId, f32>, party: Option<PartyId>) -> f32 {
    match party {
        Some(id) => alignment.get(&id).copied().unwrap_or(0.0) * 100.0,
        None => NEUTRAL_SCORE,
    }
}

/// Personal-appeal score from candidate attributes against the coalition's
/// demographic profile
///
/// Intelligence only registers with college-educated coalitions.
pub fn demographic_score(attributes: &CandidateAttributes, demographics: &Demographics) -> f32 {
    let mut score = NEUTRAL_SCORE;

    if attributes.charisma.is_finite() {
        score += 0.3 * (attributes.charisma - 50.0);
    }
    if attributes.intelligence.is_finite() && demographics.education.values_intelligence() {
        score += 0.2 * (attributes.intelligence - 50.0);
    }
    if attributes.integrity.is_finite() {
        score += 0.25 * (attributes.integrity - 50.0);
    }

    score.clamp(0.0, 100.0)
}

/// Weighted combination of the four sub-scores, before mood modulation
pub fn base_affinity(ideology: f32, policy: f32, party: f32, demographic: f32) -> f32 {
    IDEOLOGY_WEIGHT * ideology
        + POLICY_WEIGHT * policy
        + PARTY_WEIGHT * party
        + DEMOGRAPHIC_WEIGHT * demographic
}

/// Mood and satisfaction modulation, clamped to [0, 100]
///
/// A coalition in a foul mood discounts everyone; a satisfied one inflates
/// everyone. Both factors are bounded because state is clamped.
pub fn modulate(base: f32, mood: f32, satisfaction: f32) -> f32 {
    let modulated = base * (1.0 + 0.5 * mood) * (0.5 + satisfaction);
    if modulated.is_finite() {
        modulated.clamp(0.0, 100.0)
    } else {
        NEUTRAL_SCORE
    }
}

/// Full affinity of one candidate for the coalition at `slot`
///
/// This is the value cached per (coalition, candidate) pair.
pub fn score_candidate(store: &CoalitionStore, slot: usize, candidate: &CandidateRecord) -> f32 {
    let coalition_ideal = store.ideologies[slot].ideal_point();
    let ideology = ideology_score(&candidate.ideal_point, &coalition_ideal);
    let policy = policy_score(&candidate.policy_stances, &store.policy_stances[slot]);
    let party = party_score(&store.party_alignments[slot], candidate.party);
    let demographic = demographic_score(&candidate.attributes, &store.demographics[slot]);

    modulate(
        base_affinity(ideology, policy, party, demographic),
        store.moods[slot],
        store.satisfactions[slot],
    )
}
