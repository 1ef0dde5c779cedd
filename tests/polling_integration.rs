//! Integration tests for polling aggregation
//!
//! Drives the polling pipeline through the session facade and checks the
//! exact-sum and weighting properties, including the rounding tie-break.

use std::time::Instant;

use proptest::prelude::*;

use electorate::coalition::generator::{ElectorateProfile, JurisdictionDemographics};
use electorate::coalition::standard_catalog;
use electorate::core::config::EngineConfig;
use electorate::core::types::{
    CandidateAttributes, CandidateId, CandidateRecord, JurisdictionId, PartyId, PartyRecord,
};
use electorate::ideology::Ideology;
use electorate::polling::{distribute_percentages, CandidateWeight};
use electorate::session::CampaignSession;

const NATIONAL: JurisdictionId = JurisdictionId(0);

fn build_session() -> CampaignSession {
    let mut session = CampaignSession::new(42, EngineConfig::default(), NATIONAL, 5_000_000);
    let parties = vec![
        PartyRecord {
            id: PartyId(1),
            ideal_point: Ideology::Progressive.ideal_point(),
        },
        PartyRecord {
            id: PartyId(2),
            ideal_point: Ideology::Conservative.ideal_point(),
        },
    ];
    session
        .generate_jurisdiction(
            NATIONAL,
            &standard_catalog(),
            &ElectorateProfile::default(),
            &JurisdictionDemographics::default(),
            &parties,
        )
        .unwrap();
    session
}

fn candidate(id: u32, ideology: Ideology, party: Option<PartyId>) -> CandidateRecord {
    CandidateRecord {
        id: CandidateId(id),
        ideal_point: ideology.ideal_point(),
        policy_stances: ahash::AHashMap::new(),
        party,
        attributes: CandidateAttributes {
            charisma: 60.0,
            intelligence: 60.0,
            integrity: 60.0,
        },
    }
}

#[test]
fn test_remainder_rounding_two_candidates() {
    let entries = [
        CandidateWeight {
            id: CandidateId(1),
            weight: 66.6,
            score: 66.6,
        },
        CandidateWeight {
            id: CandidateId(2),
            weight: 33.4,
            score: 33.4,
        },
    ];
    let result = distribute_percentages(&entries);
    assert_eq!(result, vec![(CandidateId(1), 67), (CandidateId(2), 33)]);
}

#[test]
fn test_session_polling_sums_to_100() {
    for count in 1..=6 {
        let candidates: Vec<_> = (1..=count)
            .map(|i| {
                let ideology = match i % 3 {
                    0 => Ideology::Progressive,
                    1 => Ideology::Conservative,
                    _ => Ideology::Centrist,
                };
                candidate(i, ideology, Some(PartyId(1 + (i % 2))))
            })
            .collect();
        // Fresh session per candidate-set size so cached distributions
        // never leak across cases
        let mut session = build_session();
        let result = session
            .aggregate_polling(NATIONAL, &candidates, Instant::now())
            .unwrap();
        let total: u32 = result.iter().map(|(_, p)| p).sum();
        assert_eq!(total, 100, "candidate count {} summed to {}", count, total);
    }
}

#[test]
fn test_per_coalition_scores_land_in_cache_column() {
    let mut session = build_session();
    let c = candidate(1, Ideology::Progressive, Some(PartyId(1)));
    let scores = session
        .poll_candidate(NATIONAL, &c, Instant::now())
        .unwrap();

    let store = session.store(NATIONAL).unwrap();
    assert_eq!(scores.len(), store.len());
    for slot in 0..store.len() {
        let cached = store.cached_score(slot, c.id).unwrap();
        assert_eq!(cached, scores[&store.ids[slot]]);
        assert!((0.0..=100.0).contains(&cached));
    }
}

#[test]
fn test_aligned_candidate_outpolls_opponent_with_hostile_base() {
    let mut session = build_session();
    // Make every coalition progressive-leaning by polling in a store where
    // the progressive candidate matches the biggest urban coalitions
    let candidates = vec![
        candidate(1, Ideology::Progressive, Some(PartyId(1))),
        candidate(2, Ideology::Traditionalist, None),
    ];
    let result = session
        .aggregate_polling(NATIONAL, &candidates, Instant::now())
        .unwrap();
    let progressive = result.iter().find(|(id, _)| *id == CandidateId(1)).unwrap();
    let traditionalist = result.iter().find(|(id, _)| *id == CandidateId(2)).unwrap();
    assert!(
        progressive.1 > traditionalist.1,
        "expected the party-backed progressive to lead: {:?}",
        result
    );
}

proptest! {
    #[test]
    fn prop_percentages_always_sum_to_100(
        weights in proptest::collection::vec(0.0f32..1000.0, 1..12)
    ) {
        let entries: Vec<CandidateWeight> = weights
            .iter()
            .enumerate()
            .map(|(i, w)| CandidateWeight {
                id: CandidateId(i as u32),
                weight: *w,
                score: w / 10.0,
            })
            .collect();
        let result = distribute_percentages(&entries);
        let total: u32 = result.iter().map(|(_, p)| p).sum();
        prop_assert_eq!(total, 100);
        prop_assert_eq!(result.len(), entries.len());
    }

    #[test]
    fn prop_percentage_never_exceeds_raw_share_by_more_than_one(
        weights in proptest::collection::vec(1.0f32..1000.0, 2..8)
    ) {
        let total: f32 = weights.iter().sum();
        let entries: Vec<CandidateWeight> = weights
            .iter()
            .enumerate()
            .map(|(i, w)| CandidateWeight {
                id: CandidateId(i as u32),
                weight: *w,
                score: 50.0,
            })
            .collect();
        let result = distribute_percentages(&entries);
        for ((_, percent), weight) in result.iter().zip(&weights) {
            let exact = weight / total * 100.0;
            prop_assert!((*percent as f32) >= exact.floor());
            prop_assert!((*percent as f32) <= exact.floor() + 1.0);
        }
    }
}
