//! Integration tests for effect batching, decay, and state bounds
//!
//! Drives full ticks through the session facade and verifies:
//! - The economic_recession shock, before and after decay
//! - Empty-tick idempotence (only decay moves state)
//! - State bounds under adversarial deltas

use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use electorate::coalition::generator::{
    generate_store, ElectorateProfile, JurisdictionDemographics,
};
use electorate::coalition::{standard_catalog, ArchetypeKind};
use electorate::core::config::EngineConfig;
use electorate::core::types::{
    EventRecord, JurisdictionId, JurisdictionTier, PartyId, PartyRecord,
};
use electorate::ideology::Ideology;
use electorate::session::CampaignSession;
use electorate::simulation::{apply_batch, EffectBatch, PendingEffect};

const NATIONAL: JurisdictionId = JurisdictionId(0);

fn build_session(seed: u64) -> CampaignSession {
    let mut session = CampaignSession::new(seed, EngineConfig::default(), NATIONAL, 5_000_000);
    let parties = vec![PartyRecord {
        id: PartyId(1),
        ideal_point: Ideology::Centrist.ideal_point(),
    }];
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

fn recession() -> EventRecord {
    EventRecord {
        event_type: "economic_recession".to_string(),
        jurisdiction: NATIONAL,
        magnitude: 1.0,
    }
}

#[test]
fn test_recession_scenario_through_full_tick() {
    let mut session = build_session(42);
    let config = session.config.clone();

    let store = session.store(NATIONAL).unwrap();
    let slot = store
        .archetypes
        .iter()
        .position(|a| *a == ArchetypeKind::BusinessLibertarian)
        .unwrap();
    let before = store.mobilizations[slot];

    let summary = session.run_tick(&[recession()], &[]);
    assert_eq!(summary.coalitions_updated, 8);

    // Batched delta is exactly +0.05; the decay random walk then moves the
    // result by at most the configured half-width.
    let after = session.store(NATIONAL).unwrap().mobilizations[slot];
    let delta = after - before;
    assert!(
        (delta - 0.05).abs() <= config.mobilization_walk + 1e-6,
        "delta was {}",
        delta
    );
}

#[test]
fn test_empty_tick_applies_only_decay() {
    let mut session = build_session(42);
    let config = session.config.clone();

    let store = session.store(NATIONAL).unwrap();
    let moods = store.moods.clone();
    let satisfactions = store.satisfactions.clone();
    let mobilizations = store.mobilizations.clone();

    let summary = session.run_tick(&[], &[]);
    assert_eq!(summary.coalitions_updated, 0);
    assert_eq!(summary.policies_applied, 0);

    let store = session.store(NATIONAL).unwrap();
    for slot in 0..store.len() {
        // Mood: exactly the fixed 5% decay toward zero
        let expected_mood = moods[slot] * (1.0 - config.mood_decay_rate);
        assert!((store.moods[slot] - expected_mood).abs() < 1e-6);

        // Satisfaction: exactly 2% of the gap toward 0.5
        let expected_satisfaction = satisfactions[slot]
            + (0.5 - satisfactions[slot]) * config.satisfaction_decay_rate;
        assert!((store.satisfactions[slot] - expected_satisfaction).abs() < 1e-6);

        // Mobilization: only the bounded random walk
        assert!(
            (store.mobilizations[slot] - mobilizations[slot]).abs()
                <= config.mobilization_walk + 1e-6
        );
    }
}

#[test]
fn test_decayed_mood_converges_to_neutral() {
    let mut session = build_session(7);
    for _ in 0..200 {
        session.run_tick(&[], &[]);
    }
    let store = session.store(NATIONAL).unwrap();
    for slot in 0..store.len() {
        assert!(store.moods[slot].abs() < 0.01);
        assert!((store.satisfactions[slot] - 0.5).abs() < 0.05);
    }
}

#[test]
fn test_state_bounds_survive_many_event_ticks() {
    let mut session = build_session(9);
    let types = [
        "economic_recession",
        "climate_disaster",
        "strike_wave",
        "unheard_of_event",
    ];
    for tick in 0..100u64 {
        let events = vec![EventRecord {
            event_type: types[(tick % 4) as usize].to_string(),
            jurisdiction: NATIONAL,
            magnitude: 5.0,
        }];
        session.run_tick(&events, &[]);

        let store = session.store(NATIONAL).unwrap();
        for slot in 0..store.len() {
            assert!((0.0..=1.0).contains(&store.mobilizations[slot]));
            assert!((0.0..=1.0).contains(&store.satisfactions[slot]));
            assert!((-1.0..=1.0).contains(&store.moods[slot]));
        }
        assert!((store.support_base_sum() - 1.0).abs() < 1e-4);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_adversarial_deltas_never_escape_bounds(
        deltas in proptest::collection::vec((-1000.0f32..1000.0, -1000.0f32..1000.0), 8)
    ) {
        let parties = vec![PartyRecord {
            id: PartyId(1),
            ideal_point: Ideology::Centrist.ideal_point(),
        }];
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut store = generate_store(
            NATIONAL,
            JurisdictionTier::National,
            &standard_catalog(),
            &ElectorateProfile::default(),
            &JurisdictionDemographics::default(),
            &parties,
            &EngineConfig::default(),
            &mut rng,
        )
        .unwrap();

        let mut batch = EffectBatch::new();
        for (slot, (mobilization, satisfaction)) in deltas.iter().enumerate() {
            batch.pending.insert(
                store.ids[slot],
                PendingEffect {
                    mobilization: *mobilization,
                    satisfaction: *satisfaction,
                    sources: vec!["adversarial".to_string()],
                },
            );
        }
        apply_batch(&mut store, batch);

        for slot in 0..store.len() {
            prop_assert!((0.0..=1.0).contains(&store.mobilizations[slot]));
            prop_assert!((0.0..=1.0).contains(&store.satisfactions[slot]));
        }
    }
}
