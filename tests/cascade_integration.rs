//! Integration tests for the spatial cascading aggregator
//!
//! Builds a national/state/city hierarchy through the session and verifies
//! the population-weighted roll-up, the single-city cap, and the national
//! noise floor across full ticks.

use electorate::coalition::generator::{ElectorateProfile, JurisdictionDemographics};
use electorate::coalition::{standard_catalog, ArchetypeKind};
use electorate::core::config::EngineConfig;
use electorate::core::types::{
    EventRecord, JurisdictionId, PartyId, PartyRecord,
};
use electorate::ideology::Ideology;
use electorate::session::CampaignSession;

const NATIONAL: JurisdictionId = JurisdictionId(0);
const STATE_A: JurisdictionId = JurisdictionId(1);
const STATE_B: JurisdictionId = JurisdictionId(2);
const SMALL_CITY: JurisdictionId = JurisdictionId(10);
const BIG_CITY: JurisdictionId = JurisdictionId(11);

fn build_session(seed: u64) -> CampaignSession {
    let mut session = CampaignSession::new(seed, EngineConfig::default(), NATIONAL, 10_000_000);
    session.add_state(STATE_A, 4_000_000).unwrap();
    session.add_state(STATE_B, 6_000_000).unwrap();
    session.add_city(SMALL_CITY, STATE_A, 400_000).unwrap();
    session.add_city(BIG_CITY, STATE_A, 3_200_000).unwrap();

    let parties = vec![PartyRecord {
        id: PartyId(1),
        ideal_point: Ideology::Centrist.ideal_point(),
    }];
    for id in [NATIONAL, STATE_A, STATE_B, SMALL_CITY, BIG_CITY] {
        session
            .generate_jurisdiction(
                id,
                &standard_catalog(),
                &ElectorateProfile::default(),
                &JurisdictionDemographics::default(),
                &parties,
            )
            .unwrap();
    }
    session
}

fn event(jurisdiction: JurisdictionId, event_type: &str, magnitude: f32) -> EventRecord {
    EventRecord {
        event_type: event_type.to_string(),
        jurisdiction,
        magnitude,
    }
}

fn slot_of(session: &CampaignSession, jurisdiction: JurisdictionId, kind: ArchetypeKind) -> usize {
    session
        .store(jurisdiction)
        .unwrap()
        .archetypes
        .iter()
        .position(|a| *a == kind)
        .unwrap()
}

fn mobilization(session: &CampaignSession, jurisdiction: JurisdictionId, slot: usize) -> f32 {
    session.store(jurisdiction).unwrap().mobilizations[slot]
}

#[test]
fn test_city_event_cascades_with_population_weighting() {
    let mut session = build_session(42);
    let config = session.config.clone();
    let lib = ArchetypeKind::BusinessLibertarian;

    let city_slot = slot_of(&session, SMALL_CITY, lib);
    let state_slot = slot_of(&session, STATE_A, lib);
    let other_state_slot = slot_of(&session, STATE_B, lib);

    let city_before = mobilization(&session, SMALL_CITY, city_slot);
    let state_before = mobilization(&session, STATE_A, state_slot);
    let other_before = mobilization(&session, STATE_B, other_state_slot);

    let summary = session.run_tick(&[event(SMALL_CITY, "economic_recession", 1.0)], &[]);
    assert_eq!(summary.cascade.city_events, 1);

    let walk = config.mobilization_walk + 1e-6;

    // City: 0.05 x 0.3 city tier factor, plus decay walk
    let city_delta = mobilization(&session, SMALL_CITY, city_slot) - city_before;
    assert!((city_delta - 0.05 * 0.3).abs() <= walk, "city delta {}", city_delta);

    // State: weighted by 400k/4M = 0.1, state tier factor 0.7
    let state_delta = mobilization(&session, STATE_A, state_slot) - state_before;
    assert!(
        (state_delta - 0.05 * 0.1 * 0.7).abs() <= walk,
        "state delta {}",
        state_delta
    );

    // The unrelated state moves only by its decay walk
    let other_delta = mobilization(&session, STATE_B, other_state_slot) - other_before;
    assert!(other_delta.abs() <= walk, "unrelated state moved by {}", other_delta);
}

#[test]
fn test_big_city_contribution_is_capped() {
    let mut session = build_session(42);
    let config = session.config.clone();
    let lib = ArchetypeKind::BusinessLibertarian;
    let state_slot = slot_of(&session, STATE_A, lib);
    let state_before = mobilization(&session, STATE_A, state_slot);

    // 3.2M / 4M = 0.8 raw weight, capped at 0.5
    session.run_tick(&[event(BIG_CITY, "economic_recession", 1.0)], &[]);

    let state_delta = mobilization(&session, STATE_A, state_slot) - state_before;
    assert!(
        (state_delta - 0.05 * 0.5 * 0.7).abs() <= config.mobilization_walk + 1e-6,
        "state delta {}",
        state_delta
    );
}

#[test]
fn test_tiny_city_event_stays_below_national_noise_floor() {
    let mut session = build_session(42);
    let summary = session.run_tick(&[event(SMALL_CITY, "economic_recession", 0.0001)], &[]);
    assert!(!summary.cascade.national_applied);
}

#[test]
fn test_direct_national_event_not_rederived_from_cities() {
    let mut session = build_session(42);
    let config = session.config.clone();
    let lib = ArchetypeKind::BusinessLibertarian;
    let national_slot = slot_of(&session, NATIONAL, lib);
    let before = mobilization(&session, NATIONAL, national_slot);

    let summary = session.run_tick(&[event(NATIONAL, "economic_recession", 1.0)], &[]);
    assert!(summary.cascade.national_applied);

    // Exactly the direct national delta (0.05), no double counting from
    // lower tiers, plus the decay walk
    let delta = mobilization(&session, NATIONAL, national_slot) - before;
    assert!(
        (delta - 0.05).abs() <= config.mobilization_walk + 1e-6,
        "national delta {}",
        delta
    );
}

#[test]
fn test_all_supports_stay_normalized_after_mixed_ticks() {
    let mut session = build_session(11);
    for tick in 0..20u64 {
        let events = match tick % 4 {
            0 => vec![event(SMALL_CITY, "strike_wave", 1.0)],
            1 => vec![event(BIG_CITY, "climate_disaster", 0.7)],
            2 => vec![event(STATE_A, "security_crisis", 0.9)],
            _ => vec![event(NATIONAL, "scandal", 0.5)],
        };
        session.run_tick(&events, &[]);
    }
    for id in [NATIONAL, STATE_A, STATE_B, SMALL_CITY, BIG_CITY] {
        let sum = session.store(id).unwrap().support_base_sum();
        assert!((sum - 1.0).abs() < 1e-4, "store {:?} summed to {}", id, sum);
    }
}

#[test]
fn test_cascade_summary_counts_and_duration() {
    let mut session = build_session(3);
    let summary = session.run_tick(
        &[
            event(SMALL_CITY, "strike_wave", 1.0),
            event(BIG_CITY, "scandal", 0.5),
            event(STATE_A, "security_crisis", 1.0),
            event(NATIONAL, "economic_boom", 1.0),
            event(JurisdictionId(999), "scandal", 1.0),
        ],
        &[],
    );
    assert_eq!(summary.cascade.city_events, 2);
    assert_eq!(summary.cascade.state_events, 1);
    assert_eq!(summary.cascade.national_events, 1);
    assert_eq!(summary.cascade.dropped_events, 1);
    assert!(summary.duration.as_nanos() > 0);
}
