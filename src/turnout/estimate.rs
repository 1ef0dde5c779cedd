//! Turnout estimation
//!
//! Base rates are a deterministic function of demographics; the actual rate
//! folds in current mobilization. Vote counts are per-coalition expected
//! values, never a voter-level draw.

use serde::Serialize;

use crate::coalition::archetype::ArchetypeKind;
use crate::coalition::store::CoalitionStore;
use crate::core::config::EngineConfig;
use crate::core::types::{
    AgeBand, CoalitionId, Demographics, EducationLevel, LocationKind, Occupation,
};

/// Per-coalition turnout projection
#[derive(Debug, Clone, Serialize)]
pub struct CoalitionTurnout {
    pub id: CoalitionId,
    pub archetype: ArchetypeKind,
    pub turnout_rate: f32,
    pub eligible: u64,
    pub expected_votes: u64,
}

/// Jurisdiction-wide turnout projection
#[derive(Debug, Clone, Serialize)]
pub struct TurnoutReport {
    pub coalitions: Vec<CoalitionTurnout>,
    pub total_votes: u64,
    pub overall_rate: f32,
    /// Share of eligible voters covered by coalition support bases;
    /// should sit within tolerance of 1.0 when the store is consistent
    pub coverage: f32,
}

/// Demographic base turnout rate, before mobilization
///
/// Additive offsets on a 65% baseline, clamped to the configured band.
pub fn base_turnout_rate(demographics: &Demographics, config: &EngineConfig) -> f32 {
    let mut rate = config.turnout_baseline;

    rate += match demographics.age {
        AgeBand::Young => -0.12,
        AgeBand::Middle => 0.02,
        AgeBand::Senior => 0.08,
    };
    rate += match demographics.education {
        EducationLevel::HighSchool => -0.05,
        EducationLevel::College => 0.05,
        EducationLevel::Graduate => 0.09,
    };
    rate += match demographics.location {
        LocationKind::Urban => -0.02,
        LocationKind::Suburban => 0.03,
        LocationKind::Rural => -0.01,
    };
    rate += match demographics.occupation {
        Occupation::BlueCollar => -0.03,
        Occupation::WhiteCollar => 0.02,
        Occupation::Professional => 0.04,
        Occupation::Service => -0.04,
        Occupation::Retired => 0.05,
        Occupation::Student => -0.06,
    };

    rate.clamp(config.base_rate_min, config.base_rate_max)
}

/// Actual turnout rate: demographic base plus the mobilization effect
pub fn turnout_rate(demographics: &Demographics, mobilization: f32, config: &EngineConfig) -> f32 {
    let base = base_turnout_rate(demographics, config);
    let mobilized = base + (mobilization - 0.5) * config.mobilization_turnout_factor;
    mobilized.clamp(config.turnout_min, config.turnout_max)
}

/// Project expected votes for one jurisdiction
pub fn estimate_turnout(
    store: &CoalitionStore,
    eligible_voters: u64,
    config: &EngineConfig,
) -> TurnoutReport {
    let mut coalitions = Vec::with_capacity(store.len());
    let mut total_votes = 0u64;
    let mut covered = 0u64;

    for slot in 0..store.len() {
        let rate = turnout_rate(
            &store.demographics[slot],
            store.mobilizations[slot],
            config,
        );
        let eligible = (store.support_bases[slot] as f64 * eligible_voters as f64).round() as u64;
        let expected_votes = (eligible as f64 * rate as f64).round() as u64;

        covered += eligible;
        total_votes += expected_votes;
        coalitions.push(CoalitionTurnout {
            id: store.ids[slot],
            archetype: store.archetypes[slot],
            turnout_rate: rate,
            eligible,
            expected_votes,
        });
    }

    let coverage = if eligible_voters > 0 {
        covered as f32 / eligible_voters as f32
    } else {
        0.0
    };
    let overall_rate = if covered > 0 {
        total_votes as f32 / covered as f32
    } else {
        0.0
    };

    TurnoutReport {
        coalitions,
        total_votes,
        overall_rate,
        coverage,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use crate::coalition::{generate_store, standard_catalog, ElectorateProfile};
    use crate::coalition::generator::JurisdictionDemographics;
    use crate::core::types::{JurisdictionId, JurisdictionTier, PartyId, PartyRecord};
    use crate::ideology::Ideology;

    fn test_store() -> CoalitionStore {
        let parties = vec![PartyRecord {
            id: PartyId(1),
            ideal_point: Ideology::Centrist.ideal_point(),
        }];
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        generate_store(
            JurisdictionId(1),
            JurisdictionTier::State,
            &standard_catalog(),
            &ElectorateProfile::default(),
            &JurisdictionDemographics::default(),
            &parties,
            &EngineConfig::default(),
            &mut rng,
        )
        .unwrap()
    }

    #[test]
    fn test_base_rate_reflects_demographics() {
        let config = EngineConfig::default();
        let seniors = Demographics {
            location: LocationKind::Rural,
            age: AgeBand::Senior,
            education: EducationLevel::HighSchool,
            occupation: Occupation::Retired,
        };
        let students = Demographics {
            location: LocationKind::Urban,
            age: AgeBand::Young,
            education: EducationLevel::College,
            occupation: Occupation::Student,
        };
        // 0.65 + 0.08 - 0.05 - 0.01 + 0.05
        assert!((base_turnout_rate(&seniors, &config) - 0.72).abs() < 1e-5);
        // 0.65 - 0.12 + 0.05 - 0.02 - 0.06
        assert!((base_turnout_rate(&students, &config) - 0.50).abs() < 1e-5);
    }

    #[test]
    fn test_rates_always_in_band() {
        let config = EngineConfig::default();
        let store = test_store();
        for slot in 0..store.len() {
            for mobilization in [0.0, 0.25, 0.5, 0.75, 1.0] {
                let rate = turnout_rate(&store.demographics[slot], mobilization, &config);
                assert!((config.turnout_min..=config.turnout_max).contains(&rate));
            }
        }
    }

    #[test]
    fn test_mobilization_moves_turnout() {
        let config = EngineConfig::default();
        let demographics = Demographics {
            location: LocationKind::Suburban,
            age: AgeBand::Middle,
            education: EducationLevel::College,
            occupation: Occupation::WhiteCollar,
        };
        let low = turnout_rate(&demographics, 0.0, &config);
        let neutral = turnout_rate(&demographics, 0.5, &config);
        let high = turnout_rate(&demographics, 1.0, &config);
        assert!((neutral - low - 0.125).abs() < 1e-5);
        assert!((high - neutral - 0.125).abs() < 1e-5);
    }

    #[test]
    fn test_coverage_near_one() {
        let store = test_store();
        let report = estimate_turnout(&store, 1_000_000, &EngineConfig::default());
        assert!(
            (report.coverage - 1.0).abs() < 1e-3,
            "coverage was {}",
            report.coverage
        );
    }

    #[test]
    fn test_votes_bounded_by_eligible() {
        let store = test_store();
        let report = estimate_turnout(&store, 1_000_000, &EngineConfig::default());
        assert!(report.total_votes < 1_000_000);
        for coalition in &report.coalitions {
            assert!(coalition.expected_votes <= coalition.eligible);
        }
    }

    #[test]
    fn test_zero_eligible_voters() {
        let store = test_store();
        let report = estimate_turnout(&store, 0, &EngineConfig::default());
        assert_eq!(report.total_votes, 0);
        assert!(report.coverage.abs() < f32::EPSILON);
    }
}
