//! Coalition store generation
//!
//! Builds one jurisdiction's CoalitionStore from the archetype catalog, the
//! electorate's policy profile, local demographics, and the active parties.
//! Runs once per jurisdiction scope at campaign setup.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::coalition::archetype::CoalitionArchetype;
use crate::coalition::store::{CoalitionRow, CoalitionStore};
use crate::core::config::EngineConfig;
use crate::core::error::{ElectorateError, Result};
use crate::core::types::{
    AgeBand, CoalitionId, EducationLevel, JurisdictionId, JurisdictionTier, LocationKind,
    PartyRecord, PolicyQuestionId,
};
use crate::ideology::{ideology_bias, IdealPoint, PolicyCategory};

/// One question of the electorate policy profile
#[derive(Debug, Clone)]
pub struct PolicyQuestion {
    pub id: PolicyQuestionId,
    pub category: PolicyCategory,
    /// Electorate-wide baseline stance in [-5, 5]
    pub baseline: f32,
}

/// Electorate-wide policy baseline for a jurisdiction
#[derive(Debug, Clone, Default)]
pub struct ElectorateProfile {
    pub questions: Vec<PolicyQuestion>,
}

/// Aggregate demographics of a jurisdiction
#[derive(Debug, Clone)]
pub struct JurisdictionDemographics {
    /// Share of the population living in urban areas (0-1)
    pub urbanization: f32,
    /// Age distribution; the three shares sum to 1.0
    pub age_young: f32,
    pub age_middle: f32,
    pub age_senior: f32,
    /// Share with a college degree or higher (0-1)
    pub college_share: f32,
}

impl Default for JurisdictionDemographics {
    fn default() -> Self {
        Self {
            urbanization: 0.5,
            age_young: 0.3,
            age_middle: 0.45,
            age_senior: 0.25,
            college_share: 0.35,
        }
    }
}

/// Build a populated store for one jurisdiction
///
/// All randomness (initial state jitter) flows through the injected RNG, so
/// a fixed seed reproduces the store exactly.
pub fn generate_store(
    jurisdiction: JurisdictionId,
    tier: JurisdictionTier,
    catalog: &[CoalitionArchetype],
    profile: &ElectorateProfile,
    demographics: &JurisdictionDemographics,
    parties: &[PartyRecord],
    config: &EngineConfig,
    rng: &mut ChaCha8Rng,
) -> Result<CoalitionStore> {
    if catalog.is_empty() {
        return Err(ElectorateError::EmptyArchetypeCatalog);
    }
    if parties.is_empty() {
        return Err(ElectorateError::NoParties);
    }

    let mut store = CoalitionStore::new(jurisdiction, tier);

    for (i, archetype) in catalog.iter().enumerate() {
        let multiplier = demographic_fit(archetype, demographics).clamp(
            config.size_multiplier_min,
            config.size_multiplier_max,
        );
        let adjusted_share = archetype.base_size * multiplier;
        let ideal = archetype.ideology.ideal_point();

        let mut stances = ahash::AHashMap::new();
        for question in &profile.questions {
            let baseline = if question.baseline.is_finite() {
                question.baseline
            } else {
                0.0
            };
            let stance = (baseline + ideology_bias(question.category, &ideal)).clamp(-5.0, 5.0);
            stances.insert(question.id, stance);
        }

        let alignment = party_alignment(&ideal, parties);

        store.push(CoalitionRow {
            id: CoalitionId(jurisdiction.0 * 100 + i as u32),
            name: archetype.name.to_string(),
            archetype: archetype.kind,
            ideology: archetype.ideology,
            demographics: archetype.demographics,
            size: archetype.base_size,
            support_base: adjusted_share,
            volatility: archetype.volatility,
            policy_stances: stances,
            party_alignment: alignment,
            mood: rng.gen_range(-config.mood_jitter..=config.mood_jitter),
            satisfaction: 0.5
                + rng.gen_range(-config.satisfaction_jitter..=config.satisfaction_jitter),
            mobilization: 0.5
                + rng.gen_range(-config.mobilization_jitter..=config.mobilization_jitter),
        });
    }

    store.normalize_support_bases();

    tracing::debug!(
        jurisdiction = jurisdiction.0,
        coalitions = store.len(),
        "generated coalition store"
    );

    Ok(store)
}

/// How well the jurisdiction's demographics match an archetype's profile
///
/// Average of a location, an age, and an education factor, each centered on
/// 1.0 for a typical mixed jurisdiction. The caller clamps the result.
fn demographic_fit(
    archetype: &CoalitionArchetype,
    demographics: &JurisdictionDemographics,
) -> f32 {
    let location = match archetype.demographics.location {
        LocationKind::Urban => 0.5 + demographics.urbanization,
        LocationKind::Suburban => 1.25 - (demographics.urbanization - 0.5).abs(),
        LocationKind::Rural => 1.5 - demographics.urbanization,
    };

    let age_share = match archetype.demographics.age {
        AgeBand::Young => demographics.age_young,
        AgeBand::Middle => demographics.age_middle,
        AgeBand::Senior => demographics.age_senior,
    };
    // A band holding a third of the population is a neutral 1.0 fit
    let age = age_share * 3.0;

    let education = match archetype.demographics.education {
        EducationLevel::HighSchool => 1.5 - demographics.college_share,
        EducationLevel::College => 0.5 + 1.5 * demographics.college_share,
        EducationLevel::Graduate => 0.25 + 2.0 * demographics.college_share,
    };

    (location + age + education) / 3.0
}

/// Preference distribution over parties, summing to 1.0
///
/// Raw affinity is `max(0, 10 - ideology_distance)`; parties beyond
/// distance 10 get zero. When every party is out of range the distribution
/// degrades to uniform rather than violating the sums-to-1.0 invariant.
fn party_alignment(
    coalition_ideal: &IdealPoint,
    parties: &[PartyRecord],
) -> ahash::AHashMap<crate::core::types::PartyId, f32> {
    let mut raw: Vec<f32> = parties
        .iter()
        .map(|p| (10.0 - coalition_ideal.distance(&p.ideal_point)).max(0.0))
        .collect();

    let total: f32 = raw.iter().sum();
    if total > f32::EPSILON {
        for r in &mut raw {
            *r /= total;
        }
    } else {
        let uniform = 1.0 / parties.len() as f32;
        for r in &mut raw {
            *r = uniform;
        }
    }

    parties.iter().map(|p| p.id).zip(raw).collect()
}
