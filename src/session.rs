//! Session-scoped engine context
//!
//! One `CampaignSession` owns everything mutable for a campaign: the
//! per-jurisdiction stores, the spatial hierarchy, the polling cache, tick
//! metrics, and the RNG. Nothing here is global; two sessions never share
//! state, and a fixed seed reproduces a session exactly.

use std::time::Instant;

use ahash::AHashMap;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::coalition::archetype::CoalitionArchetype;
use crate::coalition::generator::{
    generate_store, ElectorateProfile, JurisdictionDemographics,
};
use crate::coalition::store::CoalitionStore;
use crate::core::config::EngineConfig;
use crate::core::error::{ElectorateError, Result};
use crate::core::types::{
    CandidateId, CandidateRecord, CoalitionId, EventRecord, JurisdictionId, JurisdictionTier,
    PartyRecord, PolicyRecord, Tick,
};
use crate::polling::{self, PollingCache};
use crate::simulation::metrics::TickMetrics;
use crate::simulation::tick::{run_simulation_tick, TickSummary};
use crate::spatial::hierarchy::SpatialHierarchy;
use crate::turnout::estimate::{estimate_turnout, TurnoutReport};
use crate::turnout::forecast::{forecast_turnout, ForecastOptions, ForecastReport};

/// All mutable engine state for one campaign
pub struct CampaignSession {
    pub config: EngineConfig,
    pub stores: AHashMap<JurisdictionId, CoalitionStore>,
    pub hierarchy: SpatialHierarchy,
    pub polling: PollingCache,
    pub metrics: TickMetrics,
    pub current_tick: Tick,
    pub rng: ChaCha8Rng,
}

impl CampaignSession {
    pub fn new(
        seed: u64,
        config: EngineConfig,
        national: JurisdictionId,
        national_population: u64,
    ) -> Self {
        Self {
            config,
            stores: AHashMap::new(),
            hierarchy: SpatialHierarchy::new(national, national_population),
            polling: PollingCache::new(),
            metrics: TickMetrics::new(),
            current_tick: 0,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    pub fn add_state(&mut self, state: JurisdictionId, population: u64) -> Result<()> {
        self.hierarchy.register_state(state, population)
    }

    pub fn add_city(
        &mut self,
        city: JurisdictionId,
        state: JurisdictionId,
        population: u64,
    ) -> Result<()> {
        self.hierarchy.register_city(city, state, population)
    }

    /// Generate and register the coalition store for one jurisdiction
    ///
    /// The tier comes from the hierarchy, so the jurisdiction must already
    /// be registered (or be the national root).
    pub fn generate_jurisdiction(
        &mut self,
        jurisdiction: JurisdictionId,
        catalog: &[CoalitionArchetype],
        profile: &ElectorateProfile,
        demographics: &JurisdictionDemographics,
        parties: &[PartyRecord],
    ) -> Result<()> {
        if self.stores.contains_key(&jurisdiction) {
            return Err(ElectorateError::DuplicateJurisdiction(jurisdiction));
        }
        let tier = if jurisdiction == self.hierarchy.national() {
            JurisdictionTier::National
        } else if self.hierarchy.is_state(jurisdiction) {
            JurisdictionTier::State
        } else if self.hierarchy.is_city(jurisdiction) {
            JurisdictionTier::City
        } else {
            return Err(ElectorateError::UnknownJurisdiction(jurisdiction));
        };

        let store = generate_store(
            jurisdiction,
            tier,
            catalog,
            profile,
            demographics,
            parties,
            &self.config,
            &mut self.rng,
        )?;
        self.stores.insert(jurisdiction, store);
        Ok(())
    }

    pub fn store(&self, jurisdiction: JurisdictionId) -> Result<&CoalitionStore> {
        self.stores
            .get(&jurisdiction)
            .ok_or(ElectorateError::UnknownJurisdiction(jurisdiction))
    }

    /// Per-coalition score map for one candidate in one jurisdiction
    pub fn poll_candidate(
        &mut self,
        jurisdiction: JurisdictionId,
        candidate: &CandidateRecord,
        now: Instant,
    ) -> Result<AHashMap<CoalitionId, f32>> {
        let store = self
            .stores
            .get_mut(&jurisdiction)
            .ok_or(ElectorateError::UnknownJurisdiction(jurisdiction))?;
        Ok(polling::poll_candidate(
            store,
            candidate,
            &mut self.polling,
            now,
            &self.config,
        ))
    }

    /// Integer polling percentages for a candidate set, summing to 100
    pub fn aggregate_polling(
        &mut self,
        jurisdiction: JurisdictionId,
        candidates: &[CandidateRecord],
        now: Instant,
    ) -> Result<Vec<(CandidateId, u32)>> {
        let store = self
            .stores
            .get_mut(&jurisdiction)
            .ok_or(ElectorateError::UnknownJurisdiction(jurisdiction))?;
        Ok(polling::aggregate_polling(
            store,
            candidates,
            &mut self.polling,
            now,
            &self.config,
        ))
    }

    /// Advance the simulation by one tick
    pub fn run_tick(
        &mut self,
        events: &[EventRecord],
        policies: &[(JurisdictionId, PolicyRecord)],
    ) -> TickSummary {
        run_simulation_tick(self, events, policies)
    }

    /// Turnout projection from committed state
    pub fn turnout(
        &self,
        jurisdiction: JurisdictionId,
        eligible_voters: u64,
    ) -> Result<TurnoutReport> {
        Ok(estimate_turnout(
            self.store(jurisdiction)?,
            eligible_voters,
            &self.config,
        ))
    }

    /// Forecast draw with uncertainty, using the session RNG
    pub fn forecast(
        &mut self,
        jurisdiction: JurisdictionId,
        eligible_voters: u64,
        options: &ForecastOptions,
    ) -> Result<ForecastReport> {
        let store = self
            .stores
            .get(&jurisdiction)
            .ok_or(ElectorateError::UnknownJurisdiction(jurisdiction))?;
        Ok(forecast_turnout(
            store,
            eligible_voters,
            options,
            &self.config,
            &mut self.rng,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::coalition::standard_catalog;
    use crate::core::types::PartyId;
    use crate::ideology::Ideology;

    fn parties() -> Vec<PartyRecord> {
        vec![PartyRecord {
            id: PartyId(1),
            ideal_point: Ideology::Centrist.ideal_point(),
        }]
    }

    #[test]
    fn test_generate_requires_known_jurisdiction() {
        let mut session =
            CampaignSession::new(1, EngineConfig::default(), JurisdictionId(0), 1_000_000);
        let result = session.generate_jurisdiction(
            JurisdictionId(42),
            &standard_catalog(),
            &ElectorateProfile::default(),
            &JurisdictionDemographics::default(),
            &parties(),
        );
        assert!(matches!(
            result,
            Err(ElectorateError::UnknownJurisdiction(_))
        ));
    }

    #[test]
    fn test_duplicate_generation_rejected() {
        let mut session =
            CampaignSession::new(1, EngineConfig::default(), JurisdictionId(0), 1_000_000);
        session
            .generate_jurisdiction(
                JurisdictionId(0),
                &standard_catalog(),
                &ElectorateProfile::default(),
                &JurisdictionDemographics::default(),
                &parties(),
            )
            .unwrap();
        let result = session.generate_jurisdiction(
            JurisdictionId(0),
            &standard_catalog(),
            &ElectorateProfile::default(),
            &JurisdictionDemographics::default(),
            &parties(),
        );
        assert!(matches!(
            result,
            Err(ElectorateError::DuplicateJurisdiction(_))
        ));
    }

    #[test]
    fn test_tier_derived_from_hierarchy() {
        let mut session =
            CampaignSession::new(1, EngineConfig::default(), JurisdictionId(0), 1_000_000);
        session.add_state(JurisdictionId(1), 400_000).unwrap();
        session
            .add_city(JurisdictionId(10), JurisdictionId(1), 100_000)
            .unwrap();
        for id in [JurisdictionId(0), JurisdictionId(1), JurisdictionId(10)] {
            session
                .generate_jurisdiction(
                    id,
                    &standard_catalog(),
                    &ElectorateProfile::default(),
                    &JurisdictionDemographics::default(),
                    &parties(),
                )
                .unwrap();
        }
        assert_eq!(
            session.store(JurisdictionId(0)).unwrap().tier,
            JurisdictionTier::National
        );
        assert_eq!(
            session.store(JurisdictionId(1)).unwrap().tier,
            JurisdictionTier::State
        );
        assert_eq!(
            session.store(JurisdictionId(10)).unwrap().tier,
            JurisdictionTier::City
        );
    }

    #[test]
    fn test_sessions_are_isolated() {
        let mut a = CampaignSession::new(1, EngineConfig::default(), JurisdictionId(0), 1_000);
        let b = CampaignSession::new(1, EngineConfig::default(), JurisdictionId(0), 1_000);
        a.generate_jurisdiction(
            JurisdictionId(0),
            &standard_catalog(),
            &ElectorateProfile::default(),
            &JurisdictionDemographics::default(),
            &parties(),
        )
        .unwrap();
        assert!(a.store(JurisdictionId(0)).is_ok());
        assert!(b.store(JurisdictionId(0)).is_err());
    }
}
