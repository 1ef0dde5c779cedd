//! Jurisdiction hierarchy and population weights
//!
//! A static forest of two levels under one national root: every city maps
//! to a state, every state to the national scope. Registration validates
//! references; traversal and weight queries never fail, they degrade to
//! zero weight for unknown ids.

use ahash::AHashMap;

use crate::core::error::{ElectorateError, Result};
use crate::core::types::JurisdictionId;

/// The city -> state -> national mapping with population weights
#[derive(Debug, Clone)]
pub struct SpatialHierarchy {
    national: JurisdictionId,
    city_to_state: AHashMap<JurisdictionId, JurisdictionId>,
    populations: AHashMap<JurisdictionId, u64>,
    states: Vec<JurisdictionId>,
}

impl SpatialHierarchy {
    pub fn new(national: JurisdictionId, national_population: u64) -> Self {
        let mut populations = AHashMap::new();
        populations.insert(national, national_population);
        Self {
            national,
            city_to_state: AHashMap::new(),
            populations,
            states: Vec::new(),
        }
    }

    pub fn national(&self) -> JurisdictionId {
        self.national
    }

    pub fn register_state(&mut self, state: JurisdictionId, population: u64) -> Result<()> {
        if state == self.national || self.states.contains(&state) {
            return Err(ElectorateError::DuplicateJurisdiction(state));
        }
        self.states.push(state);
        self.populations.insert(state, population);
        Ok(())
    }

    pub fn register_city(
        &mut self,
        city: JurisdictionId,
        state: JurisdictionId,
        population: u64,
    ) -> Result<()> {
        if !self.states.contains(&state) {
            return Err(ElectorateError::InvalidHierarchy(format!(
                "city {:?} references unregistered state {:?}",
                city, state
            )));
        }
        if self.city_to_state.contains_key(&city) || self.states.contains(&city) {
            return Err(ElectorateError::DuplicateJurisdiction(city));
        }
        self.city_to_state.insert(city, state);
        self.populations.insert(city, population);
        Ok(())
    }

    pub fn state_of(&self, city: JurisdictionId) -> Option<JurisdictionId> {
        self.city_to_state.get(&city).copied()
    }

    pub fn is_city(&self, id: JurisdictionId) -> bool {
        self.city_to_state.contains_key(&id)
    }

    pub fn is_state(&self, id: JurisdictionId) -> bool {
        self.states.contains(&id)
    }

    /// Registered states in registration order
    pub fn states(&self) -> &[JurisdictionId] {
        &self.states
    }

    pub fn population(&self, id: JurisdictionId) -> u64 {
        self.populations.get(&id).copied().unwrap_or(0)
    }

    /// A city's contribution weight toward its state, capped so one city
    /// cannot dominate the state-level aggregate
    pub fn city_weight(&self, city: JurisdictionId, cap: f32) -> f32 {
        let Some(state) = self.state_of(city) else {
            return 0.0;
        };
        let state_pop = self.population(state);
        if state_pop == 0 {
            return 0.0;
        }
        (self.population(city) as f32 / state_pop as f32).min(cap)
    }

    /// A state's contribution weight toward the national aggregate
    pub fn state_weight(&self, state: JurisdictionId) -> f32 {
        let national_pop = self.population(self.national);
        if national_pop == 0 || !self.is_state(state) {
            return 0.0;
        }
        self.population(state) as f32 / national_pop as f32
    }
}
