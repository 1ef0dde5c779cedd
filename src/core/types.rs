//! Core type definitions used throughout the codebase

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// Unique identifier for coalitions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CoalitionId(pub u32);

impl CoalitionId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }
}

/// Unique identifier for candidates (records owned by an external collaborator)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CandidateId(pub u32);

impl CandidateId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }
}

/// Unique identifier for parties
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PartyId(pub u32);

impl PartyId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }
}

/// Unique identifier for jurisdictions (cities, states, the national scope)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct JurisdictionId(pub u32);

impl JurisdictionId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }
}

/// Unique identifier for policy questions in the electorate profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PolicyQuestionId(pub u32);

/// Simulation tick counter
pub type Tick = u64;

/// Scope level of a jurisdiction within the spatial hierarchy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum JurisdictionTier {
    City = 1,
    State = 2,
    National = 3,
}

impl JurisdictionTier {
    /// Effect magnitude factor for events originating at this tier
    pub fn effect_scale(&self) -> f32 {
        match self {
            Self::City => 0.3,
            Self::State => 0.7,
            Self::National => 1.0,
        }
    }

    /// Returns true if this tier sits above the other in the hierarchy
    pub fn outranks(&self, other: &JurisdictionTier) -> bool {
        (*self as u8) > (*other as u8)
    }
}

/// Where a coalition's members are concentrated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LocationKind {
    Urban,
    Suburban,
    Rural,
}

/// Dominant age band of a coalition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgeBand {
    Young,
    Middle,
    Senior,
}

/// Highest education level typical of a coalition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EducationLevel {
    HighSchool,
    College,
    Graduate,
}

impl EducationLevel {
    /// Coalitions at this level weigh candidate intelligence in appeal scoring
    pub fn values_intelligence(&self) -> bool {
        matches!(self, Self::College | Self::Graduate)
    }
}

/// Dominant occupation category of a coalition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Occupation {
    BlueCollar,
    WhiteCollar,
    Professional,
    Service,
    Retired,
    Student,
}

/// Categorical demographic attributes, read-only after generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Demographics {
    pub location: LocationKind,
    pub age: AgeBand,
    pub education: EducationLevel,
    pub occupation: Occupation,
}

/// Personal attributes of a candidate, each on a 0-100 scale
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CandidateAttributes {
    pub charisma: f32,
    pub intelligence: f32,
    pub integrity: f32,
}

/// Candidate record consumed from the politician-generation collaborator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateRecord {
    pub id: CandidateId,
    pub ideal_point: crate::ideology::IdealPoint,
    pub policy_stances: AHashMap<PolicyQuestionId, f32>,
    pub party: Option<PartyId>,
    pub attributes: CandidateAttributes,
}

/// Party record consumed from the party-content collaborator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartyRecord {
    pub id: PartyId,
    pub ideal_point: crate::ideology::IdealPoint,
}

/// A discrete simulated occurrence ("economic_recession", "scandal", ...)
///
/// Event types are open-ended strings; types absent from the effect-pattern
/// table degrade to randomized spillover rather than erroring.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventRecord {
    pub event_type: String,
    pub jurisdiction: JurisdictionId,
    pub magnitude: f32,
}

/// A legislative action consumed from the bill collaborator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolicyRecord {
    /// Which policy area the action touches
    pub category: crate::ideology::PolicyCategory,
    /// Direction of the action in [-1, 1], oriented along the category's axis
    pub direction: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coalition_id_equality() {
        let a = CoalitionId(1);
        let b = CoalitionId(1);
        let c = CoalitionId(2);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_coalition_id_hash() {
        use std::collections::HashMap;
        let mut map: HashMap<CoalitionId, &str> = HashMap::new();
        map.insert(CoalitionId(1), "urban_progressive");
        assert_eq!(map.get(&CoalitionId(1)), Some(&"urban_progressive"));
    }

    #[test]
    fn test_tier_effect_scale() {
        assert!((JurisdictionTier::City.effect_scale() - 0.3).abs() < f32::EPSILON);
        assert!((JurisdictionTier::State.effect_scale() - 0.7).abs() < f32::EPSILON);
        assert!((JurisdictionTier::National.effect_scale() - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_tier_outranks() {
        assert!(JurisdictionTier::National.outranks(&JurisdictionTier::State));
        assert!(JurisdictionTier::State.outranks(&JurisdictionTier::City));
        assert!(!JurisdictionTier::City.outranks(&JurisdictionTier::State));
        assert!(!JurisdictionTier::State.outranks(&JurisdictionTier::State));
    }

    #[test]
    fn test_education_gates_intelligence() {
        assert!(!EducationLevel::HighSchool.values_intelligence());
        assert!(EducationLevel::College.values_intelligence());
        assert!(EducationLevel::Graduate.values_intelligence());
    }
}
