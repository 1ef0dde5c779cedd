//! Fixed catalog of coalition archetypes
//!
//! Archetypes are the seed material for every jurisdiction's coalitions:
//! the generator adjusts their baseline sizes to local demographics but
//! never invents archetypes of its own.

use serde::{Deserialize, Serialize};

use crate::core::types::{AgeBand, Demographics, EducationLevel, LocationKind, Occupation};
use crate::ideology::Ideology;

/// Identity of a coalition archetype
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArchetypeKind {
    UrbanProgressive,
    RuralConservative,
    SuburbanModerate,
    BusinessLibertarian,
    WorkingClass,
    YoungActivist,
    SeniorTraditionalist,
    TechProfessional,
}

impl ArchetypeKind {
    pub fn key(&self) -> &'static str {
        match self {
            Self::UrbanProgressive => "urban_progressive",
            Self::RuralConservative => "rural_conservative",
            Self::SuburbanModerate => "suburban_moderate",
            Self::BusinessLibertarian => "business_libertarian",
            Self::WorkingClass => "working_class",
            Self::YoungActivist => "young_activist",
            Self::SeniorTraditionalist => "senior_traditionalist",
            Self::TechProfessional => "tech_professional",
        }
    }
}

/// One entry of the archetype catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoalitionArchetype {
    pub kind: ArchetypeKind,
    pub name: &'static str,
    pub ideology: Ideology,
    pub demographics: Demographics,
    /// Baseline share of the electorate before demographic adjustment (0-1)
    pub base_size: f32,
    /// How much forecast uncertainty applies to this coalition (0-1)
    pub volatility: f32,
}

/// The standard 8-entry catalog
pub fn standard_catalog() -> Vec<CoalitionArchetype> {
    vec![
        CoalitionArchetype {
            kind: ArchetypeKind::UrbanProgressive,
            name: "Urban Progressives",
            ideology: Ideology::Progressive,
            demographics: Demographics {
                location: LocationKind::Urban,
                age: AgeBand::Young,
                education: EducationLevel::College,
                occupation: Occupation::WhiteCollar,
            },
            base_size: 0.16,
            volatility: 0.5,
        },
        CoalitionArchetype {
            kind: ArchetypeKind::RuralConservative,
            name: "Rural Conservatives",
            ideology: Ideology::Conservative,
            demographics: Demographics {
                location: LocationKind::Rural,
                age: AgeBand::Middle,
                education: EducationLevel::HighSchool,
                occupation: Occupation::BlueCollar,
            },
            base_size: 0.15,
            volatility: 0.3,
        },
        CoalitionArchetype {
            kind: ArchetypeKind::SuburbanModerate,
            name: "Suburban Moderates",
            ideology: Ideology::Centrist,
            demographics: Demographics {
                location: LocationKind::Suburban,
                age: AgeBand::Middle,
                education: EducationLevel::College,
                occupation: Occupation::WhiteCollar,
            },
            base_size: 0.14,
            volatility: 0.6,
        },
        CoalitionArchetype {
            kind: ArchetypeKind::BusinessLibertarian,
            name: "Business Libertarians",
            ideology: Ideology::Libertarian,
            demographics: Demographics {
                location: LocationKind::Suburban,
                age: AgeBand::Middle,
                education: EducationLevel::Graduate,
                occupation: Occupation::Professional,
            },
            base_size: 0.10,
            volatility: 0.4,
        },
        CoalitionArchetype {
            kind: ArchetypeKind::WorkingClass,
            name: "Working Class",
            ideology: Ideology::SocialDemocrat,
            demographics: Demographics {
                location: LocationKind::Urban,
                age: AgeBand::Middle,
                education: EducationLevel::HighSchool,
                occupation: Occupation::BlueCollar,
            },
            base_size: 0.16,
            volatility: 0.5,
        },
        CoalitionArchetype {
            kind: ArchetypeKind::YoungActivist,
            name: "Young Activists",
            ideology: Ideology::Green,
            demographics: Demographics {
                location: LocationKind::Urban,
                age: AgeBand::Young,
                education: EducationLevel::College,
                occupation: Occupation::Student,
            },
            base_size: 0.09,
            volatility: 0.8,
        },
        CoalitionArchetype {
            kind: ArchetypeKind::SeniorTraditionalist,
            name: "Senior Traditionalists",
            ideology: Ideology::Traditionalist,
            demographics: Demographics {
                location: LocationKind::Rural,
                age: AgeBand::Senior,
                education: EducationLevel::HighSchool,
                occupation: Occupation::Retired,
            },
            base_size: 0.11,
            volatility: 0.2,
        },
        CoalitionArchetype {
            kind: ArchetypeKind::TechProfessional,
            name: "Tech Professionals",
            ideology: Ideology::Technocrat,
            demographics: Demographics {
                location: LocationKind::Urban,
                age: AgeBand::Young,
                education: EducationLevel::Graduate,
                occupation: Occupation::Professional,
            },
            base_size: 0.09,
            volatility: 0.6,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_eight_entries() {
        assert_eq!(standard_catalog().len(), 8);
    }

    #[test]
    fn test_baseline_sizes_sum_to_one() {
        let total: f32 = standard_catalog().iter().map(|a| a.base_size).sum();
        assert!((total - 1.0).abs() < 1e-6, "total was {}", total);
    }

    #[test]
    fn test_keys_are_unique() {
        use std::collections::HashSet;
        let keys: HashSet<_> = standard_catalog().iter().map(|a| a.kind.key()).collect();
        assert_eq!(keys.len(), 8);
    }

    #[test]
    fn test_volatility_in_range() {
        for archetype in standard_catalog() {
            assert!((0.0..=1.0).contains(&archetype.volatility));
        }
    }
}
