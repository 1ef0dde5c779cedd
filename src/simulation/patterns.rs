//! Effect pattern tables
//!
//! Static lookup from event types and policy categories to per-archetype
//! mobilization/satisfaction deltas. Deltas here are base values at
//! magnitude 1.0 in a national scope; accumulation scales them by the
//! event's magnitude and the jurisdiction tier factor.

use serde::{Deserialize, Serialize};

use crate::coalition::archetype::ArchetypeKind::{self, *};
use crate::ideology::PolicyCategory;

/// Signed state adjustment for one coalition
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EffectDelta {
    pub mobilization: f32,
    pub satisfaction: f32,
}

impl EffectDelta {
    pub fn scaled(&self, factor: f32) -> Self {
        Self {
            mobilization: self.mobilization * factor,
            satisfaction: self.satisfaction * factor,
        }
    }
}

const fn delta(mobilization: f32, satisfaction: f32) -> EffectDelta {
    EffectDelta {
        mobilization,
        satisfaction,
    }
}

const ECONOMIC_RECESSION: &[(ArchetypeKind, EffectDelta)] = &[
    (BusinessLibertarian, delta(0.05, -0.04)),
    (WorkingClass, delta(0.06, -0.06)),
    (SuburbanModerate, delta(0.03, -0.03)),
    (SeniorTraditionalist, delta(0.02, -0.03)),
];

const ECONOMIC_BOOM: &[(ArchetypeKind, EffectDelta)] = &[
    (BusinessLibertarian, delta(-0.02, 0.05)),
    (WorkingClass, delta(-0.03, 0.04)),
    (TechProfessional, delta(0.01, 0.04)),
    (SuburbanModerate, delta(-0.02, 0.03)),
];

const SCANDAL: &[(ArchetypeKind, EffectDelta)] = &[
    (SuburbanModerate, delta(0.02, -0.04)),
    (SeniorTraditionalist, delta(0.03, -0.05)),
    (UrbanProgressive, delta(0.02, -0.02)),
];

const SECURITY_CRISIS: &[(ArchetypeKind, EffectDelta)] = &[
    (RuralConservative, delta(0.05, -0.03)),
    (SeniorTraditionalist, delta(0.04, -0.04)),
    (SuburbanModerate, delta(0.02, -0.02)),
];

const CLIMATE_DISASTER: &[(ArchetypeKind, EffectDelta)] = &[
    (YoungActivist, delta(0.07, -0.05)),
    (UrbanProgressive, delta(0.05, -0.03)),
    (RuralConservative, delta(0.02, -0.04)),
];

const HEALTHCARE_REFORM: &[(ArchetypeKind, EffectDelta)] = &[
    (SeniorTraditionalist, delta(0.04, 0.03)),
    (WorkingClass, delta(0.03, 0.04)),
    (BusinessLibertarian, delta(0.03, -0.04)),
];

const TAX_CUT: &[(ArchetypeKind, EffectDelta)] = &[
    (BusinessLibertarian, delta(-0.02, 0.06)),
    (WorkingClass, delta(0.02, -0.02)),
    (UrbanProgressive, delta(0.03, -0.03)),
];

const STRIKE_WAVE: &[(ArchetypeKind, EffectDelta)] = &[
    (WorkingClass, delta(0.08, -0.02)),
    (BusinessLibertarian, delta(0.04, -0.05)),
    (SuburbanModerate, delta(0.01, -0.02)),
];

/// Per-archetype deltas for a known event type; `None` means the type
/// degrades to randomized spillover
pub fn event_pattern(event_type: &str) -> Option<&'static [(ArchetypeKind, EffectDelta)]> {
    match event_type {
        "economic_recession" => Some(ECONOMIC_RECESSION),
        "economic_boom" => Some(ECONOMIC_BOOM),
        "scandal" => Some(SCANDAL),
        "security_crisis" => Some(SECURITY_CRISIS),
        "climate_disaster" => Some(CLIMATE_DISASTER),
        "healthcare_reform" => Some(HEALTHCARE_REFORM),
        "tax_cut" => Some(TAX_CUT),
        "strike_wave" => Some(STRIKE_WAVE),
        _ => None,
    }
}

const POLICY_ECONOMY: &[(ArchetypeKind, EffectDelta)] = &[
    (WorkingClass, delta(0.02, 0.03)),
    (BusinessLibertarian, delta(0.03, -0.04)),
    (UrbanProgressive, delta(0.01, 0.02)),
];

const POLICY_TAXATION: &[(ArchetypeKind, EffectDelta)] = &[
    (BusinessLibertarian, delta(0.04, -0.05)),
    (WorkingClass, delta(0.01, 0.03)),
    (SeniorTraditionalist, delta(0.0, 0.02)),
];

const POLICY_SOCIAL_ISSUES: &[(ArchetypeKind, EffectDelta)] = &[
    (UrbanProgressive, delta(0.02, 0.04)),
    (SeniorTraditionalist, delta(0.04, -0.05)),
    (RuralConservative, delta(0.03, -0.04)),
];

const POLICY_ENVIRONMENT: &[(ArchetypeKind, EffectDelta)] = &[
    (YoungActivist, delta(0.02, 0.05)),
    (UrbanProgressive, delta(0.01, 0.03)),
    (RuralConservative, delta(0.03, -0.04)),
    (BusinessLibertarian, delta(0.02, -0.03)),
];

const POLICY_LAW_AND_ORDER: &[(ArchetypeKind, EffectDelta)] = &[
    (RuralConservative, delta(0.02, 0.04)),
    (SeniorTraditionalist, delta(0.01, 0.03)),
    (YoungActivist, delta(0.04, -0.05)),
    (UrbanProgressive, delta(0.02, -0.03)),
];

const POLICY_WELFARE: &[(ArchetypeKind, EffectDelta)] = &[
    (WorkingClass, delta(0.02, 0.05)),
    (SeniorTraditionalist, delta(0.01, 0.03)),
    (BusinessLibertarian, delta(0.03, -0.04)),
];

const POLICY_IMMIGRATION: &[(ArchetypeKind, EffectDelta)] = &[
    (UrbanProgressive, delta(0.02, 0.03)),
    (TechProfessional, delta(0.01, 0.03)),
    (RuralConservative, delta(0.04, -0.05)),
    (SeniorTraditionalist, delta(0.03, -0.04)),
];

const POLICY_EDUCATION: &[(ArchetypeKind, EffectDelta)] = &[
    (YoungActivist, delta(0.02, 0.04)),
    (TechProfessional, delta(0.01, 0.03)),
    (WorkingClass, delta(0.01, 0.02)),
];

const POLICY_INFRASTRUCTURE: &[(ArchetypeKind, EffectDelta)] = &[
    (WorkingClass, delta(0.01, 0.03)),
    (RuralConservative, delta(0.01, 0.03)),
    (SuburbanModerate, delta(0.0, 0.02)),
];

const POLICY_CIVIL_RIGHTS: &[(ArchetypeKind, EffectDelta)] = &[
    (UrbanProgressive, delta(0.03, 0.04)),
    (YoungActivist, delta(0.03, 0.04)),
    (SeniorTraditionalist, delta(0.02, -0.03)),
];

const POLICY_AGRICULTURE: &[(ArchetypeKind, EffectDelta)] = &[
    (RuralConservative, delta(0.02, 0.04)),
    (SeniorTraditionalist, delta(0.01, 0.02)),
    (YoungActivist, delta(0.01, -0.02)),
];

const POLICY_DEFENSE: &[(ArchetypeKind, EffectDelta)] = &[
    (RuralConservative, delta(0.01, 0.03)),
    (SeniorTraditionalist, delta(0.01, 0.03)),
    (YoungActivist, delta(0.02, -0.03)),
];

const POLICY_TECHNOLOGY: &[(ArchetypeKind, EffectDelta)] = &[
    (TechProfessional, delta(0.02, 0.05)),
    (BusinessLibertarian, delta(0.01, 0.02)),
    (SeniorTraditionalist, delta(0.01, -0.02)),
];

/// Per-archetype deltas for a policy category at direction +1.0
///
/// Accumulation scales these by the policy's signed direction, so a
/// restrictive action flips every delta.
pub fn policy_pattern(category: PolicyCategory) -> &'static [(ArchetypeKind, EffectDelta)] {
    match category {
        PolicyCategory::Economy => POLICY_ECONOMY,
        PolicyCategory::Taxation => POLICY_TAXATION,
        PolicyCategory::SocialIssues => POLICY_SOCIAL_ISSUES,
        PolicyCategory::Environment => POLICY_ENVIRONMENT,
        PolicyCategory::LawAndOrder => POLICY_LAW_AND_ORDER,
        PolicyCategory::Welfare => POLICY_WELFARE,
        PolicyCategory::Immigration => POLICY_IMMIGRATION,
        PolicyCategory::Education => POLICY_EDUCATION,
        PolicyCategory::Infrastructure => POLICY_INFRASTRUCTURE,
        PolicyCategory::CivilRights => POLICY_CIVIL_RIGHTS,
        PolicyCategory::Agriculture => POLICY_AGRICULTURE,
        PolicyCategory::Defense => POLICY_DEFENSE,
        PolicyCategory::Technology => POLICY_TECHNOLOGY,
    }
}
