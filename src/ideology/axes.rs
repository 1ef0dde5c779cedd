//! Policy-space axes and the mapping from policy categories onto them

use serde::{Deserialize, Serialize};

/// Number of axes in the policy space
pub const AXIS_COUNT: usize = 12;

/// One dimension of the shared policy space
///
/// Every axis runs from -5 to +5. Sign conventions:
/// - `Economic`: -5 pure market, +5 state-led
/// - `Social`: -5 traditionalist, +5 progressive
/// - `Ecological`: -5 extraction-first, +5 conservation-first
/// - `Authority`: -5 libertarian, +5 authoritarian
/// - `Welfare`: -5 minimal safety net, +5 universal provision
/// - `Security`: -5 dovish, +5 hawkish
/// - `Migration`: -5 restrictive, +5 open
/// - `Education`: -5 private, +5 public investment
/// - `Infrastructure`: -5 austerity, +5 expansion
/// - `CivilLiberties`: -5 order-first, +5 rights-first
/// - `Rural`: -5 urban-centric, +5 rural-interest
/// - `Technology`: -5 precautionary, +5 accelerationist
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(usize)]
pub enum Axis {
    Economic = 0,
    Social = 1,
    Ecological = 2,
    Authority = 3,
    Welfare = 4,
    Security = 5,
    Migration = 6,
    Education = 7,
    Infrastructure = 8,
    CivilLiberties = 9,
    Rural = 10,
    Technology = 11,
}

impl Axis {
    pub fn index(&self) -> usize {
        *self as usize
    }

    pub const ALL: [Axis; AXIS_COUNT] = [
        Axis::Economic,
        Axis::Social,
        Axis::Ecological,
        Axis::Authority,
        Axis::Welfare,
        Axis::Security,
        Axis::Migration,
        Axis::Education,
        Axis::Infrastructure,
        Axis::CivilLiberties,
        Axis::Rural,
        Axis::Technology,
    ];
}

/// Policy area of a question or legislative action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PolicyCategory {
    Economy,
    Taxation,
    SocialIssues,
    Environment,
    LawAndOrder,
    Welfare,
    Immigration,
    Education,
    Infrastructure,
    CivilRights,
    Agriculture,
    Defense,
    Technology,
}

impl PolicyCategory {
    /// Policy-space axes this category projects onto
    pub fn axes(&self) -> &'static [Axis] {
        match self {
            Self::Economy => &[Axis::Economic],
            Self::Taxation => &[Axis::Economic, Axis::Welfare],
            Self::SocialIssues => &[Axis::Social, Axis::CivilLiberties],
            Self::Environment => &[Axis::Ecological],
            Self::LawAndOrder => &[Axis::Authority, Axis::Security],
            Self::Welfare => &[Axis::Welfare],
            Self::Immigration => &[Axis::Migration],
            Self::Education => &[Axis::Education],
            Self::Infrastructure => &[Axis::Infrastructure, Axis::Rural],
            Self::CivilRights => &[Axis::CivilLiberties, Axis::Social],
            Self::Agriculture => &[Axis::Rural, Axis::Ecological],
            Self::Defense => &[Axis::Security],
            Self::Technology => &[Axis::Technology],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_indices_are_dense() {
        for (i, axis) in Axis::ALL.iter().enumerate() {
            assert_eq!(axis.index(), i);
        }
    }

    #[test]
    fn test_every_category_maps_to_axes() {
        let categories = [
            PolicyCategory::Economy,
            PolicyCategory::Taxation,
            PolicyCategory::SocialIssues,
            PolicyCategory::Environment,
            PolicyCategory::LawAndOrder,
            PolicyCategory::Welfare,
            PolicyCategory::Immigration,
            PolicyCategory::Education,
            PolicyCategory::Infrastructure,
            PolicyCategory::CivilRights,
            PolicyCategory::Agriculture,
            PolicyCategory::Defense,
            PolicyCategory::Technology,
        ];
        for category in categories {
            assert!(!category.axes().is_empty());
        }
    }
}
