//! Ideology labels and their fixed ideal points

use serde::{Deserialize, Serialize};

use crate::ideology::ideal_point::IdealPoint;

/// Dominant ideology of a coalition, party, or candidate
///
/// Each label resolves to a fixed ideal point; all distance math runs over
/// those points, never over the labels themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Ideology {
    Progressive,
    Conservative,
    Centrist,
    Libertarian,
    SocialDemocrat,
    Green,
    Traditionalist,
    Technocrat,
}

impl Ideology {
    /// Fixed position in policy space for this ideology
    ///
    /// Axis order: economic, social, ecological, authority, welfare,
    /// security, migration, education, infrastructure, civil liberties,
    /// rural, technology.
    pub fn ideal_point(&self) -> IdealPoint {
        match self {
            Self::Progressive => {
                IdealPoint([3.0, 4.0, 4.0, -2.0, 4.0, -2.0, 3.0, 4.0, 3.0, 4.0, -2.0, 1.0])
            }
            Self::Conservative => {
                IdealPoint([-3.0, -4.0, -3.0, 3.0, -2.0, 3.0, -3.0, -1.0, 0.0, -2.0, 4.0, -1.0])
            }
            Self::Centrist => {
                IdealPoint([0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 1.0, 0.0, 0.0, 0.0])
            }
            Self::Libertarian => {
                IdealPoint([-5.0, 1.0, -2.0, -5.0, -4.0, -1.0, 1.0, -2.0, -2.0, 5.0, 0.0, 3.0])
            }
            Self::SocialDemocrat => {
                IdealPoint([4.0, 0.0, 0.0, 1.0, 5.0, 0.0, -1.0, 2.0, 4.0, 0.0, 1.0, -1.0])
            }
            Self::Green => {
                IdealPoint([2.0, 4.0, 5.0, -3.0, 3.0, -3.0, 4.0, 3.0, 2.0, 4.0, 0.0, 0.0])
            }
            Self::Traditionalist => {
                IdealPoint([-1.0, -5.0, -1.0, 4.0, 2.0, 4.0, -4.0, 0.0, 1.0, -3.0, 2.0, -3.0])
            }
            Self::Technocrat => {
                IdealPoint([-1.0, 2.0, 2.0, 0.0, 1.0, 0.0, 2.0, 4.0, 3.0, 2.0, -3.0, 5.0])
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Progressive => "progressive",
            Self::Conservative => "conservative",
            Self::Centrist => "centrist",
            Self::Libertarian => "libertarian",
            Self::SocialDemocrat => "social_democrat",
            Self::Green => "green",
            Self::Traditionalist => "traditionalist",
            Self::Technocrat => "technocrat",
        }
    }
}
