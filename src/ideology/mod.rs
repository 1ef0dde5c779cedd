//! Shared policy space
//!
//! Ideologies, parties, candidates, and coalitions all occupy the same
//! N-axis space; alignment is always a distance in this space.

pub mod axes;
pub mod ideal_point;
pub mod labels;

pub use axes::{Axis, PolicyCategory, AXIS_COUNT};
pub use ideal_point::{ideology_bias, IdealPoint};
pub use labels::Ideology;
