//! Spatial hierarchy and cascading aggregation

pub mod cascade;
pub mod hierarchy;

pub use cascade::{cascade_events, cascade_into_batches, CascadeSummary, WeightedEvent};
pub use hierarchy::SpatialHierarchy;
