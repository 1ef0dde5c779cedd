//! Coalition catalog, columnar store, and generation

pub mod archetype;
pub mod generator;
pub mod store;

pub use archetype::{standard_catalog, ArchetypeKind, CoalitionArchetype};
pub use generator::{
    generate_store, ElectorateProfile, JurisdictionDemographics, PolicyQuestion,
};
pub use store::{CoalitionRow, CoalitionStore};
