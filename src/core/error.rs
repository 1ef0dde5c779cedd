use thiserror::Error;

#[derive(Error, Debug)]
pub enum ElectorateError {
    #[error("Coalition archetype catalog is empty")]
    EmptyArchetypeCatalog,

    #[error("No parties registered for jurisdiction")]
    NoParties,

    #[error("Unknown jurisdiction: {0:?}")]
    UnknownJurisdiction(crate::core::types::JurisdictionId),

    #[error("Jurisdiction already registered: {0:?}")]
    DuplicateJurisdiction(crate::core::types::JurisdictionId),

    #[error("Invalid hierarchy: {0}")]
    InvalidHierarchy(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ElectorateError>;
