//! Custom error types for the shelter catalog

use thiserror::Error;

/// Custom error type for catalog and region operations
#[derive(Error, Debug)]
pub enum ShelterError {
    /// No shelter with the requested id
    #[error("Shelter not found: {0}")]
    NotFound(String),

    /// City is not part of the region catalog
    #[error("Unknown city: {0}")]
    UnknownCity(String),

    /// District is not listed under its city
    #[error("Unknown district {district} in {city}")]
    UnknownDistrict { city: String, district: String },

    /// A district was given without its parent city
    #[error("District {0} selected without a city")]
    DistrictWithoutCity(String),

    /// Bundled fixture data could not be parsed
    #[error("Fixture error: {0}")]
    Fixture(#[from] serde_json::Error),
}

/// Type alias for catalog results
pub type ShelterResult<T> = Result<T, ShelterError>;
