//! Shelter catalog models

pub mod area;
pub mod query;
pub mod shelter;

// Re-export for convenience
pub use area::{AreaSelection, PLACEHOLDER_LABEL};
pub use query::{ShelterPage, ShelterQuery};
pub use shelter::{ContactInfo, Located, Shelter, ShelterNotices, ShelterTag};
