//! Shelter catalog and region filtering
//!
//! This crate holds the read-only shelter dataset, the city → district
//! region catalog, the exact-match [`filter_shelters`] routine, and the
//! [`AreaPicker`] state machine that produces an [`AreaSelection`].

pub mod config;
pub mod contact;
pub mod error;
pub mod fixtures;
pub mod models;
pub mod picker;
pub mod region;
pub mod repositories;

pub use config::CatalogConfig;
pub use error::{ShelterError, ShelterResult};
pub use models::{AreaSelection, Located, Shelter, ShelterPage, ShelterQuery, ShelterTag};
pub use picker::{AreaPicker, PickerOutcome};
pub use region::{RegionCatalog, derive_label, filter_shelters};
pub use repositories::ShelterRepository;
