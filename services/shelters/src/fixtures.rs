//! Bundled seed data: the Taiwan region catalog and the sample shelters

use crate::error::ShelterResult;
use crate::models::Shelter;
use crate::region::RegionCatalog;

const REGIONS_JSON: &str = include_str!("../data/regions.json");
const SHELTERS_JSON: &str = include_str!("../data/shelters.json");

/// The six special municipalities and their districts
pub fn region_catalog() -> ShelterResult<RegionCatalog> {
    RegionCatalog::from_json(REGIONS_JSON)
}

/// The sample shelter dataset
pub fn shelters() -> ShelterResult<Vec<Shelter>> {
    Ok(serde_json::from_str(SHELTERS_JSON)?)
}
