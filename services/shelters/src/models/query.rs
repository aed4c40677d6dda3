//! Catalog query and paging models

use serde::{Deserialize, Serialize};

use crate::models::{AreaSelection, Shelter, ShelterTag};

/// Query parameters for shelter listing
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ShelterQuery {
    /// Region filter
    #[serde(flatten)]
    pub area: AreaSelection,
    /// Shelters must carry all of these tags
    pub tags: Vec<ShelterTag>,
    /// Page number (1-based)
    pub page: Option<u32>,
    /// Number of items per page
    pub limit: Option<u32>,
}

impl ShelterQuery {
    pub fn for_area(area: AreaSelection) -> Self {
        Self {
            area,
            ..Self::default()
        }
    }
}

/// One page of a shelter listing
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShelterPage {
    pub items: Vec<Shelter>,
    pub total: usize,
    pub page: u32,
    pub limit: u32,
    pub has_more: bool,
}
