//! Region catalog and shelter filtering
//!
//! The catalog is a static, ordered mapping from city to districts. Filtering
//! is exact string equality on city and district and keeps input order.

use serde::{Deserialize, Serialize};

use crate::error::{ShelterError, ShelterResult};
use crate::models::{AreaSelection, Located};

/// A city and its districts, in display order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub city: String,
    pub districts: Vec<String>,
}

/// Read-only city → districts reference data
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegionCatalog {
    regions: Vec<Region>,
}

impl RegionCatalog {
    pub fn new(regions: Vec<Region>) -> Self {
        Self { regions }
    }

    /// Parse a JSON array of `{ "city", "districts" }` objects
    pub fn from_json(json: &str) -> ShelterResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    /// City names in catalog order
    pub fn cities(&self) -> impl Iterator<Item = &str> {
        self.regions.iter().map(|region| region.city.as_str())
    }

    /// Districts of `city`, if the city is known
    pub fn districts(&self, city: &str) -> Option<&[String]> {
        self.regions
            .iter()
            .find(|region| region.city == city)
            .map(|region| region.districts.as_slice())
    }

    pub fn contains_city(&self, city: &str) -> bool {
        self.districts(city).is_some()
    }

    /// Check that a city (and optionally one of its districts) exists
    pub fn check(&self, city: &str, district: Option<&str>) -> ShelterResult<()> {
        let districts = self
            .districts(city)
            .ok_or_else(|| ShelterError::UnknownCity(city.to_string()))?;

        match district {
            Some(district) if !districts.iter().any(|d| d == district) => {
                Err(ShelterError::UnknownDistrict {
                    city: city.to_string(),
                    district: district.to_string(),
                })
            }
            _ => Ok(()),
        }
    }
}

/// Shelters matching `selection`, in their original relative order
///
/// With no city selected every shelter is returned.
pub fn filter_shelters<'a, T: Located>(shelters: &'a [T], selection: &AreaSelection) -> Vec<&'a T> {
    shelters
        .iter()
        .filter(|shelter| selection.matches(*shelter))
        .collect()
}

/// Label for the region button
pub fn derive_label(selection: &AreaSelection) -> String {
    selection.label()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Spot {
        city: &'static str,
        district: &'static str,
    }

    impl Located for Spot {
        fn city(&self) -> &str {
            self.city
        }

        fn district(&self) -> &str {
            self.district
        }
    }

    fn spots() -> Vec<Spot> {
        vec![
            Spot { city: "台北市", district: "大安區" },
            Spot { city: "台北市", district: "信義區" },
            Spot { city: "新北市", district: "板橋區" },
        ]
    }

    fn catalog() -> RegionCatalog {
        RegionCatalog::new(vec![Region {
            city: "台北市".to_string(),
            districts: vec!["大安區".to_string(), "信義區".to_string()],
        }])
    }

    #[test]
    fn no_selection_is_identity() {
        let spots = spots();
        let filtered = filter_shelters(&spots, &AreaSelection::all());
        assert_eq!(filtered, spots.iter().collect::<Vec<_>>());
    }

    #[test]
    fn whole_city_keeps_order() {
        let spots = spots();
        let filtered = filter_shelters(&spots, &AreaSelection::whole_city("台北市"));
        assert_eq!(filtered, vec![&spots[0], &spots[1]]);
    }

    #[test]
    fn city_and_district_must_both_match() {
        let spots = spots();
        let filtered = filter_shelters(&spots, &AreaSelection::city_district("台北市", "信義區"));
        assert_eq!(filtered, vec![&spots[1]]);

        // same district name under another city does not match
        let filtered = filter_shelters(&spots, &AreaSelection::city_district("新北市", "信義區"));
        assert!(filtered.is_empty());
    }

    #[test]
    fn no_partial_matching() {
        let spots = spots();
        assert!(filter_shelters(&spots, &AreaSelection::whole_city("台北")).is_empty());
        assert!(filter_shelters(&spots, &AreaSelection::city_district("台北市", "信義")).is_empty());
    }

    #[test]
    fn label_for_district_selection() {
        let selection = AreaSelection::city_district("台北市", "信義區");
        assert_eq!(derive_label(&selection), "台北市・信義區");
    }

    #[test]
    fn check_validates_against_catalog() {
        let catalog = catalog();
        assert!(catalog.check("台北市", None).is_ok());
        assert!(catalog.check("台北市", Some("信義區")).is_ok());
        assert!(matches!(
            catalog.check("新北市", None),
            Err(ShelterError::UnknownCity(_))
        ));
        assert!(matches!(
            catalog.check("台北市", Some("板橋區")),
            Err(ShelterError::UnknownDistrict { .. })
        ));
    }

    #[test]
    fn json_round_preserves_city_order() {
        let catalog = RegionCatalog::from_json(
            r#"[{"city":"新北市","districts":["板橋區"]},{"city":"台北市","districts":["大安區"]}]"#,
        )
        .unwrap();
        assert_eq!(catalog.cities().collect::<Vec<_>>(), vec!["新北市", "台北市"]);
    }
}
