//! Committed city/district filter

use serde::{Deserialize, Serialize};

use crate::error::ShelterError;
use crate::models::Located;

/// Label shown when no area is selected
pub const PLACEHOLDER_LABEL: &str = "選擇地區";

/// Separator between city and district in labels
pub const LABEL_SEPARATOR: char = '・';

/// The city/district filter applied to the shelter list
///
/// A district is never present without its city; the constructors are the
/// only way to build a selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawAreaSelection")]
pub struct AreaSelection {
    city: Option<String>,
    district: Option<String>,
}

#[derive(Deserialize)]
struct RawAreaSelection {
    #[serde(default)]
    city: Option<String>,
    #[serde(default)]
    district: Option<String>,
}

impl TryFrom<RawAreaSelection> for AreaSelection {
    type Error = ShelterError;

    fn try_from(raw: RawAreaSelection) -> Result<Self, Self::Error> {
        match (raw.city, raw.district) {
            (None, None) => Ok(Self::all()),
            (Some(city), None) => Ok(Self::whole_city(city)),
            (Some(city), Some(district)) => Ok(Self::city_district(city, district)),
            (None, Some(district)) => Err(ShelterError::DistrictWithoutCity(district)),
        }
    }
}

impl AreaSelection {
    /// No filter
    pub fn all() -> Self {
        Self::default()
    }

    /// Every district of `city`
    pub fn whole_city(city: impl Into<String>) -> Self {
        Self {
            city: Some(city.into()),
            district: None,
        }
    }

    /// One district of `city`
    pub fn city_district(city: impl Into<String>, district: impl Into<String>) -> Self {
        Self {
            city: Some(city.into()),
            district: Some(district.into()),
        }
    }

    pub fn city(&self) -> Option<&str> {
        self.city.as_deref()
    }

    pub fn district(&self) -> Option<&str> {
        self.district.as_deref()
    }

    /// Whether any filter is applied
    pub fn is_filtered(&self) -> bool {
        self.city.is_some()
    }

    /// Exact match on city, then on district when one is selected
    pub fn matches<T: Located + ?Sized>(&self, item: &T) -> bool {
        let Some(city) = self.city.as_deref() else {
            return true;
        };
        if item.city() != city {
            return false;
        }
        self.district
            .as_deref()
            .is_none_or(|district| item.district() == district)
    }

    /// Button label: `city・district`, `city`, or the placeholder
    pub fn label(&self) -> String {
        match (self.city.as_deref(), self.district.as_deref()) {
            (Some(city), Some(district)) => format!("{city}{LABEL_SEPARATOR}{district}"),
            (Some(city), None) => city.to_string(),
            _ => PLACEHOLDER_LABEL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(AreaSelection::all(), "選擇地區")]
    #[case(AreaSelection::whole_city("台北市"), "台北市")]
    #[case(AreaSelection::city_district("台北市", "信義區"), "台北市・信義區")]
    fn label_prefers_district(#[case] selection: AreaSelection, #[case] expected: &str) {
        assert_eq!(selection.label(), expected);
    }

    #[test]
    fn only_a_city_counts_as_filtered() {
        assert!(!AreaSelection::all().is_filtered());
        assert!(AreaSelection::whole_city("台北市").is_filtered());
    }

    #[test]
    fn deserialize_rejects_district_without_city() {
        let err = serde_json::from_str::<AreaSelection>(r#"{"district":"信義區"}"#).unwrap_err();
        assert!(err.to_string().contains("without a city"));
    }

    #[test]
    fn deserialize_accepts_valid_shapes() {
        let all: AreaSelection = serde_json::from_str("{}").unwrap();
        assert_eq!(all, AreaSelection::all());

        let district: AreaSelection =
            serde_json::from_str(r#"{"city":"台北市","district":"信義區"}"#).unwrap();
        assert_eq!(district, AreaSelection::city_district("台北市", "信義區"));
    }
}
