//! Area picker state machine
//!
//! Tracks which city is expanded in the collapsible region list (at most one)
//! and the committed [`AreaSelection`]. The two are independent: expanding a
//! city never changes the selection, and selecting never changes expansion.
//! Every successful selection closes the picker.

use std::sync::Arc;
use tracing::{debug, info};

use crate::error::ShelterResult;
use crate::models::AreaSelection;
use crate::region::RegionCatalog;

/// Result of a selection action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerOutcome {
    /// The newly committed selection
    pub selection: AreaSelection,
    /// Whether the caller should dismiss the picker
    pub close_picker: bool,
}

/// A row under an expanded city
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerRow {
    /// "全部{city}": every district of the city
    AllOfCity {
        city: String,
        label: String,
        selected: bool,
    },
    District {
        city: String,
        district: String,
        selected: bool,
    },
}

/// One city header and, when expanded, its rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerSection {
    pub city: String,
    pub expanded: bool,
    /// Whether the committed selection is in this city
    pub selected: bool,
    pub rows: Vec<PickerRow>,
}

/// Collapsible city/district picker
#[derive(Debug, Clone)]
pub struct AreaPicker {
    catalog: Arc<RegionCatalog>,
    expanded: Option<String>,
    selection: AreaSelection,
    open: bool,
}

impl AreaPicker {
    /// Create a closed picker with nothing expanded and no filter
    pub fn new(catalog: Arc<RegionCatalog>) -> Self {
        Self::with_selection(catalog, AreaSelection::all())
    }

    /// Create a closed picker showing an existing selection
    pub fn with_selection(catalog: Arc<RegionCatalog>, selection: AreaSelection) -> Self {
        Self {
            catalog,
            expanded: None,
            selection,
            open: false,
        }
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    /// Dismiss without selecting
    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn expanded_city(&self) -> Option<&str> {
        self.expanded.as_deref()
    }

    pub fn selection(&self) -> &AreaSelection {
        &self.selection
    }

    pub fn label(&self) -> String {
        self.selection.label()
    }

    /// Expand `city`, or collapse it if it is already expanded
    ///
    /// Expanding a city collapses any other.
    pub fn toggle_city(&mut self, city: &str) -> ShelterResult<()> {
        self.catalog.check(city, None)?;

        if self.expanded.as_deref() == Some(city) {
            debug!("Collapsing {}", city);
            self.expanded = None;
        } else {
            debug!("Expanding {}", city);
            self.expanded = Some(city.to_string());
        }

        Ok(())
    }

    /// Select "all regions"
    pub fn select_all(&mut self) -> PickerOutcome {
        self.commit(AreaSelection::all())
    }

    /// Select every district of `city`
    pub fn select_city(&mut self, city: &str) -> ShelterResult<PickerOutcome> {
        self.catalog.check(city, None)?;
        Ok(self.commit(AreaSelection::whole_city(city)))
    }

    /// Select one district of `city`
    pub fn select_district(&mut self, city: &str, district: &str) -> ShelterResult<PickerOutcome> {
        self.catalog.check(city, Some(district))?;
        Ok(self.commit(AreaSelection::city_district(city, district)))
    }

    /// Reset the selection to "no filter" without touching the picker itself
    pub fn clear(&mut self) {
        info!("Clearing area filter");
        self.selection = AreaSelection::all();
    }

    /// Sections in catalog order; only the expanded city carries rows
    pub fn sections(&self) -> Vec<PickerSection> {
        self.catalog
            .regions()
            .iter()
            .map(|region| {
                let city = region.city.as_str();
                let expanded = self.expanded.as_deref() == Some(city);
                let selected = self.selection.city() == Some(city);

                let rows = if expanded {
                    let all_of_city = PickerRow::AllOfCity {
                        city: city.to_string(),
                        label: format!("全部{city}"),
                        selected: selected && self.selection.district().is_none(),
                    };
                    std::iter::once(all_of_city)
                        .chain(region.districts.iter().map(|district| PickerRow::District {
                            city: city.to_string(),
                            district: district.clone(),
                            selected: selected
                                && self.selection.district() == Some(district.as_str()),
                        }))
                        .collect()
                } else {
                    Vec::new()
                };

                PickerSection {
                    city: city.to_string(),
                    expanded,
                    selected,
                    rows,
                }
            })
            .collect()
    }

    fn commit(&mut self, selection: AreaSelection) -> PickerOutcome {
        info!("Area selected: {}", selection.label());
        self.selection = selection.clone();
        self.open = false;

        PickerOutcome {
            selection,
            close_picker: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ShelterError;
    use crate::region::Region;

    fn picker() -> AreaPicker {
        let catalog = RegionCatalog::new(vec![
            Region {
                city: "台北市".to_string(),
                districts: vec!["大安區".to_string(), "信義區".to_string()],
            },
            Region {
                city: "新北市".to_string(),
                districts: vec!["板橋區".to_string()],
            },
        ]);
        AreaPicker::new(Arc::new(catalog))
    }

    #[test]
    fn toggle_expands_then_collapses() {
        let mut picker = picker();
        picker.toggle_city("台北市").unwrap();
        assert_eq!(picker.expanded_city(), Some("台北市"));
        picker.toggle_city("台北市").unwrap();
        assert_eq!(picker.expanded_city(), None);
    }

    #[test]
    fn expanding_another_city_collapses_the_first() {
        let mut picker = picker();
        picker.toggle_city("台北市").unwrap();
        picker.toggle_city("新北市").unwrap();
        assert_eq!(picker.expanded_city(), Some("新北市"));

        let expanded: Vec<_> = picker.sections().into_iter().filter(|s| s.expanded).collect();
        assert_eq!(expanded.len(), 1);
    }

    #[test]
    fn expansion_does_not_change_selection() {
        let mut picker = picker();
        picker.select_district("台北市", "信義區").unwrap();
        picker.toggle_city("新北市").unwrap();
        assert_eq!(
            picker.selection(),
            &AreaSelection::city_district("台北市", "信義區")
        );
    }

    #[test]
    fn each_selection_closes_the_picker() {
        let mut picker = picker();

        picker.open();
        let outcome = picker.select_city("台北市").unwrap();
        assert!(outcome.close_picker);
        assert!(!picker.is_open());
        assert_eq!(outcome.selection, AreaSelection::whole_city("台北市"));

        picker.open();
        let outcome = picker.select_district("台北市", "大安區").unwrap();
        assert!(outcome.close_picker);
        assert_eq!(picker.label(), "台北市・大安區");

        picker.open();
        let outcome = picker.select_all();
        assert!(outcome.close_picker);
        assert!(!picker.is_open());
        assert_eq!(picker.label(), "選擇地區");
    }

    #[test]
    fn unknown_selections_are_rejected_without_side_effects() {
        let mut picker = picker();
        picker.open();
        picker.select_city("台北市").unwrap();
        picker.open();

        assert!(matches!(
            picker.select_city("台中市"),
            Err(ShelterError::UnknownCity(_))
        ));
        assert!(matches!(
            picker.select_district("新北市", "大安區"),
            Err(ShelterError::UnknownDistrict { .. })
        ));
        assert!(picker.toggle_city("台中市").is_err());

        assert!(picker.is_open());
        assert_eq!(picker.selection(), &AreaSelection::whole_city("台北市"));
        assert_eq!(picker.expanded_city(), None);
    }

    #[test]
    fn sections_list_all_of_city_before_districts() {
        let mut picker = picker();
        picker.select_district("台北市", "信義區").unwrap();
        picker.toggle_city("台北市").unwrap();

        let sections = picker.sections();
        assert_eq!(sections.len(), 2);
        assert!(sections[0].selected);
        assert!(sections[1].rows.is_empty());
        assert_eq!(
            sections[0].rows,
            vec![
                PickerRow::AllOfCity {
                    city: "台北市".to_string(),
                    label: "全部台北市".to_string(),
                    selected: false,
                },
                PickerRow::District {
                    city: "台北市".to_string(),
                    district: "大安區".to_string(),
                    selected: false,
                },
                PickerRow::District {
                    city: "台北市".to_string(),
                    district: "信義區".to_string(),
                    selected: true,
                },
            ]
        );
    }

    #[test]
    fn clear_resets_selection_only() {
        let mut picker = picker();
        picker.toggle_city("台北市").unwrap();
        picker.select_city("台北市").unwrap();

        picker.clear();

        assert_eq!(picker.selection(), &AreaSelection::all());
        assert_eq!(picker.expanded_city(), Some("台北市"));
    }
}
