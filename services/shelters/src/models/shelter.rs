//! Shelter model and related functionality

use serde::{Deserialize, Serialize};

/// Anything that sits in a city and district
pub trait Located {
    fn city(&self) -> &str;
    fn district(&self) -> &str;
}

/// Shelter characteristics shown as badges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShelterTag {
    Remote,
    Appointment,
    Small,
    Private,
}

impl ShelterTag {
    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            ShelterTag::Remote => "偏遠",
            ShelterTag::Appointment => "需預約",
            ShelterTag::Small => "小型園",
            ShelterTag::Private => "私人狗園",
        }
    }
}

/// Visiting and volunteering notices
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShelterNotices {
    pub requires_appointment: bool,
    pub allows_drop_in: bool,
    pub accepts_volunteers: bool,
    pub accepts_donations: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_notes: Option<String>,
}

/// Contact handles; any of them may be missing
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
}

/// Shelter entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shelter {
    pub id: String,
    pub name: String,
    pub city: String,
    pub district: String,
    pub short_description: String,
    #[serde(default)]
    pub tags: Vec<ShelterTag>,
    pub description: String,
    pub notices: ShelterNotices,
    #[serde(default)]
    pub contact: ContactInfo,
    /// Volunteer and visiting rules
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rules: Vec<String>,
}

impl Shelter {
    /// Whether every tag in `tags` is present on this shelter
    pub fn has_tags(&self, tags: &[ShelterTag]) -> bool {
        tags.iter().all(|tag| self.tags.contains(tag))
    }
}

impl Located for Shelter {
    fn city(&self) -> &str {
        &self.city
    }

    fn district(&self) -> &str {
        &self.district
    }
}
