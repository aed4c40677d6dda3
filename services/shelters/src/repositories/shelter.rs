//! In-memory shelter repository

use common::SimulatedLatency;
use std::sync::Arc;
use tracing::{info, warn};

use crate::config::CatalogConfig;
use crate::error::{ShelterError, ShelterResult};
use crate::models::{Shelter, ShelterPage, ShelterQuery};

/// Shelter repository over a fixed, pre-seeded dataset
#[derive(Debug, Clone)]
pub struct ShelterRepository {
    shelters: Arc<Vec<Shelter>>,
    list_latency: SimulatedLatency,
    lookup_latency: SimulatedLatency,
    default_page_size: u32,
    max_page_size: u32,
}

impl ShelterRepository {
    /// Create a new shelter repository
    pub fn new(shelters: Vec<Shelter>, config: &CatalogConfig) -> Self {
        Self {
            shelters: Arc::new(shelters),
            list_latency: SimulatedLatency::from_millis(config.list_latency_ms),
            lookup_latency: SimulatedLatency::from_millis(config.lookup_latency_ms),
            default_page_size: config.default_page_size.max(1),
            max_page_size: config.max_page_size.max(1),
        }
    }

    /// Every shelter, in dataset order
    pub fn all(&self) -> &[Shelter] {
        &self.shelters
    }

    /// Get shelters with region/tag filtering and pagination
    pub async fn list(&self, query: &ShelterQuery) -> ShelterResult<ShelterPage> {
        self.list_latency.wait().await;

        let page = query.page.unwrap_or(1).max(1);
        let limit = query
            .limit
            .unwrap_or(self.default_page_size)
            .clamp(1, self.max_page_size);

        let filtered: Vec<&Shelter> = self
            .shelters
            .iter()
            .filter(|shelter| query.area.matches(*shelter) && shelter.has_tags(&query.tags))
            .collect();

        let total = filtered.len();
        let start = (page as usize - 1).saturating_mul(limit as usize);
        let end = start.saturating_add(limit as usize);
        let items = filtered
            .into_iter()
            .skip(start)
            .take(limit as usize)
            .cloned()
            .collect();

        info!(
            "Listed shelters for {} (page {}, limit {}): {} total",
            query.area.label(),
            page,
            limit,
            total
        );

        Ok(ShelterPage {
            items,
            total,
            page,
            limit,
            has_more: end < total,
        })
    }

    /// Get a shelter by ID
    pub async fn get_by_id(&self, id: &str) -> ShelterResult<Shelter> {
        self.lookup_latency.wait().await;

        self.shelters
            .iter()
            .find(|shelter| shelter.id == id)
            .cloned()
            .ok_or_else(|| {
                warn!("Shelter not found: {}", id);
                ShelterError::NotFound(id.to_string())
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AreaSelection, ContactInfo, ShelterNotices, ShelterTag};
    use tokio_test::assert_err;

    fn shelter(id: &str, city: &str, district: &str, tags: Vec<ShelterTag>) -> Shelter {
        Shelter {
            id: id.to_string(),
            name: format!("Shelter {id}"),
            city: city.to_string(),
            district: district.to_string(),
            short_description: String::new(),
            tags,
            description: String::new(),
            notices: ShelterNotices {
                requires_appointment: false,
                allows_drop_in: true,
                accepts_volunteers: true,
                accepts_donations: true,
                special_notes: None,
            },
            contact: ContactInfo::default(),
            rules: Vec::new(),
        }
    }

    fn repository() -> ShelterRepository {
        let shelters = (1..=25)
            .map(|i| {
                let city = if i % 2 == 0 { "台北市" } else { "新北市" };
                let tags = if i % 5 == 0 { vec![ShelterTag::Remote] } else { vec![] };
                shelter(&i.to_string(), city, "某區", tags)
            })
            .collect();
        ShelterRepository::new(shelters, &CatalogConfig::instant())
    }

    #[tokio::test]
    async fn default_page_uses_configured_size() {
        let page = repository().list(&ShelterQuery::default()).await.unwrap();
        assert_eq!(page.total, 25);
        assert_eq!(page.page, 1);
        assert_eq!(page.limit, 10);
        assert_eq!(page.items.len(), 10);
        assert!(page.has_more);
    }

    #[tokio::test]
    async fn last_page_has_no_more() {
        let query = ShelterQuery {
            page: Some(3),
            ..ShelterQuery::default()
        };
        let page = repository().list(&query).await.unwrap();
        assert_eq!(page.items.len(), 5);
        assert_eq!(page.items[0].id, "21");
        assert!(!page.has_more);
    }

    #[tokio::test]
    async fn page_and_limit_are_clamped() {
        let query = ShelterQuery {
            page: Some(0),
            limit: Some(1000),
            ..ShelterQuery::default()
        };
        let page = repository().list(&query).await.unwrap();
        assert_eq!(page.page, 1);
        assert_eq!(page.limit, 100);
        assert_eq!(page.items.len(), 25);

        let query = ShelterQuery {
            limit: Some(0),
            ..ShelterQuery::default()
        };
        assert_eq!(repository().list(&query).await.unwrap().limit, 1);
    }

    #[tokio::test]
    async fn page_past_the_end_is_empty() {
        let query = ShelterQuery {
            page: Some(9),
            ..ShelterQuery::default()
        };
        let page = repository().list(&query).await.unwrap();
        assert!(page.items.is_empty());
        assert_eq!(page.total, 25);
        assert!(!page.has_more);
    }

    #[tokio::test]
    async fn area_and_tags_filter_before_paging() {
        let query = ShelterQuery {
            area: AreaSelection::whole_city("台北市"),
            tags: vec![ShelterTag::Remote],
            ..ShelterQuery::default()
        };
        let page = repository().list(&query).await.unwrap();
        let ids: Vec<_> = page.items.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["10", "20"]);
        assert_eq!(page.total, 2);
    }

    #[tokio::test]
    async fn missing_shelter_is_not_found() {
        let err = assert_err!(repository().get_by_id("404").await);
        assert!(matches!(err, ShelterError::NotFound(id) if id == "404"));
    }
}
