//! Shelter catalog configuration

use serde::Deserialize;

/// Configuration for the in-memory shelter catalog
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Delay before a list query completes (default: 500)
    pub list_latency_ms: u64,
    /// Delay before a detail lookup completes (default: 300)
    pub lookup_latency_ms: u64,
    /// Page size used when a query gives none (default: 10)
    pub default_page_size: u32,
    /// Largest page size a query may ask for (default: 100)
    pub max_page_size: u32,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            list_latency_ms: 500,
            lookup_latency_ms: 300,
            default_page_size: 10,
            max_page_size: 100,
        }
    }
}

impl CatalogConfig {
    /// Default paging without any simulated latency
    pub fn instant() -> Self {
        Self {
            list_latency_ms: 0,
            lookup_latency_ms: 0,
            ..Self::default()
        }
    }
}
