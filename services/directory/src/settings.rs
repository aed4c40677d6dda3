//! Settings for the directory command line

use auth::AuthConfig;
use serde::Deserialize;
use shelters::CatalogConfig;

/// Default settings file stem (`directory.toml`)
pub const SETTINGS_FILE: &str = "directory";

/// Environment variable prefix (`DIRECTORY_AUTH__SIMULATED_LATENCY_MS`, ...)
pub const ENV_PREFIX: &str = "DIRECTORY";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    pub level: String,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub auth: AuthConfig,
    pub catalog: CatalogConfig,
    pub log: LogSettings,
}

impl Settings {
    /// Load from `file` (or `directory.toml`) and `DIRECTORY_*` variables
    pub fn load(file: Option<&str>) -> common::CommonResult<Self> {
        common::settings::load(file.unwrap_or(SETTINGS_FILE), ENV_PREFIX)
    }
}
