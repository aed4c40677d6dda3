//! Layered configuration loading
//!
//! Settings are resolved from three layers, later ones winning:
//! the struct's own `Default` values, an optional TOML file, and
//! environment variables.

use config::{Config, Environment, File, FileFormat};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::CommonResult;

/// Separator between nested sections in environment variable names
pub const ENV_SECTION_SEPARATOR: &str = "__";

/// Load settings of type `T`
///
/// # Arguments
///
/// * `file` - Path or stem of an optional TOML file (e.g. `"directory"` reads `directory.toml`)
/// * `env_prefix` - Prefix for environment overrides (e.g. `DIRECTORY` reads
///   `DIRECTORY_AUTH__SIMULATED_LATENCY_MS` into `auth.simulated_latency_ms`)
///
/// Fields missing from every layer fall back to `T`'s serde defaults, so `T`
/// should be annotated with `#[serde(default)]`.
pub fn load<T: DeserializeOwned>(file: &str, env_prefix: &str) -> CommonResult<T> {
    debug!("Loading settings from {} with prefix {}", file, env_prefix);

    let config = Config::builder()
        .add_source(
            File::with_name(file)
                .format(FileFormat::Toml)
                .required(false),
        )
        .add_source(
            Environment::with_prefix(env_prefix)
                .prefix_separator("_")
                .separator(ENV_SECTION_SEPARATOR)
                .try_parsing(true),
        )
        .build()?;

    Ok(config.try_deserialize()?)
}
