//! Tracing subscriber setup shared by every binary

use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crate::error::{CommonError, CommonResult};

/// Install the global tracing subscriber
///
/// `RUST_LOG` takes precedence when set; otherwise `default_level`
/// (e.g. `"info"` or `"auth=debug,shelters=info"`) is used.
pub fn init(default_level: &str) -> CommonResult<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .map_err(|e| CommonError::Telemetry(format!("Invalid log filter: {}", e)))?;

    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| CommonError::Telemetry(format!("Failed to set subscriber: {}", e)))?;

    info!("Logging initialized");
    Ok(())
}
