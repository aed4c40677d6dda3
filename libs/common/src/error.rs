//! Custom error types for the common library
//!
//! This module defines the errors raised while bootstrapping a service:
//! loading configuration and installing the tracing subscriber.

use config::ConfigError;
use thiserror::Error;

/// Custom error type for service bootstrap operations
#[derive(Error, Debug)]
pub enum CommonError {
    /// Configuration could not be read or deserialized
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigError),

    /// The global tracing subscriber could not be installed
    #[error("Telemetry error: {0}")]
    Telemetry(String),
}

/// Type alias for Result with CommonError
pub type CommonResult<T> = Result<T, CommonError>;
