//! Common library for the shelter directory
//!
//! This crate provides shared functionality used by the authentication and
//! shelter services, including layered settings, logging setup, error
//! handling, and the simulated round-trip latency used by the in-memory
//! backends.
//!
//! ```rust,no_run
//! use common::{settings, telemetry};
//! use serde::Deserialize;
//!
//! #[derive(Debug, Default, Deserialize)]
//! #[serde(default)]
//! struct Settings {
//!     level: String,
//! }
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let settings: Settings = settings::load("directory", "DIRECTORY")?;
//!     telemetry::init(&settings.level)?;
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod latency;
pub mod settings;
pub mod telemetry;

pub use error::{CommonError, CommonResult};
pub use latency::SimulatedLatency;
