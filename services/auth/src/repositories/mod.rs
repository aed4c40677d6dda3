//! Credential storage behind a swappable port

pub mod credential;

pub use credential::{CredentialDirectory, InMemoryCredentialDirectory};
