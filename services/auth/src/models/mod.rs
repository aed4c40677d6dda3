//! Authentication service models

pub mod credential;
pub mod session;
pub mod user;

// Re-export for convenience
pub use credential::{CredentialEntry, LoginCredentials};
pub use session::{AuthSession, SessionState, SessionToken};
pub use user::User;
