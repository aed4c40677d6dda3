//! Authentication for the shelter directory client
//!
//! A [`SessionStore`] holds the single session of a running client and
//! verifies logins and registrations against a [`CredentialDirectory`].
//! Passwords are stored only as salted Argon2id hashes and session tokens
//! come from the operating system's CSPRNG.
//!
//! ```rust,no_run
//! use auth::{AuthConfig, SessionStore};
//!
//! # async fn demo() -> Result<(), auth::AuthError> {
//! let store = SessionStore::with_seeded_directory(&AuthConfig::default()).await?;
//! let user = store.login("test@example.com", "password123").await?;
//! assert_eq!(store.current_user(), Some(user));
//! store.logout();
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod fixtures;
pub mod models;
pub mod password;
pub mod repositories;
pub mod store;
pub mod token;
pub mod validation;

pub use config::AuthConfig;
pub use error::{AuthError, AuthResult, DirectoryError};
pub use models::{AuthSession, CredentialEntry, LoginCredentials, SessionState, SessionToken, User};
pub use repositories::{CredentialDirectory, InMemoryCredentialDirectory};
pub use store::SessionStore;
