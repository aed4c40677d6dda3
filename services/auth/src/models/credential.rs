//! Credential entry model and related functionality

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::models::User;

/// Stored credential: an email, the owning user id, and an Argon2 PHC hash
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialEntry {
    pub user_id: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl CredentialEntry {
    /// Create an entry for a new user with a freshly generated id
    pub fn new(email: impl Into<String>, password_hash: String) -> Self {
        Self {
            user_id: Uuid::new_v4().to_string(),
            email: email.into(),
            password_hash,
            created_at: Utc::now(),
        }
    }

    /// Public identity owning this entry
    pub fn user(&self) -> User {
        User {
            id: self.user_id.clone(),
            email: self.email.clone(),
        }
    }
}

/// Email/password pair ready to be submitted to the session store
#[derive(Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for LoginCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginCredentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}
