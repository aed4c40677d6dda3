//! Session model and related functionality

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::User;

/// Opaque session token
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionToken(String);

impl SessionToken {
    /// Wrap an existing token, e.g. one restored from storage
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SessionToken(<redacted>)")
    }
}

/// An established session. User and token only ever exist together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthSession {
    pub user: User,
    pub token: SessionToken,
    pub established_at: DateTime<Utc>,
}

impl AuthSession {
    pub fn new(user: User, token: SessionToken) -> Self {
        Self {
            user,
            token,
            established_at: Utc::now(),
        }
    }
}

/// Observable state of the session store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    /// No user signed in
    Anonymous,
    /// A login or registration is in flight
    Pending,
    /// A user and token are installed
    Authenticated,
}
