//! User model

use serde::{Deserialize, Serialize};

/// Authenticated identity; `id` is opaque
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
}
