//! Credential directory port and its in-memory adapter

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;

use crate::error::{AuthResult, DirectoryError};
use crate::fixtures::SeedAccount;
use crate::models::{CredentialEntry, User};
use crate::password::CredentialHasher;

/// Lookup and append-only storage of credential entries
///
/// Emails are compared exactly (case-sensitive). Implementations must make
/// `insert` atomic with respect to the uniqueness check.
#[async_trait]
pub trait CredentialDirectory: Send + Sync {
    /// Find the entry registered under `email`
    async fn find_by_email(&self, email: &str) -> Result<Option<CredentialEntry>, DirectoryError>;

    /// Whether any entry is registered under `email`
    async fn exists_by_email(&self, email: &str) -> Result<bool, DirectoryError>;

    /// Append an entry; fails with `DuplicateEmail` if the email is taken
    async fn insert(&self, entry: CredentialEntry) -> Result<(), DirectoryError>;

    /// Number of stored entries
    async fn count(&self) -> Result<usize, DirectoryError>;
}

/// Process-local credential directory
#[derive(Debug, Clone, Default)]
pub struct InMemoryCredentialDirectory {
    entries: Arc<Mutex<HashMap<String, CredentialEntry>>>,
}

impl InMemoryCredentialDirectory {
    /// Create an empty directory
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a directory pre-populated with `accounts`
    pub async fn seeded(hasher: &CredentialHasher, accounts: &[SeedAccount]) -> AuthResult<Self> {
        let directory = Self::new();
        for account in accounts {
            directory.seed(hasher, account).await?;
        }
        Ok(directory)
    }

    /// Hash and insert one fixture account
    pub async fn seed(&self, hasher: &CredentialHasher, account: &SeedAccount) -> AuthResult<User> {
        let entry = CredentialEntry::new(account.email, hasher.hash(account.password)?);
        let user = entry.user();
        self.insert(entry).await?;
        info!("Seeded credential entry for {}", account.email);
        Ok(user)
    }
}

#[async_trait]
impl CredentialDirectory for InMemoryCredentialDirectory {
    async fn find_by_email(&self, email: &str) -> Result<Option<CredentialEntry>, DirectoryError> {
        let entries = self.entries.lock().await;
        Ok(entries.get(email).cloned())
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, DirectoryError> {
        let entries = self.entries.lock().await;
        Ok(entries.contains_key(email))
    }

    async fn insert(&self, entry: CredentialEntry) -> Result<(), DirectoryError> {
        let mut entries = self.entries.lock().await;
        if entries.contains_key(&entry.email) {
            return Err(DirectoryError::DuplicateEmail(entry.email));
        }
        entries.insert(entry.email.clone(), entry);
        Ok(())
    }

    async fn count(&self) -> Result<usize, DirectoryError> {
        Ok(self.entries.lock().await.len())
    }
}
