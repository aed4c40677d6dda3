//! Session store: the single authentication slot of a running client
//!
//! The store owns one session and a credential directory. `login` and
//! `register` suspend for the configured latency, during which the store
//! reports itself busy and rejects any second request. Failed requests
//! leave both the session and the directory untouched.

use common::SimulatedLatency;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{PoisonError, RwLock};
use tracing::{info, warn};

use crate::config::AuthConfig;
use crate::error::{AuthError, AuthResult};
use crate::fixtures::SEED_ACCOUNTS;
use crate::models::{AuthSession, CredentialEntry, SessionState, SessionToken, User};
use crate::password::CredentialHasher;
use crate::repositories::{CredentialDirectory, InMemoryCredentialDirectory};
use crate::token::generate_session_token;

/// Authentication state for one client, backed by a credential directory
pub struct SessionStore<D: CredentialDirectory> {
    directory: D,
    hasher: CredentialHasher,
    latency: SimulatedLatency,
    token_bytes: usize,
    /// Verified against on unknown emails so both failure paths cost one Argon2 run
    dummy_hash: String,
    session: RwLock<Option<AuthSession>>,
    busy: AtomicBool,
}

/// Clears the busy flag when the in-flight request finishes, however it ends
struct InFlight<'a> {
    busy: &'a AtomicBool,
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.busy.store(false, Ordering::Release);
    }
}

impl SessionStore<InMemoryCredentialDirectory> {
    /// Create a store over an in-memory directory holding the fixture accounts
    pub async fn with_seeded_directory(config: &AuthConfig) -> AuthResult<Self> {
        let hasher = CredentialHasher::new(config)?;
        let directory = InMemoryCredentialDirectory::seeded(&hasher, SEED_ACCOUNTS).await?;
        Self::with_hasher(directory, hasher, config)
    }
}

impl<D: CredentialDirectory> SessionStore<D> {
    /// Create an anonymous store over `directory`
    pub fn new(directory: D, config: &AuthConfig) -> AuthResult<Self> {
        let hasher = CredentialHasher::new(config)?;
        Self::with_hasher(directory, hasher, config)
    }

    fn with_hasher(
        directory: D,
        hasher: CredentialHasher,
        config: &AuthConfig,
    ) -> AuthResult<Self> {
        let dummy_hash = hasher.hash(generate_session_token(16).as_str())?;

        Ok(Self {
            directory,
            hasher,
            latency: SimulatedLatency::from_millis(config.simulated_latency_ms),
            token_bytes: config.token_bytes,
            dummy_hash,
            session: RwLock::new(None),
            busy: AtomicBool::new(false),
        })
    }

    /// Authenticate against the directory
    ///
    /// Email and password must match an entry exactly; the caller is
    /// expected to have trimmed the email already. On success the session is
    /// replaced wholesale with a fresh token.
    pub async fn login(&self, email: &str, password: &str) -> AuthResult<User> {
        let _in_flight = self.begin()?;
        info!("Login attempt for user: {}", email);

        self.latency.wait().await;

        let Some(entry) = self.directory.find_by_email(email).await? else {
            let _ = self.hasher.verify(password, &self.dummy_hash);
            warn!("Login failed for {}: unknown email", email);
            return Err(AuthError::InvalidCredentials);
        };

        if !self.hasher.verify(password, &entry.password_hash)? {
            warn!("Login failed for {}: password mismatch", email);
            return Err(AuthError::InvalidCredentials);
        }

        let user = entry.user();
        self.establish(user.clone());
        info!("User {} logged in", user.id);

        Ok(user)
    }

    /// Create a credential entry and sign the new user in
    ///
    /// Input validation (non-empty fields, password policy) is the caller's
    /// job; see [`crate::validation`].
    pub async fn register(&self, email: &str, password: &str) -> AuthResult<User> {
        let _in_flight = self.begin()?;
        info!("Registration attempt for email: {}", email);

        self.latency.wait().await;

        if self.directory.exists_by_email(email).await? {
            warn!("Registration rejected for {}: email taken", email);
            return Err(AuthError::EmailAlreadyExists);
        }

        let entry = CredentialEntry::new(email, self.hasher.hash(password)?);
        let user = entry.user();
        // insert re-checks uniqueness atomically; a lost race surfaces as EmailAlreadyExists
        self.directory.insert(entry).await?;

        self.establish(user.clone());
        info!("Registered and logged in user {}", user.id);

        Ok(user)
    }

    /// Drop the current session. Idempotent.
    pub fn logout(&self) {
        let previous = self.write_session().take();
        if let Some(session) = previous {
            info!("User {} logged out", session.user.id);
        }
    }

    /// Install a session directly, e.g. one restored from a persisted token
    ///
    /// The credential directory is not consulted or modified. Rejected with
    /// [`AuthError::OperationInProgress`] while a login or registration is in
    /// flight, since that request would overwrite the installed session.
    pub fn set_auth(&self, user: User, token: SessionToken) -> AuthResult<()> {
        let _in_flight = self.begin()?;
        info!("Installing session for user {}", user.id);
        *self.write_session() = Some(AuthSession::new(user, token));
        Ok(())
    }

    pub fn current_user(&self) -> Option<User> {
        self.read_session().as_ref().map(|s| s.user.clone())
    }

    pub fn token(&self) -> Option<SessionToken> {
        self.read_session().as_ref().map(|s| s.token.clone())
    }

    /// Copy of the whole session, if any
    pub fn snapshot(&self) -> Option<AuthSession> {
        self.read_session().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.read_session().is_some()
    }

    /// Whether a login or registration is in flight
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    pub fn state(&self) -> SessionState {
        if self.is_busy() {
            SessionState::Pending
        } else if self.is_authenticated() {
            SessionState::Authenticated
        } else {
            SessionState::Anonymous
        }
    }

    pub fn directory(&self) -> &D {
        &self.directory
    }

    pub fn hasher(&self) -> &CredentialHasher {
        &self.hasher
    }

    fn begin(&self) -> AuthResult<InFlight<'_>> {
        self.busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| {
                warn!("Rejected authentication request: another one is in flight");
                AuthError::OperationInProgress
            })?;

        Ok(InFlight { busy: &self.busy })
    }

    fn establish(&self, user: User) {
        let token = generate_session_token(self.token_bytes);
        *self.write_session() = Some(AuthSession::new(user, token));
    }

    fn read_session(&self) -> std::sync::RwLockReadGuard<'_, Option<AuthSession>> {
        self.session.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_session(&self) -> std::sync::RwLockWriteGuard<'_, Option<AuthSession>> {
        self.session.write().unwrap_or_else(PoisonError::into_inner)
    }
}
