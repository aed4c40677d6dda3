//! Authentication error types

use thiserror::Error;

/// Errors raised by a [`CredentialDirectory`](crate::repositories::CredentialDirectory) backend
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    /// An entry with this email is already stored
    #[error("email already registered: {0}")]
    DuplicateEmail(String),

    /// The backend could not be reached or failed internally
    #[error("credential directory unavailable: {0}")]
    Unavailable(String),
}

/// Errors surfaced by the session store
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// No credential entry matches the email/password pair
    #[error("invalid email or password")]
    InvalidCredentials,

    /// Registration attempted with an email that is already taken
    #[error("email is already registered")]
    EmailAlreadyExists,

    /// A login or registration is already in flight for this session
    #[error("another authentication request is in progress")]
    OperationInProgress,

    /// The credential directory failed
    #[error("credential directory error: {0}")]
    Directory(DirectoryError),

    /// Hashing or hash parsing failed
    #[error("cryptography error: {0}")]
    Crypto(String),
}

impl From<DirectoryError> for AuthError {
    fn from(err: DirectoryError) -> Self {
        match err {
            DirectoryError::DuplicateEmail(_) => AuthError::EmailAlreadyExists,
            other => AuthError::Directory(other),
        }
    }
}

/// Type alias for Result with AuthError
pub type AuthResult<T> = Result<T, AuthError>;
