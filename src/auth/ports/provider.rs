//! Authentication provider port.

use crate::auth::domain::{AuthenticatedUser, EmailAddress, Password};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for authentication provider operations.
pub type AuthProviderResult<T> = Result<T, AuthProviderError>;

/// Opaque capability provider for identity and credentials.
///
/// Implementations hold the session; taskdeck never stores credentials
/// itself.
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Returns the user bound to the current session, if any.
    async fn current_user(&self) -> AuthProviderResult<Option<AuthenticatedUser>>;

    /// Signs in with an email address and password and binds the session.
    ///
    /// # Errors
    ///
    /// Returns [`AuthProviderError::InvalidCredentials`] when the pair is not
    /// recognised.
    async fn sign_in(
        &self,
        email: &EmailAddress,
        password: &Password,
    ) -> AuthProviderResult<AuthenticatedUser>;

    /// Registers a new account. The session is not bound.
    ///
    /// # Errors
    ///
    /// Returns [`AuthProviderError::AlreadyRegistered`] when the address is
    /// taken.
    async fn sign_up(
        &self,
        email: &EmailAddress,
        password: &Password,
    ) -> AuthProviderResult<AuthenticatedUser>;

    /// Clears the current session. Signing out twice is not an error.
    async fn sign_out(&self) -> AuthProviderResult<()>;

    /// Replaces the password of the signed-in user.
    ///
    /// # Errors
    ///
    /// Returns [`AuthProviderError::NotSignedIn`] without a session.
    async fn update_password(&self, password: &Password) -> AuthProviderResult<()>;
}

/// Errors returned by authentication providers.
#[derive(Debug, Clone, Error)]
pub enum AuthProviderError {
    /// The email and password pair was rejected.
    #[error("invalid login credentials")]
    InvalidCredentials,

    /// An account already exists for the address.
    #[error("an account is already registered for {0}")]
    AlreadyRegistered(EmailAddress),

    /// The operation requires a signed-in user.
    #[error("no user is signed in")]
    NotSignedIn,

    /// Provider or transport failure.
    #[error("authentication provider error: {0}")]
    Provider(Arc<dyn std::error::Error + Send + Sync>),
}

impl AuthProviderError {
    /// Wraps a provider-side error.
    pub fn provider(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Provider(Arc::new(err))
    }
}
