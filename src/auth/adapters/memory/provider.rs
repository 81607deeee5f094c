//! In-memory authentication provider for tests and local runs.

use async_trait::async_trait;
use mockable::{Clock, DefaultClock};
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::auth::{
    domain::{AuthenticatedUser, EmailAddress, Password, UserId},
    ports::{AuthProvider, AuthProviderError, AuthProviderResult},
};

/// Thread-safe in-memory account registry with a single session slot.
#[derive(Clone)]
pub struct InMemoryAuthProvider {
    state: Arc<RwLock<InMemoryAuthState>>,
    clock: Arc<dyn Clock + Send + Sync>,
}

#[derive(Debug, Default)]
struct InMemoryAuthState {
    accounts: HashMap<EmailAddress, Account>,
    session: Option<EmailAddress>,
}

#[derive(Debug, Clone)]
struct Account {
    user: AuthenticatedUser,
    password_digest: [u8; 32],
}

impl InMemoryAuthProvider {
    /// Creates an empty provider stamping registrations with the system
    /// clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(Arc::new(DefaultClock))
    }

    /// Creates an empty provider using the given clock for registration
    /// timestamps.
    #[must_use]
    pub fn with_clock(clock: Arc<dyn Clock + Send + Sync>) -> Self {
        Self {
            state: Arc::new(RwLock::new(InMemoryAuthState::default())),
            clock,
        }
    }
}

impl Default for InMemoryAuthProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for InMemoryAuthProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryAuthProvider").finish_non_exhaustive()
    }
}

fn digest(password: &Password) -> [u8; 32] {
    Sha256::digest(password.expose().as_bytes()).into()
}

fn lock_error(err: impl std::fmt::Display) -> AuthProviderError {
    AuthProviderError::provider(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl AuthProvider for InMemoryAuthProvider {
    async fn current_user(&self) -> AuthProviderResult<Option<AuthenticatedUser>> {
        let state = self.state.read().map_err(lock_error)?;
        let user = state
            .session
            .as_ref()
            .and_then(|email| state.accounts.get(email))
            .map(|account| account.user.clone());
        Ok(user)
    }

    async fn sign_in(
        &self,
        email: &EmailAddress,
        password: &Password,
    ) -> AuthProviderResult<AuthenticatedUser> {
        let mut state = self.state.write().map_err(lock_error)?;
        let user = state
            .accounts
            .get(email)
            .filter(|account| account.password_digest == digest(password))
            .map(|account| account.user.clone())
            .ok_or(AuthProviderError::InvalidCredentials)?;
        state.session = Some(email.clone());
        Ok(user)
    }

    async fn sign_up(
        &self,
        email: &EmailAddress,
        password: &Password,
    ) -> AuthProviderResult<AuthenticatedUser> {
        let mut state = self.state.write().map_err(lock_error)?;
        if state.accounts.contains_key(email) {
            return Err(AuthProviderError::AlreadyRegistered(email.clone()));
        }
        let user = AuthenticatedUser::new(UserId::new(), email.clone(), self.clock.utc());
        state.accounts.insert(
            email.clone(),
            Account {
                user: user.clone(),
                password_digest: digest(password),
            },
        );
        Ok(user)
    }

    async fn sign_out(&self) -> AuthProviderResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        state.session = None;
        Ok(())
    }

    async fn update_password(&self, password: &Password) -> AuthProviderResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        let email = state
            .session
            .clone()
            .ok_or(AuthProviderError::NotSignedIn)?;
        let account = state
            .accounts
            .get_mut(&email)
            .ok_or(AuthProviderError::NotSignedIn)?;
        account.password_digest = digest(password);
        Ok(())
    }
}
