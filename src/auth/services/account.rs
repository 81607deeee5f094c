//! Service layer for sign-up, sign-in, sign-out and password changes.

use crate::{
    auth::{
        domain::{AuthDomainError, AuthenticatedUser, EmailAddress, Password, SignUpRequest},
        ports::{AuthProvider, AuthProviderError},
    },
    profile::{
        domain::{FullName, ProfileDomainError, UserProfile},
        ports::{ProfileRepository, ProfileRepositoryError},
    },
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Service-level errors for account operations.
#[derive(Debug, Error)]
pub enum AccountError {
    /// Credential validation failed; nothing was sent to the provider.
    #[error(transparent)]
    Validation(#[from] AuthDomainError),

    /// Profile input validation failed; nothing was sent to the provider.
    #[error(transparent)]
    Profile(#[from] ProfileDomainError),

    /// The authentication provider rejected the request.
    #[error(transparent)]
    Provider(#[from] AuthProviderError),

    /// No user session is resolved.
    #[error("sign in to continue")]
    NotAuthenticated,

    /// The account exists but its profile could not be stored.
    #[error("account {} was created but profile setup failed: {source}", user.email())]
    ProfileSetup {
        /// The authenticated account.
        user: Box<AuthenticatedUser>,
        /// Repository failure.
        #[source]
        source: ProfileRepositoryError,
    },
}

/// Result type for account service operations.
pub type AccountResult<T> = Result<T, AccountError>;

/// Account orchestration service.
#[derive(Clone)]
pub struct AccountService<A, P, C>
where
    A: AuthProvider,
    P: ProfileRepository,
    C: Clock + Send + Sync,
{
    provider: Arc<A>,
    profiles: Arc<P>,
    clock: Arc<C>,
}

impl<A, P, C> AccountService<A, P, C>
where
    A: AuthProvider,
    P: ProfileRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new account service.
    #[must_use]
    pub const fn new(provider: Arc<A>, profiles: Arc<P>, clock: Arc<C>) -> Self {
        Self {
            provider,
            profiles,
            clock,
        }
    }

    /// Registers an account and stores its profile.
    ///
    /// The user is not signed in afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`AccountError::Validation`] or [`AccountError::Profile`]
    /// before contacting the provider, [`AccountError::Provider`] when
    /// registration fails, or [`AccountError::ProfileSetup`] when the account
    /// was created but its profile was not.
    pub async fn sign_up(&self, request: &SignUpRequest) -> AccountResult<AuthenticatedUser> {
        let (email, password) = request.validate()?;
        let fullname = FullName::new(request.fullname())?;

        let user = self.provider.sign_up(&email, &password).await?;
        info!(user_id = %user.id(), "account registered");

        self.store_profile(&user, fullname).await?;
        Ok(user)
    }

    /// Signs in and makes sure the user has a profile.
    ///
    /// # Errors
    ///
    /// Returns [`AccountError::Validation`] for blank input,
    /// [`AccountError::Provider`] for rejected credentials, or
    /// [`AccountError::ProfileSetup`] when the profile cannot be ensured.
    pub async fn sign_in(&self, email: &str, password: &str) -> AccountResult<AuthenticatedUser> {
        let address = EmailAddress::new(email)?;
        let secret = Password::entered(password)?;

        let user = self.provider.sign_in(&address, &secret).await?;
        info!(user_id = %user.id(), "user signed in");

        self.store_profile(&user, FullName::default()).await?;
        Ok(user)
    }

    /// Ends the current session.
    ///
    /// # Errors
    ///
    /// Returns [`AccountError::Provider`] when the provider fails.
    pub async fn sign_out(&self) -> AccountResult<()> {
        self.provider.sign_out().await?;
        info!("user signed out");
        Ok(())
    }

    /// Replaces the signed-in user's password.
    ///
    /// # Errors
    ///
    /// Returns [`AccountError::NotAuthenticated`] without a session,
    /// [`AccountError::Validation`] for mismatched or short passwords, or
    /// [`AccountError::Provider`] when the provider rejects the change.
    pub async fn change_password(&self, password: &str, confirmation: &str) -> AccountResult<()> {
        let user = self.require_user().await?;
        let secret = Password::confirmed(password, confirmation)?;
        self.provider.update_password(&secret).await?;
        info!(user_id = %user.id(), "password updated");
        Ok(())
    }

    /// Returns the signed-in user.
    ///
    /// # Errors
    ///
    /// Returns [`AccountError::NotAuthenticated`] when no session is
    /// resolved; callers redirect to sign-in.
    pub async fn require_user(&self) -> AccountResult<AuthenticatedUser> {
        self.provider
            .current_user()
            .await?
            .ok_or(AccountError::NotAuthenticated)
    }

    async fn store_profile(
        &self,
        user: &AuthenticatedUser,
        fullname: FullName,
    ) -> AccountResult<UserProfile> {
        let candidate = UserProfile::new(user, fullname, &*self.clock);
        self.profiles.ensure(&candidate).await.map_err(|source| {
            warn!(user_id = %user.id(), error = %source, "profile setup failed");
            AccountError::ProfileSetup {
                user: Box::new(user.clone()),
                source,
            }
        })
    }
}
