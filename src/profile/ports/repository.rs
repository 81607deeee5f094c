//! Repository port for profile persistence.

use crate::{auth::domain::UserId, profile::domain::UserProfile};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for profile repository operations.
pub type ProfileRepositoryResult<T> = Result<T, ProfileRepositoryError>;

/// Profile persistence contract.
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Finds the profile of the given user.
    ///
    /// Returns `None` when no profile has been created yet.
    async fn find(&self, id: UserId) -> ProfileRepositoryResult<Option<UserProfile>>;

    /// Inserts the profile unless one already exists for its user, and
    /// returns the stored row.
    ///
    /// Calling this repeatedly, or from concurrent sessions, yields the first
    /// stored profile every time.
    async fn ensure(&self, profile: &UserProfile) -> ProfileRepositoryResult<UserProfile>;

    /// Persists changes to an existing profile.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileRepositoryError::NotFound`] when no profile exists
    /// for the user.
    async fn update(&self, profile: &UserProfile) -> ProfileRepositoryResult<()>;
}

/// Errors returned by profile repository implementations.
#[derive(Debug, Clone, Error)]
pub enum ProfileRepositoryError {
    /// The profile was not found.
    #[error("profile not found for user {0}")]
    NotFound(UserId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl ProfileRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
