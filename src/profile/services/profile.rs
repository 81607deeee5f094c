//! Service layer for profile setup, edits and the profile overview.

use crate::{
    auth::domain::{AuthenticatedUser, EmailAddress},
    profile::{
        domain::{FullName, ProfileDomainError, ProfileUpdate, UserProfile},
        ports::{ProfileRepository, ProfileRepositoryError},
    },
    task::{
        domain::TaskStatistics,
        ports::{TaskStore, TaskStoreError},
    },
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for profile operations.
#[derive(Debug, Error)]
pub enum ProfileServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] ProfileDomainError),
    /// Profile repository operation failed.
    #[error(transparent)]
    Repository(#[from] ProfileRepositoryError),
    /// Task statistics could not be loaded.
    #[error("failed to load task statistics: {0}")]
    Statistics(#[source] TaskStoreError),
}

/// Result type for profile service operations.
pub type ProfileServiceResult<T> = Result<T, ProfileServiceError>;

/// Everything the profile page shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileOverview {
    /// Stored profile.
    pub profile: UserProfile,
    /// Account email address.
    pub email: EmailAddress,
    /// Account registration time.
    pub member_since: DateTime<Utc>,
    /// Counts over all of the user's tasks.
    pub statistics: TaskStatistics,
}

/// Profile orchestration service.
#[derive(Clone)]
pub struct ProfileService<P, T, C>
where
    P: ProfileRepository,
    T: TaskStore,
    C: Clock + Send + Sync,
{
    profiles: Arc<P>,
    tasks: Arc<T>,
    clock: Arc<C>,
}

impl<P, T, C> ProfileService<P, T, C>
where
    P: ProfileRepository,
    T: TaskStore,
    C: Clock + Send + Sync,
{
    /// Creates a new profile service.
    #[must_use]
    pub const fn new(profiles: Arc<P>, tasks: Arc<T>, clock: Arc<C>) -> Self {
        Self {
            profiles,
            tasks,
            clock,
        }
    }

    /// Returns the user's profile, creating it with `fullname` if absent.
    ///
    /// An existing profile is returned unchanged, whatever `fullname` says.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileServiceError`] when the name is invalid or the
    /// repository fails.
    pub async fn ensure_profile(
        &self,
        user: &AuthenticatedUser,
        fullname: &str,
    ) -> ProfileServiceResult<UserProfile> {
        let candidate = UserProfile::new(user, FullName::new(fullname)?, &*self.clock);
        Ok(self.profiles.ensure(&candidate).await?)
    }

    /// Applies a partial profile update.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileServiceError::Repository`] with
    /// [`ProfileRepositoryError::NotFound`] when the user has no profile,
    /// or [`ProfileServiceError::Domain`] for an invalid update.
    pub async fn update_profile(
        &self,
        user: &AuthenticatedUser,
        update: &ProfileUpdate,
    ) -> ProfileServiceResult<UserProfile> {
        let mut profile = self
            .profiles
            .find(user.id())
            .await?
            .ok_or(ProfileRepositoryError::NotFound(user.id()))?;
        profile.apply(update, &*self.clock)?;
        self.profiles.update(&profile).await?;
        Ok(profile)
    }

    /// Builds the profile page view: ensured profile, account details and
    /// task statistics.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileServiceError`] when the profile or the task list
    /// cannot be read.
    pub async fn overview(&self, user: &AuthenticatedUser) -> ProfileServiceResult<ProfileOverview> {
        let profile = self.ensure_profile(user, "").await?;
        let tasks = self
            .tasks
            .list(user.id())
            .await
            .map_err(ProfileServiceError::Statistics)?;

        Ok(ProfileOverview {
            profile,
            email: user.email().clone(),
            member_since: user.created_at(),
            statistics: TaskStatistics::from_tasks(&tasks),
        })
    }
}
