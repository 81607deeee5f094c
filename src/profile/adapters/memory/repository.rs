//! In-memory repository for profile tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::{
    auth::domain::UserId,
    profile::{
        domain::UserProfile,
        ports::{ProfileRepository, ProfileRepositoryError, ProfileRepositoryResult},
    },
};

/// Thread-safe in-memory profile repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProfileRepository {
    profiles: Arc<RwLock<HashMap<UserId, UserProfile>>>,
}

impl InMemoryProfileRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_error(err: impl std::fmt::Display) -> ProfileRepositoryError {
    ProfileRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl ProfileRepository for InMemoryProfileRepository {
    async fn find(&self, id: UserId) -> ProfileRepositoryResult<Option<UserProfile>> {
        let profiles = self.profiles.read().map_err(lock_error)?;
        Ok(profiles.get(&id).cloned())
    }

    async fn ensure(&self, profile: &UserProfile) -> ProfileRepositoryResult<UserProfile> {
        let mut profiles = self.profiles.write().map_err(lock_error)?;
        let stored = profiles
            .entry(profile.id())
            .or_insert_with(|| profile.clone());
        Ok(stored.clone())
    }

    async fn update(&self, profile: &UserProfile) -> ProfileRepositoryResult<()> {
        let mut profiles = self.profiles.write().map_err(lock_error)?;
        let stored = profiles
            .get_mut(&profile.id())
            .ok_or(ProfileRepositoryError::NotFound(profile.id()))?;
        *stored = profile.clone();
        Ok(())
    }
}
