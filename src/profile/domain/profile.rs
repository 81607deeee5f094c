//! User profile aggregate.

use super::ProfileDomainError;
use crate::auth::domain::{AuthenticatedUser, EmailAddress, UserId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Trimmed display name; may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FullName(String);

impl FullName {
    /// Maximum name length in characters.
    pub const MAX_CHARS: usize = 200;

    /// Creates a validated name, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileDomainError::FullNameTooLong`] when the trimmed name
    /// exceeds [`Self::MAX_CHARS`].
    pub fn new(value: &str) -> Result<Self, ProfileDomainError> {
        let trimmed = value.trim();
        let actual = trimmed.chars().count();
        if actual > Self::MAX_CHARS {
            return Err(ProfileDomainError::FullNameTooLong {
                max: Self::MAX_CHARS,
                actual,
            });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the name as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Profile row keyed by the owning user's identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    id: UserId,
    email: EmailAddress,
    fullname: FullName,
    avatar_url: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedProfileData {
    /// Owning user identifier.
    pub id: UserId,
    /// Account email address.
    pub email: EmailAddress,
    /// Display name, possibly empty.
    pub fullname: FullName,
    /// Optional avatar location.
    pub avatar_url: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Latest update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl UserProfile {
    /// Creates a profile for a freshly resolved user.
    #[must_use]
    pub fn new(user: &AuthenticatedUser, fullname: FullName, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        Self {
            id: user.id(),
            email: user.email().clone(),
            fullname,
            avatar_url: None,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Reconstructs a profile from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedProfileData) -> Self {
        Self {
            id: data.id,
            email: data.email,
            fullname: data.fullname,
            avatar_url: data.avatar_url,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the owning user identifier.
    #[must_use]
    pub const fn id(&self) -> UserId {
        self.id
    }

    /// Returns the account email address.
    #[must_use]
    pub const fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Returns the display name; empty when none was given.
    #[must_use]
    pub fn fullname(&self) -> &str {
        self.fullname.as_str()
    }

    /// Returns the avatar location, if any.
    #[must_use]
    pub fn avatar_url(&self) -> Option<&str> {
        self.avatar_url.as_deref()
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest update timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns the avatar initial: the first letter of a non-blank full
    /// name, else of the email address, uppercased; `?` otherwise.
    #[must_use]
    pub fn initials(&self) -> String {
        let source = if self.fullname.as_str().is_empty() {
            self.email.as_str()
        } else {
            self.fullname.as_str()
        };
        source
            .chars()
            .next()
            .map_or_else(|| "?".to_owned(), |first| first.to_uppercase().collect())
    }

    /// Applies a partial update and stamps `updated_at`.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileDomainError::EmptyUpdate`] when the update carries no
    /// fields, or [`ProfileDomainError::FullNameTooLong`] for an oversized
    /// name. The profile is left untouched on error.
    pub fn apply(
        &mut self,
        update: &ProfileUpdate,
        clock: &impl Clock,
    ) -> Result<(), ProfileDomainError> {
        if update.is_empty() {
            return Err(ProfileDomainError::EmptyUpdate);
        }
        let fullname = update
            .fullname
            .as_deref()
            .map(FullName::new)
            .transpose()?;
        if let Some(name) = fullname {
            self.fullname = name;
        }
        if let Some(avatar_url) = &update.avatar_url {
            self.avatar_url = Some(avatar_url.trim().to_owned()).filter(|url| !url.is_empty());
        }
        self.updated_at = clock.utc();
        Ok(())
    }
}

/// Partial profile changes submitted from the profile form.
///
/// A blank avatar URL clears the stored avatar.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileUpdate {
    fullname: Option<String>,
    avatar_url: Option<String>,
}

impl ProfileUpdate {
    /// Creates an empty update.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the new display name.
    #[must_use]
    pub fn with_fullname(mut self, fullname: impl Into<String>) -> Self {
        self.fullname = Some(fullname.into());
        self
    }

    /// Sets the new avatar location.
    #[must_use]
    pub fn with_avatar_url(mut self, avatar_url: impl Into<String>) -> Self {
        self.avatar_url = Some(avatar_url.into());
        self
    }

    /// Returns `true` when no field is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.fullname.is_none() && self.avatar_url.is_none()
    }
}
