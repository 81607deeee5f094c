//! Domain model for user profiles.

mod error;
mod profile;

pub use error::ProfileDomainError;
pub use profile::{FullName, PersistedProfileData, ProfileUpdate, UserProfile};
