//! Application services for profiles.

mod profile;

pub use profile::{ProfileOverview, ProfileService, ProfileServiceError, ProfileServiceResult};
