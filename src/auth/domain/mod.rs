//! Domain model for user identity and credentials.

mod credentials;
mod error;
mod user;

pub use credentials::{Password, SignUpRequest};
pub use error::AuthDomainError;
pub use user::{AuthenticatedUser, EmailAddress, UserId};
