//! Port contracts for the authentication collaborator.

pub mod provider;

pub use provider::{AuthProvider, AuthProviderError, AuthProviderResult};
