//! In-memory authentication provider.

mod provider;

pub use provider::InMemoryAuthProvider;
