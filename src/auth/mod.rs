//! Authentication boundary for taskdeck.
//!
//! Credential handling is delegated to an external provider behind the
//! [`ports::AuthProvider`] port. This module owns the user identity types
//! shared by the other contexts and the presence/length rules applied to
//! credentials before the provider is contacted:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
