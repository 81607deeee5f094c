//! User profile management for taskdeck.
//!
//! Profiles are created lazily through an idempotent ensure at the
//! repository boundary, so two sessions racing to create the same profile
//! both observe a single row. The profile overview combines the stored
//! profile with task statistics for the owning user.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
