//! Error types for profile validation.

use thiserror::Error;

/// Errors returned while building or updating profiles.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProfileDomainError {
    /// The full name exceeds the accepted length.
    #[error("full name must be at most {max} characters, got {actual}")]
    FullNameTooLong {
        /// Maximum accepted length in characters.
        max: usize,
        /// Length of the rejected value in characters.
        actual: usize,
    },

    /// The update carries no field to change.
    #[error("profile update contains no changes")]
    EmptyUpdate,
}
