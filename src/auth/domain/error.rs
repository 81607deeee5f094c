//! Error types for credential validation.

use thiserror::Error;

/// Errors returned while validating identity and credential values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthDomainError {
    /// The email address is empty after trimming.
    #[error("email address must not be empty")]
    EmptyEmail,

    /// No password was entered.
    #[error("password must not be empty")]
    EmptyPassword,

    /// The password and its confirmation differ.
    #[error("passwords do not match")]
    PasswordMismatch,

    /// The password is shorter than the accepted minimum.
    #[error("password must be at least {min} characters")]
    PasswordTooShort {
        /// Minimum accepted length in characters.
        min: usize,
    },
}
