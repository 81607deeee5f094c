//! Credential value objects validated before reaching the provider.

use super::{AuthDomainError, EmailAddress};
use std::fmt;

/// Password accepted by the local length rule.
///
/// The wrapped secret is never printed by `Debug`.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    /// Minimum password length in characters.
    pub const MIN_CHARS: usize = 6;

    /// Validates a password and its confirmation.
    ///
    /// The mismatch check runs before the length check so that a typo in
    /// the confirmation is reported as such.
    ///
    /// # Errors
    ///
    /// Returns [`AuthDomainError::PasswordMismatch`] when the values differ,
    /// or [`AuthDomainError::PasswordTooShort`] when the password has fewer
    /// than [`Self::MIN_CHARS`] characters.
    pub fn confirmed(
        password: impl Into<String>,
        confirmation: &str,
    ) -> Result<Self, AuthDomainError> {
        let value = password.into();
        if value != confirmation {
            return Err(AuthDomainError::PasswordMismatch);
        }
        Self::new(value)
    }

    /// Validates a single password entry.
    ///
    /// # Errors
    ///
    /// Returns [`AuthDomainError::PasswordTooShort`] when the password has
    /// fewer than [`Self::MIN_CHARS`] characters.
    pub fn new(value: impl Into<String>) -> Result<Self, AuthDomainError> {
        let secret = value.into();
        if secret.chars().count() < Self::MIN_CHARS {
            return Err(AuthDomainError::PasswordTooShort {
                min: Self::MIN_CHARS,
            });
        }
        Ok(Self(secret))
    }

    /// Wraps a password typed at sign-in.
    ///
    /// Only presence is checked; the provider decides whether it matches.
    ///
    /// # Errors
    ///
    /// Returns [`AuthDomainError::EmptyPassword`] for an empty entry.
    pub fn entered(value: impl Into<String>) -> Result<Self, AuthDomainError> {
        let secret = value.into();
        if secret.is_empty() {
            return Err(AuthDomainError::EmptyPassword);
        }
        Ok(Self(secret))
    }

    /// Returns the secret for hand-off to the provider.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(***)")
    }
}

/// Raw sign-up form input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignUpRequest {
    email: String,
    fullname: String,
    password: String,
    confirmation: String,
}

impl SignUpRequest {
    /// Creates a sign-up request from form fields.
    #[must_use]
    pub fn new(
        email: impl Into<String>,
        password: impl Into<String>,
        confirmation: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            fullname: String::new(),
            password: password.into(),
            confirmation: confirmation.into(),
        }
    }

    /// Sets the display name stored on the profile.
    #[must_use]
    pub fn with_fullname(mut self, fullname: impl Into<String>) -> Self {
        self.fullname = fullname.into();
        self
    }

    /// Returns the display name entered on the form.
    #[must_use]
    pub fn fullname(&self) -> &str {
        &self.fullname
    }

    /// Validates the request into provider-ready credentials.
    ///
    /// # Errors
    ///
    /// Returns the first failing [`AuthDomainError`]: empty email, then
    /// password mismatch, then password length.
    pub fn validate(&self) -> Result<(EmailAddress, Password), AuthDomainError> {
        let email = EmailAddress::new(self.email.as_str())?;
        let password = Password::confirmed(self.password.as_str(), &self.confirmation)?;
        Ok((email, password))
    }
}
