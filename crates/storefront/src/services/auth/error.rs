//! Auth registry errors.

use thiserror::Error;

use vikoshiya_core::EmailError;

use crate::storage::StorageError;

/// Password rules, checked in order; the first unmet rule is the error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PasswordPolicyError {
    #[error("password must be at least 8 characters")]
    TooShort,
    #[error("password must contain an uppercase letter")]
    MissingUppercase,
    #[error("password must contain a lowercase letter")]
    MissingLowercase,
    #[error("password must contain a number")]
    MissingDigit,
    #[error("password must contain a symbol")]
    MissingSymbol,
}

/// Why a register or login attempt failed.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The display name was blank.
    #[error("name is required")]
    MissingName,

    /// The email did not parse.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    /// The password failed the registration policy.
    #[error(transparent)]
    WeakPassword(#[from] PasswordPolicyError),

    /// An account with this email already exists.
    #[error("an account with this email already exists")]
    EmailTaken,

    /// No account matched the email/password pair. Deliberately does not
    /// say which half was wrong.
    #[error("invalid email or password")]
    InvalidCredentials,

    /// The user list or session key could not be written.
    #[error("storage failure: {0}")]
    Storage(#[from] StorageError),
}
