//! Mock auth registry.
//!
//! A local stand-in for a real identity provider: accounts live in the
//! persisted `users` list, the active session under `currentUser`, and
//! the most recent login email under `lastUser` (stored as the bare
//! email string, not JSON). Passwords are kept as entered; this registry
//! is a demo fixture and must never hold real secrets.

mod error;

pub use error::{AuthError, PasswordPolicyError};

use std::sync::Arc;

use chrono::Utc;

use vikoshiya_core::Email;

use crate::models::UserAccount;
use crate::storage::{self, KeyValueStore, keys};

/// Check a candidate password against the registration policy.
///
/// Rules are checked in a fixed order and the first unmet rule is
/// returned, so callers can surface one actionable message at a time.
///
/// # Errors
///
/// The first unmet [`PasswordPolicyError`] rule.
pub fn validate_password(password: &str) -> Result<(), PasswordPolicyError> {
    if password.chars().count() < 8 {
        return Err(PasswordPolicyError::TooShort);
    }
    if !password.chars().any(char::is_uppercase) {
        return Err(PasswordPolicyError::MissingUppercase);
    }
    if !password.chars().any(char::is_lowercase) {
        return Err(PasswordPolicyError::MissingLowercase);
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err(PasswordPolicyError::MissingDigit);
    }
    if password.chars().all(char::is_alphanumeric) {
        return Err(PasswordPolicyError::MissingSymbol);
    }
    Ok(())
}

/// The account registry and session holder.
pub struct AuthRegistry {
    storage: Arc<dyn KeyValueStore>,
}

impl AuthRegistry {
    #[must_use]
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        Self { storage }
    }

    /// All registered accounts. Fail-soft: absent or malformed content
    /// reads as empty.
    #[must_use]
    pub fn users(&self) -> Vec<UserAccount> {
        storage::read_or_default(self.storage.as_ref(), keys::USERS)
    }

    /// The active session's account, if someone is signed in.
    #[must_use]
    pub fn current_user(&self) -> Option<UserAccount> {
        let raw = self.storage.get(keys::CURRENT_USER).ok()??;
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(error) => {
                tracing::warn!(%error, "ignoring malformed current user");
                None
            }
        }
    }

    /// The account behind the most recent successful login, resolved
    /// against the user list. `None` when nobody has logged in or the
    /// account has since disappeared.
    #[must_use]
    pub fn last_user(&self) -> Option<UserAccount> {
        let email = self.storage.get(keys::LAST_USER).ok()??;
        self.users()
            .into_iter()
            .find(|user| user.email.as_str() == email)
    }

    /// Register a new account and sign it in.
    ///
    /// # Errors
    ///
    /// [`AuthError::MissingName`] for a blank name,
    /// [`AuthError::InvalidEmail`] and [`AuthError::WeakPassword`] for
    /// malformed credentials, [`AuthError::EmailTaken`] when the email is
    /// already registered (the existing account is untouched), and
    /// [`AuthError::Storage`] if the user list cannot be written.
    pub fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<UserAccount, AuthError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AuthError::MissingName);
        }
        let email = Email::parse(email)?;
        validate_password(password)?;

        let mut users = self.users();
        if users.iter().any(|user| user.email == email) {
            return Err(AuthError::EmailTaken);
        }

        let account = UserAccount {
            name: name.to_owned(),
            email,
            password: password.to_owned(),
            created_at: Utc::now(),
        };
        users.push(account.clone());
        storage::write_json(self.storage.as_ref(), keys::USERS, &users)?;
        tracing::info!(email = %account.email, "account registered");

        self.start_session(&account)?;
        Ok(account)
    }

    /// Sign in with an email/password pair.
    ///
    /// # Errors
    ///
    /// [`AuthError::InvalidCredentials`] unless both halves match a
    /// registered account exactly, and [`AuthError::Storage`] if the
    /// session keys cannot be written.
    pub fn login(&self, email: &str, password: &str) -> Result<UserAccount, AuthError> {
        let account = self
            .users()
            .into_iter()
            .find(|user| user.email.as_str() == email.trim() && user.password == password)
            .ok_or(AuthError::InvalidCredentials)?;

        self.start_session(&account)?;
        tracing::info!(email = %account.email, "signed in");
        Ok(account)
    }

    /// End the active session. The `lastUser` marker survives so the next
    /// login form can be prefilled.
    ///
    /// # Errors
    ///
    /// [`AuthError::Storage`] if the session key cannot be removed.
    pub fn logout(&self) -> Result<(), AuthError> {
        self.storage.remove(keys::CURRENT_USER)?;
        tracing::info!("signed out");
        Ok(())
    }

    fn start_session(&self, account: &UserAccount) -> Result<(), AuthError> {
        storage::write_json(self.storage.as_ref(), keys::CURRENT_USER, account)?;
        // lastUser is the bare email string, not a JSON document.
        self.storage.put(keys::LAST_USER, account.email.as_str())?;
        Ok(())
    }
}
