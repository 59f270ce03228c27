//! User account record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use vikoshiya_core::Email;

/// A registered account in the mock auth registry.
///
/// The password is stored as entered. This registry imitates the browser
/// build's local-storage user list; it is a demo fixture, not a
/// credential store, and must never hold real secrets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAccount {
    /// Display name.
    pub name: String,
    /// Unique account key.
    pub email: Email,
    /// Stored as entered; see the type-level note.
    pub password: String,
    /// When the account was registered.
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}
