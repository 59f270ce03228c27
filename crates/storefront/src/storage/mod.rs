//! Key-value persistence layer.
//!
//! The storefront persists everything into a small string-keyed namespace,
//! the same layout the browser build keeps in local storage:
//!
//! - `cart` - JSON array of line items
//! - `checkoutData` - transient cart snapshot handed to checkout
//! - `orders` - append-only JSON array of orders
//! - `favorites` - JSON array of favorited products
//! - `users` - JSON array of registered accounts
//! - `currentUser` - JSON object of the active account
//! - `lastUser` - bare email of the most recently authenticated account
//!
//! Stores receive the backend as `Arc<dyn KeyValueStore>` so tests can
//! inject [`MemoryStore`] where production code uses [`FileStore`].
//!
//! Reads are fail-soft: a missing or malformed document resets the
//! affected store to its default value and is logged, never surfaced.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Well-known storage keys.
pub mod keys {
    /// Cart line items.
    pub const CART: &str = "cart";
    /// Transient cart snapshot handed from cart to checkout.
    pub const CHECKOUT_DATA: &str = "checkoutData";
    /// Append-only order log.
    pub const ORDERS: &str = "orders";
    /// Favorited products.
    pub const FAVORITES: &str = "favorites";
    /// Registered user accounts.
    pub const USERS: &str = "users";
    /// The active session's account.
    pub const CURRENT_USER: &str = "currentUser";
    /// Email of the most recently authenticated account.
    pub const LAST_USER: &str = "lastUser";
}

/// Errors that can occur against a [`KeyValueStore`].
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading or writing the backing file failed.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A value could not be serialized.
    #[error("storage serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The backend refused the write (quota exceeded, read-only, ...).
    #[error("storage backend unavailable")]
    Unavailable,
}

/// A synchronous string key-value store.
///
/// Single-writer by construction: one process owns the namespace, matching
/// the one-tab-one-writer model of the original storage. No locking or
/// merge semantics exist; the last write wins.
pub trait KeyValueStore: Send + Sync {
    /// Fetch the raw value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the write fails.
    fn put(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete the value stored under `key`. Removing an absent key is not
    /// an error.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the delete fails.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Read and deserialize `key`, falling back to `T::default()`.
///
/// Absent, unreadable, and malformed documents all yield the default; the
/// failure is logged but never raised. This is the rehydration contract
/// every store relies on.
pub fn read_or_default<T>(store: &dyn KeyValueStore, key: &str) -> T
where
    T: DeserializeOwned + Default,
{
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return T::default(),
        Err(error) => {
            tracing::warn!(key, %error, "failed to read stored value, using default");
            return T::default();
        }
    };

    match serde_json::from_str(&raw) {
        Ok(value) => value,
        Err(error) => {
            tracing::warn!(key, %error, "stored value is malformed, using default");
            T::default()
        }
    }
}

/// Serialize `value` as JSON and store it under `key`.
///
/// # Errors
///
/// Returns a [`StorageError`] if serialization or the write fails. Whether
/// that error is surfaced or swallowed is the caller's policy: cart and
/// favorites writes are logged and dropped, the checkout order write is
/// surfaced to the user.
pub fn write_json<T: Serialize>(
    store: &dyn KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let raw = serde_json::to_string(value)?;
    store.put(key, &raw)?;
    tracing::debug!(key, bytes = raw.len(), "persisted value");
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_read_or_default_absent() {
        let store = MemoryStore::new();
        let value: Vec<u32> = read_or_default(&store, "missing");
        assert!(value.is_empty());
    }

    #[test]
    fn test_read_or_default_malformed() {
        let store = MemoryStore::new();
        store.put("cart", "{not json").unwrap();
        let value: Vec<u32> = read_or_default(&store, "cart");
        assert!(value.is_empty());
    }

    #[test]
    fn test_write_then_read_roundtrip() {
        let store = MemoryStore::new();
        write_json(&store, "numbers", &vec![1u32, 2, 3]).unwrap();
        let value: Vec<u32> = read_or_default(&store, "numbers");
        assert_eq!(value, vec![1, 2, 3]);
    }
}
