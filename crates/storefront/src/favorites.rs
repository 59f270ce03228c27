//! Favorites list.
//!
//! A signed-in shopper can mark products as favorites; the list lives
//! under the `favorites` key and survives sign-out. Toggling requires an
//! active session, matching the storefront's sign-in gate on the
//! wishlist heart.

use std::sync::Arc;

use thiserror::Error;

use crate::models::Product;
use crate::services::auth::AuthRegistry;
use crate::storage::{self, KeyValueStore, keys};

/// What a toggle did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteToggle {
    /// The product was not a favorite and now is.
    Added,
    /// The product was a favorite and no longer is.
    Removed,
}

/// Why a favorites operation was refused.
#[derive(Debug, Error)]
pub enum FavoritesError {
    /// Toggling favorites requires a signed-in session.
    #[error("sign in to manage favorites")]
    AuthRequired,
}

/// The persisted favorites list.
///
/// Entries are whole product records keyed by title, kept in the order
/// they were first favorited. Reads are fail-soft; writes are logged and
/// swallowed like cart writes.
pub struct FavoritesStore {
    entries: Vec<Product>,
    storage: Arc<dyn KeyValueStore>,
}

impl FavoritesStore {
    /// Rehydrate the favorites list from storage. Never fails.
    #[must_use]
    pub fn load(storage: Arc<dyn KeyValueStore>) -> Self {
        let entries = storage::read_or_default(storage.as_ref(), keys::FAVORITES);
        Self { entries, storage }
    }

    /// The favorited products, oldest first.
    #[must_use]
    pub fn entries(&self) -> &[Product] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether a product with this title is favorited.
    #[must_use]
    pub fn is_favorite(&self, title: &str) -> bool {
        self.entries.iter().any(|entry| entry.title == title)
    }

    /// Flip the favorite state of `product` for the signed-in shopper.
    ///
    /// # Errors
    ///
    /// [`FavoritesError::AuthRequired`] when nobody is signed in; the
    /// list is untouched.
    pub fn toggle(
        &mut self,
        auth: &AuthRegistry,
        product: &Product,
    ) -> Result<FavoriteToggle, FavoritesError> {
        let Some(user) = auth.current_user() else {
            return Err(FavoritesError::AuthRequired);
        };

        let toggle = if let Some(position) = self
            .entries
            .iter()
            .position(|entry| entry.title == product.title)
        {
            self.entries.remove(position);
            FavoriteToggle::Removed
        } else {
            self.entries.push(product.clone());
            FavoriteToggle::Added
        };
        tracing::debug!(email = %user.email, title = %product.title, ?toggle, "favorite toggled");

        if let Err(error) =
            storage::write_json(self.storage.as_ref(), keys::FAVORITES, &self.entries)
        {
            tracing::warn!(%error, "failed to persist favorites");
        }
        Ok(toggle)
    }
}
