//! Cart store.
//!
//! Owns the ordered line-item list for the session and persists it on
//! every mutation. Cart writes follow the browser build's policy: a
//! failed write is logged and swallowed, never surfaced to the shopper.

use std::sync::Arc;

use chrono::Utc;
use thiserror::Error;

use crate::models::{CartSnapshot, LineItem, Product};
use crate::pricing::{self, ShippingPolicy, Totals};
use crate::storage::{self, KeyValueStore, StorageError, keys};

/// Smallest storable quantity; lower requests clamp up to this.
pub const MIN_QUANTITY: u32 = 1;
/// Largest storable quantity; higher requests clamp down to this.
pub const MAX_QUANTITY: u32 = 99;

/// Errors that can occur during cart operations.
///
/// Ordinary mutations never fail; only the checkout handoff does.
#[derive(Debug, Error)]
pub enum CartError {
    /// The cart has no items to check out.
    #[error("cart is empty")]
    Empty,

    /// The checkout snapshot could not be persisted.
    #[error("failed to store checkout data: {0}")]
    Storage(#[from] StorageError),
}

/// The session's cart: an ordered list of line items plus the injected
/// storage backend.
///
/// At most one line item exists per distinct product title. Totals are
/// derived on demand through the pricing engine and never cached.
pub struct CartStore {
    items: Vec<LineItem>,
    storage: Arc<dyn KeyValueStore>,
}

impl CartStore {
    /// Rehydrate the cart from storage.
    ///
    /// Absent or malformed stored content yields an empty cart; this
    /// never fails.
    #[must_use]
    pub fn load(storage: Arc<dyn KeyValueStore>) -> Self {
        let items: Vec<LineItem> = storage::read_or_default(storage.as_ref(), keys::CART);
        tracing::debug!(lines = items.len(), "cart loaded");
        Self { items, storage }
    }

    /// Discard in-memory state and rehydrate from storage.
    ///
    /// Used after checkout completes, which clears the persisted cart
    /// behind this store's back.
    pub fn reload(&mut self) {
        self.items = storage::read_or_default(self.storage.as_ref(), keys::CART);
    }

    /// The current line items, in insertion order.
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Number of distinct line items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the cart holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of all quantities, as shown on the cart badge.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    /// Current pricing breakdown. No payment method is chosen at the cart
    /// stage, so no COD fee can apply here.
    #[must_use]
    pub fn totals(&self, policy: ShippingPolicy) -> Totals {
        pricing::compute_totals(&self.items, None, policy)
    }

    /// Add `quantity` units of `product`.
    ///
    /// If a line item with the same product title exists its quantity is
    /// incremented; otherwise a new line item is appended. A zero
    /// quantity is treated as 1. No upper bound is enforced here; the
    /// input layer clamps interactive edits to `[1, 99]`.
    pub fn add(&mut self, product: Product, quantity: u32) {
        let quantity = quantity.max(MIN_QUANTITY);
        if let Some(existing) = self
            .items
            .iter_mut()
            .find(|item| item.product.title == product.title)
        {
            existing.quantity += quantity;
            tracing::debug!(title = %product.title, quantity = existing.quantity, "cart line incremented");
        } else {
            tracing::debug!(title = %product.title, quantity, "cart line added");
            self.items.push(LineItem { product, quantity });
        }
        self.persist();
    }

    /// Set the quantity of the line item at `index`, clamped to
    /// `[1, 99]`. Out-of-bounds indices are a silent no-op.
    pub fn update_quantity(&mut self, index: usize, quantity: u32) {
        let Some(item) = self.items.get_mut(index) else {
            return;
        };
        item.quantity = quantity.clamp(MIN_QUANTITY, MAX_QUANTITY);
        self.persist();
    }

    /// Remove the line item at `index`. Out-of-bounds indices are a
    /// silent no-op.
    pub fn remove(&mut self, index: usize) {
        if index >= self.items.len() {
            return;
        }
        let removed = self.items.remove(index);
        tracing::debug!(title = %removed.product.title, "cart line removed");
        self.persist();
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.items.clear();
        self.persist();
    }

    /// Hand the cart off to checkout.
    ///
    /// Writes the `checkoutData` snapshot (items, totals, timestamp) and
    /// returns it. Unlike ordinary cart writes this one is surfaced:
    /// checkout cannot proceed without the snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::Empty`] for an empty cart and
    /// [`CartError::Storage`] if the snapshot write fails.
    pub fn begin_checkout(&self, policy: ShippingPolicy) -> Result<CartSnapshot, CartError> {
        if self.items.is_empty() {
            return Err(CartError::Empty);
        }

        let snapshot = CartSnapshot {
            items: self.items.clone(),
            totals: self.totals(policy),
            timestamp: Utc::now(),
        };
        storage::write_json(self.storage.as_ref(), keys::CHECKOUT_DATA, &snapshot)?;
        tracing::info!(lines = snapshot.items.len(), "checkout data staged");
        Ok(snapshot)
    }

    fn persist(&self) {
        if let Err(error) = storage::write_json(self.storage.as_ref(), keys::CART, &self.items) {
            tracing::warn!(%error, "failed to persist cart");
        }
    }
}
