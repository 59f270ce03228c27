//! Integration tests for the Vikoshiya storefront.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p vikoshiya-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_checkout_flow` - Catalog to cart to placed order
//! - `auth_and_favorites` - Account lifecycle and the favorites gate
//! - `persistence` - Data surviving store reloads and bad content
//!
//! Tests run against [`MemoryStore`] so each test owns an isolated
//! storage universe; the file-backed store shares the same trait and
//! read/write helpers, so coverage transfers.

use std::sync::Arc;

use vikoshiya_storefront::storage::{KeyValueStore, MemoryStore};

/// A fresh, isolated storage backend for one test.
#[must_use]
pub fn fresh_store() -> Arc<MemoryStore> {
    Arc::new(MemoryStore::new())
}

/// The same store, viewed through the trait object the storefront takes.
#[must_use]
pub fn as_storage(store: &Arc<MemoryStore>) -> Arc<dyn KeyValueStore> {
    Arc::clone(store) as Arc<dyn KeyValueStore>
}

/// A checkout form that passes validation.
#[must_use]
pub fn valid_checkout_form() -> vikoshiya_storefront::checkout::CheckoutForm {
    vikoshiya_storefront::checkout::CheckoutForm {
        first_name: "Asha".to_owned(),
        last_name: "Iyer".to_owned(),
        email: "asha@example.com".to_owned(),
        phone: "9876543210".to_owned(),
        address: "12 Gandhi Road".to_owned(),
        apartment: Some("Flat 3B".to_owned()),
        city: "Coimbatore".to_owned(),
        state: "Tamil Nadu".to_owned(),
        pincode: "641001".to_owned(),
        payment_method: Some(vikoshiya_core::PaymentMethod::Card),
        notes: None,
    }
}
