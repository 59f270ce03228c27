//! Cart line items and the checkout handoff snapshot.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use vikoshiya_core::Money;

use super::Product;
use crate::pricing::Totals;

/// One product-and-quantity entry in a cart.
///
/// A cart holds at most one line item per distinct product title; adding
/// an existing product increments the quantity instead of duplicating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// The product, flattened into the line item document.
    #[serde(flatten)]
    pub product: Product,
    /// Units of the product; always at least 1.
    pub quantity: u32,
}

impl LineItem {
    /// Price of the full line (unit price times quantity).
    #[must_use]
    pub fn line_total(&self) -> Money {
        self.product.new_price * self.quantity
    }
}

/// The transient snapshot written under `checkoutData` when the shopper
/// proceeds from cart to checkout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartSnapshot {
    /// Line items at the time of handoff.
    pub items: Vec<LineItem>,
    /// Totals at the time of handoff (no payment method chosen yet).
    pub totals: Totals,
    /// When the handoff happened.
    pub timestamp: DateTime<Utc>,
}
