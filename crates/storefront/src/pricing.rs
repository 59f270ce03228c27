//! Pricing engine.
//!
//! Pure derivation of the cart's pricing breakdown. Totals are recomputed
//! on every read and never cached; there is no hidden state here.
//!
//! The rules:
//!
//! - subtotal: sum of unit price times quantity
//! - shipping: flat ₹99, waived according to the configured
//!   [`ShippingPolicy`]
//! - tax: 18% GST on the subtotal only (shipping and discount excluded
//!   from the base)
//! - discount: flat ₹200 once the subtotal exceeds ₹500 (strict)
//! - COD fee: flat ₹40 when paying cash on delivery
//! - total: subtotal + shipping + tax - discount + COD fee, exact

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use vikoshiya_core::{Money, PaymentMethod};

use crate::models::LineItem;

/// Flat shipping fee in rupees.
pub const SHIPPING_RATE_RUPEES: i64 = 99;
/// Subtotal above which shipping is free under the threshold policy.
pub const FREE_SHIPPING_THRESHOLD_RUPEES: i64 = 500;
/// Flat discount in rupees.
pub const DISCOUNT_RUPEES: i64 = 200;
/// Subtotal above which the discount applies (strict).
pub const DISCOUNT_THRESHOLD_RUPEES: i64 = 500;
/// Cash-on-delivery handling fee in rupees.
pub const COD_FEE_RUPEES: i64 = 40;

/// GST rate applied to the subtotal.
#[must_use]
pub fn tax_rate() -> Decimal {
    Decimal::new(18, 2)
}

/// When the flat shipping fee is waived.
///
/// The two storefront builds disagreed on this rule, so both survive as
/// named policies and the integrator picks one (usually through
/// [`StorefrontConfig`](crate::config::StorefrontConfig)).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShippingPolicy {
    /// Flat fee whenever the cart is non-empty; free only for an empty
    /// cart. The rule used by the build that actually writes orders.
    #[default]
    FlatWhenNonEmpty,
    /// Flat fee unless the subtotal exceeds the free-shipping threshold.
    FreeOverThreshold,
}

impl std::str::FromStr for ShippingPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "flat" | "flat_when_non_empty" => Ok(Self::FlatWhenNonEmpty),
            "threshold" | "free_over_threshold" => Ok(Self::FreeOverThreshold),
            _ => Err(format!("invalid shipping policy: {s}")),
        }
    }
}

/// The derived pricing breakdown for a set of line items.
///
/// Invariant: `total = subtotal + shipping + tax - discount + cod_fee`,
/// exactly, for any input.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Totals {
    /// Sum of unit price times quantity.
    pub subtotal: Money,
    /// Shipping fee after the configured policy.
    pub shipping: Money,
    /// 18% GST on the subtotal.
    pub tax: Money,
    /// Flat threshold discount.
    pub discount: Money,
    /// Cash-on-delivery handling fee.
    #[serde(rename = "codFee")]
    pub cod_fee: Money,
    /// Grand total.
    pub total: Money,
    /// Sum of all quantities.
    #[serde(rename = "itemCount")]
    pub item_count: u32,
}

/// Compute the pricing breakdown for `items`.
///
/// `payment_method` is `None` while browsing the cart (no method chosen
/// yet) and `Some` at checkout, where choosing cash on delivery adds the
/// handling fee.
#[must_use]
pub fn compute_totals(
    items: &[LineItem],
    payment_method: Option<PaymentMethod>,
    policy: ShippingPolicy,
) -> Totals {
    let subtotal: Money = items.iter().map(LineItem::line_total).sum();
    let threshold = Money::from_rupees(FREE_SHIPPING_THRESHOLD_RUPEES);

    let free_shipping = match policy {
        ShippingPolicy::FlatWhenNonEmpty => items.is_empty(),
        ShippingPolicy::FreeOverThreshold => subtotal > threshold,
    };
    let shipping = if free_shipping {
        Money::ZERO
    } else {
        Money::from_rupees(SHIPPING_RATE_RUPEES)
    };

    let tax = subtotal * tax_rate();

    let discount = if subtotal > Money::from_rupees(DISCOUNT_THRESHOLD_RUPEES) {
        Money::from_rupees(DISCOUNT_RUPEES)
    } else {
        Money::ZERO
    };

    let cod_fee = if payment_method == Some(PaymentMethod::Cod) {
        Money::from_rupees(COD_FEE_RUPEES)
    } else {
        Money::ZERO
    };

    let total = subtotal + shipping + tax - discount + cod_fee;
    let item_count = items.iter().map(|item| item.quantity).sum();

    Totals {
        subtotal,
        shipping,
        tax,
        discount,
        cod_fee,
        total,
        item_count,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::models::Product;

    fn item(price: &str, quantity: u32) -> LineItem {
        LineItem {
            product: Product {
                title: format!("item-{price}-{quantity}"),
                image_url: String::new(),
                old_price: Money::parse_lenient(price),
                new_price: Money::parse_lenient(price),
                category: "General".to_owned(),
                rating: 4,
                reviews: 10,
            },
            quantity,
        }
    }

    #[test]
    fn test_empty_cart_is_all_zero() {
        let totals = compute_totals(&[], None, ShippingPolicy::FlatWhenNonEmpty);
        assert_eq!(totals.subtotal, Money::ZERO);
        assert_eq!(totals.shipping, Money::ZERO);
        assert_eq!(totals.tax, Money::ZERO);
        assert_eq!(totals.discount, Money::ZERO);
        assert_eq!(totals.total, Money::ZERO);
        assert_eq!(totals.item_count, 0);
    }

    #[test]
    fn test_subtotal_and_item_count() {
        let items = [item("100", 2), item("50.50", 3)];
        let totals = compute_totals(&items, None, ShippingPolicy::FlatWhenNonEmpty);
        assert_eq!(totals.subtotal, Money::parse_lenient("351.50"));
        assert_eq!(totals.item_count, 5);
    }

    #[test]
    fn test_flat_policy_charges_any_non_empty_cart() {
        let items = [item("1000", 1)];
        let totals = compute_totals(&items, None, ShippingPolicy::FlatWhenNonEmpty);
        assert_eq!(totals.shipping, Money::from_rupees(99));
    }

    #[test]
    fn test_threshold_policy_boundary() {
        let at = [item("500", 1)];
        let over = [item("500.01", 1)];
        assert_eq!(
            compute_totals(&at, None, ShippingPolicy::FreeOverThreshold).shipping,
            Money::from_rupees(99)
        );
        assert_eq!(
            compute_totals(&over, None, ShippingPolicy::FreeOverThreshold).shipping,
            Money::ZERO
        );
    }

    #[test]
    fn test_discount_threshold_is_strict() {
        let at = [item("500", 1)];
        let over = [item("500.01", 1)];
        assert_eq!(
            compute_totals(&at, None, ShippingPolicy::FlatWhenNonEmpty).discount,
            Money::ZERO
        );
        assert_eq!(
            compute_totals(&over, None, ShippingPolicy::FlatWhenNonEmpty).discount,
            Money::from_rupees(200)
        );
    }

    #[test]
    fn test_tax_is_18_percent_of_subtotal_only() {
        let items = [item("600", 1)];
        let totals = compute_totals(&items, None, ShippingPolicy::FlatWhenNonEmpty);
        assert_eq!(totals.tax, Money::from_rupees(108));
    }

    #[test]
    fn test_cod_fee_only_for_cod() {
        let items = [item("600", 1)];
        let card = compute_totals(
            &items,
            Some(PaymentMethod::Card),
            ShippingPolicy::FlatWhenNonEmpty,
        );
        let cod = compute_totals(
            &items,
            Some(PaymentMethod::Cod),
            ShippingPolicy::FlatWhenNonEmpty,
        );
        assert_eq!(card.cod_fee, Money::ZERO);
        assert_eq!(cod.cod_fee, Money::from_rupees(40));
        assert_eq!(cod.total - card.total, Money::from_rupees(40));
    }

    #[test]
    fn test_total_invariant_holds() {
        let carts: [&[LineItem]; 4] = [
            &[],
            &[item("600", 1)],
            &[item("100", 2), item("50.50", 3), item("not-a-price", 1)],
            &[item("0.01", 99)],
        ];
        for items in carts {
            for method in [None, Some(PaymentMethod::Card), Some(PaymentMethod::Cod)] {
                for policy in [
                    ShippingPolicy::FlatWhenNonEmpty,
                    ShippingPolicy::FreeOverThreshold,
                ] {
                    let t = compute_totals(items, method, policy);
                    assert_eq!(
                        t.total,
                        t.subtotal + t.shipping + t.tax - t.discount + t.cod_fee
                    );
                }
            }
        }
    }

    #[test]
    fn test_documented_600_rupee_example() {
        // Cart with one item at 600: subtotal 600, tax 108, discount 200.
        let items = [item("600", 1)];

        let flat = compute_totals(&items, None, ShippingPolicy::FlatWhenNonEmpty);
        assert_eq!(flat.shipping, Money::from_rupees(99));
        assert_eq!(flat.total, Money::from_rupees(607));

        let threshold = compute_totals(&items, None, ShippingPolicy::FreeOverThreshold);
        assert_eq!(threshold.shipping, Money::ZERO);
        assert_eq!(threshold.total, Money::from_rupees(508));
    }

    #[test]
    fn test_non_numeric_price_contributes_zero() {
        let items = [item("n/a", 5)];
        let totals = compute_totals(&items, None, ShippingPolicy::FlatWhenNonEmpty);
        assert_eq!(totals.subtotal, Money::ZERO);
        assert_eq!(totals.item_count, 5);
    }

    #[test]
    fn test_totals_serde_key_spelling() {
        let totals = compute_totals(
            &[item("600", 1)],
            Some(PaymentMethod::Cod),
            ShippingPolicy::FlatWhenNonEmpty,
        );
        let json = serde_json::to_value(&totals).unwrap();
        assert_eq!(json["codFee"], "40");
        assert_eq!(json["itemCount"], 1);
    }

    #[test]
    fn test_shipping_policy_from_str() {
        assert_eq!(
            "flat".parse::<ShippingPolicy>().unwrap(),
            ShippingPolicy::FlatWhenNonEmpty
        );
        assert_eq!(
            "threshold".parse::<ShippingPolicy>().unwrap(),
            ShippingPolicy::FreeOverThreshold
        );
        assert!("express".parse::<ShippingPolicy>().is_err());
    }
}
