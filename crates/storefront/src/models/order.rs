//! Completed order records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use vikoshiya_core::{Email, OrderId, OrderStatus, PaymentMethod, Phone, Pincode};

use super::LineItem;
use crate::pricing::Totals;

/// Shipping address captured at checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    /// Street address line.
    pub street: String,
    /// Apartment / suite line, if given.
    #[serde(default)]
    pub apartment: Option<String>,
    /// City.
    pub city: String,
    /// State.
    pub state: String,
    /// 6-digit postal PIN code.
    pub pincode: Pincode,
    /// Country; always "India" in this storefront.
    pub country: String,
}

/// Customer identity captured at checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// First name.
    #[serde(rename = "firstName")]
    pub first_name: String,
    /// Last name.
    #[serde(rename = "lastName")]
    pub last_name: String,
    /// Contact email.
    pub email: Email,
    /// 10-digit contact phone.
    pub phone: Phone,
    /// Shipping address.
    pub address: Address,
}

/// An immutable snapshot of a completed checkout.
///
/// Appended to the persisted order log exactly once; never mutated or
/// deleted afterwards. Items are copied out of the cart, not referenced,
/// so later cart edits cannot reach into past orders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Unique time-based id.
    pub id: OrderId,
    /// When the order was placed.
    pub timestamp: DateTime<Utc>,
    /// Who placed it and where it ships.
    pub customer: Customer,
    /// Line item snapshot.
    pub items: Vec<LineItem>,
    /// Final pricing breakdown, including any COD fee.
    pub totals: Totals,
    /// How the customer pays.
    #[serde(rename = "paymentMethod")]
    pub payment_method: PaymentMethod,
    /// Free-form delivery notes.
    #[serde(default)]
    pub notes: Option<String>,
    /// Lifecycle status; always `pending` at creation.
    pub status: OrderStatus,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_order_serde_key_spelling() {
        let order = Order {
            id: OrderId::new("ORD1700000000000".to_owned()),
            timestamp: DateTime::from_timestamp_millis(1_700_000_000_000).unwrap(),
            customer: Customer {
                first_name: "Asha".to_owned(),
                last_name: "Iyer".to_owned(),
                email: Email::parse("asha@example.com").unwrap(),
                phone: Phone::parse("9876543210").unwrap(),
                address: Address {
                    street: "12 Gandhi Road".to_owned(),
                    apartment: None,
                    city: "Coimbatore".to_owned(),
                    state: "TN".to_owned(),
                    pincode: Pincode::parse("641001").unwrap(),
                    country: "India".to_owned(),
                },
            },
            items: Vec::new(),
            totals: Totals::default(),
            payment_method: PaymentMethod::Cod,
            notes: Some("leave at door".to_owned()),
            status: OrderStatus::Pending,
        };

        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(json["id"], "ORD1700000000000");
        assert_eq!(json["customer"]["firstName"], "Asha");
        assert_eq!(json["customer"]["address"]["country"], "India");
        assert_eq!(json["paymentMethod"], "cod");
        assert_eq!(json["status"], "pending");
    }
}
