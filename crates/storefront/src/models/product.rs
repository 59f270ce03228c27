//! Normalized display product.

use serde::{Deserialize, Serialize};

use vikoshiya_core::Money;

/// A product in its normalized display shape.
///
/// Produced by the catalog loader from the raw dataset; also the element
/// type of the favorites list. The product title is the identity key
/// everywhere (cart merging, favorites toggling) - the dataset has no
/// numeric ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Display title; identity key across cart and favorites.
    #[serde(rename = "product-title")]
    pub title: String,
    /// Primary image URL.
    #[serde(rename = "image-url")]
    pub image_url: String,
    /// Strikethrough compare-at price.
    #[serde(rename = "old-price")]
    pub old_price: Money,
    /// Current selling price.
    #[serde(rename = "new-price")]
    pub new_price: Money,
    /// Display category.
    pub category: String,
    /// Star rating (4 or 5, synthesized at load).
    #[serde(default)]
    pub rating: u8,
    /// Review count (synthesized at load).
    #[serde(default)]
    pub reviews: u32,
}
