//! Product catalog.
//!
//! The catalog is loaded from a supplier feed whose documents are deeply
//! nested and frequently incomplete. Loading normalizes each raw
//! document into a flat [`Product`], filling gaps with defaults: a
//! placeholder title and image, a category inferred from title keywords,
//! and randomized rating/review counts in the ranges the storefront
//! displays.

use rand::Rng;
use serde::Deserialize;
use thiserror::Error;

use vikoshiya_core::Money;

use crate::models::Product;

/// Title used when the feed omits one.
pub const DEFAULT_TITLE: &str = "Untitled Product";
/// Image used when the feed has none.
pub const DEFAULT_IMAGE_URL: &str =
    "https://images.pexels.com/photos/1112598/pexels-photo-1112598.jpeg";
/// Category used when neither the feed nor the title yields one.
pub const DEFAULT_CATEGORY: &str = "General";

/// Why a catalog feed could not be loaded.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The feed was not valid JSON in either accepted shape.
    #[error("failed to parse catalog feed: {0}")]
    Parse(#[from] serde_json::Error),
}

// ===== Raw feed shape =====

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawProduct {
    characteristics: RawCharacteristics,
    pricing: RawPricing,
    anchor: RawAnchor,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawCharacteristics {
    title: Option<String>,
    images: RawImages,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawImages {
    primary: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct RawPricing {
    base_price: Option<String>,
    compare_price: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawAnchor {
    category: Option<String>,
    subcategory: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawFeed {
    Wrapped { products: Vec<RawProduct> },
    Bare(Vec<RawProduct>),
}

// ===== Normalization =====

/// Guess a category from title keywords. Used when the feed document
/// carries no category of its own.
fn infer_category(title: &str) -> &'static str {
    let title = title.to_lowercase();
    let contains_any = |words: &[&str]| words.iter().any(|word| title.contains(word));

    if contains_any(&["led", "bulb", "light"]) {
        "LED Lighting"
    } else if contains_any(&["wire", "cable"]) {
        "Wires & Cables"
    } else if contains_any(&["switch", "regulator"]) {
        "Switches & Sockets"
    } else if contains_any(&["drill", "kettle", "heater"]) {
        "Home Appliances"
    } else if contains_any(&["extension", "board"]) {
        "Circuit Protection"
    } else {
        DEFAULT_CATEGORY
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_owned())
        .filter(|s| !s.is_empty())
}

impl RawProduct {
    fn normalize<R: Rng + ?Sized>(self, rng: &mut R) -> Product {
        let title =
            non_empty(self.characteristics.title).unwrap_or_else(|| DEFAULT_TITLE.to_owned());

        let image_url = self
            .characteristics
            .images
            .primary
            .into_iter()
            .map(|url| url.trim().to_owned())
            .find(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_IMAGE_URL.to_owned());

        let new_price = self
            .pricing
            .base_price
            .as_deref()
            .map(Money::parse_lenient)
            .unwrap_or(Money::ZERO);
        let old_price = self
            .pricing
            .compare_price
            .as_deref()
            .map(Money::parse_lenient)
            .unwrap_or(new_price);

        let category = non_empty(self.anchor.category)
            .or_else(|| non_empty(self.anchor.subcategory))
            .unwrap_or_else(|| infer_category(&title).to_owned());

        Product {
            title,
            image_url,
            old_price,
            new_price,
            category,
            rating: rng.random_range(4..=5),
            reviews: rng.random_range(10..=109),
        }
    }
}

// ===== Catalog =====

/// A category rollup for the storefront's browse page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySummary {
    /// URL-safe slug derived from the name.
    pub id: String,
    pub name: String,
    /// Image of the first product seen in the category.
    pub image_url: String,
    pub product_count: usize,
}

/// The normalized product catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Parse a supplier feed. Both a bare JSON array and a
    /// `{"products": [...]}` wrapper are accepted; feed order is kept.
    ///
    /// # Errors
    ///
    /// [`CatalogError::Parse`] if the JSON matches neither shape.
    pub fn load(feed: &str) -> Result<Self, CatalogError> {
        let raw = match serde_json::from_str::<RawFeed>(feed)? {
            RawFeed::Wrapped { products } => products,
            RawFeed::Bare(products) => products,
        };
        let mut rng = rand::rng();
        let products = raw
            .into_iter()
            .map(|product| product.normalize(&mut rng))
            .collect::<Vec<_>>();
        tracing::info!(products = products.len(), "catalog loaded");
        Ok(Self { products })
    }

    /// The catalog shipped with the binary.
    ///
    /// # Errors
    ///
    /// [`CatalogError::Parse`] only if the bundled feed is corrupt.
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::load(include_str!("../data/products.json"))
    }

    /// All products, in feed order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Look a product up by its exact title.
    #[must_use]
    pub fn find_by_title(&self, title: &str) -> Option<&Product> {
        self.products.iter().find(|product| product.title == title)
    }

    /// Products in the named category, in feed order.
    #[must_use]
    pub fn in_category(&self, category: &str) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|product| product.category == category)
            .collect()
    }

    /// Category rollups, sorted by name.
    #[must_use]
    pub fn categories(&self) -> Vec<CategorySummary> {
        let mut summaries: Vec<CategorySummary> = Vec::new();
        for product in &self.products {
            if let Some(summary) = summaries
                .iter_mut()
                .find(|summary| summary.name == product.category)
            {
                summary.product_count += 1;
            } else {
                summaries.push(CategorySummary {
                    id: slugify(&product.category),
                    name: product.category.clone(),
                    image_url: product.image_url.clone(),
                    product_count: 1,
                });
            }
        }
        summaries.sort_by(|a, b| a.name.cmp(&b.name));
        summaries
    }
}

/// Lowercase, alphanumerics kept, everything else collapsed to single
/// hyphens (`"Wires & Cables"` becomes `"wires-cables"`).
fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_hyphen = false;
    for c in name.chars() {
        if c.is_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.extend(c.to_lowercase());
        } else {
            pending_hyphen = true;
        }
    }
    slug
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_catalog_loads() {
        let catalog = Catalog::bundled().unwrap();
        assert!(!catalog.is_empty());
        for product in catalog.products() {
            assert!(!product.title.is_empty());
            assert!(!product.image_url.is_empty());
            assert!((4..=5).contains(&product.rating));
            assert!((10..=109).contains(&product.reviews));
        }
    }

    #[test]
    fn test_accepts_bare_array_and_wrapper() {
        let bare = r#"[{"characteristics": {"title": "LED Bulb"}}]"#;
        let wrapped = r#"{"products": [{"characteristics": {"title": "LED Bulb"}}]}"#;
        assert_eq!(Catalog::load(bare).unwrap().len(), 1);
        assert_eq!(Catalog::load(wrapped).unwrap().len(), 1);
    }

    #[test]
    fn test_rejects_non_feed_json() {
        assert!(matches!(
            Catalog::load(r#"{"items": 3}"#),
            Err(CatalogError::Parse(_))
        ));
        assert!(Catalog::load("not json at all").is_err());
    }

    #[test]
    fn test_empty_document_gets_defaults() {
        let catalog = Catalog::load("[{}]").unwrap();
        let product = &catalog.products()[0];
        assert_eq!(product.title, DEFAULT_TITLE);
        assert_eq!(product.image_url, DEFAULT_IMAGE_URL);
        assert_eq!(product.category, DEFAULT_CATEGORY);
        assert_eq!(product.new_price, Money::ZERO);
        assert_eq!(product.old_price, Money::ZERO);
    }

    #[test]
    fn test_prices_parse_leniently() {
        let feed = r#"[{
            "characteristics": {"title": "Copper Wire"},
            "pricing": {"basePrice": "849", "comparePrice": "n/a"}
        }]"#;
        let catalog = Catalog::load(feed).unwrap();
        let product = &catalog.products()[0];
        assert_eq!(product.new_price, Money::from_rupees(849));
        assert_eq!(product.old_price, Money::ZERO);
    }

    #[test]
    fn test_missing_compare_price_falls_back_to_base() {
        let feed = r#"[{"pricing": {"basePrice": "149"}}]"#;
        let catalog = Catalog::load(feed).unwrap();
        assert_eq!(catalog.products()[0].old_price, Money::from_rupees(149));
    }

    #[test]
    fn test_category_inference_from_title() {
        assert_eq!(infer_category("9W LED Bulb Cool White"), "LED Lighting");
        assert_eq!(infer_category("Copper Wire 90m"), "Wires & Cables");
        assert_eq!(infer_category("Modular Switch 16A"), "Switches & Sockets");
        assert_eq!(infer_category("Fan Regulator"), "Switches & Sockets");
        assert_eq!(infer_category("Impact Drill 13mm"), "Home Appliances");
        assert_eq!(infer_category("Electric Kettle 1.5L"), "Home Appliances");
        assert_eq!(infer_category("Extension Board 4-way"), "Circuit Protection");
        assert_eq!(infer_category("Mystery Gadget"), "General");
    }

    #[test]
    fn test_feed_category_beats_inference() {
        let feed = r#"[{
            "characteristics": {"title": "9W LED Bulb"},
            "anchor": {"category": "Festival Specials"}
        }]"#;
        let catalog = Catalog::load(feed).unwrap();
        assert_eq!(catalog.products()[0].category, "Festival Specials");
    }

    #[test]
    fn test_subcategory_used_when_category_blank() {
        let feed = r#"[{
            "characteristics": {"title": "Mystery Gadget"},
            "anchor": {"category": "  ", "subcategory": "Tools"}
        }]"#;
        let catalog = Catalog::load(feed).unwrap();
        assert_eq!(catalog.products()[0].category, "Tools");
    }

    #[test]
    fn test_first_non_empty_primary_image_wins() {
        let feed = r#"[{
            "characteristics": {
                "title": "Copper Wire",
                "images": {"primary": ["  ", "https://example.com/wire.jpg"]}
            }
        }]"#;
        let catalog = Catalog::load(feed).unwrap();
        assert_eq!(
            catalog.products()[0].image_url,
            "https://example.com/wire.jpg"
        );
    }

    #[test]
    fn test_find_by_title_and_in_category() {
        let catalog = Catalog::bundled().unwrap();
        let first = &catalog.products()[0];
        assert_eq!(
            catalog.find_by_title(&first.title).unwrap().title,
            first.title
        );
        assert!(catalog.find_by_title("no such product").is_none());
        assert_eq!(
            catalog.in_category(&first.category).len(),
            catalog
                .products()
                .iter()
                .filter(|p| p.category == first.category)
                .count()
        );
    }

    #[test]
    fn test_categories_sorted_with_counts() {
        let feed = r#"[
            {"characteristics": {"title": "Copper Wire"}},
            {"characteristics": {"title": "9W LED Bulb"}},
            {"characteristics": {"title": "Flexible Cable"}}
        ]"#;
        let catalog = Catalog::load(feed).unwrap();
        let categories = catalog.categories();
        assert_eq!(categories.len(), 2);
        assert_eq!(categories[0].name, "LED Lighting");
        assert_eq!(categories[0].product_count, 1);
        assert_eq!(categories[1].name, "Wires & Cables");
        assert_eq!(categories[1].id, "wires-cables");
        assert_eq!(categories[1].product_count, 2);
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("LED Lighting"), "led-lighting");
        assert_eq!(slugify("Wires & Cables"), "wires-cables");
        assert_eq!(slugify("General"), "general");
    }
}
