//! Catalog browsing commands.

use vikoshiya_storefront::catalog::Catalog;
use vikoshiya_storefront::error::AppError;

use super::CommandError;

/// List catalog products, optionally filtered to one category.
pub fn list(category: Option<&str>) -> Result<(), CommandError> {
    let catalog = Catalog::bundled().map_err(AppError::from)?;

    let products: Vec<_> = match category {
        Some(category) => catalog.in_category(category),
        None => catalog.products().iter().collect(),
    };

    if products.is_empty() {
        tracing::info!("No products found");
        return Ok(());
    }

    for product in products {
        tracing::info!(
            "{} | {} | {} (was {}) | {}★ ({} reviews)",
            product.title,
            product.category,
            product.new_price,
            product.old_price,
            product.rating,
            product.reviews
        );
    }
    Ok(())
}

/// List categories with their product counts.
pub fn categories() -> Result<(), CommandError> {
    let catalog = Catalog::bundled().map_err(AppError::from)?;

    for summary in catalog.categories() {
        tracing::info!(
            "{} ({}) - {} products",
            summary.name,
            summary.id,
            summary.product_count
        );
    }
    Ok(())
}
