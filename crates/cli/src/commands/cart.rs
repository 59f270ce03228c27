//! Cart commands.

use vikoshiya_storefront::cart::CartStore;
use vikoshiya_storefront::catalog::Catalog;
use vikoshiya_storefront::error::AppError;

use super::{CommandError, Context};

/// Add a catalog product to the cart by exact title.
pub fn add(title: &str, quantity: u32) -> Result<(), CommandError> {
    let ctx = Context::from_env()?;
    let catalog = Catalog::bundled().map_err(AppError::from)?;
    let product = catalog
        .find_by_title(title)
        .ok_or_else(|| CommandError::UnknownProduct(title.to_owned()))?;

    let mut cart = CartStore::load(ctx.storage);
    cart.add(product.clone(), quantity);
    tracing::info!("Added {quantity} x {title}; cart now holds {} items", cart.item_count());
    Ok(())
}

/// Show cart lines and the current totals.
pub fn list() -> Result<(), CommandError> {
    let ctx = Context::from_env()?;
    let cart = CartStore::load(ctx.storage);

    if cart.is_empty() {
        tracing::info!("Cart is empty");
        return Ok(());
    }

    for (index, item) in cart.items().iter().enumerate() {
        tracing::info!(
            "[{index}] {} x{} @ {} = {}",
            item.product.title,
            item.quantity,
            item.product.new_price,
            item.line_total()
        );
    }

    let totals = cart.totals(ctx.config.shipping_policy);
    tracing::info!(
        "Subtotal {} | Shipping {} | Tax {} | Discount {} | Total {}",
        totals.subtotal,
        totals.shipping,
        totals.tax,
        totals.discount,
        totals.total
    );
    Ok(())
}

/// Set the quantity of a cart line.
pub fn set_quantity(index: usize, quantity: u32) -> Result<(), CommandError> {
    let ctx = Context::from_env()?;
    let mut cart = CartStore::load(ctx.storage);
    cart.update_quantity(index, quantity);
    tracing::info!("Cart now holds {} items", cart.item_count());
    Ok(())
}

/// Remove a cart line.
pub fn remove(index: usize) -> Result<(), CommandError> {
    let ctx = Context::from_env()?;
    let mut cart = CartStore::load(ctx.storage);
    cart.remove(index);
    tracing::info!("Cart now holds {} items", cart.item_count());
    Ok(())
}

/// Remove every cart line.
pub fn clear() -> Result<(), CommandError> {
    let ctx = Context::from_env()?;
    let mut cart = CartStore::load(ctx.storage);
    cart.clear();
    tracing::info!("Cart cleared");
    Ok(())
}
