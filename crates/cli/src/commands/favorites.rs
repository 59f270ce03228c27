//! Favorites commands.

use vikoshiya_storefront::catalog::Catalog;
use vikoshiya_storefront::error::AppError;
use vikoshiya_storefront::favorites::{FavoriteToggle, FavoritesStore};
use vikoshiya_storefront::services::auth::AuthRegistry;

use super::{CommandError, Context};

/// Flip the favorite state of a catalog product. Requires a session.
pub fn toggle(title: &str) -> Result<(), CommandError> {
    let ctx = Context::from_env()?;
    let catalog = Catalog::bundled().map_err(AppError::from)?;
    let product = catalog
        .find_by_title(title)
        .ok_or_else(|| CommandError::UnknownProduct(title.to_owned()))?;

    let registry = AuthRegistry::new(ctx.storage.clone());
    let mut favorites = FavoritesStore::load(ctx.storage);

    match favorites
        .toggle(&registry, product)
        .map_err(AppError::from)?
    {
        FavoriteToggle::Added => tracing::info!("Added {title} to favorites"),
        FavoriteToggle::Removed => tracing::info!("Removed {title} from favorites"),
    }
    Ok(())
}

/// List favorited products, oldest first.
pub fn list() -> Result<(), CommandError> {
    let ctx = Context::from_env()?;
    let favorites = FavoritesStore::load(ctx.storage);

    if favorites.is_empty() {
        tracing::info!("No favorites yet");
        return Ok(());
    }

    for product in favorites.entries() {
        tracing::info!("{} | {} | {}", product.title, product.category, product.new_price);
    }
    Ok(())
}
