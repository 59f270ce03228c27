//! Top-level application error.

use thiserror::Error;

use crate::cart::CartError;
use crate::catalog::CatalogError;
use crate::checkout::CheckoutError;
use crate::config::ConfigError;
use crate::favorites::FavoritesError;
use crate::services::auth::AuthError;
use crate::storage::StorageError;

/// Any error a storefront operation can surface.
///
/// Subsystem errors stay in their own enums; this wrapper exists for
/// callers that drive several subsystems and want one `?` type.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Cart(#[from] CartError),
    #[error(transparent)]
    Checkout(#[from] CheckoutError),
    #[error(transparent)]
    Auth(#[from] AuthError),
    #[error(transparent)]
    Favorites(#[from] FavoritesError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}
