//! CLI command implementations.

pub mod auth;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod favorites;

use std::sync::Arc;

use thiserror::Error;

use vikoshiya_storefront::config::{ConfigError, StorefrontConfig};
use vikoshiya_storefront::error::AppError;
use vikoshiya_storefront::storage::{FileStore, KeyValueStore};

/// Errors specific to driving the storefront from the terminal.
#[derive(Debug, Error)]
pub enum CommandError {
    /// A product title did not match anything in the catalog.
    #[error("no catalog product titled: {0}")]
    UnknownProduct(String),

    /// A storefront operation failed.
    #[error(transparent)]
    App(#[from] AppError),
}

impl From<ConfigError> for CommandError {
    fn from(error: ConfigError) -> Self {
        Self::App(error.into())
    }
}

/// Parse a quantity argument; unparseable input counts as a single unit,
/// matching how the storefront treats garbage quantity fields.
#[must_use]
pub fn parse_quantity(raw: &str) -> u32 {
    raw.trim().parse().unwrap_or(1)
}

/// Storefront context shared by every command: config plus the
/// file-backed store under the configured data directory.
pub struct Context {
    pub config: StorefrontConfig,
    pub storage: Arc<dyn KeyValueStore>,
}

impl Context {
    /// Load config from the environment and open the data directory.
    ///
    /// # Errors
    ///
    /// Returns an error if a set environment variable does not parse.
    pub fn from_env() -> Result<Self, CommandError> {
        let config = StorefrontConfig::from_env()?;
        let storage: Arc<dyn KeyValueStore> = Arc::new(FileStore::new(config.data_dir.clone()));
        Ok(Self { config, storage })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_quantity_lenient() {
        assert_eq!(parse_quantity("3"), 3);
        assert_eq!(parse_quantity(" 12 "), 12);
        assert_eq!(parse_quantity("abc"), 1);
        assert_eq!(parse_quantity(""), 1);
        assert_eq!(parse_quantity("-2"), 1);
    }
}
