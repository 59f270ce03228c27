//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `VIKOSHIYA_DATA_DIR` - Directory for the persisted key-value files
//!   (default: `.vikoshiya`)
//! - `VIKOSHIYA_SHIPPING_POLICY` - `flat` or `threshold`
//!   (default: `flat`)
//! - `VIKOSHIYA_PROCESSING_DELAY_MS` - Simulated payment processing
//!   delay in milliseconds (default: 2000)

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

use crate::pricing::ShippingPolicy;

const DEFAULT_DATA_DIR: &str = ".vikoshiya";
const DEFAULT_PROCESSING_DELAY_MS: u64 = 2_000;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Directory holding the persisted key-value files.
    pub data_dir: PathBuf,
    /// When the flat shipping fee is waived.
    pub shipping_policy: ShippingPolicy,
    /// How long the simulated payment processor takes.
    pub processing_delay: Duration,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            shipping_policy: ShippingPolicy::default(),
            processing_delay: Duration::from_millis(DEFAULT_PROCESSING_DELAY_MS),
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    /// Every variable has a default, so an empty environment is valid.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a set variable does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let data_dir = PathBuf::from(get_env_or_default("VIKOSHIYA_DATA_DIR", DEFAULT_DATA_DIR));

        let shipping_policy = match get_optional_env("VIKOSHIYA_SHIPPING_POLICY") {
            Some(value) => value.parse::<ShippingPolicy>().map_err(|e| {
                ConfigError::InvalidEnvVar("VIKOSHIYA_SHIPPING_POLICY".to_string(), e)
            })?,
            None => ShippingPolicy::default(),
        };

        let processing_delay = match get_optional_env("VIKOSHIYA_PROCESSING_DELAY_MS") {
            Some(value) => {
                let millis = value.parse::<u64>().map_err(|e| {
                    ConfigError::InvalidEnvVar(
                        "VIKOSHIYA_PROCESSING_DELAY_MS".to_string(),
                        e.to_string(),
                    )
                })?;
                Duration::from_millis(millis)
            }
            None => Duration::from_millis(DEFAULT_PROCESSING_DELAY_MS),
        };

        Ok(Self {
            data_dir,
            shipping_policy,
            processing_delay,
        })
    }
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StorefrontConfig::default();
        assert_eq!(config.data_dir, PathBuf::from(".vikoshiya"));
        assert_eq!(config.shipping_policy, ShippingPolicy::FlatWhenNonEmpty);
        assert_eq!(config.processing_delay, Duration::from_secs(2));
    }

    #[test]
    fn test_get_env_or_default_falls_back() {
        assert_eq!(
            get_env_or_default("VIKOSHIYA_TEST_UNSET_VAR", "fallback"),
            "fallback"
        );
    }

    #[test]
    fn test_invalid_policy_value_reports_variable() {
        let error = "express"
            .parse::<ShippingPolicy>()
            .map_err(|e| ConfigError::InvalidEnvVar("VIKOSHIYA_SHIPPING_POLICY".to_string(), e))
            .unwrap_err();
        assert!(error.to_string().contains("VIKOSHIYA_SHIPPING_POLICY"));
    }
}
