//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `STOREFRONT_API_URL` - Base URL the HTTP transport talks to (default: `http://localhost:5173/`)
//! - `STOREFRONT_LANGUAGE` - `en` or `es` (default: `en`)
//! - `STOREFRONT_QUERY_RETRY` - Retries per failed fetch (default: 3)
//! - `STOREFRONT_QUERY_RETRY_DELAY_MS` - Delay between retries (default: 1000)

use std::time::Duration;

use thiserror::Error;
use url::Url;

use crate::i18n::Language;
use crate::query::QueryConfig;

const DEFAULT_API_URL: &str = "http://localhost:5173/";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct StorefrontConfig {
    /// Checked to be a valid URL when loaded, kept in its normalised text form.
    pub api_url: String,
    pub language: Language,
    pub query: QueryConfig,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            language: Language::default(),
            query: QueryConfig::default(),
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key/value source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let api_url = Url::parse(&get("STOREFRONT_API_URL", DEFAULT_API_URL))
            .map_err(|e| invalid("STOREFRONT_API_URL", e))?
            .to_string();
        let language = get("STOREFRONT_LANGUAGE", "en")
            .parse::<Language>()
            .map_err(|e| invalid("STOREFRONT_LANGUAGE", e))?;
        let retry = get("STOREFRONT_QUERY_RETRY", "3")
            .parse::<u32>()
            .map_err(|e| invalid("STOREFRONT_QUERY_RETRY", e))?;
        let retry_delay_ms = get("STOREFRONT_QUERY_RETRY_DELAY_MS", "1000")
            .parse::<u64>()
            .map_err(|e| invalid("STOREFRONT_QUERY_RETRY_DELAY_MS", e))?;

        Ok(Self {
            api_url,
            language,
            query: QueryConfig {
                retry,
                retry_delay: Duration::from_millis(retry_delay_ms),
            },
        })
    }

    /// The API base URL, parsed.
    pub fn parsed_api_url(&self) -> Result<Url, ConfigError> {
        Url::parse(&self.api_url).map_err(|e| invalid("STOREFRONT_API_URL", e))
    }
}

fn invalid(key: &str, error: impl ToString) -> ConfigError {
    ConfigError::InvalidEnvVar(key.to_string(), error.to_string())
}
