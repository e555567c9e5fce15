//! Catalog API configuration.

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Configuration for the book catalog API.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    /// Catalog API key. Required.
    pub api_key: Option<String>,

    /// Catalog base URL.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Lookup request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl CatalogConfig {
    /// Timeout as a `Duration`.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Returns true when an API key is configured and non-empty.
    pub fn has_api_key(&self) -> bool {
        self.api_key.as_ref().is_some_and(|key| !key.is_empty())
    }

    /// Validates the catalog configuration.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.has_api_key() {
            return Err(ValidationError::MissingRequired("KIDS_BOOKS__CATALOG__API_KEY"));
        }
        if self.timeout_secs == 0 {
            return Err(ValidationError::Invalid {
                field: "catalog.timeout_secs",
                reason: "timeout must be greater than zero".to_string(),
            });
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ValidationError::Invalid {
                field: "catalog.base_url",
                reason: format!("not an http(s) URL: {}", self.base_url),
            });
        }
        Ok(())
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

fn default_base_url() -> String {
    "https://www.goodreads.com".to_string()
}

fn default_timeout() -> u64 {
    8
}
