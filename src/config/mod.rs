//! Application configuration module.
//!
//! Type-safe configuration loading from environment variables using the
//! `config` and `dotenvy` crates. Values are read with the `KIDS_BOOKS`
//! prefix and `__` (double underscore) as the nesting separator.
//!
//! # Example
//!
//! ```no_run
//! use kids_classic_books::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod catalog;
mod error;

pub use catalog::CatalogConfig;
pub use error::{ConfigError, ValidationError};

use serde::Deserialize;

/// Root application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Catalog API configuration (endpoint, key, timeout).
    #[serde(default)]
    pub catalog: CatalogConfig,
}

impl AppConfig {
    /// Loads configuration from environment variables.
    ///
    /// Reads a `.env` file if present (development convenience), then
    /// environment variables such as `KIDS_BOOKS__CATALOG__API_KEY`.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("KIDS_BOOKS")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validates all configuration values.
    ///
    /// The catalog API key is the single required secret; its absence
    /// fails here, at startup, rather than producing broken endpoints
    /// later.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.catalog.validate()?;
        Ok(())
    }
}
