//! Kids Classic Books runner.
//!
//! Handles one skill turn: reads a platform event as JSON from stdin,
//! dispatches it through the skill service, and writes the response JSON
//! to stdout. Configuration and logging come up first; a missing catalog
//! API key fails fast here instead of producing broken lookups later.

use std::io::Read;
use std::process::ExitCode;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use kids_classic_books::adapters::catalog::{GoodreadsCatalog, GoodreadsConfig};
use kids_classic_books::application::SkillService;
use kids_classic_books::config::AppConfig;

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(err) => {
            tracing::error!(error = %err, "failed to load configuration");
            return ExitCode::FAILURE;
        }
    };

    let goodreads = match GoodreadsConfig::from_catalog_config(&config.catalog) {
        Ok(goodreads) => goodreads,
        Err(err) => {
            tracing::error!(error = %err, "invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    let service = SkillService::new(Arc::new(GoodreadsCatalog::new(goodreads)));

    let mut raw = String::new();
    if let Err(err) = std::io::stdin().read_to_string(&mut raw) {
        tracing::error!(error = %err, "failed to read event from stdin");
        return ExitCode::FAILURE;
    }

    let response = service.handle_json(&raw).await;
    match serde_json::to_string(&response) {
        Ok(body) => {
            println!("{body}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(error = %err, "failed to serialize response");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}
