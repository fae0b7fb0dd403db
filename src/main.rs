//! bizdesk server
//!
//! Loads the configuration (see `bizdesk::config`), installs logging,
//! builds the configured stores and serves the REST API until SIGTERM or
//! Ctrl+C.

use anyhow::Result;
use bizdesk::config::AppConfig;
use bizdesk::server::ServerBuilder;
use bizdesk::storage::Stores;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::load()?;

    // RUST_LOG wins over the configured filter
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        storage = %config.storage.backend,
        "Starting bizdesk"
    );

    let stores = Stores::from_config(&config).await?;

    ServerBuilder::new()
        .with_stores(stores)
        .serve(&config.bind_addr())
        .await
}
