//! alias-rs: email alias issuance service
//!
//! Issues randomized email aliases over HTTP and registers each one with
//! a Stalwart mail server so the configured mailbox receives their mail.

use alias_rs::{AliasConfig, ApiServer};
use std::path::Path;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "alias_rs=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting alias-rs v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let config = if let Some(config_path) = std::env::args().nth(1) {
        info!("Loading configuration from {}", config_path);
        AliasConfig::from_file(Path::new(&config_path))?
    } else {
        info!("No config file specified, using development defaults");
        AliasConfig::development()
    };

    config.validate()?;

    info!("Configuration loaded");
    info!("  Listening on: {}", config.server.listen_addr);
    info!("  Default alias domain: {}", config.alias.default_domain);
    info!("  Forwarding to: {}", config.alias.forward_to);
    info!(
        "  Stalwart: {} ({:?} API)",
        config.stalwart.base_url, config.stalwart.flavor
    );

    let server = ApiServer::new(Arc::new(config))?;
    server.run().await?;

    Ok(())
}
