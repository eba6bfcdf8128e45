//! Countyscope Server
//!
//! Run with: cargo run
//!
//! # Configuration
//!
//! TOML config (`./countyscope.toml` or the platform config dir) with
//! environment overrides:
//! - `COUNTYSCOPE_HOST`: Host to bind to (default: 0.0.0.0)
//! - `COUNTYSCOPE_PORT`: Port to listen on (default: 8080)
//! - `COUNTYSCOPE_DATA_DIR`: Directory holding the four CSV sources
//! - `COUNTYSCOPE_LOG_LEVEL` / `COUNTYSCOPE_LOG_FORMAT`: Logging
//! - `RUST_LOG`: Fine-grained filter, wins over the config level

use clap::Parser;
use countyscope::api::{serve, AppState};
use countyscope::config::Config;
use countyscope::data::load_datasets;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// County air-quality and infant-mortality dashboard
#[derive(Debug, Parser)]
#[command(name = "countyscope", version)]
struct Cli {
    /// Path to a TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the host to bind to
    #[arg(long)]
    host: Option<String>,

    /// Override the port to listen on
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }

    init_tracing(&config);

    tracing::info!("Starting countyscope v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        aqi_suffolk = %config.data.aqi_suffolk.display(),
        aqi_los_angeles = %config.data.aqi_los_angeles.display(),
        deaths_suffolk = %config.data.deaths_suffolk.display(),
        deaths_los_angeles = %config.data.deaths_los_angeles.display(),
        "Source files"
    );

    // Load-once: a missing or unreadable source aborts startup, the server
    // never serves partially loaded data
    let datasets = Arc::new(load_datasets(&config.data)?);

    let state = AppState::new(datasets, config.server.clone());
    serve(state, &config.server).await?;

    tracing::info!("Countyscope stopped");
    Ok(())
}

/// Initialize the tracing subscriber from config, honoring RUST_LOG
fn init_tracing(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(format!(
            "countyscope={},tower_http=info",
            config.logging.level
        ))
    });

    let registry = tracing_subscriber::registry().with(filter);

    if config.logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
