//! # Countyscope
//!
//! County air-quality and infant-mortality dashboard. Loads two paired CSV
//! datasets (AQI readings and infant-death counts for Suffolk and Los
//! Angeles counties) once at startup, then serves a page whose two charts
//! recompute whenever the county selection changes.
//!
//! ## Modules
//!
//! - [`data`]: County enum, record types, and the startup CSV loader
//! - [`chart`]: Declarative chart specs and the pure builders behind them
//! - [`api`]: HTTP layer with Axum (dashboard page, chart API, health)
//! - [`config`]: TOML configuration with environment overrides
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use countyscope::api::{serve, AppState};
//! use countyscope::config::Config;
//! use countyscope::data::load_datasets;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load_default();
//!
//!     // Fatal if any of the four sources is missing or unreadable
//!     let datasets = Arc::new(load_datasets(&config.data)?);
//!
//!     let state = AppState::new(datasets, config.server.clone());
//!     serve(state, &config.server).await?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod chart;
pub mod config;
pub mod data;

// Re-export top-level types for convenience
pub use api::{build_router, serve, ApiError, AppState};
pub use chart::{air_quality_chart, mortality_chart, ChartKind, ChartPoint, ChartSpec};
pub use config::{Config, ConfigError, DataConfig, LoggingConfig, ServerConfig};
pub use data::{
    load_datasets, AirQualityRecord, County, DataError, DataResult, Datasets, MortalityRecord,
    UnknownCounty,
};
