//! Application State
//!
//! Shared state accessible by all API handlers. The datasets are loaded once
//! at startup and never mutated, so handlers read them without locking.

use crate::config::ServerConfig;
use crate::data::Datasets;
use std::sync::Arc;
use std::time::Instant;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// The two unified tables, immutable for the life of the process
    pub datasets: Arc<Datasets>,
    /// Server configuration
    pub config: Arc<ServerConfig>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    pub fn new(datasets: Arc<Datasets>, config: ServerConfig) -> Self {
        Self {
            datasets,
            config: Arc::new(config),
            start_time: Instant::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
