//! Data Transfer Objects
//!
//! Request and response types for the API endpoints.
//! These types are serialized/deserialized to/from JSON.

use crate::chart::ChartSpec;
use serde::{Deserialize, Serialize};

// ============================================
// CHART DTOs
// ============================================

/// Query parameters for the charts endpoint
#[derive(Debug, Deserialize)]
pub struct ChartsParams {
    /// County identifier; defaults to the initial selection when absent
    #[serde(default)]
    pub county: Option<String>,
}

/// Both chart specs for one selection
#[derive(Debug, Serialize)]
pub struct ChartsResponse {
    /// The county the specs were computed for
    pub county: String,
    /// Air-quality line chart
    pub air_quality: ChartSpec,
    /// Infant-mortality bar chart
    pub mortality: ChartSpec,
}

// ============================================
// COUNTY DTOs
// ============================================

/// One selectable county
#[derive(Debug, Serialize)]
pub struct CountyOption {
    /// Value submitted by the control
    pub id: String,
    /// Label shown in the dropdown
    pub label: String,
}

/// The enumerated selection domain
#[derive(Debug, Serialize)]
pub struct CountyListResponse {
    pub counties: Vec<CountyOption>,
    /// Initially selected county id
    pub default: String,
}

// ============================================
// HEALTH DTOs
// ============================================

/// Full health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall status: healthy or unhealthy
    pub status: String,
    /// Number of air-quality rows loaded
    pub air_quality_rows: usize,
    /// Number of mortality rows loaded
    pub mortality_rows: usize,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Application version
    pub version: String,
}
