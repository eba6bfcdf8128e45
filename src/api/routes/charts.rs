//! Charts Route
//!
//! The reactive core of the dashboard: control value in, two chart specs out.
//!
//! - GET /api/v1/charts?county=<id> - Both chart specs for the selection

use axum::{
    extract::{Query, State},
    Json,
};
use std::sync::Arc;

use crate::api::dto::{ChartsParams, ChartsResponse};
use crate::api::error::ApiResult;
use crate::api::state::AppState;
use crate::chart::{air_quality_chart, mortality_chart};
use crate::data::County;

/// GET /api/v1/charts
///
/// Recompute both chart specs for the selected county. The selection is
/// validated against the closed county set before any projection happens;
/// unknown values get a 400, they never reach the filter.
pub async fn get_charts(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ChartsParams>,
) -> ApiResult<Json<ChartsResponse>> {
    let county = match params.county.as_deref() {
        Some(value) => value.parse::<County>()?,
        None => County::default_selection(),
    };

    tracing::debug!(county = %county, "Computing chart specs");

    Ok(Json(ChartsResponse {
        county: county.id().to_string(),
        air_quality: air_quality_chart(&state.datasets, county),
        mortality: mortality_chart(&state.datasets, county),
    }))
}
