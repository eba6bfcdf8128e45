//! Counties Route
//!
//! - GET /api/v1/counties - The enumerated selection domain for the control

use axum::Json;

use crate::api::dto::{CountyListResponse, CountyOption};
use crate::data::County;

/// GET /api/v1/counties
///
/// List the selectable counties and the default selection. The control layer
/// builds its dropdown from this; it is the same closed set the charts
/// endpoint validates against.
pub async fn list_counties() -> Json<CountyListResponse> {
    Json(CountyListResponse {
        counties: County::ALL
            .iter()
            .map(|c| CountyOption {
                id: c.id().to_string(),
                label: c.label().to_string(),
            })
            .collect(),
        default: County::default_selection().id().to_string(),
    })
}
