//! Countyscope HTTP API
//!
//! HTTP layer for the dashboard, built with Axum.
//!
//! # Endpoints
//!
//! ## Dashboard
//! - `GET /` - The dashboard page (dropdown plus two chart panels)
//!
//! ## Charts
//! - `GET /api/v1/charts?county=<id>` - Both chart specs for a selection
//! - `GET /api/v1/counties` - The enumerated selection domain
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//! - `GET /health` - Full health status
//!
//! # Example
//!
//! ```rust,ignore
//! use countyscope::api::{serve, AppState};
//! use countyscope::config::Config;
//! use countyscope::data::load_datasets;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load_default();
//!     let datasets = Arc::new(load_datasets(&config.data)?);
//!     let state = AppState::new(datasets, config.server.clone());
//!     serve(state, &config.server).await?;
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::AppState;

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::ServerConfig;

/// Build the API router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/charts", get(routes::charts::get_charts))
        .route("/counties", get(routes::counties::list_counties));

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    let shared_state = Arc::new(state);

    Router::new()
        .route("/", get(routes::page::dashboard))
        .nest("/api/v1", api_routes)
        .nest("/health", health_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(shared_state)
}

/// Start the API server
pub async fn serve(state: AppState, config: &ServerConfig) -> Result<(), ApiError> {
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Countyscope dashboard listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Countyscope shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{AirQualityRecord, County, Datasets, MortalityRecord};
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::util::ServiceExt;

    fn test_datasets() -> Datasets {
        Datasets {
            air_quality: vec![
                AirQualityRecord { year: 2019, aqi: 42.0, county: County::Suffolk },
                AirQualityRecord { year: 2021, aqi: 38.0, county: County::Suffolk },
                AirQualityRecord { year: 2019, aqi: 61.0, county: County::LosAngeles },
            ],
            mortality: vec![
                MortalityRecord { year: 2018, deaths: 12.0, county: County::Suffolk },
                MortalityRecord { year: 2018, deaths: 5.0, county: County::LosAngeles },
                MortalityRecord { year: 2019, deaths: 9.0, county: County::LosAngeles },
            ],
        }
    }

    fn create_test_app() -> Router {
        let state = AppState::new(Arc::new(test_datasets()), ServerConfig::default());
        build_router(state)
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
        (status, value)
    }

    #[tokio::test]
    async fn test_dashboard_page() {
        let app = create_test_app();
        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_endpoints() {
        for uri in ["/health/live", "/health/ready", "/health"] {
            let app = create_test_app();
            let response = app
                .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK, "{uri}");
        }
    }

    #[tokio::test]
    async fn test_counties_lists_closed_domain() {
        let (status, body) = get_json(create_test_app(), "/api/v1/counties").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["default"], "suffolk");
        let counties = body["counties"].as_array().unwrap();
        assert_eq!(counties.len(), 2);
        assert_eq!(counties[0]["id"], "suffolk");
        assert_eq!(counties[0]["label"], "Suffolk County, MA");
        assert_eq!(counties[1]["id"], "los-angeles");
    }

    #[tokio::test]
    async fn test_charts_defaults_to_suffolk() {
        let (status, body) = get_json(create_test_app(), "/api/v1/charts").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["county"], "suffolk");
        assert_eq!(body["air_quality"]["kind"], "line");
        assert_eq!(body["air_quality"]["points"].as_array().unwrap().len(), 2);
        assert_eq!(body["mortality"]["kind"], "horizontal_bar");
    }

    #[tokio::test]
    async fn test_charts_for_selected_county() {
        let (status, body) =
            get_json(create_test_app(), "/api/v1/charts?county=los-angeles").await;
        assert_eq!(status, StatusCode::OK);

        let bars = body["mortality"]["points"].as_array().unwrap();
        assert_eq!(bars.len(), 2);
        assert_eq!(bars[0]["value"], 5.0);
        assert_eq!(bars[1]["value"], 9.0);

        // Suffolk's bar never leaks into the Los Angeles chart
        assert!(bars.iter().all(|p| p["value"] != 12.0));
    }

    #[tokio::test]
    async fn test_charts_rejects_unknown_county() {
        let (status, body) = get_json(create_test_app(), "/api/v1/charts?county=cook").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_charts_identical_across_requests() {
        let (_, first) = get_json(create_test_app(), "/api/v1/charts?county=suffolk").await;
        let (_, other) = get_json(create_test_app(), "/api/v1/charts?county=los-angeles").await;
        let (_, back) = get_json(create_test_app(), "/api/v1/charts?county=suffolk").await;
        assert_ne!(first, other);
        assert_eq!(first, back);
    }
}
