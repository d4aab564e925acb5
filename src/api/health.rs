use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;

use crate::dashboard::AppState;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    status: String,
    version: &'static str,
    timestamp: chrono::DateTime<chrono::Utc>,
    checks: HealthChecks,
}

/// Individual health checks
#[derive(Debug, Serialize)]
pub struct HealthChecks {
    data: ComponentHealth,
}

/// Health status of a component
#[derive(Debug, Serialize)]
pub struct ComponentHealth {
    status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    model_rows: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    forecast_rows: Option<usize>,
}

impl ComponentHealth {
    fn healthy(model_rows: usize, forecast_rows: usize) -> Self {
        Self {
            status: "healthy".to_string(),
            model_rows: Some(model_rows),
            forecast_rows: Some(forecast_rows),
        }
    }
}

/// GET /health - Health check endpoint
///
/// Data is loaded before the listener binds, so a running server always
/// reports its row counts.
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let dashboard = &state.dashboard;
    let response = HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION"),
        timestamp: chrono::Utc::now(),
        checks: HealthChecks {
            data: ComponentHealth::healthy(dashboard.model.len(), dashboard.summary.len()),
        },
    };

    (StatusCode::OK, Json(response))
}

/// GET /health/ready - Readiness check
pub async fn readiness_check() -> impl IntoResponse {
    StatusCode::OK
}

/// GET /health/live - Liveness check
pub async fn liveness_check() -> impl IntoResponse {
    StatusCode::OK
}
