pub mod dashboard;
pub mod error;
pub mod health;
pub mod response;

use axum::{routing::get, Router};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};

use crate::{config::Config, dashboard::AppState};

fn v1_router() -> Router<AppState> {
    Router::new()
        .route("/figure", get(dashboard::get_trend_figure))
        .route("/forecast", get(dashboard::get_forecast))
        .route("/forecast.csv", get(dashboard::get_forecast_csv))
        .route("/series/:granularity", get(dashboard::get_series))
        .route("/presets", get(dashboard::get_presets))
}

pub fn router(state: AppState, cfg: &Config) -> Router {
    let mut router = Router::new()
        .route("/", get(dashboard::index))
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .route("/health/live", get(health::liveness_check))
        .nest("/api/v1", v1_router())
        .with_state(state);

    if cfg.server.enable_cors {
        let cors = CorsLayer::new()
            .allow_origin(tower_http::cors::Any)
            .allow_methods([axum::http::Method::GET])
            .allow_headers([axum::http::header::CONTENT_TYPE]);
        router = router.layer(cors);
    }

    router
        .layer(
            ServiceBuilder::new()
                .layer(TimeoutLayer::new(Duration::from_secs(cfg.server.request_timeout_secs))),
        )
        .layer(TraceLayer::new_for_http())
}
