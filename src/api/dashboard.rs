use std::str::FromStr;

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::header,
    response::{Html, IntoResponse},
    Json,
};
use serde::Serialize;

use crate::{
    api::{error::ApiError, response::ApiResponse},
    chart::{all_presets, Figure, PresetInfo},
    dashboard::AppState,
    domain::{AnomalyPoint, ForecastRow, Granularity},
};

/// GET / - The dashboard page
pub async fn index(State(state): State<AppState>) -> Html<Bytes> {
    Html(state.dashboard.html.clone())
}

/// GET /api/v1/figure - Trend/forecast figure with its preset dropdown
pub async fn get_trend_figure(State(state): State<AppState>) -> Json<Figure> {
    Json(state.dashboard.trend.clone())
}

/// GET /api/v1/forecast - Forecast summary rows
pub async fn get_forecast(State(state): State<AppState>) -> Json<ApiResponse<Vec<ForecastRow>>> {
    let rows = state.dashboard.summary.rows.clone();
    let count = rows.len();
    Json(ApiResponse::success(rows).with_count(count))
}

/// GET /api/v1/forecast.csv - Forecast summary in the derived-file format
pub async fn get_forecast_csv(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let bytes = state.dashboard.summary.to_csv_bytes()?;
    Ok(([(header::CONTENT_TYPE, "text/csv; charset=utf-8")], bytes))
}

#[derive(Debug, Serialize)]
pub struct SeriesData {
    granularity: Granularity,
    title: &'static str,
    points: Vec<AnomalyPoint>,
}

/// GET /api/v1/series/:granularity - One anomaly series (`raw`, `1y`, `5y`, `10y`)
pub async fn get_series(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<ApiResponse<SeriesData>>, ApiError> {
    let granularity = Granularity::from_str(&slug)
        .map_err(|_| ApiError::NotFound(format!("series '{}'", slug)))?;
    let series = state
        .dashboard
        .series(granularity)
        .ok_or_else(|| ApiError::NotFound(format!("series '{}'", slug)))?;

    let count = series.len();
    Ok(Json(
        ApiResponse::success(SeriesData {
            granularity,
            title: granularity.title(),
            points: series.points.clone(),
        })
        .with_count(count),
    ))
}

/// GET /api/v1/presets - Dropdown presets and their visibility vectors
pub async fn get_presets() -> Json<ApiResponse<Vec<PresetInfo>>> {
    let presets = all_presets();
    let count = presets.len();
    Json(ApiResponse::success(presets).with_count(count))
}
