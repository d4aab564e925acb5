//! Startup pipeline and the immutable state served afterwards.
//!
//! Runs once, synchronously: load the CSVs, build the forecast summary,
//! overwrite the derived file, then build every figure and the HTML page.

use std::path::Path;
use std::sync::Arc;

use axum::body::Bytes;
use strum::IntoEnumIterator;
use tracing::info;

use crate::chart::{self, Figure};
use crate::config::{Config, DataConfig};
use crate::data::{loader, rolling};
use crate::domain::{AnomalySeries, ForecastSummary, Granularity, ModelPoint};
use crate::error::Result;
use crate::page::{self, PageContent};

/// Everything loaded or derived at startup. Never mutated afterwards.
#[derive(Debug)]
pub struct Dashboard {
    pub model: Vec<ModelPoint>,
    /// One entry per `Granularity`, in declaration order, with its figure.
    pub series: Vec<(AnomalySeries, Figure)>,
    pub summary: ForecastSummary,
    pub trend: Figure,
    /// Rendered page, shared by every `GET /` response.
    pub html: Bytes,
}

impl Dashboard {
    pub fn load(cfg: &Config) -> Result<Self> {
        let model = loader::load_model_series(Path::new(&cfg.data.model_series))?;
        let series = load_all_series(&cfg.data)?;

        let summary = ForecastSummary::from_model_series(&model, cfg.forecast.years())?;
        summary.write_csv(Path::new(&cfg.data.forecast_output))?;

        let trend = chart::trend_figure(&model);
        let series: Vec<_> = series
            .into_iter()
            .map(|s| {
                let figure = chart::series_figure(&s);
                (s, figure)
            })
            .collect();

        let html = page::render(&PageContent {
            series: &series,
            trend: &trend,
            summary: &summary,
            plotly_cdn: &cfg.page.plotly_cdn,
        })?;
        info!(bytes = html.len(), "rendered dashboard page");

        Ok(Self {
            model,
            series,
            summary,
            trend,
            html: Bytes::from(html),
        })
    }

    pub fn series(&self, granularity: Granularity) -> Option<&AnomalySeries> {
        self.series
            .iter()
            .map(|(s, _)| s)
            .find(|s| s.granularity == granularity)
    }
}

fn load_all_series(data: &DataConfig) -> Result<Vec<AnomalySeries>> {
    let raw = loader::load_anomaly_series(Path::new(&data.raw_series), Granularity::Raw)?;

    Granularity::iter()
        .map(|g| {
            let path = match g {
                Granularity::Raw => return Ok(raw.clone()),
                _ if data.derive_rolling => {
                    let derived = rolling::derive_series(&raw, g);
                    info!(granularity = %g, rows = derived.len(), "derived rolling series");
                    return Ok(derived);
                }
                Granularity::Rolling1y => &data.rolling_1y_series,
                Granularity::Rolling5y => &data.rolling_5y_series,
                Granularity::Rolling10y => &data.rolling_10y_series,
            };
            loader::load_anomaly_series(Path::new(path), g)
        })
        .collect()
}

/// Shared application state handed to the axum handlers.
#[derive(Clone)]
pub struct AppState {
    pub cfg: Config,
    pub dashboard: Arc<Dashboard>,
}

impl AppState {
    pub fn new(cfg: Config) -> Result<Self> {
        let dashboard = Arc::new(Dashboard::load(&cfg)?);
        Ok(Self { cfg, dashboard })
    }
}
