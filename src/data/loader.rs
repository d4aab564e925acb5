//! CSV readers for the model series and the anomaly series.
//!
//! Every failure is fatal: a missing file, a missing column or an
//! unparseable date aborts the load. Rows are never skipped, so each series
//! keeps the row count of its source file.

use std::fs::File;
use std::path::Path;

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use serde::Deserialize;
use tracing::{debug, info};

use crate::domain::{AnomalyPoint, AnomalySeries, Granularity, ModelPoint};
use crate::error::{DashboardError, Result};

pub const MODEL_COLUMNS: [&str; 7] = [
    "Year",
    "Anomaly",
    "Predicted_linear",
    "Predicted_poly",
    "Linear_future",
    "Poly_future",
    "Prophet_Trend",
];

pub const ANOMALY_COLUMNS: [&str; 2] = ["Date", "Anomaly"];

#[derive(Debug, Deserialize)]
struct ModelRecord {
    #[serde(rename = "Year")]
    year: f64,
    #[serde(rename = "Anomaly")]
    anomaly: Option<f64>,
    #[serde(rename = "Predicted_linear")]
    predicted_linear: Option<f64>,
    #[serde(rename = "Predicted_poly")]
    predicted_poly: Option<f64>,
    #[serde(rename = "Linear_future")]
    linear_future: Option<f64>,
    #[serde(rename = "Poly_future")]
    poly_future: Option<f64>,
    #[serde(rename = "Prophet_Trend")]
    prophet_trend: Option<f64>,
}

impl From<ModelRecord> for ModelPoint {
    fn from(r: ModelRecord) -> Self {
        Self {
            year: r.year,
            anomaly: finite(r.anomaly),
            predicted_linear: finite(r.predicted_linear),
            predicted_poly: finite(r.predicted_poly),
            linear_future: finite(r.linear_future),
            poly_future: finite(r.poly_future),
            prophet_trend: finite(r.prophet_trend),
        }
    }
}

#[derive(Debug, Deserialize)]
struct AnomalyRecord {
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Anomaly")]
    anomaly: Option<f64>,
}

/// Load the primary model file (observed anomaly plus precomputed fits).
pub fn load_model_series(path: &Path) -> Result<Vec<ModelPoint>> {
    let mut reader = open_reader(path, &MODEL_COLUMNS)?;

    let points = reader
        .deserialize::<ModelRecord>()
        .map(|row| row.map(ModelPoint::from).map_err(|e| DashboardError::csv(path, e)))
        .collect::<Result<Vec<_>>>()?;

    info!(path = %path.display(), rows = points.len(), "loaded model series");
    Ok(points)
}

/// Load a `Date,Anomaly` file and derive the year of every row.
pub fn load_anomaly_series(path: &Path, granularity: Granularity) -> Result<AnomalySeries> {
    let mut reader = open_reader(path, &ANOMALY_COLUMNS)?;

    let mut points = Vec::new();
    for (idx, row) in reader.deserialize::<AnomalyRecord>().enumerate() {
        let record = row.map_err(|e| DashboardError::csv(path, e))?;
        let date = parse_date(&record.date).ok_or_else(|| DashboardError::DateParse {
            path: path.to_path_buf(),
            record: idx + 1,
            value: record.date.clone(),
        })?;
        points.push(AnomalyPoint {
            date,
            year: date.year(),
            anomaly: finite(record.anomaly),
        });
    }

    info!(
        path = %path.display(),
        granularity = %granularity,
        rows = points.len(),
        "loaded anomaly series"
    );
    Ok(AnomalySeries::new(granularity, points))
}

/// Parse the date formats seen in upstream exports.
///
/// Month-only and year-only values resolve to the first day of the period.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();

    for fmt in ["%Y-%m-%d", "%Y/%m/%d"] {
        if let Ok(d) = NaiveDate::parse_from_str(value, fmt) {
            return Some(d);
        }
    }
    for fmt in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, fmt) {
            return Some(dt.date());
        }
    }
    if let Some((y, m)) = value.split_once('-') {
        if let (Ok(y), Ok(m)) = (y.parse::<i32>(), m.parse::<u32>()) {
            return NaiveDate::from_ymd_opt(y, m, 1);
        }
    }
    value
        .parse::<i32>()
        .ok()
        .and_then(|y| NaiveDate::from_ymd_opt(y, 1, 1))
}

fn open_reader(path: &Path, required: &[&str]) -> Result<csv::Reader<File>> {
    let file = File::open(path).map_err(|e| DashboardError::io(path, e))?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(file);

    let headers = reader
        .headers()
        .map_err(|e| DashboardError::csv(path, e))?
        .clone();
    debug!(path = %path.display(), ?headers, "csv headers");

    for column in required {
        if !headers.iter().any(|h| h == *column) {
            return Err(DashboardError::MissingColumn {
                path: path.to_path_buf(),
                column: (*column).to_string(),
            });
        }
    }
    Ok(reader)
}

// NaN cells read as missing
fn finite(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}
