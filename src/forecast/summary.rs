//! Forecast summary: looks up the upstream predictions for a range of years,
//! averages them and persists the table as a derived CSV.

use std::fs;
use std::ops::RangeInclusive;
use std::path::Path;

use tracing::info;

use crate::domain::{ForecastRow, ForecastSummary, ModelPoint};
use crate::error::{DashboardError, Result};

pub const DEFAULT_YEARS: RangeInclusive<i32> = 2040..=2045;

impl ForecastSummary {
    /// Build the summary from the model series.
    ///
    /// Uses the first row whose year matches exactly. A missing year or an
    /// empty prediction cell is an error.
    pub fn from_model_series(points: &[ModelPoint], years: RangeInclusive<i32>) -> Result<Self> {
        let rows = years
            .map(|year| -> Result<ForecastRow> {
                let point = points
                    .iter()
                    .find(|p| p.year == f64::from(year))
                    .ok_or(DashboardError::MissingForecastYear(year))?;

                let linear = require(point.linear_future, year, "Linear_future")?;
                let polynomial = require(point.poly_future, year, "Poly_future")?;
                let prophet = require(point.prophet_trend, year, "Prophet_Trend")?;

                Ok(ForecastRow::from_predictions(year, linear, polynomial, prophet))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { rows })
    }

    /// Serialize to CSV text with the derived-file header.
    pub fn to_csv_bytes(&self) -> Result<Vec<u8>> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        for row in &self.rows {
            writer
                .serialize(row)
                .map_err(|e| DashboardError::csv("<memory>", e))?;
        }
        writer
            .into_inner()
            .map_err(|e| DashboardError::io("<memory>", e.into_error()))
    }

    /// Write the summary to `path`, replacing any previous file.
    pub fn write_csv(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| DashboardError::io(parent, e))?;
        }
        let bytes = self.to_csv_bytes()?;
        fs::write(path, bytes).map_err(|e| DashboardError::io(path, e))?;

        info!(path = %path.display(), rows = self.len(), "wrote forecast summary");
        Ok(())
    }
}

fn require(value: Option<f64>, year: i32, column: &'static str) -> Result<f64> {
    value.ok_or(DashboardError::MissingValue { year, column })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model_point(year: f64, linear: f64, poly: f64, prophet: f64) -> ModelPoint {
        ModelPoint {
            year,
            anomaly: None,
            predicted_linear: None,
            predicted_poly: None,
            linear_future: Some(linear),
            poly_future: Some(poly),
            prophet_trend: Some(prophet),
        }
    }

    fn model_series() -> Vec<ModelPoint> {
        (2030..=2050)
            .map(|y| {
                let t = f64::from(y - 2030);
                model_point(f64::from(y), 1.0 + 0.021 * t, 1.1 + 0.037 * t, 1.05 + 0.029 * t)
            })
            .collect()
    }

    #[test]
    fn test_summary_has_six_ascending_rows() {
        let summary = ForecastSummary::from_model_series(&model_series(), DEFAULT_YEARS).unwrap();

        assert_eq!(summary.len(), 6);
        assert_eq!(summary.years().collect::<Vec<_>>(), (2040..=2045).collect::<Vec<_>>());
    }

    #[test]
    fn test_first_matching_row_wins() {
        let mut points = model_series();
        points.insert(0, model_point(2040.0, 9.0, 9.0, 9.0));

        let summary = ForecastSummary::from_model_series(&points, 2040..=2040).unwrap();
        assert_eq!(summary.rows[0].linear, 9.0);
        assert_eq!(summary.rows[0].average, 9.0);
    }

    #[test]
    fn test_missing_year_is_fatal() {
        let points: Vec<_> = model_series().into_iter().filter(|p| p.year != 2043.0).collect();

        let err = ForecastSummary::from_model_series(&points, DEFAULT_YEARS).unwrap_err();
        assert!(matches!(err, DashboardError::MissingForecastYear(2043)));
    }

    #[test]
    fn test_missing_prediction_is_fatal() {
        let mut points = model_series();
        for p in points.iter_mut().filter(|p| p.year == 2044.0) {
            p.poly_future = None;
        }

        let err = ForecastSummary::from_model_series(&points, DEFAULT_YEARS).unwrap_err();
        assert!(matches!(
            err,
            DashboardError::MissingValue {
                year: 2044,
                column: "Poly_future"
            }
        ));
    }

    #[test]
    fn test_csv_layout() {
        let points = vec![model_point(2040.0, 1.234, 1.5, 1.0)];
        let summary = ForecastSummary::from_model_series(&points, 2040..=2040).unwrap();

        let text = String::from_utf8(summary.to_csv_bytes().unwrap()).unwrap();
        assert_eq!(
            text,
            "Year,Linear_prediction,Polynomial_prediction,Prophet_prediction,Average\n\
             2040,1.23,1.5,1.0,1.24\n"
        );
    }

    mod properties {
        use super::model_point;
        use crate::domain::ForecastSummary;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn prop_average_is_rounded_mean(
                linear in -5.0f64..5.0,
                poly in -5.0f64..5.0,
                prophet in -5.0f64..5.0,
            ) {
                let points = vec![model_point(2040.0, linear, poly, prophet)];
                let summary = ForecastSummary::from_model_series(&points, 2040..=2040).unwrap();
                let row = &summary.rows[0];

                let mean = (linear + poly + prophet) / 3.0;
                let expected = (mean * 100.0).round_ties_even() / 100.0;
                prop_assert_eq!(row.average, expected);
                prop_assert_eq!(row.linear, (linear * 100.0).round_ties_even() / 100.0);
            }
        }
    }
}
