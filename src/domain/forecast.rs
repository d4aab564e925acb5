use serde::{Deserialize, Serialize};

/// Round to two decimal places, ties to even.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

/// One year of the forecast summary table.
///
/// Field names serialize to the derived CSV header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastRow {
    #[serde(rename = "Year")]
    pub year: i32,
    #[serde(rename = "Linear_prediction")]
    pub linear: f64,
    #[serde(rename = "Polynomial_prediction")]
    pub polynomial: f64,
    #[serde(rename = "Prophet_prediction")]
    pub prophet: f64,
    #[serde(rename = "Average")]
    pub average: f64,
}

impl ForecastRow {
    /// Build a row from unrounded predictions. The average is taken before rounding.
    pub fn from_predictions(year: i32, linear: f64, polynomial: f64, prophet: f64) -> Self {
        let average = (linear + polynomial + prophet) / 3.0;
        Self {
            year,
            linear: round2(linear),
            polynomial: round2(polynomial),
            prophet: round2(prophet),
            average: round2(average),
        }
    }
}

/// Forecast summary, one row per year in ascending order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastSummary {
    pub rows: Vec<ForecastRow>,
}

impl ForecastSummary {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn years(&self) -> impl Iterator<Item = i32> + '_ {
        self.rows.iter().map(|r| r.year)
    }
}
