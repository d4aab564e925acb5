use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter, EnumString};

/// Time granularity of an anomaly series.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, EnumString, AsRefStr,
)]
pub enum Granularity {
    #[strum(serialize = "raw")]
    #[serde(rename = "raw")]
    Raw,
    #[strum(serialize = "1y")]
    #[serde(rename = "1y")]
    Rolling1y,
    #[strum(serialize = "5y")]
    #[serde(rename = "5y")]
    Rolling5y,
    #[strum(serialize = "10y")]
    #[serde(rename = "10y")]
    Rolling10y,
}

impl Granularity {
    /// URL slug, also used as the HTML element id suffix.
    pub fn slug(&self) -> &'static str {
        match self {
            Self::Raw => "raw",
            Self::Rolling1y => "1y",
            Self::Rolling5y => "5y",
            Self::Rolling10y => "10y",
        }
    }

    /// Trailing window length in years, `None` for the raw series.
    pub fn window_years(&self) -> Option<u32> {
        match self {
            Self::Raw => None,
            Self::Rolling1y => Some(1),
            Self::Rolling5y => Some(5),
            Self::Rolling10y => Some(10),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Raw => "Raw Temperature Anomalies",
            Self::Rolling1y => "1-Year Rolling Mean",
            Self::Rolling5y => "5-Year Rolling Mean",
            Self::Rolling10y => "10-Year Rolling Mean",
        }
    }
}

impl std::fmt::Display for Granularity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.slug())
    }
}

/// One observation of an anomaly series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnomalyPoint {
    pub date: NaiveDate,
    pub year: i32,
    /// Missing at the head of a rolling window or where the source cell is empty.
    pub anomaly: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnomalySeries {
    pub granularity: Granularity,
    pub points: Vec<AnomalyPoint>,
}

impl AnomalySeries {
    pub fn new(granularity: Granularity, points: Vec<AnomalyPoint>) -> Self {
        Self {
            granularity,
            points,
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// One row of the primary model file. Values are precomputed upstream.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelPoint {
    pub year: f64,
    pub anomaly: Option<f64>,
    pub predicted_linear: Option<f64>,
    pub predicted_poly: Option<f64>,
    pub linear_future: Option<f64>,
    pub poly_future: Option<f64>,
    pub prophet_trend: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_granularity_slug_round_trip() {
        for g in Granularity::iter() {
            assert_eq!(Granularity::from_str(g.slug()).unwrap(), g);
            assert_eq!(g.as_ref(), g.slug());
        }
        assert!(Granularity::from_str("2y").is_err());
    }

    #[test]
    fn test_window_years() {
        assert_eq!(Granularity::Raw.window_years(), None);
        assert_eq!(Granularity::Rolling10y.window_years(), Some(10));
    }
}
