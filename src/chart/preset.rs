use serde::Serialize;
use strum::{EnumCount, EnumIter, IntoEnumIterator};

/// Traces of the trend/forecast chart, in plotting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, EnumCount)]
pub enum TraceKind {
    Observed,
    LinearTrend,
    PolynomialTrend,
    LinearFuture,
    PolynomialFuture,
    ProphetTrend,
}

pub const TRACE_COUNT: usize = TraceKind::COUNT;

pub type Visibility = [bool; TRACE_COUNT];

impl TraceKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Observed => "Observed",
            Self::LinearTrend => "Linear Trend",
            Self::PolynomialTrend => "Polynomial Trend",
            Self::LinearFuture => "Future Linear Prediction",
            Self::PolynomialFuture => "Future Polynomial Prediction",
            Self::ProphetTrend => "Prophet Trend",
        }
    }

    /// Observed values plot as markers, model curves as lines.
    pub fn mode(&self) -> &'static str {
        match self {
            Self::Observed => "markers",
            _ => "lines",
        }
    }
}

/// Dropdown presets. Each one fixes the trace visibility and the chart title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, EnumCount)]
pub enum Preset {
    LinearRegression,
    PolynomialRegression,
    LinearPrediction,
    PolynomialPrediction,
    ProphetTrend,
    LinearAndPolynomialRegressions,
    LinearRegressionAndPrediction,
    PolynomialRegressionAndPrediction,
    AllRegressions,
    ShowAll,
}

const T: bool = true;
const F: bool = false;

impl Preset {
    pub fn label(&self) -> &'static str {
        match self {
            Self::LinearRegression => "Linear Regression",
            Self::PolynomialRegression => "Polynomial Regression",
            Self::LinearPrediction => "Linear Prediction",
            Self::PolynomialPrediction => "Polynomial Prediction",
            Self::ProphetTrend => "Prophet Trend",
            Self::LinearAndPolynomialRegressions => "Linear + Polynomial Regressions",
            Self::LinearRegressionAndPrediction => "Linear Regression + Prediction",
            Self::PolynomialRegressionAndPrediction => "Polynomial Regression + Prediction",
            Self::AllRegressions => "All Regressions",
            Self::ShowAll => "Show All",
        }
    }

    /// Visibility over the traces, indexed like `TraceKind::iter()`.
    pub fn visibility(&self) -> Visibility {
        match self {
            Self::LinearRegression => [T, T, F, F, F, F],
            Self::PolynomialRegression => [T, F, T, F, F, F],
            Self::LinearPrediction => [T, F, F, T, F, F],
            Self::PolynomialPrediction => [T, F, F, F, T, F],
            Self::ProphetTrend => [T, F, F, F, F, T],
            Self::LinearAndPolynomialRegressions => [T, T, T, F, F, F],
            Self::LinearRegressionAndPrediction => [T, T, F, T, F, F],
            Self::PolynomialRegressionAndPrediction => [T, F, T, F, T, F],
            Self::AllRegressions => [T, T, T, T, T, F],
            Self::ShowAll => [T, T, T, T, T, T],
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::LinearRegression => "Linear Regression on Global Temperature Anomalies",
            Self::PolynomialRegression => "Polynomial Regression on Global Temperature Anomalies",
            Self::LinearPrediction => {
                "Linear Prediction for Global Temperature Anomalies (to 2045)"
            }
            Self::PolynomialPrediction => {
                "Polynomial Prediction for Global Temperature Anomalies (to 2045)"
            }
            Self::ProphetTrend => "Prophet Trend on Global Temperature Anomalies (to 2045)",
            Self::LinearAndPolynomialRegressions => {
                "Linear and Polynomial Regression on Global Temperature Anomalies"
            }
            Self::LinearRegressionAndPrediction => {
                "Linear Regression + Predictions on Global Temperature Anomalies (to 2045)"
            }
            Self::PolynomialRegressionAndPrediction => {
                "Polynomial Regression + Predictions on Global Temperature Anomalies (to 2045)"
            }
            Self::AllRegressions => {
                "Linear + Polynomial Regressions with Predictions on Global Temperature Anomalies (to 2045)"
            }
            Self::ShowAll => "All Models and Predictions on Global Temperature Anomalies (to 2045)",
        }
    }

    /// Names of the traces this preset shows.
    pub fn visible_traces(&self) -> Vec<&'static str> {
        TraceKind::iter()
            .zip(self.visibility())
            .filter(|(_, visible)| *visible)
            .map(|(kind, _)| kind.name())
            .collect()
    }

    pub fn describe(&self) -> PresetInfo {
        PresetInfo {
            label: self.label(),
            title: self.title(),
            visible: self.visibility(),
        }
    }
}

/// Serializable view of a preset.
#[derive(Debug, Clone, Serialize)]
pub struct PresetInfo {
    pub label: &'static str,
    pub title: &'static str,
    pub visible: Visibility,
}

pub fn all_presets() -> Vec<PresetInfo> {
    Preset::iter().map(|p| p.describe()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_ten_presets() {
        assert_eq!(Preset::COUNT, 10);
        assert_eq!(all_presets().len(), 10);
    }

    #[test]
    fn test_observed_always_visible() {
        for preset in Preset::iter() {
            assert!(preset.visibility()[0], "{:?} hides observed data", preset);
            assert_eq!(preset.visibility().len(), TRACE_COUNT);
        }
    }

    #[test]
    fn test_labels_unique() {
        let mut labels: Vec<_> = Preset::iter().map(|p| p.label()).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), Preset::COUNT);
    }

    #[rstest]
    #[case(Preset::LinearRegression, &["Observed", "Linear Trend"])]
    #[case(Preset::ProphetTrend, &["Observed", "Prophet Trend"])]
    #[case(
        Preset::PolynomialRegressionAndPrediction,
        &["Observed", "Polynomial Trend", "Future Polynomial Prediction"]
    )]
    #[case(
        Preset::ShowAll,
        &[
            "Observed",
            "Linear Trend",
            "Polynomial Trend",
            "Future Linear Prediction",
            "Future Polynomial Prediction",
            "Prophet Trend",
        ]
    )]
    fn test_visible_traces(#[case] preset: Preset, #[case] expected: &[&str]) {
        assert_eq!(preset.visible_traces(), expected);
    }

    #[rstest]
    #[case(
        Preset::LinearRegression,
        "Linear Regression",
        [T, T, F, F, F, F],
        "Linear Regression on Global Temperature Anomalies"
    )]
    #[case(
        Preset::PolynomialRegression,
        "Polynomial Regression",
        [T, F, T, F, F, F],
        "Polynomial Regression on Global Temperature Anomalies"
    )]
    #[case(
        Preset::LinearPrediction,
        "Linear Prediction",
        [T, F, F, T, F, F],
        "Linear Prediction for Global Temperature Anomalies (to 2045)"
    )]
    #[case(
        Preset::PolynomialPrediction,
        "Polynomial Prediction",
        [T, F, F, F, T, F],
        "Polynomial Prediction for Global Temperature Anomalies (to 2045)"
    )]
    #[case(
        Preset::ProphetTrend,
        "Prophet Trend",
        [T, F, F, F, F, T],
        "Prophet Trend on Global Temperature Anomalies (to 2045)"
    )]
    #[case(
        Preset::LinearAndPolynomialRegressions,
        "Linear + Polynomial Regressions",
        [T, T, T, F, F, F],
        "Linear and Polynomial Regression on Global Temperature Anomalies"
    )]
    #[case(
        Preset::LinearRegressionAndPrediction,
        "Linear Regression + Prediction",
        [T, T, F, T, F, F],
        "Linear Regression + Predictions on Global Temperature Anomalies (to 2045)"
    )]
    #[case(
        Preset::PolynomialRegressionAndPrediction,
        "Polynomial Regression + Prediction",
        [T, F, T, F, T, F],
        "Polynomial Regression + Predictions on Global Temperature Anomalies (to 2045)"
    )]
    #[case(
        Preset::AllRegressions,
        "All Regressions",
        [T, T, T, T, T, F],
        "Linear + Polynomial Regressions with Predictions on Global Temperature Anomalies (to 2045)"
    )]
    #[case(
        Preset::ShowAll,
        "Show All",
        [T, T, T, T, T, T],
        "All Models and Predictions on Global Temperature Anomalies (to 2045)"
    )]
    fn test_preset_table(
        #[case] preset: Preset,
        #[case] label: &str,
        #[case] visible: Visibility,
        #[case] title: &str,
    ) {
        assert_eq!(preset.label(), label);
        assert_eq!(preset.visibility(), visible);
        assert_eq!(preset.title(), title);
    }
}
