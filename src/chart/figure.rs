//! Plotly-compatible figure descriptions.
//!
//! Figures are plain serde structs. The page embeds them as JSON and the
//! browser renders them, so trace toggling never reaches the server.

use chrono::NaiveDate;
use serde::Serialize;
use strum::IntoEnumIterator;

use super::preset::{Preset, TraceKind, Visibility};
use crate::domain::{AnomalySeries, ModelPoint};

pub const TREND_TITLE: &str = "Temperature Anomalies with Trends and Predictions (to 2045)";
pub const ANOMALY_AXIS_TITLE: &str = "Anomaly (°C)";

#[derive(Debug, Clone, Serialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AxisValues {
    Numbers(Vec<f64>),
    Dates(Vec<NaiveDate>),
}

impl AxisValues {
    pub fn len(&self) -> usize {
        match self {
            Self::Numbers(v) => v.len(),
            Self::Dates(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Trace {
    #[serde(rename = "type")]
    pub trace_type: &'static str,
    pub name: String,
    pub mode: &'static str,
    pub x: AxisValues,
    /// Missing values serialize as `null` and render as gaps.
    pub y: Vec<Option<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
}

impl Trace {
    pub fn scatter(name: impl Into<String>, mode: &'static str, x: AxisValues, y: Vec<Option<f64>>) -> Self {
        Self {
            trace_type: "scatter",
            name: name.into(),
            mode,
            x,
            y,
            visible: None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Title {
    pub text: String,
}

impl Title {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Axis {
    pub title: Title,
}

#[derive(Debug, Clone, Serialize)]
pub struct Layout {
    pub title: Title,
    pub xaxis: Axis,
    pub yaxis: Axis,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hovermode: Option<&'static str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub updatemenus: Vec<UpdateMenu>,
}

impl Layout {
    pub fn new(title: impl Into<String>, x_title: &str, y_title: &str) -> Self {
        Self {
            title: Title::new(title),
            xaxis: Axis { title: Title::new(x_title) },
            yaxis: Axis { title: Title::new(y_title) },
            hovermode: None,
            updatemenus: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct UpdateMenu {
    pub buttons: Vec<Button>,
    pub direction: &'static str,
    pub showactive: bool,
    pub x: f64,
    pub xanchor: &'static str,
    pub y: f64,
    pub yanchor: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Button {
    pub label: &'static str,
    pub method: &'static str,
    /// `[trace restyle, layout relayout]`
    pub args: (RestyleArgs, RelayoutArgs),
}

#[derive(Debug, Clone, Serialize)]
pub struct RestyleArgs {
    pub visible: Visibility,
}

#[derive(Debug, Clone, Serialize)]
pub struct RelayoutArgs {
    pub title: Title,
}

impl From<Preset> for Button {
    fn from(preset: Preset) -> Self {
        Self {
            label: preset.label(),
            method: "update",
            args: (
                RestyleArgs {
                    visible: preset.visibility(),
                },
                RelayoutArgs {
                    title: Title::new(preset.title()),
                },
            ),
        }
    }
}

/// Dropdown holding every preset, anchored right of the plot area.
pub fn preset_menu() -> UpdateMenu {
    UpdateMenu {
        buttons: Preset::iter().map(Button::from).collect(),
        direction: "down",
        showactive: true,
        x: 1.2,
        xanchor: "left",
        y: 1.1,
        yanchor: "top",
    }
}

fn model_column(point: &ModelPoint, kind: TraceKind) -> Option<f64> {
    match kind {
        TraceKind::Observed => point.anomaly,
        TraceKind::LinearTrend => point.predicted_linear,
        TraceKind::PolynomialTrend => point.predicted_poly,
        TraceKind::LinearFuture => point.linear_future,
        TraceKind::PolynomialFuture => point.poly_future,
        TraceKind::ProphetTrend => point.prophet_trend,
    }
}

/// The interactive trend/forecast chart: one trace per `TraceKind`, all
/// sharing the model years as x.
pub fn trend_figure(points: &[ModelPoint]) -> Figure {
    let years: Vec<f64> = points.iter().map(|p| p.year).collect();

    let data = TraceKind::iter()
        .map(|kind| {
            Trace::scatter(
                kind.name(),
                kind.mode(),
                AxisValues::Numbers(years.clone()),
                points.iter().map(|p| model_column(p, kind)).collect(),
            )
        })
        .collect();

    let mut layout = Layout::new(TREND_TITLE, "Year", ANOMALY_AXIS_TITLE);
    layout.hovermode = Some("closest");
    layout.updatemenus = vec![preset_menu()];

    Figure { data, layout }
}

/// Small line chart of one anomaly series against its dates.
pub fn series_figure(series: &AnomalySeries) -> Figure {
    let trace = Trace::scatter(
        series.granularity.title(),
        "lines",
        AxisValues::Dates(series.points.iter().map(|p| p.date).collect()),
        series.points.iter().map(|p| p.anomaly).collect(),
    );

    Figure {
        data: vec![trace],
        layout: Layout::new(series.granularity.title(), "Year", ANOMALY_AXIS_TITLE),
    }
}
