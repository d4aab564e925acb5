//! Static HTML layout of the dashboard.
//!
//! The page is rendered once at startup. Charts are drawn client-side by
//! Plotly from figure JSON embedded in the document.

use itertools::Itertools;
use serde::Serialize;

use crate::chart::Figure;
use crate::domain::{AnomalySeries, ForecastSummary};
use crate::error::Result;

pub const PAGE_TITLE: &str = "Global Temperature Anomaly Dashboard";
pub const HEADING: &str = "Global Temperature Anomalies";
pub const DESCRIPTION: &str = "This dashboard visualizes global temperature anomalies over the years, \
including linear and polynomial trend lines as well as future predictions.";

pub const TREND_CHART_ID: &str = "anomaly-graph";

const STYLE: &str = r#"
body { margin: 0 auto; max-width: 1200px; padding: 0 16px; }
h1 { text-align: center; color: #333; font-family: Arial; }
p.description { text-align: center; color: #666; font-family: Arial; margin-bottom: 20px; }
h2 { color: #333; font-family: Arial; }
.series-grid { display: grid; grid-template-columns: repeat(2, 1fr); gap: 12px; }
.series-chart { height: 320px; }
.trend-chart { height: 560px; }
table.forecast { border-collapse: collapse; margin: 0 auto 40px; font-family: Arial; }
table.forecast th, table.forecast td { border: 1px solid #ccc; padding: 6px 12px; text-align: right; }
table.forecast th { background: #f4f4f4; }
"#;

/// Everything the page shows, fully prepared.
pub struct PageContent<'a> {
    pub series: &'a [(AnomalySeries, Figure)],
    pub trend: &'a Figure,
    pub summary: &'a ForecastSummary,
    pub plotly_cdn: &'a str,
}

pub fn render(content: &PageContent<'_>) -> Result<String> {
    let mut charts = Vec::with_capacity(content.series.len() + 1);

    let series_divs = content
        .series
        .iter()
        .map(|(series, figure)| {
            let id = format!("series-{}", series.granularity.slug());
            charts.push((id.clone(), figure));
            format!(r#"<div id="{}" class="series-chart"></div>"#, escape(&id))
        })
        .join("\n      ");
    charts.push((TREND_CHART_ID.to_string(), content.trend));

    let scripts = charts
        .iter()
        .map(|(id, figure)| plot_script(id, figure))
        .collect::<Result<Vec<_>>>()?
        .join("\n    ");

    Ok(format!(
        r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="utf-8">
    <title>{title}</title>
    <script src="{cdn}"></script>
    <style>{style}</style>
  </head>
  <body>
    <h1>{heading}</h1>
    <div>
      <p class="description">{description}</p>
    </div>
    <h2>Observed Anomalies</h2>
    <div class="series-grid">
      {series_divs}
    </div>
    <h2>Trends and Predictions</h2>
    <div id="{trend_id}" class="trend-chart"></div>
    <h2>Forecast Summary</h2>
    {table}
    <script>
    {scripts}
    </script>
  </body>
</html>
"#,
        title = escape(PAGE_TITLE),
        cdn = escape(content.plotly_cdn),
        style = STYLE,
        heading = escape(HEADING),
        description = escape(DESCRIPTION),
        series_divs = series_divs,
        trend_id = TREND_CHART_ID,
        table = forecast_table(content.summary),
        scripts = scripts,
    ))
}

/// Forecast summary as an HTML table, two decimals per cell.
pub fn forecast_table(summary: &ForecastSummary) -> String {
    let header = [
        "Year",
        "Linear_prediction",
        "Polynomial_prediction",
        "Prophet_prediction",
        "Average",
    ]
    .iter()
    .map(|h| format!("<th>{}</th>", escape(h)))
    .join("");

    let body = summary
        .rows
        .iter()
        .map(|r| {
            format!(
                "<tr><td>{}</td><td>{:.2}</td><td>{:.2}</td><td>{:.2}</td><td>{:.2}</td></tr>",
                r.year, r.linear, r.polynomial, r.prophet, r.average
            )
        })
        .join("\n      ");

    format!(
        "<table class=\"forecast\">\n      <thead><tr>{}</tr></thead>\n      <tbody>\n      {}\n      </tbody>\n    </table>",
        header, body
    )
}

fn plot_script<T: Serialize>(id: &str, figure: &T) -> Result<String> {
    Ok(format!(
        "(function (fig) {{ Plotly.newPlot({}, fig.data, fig.layout, {{responsive: true}}); }})({});",
        script_json(id)?,
        script_json(figure)?,
    ))
}

/// JSON safe for inlining in a `<script>` element.
pub fn script_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string(value)?.replace("</", "<\\/"))
}

pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
