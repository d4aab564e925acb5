//! Shared CSV fixtures for the integration tests.

#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;
use temperature_anomaly_dashboard::config::{Config, DataConfig};

pub const MODEL_HEADER: &str =
    "Year,Anomaly,Predicted_linear,Predicted_poly,Linear_future,Poly_future,Prophet_Trend";

/// Observed years 1990..=2020, projections 2021..=2050.
pub fn model_csv() -> String {
    let mut out = String::from(MODEL_HEADER);
    out.push('\n');
    for year in 1990..=2050 {
        let t = f64::from(year - 1990);
        if year <= 2020 {
            out.push_str(&format!(
                "{},{:.3},{:.4},{:.4},,,{:.4}\n",
                year,
                0.25 + 0.018 * t + if year % 2 == 0 { 0.04 } else { -0.03 },
                0.25 + 0.018 * t,
                0.26 + 0.012 * t + 0.0002 * t * t,
                0.255 + 0.017 * t,
            ));
        } else {
            out.push_str(&format!(
                "{},,,,{:.4},{:.4},{:.4}\n",
                year,
                0.25 + 0.018 * t,
                0.26 + 0.012 * t + 0.0002 * t * t,
                0.255 + 0.017 * t,
            ));
        }
    }
    out
}

/// Monthly raw anomalies for 1990..=2020.
pub fn anomaly_csv() -> String {
    let mut out = String::from("Date,Anomaly\n");
    for year in 1990..=2020 {
        for month in 1..=12 {
            let t = f64::from(year - 1990) + f64::from(month - 1) / 12.0;
            out.push_str(&format!(
                "{}-{:02}-01,{:.3}\n",
                year,
                month,
                0.25 + 0.018 * t
            ));
        }
    }
    out
}

pub fn anomaly_rows() -> usize {
    31 * 12
}

/// Write every input file into `dir` and return a config pointing at it.
pub fn write_fixture(dir: &Path) -> Config {
    fs::write(dir.join("data.csv"), model_csv()).unwrap();
    for name in [
        "anomaly_raw.csv",
        "anomaly_rolling_1y.csv",
        "anomaly_rolling_5y.csv",
        "anomaly_rolling_10y.csv",
    ] {
        fs::write(dir.join(name), anomaly_csv()).unwrap();
    }

    Config {
        data: DataConfig::in_dir(dir),
        ..Config::default()
    }
}

pub fn fixture() -> (TempDir, Config) {
    let dir = TempDir::new().unwrap();
    let cfg = write_fixture(dir.path());
    (dir, cfg)
}
