use anyhow::Result;
use figment::{providers::{Env, Format, Serialized, Toml}, Figment};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::ops::RangeInclusive;
use std::path::PathBuf;
use validator::Validate;

use crate::telemetry::{LogFormat, DEFAULT_FILTER};

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct Config {
    #[validate(nested)]
    pub server: ServerConfig,
    #[validate(nested)]
    pub data: DataConfig,
    #[validate(nested)]
    pub forecast: ForecastConfig,
    #[validate(nested)]
    pub page: PageConfig,
    #[validate(nested)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ServerConfig {
    #[validate(length(min = 1))]
    pub host: String,
    #[validate(range(min = 1))]
    pub port: u16,
    #[validate(range(min = 1))]
    pub request_timeout_secs: u64,
    pub enable_cors: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8050,
            request_timeout_secs: 30,
            enable_cors: false,
        }
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        Ok(format!("{}:{}", self.host, self.port).parse()?)
    }
}

/// Input and output file locations.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct DataConfig {
    #[validate(length(min = 1))]
    pub model_series: String,
    #[validate(length(min = 1))]
    pub raw_series: String,
    #[validate(length(min = 1))]
    pub rolling_1y_series: String,
    #[validate(length(min = 1))]
    pub rolling_5y_series: String,
    #[validate(length(min = 1))]
    pub rolling_10y_series: String,
    #[validate(length(min = 1))]
    pub forecast_output: String,
    /// Compute the rolling series from the raw series instead of reading them.
    pub derive_rolling: bool,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            model_series: "data/data.csv".to_string(),
            raw_series: "data/anomaly_raw.csv".to_string(),
            rolling_1y_series: "data/anomaly_rolling_1y.csv".to_string(),
            rolling_5y_series: "data/anomaly_rolling_5y.csv".to_string(),
            rolling_10y_series: "data/anomaly_rolling_10y.csv".to_string(),
            forecast_output: "data/forecast_2040_2045.csv".to_string(),
            derive_rolling: false,
        }
    }
}

impl DataConfig {
    /// Point every path at `dir`, keeping the default file names.
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        let at = |name: &str| dir.join(name).to_string_lossy().into_owned();
        Self {
            model_series: at("data.csv"),
            raw_series: at("anomaly_raw.csv"),
            rolling_1y_series: at("anomaly_rolling_1y.csv"),
            rolling_5y_series: at("anomaly_rolling_5y.csv"),
            rolling_10y_series: at("anomaly_rolling_10y.csv"),
            forecast_output: at("forecast_2040_2045.csv"),
            derive_rolling: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ForecastConfig {
    #[validate(range(min = 1800, max = 2500))]
    pub start_year: i32,
    #[validate(range(min = 1800, max = 2500))]
    pub end_year: i32,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            start_year: 2040,
            end_year: 2045,
        }
    }
}

impl ForecastConfig {
    pub fn years(&self) -> RangeInclusive<i32> {
        self.start_year..=self.end_year
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PageConfig {
    #[validate(length(min = 1))]
    pub plotly_cdn: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            plotly_cdn: "https://cdn.plot.ly/plotly-2.35.2.min.js".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LogConfig {
    pub format: LogFormat,
    #[validate(length(min = 1))]
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::Json,
            filter: DEFAULT_FILTER.to_string(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let _ = dotenvy::dotenv();
        Self::from_figment(
            Figment::from(Serialized::defaults(Config::default()))
                .merge(Toml::file("config/default.toml"))
                .merge(Env::prefixed("TAD__").split("__")),
        )
    }

    pub fn from_figment(figment: Figment) -> Result<Self> {
        let cfg: Config = figment.extract()?;
        cfg.check()?;
        Ok(cfg)
    }

    /// Run field validation plus the cross-field year ordering check.
    pub fn check(&self) -> Result<()> {
        self.validate()?;
        if self.forecast.start_year > self.forecast.end_year {
            anyhow::bail!(
                "forecast.start_year ({}) must not exceed forecast.end_year ({})",
                self.forecast.start_year,
                self.forecast.end_year
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn test_defaults_are_valid() {
        let cfg = Config::default();
        assert!(cfg.check().is_ok());
        assert_eq!(cfg.forecast.years(), 2040..=2045);
        assert_eq!(cfg.server.socket_addr().unwrap().port(), 8050);
    }

    #[test]
    fn test_reversed_years_rejected() {
        let mut cfg = Config::default();
        cfg.forecast.start_year = 2046;
        assert!(cfg.check().is_err());
    }

    #[test]
    fn test_out_of_range_year_rejected() {
        let mut cfg = Config::default();
        cfg.forecast.end_year = 3000;
        assert!(cfg.check().is_err());
    }

    #[test]
    fn test_toml_and_env_layering() {
        Jail::expect_with(|jail| {
            jail.create_dir("config")?;
            jail.create_file(
                "config/default.toml",
                r#"
                [server]
                port = 9100

                [data]
                derive_rolling = true
                "#,
            )?;
            jail.set_env("TAD__FORECAST__END_YEAR", "2042");
            jail.set_env("TAD__LOG__FORMAT", "pretty");

            let cfg = Config::load().map_err(|e| e.to_string())?;
            assert_eq!(cfg.server.port, 9100);
            assert_eq!(cfg.server.host, "127.0.0.1");
            assert!(cfg.data.derive_rolling);
            assert_eq!(cfg.forecast.years(), 2040..=2042);
            assert_eq!(cfg.log.format, LogFormat::Pretty);
            Ok(())
        });
    }
}
