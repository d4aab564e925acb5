use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading, deriving or persisting dashboard data.
///
/// None of these are recovered from: startup aborts on the first one.
#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error in {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("missing column '{column}' in {path}")]
    MissingColumn { path: PathBuf, column: String },

    #[error("unparseable date '{value}' in {path} (record {record})")]
    DateParse {
        path: PathBuf,
        record: usize,
        value: String,
    },

    #[error("year {0} not present in model series")]
    MissingForecastYear(i32),

    #[error("year {year} has no value for '{column}'")]
    MissingValue { year: i32, column: &'static str },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl DashboardError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn csv(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        Self::Csv {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, DashboardError>;
