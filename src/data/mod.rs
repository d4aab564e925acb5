pub mod loader;
pub mod rolling;

pub use loader::{load_anomaly_series, load_model_series, parse_date};
pub use rolling::{derive_series, rolling_mean};
