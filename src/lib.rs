//! Global temperature anomaly dashboard.
//!
//! Reads precomputed anomaly and model series from CSV, derives the
//! 2040–2045 forecast summary, and serves an interactive chart page.

pub mod api;
pub mod chart;
pub mod config;
pub mod dashboard;
pub mod data;
pub mod domain;
pub mod error;
pub mod forecast;
pub mod page;
pub mod telemetry;

pub use crate::dashboard::{AppState, Dashboard};
pub use crate::error::{DashboardError, Result};
