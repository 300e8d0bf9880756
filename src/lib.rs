//! Patent analytics dashboards
//!
//! Loads pre-aggregated patent CSV tables and serves them as two
//! interactive Plotly pages: a topic dashboard driven by a quarter
//! selector and a static summary dashboard.

pub mod app;
pub mod charts;
pub mod config;
pub mod core;
pub mod data;
pub mod reporting;
pub mod server;
pub mod ui;

// Re-export commonly used items
pub use app::{DashboardKind, SummaryDashboard, TopicsDashboard};
pub use config::{CliConfig, Config};
pub use crate::core::{DashError, Result};
pub use data::TimeTable;
