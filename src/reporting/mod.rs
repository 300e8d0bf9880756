//! Page generation and logging
//!
//! This module renders the dashboard HTML pages and holds the
//! structured logging helpers used across the application.

pub mod dashboard;
pub mod logging;

// Re-export commonly used items
pub use dashboard::{HtmlDashboard, PageMode};
