//! Dashboard state
//!
//! Each dashboard loads its datasets once, derives the views it needs and
//! answers the page's callbacks from that read-only state.

pub mod summary;
pub mod topics;

use serde::Serialize;
use std::fmt;

// Re-export commonly used items
pub use summary::{SummaryDashboard, SummaryFigures};
pub use topics::{QuarterFigures, QuarterOption, TopicsDashboard, TrendFigures};

/// The two dashboards the binary can serve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DashboardKind {
    #[default]
    Topics,
    Summary,
}

impl DashboardKind {
    pub fn name(self) -> &'static str {
        match self {
            DashboardKind::Topics => "topics",
            DashboardKind::Summary => "summary",
        }
    }
}

impl fmt::Display for DashboardKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
