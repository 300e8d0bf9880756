//! Chart construction
//!
//! This module turns tables into Plotly figure objects: the shared dark
//! theme, the figure type, and the figures of both dashboards.

pub mod figure;
pub mod summary;
pub mod theme;
pub mod topics;

// Re-export commonly used items
pub use figure::Figure;
pub use topics::TrendKind;
