//! Dataset loading and aggregation
//!
//! This module reads the CSV datasets and derives the quarterly,
//! cumulative and ranked views the dashboards display.

pub mod loader;
pub mod period;
pub mod summary;
pub mod table;

// Re-export commonly used items
pub use loader::{load_records, load_time_table};
pub use summary::{CategoryCount, IpcCount, MonthlyCount, SectionCount, YearlyCount};
pub use table::TimeTable;
