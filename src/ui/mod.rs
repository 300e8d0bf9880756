//! User interface
//!
//! Command-line parsing for the dashboard binary.

pub mod cli;

// Re-export commonly used items
pub use cli::{Cli, Commands, cli_to_config};
