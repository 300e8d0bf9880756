// Command-line interface definitions and parsing for patentdash

use crate::app::DashboardKind;
use crate::config::CliConfig;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    // Data
    /// Directory holding the CSV datasets (default: current directory)
    #[arg(long, value_name = "DIR", global = true, help_heading = "Data")]
    pub data_dir: Option<String>,

    // Server
    /// Address to bind (default: 127.0.0.1)
    #[arg(long, value_name = "HOST", global = true, help_heading = "Server")]
    pub host: Option<String>,

    /// Port to listen on (default: 8050 for topics, 8051 for summary)
    #[arg(
        short = 'p',
        long,
        value_name = "PORT",
        global = true,
        help_heading = "Server"
    )]
    pub port: Option<u16>,

    /// Write a static HTML snapshot to PATH instead of serving
    #[arg(long, value_name = "PATH", global = true, help_heading = "Server")]
    pub export: Option<String>,

    // Output & Verbosity
    /// Suppress log output
    #[arg(short = 'q', long, global = true, help_heading = "Output & Verbosity")]
    pub quiet: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long, global = true, help_heading = "Output & Verbosity")]
    pub verbose: bool,

    // Configuration
    /// Use specific config file
    #[arg(long, value_name = "FILE", global = true, help_heading = "Configuration")]
    pub config: Option<String>,

    /// Ignore config files
    #[arg(long, global = true, help_heading = "Configuration")]
    pub no_config: bool,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Topic treemap and trend charts with a quarter selector
    Topics,
    /// Section, IPC, yearly and monthly overview charts
    Summary,
}

impl Commands {
    pub fn dashboard(self) -> DashboardKind {
        match self {
            Commands::Topics => DashboardKind::Topics,
            Commands::Summary => DashboardKind::Summary,
        }
    }
}

/// Convert derive-based CLI arguments directly to CliConfig structure
pub fn cli_to_config(cli: &Cli) -> CliConfig {
    CliConfig {
        dashboard: cli.command.dashboard(),
        data_dir: cli.data_dir.clone(),
        host: cli.host.clone(),
        port: cli.port,
        quiet: cli.quiet,
        verbose: cli.verbose,
        config_file: cli.config.clone(),
        no_config: cli.no_config,
        export_path: cli.export.clone(),
    }
}
