use clap::Parser;
use patentdash::app::{DashboardKind, SummaryDashboard, TopicsDashboard};
use patentdash::config::{CliConfig, Config};
use patentdash::core::error::Result;
use patentdash::reporting::logging;
use patentdash::reporting::{HtmlDashboard, PageMode};
use patentdash::server;
use patentdash::ui::{Cli, cli_to_config};

use std::sync::Arc;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run_dashboard_logic(&cli).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

/// Main dashboard logic extracted from main() for testing
pub async fn run_dashboard_logic(cli: &Cli) -> Result<()> {
    let cli_config = cli_to_config(cli);
    let config = load_and_merge_config(&cli_config)?;

    logging::init_logger(config.verbose.unwrap_or(false), cli_config.quiet);
    logging::log_config_info(&config, cli_config.dashboard);

    match cli_config.dashboard {
        DashboardKind::Topics => run_topics(&config, &cli_config).await,
        DashboardKind::Summary => run_summary(&config, &cli_config).await,
    }
}

/// Load configuration from file or standard locations and merge with CLI config
pub fn load_and_merge_config(cli_config: &CliConfig) -> Result<Config> {
    let mut config = if cli_config.no_config {
        Config::default()
    } else if let Some(ref config_file) = cli_config.config_file {
        Config::load_from_file(config_file).inspect_err(|e| {
            logging::log_error(
                &format!("Could not load config file '{config_file}'"),
                Some(e),
            );
        })?
    } else {
        Config::load_from_standard_locations()
    };

    // Merge CLI arguments with configuration (CLI takes precedence)
    config.merge_with_cli(cli_config);
    config.validate()?;
    Ok(config)
}

async fn run_topics(config: &Config, cli_config: &CliConfig) -> Result<()> {
    let dashboard = TopicsDashboard::load(config)?;

    if let Some(ref path) = cli_config.export_path {
        warn_ignored_server_options(cli_config);
        let html = HtmlDashboard::topics_page(&dashboard, PageMode::Snapshot)?;
        HtmlDashboard::write_page(&html, path)?;
        println!("📊 Topics dashboard exported: {path}");
        return Ok(());
    }

    let router = server::topics_router(Arc::new(dashboard))?;
    server::serve(
        router,
        DashboardKind::Topics,
        config.host(),
        config.port(DashboardKind::Topics),
    )
    .await
}

async fn run_summary(config: &Config, cli_config: &CliConfig) -> Result<()> {
    let dashboard = SummaryDashboard::load(config)?;

    if let Some(ref path) = cli_config.export_path {
        warn_ignored_server_options(cli_config);
        let html = HtmlDashboard::summary_page(&dashboard)?;
        HtmlDashboard::write_page(&html, path)?;
        println!("📊 Summary dashboard exported: {path}");
        return Ok(());
    }

    let router = server::summary_router(Arc::new(dashboard))?;
    server::serve(
        router,
        DashboardKind::Summary,
        config.host(),
        config.port(DashboardKind::Summary),
    )
    .await
}

fn warn_ignored_server_options(cli_config: &CliConfig) {
    if cli_config.host.is_some() || cli_config.port.is_some() {
        logging::log_warning("--host and --port are ignored when exporting");
    }
}
