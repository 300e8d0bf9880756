use crate::app::DashboardKind;
use crate::config::Config;
use log::{debug, error, info, warn};
use std::path::Path;

/// Level for the given flags; quiet wins over verbose
pub fn level_filter(verbose: bool, quiet: bool) -> log::LevelFilter {
    if quiet {
        log::LevelFilter::Off
    } else if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    }
}

/// Initialize the logger with appropriate level based on verbosity
pub fn init_logger(verbose: bool, quiet: bool) {
    let level = level_filter(verbose, quiet);

    env_logger::Builder::from_default_env()
        .filter_level(level)
        .format_module_path(false)
        .format_target(false)
        .init();

    debug!("Logger initialized with level: {level:?}");
}

/// Log configuration information
pub fn log_config_info(config: &Config, dashboard: DashboardKind) {
    info!(
        "Configuration: dashboard={dashboard}, data_dir={}, bind={}:{}",
        config.data_dir().display(),
        config.host(),
        config.port(dashboard)
    );
    match dashboard {
        DashboardKind::Topics => debug!(
            "Topics: file={}, index_column={}",
            config.topics_path().display(),
            config.index_column()
        ),
        DashboardKind::Summary => debug!(
            "Summary: sections={}, ipc={}, yearly={}, monthly={}, ipc_top_n={}",
            config.section_path().display(),
            config.ipc_path().display(),
            config.yearly_path().display(),
            config.monthly_path().display(),
            config.ipc_top_n()
        ),
    }
}

/// Log a loaded wide table
pub fn log_dataset_loaded(path: &Path, rows: usize, columns: usize) {
    info!(
        "Loaded {}: {rows} row(s), {columns} topic column(s)",
        path.display()
    );
}

/// Log a loaded summary table
pub fn log_records_loaded(path: &Path, records: usize) {
    info!("Loaded {}: {records} record(s)", path.display());
    if records == 0 {
        warn!("{} is empty, its chart will be blank", path.display());
    }
}

/// Log the derived aggregate views
pub fn log_views_derived(quarters: usize, cumulative_rows: usize) {
    debug!("Derived {quarters} quarterly row(s) and {cumulative_rows} cumulative row(s)");
}

/// Log a callback request and its outcome
pub fn log_callback(route: &str, value: &str, ok: bool) {
    if ok {
        debug!("✓ {route} <- {value}");
    } else {
        debug!("✗ {route} <- {value}");
    }
}

/// Log where the dashboard is being served
pub fn log_listening(dashboard: DashboardKind, address: &str) {
    info!("📊 {dashboard} dashboard listening on http://{address}");
}

/// Log error information
pub fn log_error(message: &str, source: Option<&dyn std::error::Error>) {
    match source {
        Some(err) => error!("{message}: {err}"),
        None => error!("{message}"),
    }
}

/// Log warning information
pub fn log_warning(message: &str) {
    warn!("{message}");
}
