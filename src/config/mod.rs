//! Configuration management
//!
//! This module handles loading and managing configuration from
//! TOML files and CLI arguments.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::app::DashboardKind;
use crate::core::constants::{defaults, files, network};
use crate::core::error::{DashError, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding the CSV datasets
    pub data_dir: Option<String>,

    /// Address the HTTP server binds to
    pub host: Option<String>,

    /// Port of the topics dashboard
    pub topics_port: Option<u16>,

    /// Port of the summary dashboard
    pub summary_port: Option<u16>,

    /// Wide topic table, relative to `data_dir`
    pub topics_file: Option<String>,

    /// Date column of the topic table
    pub index_column: Option<String>,

    /// MPK section counts, relative to `data_dir`
    pub section_file: Option<String>,

    /// IPC subclass counts, relative to `data_dir`
    pub ipc_file: Option<String>,

    /// Yearly counts, relative to `data_dir`
    pub yearly_file: Option<String>,

    /// Monthly counts, relative to `data_dir`
    pub monthly_file: Option<String>,

    /// Number of subclasses in the IPC ranking
    pub ipc_top_n: Option<usize>,

    /// Enable verbose logging
    pub verbose: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: Some(files::DEFAULT_DATA_DIR.to_string()),
            host: Some(network::DEFAULT_HOST.to_string()),
            topics_port: Some(network::TOPICS_PORT),
            summary_port: Some(network::SUMMARY_PORT),
            topics_file: Some(files::TOPICS.to_string()),
            index_column: Some(files::TOPICS_INDEX_COLUMN.to_string()),
            section_file: Some(files::SECTION_COUNTS.to_string()),
            ipc_file: Some(files::IPC_COUNTS.to_string()),
            yearly_file: Some(files::YEARLY_COUNTS.to_string()),
            monthly_file: Some(files::MONTHLY_COUNTS.to_string()),
            ipc_top_n: Some(defaults::IPC_TOP_N),
            verbose: Some(false),
        }
    }
}

impl Config {
    /// Load configuration from file; keys missing from the file keep their defaults
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            DashError::Config(format!(
                "Could not read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let loaded: Config = toml::from_str(&content).map_err(|e| {
            DashError::Config(format!(
                "Invalid TOML in config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config = Self::default().overlay(loaded);
        config.validate()?;
        Ok(config)
    }

    /// Try to find and load a config file in standard locations
    pub fn load_from_standard_locations() -> Self {
        if let Ok(config) = Self::load_from_file(files::CONFIG_FILE) {
            return config;
        }

        // Parent directories, up to 3 levels
        for i in 1..=3 {
            let path = format!("{}{}", "../".repeat(i), files::CONFIG_FILE);
            if let Ok(config) = Self::load_from_file(&path) {
                return config;
            }
        }

        Self::default()
    }

    /// Values set in `other` replace the ones in `self`
    fn overlay(mut self, other: Config) -> Self {
        macro_rules! take {
            ($($field:ident),* $(,)?) => {
                $(
                    if other.$field.is_some() {
                        self.$field = other.$field;
                    }
                )*
            };
        }

        take!(
            data_dir,
            host,
            topics_port,
            summary_port,
            topics_file,
            index_column,
            section_file,
            ipc_file,
            yearly_file,
            monthly_file,
            ipc_top_n,
            verbose,
        );
        self
    }

    /// Merge this config with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli_config: &CliConfig) {
        if let Some(ref data_dir) = cli_config.data_dir {
            self.data_dir = Some(data_dir.clone());
        }
        if let Some(ref host) = cli_config.host {
            self.host = Some(host.clone());
        }
        if let Some(port) = cli_config.port {
            match cli_config.dashboard {
                DashboardKind::Topics => self.topics_port = Some(port),
                DashboardKind::Summary => self.summary_port = Some(port),
            }
        }
        if cli_config.verbose {
            self.verbose = Some(true);
        }
    }

    pub fn data_dir(&self) -> PathBuf {
        PathBuf::from(self.data_dir.as_deref().unwrap_or(files::DEFAULT_DATA_DIR))
    }

    fn data_path(&self, file: &Option<String>, fallback: &str) -> PathBuf {
        self.data_dir().join(file.as_deref().unwrap_or(fallback))
    }

    pub fn topics_path(&self) -> PathBuf {
        self.data_path(&self.topics_file, files::TOPICS)
    }

    pub fn section_path(&self) -> PathBuf {
        self.data_path(&self.section_file, files::SECTION_COUNTS)
    }

    pub fn ipc_path(&self) -> PathBuf {
        self.data_path(&self.ipc_file, files::IPC_COUNTS)
    }

    pub fn yearly_path(&self) -> PathBuf {
        self.data_path(&self.yearly_file, files::YEARLY_COUNTS)
    }

    pub fn monthly_path(&self) -> PathBuf {
        self.data_path(&self.monthly_file, files::MONTHLY_COUNTS)
    }

    pub fn index_column(&self) -> &str {
        self.index_column
            .as_deref()
            .unwrap_or(files::TOPICS_INDEX_COLUMN)
    }

    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(network::DEFAULT_HOST)
    }

    /// Port the given dashboard listens on
    pub fn port(&self, dashboard: DashboardKind) -> u16 {
        match dashboard {
            DashboardKind::Topics => self.topics_port.unwrap_or(network::TOPICS_PORT),
            DashboardKind::Summary => self.summary_port.unwrap_or(network::SUMMARY_PORT),
        }
    }

    pub fn ipc_top_n(&self) -> usize {
        self.ipc_top_n.unwrap_or(defaults::IPC_TOP_N)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        for (name, port) in [
            ("topics_port", self.topics_port),
            ("summary_port", self.summary_port),
        ] {
            if port == Some(0) {
                return Err(DashError::Config(format!(
                    "{name} cannot be 0. Expected a port number between 1-65535."
                )));
            }
        }

        if let Some(ref host) = self.host
            && host.trim().is_empty()
        {
            return Err(DashError::Config(
                "host cannot be empty. Expected an address such as 127.0.0.1.".to_string(),
            ));
        }

        if let Some(top_n) = self.ipc_top_n
            && !(1..=defaults::MAX_IPC_TOP_N).contains(&top_n)
        {
            return Err(DashError::Config(format!(
                "ipc_top_n of {top_n} is out of range. Expected a value between 1-{}.",
                defaults::MAX_IPC_TOP_N
            )));
        }

        for (name, value) in [
            ("data_dir", &self.data_dir),
            ("topics_file", &self.topics_file),
            ("index_column", &self.index_column),
            ("section_file", &self.section_file),
            ("ipc_file", &self.ipc_file),
            ("yearly_file", &self.yearly_file),
            ("monthly_file", &self.monthly_file),
        ] {
            if let Some(value) = value
                && value.trim().is_empty()
            {
                return Err(DashError::Config(format!("{name} cannot be empty.")));
            }
        }

        Ok(())
    }
}

/// Configuration options that can come from CLI
#[derive(Debug, Default)]
pub struct CliConfig {
    pub dashboard: DashboardKind,

    pub data_dir: Option<String>, // --data-dir
    pub host: Option<String>,     // --host
    pub port: Option<u16>,        // --port

    pub quiet: bool,   // --quiet
    pub verbose: bool, // --verbose

    pub config_file: Option<String>, // --config
    pub no_config: bool,             // --no-config

    pub export_path: Option<String>, // --export
}
