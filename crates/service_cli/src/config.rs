//! Simulator configuration management.
//!
//! Handles loading of the simulator configuration from a TOML file with
//! environment variable override support. Command line flags take
//! precedence over both.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use initiative_core::curves::DEFAULT_HORIZON_MONTHS;
use initiative_portfolio::synthetic::MAX_SYNTHETIC_INITIATIVES;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::error::CliError;

/// Longest horizon accepted from configuration.
pub const MAX_HORIZON_MONTHS: usize = 120;

/// Report output format
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human readable tables and chart
    #[default]
    Table,
    /// Full report as JSON
    Json,
    /// Curve series as CSV
    Csv,
}

impl FromStr for OutputFormat {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            _ => Err(CliError::invalid_argument(format!(
                "Unknown format: {}. Supported: table, json, csv",
                s
            ))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Table => "table",
            Self::Json => "json",
            Self::Csv => "csv",
        };
        write!(f, "{}", label)
    }
}

/// Simulator configuration
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct SimConfig {
    /// Number of months in every generated curve
    #[serde(default = "default_horizon_months")]
    pub horizon_months: usize,

    /// Month index used to rank initiatives
    #[serde(default = "default_horizon_month")]
    pub horizon_month: usize,

    /// Number of initiatives to select, clamped to the backlog size
    #[serde(default = "default_select_count")]
    pub select_count: usize,

    /// Backlog size for the demo command
    #[serde(default = "default_demo_initiatives")]
    pub demo_initiatives: usize,

    /// Seed for synthetic backlogs
    #[serde(default)]
    pub seed: Option<u64>,

    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Output format
    #[serde(default)]
    pub format: OutputFormat,
}

fn default_horizon_months() -> usize {
    DEFAULT_HORIZON_MONTHS
}

fn default_horizon_month() -> usize {
    24
}

fn default_select_count() -> usize {
    5
}

fn default_demo_initiatives() -> usize {
    10
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            horizon_months: default_horizon_months(),
            horizon_month: default_horizon_month(),
            select_count: default_select_count(),
            demo_initiatives: default_demo_initiatives(),
            seed: None,
            log_level: default_log_level(),
            format: OutputFormat::default(),
        }
    }
}

impl SimConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        Self::parse(&content)
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load configuration from `path`, or defaults when the file does not exist.
    ///
    /// A file that exists but fails to parse is still an error.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Apply environment variable overrides
    pub fn with_env_override(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary variable lookup.
    ///
    /// Values that fail to parse are ignored with a warning.
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        fn parsed<T: FromStr>(key: &str, raw: Option<String>) -> Option<T> {
            let raw = raw?;
            match raw.trim().parse() {
                Ok(value) => Some(value),
                Err(_) => {
                    warn!(key, value = %raw, "ignoring unparsable override");
                    None
                }
            }
        }

        if let Some(month) = parsed("SIM_HORIZON_MONTH", lookup("SIM_HORIZON_MONTH")) {
            self.horizon_month = month;
        }

        if let Some(count) = parsed("SIM_SELECT_COUNT", lookup("SIM_SELECT_COUNT")) {
            self.select_count = count;
        }

        if let Some(n) = parsed("SIM_DEMO_INITIATIVES", lookup("SIM_DEMO_INITIATIVES")) {
            self.demo_initiatives = n;
        }

        if let Some(seed) = parsed("SIM_SEED", lookup("SIM_SEED")) {
            self.seed = Some(seed);
        }

        if let Some(log_level) = lookup("SIM_LOG_LEVEL") {
            self.log_level = log_level;
        }

        if let Some(format) = parsed("SIM_FORMAT", lookup("SIM_FORMAT")) {
            self.format = format;
        }

        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&self.log_level.to_lowercase().as_str()) {
            errors.push(format!(
                "Invalid log_level '{}'. Valid values: {:?}",
                self.log_level, valid_log_levels
            ));
        }

        if self.horizon_months == 0 || self.horizon_months > MAX_HORIZON_MONTHS {
            errors.push(format!(
                "horizon_months {} outside [1, {}]",
                self.horizon_months, MAX_HORIZON_MONTHS
            ));
        }

        if self.horizon_month >= self.horizon_months {
            errors.push(format!(
                "horizon_month {} must be below horizon_months {}",
                self.horizon_month, self.horizon_months
            ));
        }

        if self.select_count == 0 {
            errors.push("select_count must be greater than 0".to_string());
        }

        if self.demo_initiatives == 0 || self.demo_initiatives > MAX_SYNTHETIC_INITIATIVES {
            errors.push(format!(
                "demo_initiatives {} outside [1, {}]",
                self.demo_initiatives, MAX_SYNTHETIC_INITIATIVES
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Selection count for a backlog of `backlog_size` entries.
    pub fn effective_select_count(&self, backlog_size: usize) -> usize {
        self.select_count.min(backlog_size)
    }
}

/// Configuration error type
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    /// IO error reading config file
    #[error("IO error: {0}")]
    Io(String),
    /// Parse error in config file
    #[error("Parse error: {0}")]
    Parse(String),
    /// Validation error
    #[error("Validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),
}
