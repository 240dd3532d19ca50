//! Error types for the command line front end.

use initiative_core::types::SimulationError;
use initiative_portfolio::PortfolioError;
use thiserror::Error;

use crate::config::ConfigError;

/// CLI error type
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Input file does not exist
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Backlog file could not be parsed or is out of bounds
    #[error("Backlog error: {0}")]
    Backlog(String),

    /// Unknown option value
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Curve generation error
    #[error(transparent)]
    Simulation(#[from] SimulationError),

    /// Ranking or aggregation error
    #[error(transparent)]
    Portfolio(#[from] PortfolioError),

    /// JSON export error
    #[error("JSON export error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV export error
    #[error("CSV export error: {0}")]
    Csv(#[from] csv::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Create a backlog error
    pub fn backlog(msg: impl Into<String>) -> Self {
        Self::Backlog(msg.into())
    }

    /// Create an invalid argument error
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}

/// Result alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CliError::backlog("no initiatives");
        assert_eq!(err.to_string(), "Backlog error: no initiatives");
    }

    #[test]
    fn test_portfolio_error_passes_through() {
        let err: CliError = PortfolioError::CountOutOfRange {
            count: 0,
            backlog_size: 3,
        }
        .into();
        assert_eq!(
            err.to_string(),
            "Invalid argument: selection count 0 outside [1, 3]"
        );
    }

    #[test]
    fn test_simulation_error_passes_through() {
        let err: CliError = "huge"
            .parse::<initiative_core::types::ImpactTier>()
            .unwrap_err()
            .into();
        assert!(err.to_string().contains("unknown impact tier: huge"));
    }
}
