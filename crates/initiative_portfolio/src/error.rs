//! Portfolio error types.
//!
//! This module provides structured error types for backlog and ranking
//! operations using `thiserror` for derivation.

use initiative_core::types::SimulationError;
use thiserror::Error;

use crate::backlog::InitiativeId;

/// Errors that can occur during backlog and portfolio operations.
///
/// Apart from `Simulation`, every variant is a caller contract violation
/// in the invalid-argument class (see [`PortfolioError::is_invalid_argument`]).
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PortfolioError {
    /// Horizon month past the last month of the curves.
    #[error("Invalid argument: horizon month {month} outside [0, {last_month}]")]
    HorizonOutOfRange {
        /// Requested month
        month: usize,
        /// Last valid month index
        last_month: usize,
    },

    /// Selection count of zero or larger than the backlog.
    #[error("Invalid argument: selection count {count} outside [1, {backlog_size}]")]
    CountOutOfRange {
        /// Requested count
        count: usize,
        /// Number of entries available
        backlog_size: usize,
    },

    /// Entries whose curves do not share one horizon length.
    #[error("Invalid argument: entry {index} has {found} months, expected {expected}")]
    HorizonLengthMismatch {
        /// Position of the offending entry
        index: usize,
        /// Horizon length of the first entry
        expected: usize,
        /// Horizon length of the offending entry
        found: usize,
    },

    /// No backlog entry carries the identifier.
    #[error("Invalid argument: initiative not found: {0}")]
    InitiativeNotFound(InitiativeId),

    /// Curve generation failed.
    #[error(transparent)]
    Simulation(#[from] SimulationError),
}

impl PortfolioError {
    /// Whether this error is a caller contract violation.
    pub fn is_invalid_argument(&self) -> bool {
        match self {
            PortfolioError::Simulation(SimulationError::InvalidArgument(_)) => true,
            PortfolioError::HorizonOutOfRange { .. }
            | PortfolioError::CountOutOfRange { .. }
            | PortfolioError::HorizonLengthMismatch { .. }
            | PortfolioError::InitiativeNotFound(_) => true,
        }
    }
}
