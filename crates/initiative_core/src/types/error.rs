//! Error types for curve generation.

use thiserror::Error;

/// Errors raised by the curve generator and parameter parsing.
///
/// Every failure here is a caller contract violation: an unknown
/// categorical label or a zero-length horizon. None of them are
/// recoverable internally.
///
/// # Examples
/// ```
/// use initiative_core::types::SimulationError;
///
/// let err = SimulationError::invalid_argument("unknown revenue speed: warp");
/// assert_eq!(
///     format!("{}", err),
///     "Invalid argument: unknown revenue speed: warp"
/// );
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SimulationError {
    /// Argument outside its closed set or valid bounds.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl SimulationError {
    /// Create an invalid argument error
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Create the error for a label that is not part of a closed set.
    pub(crate) fn unknown_label(kind: &str, label: &str) -> Self {
        Self::InvalidArgument(format!("unknown {}: {}", kind, label))
    }
}
