//! Initiative parameter types and error types.
//!
//! This module provides:
//! - `params`: Closed categorical sets describing an initiative
//! - `error`: Structured error types for curve generation
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`InitiativeParams`], [`InitiativeType`], [`FixedCostTier`], [`VariableCostProfile`],
//!   [`RevenueSpeed`], [`ImpactTier`] from `params`
//! - [`SimulationError`] from `error`

pub mod error;
pub mod params;

pub use error::SimulationError;
pub use params::{
    FixedCostTier, ImpactTier, InitiativeParams, InitiativeType, RevenueSpeed,
    VariableCostProfile,
};
