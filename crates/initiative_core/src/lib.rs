//! # initiative_core: Curve Generation for Initiative Simulation
//!
//! ## Core Layer Role
//!
//! initiative_core is the bottom layer of the simulator, providing:
//! - Categorical initiative parameters (`types::params`)
//! - Error types: `SimulationError` (`types::error`)
//! - The parametric curve generator (`curves::generate`)
//! - Thread-safe curve memoisation (`curves::CurveCache`)
//!
//! ## Minimal Dependency Principle
//!
//! This crate has no dependencies on other workspace crates:
//! - thiserror: Error derivation
//! - tracing: Cache diagnostics
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use initiative_core::curves::{generate, DEFAULT_HORIZON_MONTHS};
//! use initiative_core::types::{
//!     FixedCostTier, ImpactTier, InitiativeParams, InitiativeType, RevenueSpeed,
//!     VariableCostProfile,
//! };
//!
//! let params = InitiativeParams::new(
//!     InitiativeType::Classic,
//!     FixedCostTier::Low,
//!     VariableCostProfile::Peak1,
//!     RevenueSpeed::Fast,
//!     ImpactTier::Medium,
//! );
//!
//! let curve = generate(&params, DEFAULT_HORIZON_MONTHS).unwrap();
//! assert_eq!(curve.horizon_months(), 37);
//! assert_eq!(curve.fixed_costs()[0], 2.0);
//! assert_eq!(curve.revenue()[36], 12.0);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for parameters and curves

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod curves;
pub mod types;
