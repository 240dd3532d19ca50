//! # initiative_portfolio: Backlog Ranking and Aggregation
//!
//! Builds a backlog of initiatives on top of `initiative_core`, ranks it by
//! net accumulated benefit (BNA) at a horizon month and aggregates the
//! cumulative curves of the top-N selection.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │        initiative_portfolio             │
//! ├─────────────────────────────────────────┤
//! │  backlog/     - InitiativeId, Entry,    │
//! │                 Backlog                 │
//! │  aggregator/  - rank_and_select,        │
//! │                 PortfolioSelection      │
//! │  synthetic/   - Seeded random backlogs  │
//! └─────────────────────────────────────────┘
//!          ↓
//! ┌─────────────────────────────────────────┐
//! │           initiative_core               │
//! │  Curve generator and cache              │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use initiative_core::types::InitiativeParams;
//! use initiative_portfolio::Backlog;
//!
//! let params = vec![
//!     InitiativeParams::parse("classic", "low", "peak1", "fast", "medium").unwrap(),
//!     InitiativeParams::parse("disruptive", "high", "peak2", "slow", "low").unwrap(),
//!     InitiativeParams::parse("classic", "medium", "peak1", "medium", "high").unwrap(),
//! ];
//!
//! let backlog = Backlog::from_params(&params, 37).unwrap();
//! let selection = backlog.rank_and_select(24, 2).unwrap();
//!
//! assert_eq!(selection.selected().len(), 2);
//! assert_eq!(selection.aggregate_curve().len(), 37);
//! assert_eq!(
//!     selection.aggregate_value_at_horizon(),
//!     selection.aggregate_curve()[24]
//! );
//! ```
//!
//! ## Feature Flags
//!
//! - `parallel` (default): Generate backlog curves on the rayon pool
//! - `serde` (default): Serialisation for identifiers

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod aggregator;
pub mod backlog;
pub mod error;
pub mod synthetic;

pub use aggregator::{rank_and_select, CumulativeSeries, PortfolioSelection, RankedEntry};
pub use backlog::{Backlog, BacklogEntry, InitiativeId};
pub use error::PortfolioError;
