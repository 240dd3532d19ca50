//! Financial curve generation for a single initiative.
//!
//! This module provides:
//! - [`Curve`]: The monthly fixed cost, variable cost, revenue and net benefit
//!   series of one initiative, with the cumulative net benefit (BNA)
//! - [`generate`]: The pure, deterministic curve generator
//! - [`CurveCache`]: Memoisation of generated curves behind `Arc`
//! - `components`: The individual series builders
//!
//! ## Algorithm
//!
//! For each month `i` in `0..horizon_months`:
//!
//! ```text
//! fixed[i]      = tier_base * type_cost_mult * 2
//! variable[i]   = type_cost_mult * sum_k amp_k * exp(-0.5 * ((i - c_k) / 2)^2)
//! revenue[i]    = 0                                   if i < start
//!               = peak * (i - start)^2 / (peak_i - start + 1)^2   if i <= peak_i
//!               = peak                                otherwise
//! net[i]        = revenue[i] - (fixed[i] + variable[i])
//! cumulative[i] = net[0] + ... + net[i]
//! ```

pub mod components;

mod cache;

pub use cache::CurveCache;

use crate::types::{InitiativeParams, InitiativeType, SimulationError};

/// Number of monthly points (months 0..=36) used by default.
pub const DEFAULT_HORIZON_MONTHS: usize = 37;

/// Monthly projection of one initiative.
///
/// All series share the same length. Fields are private so the cumulative
/// series can only be derived by the generator.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Curve {
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    initiative_type: InitiativeType,
    fixed_costs: Vec<f64>,
    variable_costs: Vec<f64>,
    revenue: Vec<f64>,
    net_benefit_monthly: Vec<f64>,
    net_benefit_cumulative: Vec<f64>,
}

impl Curve {
    /// Type echoed from the generating parameters.
    #[inline]
    pub fn initiative_type(&self) -> InitiativeType {
        self.initiative_type
    }

    /// Number of monthly points.
    #[inline]
    pub fn horizon_months(&self) -> usize {
        self.net_benefit_cumulative.len()
    }

    /// Fixed cost per month.
    #[inline]
    pub fn fixed_costs(&self) -> &[f64] {
        &self.fixed_costs
    }

    /// Variable cost per month.
    #[inline]
    pub fn variable_costs(&self) -> &[f64] {
        &self.variable_costs
    }

    /// Revenue (income plus savings) per month.
    #[inline]
    pub fn revenue(&self) -> &[f64] {
        &self.revenue
    }

    /// `revenue - (fixed + variable)` per month.
    #[inline]
    pub fn net_benefit_monthly(&self) -> &[f64] {
        &self.net_benefit_monthly
    }

    /// Running sum of the monthly net benefit (BNA).
    #[inline]
    pub fn net_benefit_cumulative(&self) -> &[f64] {
        &self.net_benefit_cumulative
    }

    /// Cumulative net benefit at `month`, `None` past the horizon.
    #[inline]
    pub fn cumulative_at(&self, month: usize) -> Option<f64> {
        self.net_benefit_cumulative.get(month).copied()
    }
}

/// Generate the curve of one initiative.
///
/// # Arguments
///
/// * `params` - The five categorical inputs
/// * `horizon_months` - Number of monthly points (37 in the standard setup)
///
/// # Errors
///
/// `SimulationError::InvalidArgument` if `horizon_months` is zero.
///
/// # Examples
///
/// ```
/// use initiative_core::curves::generate;
/// use initiative_core::types::InitiativeParams;
///
/// let params = InitiativeParams::parse("classic", "low", "peak1", "fast", "medium").unwrap();
/// let curve = generate(&params, 37).unwrap();
///
/// let net = curve.net_benefit_monthly();
/// let running: f64 = net[..=10].iter().sum();
/// assert!((curve.net_benefit_cumulative()[10] - running).abs() < 1e-9);
///
/// assert!(generate(&params, 0).is_err());
/// ```
pub fn generate(params: &InitiativeParams, horizon_months: usize) -> Result<Curve, SimulationError> {
    if horizon_months == 0 {
        return Err(SimulationError::invalid_argument(
            "horizon_months must be at least 1",
        ));
    }
    Ok(build(params, horizon_months))
}

/// Generate the curve over [`DEFAULT_HORIZON_MONTHS`].
pub fn generate_default(params: &InitiativeParams) -> Curve {
    build(params, DEFAULT_HORIZON_MONTHS)
}

fn build(params: &InitiativeParams, horizon_months: usize) -> Curve {
    let fixed_costs = components::fixed_cost_series(params, horizon_months);
    let variable_costs = components::variable_cost_series(params, horizon_months);
    let revenue = components::revenue_series(params, horizon_months);

    let net_benefit_monthly: Vec<f64> = revenue
        .iter()
        .zip(fixed_costs.iter().zip(&variable_costs))
        .map(|(rev, (fixed, variable))| rev - (fixed + variable))
        .collect();

    let net_benefit_cumulative: Vec<f64> = net_benefit_monthly
        .iter()
        .scan(0.0, |total, &net| {
            *total += net;
            Some(*total)
        })
        .collect();

    Curve {
        initiative_type: params.initiative_type(),
        fixed_costs,
        variable_costs,
        revenue,
        net_benefit_monthly,
        net_benefit_cumulative,
    }
}
