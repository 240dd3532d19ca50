//! Monthly cost and revenue series.
//!
//! Each function maps one aspect of [`InitiativeParams`] to a series of
//! `horizon_months` values, one per month index starting at 0.

use crate::types::InitiativeParams;

/// Width (in months) shared by every variable cost bump.
pub const BUMP_WIDTH: f64 = 2.0;

/// Revenue plateau for an impact factor of 1.0.
pub const BASE_PEAK_REVENUE: f64 = 12.0;

/// Scale applied to the type-adjusted fixed cost base.
const FIXED_COST_SCALE: f64 = 2.0;

/// Gaussian bump evaluated at `month`.
///
/// ```text
/// amplitude * exp(-0.5 * ((month - center) / width)^2)
/// ```
///
/// # Examples
///
/// ```
/// use initiative_core::curves::components::gaussian_bump;
///
/// assert_eq!(gaussian_bump(5.0, 5.0, 3.0, 2.0), 3.0);
/// assert!(gaussian_bump(30.0, 5.0, 3.0, 2.0) < 1e-6);
/// ```
#[inline]
pub fn gaussian_bump(month: f64, center: f64, amplitude: f64, width: f64) -> f64 {
    let z = (month - center) / width;
    amplitude * (-0.5 * z * z).exp()
}

/// Flat fixed cost line.
pub fn fixed_cost_series(params: &InitiativeParams, horizon_months: usize) -> Vec<f64> {
    let base = params.fixed_cost_tier().base_cost() * params.initiative_type().cost_multiplier();
    vec![base * FIXED_COST_SCALE; horizon_months]
}

/// Sum of the profile's Gaussian bumps, scaled by the initiative type.
pub fn variable_cost_series(params: &InitiativeParams, horizon_months: usize) -> Vec<f64> {
    let bumps = params.variable_cost_profile().bumps();
    let multiplier = params.initiative_type().cost_multiplier();

    (0..horizon_months)
        .map(|month| {
            let x = month as f64;
            let total: f64 = bumps
                .iter()
                .map(|&(center, amplitude)| gaussian_bump(x, center, amplitude, BUMP_WIDTH))
                .sum();
            total * multiplier
        })
        .collect()
}

/// Quadratic revenue ramp followed by a flat plateau.
///
/// Zero before `start_month`, quadratic from `start_month` through
/// `peak_month` inclusive, `peak_value` afterwards. The ramp normalises
/// by `(peak_month - start_month + 1)^2`, so the value at `peak_month`
/// stays below `peak_value`.
///
/// # Examples
///
/// ```
/// use initiative_core::curves::components::RevenueRamp;
///
/// let ramp = RevenueRamp::new(6, 12, 12.0);
/// assert_eq!(ramp.value_at(5), 0.0);
/// assert_eq!(ramp.value_at(6), 0.0);
/// assert_eq!(ramp.value_at(12), 12.0 * (36.0 / 49.0));
/// assert_eq!(ramp.value_at(13), 12.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevenueRamp {
    start_month: usize,
    peak_month: usize,
    peak_value: f64,
}

impl RevenueRamp {
    /// Construct a ramp. `peak_month` must not precede `start_month`.
    #[inline]
    pub fn new(start_month: usize, peak_month: usize, peak_value: f64) -> Self {
        debug_assert!(peak_month >= start_month);
        Self {
            start_month,
            peak_month,
            peak_value,
        }
    }

    /// Ramp described by the revenue speed and impact of `params`.
    pub fn from_params(params: &InitiativeParams) -> Self {
        let (start_month, peak_month) = params.revenue_speed().window();
        let impact_factor =
            params.impact_tier().factor() * params.initiative_type().revenue_multiplier();
        Self::new(start_month, peak_month, BASE_PEAK_REVENUE * impact_factor)
    }

    /// First month with a (possibly zero) ramp value.
    #[inline]
    pub fn start_month(&self) -> usize {
        self.start_month
    }

    /// Last month on the quadratic branch.
    #[inline]
    pub fn peak_month(&self) -> usize {
        self.peak_month
    }

    /// Plateau held after `peak_month`.
    #[inline]
    pub fn peak_value(&self) -> f64 {
        self.peak_value
    }

    /// Revenue at `month`.
    pub fn value_at(&self, month: usize) -> f64 {
        if month < self.start_month {
            return 0.0;
        }
        if month > self.peak_month {
            return self.peak_value;
        }
        let t = (month - self.start_month) as f64;
        let span = (self.peak_month - self.start_month + 1) as f64;
        self.peak_value * ((t * t) / (span * span))
    }
}

/// Revenue series for `params`.
pub fn revenue_series(params: &InitiativeParams, horizon_months: usize) -> Vec<f64> {
    let ramp = RevenueRamp::from_params(params);
    (0..horizon_months).map(|month| ramp.value_at(month)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{
        FixedCostTier, ImpactTier, InitiativeType, RevenueSpeed, VariableCostProfile,
    };
    use approx::assert_relative_eq;

    fn params(
        t: InitiativeType,
        fc: FixedCostTier,
        vc: VariableCostProfile,
        rs: RevenueSpeed,
        it: ImpactTier,
    ) -> InitiativeParams {
        InitiativeParams::new(t, fc, vc, rs, it)
    }

    #[test]
    fn test_gaussian_bump_symmetry() {
        for offset in 1..6 {
            let d = offset as f64;
            assert_eq!(
                gaussian_bump(5.0 - d, 5.0, 3.0, 2.0),
                gaussian_bump(5.0 + d, 5.0, 3.0, 2.0)
            );
        }
    }

    #[test]
    fn test_gaussian_bump_one_width() {
        assert_relative_eq!(
            gaussian_bump(7.0, 5.0, 3.0, 2.0),
            3.0 * (-0.5_f64).exp(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_fixed_costs_disruptive_high() {
        let p = params(
            InitiativeType::Disruptive,
            FixedCostTier::High,
            VariableCostProfile::Peak1,
            RevenueSpeed::Fast,
            ImpactTier::Low,
        );
        let series = fixed_cost_series(&p, 37);
        assert_eq!(series.len(), 37);
        for value in series {
            assert_relative_eq!(value, 4.0 * 0.95 * 2.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_variable_costs_peak1_maximum_at_center() {
        let p = params(
            InitiativeType::Classic,
            FixedCostTier::Low,
            VariableCostProfile::Peak1,
            RevenueSpeed::Fast,
            ImpactTier::Low,
        );
        let series = variable_cost_series(&p, 37);
        assert_eq!(series[5], 3.0);
        assert!(series.iter().all(|&v| v <= 3.0 && v > 0.0));
    }

    #[test]
    fn test_variable_costs_peak2_sums_bumps() {
        let p = params(
            InitiativeType::Disruptive,
            FixedCostTier::Low,
            VariableCostProfile::Peak2,
            RevenueSpeed::Fast,
            ImpactTier::Low,
        );
        let series = variable_cost_series(&p, 37);
        let expected = (gaussian_bump(8.0, 4.0, 2.5, 2.0) + gaussian_bump(8.0, 12.0, 3.5, 2.0)) * 0.95;
        assert_relative_eq!(series[8], expected, epsilon = 1e-12);
    }

    #[test]
    fn test_revenue_ramp_from_params_disruptive_high() {
        let p = params(
            InitiativeType::Disruptive,
            FixedCostTier::Low,
            VariableCostProfile::Peak1,
            RevenueSpeed::Medium,
            ImpactTier::High,
        );
        let ramp = RevenueRamp::from_params(&p);
        assert_eq!(ramp.start_month(), 10);
        assert_eq!(ramp.peak_month(), 20);
        assert_relative_eq!(ramp.peak_value(), 12.0 * 1.4 * 1.1, epsilon = 1e-12);
    }

    #[test]
    fn test_revenue_ramp_peak_month_below_plateau() {
        let ramp = RevenueRamp::new(10, 20, 12.0);
        let at_peak = ramp.value_at(20);
        assert_relative_eq!(at_peak, 12.0 * 100.0 / 121.0, epsilon = 1e-12);
        assert!(at_peak < ramp.value_at(21));
    }

    #[test]
    fn test_revenue_ramp_monotone() {
        let ramp = RevenueRamp::new(12, 24, 8.0);
        let values: Vec<f64> = (0..37).map(|m| ramp.value_at(m)).collect();
        for pair in values.windows(2) {
            assert!(pair[1] >= pair[0]);
        }
    }

    #[test]
    fn test_series_respect_horizon_length() {
        let p = params(
            InitiativeType::Classic,
            FixedCostTier::Medium,
            VariableCostProfile::Peak2,
            RevenueSpeed::Slow,
            ImpactTier::Medium,
        );
        assert_eq!(fixed_cost_series(&p, 12).len(), 12);
        assert_eq!(variable_cost_series(&p, 12).len(), 12);
        assert_eq!(revenue_series(&p, 12).len(), 12);
        assert!(revenue_series(&p, 12).iter().all(|&v| v == 0.0));
    }
}
