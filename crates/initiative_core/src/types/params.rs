//! Categorical parameters describing an initiative.
//!
//! Each parameter is a closed set. The lookup tables that turn a category
//! into a number (cost tier, bump layout, revenue window, impact factor)
//! live on the enums themselves so the generator only combines them.
//!
//! # Examples
//!
//! ```
//! use initiative_core::types::params::{RevenueSpeed, InitiativeType};
//!
//! assert_eq!(RevenueSpeed::Medium.window(), (10, 20));
//!
//! // Parse from string (case-insensitive, Spanish labels accepted)
//! let kind: InitiativeType = "Disruptivo".parse().unwrap();
//! assert_eq!(kind, InitiativeType::Disruptive);
//! ```

use std::fmt;
use std::str::FromStr;

use super::error::SimulationError;

/// Initiative type: scales costs and revenue slightly differently.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase", try_from = "String"))]
pub enum InitiativeType {
    /// Incremental initiative on an established model
    Classic,

    /// Disruptive initiative: 5% cheaper to run, 10% more impact
    Disruptive,
}

impl InitiativeType {
    /// All variants in declaration order.
    pub const ALL: [InitiativeType; 2] = [InitiativeType::Classic, InitiativeType::Disruptive];

    /// Canonical lowercase label.
    pub fn label(&self) -> &'static str {
        match self {
            InitiativeType::Classic => "classic",
            InitiativeType::Disruptive => "disruptive",
        }
    }

    /// Multiplier applied to fixed and variable costs.
    pub fn cost_multiplier(&self) -> f64 {
        match self {
            InitiativeType::Classic => 1.0,
            InitiativeType::Disruptive => 0.95,
        }
    }

    /// Multiplier applied to the impact factor of the revenue curve.
    pub fn revenue_multiplier(&self) -> f64 {
        match self {
            InitiativeType::Classic => 1.0,
            InitiativeType::Disruptive => 1.1,
        }
    }
}

impl FromStr for InitiativeType {
    type Err = SimulationError;

    fn from_str(s: &str) -> Result<Self, SimulationError> {
        match s.trim().to_lowercase().as_str() {
            "classic" | "clasico" => Ok(InitiativeType::Classic),
            "disruptive" | "disruptivo" => Ok(InitiativeType::Disruptive),
            _ => Err(SimulationError::unknown_label("initiative type", s)),
        }
    }
}

impl fmt::Display for InitiativeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Fixed running cost tier.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase", try_from = "String"))]
pub enum FixedCostTier {
    /// Base monthly cost 1.0
    Low,

    /// Base monthly cost 2.0
    Medium,

    /// Base monthly cost 4.0
    High,
}

impl FixedCostTier {
    /// All variants in declaration order.
    pub const ALL: [FixedCostTier; 3] =
        [FixedCostTier::Low, FixedCostTier::Medium, FixedCostTier::High];

    /// Canonical lowercase label.
    pub fn label(&self) -> &'static str {
        match self {
            FixedCostTier::Low => "low",
            FixedCostTier::Medium => "medium",
            FixedCostTier::High => "high",
        }
    }

    /// Base monthly cost before type scaling.
    pub fn base_cost(&self) -> f64 {
        match self {
            FixedCostTier::Low => 1.0,
            FixedCostTier::Medium => 2.0,
            FixedCostTier::High => 4.0,
        }
    }
}

impl FromStr for FixedCostTier {
    type Err = SimulationError;

    fn from_str(s: &str) -> Result<Self, SimulationError> {
        match s.trim().to_lowercase().as_str() {
            "low" | "bajo" => Ok(FixedCostTier::Low),
            "medium" | "medio" => Ok(FixedCostTier::Medium),
            "high" | "alto" => Ok(FixedCostTier::High),
            _ => Err(SimulationError::unknown_label("fixed cost tier", s)),
        }
    }
}

impl fmt::Display for FixedCostTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Shape of the variable cost profile over the month axis.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase", try_from = "String"))]
pub enum VariableCostProfile {
    /// One bump around month 5
    Peak1,

    /// Two bumps around months 4 and 12
    Peak2,
}

impl VariableCostProfile {
    /// All variants in declaration order.
    pub const ALL: [VariableCostProfile; 2] =
        [VariableCostProfile::Peak1, VariableCostProfile::Peak2];

    /// Canonical lowercase label.
    pub fn label(&self) -> &'static str {
        match self {
            VariableCostProfile::Peak1 => "peak1",
            VariableCostProfile::Peak2 => "peak2",
        }
    }

    /// Gaussian bumps as `(center_month, amplitude)` pairs.
    pub fn bumps(&self) -> &'static [(f64, f64)] {
        match self {
            VariableCostProfile::Peak1 => &[(5.0, 3.0)],
            VariableCostProfile::Peak2 => &[(4.0, 2.5), (12.0, 3.5)],
        }
    }
}

impl FromStr for VariableCostProfile {
    type Err = SimulationError;

    fn from_str(s: &str) -> Result<Self, SimulationError> {
        match s.trim().to_lowercase().as_str() {
            "peak1" | "pico1" => Ok(VariableCostProfile::Peak1),
            "peak2" | "pico2" => Ok(VariableCostProfile::Peak2),
            _ => Err(SimulationError::unknown_label("variable cost profile", s)),
        }
    }
}

impl fmt::Display for VariableCostProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// How quickly revenue ramps up after launch.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase", try_from = "String"))]
pub enum RevenueSpeed {
    /// Revenue from month 6, peak at month 12
    Fast,

    /// Revenue from month 10, peak at month 20
    Medium,

    /// Revenue from month 12, peak at month 24
    Slow,
}

impl RevenueSpeed {
    /// All variants in declaration order.
    pub const ALL: [RevenueSpeed; 3] = [RevenueSpeed::Fast, RevenueSpeed::Medium, RevenueSpeed::Slow];

    /// Canonical lowercase label.
    pub fn label(&self) -> &'static str {
        match self {
            RevenueSpeed::Fast => "fast",
            RevenueSpeed::Medium => "medium",
            RevenueSpeed::Slow => "slow",
        }
    }

    /// `(start_month, peak_month)` of the revenue ramp.
    pub fn window(&self) -> (usize, usize) {
        match self {
            RevenueSpeed::Fast => (6, 12),
            RevenueSpeed::Medium => (10, 20),
            RevenueSpeed::Slow => (12, 24),
        }
    }
}

impl FromStr for RevenueSpeed {
    type Err = SimulationError;

    fn from_str(s: &str) -> Result<Self, SimulationError> {
        match s.trim().to_lowercase().as_str() {
            "fast" | "rapido" => Ok(RevenueSpeed::Fast),
            "medium" | "medio" => Ok(RevenueSpeed::Medium),
            "slow" | "lento" => Ok(RevenueSpeed::Slow),
            _ => Err(SimulationError::unknown_label("revenue speed", s)),
        }
    }
}

impl fmt::Display for RevenueSpeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Size of the revenue plateau.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase", try_from = "String"))]
pub enum ImpactTier {
    /// Impact factor 0.6
    Low,

    /// Impact factor 1.0
    Medium,

    /// Impact factor 1.4
    High,
}

impl ImpactTier {
    /// All variants in declaration order.
    pub const ALL: [ImpactTier; 3] = [ImpactTier::Low, ImpactTier::Medium, ImpactTier::High];

    /// Canonical lowercase label.
    pub fn label(&self) -> &'static str {
        match self {
            ImpactTier::Low => "low",
            ImpactTier::Medium => "medium",
            ImpactTier::High => "high",
        }
    }

    /// Impact factor before type scaling.
    pub fn factor(&self) -> f64 {
        match self {
            ImpactTier::Low => 0.6,
            ImpactTier::Medium => 1.0,
            ImpactTier::High => 1.4,
        }
    }
}

impl FromStr for ImpactTier {
    type Err = SimulationError;

    fn from_str(s: &str) -> Result<Self, SimulationError> {
        match s.trim().to_lowercase().as_str() {
            "low" | "bajo" => Ok(ImpactTier::Low),
            "medium" | "medio" => Ok(ImpactTier::Medium),
            "high" | "alto" => Ok(ImpactTier::High),
            _ => Err(SimulationError::unknown_label("impact tier", s)),
        }
    }
}

impl fmt::Display for ImpactTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

// Deserialisation goes through `FromStr` so file input accepts the same
// labels as the command line.
macro_rules! impl_try_from_label {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl TryFrom<String> for $ty {
                type Error = SimulationError;

                fn try_from(label: String) -> Result<Self, SimulationError> {
                    label.parse()
                }
            }
        )+
    };
}

impl_try_from_label!(
    InitiativeType,
    FixedCostTier,
    VariableCostProfile,
    RevenueSpeed,
    ImpactTier,
);

/// The five categorical inputs of one initiative.
///
/// Immutable once created. Serialised field names match the backlog file
/// format (`type`, `fixed_cost`, `variable_cost`, `revenue_speed`, `impact`).
///
/// # Examples
///
/// ```
/// use initiative_core::types::params::*;
///
/// let params = InitiativeParams::new(
///     InitiativeType::Disruptive,
///     FixedCostTier::High,
///     VariableCostProfile::Peak2,
///     RevenueSpeed::Slow,
///     ImpactTier::Low,
/// );
/// assert_eq!(params.fixed_cost_tier(), FixedCostTier::High);
/// assert_eq!(InitiativeParams::all_combinations().len(), 72);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InitiativeParams {
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    initiative_type: InitiativeType,
    #[cfg_attr(feature = "serde", serde(rename = "fixed_cost"))]
    fixed_cost_tier: FixedCostTier,
    #[cfg_attr(feature = "serde", serde(rename = "variable_cost"))]
    variable_cost_profile: VariableCostProfile,
    revenue_speed: RevenueSpeed,
    #[cfg_attr(feature = "serde", serde(rename = "impact"))]
    impact_tier: ImpactTier,
}

impl InitiativeParams {
    /// Bundle the five categorical inputs.
    pub fn new(
        initiative_type: InitiativeType,
        fixed_cost_tier: FixedCostTier,
        variable_cost_profile: VariableCostProfile,
        revenue_speed: RevenueSpeed,
        impact_tier: ImpactTier,
    ) -> Self {
        Self {
            initiative_type,
            fixed_cost_tier,
            variable_cost_profile,
            revenue_speed,
            impact_tier,
        }
    }

    /// Parse the five inputs from text labels.
    ///
    /// # Errors
    ///
    /// `SimulationError::InvalidArgument` naming the first unknown label.
    pub fn parse(
        initiative_type: &str,
        fixed_cost_tier: &str,
        variable_cost_profile: &str,
        revenue_speed: &str,
        impact_tier: &str,
    ) -> Result<Self, SimulationError> {
        Ok(Self::new(
            initiative_type.parse()?,
            fixed_cost_tier.parse()?,
            variable_cost_profile.parse()?,
            revenue_speed.parse()?,
            impact_tier.parse()?,
        ))
    }

    /// Every combination of the five closed sets (72 in total).
    pub fn all_combinations() -> Vec<Self> {
        let mut combos = Vec::with_capacity(72);
        for t in InitiativeType::ALL {
            for fc in FixedCostTier::ALL {
                for vc in VariableCostProfile::ALL {
                    for rs in RevenueSpeed::ALL {
                        for it in ImpactTier::ALL {
                            combos.push(Self::new(t, fc, vc, rs, it));
                        }
                    }
                }
            }
        }
        combos
    }

    /// Initiative type.
    #[inline]
    pub fn initiative_type(&self) -> InitiativeType {
        self.initiative_type
    }

    /// Fixed cost tier.
    #[inline]
    pub fn fixed_cost_tier(&self) -> FixedCostTier {
        self.fixed_cost_tier
    }

    /// Variable cost profile.
    #[inline]
    pub fn variable_cost_profile(&self) -> VariableCostProfile {
        self.variable_cost_profile
    }

    /// Revenue speed.
    #[inline]
    pub fn revenue_speed(&self) -> RevenueSpeed {
        self.revenue_speed
    }

    /// Impact tier.
    #[inline]
    pub fn impact_tier(&self) -> ImpactTier {
        self.impact_tier
    }
}

impl fmt::Display for InitiativeParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}/{}/{}/{}",
            self.initiative_type,
            self.fixed_cost_tier,
            self.variable_cost_profile,
            self.revenue_speed,
            self.impact_tier
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_roundtrip_through_from_str() {
        for t in InitiativeType::ALL {
            assert_eq!(t.label().parse::<InitiativeType>().unwrap(), t);
        }
        for fc in FixedCostTier::ALL {
            assert_eq!(fc.label().parse::<FixedCostTier>().unwrap(), fc);
        }
        for vc in VariableCostProfile::ALL {
            assert_eq!(vc.label().parse::<VariableCostProfile>().unwrap(), vc);
        }
        for rs in RevenueSpeed::ALL {
            assert_eq!(rs.label().parse::<RevenueSpeed>().unwrap(), rs);
        }
        for it in ImpactTier::ALL {
            assert_eq!(it.label().parse::<ImpactTier>().unwrap(), it);
        }
    }

    #[test]
    fn test_from_str_case_insensitive() {
        assert_eq!("CLASSIC".parse::<InitiativeType>().unwrap(), InitiativeType::Classic);
        assert_eq!(" High ".parse::<FixedCostTier>().unwrap(), FixedCostTier::High);
        assert_eq!("Peak2".parse::<VariableCostProfile>().unwrap(), VariableCostProfile::Peak2);
    }

    #[test]
    fn test_from_str_spanish_labels() {
        assert_eq!("clasico".parse::<InitiativeType>().unwrap(), InitiativeType::Classic);
        assert_eq!("disruptivo".parse::<InitiativeType>().unwrap(), InitiativeType::Disruptive);
        assert_eq!("bajo".parse::<FixedCostTier>().unwrap(), FixedCostTier::Low);
        assert_eq!("alto".parse::<ImpactTier>().unwrap(), ImpactTier::High);
        assert_eq!("pico1".parse::<VariableCostProfile>().unwrap(), VariableCostProfile::Peak1);
        assert_eq!("rapido".parse::<RevenueSpeed>().unwrap(), RevenueSpeed::Fast);
        assert_eq!("lento".parse::<RevenueSpeed>().unwrap(), RevenueSpeed::Slow);
        assert_eq!("medio".parse::<RevenueSpeed>().unwrap(), RevenueSpeed::Medium);
    }

    #[test]
    fn test_from_str_unknown() {
        match "warp".parse::<RevenueSpeed>() {
            Err(SimulationError::InvalidArgument(msg)) => {
                assert!(msg.contains("revenue speed"));
                assert!(msg.contains("warp"));
            }
            other => panic!("Expected InvalidArgument, got {:?}", other),
        }
        assert!("peak3".parse::<VariableCostProfile>().is_err());
        assert!("".parse::<InitiativeType>().is_err());
    }

    #[test]
    fn test_lookup_tables() {
        assert_eq!(FixedCostTier::Low.base_cost(), 1.0);
        assert_eq!(FixedCostTier::Medium.base_cost(), 2.0);
        assert_eq!(FixedCostTier::High.base_cost(), 4.0);
        assert_eq!(ImpactTier::Low.factor(), 0.6);
        assert_eq!(ImpactTier::High.factor(), 1.4);
        assert_eq!(RevenueSpeed::Fast.window(), (6, 12));
        assert_eq!(RevenueSpeed::Slow.window(), (12, 24));
        assert_eq!(VariableCostProfile::Peak1.bumps(), &[(5.0, 3.0)]);
        assert_eq!(VariableCostProfile::Peak2.bumps().len(), 2);
        assert_eq!(InitiativeType::Disruptive.cost_multiplier(), 0.95);
        assert_eq!(InitiativeType::Disruptive.revenue_multiplier(), 1.1);
    }

    #[test]
    fn test_params_parse() {
        let params = InitiativeParams::parse("disruptive", "medium", "peak2", "slow", "high").unwrap();
        assert_eq!(params.initiative_type(), InitiativeType::Disruptive);
        assert_eq!(params.fixed_cost_tier(), FixedCostTier::Medium);
        assert_eq!(params.variable_cost_profile(), VariableCostProfile::Peak2);
        assert_eq!(params.revenue_speed(), RevenueSpeed::Slow);
        assert_eq!(params.impact_tier(), ImpactTier::High);

        assert!(InitiativeParams::parse("classic", "huge", "peak1", "fast", "low").is_err());
    }

    #[test]
    fn test_all_combinations_unique() {
        use std::collections::HashSet;
        let combos = InitiativeParams::all_combinations();
        let unique: HashSet<_> = combos.iter().collect();
        assert_eq!(combos.len(), 72);
        assert_eq!(unique.len(), 72);
    }

    #[test]
    fn test_params_display() {
        let params = InitiativeParams::parse("classic", "low", "peak1", "fast", "medium").unwrap();
        assert_eq!(params.to_string(), "classic/low/peak1/fast/medium");
    }

    #[cfg(feature = "serde")]
    mod serde_tests {
        use super::*;

        #[test]
        fn test_params_serde_field_names() {
            let params = InitiativeParams::parse("classic", "low", "peak1", "fast", "medium").unwrap();
            let json = serde_json::to_string(&params).unwrap();
            assert_eq!(
                json,
                r#"{"type":"classic","fixed_cost":"low","variable_cost":"peak1","revenue_speed":"fast","impact":"medium"}"#
            );
        }

        #[test]
        fn test_params_deserialize_spanish_labels() {
            let json = r#"{"type":"disruptivo","fixed_cost":"alto","variable_cost":"pico2","revenue_speed":"lento","impact":"bajo"}"#;
            let params: InitiativeParams = serde_json::from_str(json).unwrap();
            assert_eq!(params.initiative_type(), InitiativeType::Disruptive);
            assert_eq!(params.fixed_cost_tier(), FixedCostTier::High);
            assert_eq!(params.variable_cost_profile(), VariableCostProfile::Peak2);
            assert_eq!(params.revenue_speed(), RevenueSpeed::Slow);
            assert_eq!(params.impact_tier(), ImpactTier::Low);
        }

        #[test]
        fn test_params_deserialize_mixed_case_labels() {
            let json = r#"{"type":"Classic","fixed_cost":"LOW","variable_cost":"Pico1","revenue_speed":" Fast ","impact":"MEDIO"}"#;
            let params: InitiativeParams = serde_json::from_str(json).unwrap();
            assert_eq!(
                params,
                InitiativeParams::parse("classic", "low", "peak1", "fast", "medium").unwrap()
            );
        }

        #[test]
        fn test_params_deserialize_unknown_label_fails() {
            let json = r#"{"type":"classic","fixed_cost":"huge","variable_cost":"peak1","revenue_speed":"fast","impact":"low"}"#;
            let err = serde_json::from_str::<InitiativeParams>(json).unwrap_err();
            assert!(err.to_string().contains("unknown fixed cost tier: huge"));
        }
    }
}
