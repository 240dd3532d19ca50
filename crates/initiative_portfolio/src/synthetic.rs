//! Seeded synthetic backlogs.
//!
//! Draws each categorical parameter uniformly from its closed set. The same
//! seed always yields the same backlog.

use initiative_core::types::{
    FixedCostTier, ImpactTier, InitiativeParams, InitiativeType, RevenueSpeed,
    VariableCostProfile,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Upper bound on synthetic backlog size, matching the interactive limit.
pub const MAX_SYNTHETIC_INITIATIVES: usize = 100;

fn pick<T: Copy, R: Rng + ?Sized>(rng: &mut R, options: &[T]) -> T {
    options[rng.gen_range(0..options.len())]
}

/// Draws one initiative from `rng`.
pub fn random_initiative<R: Rng + ?Sized>(rng: &mut R) -> InitiativeParams {
    InitiativeParams::new(
        pick(rng, &InitiativeType::ALL),
        pick(rng, &FixedCostTier::ALL),
        pick(rng, &VariableCostProfile::ALL),
        pick(rng, &RevenueSpeed::ALL),
        pick(rng, &ImpactTier::ALL),
    )
}

/// Draws `count` initiatives from a generator seeded with `seed`.
///
/// # Examples
///
/// ```
/// use initiative_portfolio::synthetic::random_params;
///
/// let a = random_params(10, 42);
/// let b = random_params(10, 42);
/// assert_eq!(a, b);
/// assert_eq!(a.len(), 10);
/// ```
pub fn random_params(count: usize, seed: u64) -> Vec<InitiativeParams> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count).map(|_| random_initiative(&mut rng)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_same_seed_same_backlog() {
        assert_eq!(random_params(25, 7), random_params(25, 7));
    }

    #[test]
    fn test_different_seeds_differ() {
        assert_ne!(random_params(25, 1), random_params(25, 2));
    }

    #[test]
    fn test_empty() {
        assert!(random_params(0, 3).is_empty());
    }

    #[test]
    fn test_covers_every_type() {
        let params = random_params(MAX_SYNTHETIC_INITIATIVES, 11);
        let types: HashSet<_> = params.iter().map(|p| p.initiative_type()).collect();
        let speeds: HashSet<_> = params.iter().map(|p| p.revenue_speed()).collect();
        assert_eq!(types.len(), 2);
        assert_eq!(speeds.len(), 3);
    }
}
