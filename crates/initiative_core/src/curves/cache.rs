//! Curve cache with lazy generation and Arc sharing.
//!
//! The generator is pure and the parameter space is small (72 combinations
//! per horizon length), so a backlog with repeated parameter sets only needs
//! each distinct curve generated once.
//!
//! # Caching Strategy
//!
//! - Double-check locking prevents duplicate generation
//! - First access generates and logs at `debug` level
//! - Subsequent accesses return the cached `Arc`

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use tracing::debug;

use super::{generate, Curve};
use crate::types::{InitiativeParams, SimulationError};

type CurveKey = (InitiativeParams, usize);

/// Thread-safe cache of generated curves keyed by parameters and horizon length.
///
/// # Example
///
/// ```rust
/// use initiative_core::curves::CurveCache;
/// use initiative_core::types::InitiativeParams;
///
/// let cache = CurveCache::new();
/// let params = InitiativeParams::parse("classic", "low", "peak1", "fast", "medium").unwrap();
///
/// let first = cache.get_or_generate(&params, 37).unwrap();
/// let second = cache.get_or_generate(&params, 37).unwrap();
///
/// assert!(std::sync::Arc::ptr_eq(&first, &second));
/// assert_eq!(cache.len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct CurveCache {
    curves: RwLock<HashMap<CurveKey, Arc<Curve>>>,
}

impl CurveCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Retrieves or generates the curve for `params` over `horizon_months`.
    ///
    /// # Errors
    ///
    /// `SimulationError::InvalidArgument` if `horizon_months` is zero. Failed
    /// generations are not cached.
    pub fn get_or_generate(
        &self,
        params: &InitiativeParams,
        horizon_months: usize,
    ) -> Result<Arc<Curve>, SimulationError> {
        let key = (*params, horizon_months);

        {
            let curves = self.curves.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(curve) = curves.get(&key) {
                return Ok(Arc::clone(curve));
            }
        }

        let mut curves = self.curves.write().unwrap_or_else(PoisonError::into_inner);

        // Another thread may have populated while we waited
        if let Some(curve) = curves.get(&key) {
            return Ok(Arc::clone(curve));
        }

        debug!(%params, horizon_months, "generating curve");
        let curve = Arc::new(generate(params, horizon_months)?);
        curves.insert(key, Arc::clone(&curve));
        Ok(curve)
    }

    /// Number of cached curves.
    pub fn len(&self) -> usize {
        self.curves
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Whether the cache holds no curves.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops every cached curve.
    pub fn clear(&self) {
        self.curves
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}
