//! Backlog of initiatives with their generated curves.
//!
//! A backlog pairs each set of [`InitiativeParams`] with its [`Curve`] and a
//! sequential display identifier starting at 1. Entries are created once
//! and never mutated; curves are shared through `Arc` so cached curves are
//! not copied.

use std::fmt;
use std::sync::Arc;

use initiative_core::curves::{generate, Curve, CurveCache};
use initiative_core::types::{InitiativeParams, SimulationError};
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::debug;

use crate::aggregator::{rank_and_select, PortfolioSelection};
use crate::error::PortfolioError;

/// Display identifier of a backlog entry.
///
/// # Examples
///
/// ```
/// use initiative_portfolio::InitiativeId;
///
/// let id = InitiativeId::new(3);
/// assert_eq!(id.value(), 3);
/// assert_eq!(id.to_string(), "3");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct InitiativeId(u32);

impl InitiativeId {
    /// Creates a new identifier.
    #[inline]
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the numeric value.
    #[inline]
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for InitiativeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for InitiativeId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

/// One initiative in the backlog.
#[derive(Debug, Clone, PartialEq)]
pub struct BacklogEntry {
    id: InitiativeId,
    params: InitiativeParams,
    curve: Arc<Curve>,
}

impl BacklogEntry {
    /// Creates an entry from an already generated curve.
    pub fn new(id: InitiativeId, params: InitiativeParams, curve: Arc<Curve>) -> Self {
        Self { id, params, curve }
    }

    /// Display identifier.
    #[inline]
    pub fn id(&self) -> InitiativeId {
        self.id
    }

    /// Categorical inputs.
    #[inline]
    pub fn params(&self) -> &InitiativeParams {
        &self.params
    }

    /// Generated curve.
    #[inline]
    pub fn curve(&self) -> &Curve {
        &self.curve
    }

    /// Cumulative net benefit at `month`.
    ///
    /// # Errors
    ///
    /// `PortfolioError::HorizonOutOfRange` when `month` is past the curve.
    pub fn horizon_value(&self, month: usize) -> Result<f64, PortfolioError> {
        self.curve
            .cumulative_at(month)
            .ok_or(PortfolioError::HorizonOutOfRange {
                month,
                last_month: self.curve.horizon_months().saturating_sub(1),
            })
    }
}

/// Ordered collection of backlog entries.
#[derive(Debug, Clone, PartialEq)]
pub struct Backlog {
    entries: Vec<BacklogEntry>,
    horizon_months: usize,
}

impl Backlog {
    /// Generates one curve per initiative and numbers them 1..=n in input order.
    ///
    /// # Errors
    ///
    /// `PortfolioError::Simulation` if `horizon_months` is zero.
    pub fn from_params(
        params: &[InitiativeParams],
        horizon_months: usize,
    ) -> Result<Self, PortfolioError> {
        debug!(initiatives = params.len(), horizon_months, "building backlog");
        let curves = generate_all(params, |p| generate(p, horizon_months).map(Arc::new))?;
        Self::assemble(params, curves, horizon_months)
    }

    /// Same as [`Backlog::from_params`], reusing curves held by `cache`.
    pub fn from_params_cached(
        params: &[InitiativeParams],
        horizon_months: usize,
        cache: &CurveCache,
    ) -> Result<Self, PortfolioError> {
        debug!(
            initiatives = params.len(),
            horizon_months,
            cached = cache.len(),
            "building backlog from cache"
        );
        let curves = generate_all(params, |p| cache.get_or_generate(p, horizon_months))?;
        Self::assemble(params, curves, horizon_months)
    }

    fn assemble(
        params: &[InitiativeParams],
        curves: Vec<Arc<Curve>>,
        horizon_months: usize,
    ) -> Result<Self, PortfolioError> {
        if horizon_months == 0 {
            return Err(SimulationError::invalid_argument("horizon_months must be at least 1").into());
        }
        let entries = params
            .iter()
            .zip(curves)
            .zip(1u32..)
            .map(|((p, curve), id)| BacklogEntry::new(InitiativeId::new(id), *p, curve))
            .collect();
        Ok(Self {
            entries,
            horizon_months,
        })
    }

    /// Entries in backlog order.
    #[inline]
    pub fn entries(&self) -> &[BacklogEntry] {
        &self.entries
    }

    /// Iterator over entries in backlog order.
    pub fn iter(&self) -> std::slice::Iter<'_, BacklogEntry> {
        self.entries.iter()
    }

    /// Number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the backlog has no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of monthly points in every curve.
    #[inline]
    pub fn horizon_months(&self) -> usize {
        self.horizon_months
    }

    /// Entry with identifier `id`, if any.
    pub fn get(&self, id: InitiativeId) -> Option<&BacklogEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Entry with identifier `id`.
    ///
    /// # Errors
    ///
    /// `PortfolioError::InitiativeNotFound` if no entry carries `id`.
    pub fn entry(&self, id: InitiativeId) -> Result<&BacklogEntry, PortfolioError> {
        self.get(id).ok_or(PortfolioError::InitiativeNotFound(id))
    }

    /// Ranks the backlog at `horizon_month` and aggregates the top `count`.
    ///
    /// See [`rank_and_select`].
    pub fn rank_and_select(
        &self,
        horizon_month: usize,
        count: usize,
    ) -> Result<PortfolioSelection<'_, BacklogEntry>, PortfolioError> {
        rank_and_select(&self.entries, horizon_month, count)
    }
}

impl<'a> IntoIterator for &'a Backlog {
    type Item = &'a BacklogEntry;
    type IntoIter = std::slice::Iter<'a, BacklogEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(feature = "parallel")]
fn generate_all<F>(params: &[InitiativeParams], f: F) -> Result<Vec<Arc<Curve>>, SimulationError>
where
    F: Fn(&InitiativeParams) -> Result<Arc<Curve>, SimulationError> + Sync + Send,
{
    params.par_iter().map(f).collect()
}

#[cfg(not(feature = "parallel"))]
fn generate_all<F>(params: &[InitiativeParams], f: F) -> Result<Vec<Arc<Curve>>, SimulationError>
where
    F: Fn(&InitiativeParams) -> Result<Arc<Curve>, SimulationError>,
{
    params.iter().map(f).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_params() -> Vec<InitiativeParams> {
        vec![
            InitiativeParams::parse("classic", "low", "peak1", "fast", "medium").unwrap(),
            InitiativeParams::parse("disruptive", "high", "peak2", "slow", "low").unwrap(),
            InitiativeParams::parse("classic", "low", "peak1", "fast", "medium").unwrap(),
        ]
    }

    #[test]
    fn test_ids_sequential_from_one() {
        let backlog = Backlog::from_params(&sample_params(), 37).unwrap();
        let ids: Vec<u32> = backlog.iter().map(|e| e.id().value()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_entries_keep_input_order() {
        let params = sample_params();
        let backlog = Backlog::from_params(&params, 37).unwrap();
        for (entry, p) in backlog.entries().iter().zip(&params) {
            assert_eq!(entry.params(), p);
            assert_eq!(*entry.curve(), generate(p, 37).unwrap());
        }
    }

    #[test]
    fn test_zero_horizon_rejected() {
        let err = Backlog::from_params(&sample_params(), 0).unwrap_err();
        assert!(matches!(err, PortfolioError::Simulation(_)));
    }

    #[test]
    fn test_empty_backlog() {
        let backlog = Backlog::from_params(&[], 37).unwrap();
        assert!(backlog.is_empty());
        assert_eq!(backlog.horizon_months(), 37);
        assert!(matches!(
            backlog.rank_and_select(24, 1),
            Err(PortfolioError::CountOutOfRange { count: 1, backlog_size: 0 })
        ));
    }

    #[test]
    fn test_empty_backlog_zero_horizon_rejected() {
        assert!(Backlog::from_params(&[], 0).is_err());
    }

    #[test]
    fn test_cached_backlog_shares_curves() {
        let cache = CurveCache::new();
        let backlog = Backlog::from_params_cached(&sample_params(), 37, &cache).unwrap();
        assert_eq!(cache.len(), 2);
        let first = &backlog.entries()[0];
        let third = &backlog.entries()[2];
        assert!(std::ptr::eq(first.curve(), third.curve()));
        assert_eq!(backlog, Backlog::from_params(&sample_params(), 37).unwrap());
    }

    #[test]
    fn test_lookup_by_id() {
        let backlog = Backlog::from_params(&sample_params(), 37).unwrap();
        assert_eq!(backlog.entry(InitiativeId::new(2)).unwrap().id().value(), 2);
        assert!(backlog.get(InitiativeId::new(4)).is_none());
        assert_eq!(
            backlog.entry(InitiativeId::new(4)).unwrap_err(),
            PortfolioError::InitiativeNotFound(InitiativeId::new(4))
        );
    }

    #[test]
    fn test_horizon_value() {
        let backlog = Backlog::from_params(&sample_params(), 37).unwrap();
        let entry = &backlog.entries()[0];
        assert_eq!(
            entry.horizon_value(24).unwrap(),
            entry.curve().net_benefit_cumulative()[24]
        );
        assert_eq!(
            entry.horizon_value(37).unwrap_err(),
            PortfolioError::HorizonOutOfRange {
                month: 37,
                last_month: 36
            }
        );
    }
}
