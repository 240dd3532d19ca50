//! Portfolio ranking and aggregation.
//!
//! Ranks entries by their cumulative net benefit at a horizon month
//! (descending, stable on ties) and sums the cumulative curves of the
//! first `count` ranked entries into the portfolio curve.

use std::cmp::Ordering;

use crate::backlog::BacklogEntry;
use crate::error::PortfolioError;

/// Anything exposing a cumulative net benefit series.
///
/// Implemented by [`BacklogEntry`]; ranking only needs this view of an entry.
pub trait CumulativeSeries {
    /// Cumulative net benefit per month.
    fn net_benefit_cumulative(&self) -> &[f64];
}

impl CumulativeSeries for BacklogEntry {
    fn net_benefit_cumulative(&self) -> &[f64] {
        self.curve().net_benefit_cumulative()
    }
}

impl<T: CumulativeSeries + ?Sized> CumulativeSeries for &T {
    fn net_benefit_cumulative(&self) -> &[f64] {
        (**self).net_benefit_cumulative()
    }
}

/// An entry together with its position in the ranking.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedEntry<'a, E> {
    /// 1-based rank
    pub rank: usize,
    /// Position in the input slice
    pub backlog_index: usize,
    /// Cumulative net benefit at the horizon month
    pub horizon_value: f64,
    /// The ranked entry
    pub entry: &'a E,
}

/// Result of [`rank_and_select`].
#[derive(Debug, Clone, PartialEq)]
pub struct PortfolioSelection<'a, E> {
    horizon_month: usize,
    count: usize,
    ranked: Vec<RankedEntry<'a, E>>,
    aggregate_curve: Vec<f64>,
    aggregate_value_at_horizon: f64,
}

impl<'a, E> PortfolioSelection<'a, E> {
    /// Month used as the ranking key.
    #[inline]
    pub fn horizon_month(&self) -> usize {
        self.horizon_month
    }

    /// Number of selected entries.
    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Every entry, best first.
    #[inline]
    pub fn ranked(&self) -> &[RankedEntry<'a, E>] {
        &self.ranked
    }

    /// The first `count` ranked entries.
    #[inline]
    pub fn selected(&self) -> &[RankedEntry<'a, E>] {
        &self.ranked[..self.count]
    }

    /// Element-wise sum of the selected cumulative curves.
    #[inline]
    pub fn aggregate_curve(&self) -> &[f64] {
        &self.aggregate_curve
    }

    /// `aggregate_curve[horizon_month]`.
    #[inline]
    pub fn aggregate_value_at_horizon(&self) -> f64 {
        self.aggregate_value_at_horizon
    }
}

/// Ranks `entries` at `horizon_month` and aggregates the top `count`.
///
/// # Arguments
///
/// * `entries` - Backlog in display order
/// * `horizon_month` - Month index used as ranking key, in `[0, horizon_months - 1]`
/// * `count` - Number of entries to select, in `[1, entries.len()]`
///
/// # Errors
///
/// - `PortfolioError::CountOutOfRange` for `count` outside `[1, entries.len()]`
/// - `PortfolioError::HorizonLengthMismatch` if curve lengths differ
/// - `PortfolioError::HorizonOutOfRange` for `horizon_month` past the curves
///
/// # Examples
///
/// ```
/// use initiative_portfolio::{rank_and_select, CumulativeSeries};
///
/// struct Flat(Vec<f64>);
/// impl CumulativeSeries for Flat {
///     fn net_benefit_cumulative(&self) -> &[f64] { &self.0 }
/// }
///
/// let entries = vec![Flat(vec![10.0; 3]), Flat(vec![30.0; 3]), Flat(vec![20.0; 3])];
/// let selection = rank_and_select(&entries, 2, 2).unwrap();
///
/// let values: Vec<f64> = selection.selected().iter().map(|r| r.horizon_value).collect();
/// assert_eq!(values, vec![30.0, 20.0]);
/// assert_eq!(selection.aggregate_value_at_horizon(), 50.0);
/// ```
pub fn rank_and_select<E: CumulativeSeries>(
    entries: &[E],
    horizon_month: usize,
    count: usize,
) -> Result<PortfolioSelection<'_, E>, PortfolioError> {
    if count == 0 || count > entries.len() {
        return Err(PortfolioError::CountOutOfRange {
            count,
            backlog_size: entries.len(),
        });
    }

    let horizon_months = entries[0].net_benefit_cumulative().len();
    if let Some((index, entry)) = entries
        .iter()
        .enumerate()
        .find(|(_, e)| e.net_benefit_cumulative().len() != horizon_months)
    {
        return Err(PortfolioError::HorizonLengthMismatch {
            index,
            expected: horizon_months,
            found: entry.net_benefit_cumulative().len(),
        });
    }

    if horizon_month >= horizon_months {
        return Err(PortfolioError::HorizonOutOfRange {
            month: horizon_month,
            last_month: horizon_months.saturating_sub(1),
        });
    }

    let mut ranked: Vec<RankedEntry<'_, E>> = entries
        .iter()
        .enumerate()
        .map(|(backlog_index, entry)| RankedEntry {
            rank: 0,
            backlog_index,
            horizon_value: entry.net_benefit_cumulative()[horizon_month],
            entry,
        })
        .collect();

    // sort_by is stable: values equal under `==` (including 0.0 and -0.0)
    // keep backlog order
    ranked.sort_by(|a, b| {
        b.horizon_value
            .partial_cmp(&a.horizon_value)
            .unwrap_or(Ordering::Equal)
    });
    for (position, r) in ranked.iter_mut().enumerate() {
        r.rank = position + 1;
    }

    let mut aggregate_curve = vec![0.0; horizon_months];
    for r in &ranked[..count] {
        for (total, value) in aggregate_curve
            .iter_mut()
            .zip(r.entry.net_benefit_cumulative())
        {
            *total += value;
        }
    }
    let aggregate_value_at_horizon = aggregate_curve[horizon_month];

    Ok(PortfolioSelection {
        horizon_month,
        count,
        ranked,
        aggregate_curve,
        aggregate_value_at_horizon,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Series(Vec<f64>);

    impl CumulativeSeries for Series {
        fn net_benefit_cumulative(&self) -> &[f64] {
            &self.0
        }
    }

    fn at_horizon(values: &[f64], horizon_months: usize, horizon_month: usize) -> Vec<Series> {
        values
            .iter()
            .map(|&v| {
                let mut series = vec![0.0; horizon_months];
                series[horizon_month] = v;
                Series(series)
            })
            .collect()
    }

    #[test]
    fn test_three_entry_scenario() {
        let entries = at_horizon(&[10.0, 30.0, 20.0], 37, 24);
        let selection = rank_and_select(&entries, 24, 2).unwrap();

        let selected: Vec<usize> = selection.selected().iter().map(|r| r.backlog_index).collect();
        assert_eq!(selected, vec![1, 2]);
        assert_eq!(selection.aggregate_curve()[24], 50.0);
        assert_eq!(selection.aggregate_value_at_horizon(), 50.0);
        assert_eq!(selection.ranked().len(), 3);
        assert_eq!(selection.ranked()[2].backlog_index, 0);
    }

    #[test]
    fn test_ranks_are_one_based() {
        let entries = at_horizon(&[1.0, 3.0, 2.0], 5, 4);
        let selection = rank_and_select(&entries, 4, 3).unwrap();
        let ranks: Vec<usize> = selection.ranked().iter().map(|r| r.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3]);
    }

    #[test]
    fn test_ties_keep_backlog_order() {
        let entries = at_horizon(&[5.0, 7.0, 5.0, 7.0, 5.0], 10, 3);
        let selection = rank_and_select(&entries, 3, 5).unwrap();
        let order: Vec<usize> = selection.ranked().iter().map(|r| r.backlog_index).collect();
        assert_eq!(order, vec![1, 3, 0, 2, 4]);
    }

    #[test]
    fn test_signed_zeros_tie_in_backlog_order() {
        let entries = at_horizon(&[-0.0, 0.0, -0.0], 4, 2);
        let selection = rank_and_select(&entries, 2, 3).unwrap();
        let order: Vec<usize> = selection.ranked().iter().map(|r| r.backlog_index).collect();
        assert_eq!(order, vec![0, 1, 2]);
    }

    #[test]
    fn test_negative_values_ranked_descending() {
        let entries = at_horizon(&[-4.0, -1.0, -9.0], 6, 0);
        let selection = rank_and_select(&entries, 0, 1).unwrap();
        assert_eq!(selection.selected()[0].backlog_index, 1);
        assert_eq!(selection.aggregate_value_at_horizon(), -1.0);
    }

    #[test]
    fn test_aggregate_sums_every_month() {
        let entries = vec![
            Series(vec![1.0, 2.0, 3.0]),
            Series(vec![10.0, 20.0, 30.0]),
            Series(vec![100.0, 200.0, 0.0]),
        ];
        let selection = rank_and_select(&entries, 2, 2).unwrap();
        assert_eq!(selection.aggregate_curve(), &[11.0, 22.0, 33.0]);
    }

    #[test]
    fn test_count_bounds() {
        let entries = at_horizon(&[1.0, 2.0], 37, 0);
        assert_eq!(
            rank_and_select(&entries, 0, 0).unwrap_err(),
            PortfolioError::CountOutOfRange {
                count: 0,
                backlog_size: 2
            }
        );
        assert_eq!(
            rank_and_select(&entries, 0, 3).unwrap_err(),
            PortfolioError::CountOutOfRange {
                count: 3,
                backlog_size: 2
            }
        );
        assert!(rank_and_select(&entries, 0, 2).is_ok());
    }

    #[test]
    fn test_horizon_bounds() {
        let entries = at_horizon(&[1.0, 2.0], 37, 0);
        assert!(rank_and_select(&entries, 36, 1).is_ok());
        assert_eq!(
            rank_and_select(&entries, 37, 1).unwrap_err(),
            PortfolioError::HorizonOutOfRange {
                month: 37,
                last_month: 36
            }
        );
    }

    #[test]
    fn test_mismatched_lengths_rejected() {
        let entries = vec![Series(vec![0.0; 37]), Series(vec![0.0; 24])];
        assert_eq!(
            rank_and_select(&entries, 0, 1).unwrap_err(),
            PortfolioError::HorizonLengthMismatch {
                index: 1,
                expected: 37,
                found: 24
            }
        );
    }

    #[test]
    fn test_empty_entries_rejected() {
        let entries: Vec<Series> = Vec::new();
        assert!(matches!(
            rank_and_select(&entries, 0, 1),
            Err(PortfolioError::CountOutOfRange { .. })
        ));
    }

    #[test]
    fn test_reference_entries() {
        let owned = at_horizon(&[3.0, 4.0], 4, 1);
        let refs: Vec<&Series> = owned.iter().collect();
        let selection = rank_and_select(&refs, 1, 1).unwrap();
        assert_eq!(selection.aggregate_value_at_horizon(), 4.0);
    }
}
