//! The scored, soft-deleting item container.
//!
//! A [`Filter`] is built once from a collection of items, each starting with
//! a score of `0.0`. Scoring functions overwrite the scores of active items,
//! removal tombstones items without dropping them, and [`Filter::reset`]
//! brings every item back with a zero score.
//!
//! Queries that need the descending order (`ordered`, `best`, `worst`) share a
//! memoized view. Every mutation invalidates it before touching any score, and
//! the next ordered query rebuilds it in full.
//!
//! # Examples
//!
//! ```rust
//! use scorefilter::Filter;
//!
//! let mut filter = Filter::new(1..=10);
//! filter.score_by(|&value| value as f64);
//! filter.remove_where(|&value| value < 3);
//!
//! assert_eq!(filter.count(), 8);
//! assert_eq!(filter.best(), Some(10));
//! assert_eq!(filter.worst(), Some(3));
//! ```

mod iter;
mod ordering;
mod queries;
mod summary;

pub use iter::{Iter, Removed};
pub use summary::FilterSummary;

use std::hash::Hash;

use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::config::FilterConfig;
use crate::score::ScoreState;
use ordering::OrderedCache;

/// A fixed collection of items with scores and tombstones.
///
/// Items are keys, so their `Hash`/`Eq` must stay stable while they live in
/// the filter. Enumeration follows insertion order, which also breaks ties in
/// the ordered view.
///
/// The filter is single-threaded by design: queries that may rebuild the
/// ordered view take `&mut self`.
#[derive(Debug, Clone)]
pub struct Filter<T: Clone> {
    scores: IndexMap<T, ScoreState>,
    ordered: OrderedCache<T>,
    config: FilterConfig,
}

impl<T> Filter<T>
where
    T: Hash + Eq + Clone,
{
    /// Create a filter with every item seeded at `0.0`.
    ///
    /// Duplicate items collapse into a single entry.
    pub fn new(items: impl IntoIterator<Item = T>) -> Self {
        Self::with_config(items, FilterConfig::default())
    }

    /// Create a filter with an explicit configuration.
    pub fn with_config(items: impl IntoIterator<Item = T>, config: FilterConfig) -> Self {
        let scores: IndexMap<T, ScoreState> = items
            .into_iter()
            .map(|item| (item, ScoreState::default()))
            .collect();

        debug!(items = scores.len(), "constructed filter");

        Self {
            scores,
            ordered: OrderedCache::new(),
            config,
        }
    }

    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    // =========================================================================
    // Scoring
    // =========================================================================

    /// Replace the score of every active item with `scorer(item)`.
    ///
    /// Removed items are skipped and stay removed.
    pub fn score_by<F>(&mut self, mut scorer: F)
    where
        F: FnMut(&T) -> f64,
    {
        self.score_by_previous(|item, _| scorer(item));
    }

    /// Replace the score of every active item using its previous score.
    ///
    /// The scorer may return a plain `f64` or a [`ScoreState`]; returning
    /// [`ScoreState::Removed`] tombstones the item.
    ///
    /// ```rust
    /// use scorefilter::{Filter, ScoreState};
    ///
    /// let mut filter = Filter::new(["a", "b", "c"]);
    /// filter.score_by_previous(|item, previous| {
    ///     if *item == "b" {
    ///         ScoreState::Removed
    ///     } else {
    ///         ScoreState::Active(previous + 1.0)
    ///     }
    /// });
    ///
    /// assert_eq!(filter.count(), 2);
    /// assert_eq!(filter.score_of(&"a"), Some(ScoreState::Active(1.0)));
    /// ```
    pub fn score_by_previous<F, S>(&mut self, mut scorer: F)
    where
        F: FnMut(&T, f64) -> S,
        S: Into<ScoreState>,
    {
        self.ordered.invalidate();

        let mut scored = 0usize;
        for (item, state) in self.scores.iter_mut() {
            if let ScoreState::Active(previous) = *state {
                *state = scorer(item, previous).into();
                scored += 1;
            }
        }

        trace!(scored, "rescored active items");
    }

    // =========================================================================
    // Removal
    // =========================================================================

    /// Remove every active item for which `predicate` holds.
    pub fn remove_where<P>(&mut self, mut predicate: P)
    where
        P: FnMut(&T) -> bool,
    {
        self.remove_where_scored(|item, _| predicate(item));
    }

    /// Remove every active item for which `predicate(item, score)` holds.
    pub fn remove_where_scored<P>(&mut self, mut predicate: P)
    where
        P: FnMut(&T, f64) -> bool,
    {
        let mut removed = 0usize;

        self.score_by_previous(|item, score| {
            if predicate(item, score) {
                removed += 1;
                ScoreState::Removed
            } else {
                ScoreState::Active(score)
            }
        });

        trace!(removed, "removed matching items");
    }

    /// Remove a single item.
    ///
    /// Returns `false` without changing anything when the item was never part
    /// of the filter. Removing an already removed item is harmless.
    pub fn remove(&mut self, item: &T) -> bool {
        let Some(state) = self.scores.get_mut(item) else {
            trace!("ignored removal of unknown item");
            return false;
        };

        self.ordered.invalidate();
        *state = ScoreState::Removed;
        true
    }

    /// Keep only the active items for which `predicate` holds.
    pub fn keep_only<P>(&mut self, mut predicate: P)
    where
        P: FnMut(&T) -> bool,
    {
        self.remove_where(|item| !predicate(item));
    }

    /// Keep only the active items for which `predicate(item, score)` holds.
    pub fn keep_only_scored<P>(&mut self, mut predicate: P)
    where
        P: FnMut(&T, f64) -> bool,
    {
        self.remove_where_scored(|item, score| !predicate(item, score));
    }

    /// Reset every item, removed or not, to an active score of `0.0`.
    pub fn reset(&mut self) {
        self.ordered.invalidate();

        for state in self.scores.values_mut() {
            *state = ScoreState::default();
        }

        trace!(items = self.scores.len(), "reset all scores");
    }

    // =========================================================================
    // Cardinality and lookup
    // =========================================================================

    /// Number of active items.
    pub fn count(&self) -> usize {
        self.scores.values().filter(|state| state.is_active()).count()
    }

    /// True when no item is active.
    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// Number of items known to the filter, including removed ones.
    pub fn total(&self) -> usize {
        self.scores.len()
    }

    /// State of an item, or `None` if the filter has never seen it.
    pub fn score_of(&self, item: &T) -> Option<ScoreState> {
        self.scores.get(item).copied()
    }

    /// True when the item is known to the filter, active or removed.
    pub fn contains(&self, item: &T) -> bool {
        self.scores.contains_key(item)
    }

    /// True when the item is known and tombstoned.
    pub fn is_removed(&self, item: &T) -> bool {
        self.score_of(item).is_some_and(ScoreState::is_removed)
    }

    /// Snapshot of cardinalities and score extremes.
    pub fn summary(&self) -> FilterSummary {
        FilterSummary::from_scores(self.total(), self.iter().map(|(_, score)| score))
    }
}

impl<T> FromIterator<T> for Filter<T>
where
    T: Hash + Eq + Clone,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<T> From<Vec<T>> for Filter<T>
where
    T: Hash + Eq + Clone,
{
    fn from(items: Vec<T>) -> Self {
        Self::new(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NanPlacement;

    fn numbers() -> Filter<i32> {
        Filter::new(1..=10)
    }

    #[test]
    fn construction_seeds_zero_scores() {
        let filter = numbers();
        assert_eq!(filter.count(), 10);
        assert_eq!(filter.total(), 10);
        assert!(filter.iter().all(|(_, score)| score == 0.0));
    }

    #[test]
    fn duplicates_collapse() {
        let filter = Filter::new(vec![1, 2, 2, 3, 1]);
        assert_eq!(filter.count(), 3);
    }

    #[test]
    fn scoring_skips_removed_items() {
        let mut filter = numbers();
        filter.remove(&4);

        let mut seen = Vec::new();
        filter.score_by(|&value| {
            seen.push(value);
            value as f64
        });

        assert!(!seen.contains(&4));
        assert_eq!(filter.score_of(&4), Some(ScoreState::Removed));
        assert_eq!(filter.score_of(&5), Some(ScoreState::Active(5.0)));
    }

    #[test]
    fn score_by_previous_accumulates() {
        let mut filter = numbers();
        filter.score_by(|&value| value as f64);
        filter.score_by_previous(|_, previous| previous * 2.0);
        assert_eq!(filter.score_of(&3), Some(ScoreState::Active(6.0)));
    }

    #[test]
    fn scorer_returning_removed_tombstones() {
        let mut filter = numbers();
        filter.score_by_previous(|&value, previous| {
            if value % 2 == 0 {
                ScoreState::Removed
            } else {
                ScoreState::Active(previous)
            }
        });
        assert_eq!(filter.count(), 5);
        assert!(filter.is_removed(&2));
    }

    #[test]
    fn remove_unknown_item_is_noop() {
        let mut filter = numbers();
        assert!(!filter.remove(&42));
        assert_eq!(filter.count(), 10);
        assert!(!filter.contains(&42));
    }

    #[test]
    fn remove_known_item_twice() {
        let mut filter = numbers();
        assert!(filter.remove(&1));
        assert!(filter.remove(&1));
        assert_eq!(filter.count(), 9);
    }

    #[test]
    fn keep_only_is_inverse_of_remove_where() {
        let mut filter = numbers();
        filter.keep_only(|&value| value > 7);
        assert_eq!(filter.count(), 3);
        assert!(filter.is_removed(&7));
    }

    #[test]
    fn scored_predicates_see_current_score() {
        let mut filter = numbers();
        filter.score_by(|&value| value as f64 / 10.0);
        filter.keep_only_scored(|_, score| score >= 0.5);
        assert_eq!(filter.count(), 6);

        filter.remove_where_scored(|_, score| score > 0.9);
        assert_eq!(filter.count(), 5);
        assert!(filter.is_removed(&10));
    }

    #[test]
    fn remove_where_scored_only_visits_active_items() {
        let mut filter = numbers();
        filter.remove(&2);

        let mut visited = Vec::new();
        filter.remove_where_scored(|&value, _| {
            visited.push(value);
            value <= 3
        });

        assert!(!visited.contains(&2));
        assert_eq!(filter.count(), 7);
        assert_eq!(filter.removed(), im::vector![1, 2, 3]);
    }

    #[test]
    fn reset_resurrects_everything() {
        let mut filter = numbers();
        filter.score_by(|&value| value as f64);
        filter.remove_where(|&value| value < 5);
        filter.reset();

        assert_eq!(filter.count(), 10);
        assert!(filter.iter().all(|(_, score)| score == 0.0));
    }

    #[test]
    fn mutations_invalidate_ordered_view() {
        let mut filter = numbers();
        filter.score_by(|&value| value as f64);
        filter.ordered();
        assert!(!filter.ordered.is_dirty());

        filter.remove(&10);
        assert!(filter.ordered.is_dirty());
        filter.ordered();

        filter.reset();
        assert!(filter.ordered.is_dirty());
    }

    #[test]
    fn panicking_scorer_leaves_cache_invalidated() {
        let mut filter = numbers();
        filter.ordered();

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            filter.score_by(|&value| {
                if value == 5 {
                    panic!("scorer failed");
                }
                value as f64
            });
        }));

        assert!(result.is_err());
        assert!(filter.ordered.is_dirty());
    }

    #[test]
    fn config_is_kept() {
        let filter = Filter::with_config(
            ["x"],
            FilterConfig::with_nan_placement(NanPlacement::First),
        );
        assert_eq!(filter.config().ordering.nan_placement, NanPlacement::First);
    }

    #[test]
    fn summary_reflects_state() {
        let mut filter = numbers();
        filter.score_by(|&value| value as f64);
        filter.remove_where(|&value| value > 8);

        let summary = filter.summary();
        assert_eq!(summary.total_items, 10);
        assert_eq!(summary.active_items, 8);
        assert_eq!(summary.removed_items, 2);
        assert_eq!(summary.best_score, Some(8.0));
        assert_eq!(summary.worst_score, Some(1.0));
    }

    #[test]
    fn collects_from_iterator() {
        let filter: Filter<char> = "hello".chars().collect();
        assert_eq!(filter.count(), 4);
    }
}
