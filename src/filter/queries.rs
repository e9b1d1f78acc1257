//! Read-side operations: enumeration, extremes, thresholds, and ordering.
//!
//! Enumeration and threshold scans walk the score map directly and never
//! touch the ordered view. Only `ordered`, `best`, `worst`, and their
//! `with_*` helpers go through the memoized view.

use std::hash::Hash;

use im::Vector;

use super::iter::{Iter, Removed};
use super::ordering::build_ordered;
use super::Filter;

impl<T> Filter<T>
where
    T: Hash + Eq + Clone,
{
    // =========================================================================
    // Enumeration
    // =========================================================================

    /// Iterate over active items and their scores in insertion order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.scores.iter(),
        }
    }

    /// Iterate over removed items in insertion order.
    pub fn iter_removed(&self) -> Removed<'_, T> {
        Removed {
            inner: self.scores.iter(),
        }
    }

    pub fn for_each_active<F>(&self, mut consumer: F)
    where
        F: FnMut(&T),
    {
        self.iter().for_each(|(item, _)| consumer(item));
    }

    pub fn for_each_active_scored<F>(&self, mut consumer: F)
    where
        F: FnMut(&T, f64),
    {
        self.iter().for_each(|(item, score)| consumer(item, score));
    }

    pub fn for_each_removed<F>(&self, consumer: F)
    where
        F: FnMut(&T),
    {
        self.iter_removed().for_each(consumer);
    }

    /// Active items in insertion order. Not sorted.
    pub fn remaining(&self) -> Vector<T> {
        self.iter().map(|(item, _)| item.clone()).collect()
    }

    /// Removed items in insertion order.
    pub fn removed(&self) -> Vector<T> {
        self.iter_removed().cloned().collect()
    }

    // =========================================================================
    // Extremes
    // =========================================================================

    /// Item with the highest score, or `None` when nothing is active.
    ///
    /// Among equal scores, the earliest inserted item wins.
    pub fn best(&mut self) -> Option<T> {
        self.ordered_view().front().cloned()
    }

    /// Item with the lowest score, or `None` when nothing is active.
    ///
    /// Among equal scores, the latest inserted item wins.
    pub fn worst(&mut self) -> Option<T> {
        self.ordered_view().back().cloned()
    }

    /// Pass the best item to `consumer` if there is one.
    pub fn with_best<F>(&mut self, consumer: F)
    where
        F: FnOnce(&T),
    {
        if let Some(best) = self.ordered_view().front() {
            consumer(best);
        }
    }

    /// Pass the worst item to `consumer` if there is one.
    pub fn with_worst<F>(&mut self, consumer: F)
    where
        F: FnOnce(&T),
    {
        if let Some(worst) = self.ordered_view().back() {
            consumer(worst);
        }
    }

    // =========================================================================
    // Threshold queries
    // =========================================================================

    /// Active items with a score strictly greater than `threshold`.
    pub fn iter_above_threshold(&self, threshold: f64) -> impl Iterator<Item = (&T, f64)> + '_ {
        self.iter().filter(move |(_, score)| *score > threshold)
    }

    /// Active items with a score strictly less than `threshold`.
    pub fn iter_below_threshold(&self, threshold: f64) -> impl Iterator<Item = (&T, f64)> + '_ {
        self.iter().filter(move |(_, score)| *score < threshold)
    }

    pub fn above_threshold(&self, threshold: f64) -> Vector<T> {
        self.iter_above_threshold(threshold)
            .map(|(item, _)| item.clone())
            .collect()
    }

    pub fn below_threshold(&self, threshold: f64) -> Vector<T> {
        self.iter_below_threshold(threshold)
            .map(|(item, _)| item.clone())
            .collect()
    }

    pub fn for_each_above_threshold<F>(&self, threshold: f64, mut consumer: F)
    where
        F: FnMut(&T),
    {
        self.iter_above_threshold(threshold)
            .for_each(|(item, _)| consumer(item));
    }

    pub fn for_each_above_threshold_scored<F>(&self, threshold: f64, mut consumer: F)
    where
        F: FnMut(&T, f64),
    {
        self.iter_above_threshold(threshold)
            .for_each(|(item, score)| consumer(item, score));
    }

    pub fn for_each_below_threshold<F>(&self, threshold: f64, mut consumer: F)
    where
        F: FnMut(&T),
    {
        self.iter_below_threshold(threshold)
            .for_each(|(item, _)| consumer(item));
    }

    pub fn for_each_below_threshold_scored<F>(&self, threshold: f64, mut consumer: F)
    where
        F: FnMut(&T, f64),
    {
        self.iter_below_threshold(threshold)
            .for_each(|(item, score)| consumer(item, score));
    }

    // =========================================================================
    // Ordered view
    // =========================================================================

    /// Active items sorted by descending score.
    ///
    /// The result is a snapshot. Later mutations rebuild the view instead of
    /// changing a vector that was already returned.
    pub fn ordered(&mut self) -> Vector<T> {
        self.ordered_view().clone()
    }

    fn ordered_view(&mut self) -> &Vector<T> {
        let nan_placement = self.config.ordering.nan_placement;
        let scores = &self.scores;
        self.ordered
            .get_or_rebuild(|| build_ordered(scores, nan_placement))
    }
}
