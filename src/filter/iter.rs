//! Lazy iterators over a filter's partitions.
//!
//! Each call to [`Filter::iter`](crate::Filter::iter) or
//! [`Filter::iter_removed`](crate::Filter::iter_removed) starts a fresh pass
//! over the score map in insertion order.

use std::iter::FusedIterator;

use crate::score::ScoreState;

/// Iterator over active items and their scores.
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    pub(crate) inner: indexmap::map::Iter<'a, T, ScoreState>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = (&'a T, f64);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .find_map(|(item, state)| state.score().map(|score| (item, score)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.inner.size_hint().1)
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

/// Iterator over removed items.
#[derive(Debug, Clone)]
pub struct Removed<'a, T> {
    pub(crate) inner: indexmap::map::Iter<'a, T, ScoreState>,
}

impl<'a, T> Iterator for Removed<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .find_map(|(item, state)| state.is_removed().then_some(item))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.inner.size_hint().1)
    }
}

impl<T> FusedIterator for Removed<'_, T> {}
