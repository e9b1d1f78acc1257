//! Descending ordered view and its cache.
//!
//! The ordered view is always rebuilt in full from the score map. It is
//! never patched after a mutation.

use std::cmp::Ordering;

use im::Vector;
use indexmap::IndexMap;
use tracing::{debug, debug_span};

use crate::config::NanPlacement;
use crate::score::ScoreState;

/// Memoized ordered view guarded by an explicit dirty flag.
#[derive(Debug, Clone)]
pub(crate) struct OrderedCache<T: Clone> {
    items: Vector<T>,
    dirty: bool,
}

impl<T: Clone> OrderedCache<T> {
    pub(crate) fn new() -> Self {
        Self {
            items: Vector::new(),
            dirty: true,
        }
    }

    /// Mark the view stale. Must run before the score map changes.
    pub(crate) fn invalidate(&mut self) {
        if !self.dirty {
            self.dirty = true;
            self.items = Vector::new();
        }
    }

    #[cfg(test)]
    pub(crate) fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub(crate) fn get_or_rebuild(&mut self, rebuild: impl FnOnce() -> Vector<T>) -> &Vector<T> {
        if self.dirty {
            self.items = rebuild();
            self.dirty = false;
        }
        &self.items
    }
}

/// Compare two scores for a descending sort.
///
/// Higher scores come first. NaN compares equal to NaN and is placed
/// according to `nan_placement`.
pub(crate) fn compare_descending(a: f64, b: f64, nan_placement: NanPlacement) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => match nan_placement {
            NanPlacement::Last => Ordering::Greater,
            NanPlacement::First => Ordering::Less,
        },
        (false, true) => match nan_placement {
            NanPlacement::Last => Ordering::Less,
            NanPlacement::First => Ordering::Greater,
        },
        (false, false) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
    }
}

/// Build the ordered view of all active items.
///
/// The sort is stable, so equal scores keep map (insertion) order.
pub(crate) fn build_ordered<T: Clone>(
    scores: &IndexMap<T, ScoreState>,
    nan_placement: NanPlacement,
) -> Vector<T> {
    let mut active: Vec<(&T, f64)> = scores
        .iter()
        .filter_map(|(item, state)| state.score().map(|score| (item, score)))
        .collect();

    let _span = debug_span!("rebuild_ordered_view", active = active.len()).entered();

    active.sort_by(|(_, a), (_, b)| compare_descending(*a, *b, nan_placement));

    debug!(active = active.len(), "rebuilt ordered view");
    active.into_iter().map(|(item, _)| item.clone()).collect()
}
