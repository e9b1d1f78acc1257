//! Snapshot statistics for a filter.

use serde::{Deserialize, Serialize};

use crate::errors::Result;

/// Cardinalities and score extremes at one point in time.
///
/// Score fields only consider active items and ignore NaN scores. They are
/// `None` when no active item has a numeric score.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterSummary {
    /// Every item known to the filter, active or removed
    pub total_items: usize,

    /// Items with a score
    pub active_items: usize,

    /// Tombstoned items
    pub removed_items: usize,

    /// Highest active score
    pub best_score: Option<f64>,

    /// Lowest active score
    pub worst_score: Option<f64>,

    /// Mean of the active scores
    pub mean_score: Option<f64>,
}

impl FilterSummary {
    pub(crate) fn from_scores(
        total_items: usize,
        scores: impl IntoIterator<Item = f64>,
    ) -> Self {
        let mut active_items = 0;
        let mut numeric = 0usize;
        let mut sum = 0.0;
        let mut best: Option<f64> = None;
        let mut worst: Option<f64> = None;

        for score in scores {
            active_items += 1;
            if score.is_nan() {
                continue;
            }
            numeric += 1;
            sum += score;
            best = Some(best.map_or(score, |b| b.max(score)));
            worst = Some(worst.map_or(score, |w| w.min(score)));
        }

        Self {
            total_items,
            active_items,
            removed_items: total_items - active_items,
            best_score: best,
            worst_score: worst,
            mean_score: (numeric > 0).then(|| sum / numeric as f64),
        }
    }

    /// Percentage of items that have been removed.
    pub fn removal_rate(&self) -> f64 {
        if self.total_items == 0 {
            0.0
        } else {
            (self.removed_items as f64 / self.total_items as f64) * 100.0
        }
    }

    /// Render the summary as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
