//! Per-item score state.
//!
//! Every item tracked by a [`Filter`](crate::Filter) carries exactly one
//! [`ScoreState`]. An item is either active with a numeric score or removed.
//! Removal is a tombstone: the item stays in the collection and can be
//! brought back by [`Filter::reset`](crate::Filter::reset).
//!
//! # Examples
//!
//! ```rust
//! use scorefilter::ScoreState;
//!
//! let active = ScoreState::from(2.5);
//! assert_eq!(active.score(), Some(2.5));
//!
//! let removed = ScoreState::from(None::<f64>);
//! assert!(removed.is_removed());
//! assert_eq!(removed.score(), None);
//! ```

use serde::{Deserialize, Serialize};

/// Score assigned to a freshly constructed or reset item.
pub const INITIAL_SCORE: f64 = 0.0;

/// State of a single item inside a filter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreState {
    /// The item takes part in every query with this score.
    Active(f64),
    /// The item is tombstoned and only shows up in the removed view.
    Removed,
}

impl ScoreState {
    /// Score of an active item, `None` for a removed one.
    #[inline]
    pub fn score(self) -> Option<f64> {
        match self {
            Self::Active(score) => Some(score),
            Self::Removed => None,
        }
    }

    #[inline]
    pub fn is_active(self) -> bool {
        matches!(self, Self::Active(_))
    }

    #[inline]
    pub fn is_removed(self) -> bool {
        matches!(self, Self::Removed)
    }
}

impl Default for ScoreState {
    fn default() -> Self {
        Self::Active(INITIAL_SCORE)
    }
}

impl From<f64> for ScoreState {
    fn from(score: f64) -> Self {
        Self::Active(score)
    }
}

/// `None` maps to [`ScoreState::Removed`].
impl From<Option<f64>> for ScoreState {
    fn from(score: Option<f64>) -> Self {
        score.map_or(Self::Removed, Self::Active)
    }
}

impl std::fmt::Display for ScoreState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Active(score) => write!(f, "{:.2}", score),
            Self::Removed => write!(f, "removed"),
        }
    }
}
