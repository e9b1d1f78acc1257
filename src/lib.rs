//! Score, soft-remove, and query a fixed collection of items.
//!
//! A [`Filter`] attaches a numeric score to every item through caller
//! supplied scoring functions, tombstones items without dropping them, and
//! exposes derived views: best and worst item, items above or below a
//! threshold, the full descending order, and the remaining and removed
//! partitions.
//!
//! ```rust
//! use scorefilter::Filter;
//!
//! let mut filter = Filter::new(1..=10);
//! filter.score_by(|&value| if value > 5 { 1.0 } else { 0.0 });
//!
//! let mut above = filter.above_threshold(0.0).into_iter().collect::<Vec<_>>();
//! above.sort();
//! assert_eq!(above, vec![6, 7, 8, 9, 10]);
//! ```

pub mod config;
pub mod errors;
pub mod filter;
pub mod observability;
pub mod score;

pub use crate::config::{FilterConfig, NanPlacement, OrderingConfig};
pub use crate::errors::{FilterError, Result};
pub use crate::filter::{Filter, FilterSummary};
pub use crate::score::{ScoreState, INITIAL_SCORE};
