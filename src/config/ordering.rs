//! Ordered view configuration.

use serde::{Deserialize, Serialize};

/// Ordered view settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderingConfig {
    /// Where NaN-scored items land in the ordered view (default: last)
    #[serde(default)]
    pub nan_placement: NanPlacement,
}

/// Position of NaN-scored items in the descending ordered view.
///
/// NaN has no natural place in a descending sort, so the caller picks one.
/// NaN items compare equal to each other and keep insertion order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NanPlacement {
    /// After every numeric score, so `worst()` may return a NaN item
    #[default]
    Last,
    /// Before every numeric score, so `best()` may return a NaN item
    First,
}
