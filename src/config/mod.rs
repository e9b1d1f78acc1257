//! Filter configuration.
//!
//! Configuration is optional. Every field has a default, so an empty TOML
//! document yields [`FilterConfig::default`].
//!
//! # Configuration Example
//!
//! ```toml
//! [ordering]
//! nan_placement = "first"
//! ```

mod loader;
mod ordering;

pub use loader::{load_config, load_config_or_default, parse_config};
pub use ordering::{NanPlacement, OrderingConfig};

use serde::{Deserialize, Serialize};

/// Top-level configuration for a [`Filter`](crate::Filter).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterConfig {
    /// How the ordered view is built
    #[serde(default)]
    pub ordering: OrderingConfig,
}

impl FilterConfig {
    /// Shorthand for a config that only sets the NaN placement.
    pub fn with_nan_placement(nan_placement: NanPlacement) -> Self {
        Self {
            ordering: OrderingConfig { nan_placement },
        }
    }
}
