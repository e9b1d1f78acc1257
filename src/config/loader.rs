//! Loading `FilterConfig` from TOML files.

use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use super::FilterConfig;
use crate::errors::{FilterError, Result};

/// Parse configuration from a TOML string
pub fn parse_config(contents: &str) -> Result<FilterConfig> {
    Ok(toml::from_str::<FilterConfig>(contents)?)
}

/// Load configuration from a TOML file.
///
/// A missing file is an error here; use [`load_config_or_default`] when the
/// file is optional.
pub fn load_config(path: &Path) -> Result<FilterConfig> {
    let contents =
        fs::read_to_string(path).map_err(|e| FilterError::config_read(path, e))?;
    let config = parse_config(&contents)?;
    debug!(path = %path.display(), "loaded filter config");
    Ok(config)
}

/// Load configuration, falling back to defaults on any failure.
///
/// A missing file is expected and stays silent. Unreadable or malformed
/// files are logged before the defaults are used.
pub fn load_config_or_default(path: &Path) -> FilterConfig {
    match load_config(path) {
        Ok(config) => config,
        Err(e) if e.is_not_found() => {
            debug!(path = %path.display(), "no filter config found, using defaults");
            FilterConfig::default()
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "invalid filter config, using defaults");
            FilterConfig::default()
        }
    }
}
