//! Error types for the fallible edges of the crate.
//!
//! Filter operations themselves never fail. Errors only come from loading
//! configuration and from rendering summaries.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for scorefilter operations
#[derive(Debug, Error)]
pub enum FilterError {
    /// Configuration file could not be read
    #[error("Failed to read config file {}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration contents are not valid TOML for `FilterConfig`
    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl FilterError {
    /// Create a config read error with path context
    pub fn config_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ConfigRead {
            path: path.into(),
            source,
        }
    }

    /// True when the error only means the config file does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::ConfigRead { source, .. } if source.kind() == std::io::ErrorKind::NotFound
        )
    }
}

/// Result type alias using FilterError
pub type Result<T> = std::result::Result<T, FilterError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn config_read_message_includes_path() {
        let err = FilterError::config_read(
            "/tmp/scorefilter.toml",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(
            err.to_string(),
            "Failed to read config file /tmp/scorefilter.toml"
        );
        assert!(!err.is_not_found());
    }

    #[test]
    fn not_found_is_detected() {
        let err = FilterError::config_read(
            "missing.toml",
            io::Error::new(io::ErrorKind::NotFound, "gone"),
        );
        assert!(err.is_not_found());
    }

    #[test]
    fn parse_errors_convert() {
        let toml_err = toml::from_str::<toml::Table>("not = [valid").unwrap_err();
        let err: FilterError = toml_err.into();
        assert!(err.to_string().starts_with("Failed to parse config:"));
    }
}
