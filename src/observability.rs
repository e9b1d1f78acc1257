//! Logging setup for hosts and tests.
//!
//! The library only emits `tracing` events. Nothing is printed unless a
//! subscriber is installed, either by the host application or with
//! [`init_tracing`].
//!
//! ```ignore
//! use scorefilter::observability::init_tracing;
//!
//! fn main() {
//!     init_tracing();
//!     // RUST_LOG=scorefilter=trace shows every mutation
//! }
//! ```

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Install a fmt subscriber filtered by `RUST_LOG`.
///
/// Calling this more than once, or after another subscriber was installed,
/// leaves the existing subscriber in place.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_init_is_harmless() {
        init_tracing();
        init_tracing();
        tracing::debug!("still logging");
    }
}
