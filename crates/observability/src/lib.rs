//! Tracing and logging setup shared by binaries and tests.

/// Logging configuration read from the environment.
pub mod config;

/// Subscriber installation (filters, formatters).
pub mod tracing;

pub use config::{ConfigError, LogConfig, LogFormat};

/// Initialize process-wide logging from the environment.
///
/// Falls back to the default configuration when the environment holds an
/// invalid value, after reporting it through the installed subscriber. Safe
/// to call multiple times; subsequent calls become no-ops.
pub fn init() {
    match LogConfig::from_env() {
        Ok(config) => tracing::init_with(&config),
        Err(err) => {
            tracing::init_with(&LogConfig::default());
            ::tracing::warn!("invalid logging configuration, using defaults: {err}");
        }
    }
}
