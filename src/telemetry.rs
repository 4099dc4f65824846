//! Tracing subscriber setup for embedding processes.

use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Installs the global tracing subscriber according to `config`.
///
/// Uses `RUST_LOG` semantics for filtering, falling back to the configured
/// log level. Safe to call more than once; only the first call installs a
/// subscriber (tests and embedding hosts may have their own).
pub fn init(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let result = if config.log_format == "json" {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .try_init()
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).try_init()
    };

    if result.is_err() {
        tracing::debug!("tracing subscriber already installed, keeping existing one");
    }
}
