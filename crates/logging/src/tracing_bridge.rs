//! crates/logging/src/tracing_bridge.rs
//! Subscriber installation for hosts that embed the ACL engine.
//!
//! The engine only emits `tracing` events; it never installs a subscriber on
//! its own. Hosts that do not already run one can call [`init_tracing`] to get
//! formatted output filtered by a [`LogConfig`].
//!
//! # Usage
//!
//! ```rust,ignore
//! use logging::{LogConfig, init_tracing};
//!
//! let config = LogConfig::from_verbose_level(3);
//! init_tracing(&config)?;
//! ```

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};

use super::config::LogConfig;

/// Builds the filter for `config`, letting `RUST_LOG` take precedence when set.
#[must_use]
pub fn env_filter(config: &LogConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.filter_directives()))
}

/// Installs a global formatted subscriber filtered by `config`.
///
/// Fails if a global subscriber is already installed.
pub fn init_tracing(config: &LogConfig) -> Result<(), TryInitError> {
    let fmt = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_ansi(config.ansi);

    tracing_subscriber::registry()
        .with(env_filter(config))
        .with(fmt)
        .try_init()
}
