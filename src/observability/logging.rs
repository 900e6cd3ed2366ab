//! Structured logging.
//!
//! # Responsibilities
//! - Initialize logging subsystem
//! - Configure log level from config and environment
//!
//! # Design Decisions
//! - Uses tracing crate for structured logging
//! - `RUST_LOG` wins over the config file's `observability.log_level`
//! - The filter sits behind a reload layer: the subscriber is installed
//!   before the config file is read, so loading itself is logged, and the
//!   configured level is applied once the file is known

use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{layer::SubscriberExt, reload, util::SubscriberInitExt, EnvFilter, Registry};

use crate::config::ObservabilityConfig;

/// Handle for swapping the active filter after startup.
pub type LogHandle = reload::Handle<EnvFilter, Registry>;

/// Install the global subscriber. Fails if one is already installed.
pub fn init_logging(config: &ObservabilityConfig) -> Result<LogHandle, TryInitError> {
    let (filter, handle) = reload::Layer::new(filter(config));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()?;
    Ok(handle)
}

/// Switch to the level of a config loaded after `init_logging`.
pub fn apply_log_level(handle: &LogHandle, config: &ObservabilityConfig) -> Result<(), reload::Error> {
    handle.reload(filter(config))
}

fn filter(config: &ObservabilityConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}
