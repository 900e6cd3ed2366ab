//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! routing, navigation, config
//!     → tracing events (trace: path derivation, debug: dispatch,
//!       warn: back fallback / invalid config, info: config load)
//!     → logging.rs subscriber (stderr)
//! ```

pub mod logging;

pub use logging::{apply_log_level, init_logging, LogHandle};
