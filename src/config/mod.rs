//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! route schema file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → RouterConfig (validated, immutable)
//!     → RouterConfig::schema() → RouteSchema
//!
//! On file change:
//!     watcher.rs detects change
//!     → loader.rs loads new config
//!     → validation.rs validates
//!     → unchanged configs dropped, RouteSchema rebuilt
//!     → SchemaUpdate sent to the receiver
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; changes require full reload
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;
pub mod watcher;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::{IgnoreDef, NavigationConfig, ObservabilityConfig, RouteDef, RouterConfig};
pub use validation::{validate_config, ValidationError};
pub use watcher::{ConfigWatcher, SchemaUpdate};
