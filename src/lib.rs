//! Typed route schemas and navigation helpers for client-side routers.
//!
//! - `routing`: route tree, path tables, render trees for the host router
//! - `navigation`: navigate with query merging, back fallback, silent mode
//! - `config`: TOML route schema files
//! - `observability`: logging setup

pub mod config;
pub mod navigation;
pub mod observability;
pub mod routing;

pub use config::schema::RouterConfig;
pub use navigation::{Location, Nav, NavigateOptions, SearchParams, SilentNav, Target};
pub use routing::{resolve_paths, IgnoreChildren, PathEntry, Paths, RouteConfig, RouteObject, RouteSchema};
