//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! RouteConfig (nested, static)
//!     → schema.rs (wrap every node once)
//!     → paths.rs (path tables, derived on demand)
//!     → render.rs (route objects for the host renderer)
//!
//! Path derivation:
//!     parent prefix + own segment
//!     → resolve.rs (absolute segments override, `/` collapsed)
//! ```
//!
//! # Design Decisions
//! - Static vs parameterized segments are an explicit enum, not field presence
//! - Route tree is immutable after construction
//! - Ignored children only leave the render tree; their paths stay reachable

pub mod paths;
pub mod render;
pub mod resolve;
pub mod route;
pub mod schema;

pub use paths::{PathEntry, PathError, PathGetter, Paths};
pub use render::RouteObject;
pub use resolve::{resolve_all, resolve_paths};
pub use route::{create_route, create_routes, GetPath, IgnoreChildren, RouteConfig, RouteKind};
pub use schema::RouteSchema;
