//! Shared fixtures for integration tests.

use route_schema::navigation::{MemoryHistory, MemoryRouter, Nav};
use route_schema::routing::{IgnoreChildren, RouteConfig, RouteSchema};

/// A small app:
///
/// ```text
/// /                      Layout (index: Home)
/// /users                 Users
/// /users/:id             User
/// /users/:id/settings    Settings
/// /login                 Login (absolute, nested under users in config)
/// /reports               (no element, only children) ignored in render tree
/// ```
#[allow(dead_code)]
pub fn app_schema() -> RouteSchema {
    RouteSchema::new(
        RouteConfig::new("/")
            .element("Layout")
            .index("Home")
            .child(
                "users",
                RouteConfig::new("users")
                    .element("Users")
                    .child(
                        "user",
                        RouteConfig::param_with(":id", |params| params[0].to_string())
                            .element("User")
                            .child("settings", RouteConfig::new("settings").element("Settings")),
                    )
                    .child("login", RouteConfig::new("/login").element("Login")),
            )
            .child(
                "reports",
                RouteConfig::new("reports").child("daily", RouteConfig::new("daily").element("Daily")),
            )
            .ignore_children(IgnoreChildren::Keys(vec!["reports".into()])),
    )
}

/// Navigator and history sharing one in-memory stack that starts at `url`.
#[allow(dead_code)]
pub fn memory_nav(url: &str) -> (Nav<MemoryRouter, MemoryHistory>, MemoryRouter, MemoryHistory) {
    let history = MemoryHistory::new(url);
    let router = MemoryRouter::new(history.clone());
    let nav = Nav::new(router.clone(), history.clone());
    (nav, router, history)
}
