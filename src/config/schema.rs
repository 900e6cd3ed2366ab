//! Configuration schema definitions.
//!
//! This module defines the on-disk shape of a route schema file. All types
//! derive Serde traits for deserialization from TOML.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::navigation::DEFAULT_FALLBACK_PATH;
use crate::routing::{IgnoreChildren, RouteConfig, RouteSchema};

/// Root configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct RouterConfig {
    /// Root of the route tree.
    pub routes: RouteDef,

    /// Navigation defaults.
    pub navigation: NavigationConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

impl RouterConfig {
    /// Build the route tree described by `routes`.
    pub fn schema(&self) -> RouteSchema {
        RouteSchema::new(self.routes.clone().into())
    }
}

/// One route as written in a config file.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct RouteDef {
    /// Segment, or pattern when `params` is set.
    pub path: String,

    /// Fill the pattern's `:name` placeholders from navigation parameters.
    pub params: bool,

    pub element: Option<String>,

    /// Element rendered as the default child.
    pub index: Option<String>,

    pub children: BTreeMap<String, RouteDef>,

    /// `true` for all children, or a list of child keys.
    pub ignore_children: Option<IgnoreDef>,

    pub id: Option<String>,

    pub case_sensitive: Option<bool>,

    pub handle: Option<serde_json::Value>,
}

/// `ignore_children` as written: a flag or a key list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum IgnoreDef {
    Flag(bool),
    Keys(Vec<String>),
}

impl From<IgnoreDef> for Option<IgnoreChildren> {
    fn from(def: IgnoreDef) -> Self {
        match def {
            IgnoreDef::Flag(true) => Some(IgnoreChildren::All),
            IgnoreDef::Flag(false) => None,
            IgnoreDef::Keys(keys) => Some(IgnoreChildren::Keys(keys)),
        }
    }
}

impl From<RouteDef> for RouteConfig {
    fn from(def: RouteDef) -> Self {
        let mut route = if def.params {
            RouteConfig::param(def.path)
        } else {
            RouteConfig::new(def.path)
        };
        route.element = def.element;
        route.index = def.index;
        route.children = def
            .children
            .into_iter()
            .map(|(key, child)| (key, child.into()))
            .collect();
        route.ignore_children = def.ignore_children.and_then(Into::into);
        route.id = def.id;
        route.case_sensitive = def.case_sensitive;
        route.handle = def.handle;
        route
    }
}

/// Navigation defaults.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct NavigationConfig {
    /// Destination of a back navigation with nothing pushed to return to.
    pub fallback_path: String,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            fallback_path: DEFAULT_FALLBACK_PATH.to_string(),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log filter (trace, debug, info, warn, error, or a full directive).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
        [navigation]
        fallback_path = "/home"

        [routes]
        path = "/"
        element = "Layout"
        index = "Home"

        [routes.children.users]
        path = "users"
        element = "Users"
        ignore_children = ["archive"]

        [routes.children.users.children.user]
        path = ":id"
        params = true
        element = "User"

        [routes.children.users.children.archive]
        path = "archive"
        element = "Archive"
    "#;

    #[test]
    fn test_parse_sample() {
        let config: RouterConfig = toml::from_str(SAMPLE).unwrap();
        assert_eq!(config.navigation.fallback_path, "/home");
        assert_eq!(config.observability.log_level, "info");

        let users = &config.routes.children["users"];
        assert_eq!(users.ignore_children, Some(IgnoreDef::Keys(vec!["archive".into()])));
        assert!(users.children["user"].params);
    }

    #[test]
    fn test_schema_from_config() {
        let config: RouterConfig = toml::from_str(SAMPLE).unwrap();
        let paths = config.schema().paths();
        let user = paths.child("users").unwrap().with("user", &["42"]).unwrap();
        assert_eq!(user.as_str(), "/users/42");
        assert_eq!(paths.at(&["users", "archive"]).unwrap().as_str(), "/users/archive");
    }

    #[test]
    fn test_ignore_flag() {
        let off: Option<IgnoreChildren> = IgnoreDef::Flag(false).into();
        assert_eq!(off, None);
        let on: Option<IgnoreChildren> = IgnoreDef::Flag(true).into();
        assert_eq!(on, Some(IgnoreChildren::All));
    }

    #[test]
    fn test_unknown_route_field_is_rejected() {
        let result: Result<RouterConfig, _> = toml::from_str("[routes]\npth = \"/\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_children_must_be_tables() {
        let result: Result<RouterConfig, _> = toml::from_str("[routes]\nchildren = \"users\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_defaults() {
        let config = RouterConfig::default();
        assert_eq!(config.navigation.fallback_path, "/");
        assert!(config.routes.children.is_empty());
    }
}
