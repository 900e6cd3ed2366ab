//! Route configuration nodes.
//!
//! A `RouteConfig` describes one navigable location and its sub-locations.
//! Whether the node's own segment is static or built from parameters is
//! carried by `RouteKind`, never inferred from which fields are set.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// Maps route parameters to the node's own path segment.
pub type GetPath = Arc<dyn Fn(&[&str]) -> String + Send + Sync>;

/// How a node contributes its segment to derived paths.
#[derive(Clone)]
pub enum RouteKind {
    /// Fixed segment, resolved as soon as paths are derived.
    Static {
        /// Segment, possibly empty (layout-only node) or absolute.
        path: String,
    },
    /// Segment computed from caller-provided parameters.
    Param {
        /// Literal pattern handed to the host router (e.g. `:id`).
        pattern: String,
        /// Builds the concrete segment.
        get_path: GetPath,
    },
}

impl RouteKind {
    /// The segment the host router matches on.
    pub fn router_path(&self) -> Option<&str> {
        match self {
            RouteKind::Static { path } if path.is_empty() => None,
            RouteKind::Static { path } => Some(path),
            RouteKind::Param { pattern, .. } if pattern.is_empty() => None,
            RouteKind::Param { pattern, .. } => Some(pattern),
        }
    }

    pub fn is_param(&self) -> bool {
        matches!(self, RouteKind::Param { .. })
    }
}

impl fmt::Debug for RouteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteKind::Static { path } => f.debug_struct("Static").field("path", path).finish(),
            RouteKind::Param { pattern, .. } => {
                f.debug_struct("Param").field("pattern", pattern).finish_non_exhaustive()
            }
        }
    }
}

impl Default for RouteKind {
    fn default() -> Self {
        RouteKind::Static {
            path: String::new(),
        }
    }
}

/// Children excluded from the render tree.
///
/// Ignored children still appear in the path table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IgnoreChildren {
    /// Suppress every child.
    All,
    /// Suppress only the named children.
    Keys(Vec<String>),
}

impl IgnoreChildren {
    pub fn ignores(&self, key: &str) -> bool {
        match self {
            IgnoreChildren::All => true,
            IgnoreChildren::Keys(keys) => keys.iter().any(|k| k == key),
        }
    }
}

/// Static description of one route.
#[derive(Debug, Clone, Default)]
pub struct RouteConfig {
    pub kind: RouteKind,
    /// Component rendered for this route.
    pub element: Option<String>,
    /// Component rendered as the default child (`<Route index />`).
    pub index: Option<String>,
    pub children: BTreeMap<String, RouteConfig>,
    pub ignore_children: Option<IgnoreChildren>,
    /// Host route id.
    pub id: Option<String>,
    pub case_sensitive: Option<bool>,
    /// Arbitrary data the host attaches to matches.
    pub handle: Option<serde_json::Value>,
}

impl RouteConfig {
    /// A node with a fixed segment.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            kind: RouteKind::Static { path: path.into() },
            ..Self::default()
        }
    }

    /// A node whose segment is the pattern with its `:name` placeholders
    /// filled positionally from the parameters.
    pub fn param(pattern: impl Into<String>) -> Self {
        let pattern = pattern.into();
        let template = pattern.clone();
        Self::param_with(pattern, move |params| fill_placeholders(&template, params))
    }

    /// A node whose segment is built by `get_path`.
    pub fn param_with<F>(pattern: impl Into<String>, get_path: F) -> Self
    where
        F: Fn(&[&str]) -> String + Send + Sync + 'static,
    {
        Self {
            kind: RouteKind::Param {
                pattern: pattern.into(),
                get_path: Arc::new(get_path),
            },
            ..Self::default()
        }
    }

    pub fn element(mut self, element: impl Into<String>) -> Self {
        self.element = Some(element.into());
        self
    }

    pub fn index(mut self, element: impl Into<String>) -> Self {
        self.index = Some(element.into());
        self
    }

    /// Adds a child under `key`, replacing any previous child with that key.
    pub fn child(mut self, key: impl Into<String>, child: RouteConfig) -> Self {
        self.children.insert(key.into(), child);
        self
    }

    pub fn ignore_children(mut self, ignore: IgnoreChildren) -> Self {
        self.ignore_children = Some(ignore);
        self
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = Some(case_sensitive);
        self
    }

    pub fn handle(mut self, handle: serde_json::Value) -> Self {
        self.handle = Some(handle);
        self
    }
}

/// Identity helper that pins a value to `RouteConfig` at the call site.
pub fn create_route(route: RouteConfig) -> RouteConfig {
    route
}

/// Identity helper for a keyed group of routes.
pub fn create_routes<I, K>(routes: I) -> BTreeMap<String, RouteConfig>
where
    I: IntoIterator<Item = (K, RouteConfig)>,
    K: Into<String>,
{
    routes.into_iter().map(|(k, v)| (k.into(), v)).collect()
}

/// Replace each `:name` placeholder segment with the next parameter.
///
/// Placeholders without a matching parameter are left as written. Extra
/// parameters are ignored.
pub(crate) fn fill_placeholders(pattern: &str, params: &[&str]) -> String {
    let mut remaining = params.iter();
    pattern
        .split('/')
        .map(|segment| match segment.strip_prefix(':') {
            Some(_) => match remaining.next() {
                Some(value) => (*value).to_string(),
                None => segment.to_string(),
            },
            None => segment.to_string(),
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Number of `:name` placeholders in a pattern.
pub(crate) fn placeholder_count(pattern: &str) -> usize {
    pattern.split('/').filter(|s| s.starts_with(':')).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_placeholders() {
        assert_eq!(fill_placeholders(":id", &["42"]), "42");
        assert_eq!(fill_placeholders(":org/repos/:repo", &["rust", "cargo"]), "rust/repos/cargo");
        assert_eq!(fill_placeholders(":org/:repo", &["rust"]), "rust/:repo");
        assert_eq!(fill_placeholders("static", &["ignored"]), "static");
    }

    #[test]
    fn test_param_uses_pattern_template() {
        let route = RouteConfig::param(":id");
        match &route.kind {
            RouteKind::Param { pattern, get_path } => {
                assert_eq!(pattern, ":id");
                assert_eq!(get_path(&["7"]), "7");
            }
            other => panic!("expected param kind, got {:?}", other),
        }
    }

    #[test]
    fn test_router_path() {
        assert_eq!(RouteConfig::new("").kind.router_path(), None);
        assert_eq!(RouteConfig::new("users").kind.router_path(), Some("users"));
        assert_eq!(RouteConfig::param(":id").kind.router_path(), Some(":id"));
    }

    #[test]
    fn test_ignore_children() {
        assert!(IgnoreChildren::All.ignores("anything"));
        let keys = IgnoreChildren::Keys(vec!["user".into()]);
        assert!(keys.ignores("user"));
        assert!(!keys.ignores("report"));
    }

    #[test]
    fn test_create_routes_collects_keys() {
        let routes = create_routes([("a", RouteConfig::new("a")), ("b", RouteConfig::new("b"))]);
        assert_eq!(routes.keys().collect::<Vec<_>>(), ["a", "b"]);
        let route = create_route(RouteConfig::new("/").element("Layout"));
        assert_eq!(route.element.as_deref(), Some("Layout"));
    }
}
