//! The route tree.
//!
//! # Responsibilities
//! - Wrap a `RouteConfig` and all of its descendants
//! - Derive path tables on demand
//! - Produce the render tree for the host router
//!
//! # Design Decisions
//! - Immutable after construction; children are shared through `Arc` so
//!   path getters can outlive the borrow of the schema
//! - Path tables are recomputed on every call, never cached

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::routing::paths::{PathEntry, PathGetter, Paths};
use crate::routing::render::RouteObject;
use crate::routing::resolve::resolve_paths;
use crate::routing::route::{RouteConfig, RouteKind};

/// A node of the route tree.
#[derive(Debug)]
pub struct RouteSchema {
    /// The node's own fields. Children are moved into `children`.
    config: RouteConfig,
    children: BTreeMap<String, Arc<RouteSchema>>,
}

impl RouteSchema {
    /// Build the tree rooted at `config`.
    pub fn new(mut config: RouteConfig) -> Self {
        let children = std::mem::take(&mut config.children)
            .into_iter()
            .map(|(key, child)| (key, Arc::new(RouteSchema::new(child))))
            .collect();
        Self { config, children }
    }

    pub fn config(&self) -> &RouteConfig {
        &self.config
    }

    pub fn children(&self) -> &BTreeMap<String, Arc<RouteSchema>> {
        &self.children
    }

    pub fn child(&self, key: &str) -> Option<&RouteSchema> {
        self.children.get(key).map(Arc::as_ref)
    }

    /// Path table of the root.
    ///
    /// A parameterized root has no concrete path of its own, so its table is
    /// derived from the unfilled pattern. Use `path_entry` to call it with
    /// parameters instead.
    pub fn paths(&self) -> Paths {
        match self.path_entry() {
            PathEntry::Table(paths) => paths,
            PathEntry::Getter(getter) => Paths::derive(getter.template(), &self.children),
        }
    }

    /// Path entry of the root, relative to the empty prefix.
    pub fn path_entry(&self) -> PathEntry {
        self.path_entry_from("")
    }

    /// Path entry of this node below `parent_prefix`.
    pub fn path_entry_from(&self, parent_prefix: &str) -> PathEntry {
        match &self.config.kind {
            RouteKind::Static { path } => {
                let resolved = resolve_paths(parent_prefix, path);
                PathEntry::Table(Paths::derive(resolved, &self.children))
            }
            RouteKind::Param { pattern, get_path } => PathEntry::Getter(PathGetter::new(
                parent_prefix.to_string(),
                pattern.clone(),
                Arc::clone(get_path),
                self.children.clone(),
            )),
        }
    }

    /// Render tree for the host router.
    pub fn render_tree(&self) -> RouteObject {
        let config = &self.config;
        let mut route = RouteObject {
            path: config.kind.router_path().map(str::to_string),
            element: config.element.clone(),
            index: false,
            children: None,
            id: config.id.clone(),
            case_sensitive: config.case_sensitive,
            handle: config.handle.clone(),
        };

        let visible: Vec<&RouteSchema> = self
            .children
            .iter()
            .filter(|(key, _)| {
                !config
                    .ignore_children
                    .as_ref()
                    .is_some_and(|ignore| ignore.ignores(key))
            })
            .map(|(_, child)| child.as_ref())
            .collect();

        if visible.is_empty() && config.index.is_none() {
            return route;
        }

        let mut children: Vec<RouteObject> = visible
            .into_iter()
            .map(RouteSchema::render_tree)
            .filter(RouteObject::has_content)
            .collect();

        if let Some(index) = &config.index {
            children.push(RouteObject::index_entry(index.clone()));
        }

        route.children = Some(children);
        route
    }
}

impl From<RouteConfig> for RouteSchema {
    fn from(config: RouteConfig) -> Self {
        RouteSchema::new(config)
    }
}
