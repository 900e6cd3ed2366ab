//! Path tables derived from a route tree.
//!
//! A `Paths` value mirrors the shape of the route tree below it. Static
//! children are derived eagerly; parameterized children are exposed as
//! `PathGetter`s that build their subtree when called.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use thiserror::Error;

use crate::routing::resolve::resolve_paths;
use crate::routing::route::{placeholder_count, GetPath};
use crate::routing::schema::RouteSchema;

/// Errors from keyed path lookups.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    /// No child with this key.
    #[error("Unknown route key: {0}")]
    UnknownKey(String),

    /// The child needs parameters; use `with` or `href`.
    #[error("Route {0} is parameterized")]
    NeedsParams(String),

    /// `with` was used on a static child.
    #[error("Route {0} is not parameterized")]
    NotParameterized(String),

    /// Not enough parameters left for a parameterized route.
    #[error("Route {key} expects {expected} parameter(s), {got} left")]
    MissingParams {
        key: String,
        expected: usize,
        got: usize,
    },

    /// Parameters left over after walking every key.
    #[error("{0} unused parameter(s)")]
    UnusedParams(usize),
}

/// One child slot of a path table.
#[derive(Clone)]
pub enum PathEntry {
    /// Static child, already resolved.
    Table(Paths),
    /// Parameterized child.
    Getter(PathGetter),
}

impl PathEntry {
    /// Resolve to a table, calling the getter with `params` when needed.
    pub fn resolve(&self, params: &[&str]) -> Paths {
        match self {
            PathEntry::Table(paths) => paths.clone(),
            PathEntry::Getter(getter) => getter.call(params),
        }
    }

    pub fn as_table(&self) -> Option<&Paths> {
        match self {
            PathEntry::Table(paths) => Some(paths),
            PathEntry::Getter(_) => None,
        }
    }

    pub fn as_getter(&self) -> Option<&PathGetter> {
        match self {
            PathEntry::Table(_) => None,
            PathEntry::Getter(getter) => Some(getter),
        }
    }
}

impl fmt::Debug for PathEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathEntry::Table(paths) => fmt::Debug::fmt(paths, f),
            PathEntry::Getter(getter) => fmt::Debug::fmt(getter, f),
        }
    }
}

/// Builds the path table of a parameterized route.
#[derive(Clone)]
pub struct PathGetter {
    prefix: String,
    pattern: String,
    get_path: GetPath,
    children: BTreeMap<String, Arc<RouteSchema>>,
}

impl PathGetter {
    pub(crate) fn new(
        prefix: String,
        pattern: String,
        get_path: GetPath,
        children: BTreeMap<String, Arc<RouteSchema>>,
    ) -> Self {
        Self {
            prefix,
            pattern,
            get_path,
            children,
        }
    }

    /// Derive the table for one set of parameters.
    ///
    /// Each call is independent; nothing is shared between the results.
    pub fn call(&self, params: &[&str]) -> Paths {
        let segment = (self.get_path)(params);
        let path = resolve_paths(&self.prefix, &segment);
        tracing::trace!(pattern = %self.pattern, path = %path, "Derived parameterized path");
        Paths::derive(path, &self.children)
    }

    /// The unfilled path as the host router sees it (e.g. `/users/:id`).
    pub fn template(&self) -> String {
        resolve_paths(&self.prefix, &self.pattern)
    }

    /// Number of `:name` placeholders in the pattern.
    pub fn arity(&self) -> usize {
        placeholder_count(&self.pattern)
    }
}

impl fmt::Debug for PathGetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PathGetter")
            .field("template", &self.template())
            .field("children", &self.children.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Resolved absolute path of a route plus its children's entries.
#[derive(Clone)]
pub struct Paths {
    path: String,
    entries: BTreeMap<String, PathEntry>,
}

impl Paths {
    pub(crate) fn derive(path: String, children: &BTreeMap<String, Arc<RouteSchema>>) -> Self {
        let entries = children
            .iter()
            .map(|(key, child)| (key.clone(), child.path_entry_from(&path)))
            .collect();
        Self { path, entries }
    }

    /// The resolved absolute path.
    pub fn as_str(&self) -> &str {
        &self.path
    }

    pub fn get(&self, key: &str) -> Option<&PathEntry> {
        self.entries.get(key)
    }

    /// Static child table.
    pub fn child(&self, key: &str) -> Result<&Paths, PathError> {
        match self.get(key) {
            Some(PathEntry::Table(paths)) => Ok(paths),
            Some(PathEntry::Getter(_)) => Err(PathError::NeedsParams(key.to_string())),
            None => Err(PathError::UnknownKey(key.to_string())),
        }
    }

    /// Parameterized child table.
    pub fn with(&self, key: &str, params: &[&str]) -> Result<Paths, PathError> {
        match self.get(key) {
            Some(PathEntry::Getter(getter)) => Ok(getter.call(params)),
            Some(PathEntry::Table(_)) => Err(PathError::NotParameterized(key.to_string())),
            None => Err(PathError::UnknownKey(key.to_string())),
        }
    }

    /// Follow a chain of static keys.
    pub fn at(&self, keys: &[&str]) -> Result<&Paths, PathError> {
        keys.iter().try_fold(self, |paths, key| paths.child(key))
    }

    /// Follow a chain of keys, feeding each parameterized route as many
    /// parameters as its pattern has placeholders.
    pub fn href(&self, keys: &[&str], params: &[&str]) -> Result<Paths, PathError> {
        let mut current = self.clone();
        let mut rest = params;
        for key in keys {
            let next = match current.get(key) {
                Some(PathEntry::Table(paths)) => paths.clone(),
                Some(PathEntry::Getter(getter)) => {
                    let expected = getter.arity();
                    if rest.len() < expected {
                        return Err(PathError::MissingParams {
                            key: key.to_string(),
                            expected,
                            got: rest.len(),
                        });
                    }
                    let (taken, left) = rest.split_at(expected);
                    rest = left;
                    getter.call(taken)
                }
                None => return Err(PathError::UnknownKey(key.to_string())),
            };
            current = next;
        }
        if !rest.is_empty() {
            return Err(PathError::UnusedParams(rest.len()));
        }
        Ok(current)
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &PathEntry)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for Paths {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)
    }
}

impl fmt::Debug for Paths {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Paths")
            .field("path", &self.path)
            .field("entries", &self.entries)
            .finish()
    }
}

impl From<&Paths> for String {
    fn from(paths: &Paths) -> Self {
        paths.path.clone()
    }
}

impl From<Paths> for String {
    fn from(paths: Paths) -> Self {
        paths.path
    }
}

impl AsRef<str> for Paths {
    fn as_ref(&self) -> &str {
        &self.path
    }
}
