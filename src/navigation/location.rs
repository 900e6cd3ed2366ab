//! Structured locations.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::navigation::search::SearchParams;

/// A location split into pathname, query and fragment.
///
/// `search` keeps its leading `?` and `hash` its leading `#` when non-empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub pathname: String,
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub hash: String,
}

impl Location {
    pub fn new(pathname: impl Into<String>) -> Self {
        Self {
            pathname: pathname.into(),
            ..Self::default()
        }
    }

    /// Attach serialized query parameters. An empty set clears the query.
    pub fn with_search(mut self, search: impl Into<SearchParams>) -> Self {
        let query = search.into().to_string();
        self.search = if query.is_empty() {
            String::new()
        } else {
            format!("?{}", query)
        };
        self
    }

    pub fn with_hash(mut self, hash: impl Into<String>) -> Self {
        self.hash = hash.into();
        self
    }

    /// Split a path string. The fragment is cut first, then the query.
    pub fn parse(path: &str) -> Self {
        let (rest, hash) = match path.find('#') {
            Some(i) => (&path[..i], &path[i..]),
            None => (path, ""),
        };
        let (pathname, search) = match rest.find('?') {
            Some(i) => (&rest[..i], &rest[i..]),
            None => (rest, ""),
        };
        Self {
            pathname: pathname.to_string(),
            search: search.to_string(),
            hash: hash.to_string(),
        }
    }

    /// Join back into a path string.
    ///
    /// An empty pathname becomes `/`. A bare `?` or `#` is dropped and a
    /// missing leading `?` or `#` is added.
    pub fn to_path(&self) -> String {
        let mut path = if self.pathname.is_empty() {
            "/".to_string()
        } else {
            self.pathname.clone()
        };
        if !self.search.is_empty() && self.search != "?" {
            if !self.search.starts_with('?') {
                path.push('?');
            }
            path.push_str(&self.search);
        }
        if !self.hash.is_empty() && self.hash != "#" {
            if !self.hash.starts_with('#') {
                path.push('#');
            }
            path.push_str(&self.hash);
        }
        path
    }

    /// The parsed query.
    pub fn search_params(&self) -> SearchParams {
        SearchParams::parse(&self.search)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_path())
    }
}

impl From<&str> for Location {
    fn from(path: &str) -> Self {
        Location::parse(path)
    }
}
