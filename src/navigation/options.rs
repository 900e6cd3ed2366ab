//! Navigation options.

use serde_json::Value;

use crate::navigation::search::SearchParams;

/// Which of the current query parameters survive a navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeepSearch {
    /// Keep every current parameter.
    All,
    /// Keep only these keys (first value each, present and non-empty only).
    Keys(Vec<String>),
}

/// Options accepted by `Nav::navigate` and `SilentNav::navigate`.
#[derive(Debug, Clone, Default)]
pub struct NavigateOptions {
    /// Replace the current history entry instead of pushing.
    pub replace: bool,
    /// History state stored with the entry.
    pub state: Option<Value>,
    /// Overrides the target's fragment when non-empty.
    pub hash: Option<String>,
    /// Parameters merged over the kept ones.
    pub search: Option<SearchParams>,
    pub keep_search: Option<KeepSearch>,
    /// Update history without a route re-render.
    pub silent: bool,
    /// Where `-1` goes when there is no pushed entry to return to.
    pub fallback_path: Option<String>,
}

impl NavigateOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn replace(mut self, replace: bool) -> Self {
        self.replace = replace;
        self
    }

    pub fn state(mut self, state: Value) -> Self {
        self.state = Some(state);
        self
    }

    pub fn hash(mut self, hash: impl Into<String>) -> Self {
        self.hash = Some(hash.into());
        self
    }

    pub fn search(mut self, search: impl Into<SearchParams>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn keep_search(mut self) -> Self {
        self.keep_search = Some(KeepSearch::All);
        self
    }

    pub fn keep_search_keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keep_search = Some(KeepSearch::Keys(keys.into_iter().map(Into::into).collect()));
        self
    }

    pub fn silent(mut self, silent: bool) -> Self {
        self.silent = silent;
        self
    }

    pub fn fallback_path(mut self, path: impl Into<String>) -> Self {
        self.fallback_path = Some(path.into());
        self
    }

    /// The options forwarded to the host once query and hash are folded into
    /// the target.
    pub fn request(&self) -> NavigateRequest {
        NavigateRequest {
            replace: self.replace,
            state: self.state.clone(),
        }
    }
}

/// Options the host navigation primitive receives.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NavigateRequest {
    pub replace: bool,
    pub state: Option<Value>,
}

impl NavigateRequest {
    pub fn replace() -> Self {
        Self {
            replace: true,
            state: None,
        }
    }
}
