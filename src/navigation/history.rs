//! Host navigation seams.
//!
//! # Responsibilities
//! - `History`: the browser history API (`pushState`, `replaceState`, `go`)
//! - `Navigator`: the host router's render-causing navigate call
//! - In-memory implementations of both for native hosts and tests
//!
//! # Design Decisions
//! - Methods take `&self`; hosts mutate shared navigation state in place
//! - In-memory hosts share state through `Rc<RefCell<_>>` (single UI thread)

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use serde_json::Value;
use thiserror::Error;

use crate::navigation::location::Location;
use crate::navigation::options::NavigateRequest;

/// Errors raised by host navigation primitives.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    /// The host rejected a history operation.
    #[error("History operation failed: {0}")]
    History(String),

    /// A history delta points outside the stack.
    #[error("History delta {delta} out of range (index {index}, {len} entries)")]
    OutOfRange { delta: i32, index: usize, len: usize },
}

/// Kind of the most recent navigation, as reported by the host router.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavigationType {
    /// A new entry was pushed.
    Push,
    /// Moved through existing entries, or the initial load.
    #[default]
    Pop,
    /// The current entry was replaced.
    Replace,
}

impl fmt::Display for NavigationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavigationType::Push => write!(f, "PUSH"),
            NavigationType::Pop => write!(f, "POP"),
            NavigationType::Replace => write!(f, "REPLACE"),
        }
    }
}

/// Browser history API.
pub trait History {
    fn push_state(&self, state: Option<&Value>, url: &str) -> Result<(), NavigationError>;
    fn replace_state(&self, state: Option<&Value>, url: &str) -> Result<(), NavigationError>;
    fn go(&self, delta: i32) -> Result<(), NavigationError>;
    /// The current location.
    fn location(&self) -> Location;
}

/// The host router's navigation primitive. Every call re-renders routes.
pub trait Navigator {
    fn navigate(&self, to: &str, request: &NavigateRequest) -> Result<(), NavigationError>;
    fn go(&self, delta: i32) -> Result<(), NavigationError>;
    fn navigation_type(&self) -> NavigationType;
}

/// One entry of the in-memory history stack.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub url: String,
    pub state: Option<Value>,
}

#[derive(Debug)]
struct Stack {
    entries: Vec<HistoryEntry>,
    index: usize,
}

/// In-memory history stack.
///
/// Clones share the same stack.
#[derive(Debug, Clone)]
pub struct MemoryHistory {
    stack: Rc<RefCell<Stack>>,
}

impl MemoryHistory {
    /// A stack holding a single entry.
    pub fn new(initial: &str) -> Self {
        Self {
            stack: Rc::new(RefCell::new(Stack {
                entries: vec![HistoryEntry {
                    url: initial.to_string(),
                    state: None,
                }],
                index: 0,
            })),
        }
    }

    pub fn entries(&self) -> Vec<HistoryEntry> {
        self.stack.borrow().entries.clone()
    }

    pub fn index(&self) -> usize {
        self.stack.borrow().index
    }

    pub fn len(&self) -> usize {
        self.stack.borrow().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.borrow().entries.is_empty()
    }

    pub fn current(&self) -> HistoryEntry {
        let stack = self.stack.borrow();
        stack.entries[stack.index].clone()
    }
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new("/")
    }
}

impl History for MemoryHistory {
    fn push_state(&self, state: Option<&Value>, url: &str) -> Result<(), NavigationError> {
        let mut stack = self.stack.borrow_mut();
        let keep = stack.index + 1;
        stack.entries.truncate(keep);
        stack.entries.push(HistoryEntry {
            url: url.to_string(),
            state: state.cloned(),
        });
        stack.index = stack.entries.len() - 1;
        Ok(())
    }

    fn replace_state(&self, state: Option<&Value>, url: &str) -> Result<(), NavigationError> {
        let mut stack = self.stack.borrow_mut();
        let index = stack.index;
        stack.entries[index] = HistoryEntry {
            url: url.to_string(),
            state: state.cloned(),
        };
        Ok(())
    }

    fn go(&self, delta: i32) -> Result<(), NavigationError> {
        let mut stack = self.stack.borrow_mut();
        let target = stack.index as i64 + i64::from(delta);
        if target < 0 || target >= stack.entries.len() as i64 {
            return Err(NavigationError::OutOfRange {
                delta,
                index: stack.index,
                len: stack.entries.len(),
            });
        }
        stack.index = target as usize;
        Ok(())
    }

    fn location(&self) -> Location {
        Location::parse(&self.current().url)
    }
}

#[derive(Debug, Default)]
struct RouterState {
    navigation_type: NavigationType,
    renders: usize,
}

/// In-memory host router over a `MemoryHistory`.
///
/// Tracks the last navigation type and counts route renders. Clones share
/// the same state.
#[derive(Debug, Clone)]
pub struct MemoryRouter {
    history: MemoryHistory,
    state: Rc<RefCell<RouterState>>,
}

impl MemoryRouter {
    /// Starts in `Pop`, as after an initial page load.
    pub fn new(history: MemoryHistory) -> Self {
        Self {
            history,
            state: Rc::new(RefCell::new(RouterState::default())),
        }
    }

    pub fn history(&self) -> &MemoryHistory {
        &self.history
    }

    /// Number of route renders triggered so far.
    pub fn renders(&self) -> usize {
        self.state.borrow().renders
    }

    fn record(&self, navigation_type: NavigationType) {
        let mut state = self.state.borrow_mut();
        state.navigation_type = navigation_type;
        state.renders += 1;
    }
}

impl Navigator for MemoryRouter {
    fn navigate(&self, to: &str, request: &NavigateRequest) -> Result<(), NavigationError> {
        if request.replace {
            self.history.replace_state(request.state.as_ref(), to)?;
            self.record(NavigationType::Replace);
        } else {
            self.history.push_state(request.state.as_ref(), to)?;
            self.record(NavigationType::Push);
        }
        Ok(())
    }

    fn go(&self, delta: i32) -> Result<(), NavigationError> {
        self.history.go(delta)?;
        self.record(NavigationType::Pop);
        Ok(())
    }

    fn navigation_type(&self) -> NavigationType {
        self.state.borrow().navigation_type
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_push_truncates_forward_entries() {
        let history = MemoryHistory::new("/");
        history.push_state(None, "/a").unwrap();
        history.push_state(None, "/b").unwrap();
        history.go(-2).unwrap();
        history.push_state(Some(&json!({"from": "root"})), "/c").unwrap();

        let urls: Vec<String> = history.entries().into_iter().map(|e| e.url).collect();
        assert_eq!(urls, vec!["/", "/c"]);
        assert_eq!(history.index(), 1);
        assert_eq!(history.current().state, Some(json!({"from": "root"})));
    }

    #[test]
    fn test_replace_keeps_length() {
        let history = MemoryHistory::default();
        history.replace_state(None, "/home?x=1").unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history.location().pathname, "/home");
        assert_eq!(history.location().search, "?x=1");
    }

    #[test]
    fn test_go_out_of_range() {
        let history = MemoryHistory::new("/");
        let err = history.go(-1).unwrap_err();
        assert_eq!(
            err,
            NavigationError::OutOfRange {
                delta: -1,
                index: 0,
                len: 1
            }
        );
        assert!(history.go(0).is_ok());
    }

    #[test]
    fn test_router_tracks_navigation_type() {
        let router = MemoryRouter::new(MemoryHistory::new("/"));
        assert_eq!(router.navigation_type(), NavigationType::Pop);

        router.navigate("/a", &NavigateRequest::default()).unwrap();
        assert_eq!(router.navigation_type(), NavigationType::Push);

        router.navigate("/b", &NavigateRequest::replace()).unwrap();
        assert_eq!(router.navigation_type(), NavigationType::Replace);
        assert_eq!(router.history().len(), 2);

        router.go(-1).unwrap();
        assert_eq!(router.navigation_type(), NavigationType::Pop);
        assert_eq!(router.renders(), 3);
    }

    #[test]
    fn test_navigation_type_display() {
        assert_eq!(NavigationType::Push.to_string(), "PUSH");
        assert_eq!(NavigationType::Replace.to_string(), "REPLACE");
    }
}
