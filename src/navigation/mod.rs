//! Navigation subsystem.
//!
//! # Data Flow
//! ```text
//! Target (path | Location | Paths | delta) + NavigateOptions
//!     → nav.rs (silent? delta? back fallback?)
//!     → resolve query (keep_search, search) and fragment (hash)
//!     → Dispatch
//!         RenderDispatch → Navigator (host router, re-renders)
//!         SilentDispatch → History (pushState / replaceState only)
//! ```

pub mod history;
pub mod location;
pub mod nav;
pub mod options;
pub mod search;
pub mod target;

pub use history::{
    History, HistoryEntry, MemoryHistory, MemoryRouter, NavigationError, NavigationType, Navigator,
};
pub use location::Location;
pub use nav::{
    resolve_location, resolve_search, Dispatch, Nav, RenderDispatch, SilentDispatch, SilentNav,
    DEFAULT_FALLBACK_PATH,
};
pub use options::{KeepSearch, NavigateOptions, NavigateRequest};
pub use search::SearchParams;
pub use target::Target;
