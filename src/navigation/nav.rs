//! Navigation with query merging and silent mode.
//!
//! # Responsibilities
//! - Turn a `Target` plus options into a final path
//! - Merge kept and explicit query parameters, override the fragment
//! - Fall back to a safe path when going back would leave the app
//! - Dispatch through the host router, or straight to history when silent
//!
//! # Design Decisions
//! - Render-causing and silent dispatch are two `Dispatch` strategies
//! - The strategy is chosen per call by `NavigateOptions::silent`
//! - "Can go back" is inferred from the host's last navigation type being
//!   `Push`; deep-linked entry points always take the fallback

use crate::navigation::history::{History, NavigationError, NavigationType, Navigator};
use crate::navigation::location::Location;
use crate::navigation::options::{KeepSearch, NavigateOptions, NavigateRequest};
use crate::navigation::search::SearchParams;
use crate::navigation::target::Target;

/// Default destination of a `-1` navigation with nothing pushed to go back to.
pub const DEFAULT_FALLBACK_PATH: &str = "/";

/// Where a resolved navigation is sent.
pub trait Dispatch {
    fn dispatch(&self, to: &str, request: &NavigateRequest) -> Result<(), NavigationError>;
    fn go(&self, delta: i32) -> Result<(), NavigationError>;
}

/// Through the host router; re-renders routes.
pub struct RenderDispatch<'a, N: Navigator>(pub &'a N);

impl<N: Navigator> Dispatch for RenderDispatch<'_, N> {
    fn dispatch(&self, to: &str, request: &NavigateRequest) -> Result<(), NavigationError> {
        tracing::debug!(to = %to, replace = request.replace, "Navigating");
        self.0.navigate(to, request)
    }

    fn go(&self, delta: i32) -> Result<(), NavigationError> {
        tracing::debug!(delta, "Navigating through history");
        self.0.go(delta)
    }
}

/// Straight to the history API; the address bar changes, routes do not
/// re-render.
pub struct SilentDispatch<'a, H: History>(pub &'a H);

impl<H: History> Dispatch for SilentDispatch<'_, H> {
    fn dispatch(&self, to: &str, request: &NavigateRequest) -> Result<(), NavigationError> {
        tracing::debug!(to = %to, replace = request.replace, "Silent navigation");
        if request.replace {
            self.0.replace_state(request.state.as_ref(), to)
        } else {
            self.0.push_state(request.state.as_ref(), to)
        }
    }

    fn go(&self, delta: i32) -> Result<(), NavigationError> {
        tracing::debug!(delta, "Silent history move");
        self.0.go(delta)
    }
}

/// Resolve the query parameters a navigation ends up with.
///
/// `None` when neither `keep_search` nor `search` is set, so the target's own
/// query is used unchanged.
pub fn resolve_search(options: &NavigateOptions, current: &Location) -> Option<SearchParams> {
    if options.keep_search.is_none() && options.search.is_none() {
        return None;
    }

    let mut params = SearchParams::new();
    if let Some(keep) = &options.keep_search {
        let current_params = current.search_params();
        match keep {
            KeepSearch::All => params.merge(&current_params),
            KeepSearch::Keys(keys) => params.merge(&current_params.pick(keys)),
        }
    }
    if let Some(search) = &options.search {
        params.merge(search);
    }
    Some(params)
}

/// Fold query and fragment options into a target location.
///
/// A non-empty resolved query replaces the target's query; a non-empty
/// `hash` option replaces its fragment.
pub fn resolve_location(
    mut location: Location,
    options: &NavigateOptions,
    current: &Location,
) -> Location {
    if let Some(params) = resolve_search(options, current) {
        let query = params.to_string();
        if !query.is_empty() {
            location.search = format!("?{}", query);
        }
    }
    if let Some(hash) = options.hash.as_deref().filter(|h| !h.is_empty()) {
        location.hash = hash.to_string();
    }
    location
}

fn send<D: Dispatch>(
    dispatch: &D,
    target: Target,
    options: &NavigateOptions,
    current: &Location,
) -> Result<(), NavigationError> {
    match target.into_location() {
        Some(location) => {
            let to = resolve_location(location, options, current).to_path();
            dispatch.dispatch(&to, &options.request())
        }
        None => Ok(()),
    }
}

/// Navigation that only touches the history API.
///
/// Usable outside any render cycle.
#[derive(Debug, Clone)]
pub struct SilentNav<H: History> {
    history: H,
}

impl<H: History> SilentNav<H> {
    pub fn new(history: H) -> Self {
        Self { history }
    }

    pub fn history(&self) -> &H {
        &self.history
    }

    pub fn navigate(
        &self,
        target: impl Into<Target>,
        options: NavigateOptions,
    ) -> Result<(), NavigationError> {
        let dispatch = SilentDispatch(&self.history);
        match target.into() {
            Target::Delta(delta) => dispatch.go(delta),
            target => send(&dispatch, target, &options, &self.history.location()),
        }
    }
}

/// Drop-in navigate with query merging, back fallback and silent mode.
#[derive(Debug, Clone)]
pub struct Nav<N: Navigator, H: History> {
    navigator: N,
    silent: SilentNav<H>,
    fallback_path: String,
}

impl<N: Navigator, H: History> Nav<N, H> {
    pub fn new(navigator: N, history: H) -> Self {
        Self {
            navigator,
            silent: SilentNav::new(history),
            fallback_path: DEFAULT_FALLBACK_PATH.to_string(),
        }
    }

    /// Default destination for `-1` when going back is unsafe.
    pub fn with_fallback_path(mut self, path: impl Into<String>) -> Self {
        self.fallback_path = path.into();
        self
    }

    pub fn fallback_path(&self) -> &str {
        &self.fallback_path
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    /// The silent half, for callers outside the render cycle.
    pub fn silent(&self) -> &SilentNav<H> {
        &self.silent
    }

    pub fn navigate(
        &self,
        target: impl Into<Target>,
        options: NavigateOptions,
    ) -> Result<(), NavigationError> {
        let target = target.into();
        if options.silent {
            return self.silent.navigate(target, options);
        }

        let dispatch = RenderDispatch(&self.navigator);
        match target {
            Target::Delta(-1) => self.back(&dispatch, &options),
            Target::Delta(delta) => dispatch.go(delta),
            target => send(&dispatch, target, &options, &self.silent.history().location()),
        }
    }

    fn back(
        &self,
        dispatch: &RenderDispatch<'_, N>,
        options: &NavigateOptions,
    ) -> Result<(), NavigationError> {
        let navigation_type = self.navigator.navigation_type();
        if navigation_type == NavigationType::Push {
            return dispatch.go(-1);
        }

        let fallback = options
            .fallback_path
            .as_deref()
            .unwrap_or(&self.fallback_path);
        tracing::warn!(
            navigation_type = %navigation_type,
            fallback = %fallback,
            "No pushed entry to go back to, replacing with fallback"
        );
        dispatch.dispatch(fallback, &NavigateRequest::replace())
    }
}
