//! Navigation targets.

use crate::navigation::location::Location;
use crate::routing::Paths;

/// Where to navigate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// Path string, optionally with query and fragment.
    Path(String),
    /// Structured location.
    Location(Location),
    /// Relative move in the history stack.
    Delta(i32),
}

impl Target {
    /// The target as a location, or `None` for history deltas.
    pub fn into_location(self) -> Option<Location> {
        match self {
            Target::Path(path) => Some(Location::parse(&path)),
            Target::Location(location) => Some(location),
            Target::Delta(_) => None,
        }
    }
}

impl From<&str> for Target {
    fn from(path: &str) -> Self {
        Target::Path(path.to_string())
    }
}

impl From<String> for Target {
    fn from(path: String) -> Self {
        Target::Path(path)
    }
}

impl From<&Paths> for Target {
    fn from(paths: &Paths) -> Self {
        Target::Path(paths.to_string())
    }
}

impl From<Paths> for Target {
    fn from(paths: Paths) -> Self {
        Target::Path(paths.into())
    }
}

impl From<Location> for Target {
    fn from(location: Location) -> Self {
        Target::Location(location)
    }
}

impl From<i32> for Target {
    fn from(delta: i32) -> Self {
        Target::Delta(delta)
    }
}
