//! Path segment resolution.
//!
//! # Rules
//! - Empty segment: the prefix is kept as is
//! - Absolute segment (leading `/`): replaces everything accumulated so far
//! - Relative segment: appended with `/`, then runs of `/` collapse to one
//!
//! An absolute child path escapes its ancestors. Route configs use this to
//! mount a page outside its parent's URL space while keeping it nested in the
//! render tree.

/// Resolve a single segment against a prefix.
pub fn resolve_paths(prefix: &str, segment: &str) -> String {
    if segment.is_empty() {
        return prefix.to_string();
    }
    if segment.starts_with('/') {
        return segment.to_string();
    }
    collapse_slashes(&format!("{}/{}", prefix, segment))
}

/// Fold a list of segments left to right.
///
/// The first segment is taken verbatim, matching `resolve_paths` being
/// applied as a reduction.
pub fn resolve_all<S: AsRef<str>>(segments: &[S]) -> String {
    let mut iter = segments.iter();
    let first = match iter.next() {
        Some(first) => first.as_ref().to_string(),
        None => return String::new(),
    };
    iter.fold(first, |acc, segment| resolve_paths(&acc, segment.as_ref()))
}

fn collapse_slashes(path: &str) -> String {
    let mut out = String::with_capacity(path.len());
    let mut prev_slash = false;
    for c in path.chars() {
        if c == '/' {
            if !prev_slash {
                out.push(c);
            }
            prev_slash = true;
        } else {
            out.push(c);
            prev_slash = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_segment_extends_prefix() {
        assert_eq!(resolve_paths("/base", "child"), "/base/child");
        assert_eq!(resolve_paths("", "path"), "/path");
        assert_eq!(resolve_paths("/base/", "child"), "/base/child");
    }

    #[test]
    fn test_absolute_segment_replaces_prefix() {
        assert_eq!(resolve_paths("/base/", "/child"), "/child");
        assert_eq!(resolve_paths("/a/b/c", "/"), "/");
    }

    #[test]
    fn test_empty_segment_keeps_prefix() {
        assert_eq!(resolve_paths("/base", ""), "/base");
        assert_eq!(resolve_paths("", ""), "");
    }

    #[test]
    fn test_collapses_inner_slashes() {
        assert_eq!(resolve_paths("/a//", "b//c"), "/a/b/c");
    }

    #[test]
    fn test_resolve_all() {
        assert_eq!(resolve_all(&["/users", ":id", "edit"]), "/users/:id/edit");
        assert_eq!(resolve_all(&["/users", "/admin", "logs"]), "/admin/logs");
        assert_eq!(resolve_all::<&str>(&[]), "");
    }

    #[test]
    fn test_associative_without_absolute_segments() {
        let cases = [("/a", "b", "c"), ("", "x", "y/z"), ("/p/", "q/", "r")];
        for (a, b, c) in cases {
            let left = resolve_paths(&resolve_paths(a, b), c);
            let right = resolve_paths(a, &resolve_paths(b, c));
            assert_eq!(left, right, "{a} {b} {c}");
        }
    }

    #[test]
    fn test_absolute_anywhere_discards_preceding() {
        assert_eq!(resolve_all(&["/a", "b", "/c", "d"]), "/c/d");
        assert_eq!(resolve_paths(&resolve_paths("/a", "b"), "/c"), "/c");
    }
}
