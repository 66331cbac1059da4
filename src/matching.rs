//! Segment-based path matching.
//!
//! Patterns and paths are split on `/`; empty segments are ignored, so
//! `/system/user`, `system/user/` and `//system//user` all have the segments
//! `["system", "user"]`.
//!
//! | Pattern segment | Matches                                    |
//! |-----------------|--------------------------------------------|
//! | `literal`       | exactly `literal` (case-sensitive)         |
//! | `:name`         | any one segment, captured as `name`        |
//! | `*`, `:name*`   | the rest of the path (zero or more segments), captured as `pathMatch` or `name` |

use crate::params::{decode_component, RouteParams};

/// Split a path into its non-empty segments.
pub fn split_path(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

/// Whether the pattern ends in a catch-all segment.
pub fn is_catch_all(pattern: &str) -> bool {
    split_path(pattern)
        .last()
        .is_some_and(|seg| catch_all_name(seg).is_some())
}

fn catch_all_name(segment: &str) -> Option<&str> {
    if segment == "*" {
        return Some("pathMatch");
    }
    segment
        .strip_prefix(':')
        .and_then(|name| name.strip_suffix('*'))
}

/// How a pattern relates to a path.
#[derive(Debug, Clone, PartialEq)]
pub enum SegmentMatch {
    /// Pattern consumes the whole path.
    Exact(RouteParams),
    /// Pattern matches the leading segments; the rest is left for children.
    Prefix,
    None,
}

/// Match path segments against a pattern.
///
/// ```
/// use gpui_admin_router::matching::{match_segments, split_path, SegmentMatch};
///
/// let path = split_path("/users/42");
/// match match_segments("/users/:id", &path) {
///     SegmentMatch::Exact(params) => assert_eq!(params.get("id").map(String::as_str), Some("42")),
///     other => panic!("unexpected {:?}", other),
/// }
/// assert_eq!(match_segments("/users", &path), SegmentMatch::Prefix);
/// assert_eq!(match_segments("/posts", &path), SegmentMatch::None);
/// ```
pub fn match_segments(pattern: &str, path: &[&str]) -> SegmentMatch {
    let pattern_segments = split_path(pattern);
    let mut params = RouteParams::new();

    for (i, pattern_seg) in pattern_segments.iter().enumerate() {
        if let Some(name) = catch_all_name(pattern_seg) {
            let rest = path.get(i..).unwrap_or_default();
            params.insert(name, decode_component(&rest.join("/")));
            return SegmentMatch::Exact(params);
        }

        let Some(path_seg) = path.get(i) else {
            return SegmentMatch::None;
        };

        if let Some(name) = pattern_seg.strip_prefix(':') {
            params.insert(name, decode_component(path_seg));
        } else if pattern_seg != path_seg {
            return SegmentMatch::None;
        }
    }

    if pattern_segments.len() == path.len() {
        SegmentMatch::Exact(params)
    } else {
        SegmentMatch::Prefix
    }
}
