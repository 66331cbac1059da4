//! Route tree normalization.
//!
//! Turns the backend's [`RawRouteNode`] tree into [`RouteRecord`]s:
//!
//! - each path becomes absolute: `parent.path + "/" + node.path`, with any
//!   run of separators collapsed to one (the backend is not consistent about
//!   leading slashes);
//! - a node with children and no explicit redirect redirects to its first
//!   child: `path + "/" + children[0].path`;
//! - `meta` is derived through [`RouteMeta::from_raw`] (label, icon lookup,
//!   permissions);
//! - the component identifier is carried as [`RouteComponent::Named`] until
//!   the [`ComponentResolver`](crate::ComponentResolver) replaces it.
//!
//! Order is preserved and nothing is deduplicated. There is no failure path:
//! missing fields simply stay empty.
//!
//! ```
//! use gpui_admin_router::{normalize_routes, IconRegistry, RawRouteNode};
//!
//! let nodes = vec![RawRouteNode::new("system")
//!     .name("System")
//!     .children(vec![RawRouteNode::new("user").name("SystemUser")])];
//!
//! let routes = normalize_routes(&nodes, None, &IconRegistry::new());
//! assert_eq!(routes[0].path, "/system");
//! assert_eq!(routes[0].redirect.as_deref(), Some("/system/user"));
//! assert_eq!(routes[0].children[0].path, "/system/user");
//! ```

use crate::components::RouteComponent;
use crate::meta::{IconRegistry, RouteMeta};
use crate::route::{RawRouteNode, RouteRecord};
use crate::trace_log;
use std::borrow::Cow;

/// Collapse every run of `/` into a single `/`.
///
/// Returns the input borrowed when there is nothing to collapse.
pub fn collapse_separators(path: &str) -> Cow<'_, str> {
    if !path.contains("//") {
        return Cow::Borrowed(path);
    }

    let mut collapsed = String::with_capacity(path.len());
    let mut previous_was_separator = false;
    for ch in path.chars() {
        let is_separator = ch == '/';
        if !(is_separator && previous_was_separator) {
            collapsed.push(ch);
        }
        previous_was_separator = is_separator;
    }
    Cow::Owned(collapsed)
}

/// Join a parent path and a child segment with a single separator.
pub fn join_path(parent: &str, segment: &str) -> String {
    collapse_separators(&format!("{parent}/{segment}")).into_owned()
}

/// Normalize a list of backend nodes, optionally below an already
/// normalized parent.
pub fn normalize_routes(
    nodes: &[RawRouteNode],
    parent: Option<&RouteRecord>,
    icons: &IconRegistry,
) -> Vec<RouteRecord> {
    let parent_path = parent.map_or("", |p| p.path.as_str());
    nodes
        .iter()
        .map(|node| normalize_node(node, parent_path, icons))
        .collect()
}

fn normalize_node(node: &RawRouteNode, parent_path: &str, icons: &IconRegistry) -> RouteRecord {
    let mut record = RouteRecord {
        path: join_path(parent_path, &node.path),
        name: non_empty(node.name.as_deref()),
        component: non_empty(node.component.as_deref())
            .map_or(RouteComponent::None, RouteComponent::Named),
        meta: RouteMeta::from_raw(&node.meta, icons),
        redirect: non_empty(node.redirect.as_deref()),
        children: Vec::new(),
    };

    if let Some(children) = node.child_nodes() {
        if record.redirect.is_none() {
            record.redirect = Some(join_path(&record.path, &children[0].path));
        }
        let normalized = normalize_routes(children, Some(&record), icons);
        record.children = normalized;
    }

    trace_log!(
        "Normalized '{}' -> '{}' (redirect: {:?})",
        node.path,
        record.path,
        record.redirect
    );
    record
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_string)
}
