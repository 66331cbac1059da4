//! Route records.
//!
//! Two shapes of route exist:
//!
//! - [`RawRouteNode`]: one node of the permission-scoped menu tree returned
//!   by the backend. Read-only input to [`normalize_routes`](crate::normalize_routes).
//! - [`RouteRecord`]: the router's own record. Produced by normalization for
//!   dynamic routes, or built by hand for static routes (login, error page, ...).
//!
//! # Example
//!
//! ```
//! use gpui_admin_router::{RouteComponent, RouteMeta, RouteRecord};
//!
//! let login = RouteRecord::new("/login")
//!     .name("Login")
//!     .component(RouteComponent::Named("login/index".into()))
//!     .meta(RouteMeta::new().title("Login").ignore_auth(true));
//!
//! assert_eq!(login.path, "/login");
//! assert_eq!(login.name.as_deref(), Some("Login"));
//! ```

use crate::components::RouteComponent;
use crate::error::RouterError;
use crate::meta::{RawRouteMeta, RouteMeta};
use serde::{Deserialize, Serialize};

/// Backend route node.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawRouteNode {
    /// Path segment relative to the parent node.
    pub path: String,
    pub name: Option<String>,
    /// Logical component identifier (`"LAYOUT"`, `"IFRAME"` or a view key).
    pub component: Option<String>,
    pub meta: RawRouteMeta,
    pub redirect: Option<String>,
    pub children: Option<Vec<RawRouteNode>>,
}

impl RawRouteNode {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn component(mut self, component: impl Into<String>) -> Self {
        self.component = Some(component.into());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.meta.title = Some(title.into());
        self
    }

    pub fn meta(mut self, meta: RawRouteMeta) -> Self {
        self.meta = meta;
        self
    }

    pub fn redirect(mut self, redirect: impl Into<String>) -> Self {
        self.redirect = Some(redirect.into());
        self
    }

    pub fn children(mut self, children: Vec<RawRouteNode>) -> Self {
        self.children = Some(children);
        self
    }

    /// Non-empty children, if any.
    pub fn child_nodes(&self) -> Option<&[RawRouteNode]> {
        self.children.as_deref().filter(|c| !c.is_empty())
    }
}

/// Parse a backend menu payload (a JSON array of route nodes).
///
/// Malformed payloads are reported as [`RouterError::MenuFetch`], the same
/// way a transport failure would be.
pub fn parse_route_tree(json: &str) -> Result<Vec<RawRouteNode>, RouterError> {
    serde_json::from_str(json).map_err(|e| RouterError::menu_fetch(format!("invalid payload: {e}")))
}

/// A route as registered with the router.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteRecord {
    /// Absolute path for dynamic routes; static routes may use any pattern
    /// the [`RouteTable`](crate::RouteTable) understands (`:param`, `*`).
    pub path: String,
    pub name: Option<String>,
    pub component: RouteComponent,
    pub meta: RouteMeta,
    pub redirect: Option<String>,
    pub children: Vec<RouteRecord>,
}

impl RouteRecord {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            name: None,
            component: RouteComponent::None,
            meta: RouteMeta::default(),
            redirect: None,
            children: Vec::new(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn component(mut self, component: RouteComponent) -> Self {
        self.component = component;
        self
    }

    pub fn meta(mut self, meta: RouteMeta) -> Self {
        self.meta = meta;
        self
    }

    pub fn redirect(mut self, redirect: impl Into<String>) -> Self {
        self.redirect = Some(redirect.into());
        self
    }

    pub fn children(mut self, children: Vec<RouteRecord>) -> Self {
        self.children = children;
        self
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Depth-first search for a record with the given name, including `self`.
    pub fn find_named(&self, name: &str) -> Option<&RouteRecord> {
        if self.name.as_deref() == Some(name) {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find_named(name))
    }

    /// Total number of records in this subtree.
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(RouteRecord::count).sum::<usize>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_route_tree() {
        let nodes = parse_route_tree(
            r#"[{"path":"system","name":"System","component":"LAYOUT","meta":{"title":"System"},
                "children":[{"path":"user","name":"SystemUser","component":"system/user/index","meta":{"title":"Users"}}]}]"#,
        )
        .unwrap();
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].component.as_deref(), Some("LAYOUT"));
        let children = nodes[0].child_nodes().unwrap();
        assert_eq!(children[0].path, "user");
        assert_eq!(children[0].meta.title.as_deref(), Some("Users"));
    }

    #[test]
    fn test_parse_route_tree_tolerates_missing_fields() {
        let nodes = parse_route_tree(r#"[{"path":"about","component":null}]"#).unwrap();
        assert_eq!(nodes[0].name, None);
        assert_eq!(nodes[0].component, None);
        assert_eq!(nodes[0].meta, RawRouteMeta::default());
        assert!(nodes[0].child_nodes().is_none());
    }

    #[test]
    fn test_parse_route_tree_rejects_malformed_payload() {
        let err = parse_route_tree(r#"{"path":1}"#).unwrap_err();
        assert!(err.is_fetch_failure());
    }

    #[test]
    fn test_empty_children_are_not_child_nodes() {
        let node = RawRouteNode::new("a").children(vec![]);
        assert!(node.child_nodes().is_none());
    }

    #[test]
    fn test_find_named_and_count() {
        let tree = RouteRecord::new("/system").name("System").children(vec![
            RouteRecord::new("/system/user").name("SystemUser"),
            RouteRecord::new("/system/role").name("SystemRole"),
        ]);
        assert_eq!(tree.count(), 3);
        assert_eq!(
            tree.find_named("SystemRole").map(|r| r.path.as_str()),
            Some("/system/role")
        );
        assert!(tree.find_named("Missing").is_none());
    }
}
