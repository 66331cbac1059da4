//! Component resolution.
//!
//! The backend names a route's component with a string. Resolution turns that
//! string into something the router can render, in two explicit tiers:
//!
//! 1. a closed set of framework layouts ([`LayoutKind`]): `"LAYOUT"` is the
//!    application shell, `"IFRAME"` the embedded-page wrapper;
//! 2. otherwise the [`ViewModuleIndex`].
//!
//! Records without a component fall back to [`RouteComponent::Iframe`] when
//! they carry `meta.frame_src`, or to [`RouteComponent::ParentLayout`] when
//! they are named grouping nodes.
//!
//! Resolution never fails. An identifier the view index cannot match becomes
//! [`RouteComponent::Unresolved`]: the route is still installed, and it is
//! rendering that fails later.

use crate::route::RouteRecord;
use crate::views::{ViewLoader, ViewModuleIndex};
use crate::{debug_log, warn_log};
use gpui::{AnyElement, App, Window};
use std::fmt;
use std::sync::Arc;

/// The component a route renders.
#[derive(Clone, Default)]
pub enum RouteComponent {
    /// No component.
    #[default]
    None,
    /// Identifier from the backend, not resolved yet.
    Named(String),
    /// Application shell layout.
    Layout,
    /// Wrapper rendering `meta.frame_src`.
    Iframe,
    /// Pass-through layout for grouping nodes.
    ParentLayout,
    View(ViewLoader),
    /// The identifier matched no view, or more than one.
    Unresolved(String),
}

impl RouteComponent {
    /// Wrap a loader as a view component.
    pub fn view(loader: ViewLoader) -> Self {
        Self::View(loader)
    }

    pub fn is_renderable(&self) -> bool {
        !matches!(self, Self::None | Self::Named(_) | Self::Unresolved(_))
    }
}

impl fmt::Debug for RouteComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("None"),
            Self::Named(id) => f.debug_tuple("Named").field(id).finish(),
            Self::Layout => f.write_str("Layout"),
            Self::Iframe => f.write_str("Iframe"),
            Self::ParentLayout => f.write_str("ParentLayout"),
            Self::View(_) => f.write_str("View(..)"),
            Self::Unresolved(id) => f.debug_tuple("Unresolved").field(id).finish(),
        }
    }
}

impl PartialEq for RouteComponent {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::None, Self::None)
            | (Self::Layout, Self::Layout)
            | (Self::Iframe, Self::Iframe)
            | (Self::ParentLayout, Self::ParentLayout) => true,
            (Self::Named(a), Self::Named(b)) | (Self::Unresolved(a), Self::Unresolved(b)) => a == b,
            (Self::View(a), Self::View(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

/// Framework layouts addressable by identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutKind {
    Layout,
    Iframe,
}

impl LayoutKind {
    /// Exact, case-sensitive lookup.
    pub fn from_identifier(id: &str) -> Option<Self> {
        match id {
            "LAYOUT" => Some(Self::Layout),
            "IFRAME" => Some(Self::Iframe),
            _ => None,
        }
    }

    pub fn identifier(self) -> &'static str {
        match self {
            Self::Layout => "LAYOUT",
            Self::Iframe => "IFRAME",
        }
    }

    pub fn component(self) -> RouteComponent {
        match self {
            Self::Layout => RouteComponent::Layout,
            Self::Iframe => RouteComponent::Iframe,
        }
    }
}

/// Resolves component identifiers of normalized records in place.
#[derive(Debug, Clone, Copy)]
pub struct ComponentResolver<'a> {
    views: &'a ViewModuleIndex,
}

impl<'a> ComponentResolver<'a> {
    pub fn new(views: &'a ViewModuleIndex) -> Self {
        Self { views }
    }

    /// Resolve every record of the tree.
    pub fn resolve(&self, routes: &mut [RouteRecord]) {
        for record in routes.iter_mut() {
            record.component = self.resolve_component(record);
            self.resolve(&mut record.children);
        }
    }

    /// The component one record should get. Children are not visited.
    pub fn resolve_component(&self, record: &RouteRecord) -> RouteComponent {
        match &record.component {
            RouteComponent::None if record.meta.frame_src.is_some() => RouteComponent::Iframe,
            RouteComponent::Named(id) => self.resolve_identifier(id),
            RouteComponent::None if record.name.is_some() => RouteComponent::ParentLayout,
            other => other.clone(),
        }
    }

    /// Layout registry first, then the view index.
    pub fn resolve_identifier(&self, id: &str) -> RouteComponent {
        if let Some(layout) = LayoutKind::from_identifier(id) {
            debug_log!("Component '{}' resolved to layout {:?}", id, layout);
            return layout.component();
        }
        match self.views.resolve(id) {
            Some(loader) => RouteComponent::View(loader),
            None => {
                warn_log!("No unique view module for component '{}'", id);
                RouteComponent::Unresolved(id.to_string())
            }
        }
    }
}

/// Renders an iframe route given its `frame_src`.
pub type IframeRenderer = Arc<dyn Fn(&str, &mut Window, &mut App) -> AnyElement + Send + Sync>;

/// Application-provided renderers for the framework layouts.
///
/// ```ignore
/// use gpui_admin_router::LayoutRenderers;
///
/// let renderers = LayoutRenderers::new()
///     .on_layout(|_window, _cx| shell().into_any_element())
///     .on_parent_layout(|_window, _cx| div().into_any_element())
///     .on_iframe(|src, _window, _cx| web_view(src).into_any_element());
/// ```
#[derive(Clone, Default)]
pub struct LayoutRenderers {
    pub layout: Option<ViewLoader>,
    pub parent_layout: Option<ViewLoader>,
    pub iframe: Option<IframeRenderer>,
}

impl LayoutRenderers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_layout<F>(mut self, f: F) -> Self
    where
        F: Fn(&mut Window, &mut App) -> AnyElement + Send + Sync + 'static,
    {
        self.layout = Some(Arc::new(f));
        self
    }

    pub fn on_parent_layout<F>(mut self, f: F) -> Self
    where
        F: Fn(&mut Window, &mut App) -> AnyElement + Send + Sync + 'static,
    {
        self.parent_layout = Some(Arc::new(f));
        self
    }

    pub fn on_iframe<F>(mut self, f: F) -> Self
    where
        F: Fn(&str, &mut Window, &mut App) -> AnyElement + Send + Sync + 'static,
    {
        self.iframe = Some(Arc::new(f));
        self
    }

    /// Render a record's component. `None` when the component is not
    /// renderable or no renderer is registered for its layout.
    pub fn render(
        &self,
        record: &RouteRecord,
        window: &mut Window,
        cx: &mut App,
    ) -> Option<AnyElement> {
        match &record.component {
            RouteComponent::View(loader) => Some(loader(window, cx)),
            RouteComponent::Layout => self.layout.as_ref().map(|f| f(window, cx)),
            RouteComponent::ParentLayout => self.parent_layout.as_ref().map(|f| f(window, cx)),
            RouteComponent::Iframe => {
                let src = record.meta.frame_src.as_deref().unwrap_or_default();
                self.iframe.as_ref().map(|f| f(src, window, cx))
            }
            RouteComponent::Unresolved(id) => {
                warn_log!("Route '{}' has no usable component ('{}')", record.path, id);
                None
            }
            RouteComponent::None | RouteComponent::Named(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::meta::RouteMeta;
    use crate::views::view_fn;
    use gpui::{div, IntoElement};

    fn index_with(keys: &[&str]) -> ViewModuleIndex {
        keys.iter()
            .fold(ViewModuleIndex::builder(), |b, key| {
                b.module(*key, view_fn(|_, _| div().into_any_element()))
            })
            .build()
    }

    #[test]
    fn test_layout_registry_takes_precedence() {
        let views = index_with(&["../views/LAYOUT.rs"]);
        let resolver = ComponentResolver::new(&views);
        assert_eq!(resolver.resolve_identifier("LAYOUT"), RouteComponent::Layout);
        assert_eq!(resolver.resolve_identifier("IFRAME"), RouteComponent::Iframe);
    }

    #[test]
    fn test_layout_lookup_is_case_sensitive() {
        assert_eq!(LayoutKind::from_identifier("layout"), None);
        assert_eq!(LayoutKind::from_identifier("LAYOUT"), Some(LayoutKind::Layout));
        assert_eq!(LayoutKind::Iframe.identifier(), "IFRAME");
    }

    #[test]
    fn test_frame_src_without_component_is_iframe() {
        let views = ViewModuleIndex::empty();
        let record = RouteRecord::new("/docs")
            .name("Docs")
            .meta(RouteMeta::new().frame_src("https://example.com"));
        assert_eq!(
            ComponentResolver::new(&views).resolve_component(&record),
            RouteComponent::Iframe
        );
    }

    #[test]
    fn test_named_node_without_component_is_parent_layout() {
        let views = ViewModuleIndex::empty();
        let record = RouteRecord::new("/group").name("Group");
        assert_eq!(
            ComponentResolver::new(&views).resolve_component(&record),
            RouteComponent::ParentLayout
        );
    }

    #[test]
    fn test_anonymous_node_without_component_stays_empty() {
        let views = ViewModuleIndex::empty();
        let record = RouteRecord::new("/x");
        assert_eq!(
            ComponentResolver::new(&views).resolve_component(&record),
            RouteComponent::None
        );
    }

    #[test]
    fn test_view_and_unresolved() {
        let views = index_with(&["../views/dashboard/index.vue", "foo/bar.vue", "foo/bar.tsx"]);
        let resolver = ComponentResolver::new(&views);
        assert!(matches!(
            resolver.resolve_identifier("dashboard/index"),
            RouteComponent::View(_)
        ));
        assert_eq!(
            resolver.resolve_identifier("foo/bar"),
            RouteComponent::Unresolved("foo/bar".into())
        );
        assert_eq!(
            resolver.resolve_identifier("nope"),
            RouteComponent::Unresolved("nope".into())
        );
    }

    #[test]
    fn test_resolve_recurses_into_children() {
        let views = index_with(&["../views/system/user/index.vue"]);
        let mut routes = vec![RouteRecord::new("/system")
            .name("System")
            .component(RouteComponent::Named("LAYOUT".into()))
            .children(vec![
                RouteRecord::new("/system/user")
                    .name("SystemUser")
                    .component(RouteComponent::Named("system/user/index".into())),
                RouteRecord::new("/system/group").name("SystemGroup"),
            ])];

        ComponentResolver::new(&views).resolve(&mut routes);

        assert_eq!(routes[0].component, RouteComponent::Layout);
        assert!(matches!(routes[0].children[0].component, RouteComponent::View(_)));
        assert_eq!(routes[0].children[1].component, RouteComponent::ParentLayout);
    }

    #[test]
    fn test_already_resolved_components_are_kept() {
        let views = ViewModuleIndex::empty();
        let record = RouteRecord::new("/login").component(RouteComponent::Layout);
        assert_eq!(
            ComponentResolver::new(&views).resolve_component(&record),
            RouteComponent::Layout
        );
    }

    #[test]
    fn test_renderability() {
        assert!(RouteComponent::Layout.is_renderable());
        assert!(!RouteComponent::Unresolved("x".into()).is_renderable());
        assert!(!RouteComponent::Named("x".into()).is_renderable());
    }

    #[test]
    fn test_layout_renderers_builder() {
        let renderers = LayoutRenderers::new()
            .on_layout(|_, _| div().into_any_element())
            .on_iframe(|_src, _, _| div().into_any_element());
        assert!(renderers.layout.is_some());
        assert!(renderers.parent_layout.is_none());
        assert!(renderers.iframe.is_some());
    }
}
