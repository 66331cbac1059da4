//! # gpui-admin-router
//!
//! Permission-scoped routing for GPUI admin applications.
//!
//! The backend decides which pages a user may see and sends them as a route
//! tree. This crate turns that tree into registered routes and guards every
//! navigation:
//!
//! - [`normalize_routes`] turns backend [`RawRouteNode`]s into absolute
//!   [`RouteRecord`]s with inferred redirects;
//! - [`ViewModuleIndex`] maps component identifiers such as
//!   `"system/user/index"` onto view loaders;
//! - [`ComponentResolver`] resolves every record's component
//!   ([`RouteComponent`]): framework layouts first, then views;
//! - [`DynamicRouteInstaller`] fetches, normalizes, resolves and registers
//!   the routes of one user;
//! - [`NavigationGuards`] authenticates navigations, installs the dynamic
//!   routes once per session and maintains the keep-alive set;
//! - [`Navigator`] runs navigations through the guards and keeps history;
//! - [`init_router`] makes the navigator a GPUI global.
//!
//! # Quick start
//!
//! ```
//! use gpui_admin_router::{normalize_routes, IconRegistry, RawRouteNode};
//!
//! let nodes = vec![RawRouteNode::new("system")
//!     .name("System")
//!     .component("LAYOUT")
//!     .children(vec![RawRouteNode::new("user")
//!         .name("SystemUser")
//!         .component("system/user/index")])];
//!
//! let routes = normalize_routes(&nodes, None, &IconRegistry::new());
//! assert_eq!(routes[0].path, "/system");
//! assert_eq!(routes[0].redirect.as_deref(), Some("/system/user"));
//! assert_eq!(routes[0].children[0].path, "/system/user");
//! ```
//!
//! # Features
//!
//! | Feature   | Default | Description |
//! |-----------|---------|-------------|
//! | `log`     | yes     | Log through the `log` crate |
//! | `tracing` | no      | Log through `tracing` instead |
//! | `cache`   | yes     | LRU cache for route resolution |

#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod action;
#[cfg(feature = "cache")]
pub mod cache;
pub mod components;
pub mod config;
pub mod context;
pub mod error;
pub mod guards;
pub mod installer;
pub mod location;
pub mod logging;
pub mod matching;
pub mod meta;
pub mod navigator;
pub mod normalize;
pub mod params;
pub mod route;
pub mod services;
pub mod state;
pub mod store;
pub mod table;
pub mod views;

pub use action::NavigationAction;
#[cfg(feature = "cache")]
pub use cache::{CacheStats, ResolutionCache};
pub use components::{
    ComponentResolver, IframeRenderer, LayoutKind, LayoutRenderers, RouteComponent,
};
pub use config::RouterConfig;
pub use context::{apply_title, init_router, navigate, AdminRouter};
pub use error::{NavigationResult, RouterError};
pub use guards::{
    error_page_route, error_page_route_with_view, NavigationGuards, NavigationGuardsBuilder,
    NavigationHooks,
};
pub use installer::DynamicRouteInstaller;
pub use location::{Location, MatchedRoute, NavigationTarget};
pub use meta::{Icon, IconRegistry, RawRouteMeta, RouteMeta};
pub use navigator::{Navigator, MAX_REDIRECT_DEPTH};
pub use normalize::{collapse_separators, join_path, normalize_routes};
pub use params::{QueryParams, RouteParams};
pub use route::{parse_route_tree, RawRouteNode, RouteRecord};
pub use services::{
    DocumentTitle, LoadingIndicator, MemoryTokenStorage, MenuService, TitleSink, TokenStorage,
    UserInfo, UserService,
};
pub use state::{NavigationDirection, RouteChangeEvent, RouterState};
pub use store::{MemoryRouteStore, RouteStore};
pub use table::{RouteRegistry, RouteTable};
pub use views::{
    view_fn, LazyViewIndex, ViewLoader, ViewMatch, ViewModuleIndex, ViewModuleIndexBuilder,
    DEFAULT_VIEWS_PREFIX,
};
