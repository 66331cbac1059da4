//! Route table: the router's registration API.
//!
//! [`RouteRegistry`] is the surface the installer and the guards need:
//! add a route, list routes, check a name, resolve a target. [`RouteTable`]
//! is the in-process implementation.
//!
//! Resolution walks the registered trees in registration order. Children
//! are tried before their parent, so the deepest matching record wins. A
//! child path starting with `/` is absolute (this is what
//! [`normalize_routes`](crate::normalize_routes) produces); any other child
//! path is relative to its parent. Catch-all patterns (`*`, `:name*`) are
//! only considered when no other route matches, so an error page can be
//! registered at any point.
//!
//! Registering a route whose name is already taken by a top-level route
//! replaces that route in place. Registration is therefore idempotent for
//! named routes.

#[cfg(feature = "cache")]
use crate::cache::{CacheStats, ResolutionCache};
use crate::error::RouterError;
use crate::location::{Location, MatchedRoute, NavigationTarget};
use crate::matching::{is_catch_all, match_segments, split_path, SegmentMatch};
use crate::normalize::join_path;
use crate::params::RouteParams;
use crate::route::RouteRecord;
use crate::{debug_log, info_log};
#[cfg(feature = "cache")]
use parking_lot::Mutex;
use parking_lot::RwLock;
use std::sync::Arc;

/// Registration API of the router.
pub trait RouteRegistry: Send + Sync {
    /// Register a top-level route (with its children).
    fn add_route(&self, route: RouteRecord) -> Result<(), RouterError>;

    /// Every registered record, flattened in pre-order, with full paths.
    fn get_routes(&self) -> Vec<MatchedRoute>;

    /// Whether a record with this name is registered at any depth.
    fn has_route(&self, name: &str) -> bool {
        self.get_routes()
            .iter()
            .any(|route| route.name.as_deref() == Some(name))
    }

    /// Resolve a navigation target into a location.
    fn resolve(&self, target: &NavigationTarget) -> Location;
}

type Resolution = Option<(Vec<MatchedRoute>, RouteParams)>;

/// In-memory route table.
#[derive(Debug, Default)]
pub struct RouteTable {
    routes: RwLock<Vec<Arc<RouteRecord>>>,
    #[cfg(feature = "cache")]
    cache: Mutex<ResolutionCache>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a table and register `routes` in order.
    pub fn with_routes(routes: impl IntoIterator<Item = RouteRecord>) -> Result<Self, RouterError> {
        let table = Self::new();
        for route in routes {
            table.add_route(route)?;
        }
        Ok(table)
    }

    /// Top-level routes, in registration order.
    pub fn routes(&self) -> Vec<Arc<RouteRecord>> {
        self.routes.read().clone()
    }

    /// Number of top-level routes.
    pub fn len(&self) -> usize {
        self.routes.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.read().is_empty()
    }

    #[cfg(feature = "cache")]
    pub fn cache_stats(&self) -> CacheStats {
        self.cache.lock().stats().clone()
    }

    fn invalidate(&self) {
        #[cfg(feature = "cache")]
        self.cache.lock().clear();
    }

    fn lookup(&self, path: &str) -> Resolution {
        #[cfg(feature = "cache")]
        {
            let cached = self.cache.lock().get(path);
            if let Some(cached) = cached {
                return cached;
            }
        }

        let segments = split_path(path);
        let resolution = {
            let routes = self.routes.read();
            find_match(&routes, &segments, false).or_else(|| find_match(&routes, &segments, true))
        };

        #[cfg(feature = "cache")]
        self.cache.lock().insert(path.to_string(), resolution.clone());

        resolution
    }
}

impl RouteRegistry for RouteTable {
    fn add_route(&self, route: RouteRecord) -> Result<(), RouterError> {
        if !route.path.starts_with('/') {
            return Err(RouterError::registration(
                route.name.clone().unwrap_or_else(|| route.path.clone()),
                "top-level route paths must start with '/'",
            ));
        }

        {
            let mut routes = self.routes.write();
            let existing = route.name.as_deref().and_then(|name| {
                routes
                    .iter()
                    .position(|r| r.name.as_deref() == Some(name))
            });
            match existing {
                Some(pos) => {
                    debug_log!("Replacing route '{}' (name: {:?})", route.path, route.name);
                    routes[pos] = Arc::new(route);
                }
                None => {
                    info_log!("Registered route '{}' (name: {:?})", route.path, route.name);
                    routes.push(Arc::new(route));
                }
            }
        }

        self.invalidate();
        Ok(())
    }

    fn get_routes(&self) -> Vec<MatchedRoute> {
        let mut out = Vec::new();
        for route in self.routes.read().iter() {
            flatten(route, "", &mut out);
        }
        out
    }

    fn has_route(&self, name: &str) -> bool {
        self.routes
            .read()
            .iter()
            .any(|route| route.find_named(name).is_some())
    }

    fn resolve(&self, target: &NavigationTarget) -> Location {
        let Some((matched, params)) = self.lookup(&target.path) else {
            debug_log!("No route matches '{}'", target.path);
            return Location {
                path: target.path.clone(),
                query: target.query.clone(),
                hash: target.hash.clone(),
                ..Location::default()
            };
        };

        let (name, meta) = matched
            .last()
            .map(|leaf| (leaf.name.clone(), leaf.meta.clone()))
            .unwrap_or_default();

        Location {
            path: target.path.clone(),
            query: target.query.clone(),
            hash: target.hash.clone(),
            name,
            meta,
            params,
            matched,
        }
    }
}

fn full_pattern(parent: &str, own: &str) -> String {
    if own.starts_with('/') || parent.is_empty() {
        join_path("", own)
    } else {
        join_path(parent, own)
    }
}

fn matched_route(record: &RouteRecord, full: String) -> MatchedRoute {
    MatchedRoute {
        path: full,
        ..MatchedRoute::from_record(record)
    }
}

fn find_match(routes: &[Arc<RouteRecord>], segments: &[&str], allow_catch_all: bool) -> Resolution {
    routes
        .iter()
        .find_map(|route| match_record(route, "", segments, allow_catch_all))
}

fn match_record(
    record: &RouteRecord,
    parent: &str,
    segments: &[&str],
    allow_catch_all: bool,
) -> Resolution {
    let full = full_pattern(parent, &record.path);
    if !allow_catch_all && is_catch_all(&full) {
        return None;
    }

    let segment_match = match_segments(&full, segments);
    if segment_match == SegmentMatch::None {
        return None;
    }

    for child in &record.children {
        if let Some((mut chain, params)) = match_record(child, &full, segments, allow_catch_all) {
            chain.insert(0, matched_route(record, full));
            return Some((chain, params));
        }
    }

    match segment_match {
        SegmentMatch::Exact(params) => Some((vec![matched_route(record, full)], params)),
        _ => None,
    }
}

fn flatten(record: &RouteRecord, parent: &str, out: &mut Vec<MatchedRoute>) {
    let full = full_pattern(parent, &record.path);
    out.push(matched_route(record, full.clone()));
    for child in &record.children {
        flatten(child, &full, out);
    }
}
