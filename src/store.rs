//! Session-scoped dynamic route state.
//!
//! The guards and the installer never keep this state themselves; they go
//! through [`RouteStore`], so a test can hand them a fresh store and the
//! application can reset it on logout.

use crate::route::RouteRecord;
use parking_lot::RwLock;

/// Store for dynamic route state.
pub trait RouteStore: Send + Sync {
    /// Whether the dynamic routes are installed for this session.
    fn is_dynamic_added_route(&self) -> bool;

    fn set_dynamic_added_route(&self, added: bool);

    /// Names of the views kept alive, in insertion order, without duplicates.
    fn keep_alive_components(&self) -> Vec<String>;

    fn set_keep_alive_components(&self, names: Vec<String>);

    /// Dynamic routes of the current session, for menus.
    fn menus(&self) -> Vec<RouteRecord>;

    fn set_menus(&self, menus: Vec<RouteRecord>);

    /// Forget everything (logout).
    fn reset(&self) {
        self.set_dynamic_added_route(false);
        self.set_keep_alive_components(Vec::new());
        self.set_menus(Vec::new());
    }
}

#[derive(Debug, Default)]
struct StoreInner {
    dynamic_added: bool,
    keep_alive: Vec<String>,
    menus: Vec<RouteRecord>,
}

/// In-memory [`RouteStore`].
#[derive(Debug, Default)]
pub struct MemoryRouteStore {
    inner: RwLock<StoreInner>,
}

impl MemoryRouteStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RouteStore for MemoryRouteStore {
    fn is_dynamic_added_route(&self) -> bool {
        self.inner.read().dynamic_added
    }

    fn set_dynamic_added_route(&self, added: bool) {
        self.inner.write().dynamic_added = added;
    }

    fn keep_alive_components(&self) -> Vec<String> {
        self.inner.read().keep_alive.clone()
    }

    fn set_keep_alive_components(&self, names: Vec<String>) {
        let mut unique: Vec<String> = Vec::with_capacity(names.len());
        for name in names {
            if !unique.contains(&name) {
                unique.push(name);
            }
        }
        self.inner.write().keep_alive = unique;
    }

    fn menus(&self) -> Vec<RouteRecord> {
        self.inner.read().menus.clone()
    }

    fn set_menus(&self, menus: Vec<RouteRecord>) {
        self.inner.write().menus = menus;
    }
}
