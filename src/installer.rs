//! Dynamic route installation.
//!
//! [`DynamicRouteInstaller::install`] runs the whole chain once:
//!
//! 1. fetch the user's route tree from the [`MenuService`];
//! 2. normalize it ([`normalize_routes`]);
//! 3. resolve components against the view index ([`ComponentResolver`]);
//! 4. append the static routes after the dynamic ones;
//! 5. register every route with the [`RouteRegistry`], in order;
//! 6. return the merged list.
//!
//! A fetch failure aborts before anything is registered. A registration
//! failure aborts at that route; the routes registered before it stay
//! registered.

use crate::components::ComponentResolver;
use crate::error::RouterError;
use crate::meta::IconRegistry;
use crate::normalize::normalize_routes;
use crate::route::RouteRecord;
use crate::services::{MenuService, UserInfo};
use crate::table::RouteRegistry;
use crate::views::LazyViewIndex;
use crate::{debug_log, info_log};
use std::sync::Arc;

/// Fetches, normalizes, resolves and registers permission-scoped routes.
pub struct DynamicRouteInstaller {
    menus: Arc<dyn MenuService>,
    views: Arc<LazyViewIndex>,
    icons: IconRegistry,
    static_routes: Vec<RouteRecord>,
}

impl DynamicRouteInstaller {
    pub fn new(menus: Arc<dyn MenuService>, views: Arc<LazyViewIndex>) -> Self {
        Self {
            menus,
            views,
            icons: IconRegistry::new(),
            static_routes: Vec::new(),
        }
    }

    /// Icons available to menu entries.
    pub fn icons(mut self, icons: IconRegistry) -> Self {
        self.icons = icons;
        self
    }

    /// Routes registered after the dynamic ones on every installation.
    pub fn static_routes(mut self, routes: Vec<RouteRecord>) -> Self {
        self.static_routes = routes;
        self
    }

    pub fn static_route_list(&self) -> &[RouteRecord] {
        &self.static_routes
    }

    /// Fetch, normalize and resolve the user's routes without registering
    /// anything.
    pub async fn generate_routes(&self, user: &UserInfo) -> Result<Vec<RouteRecord>, RouterError> {
        let nodes = self.menus.fetch_menus(user).await?;
        debug_log!("Fetched {} top-level menu nodes", nodes.len());

        let mut routes = normalize_routes(&nodes, None, &self.icons);
        ComponentResolver::new(self.views.get()).resolve(&mut routes);
        Ok(routes)
    }

    /// Run the full installation and return dynamic and static routes, in
    /// registration order.
    pub async fn install(
        &self,
        user: &UserInfo,
        registry: &dyn RouteRegistry,
    ) -> Result<Vec<RouteRecord>, RouterError> {
        let dynamic = self.generate_routes(user).await?;
        let dynamic_count = dynamic.len();

        let merged: Vec<RouteRecord> = dynamic
            .into_iter()
            .chain(self.static_routes.iter().cloned())
            .collect();

        for route in &merged {
            registry.add_route(route.clone())?;
        }

        info_log!(
            "Installed {} dynamic and {} static routes",
            dynamic_count,
            merged.len() - dynamic_count
        );
        Ok(merged)
    }
}

impl std::fmt::Debug for DynamicRouteInstaller {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DynamicRouteInstaller")
            .field("icons", &self.icons)
            .field("static_routes", &self.static_routes.len())
            .finish_non_exhaustive()
    }
}
