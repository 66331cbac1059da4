//! Navigation guard pipeline.
//!
//! The router calls a [`NavigationHooks`] implementation around every
//! navigation: [`before_each`](NavigationHooks::before_each) decides whether
//! the navigation proceeds, [`after_each`](NavigationHooks::after_each) runs
//! once it is committed and [`on_error`](NavigationHooks::on_error) receives
//! router errors.
//!
//! [`NavigationGuards`] is the admin implementation. Before navigation it
//! checks, in order (the first matching branch wins):
//!
//! | Condition | Decision |
//! |-----------|----------|
//! | coming from the login page onto the error page | redirect to home |
//! | target path is whitelisted | continue |
//! | no access token, target has `ignore_auth` | continue |
//! | no access token | redirect (replace) to login with `?redirect=<to.path>` |
//! | dynamic routes already installed | continue |
//! | otherwise | install dynamic routes, then redirect (replace) to the original target |
//!
//! Installation is single-flight: concurrent navigations wait for the one in
//! flight and then see the store flag set. If it fails, the flag stays unset
//! and the user is sent to the login page.

use crate::action::NavigationAction;
use crate::components::RouteComponent;
use crate::config::RouterConfig;
use crate::error::RouterError;
use crate::installer::DynamicRouteInstaller;
use crate::location::{Location, NavigationTarget};
use crate::meta::RouteMeta;
use crate::params::decode_component;
use crate::route::RouteRecord;
use crate::services::{LoadingIndicator, TitleSink, TokenStorage, UserService};
use crate::store::RouteStore;
use crate::table::RouteRegistry;
use crate::{debug_log, error_log, info_log, trace_log};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Hooks the router runs around each navigation.
#[async_trait]
pub trait NavigationHooks: Send + Sync {
    /// Decide whether navigation from `from` to `to` proceeds.
    async fn before_each(&self, to: &Location, from: &Location) -> NavigationAction;

    /// Runs after a navigation is committed.
    fn after_each(&self, to: &Location, from: &Location);

    /// Runs instead of `after_each` when a navigation that already passed
    /// `before_each` is dropped without committing.
    fn on_cancelled(&self, _to: &Location, _from: &Location) {}

    /// Receives navigation errors. Must not panic.
    fn on_error(&self, error: &RouterError);

    /// Name for debugging.
    fn name(&self) -> &'static str {
        "NavigationHooks"
    }
}

/// Catch-all error page registered after the dynamic routes.
pub fn error_page_route(name: impl Into<String>) -> RouteRecord {
    RouteRecord::new("/:path*")
        .name(name)
        .component(RouteComponent::Layout)
        .meta(RouteMeta::new().title("ErrorPage"))
}

/// Catch-all error page rendering `view` inside the shell layout.
///
/// The leaf carries `name`, so resolved locations report it; the layout
/// parent is registered as `<name>Parent`.
pub fn error_page_route_with_view(name: impl Into<String>, view: RouteComponent) -> RouteRecord {
    let name = name.into();
    RouteRecord::new("/:path*")
        .name(format!("{name}Parent"))
        .component(RouteComponent::Layout)
        .children(vec![RouteRecord::new("/:path*")
            .name(name)
            .component(view)
            .meta(RouteMeta::new().title("ErrorPage"))])
}

/// Authentication, dynamic installation and keep-alive bookkeeping.
pub struct NavigationGuards {
    config: RouterConfig,
    tokens: Arc<dyn TokenStorage>,
    users: Arc<dyn UserService>,
    store: Arc<dyn RouteStore>,
    installer: Arc<DynamicRouteInstaller>,
    registry: Arc<dyn RouteRegistry>,
    error_route: RouteRecord,
    loading: Option<Arc<dyn LoadingIndicator>>,
    title: Option<Arc<dyn TitleSink>>,
    install_lock: Mutex<()>,
}

impl NavigationGuards {
    pub fn builder(config: RouterConfig) -> NavigationGuardsBuilder {
        NavigationGuardsBuilder::new(config)
    }

    pub fn config(&self) -> &RouterConfig {
        &self.config
    }

    pub fn store(&self) -> &Arc<dyn RouteStore> {
        &self.store
    }

    fn start_loading(&self) {
        if let Some(loading) = &self.loading {
            loading.start();
        }
    }

    fn finish_loading(&self) {
        if let Some(loading) = &self.loading {
            loading.finish();
        }
    }

    fn has_token(&self) -> bool {
        self.tokens
            .get(&self.config.access_token_key)
            .is_some_and(|token| !token.is_empty())
    }

    fn login_redirect(&self, to: &Location) -> NavigationAction {
        let target = NavigationTarget::from_url(&self.config.login_path)
            .query("redirect", to.path.clone())
            .replace(true);
        NavigationAction::redirect_with_reason(target, "Authentication required")
    }

    /// Install the dynamic routes unless another navigation already did.
    async fn ensure_installed(&self) -> Result<(), RouterError> {
        let _guard = self.install_lock.lock().await;
        if self.store.is_dynamic_added_route() {
            trace_log!("Dynamic routes installed while waiting");
            return Ok(());
        }

        let user = self.users.get_info().await?;
        let routes = self.installer.install(&user, self.registry.as_ref()).await?;
        self.store.set_menus(routes);

        if !self.registry.has_route(&self.config.error_route_name) {
            debug_log!("Adding error page route '{}'", self.config.error_route_name);
            self.registry.add_route(self.error_route.clone())?;
        }

        self.store.set_dynamic_added_route(true);
        Ok(())
    }

    /// Where to go once the dynamic routes exist.
    fn post_install_target(&self, to: &Location, from: &Location) -> NavigationTarget {
        let raw = from.query.get("redirect").unwrap_or(to.path.as_str());
        let redirect = decode_component(raw);
        if redirect == to.path {
            NavigationTarget::from_location(to).replace(true)
        } else {
            NavigationTarget::from_url(&redirect).replace(true)
        }
    }
}

#[async_trait]
impl NavigationHooks for NavigationGuards {
    async fn before_each(&self, to: &Location, from: &Location) -> NavigationAction {
        self.start_loading();

        if from.path == self.config.login_path
            && to.name.as_deref() == Some(self.config.error_route_name.as_str())
        {
            debug_log!("Error page right after login, going home");
            return NavigationAction::redirect(self.config.home_path.as_str());
        }

        if self.config.is_whitelisted(&to.path) {
            trace_log!("'{}' is whitelisted", to.path);
            return NavigationAction::Continue;
        }

        if !self.has_token() {
            if to.meta.ignore_auth {
                trace_log!("'{}' ignores auth", to.path);
                return NavigationAction::Continue;
            }
            debug_log!("No access token, redirecting '{}' to login", to.path);
            return self.login_redirect(to);
        }

        if self.store.is_dynamic_added_route() {
            return NavigationAction::Continue;
        }

        if let Err(err) = self.ensure_installed().await {
            error_log!("Dynamic route installation failed: {}", err);
            self.finish_loading();
            return self.login_redirect(to);
        }

        let target = self.post_install_target(to, from);
        info_log!("Dynamic routes ready, continuing to '{}'", target.full_path());
        self.finish_loading();
        NavigationAction::redirect(target)
    }

    fn after_each(&self, to: &Location, _from: &Location) {
        if let (Some(title), Some(sink)) = (&to.meta.title, &self.title) {
            sink.set_title(title);
        }

        let current = to.matched_named().and_then(|route| route.name.clone());
        let mut keep_alive = self.store.keep_alive_components();
        let is_redirect_route = to.name.as_deref() == Some(self.config.redirect_route_name.as_str());

        match current {
            Some(name)
                if to.meta.keep_alive && !is_redirect_route && !keep_alive.contains(&name) =>
            {
                trace_log!("Keeping '{}' alive", name);
                keep_alive.push(name);
            }
            current if !to.meta.keep_alive || is_redirect_route => {
                if let Some(name) = current {
                    keep_alive.retain(|tracked| *tracked != name);
                }
            }
            _ => {}
        }

        self.store.set_keep_alive_components(keep_alive);
        self.finish_loading();
    }

    fn on_cancelled(&self, to: &Location, _from: &Location) {
        trace_log!("Navigation to '{}' cancelled", to.path);
        self.finish_loading();
    }

    fn on_error(&self, error: &RouterError) {
        error_log!("Router error: {}", error);
    }

    fn name(&self) -> &'static str {
        "NavigationGuards"
    }
}

impl std::fmt::Debug for NavigationGuards {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NavigationGuards")
            .field("config", &self.config)
            .field("installer", &self.installer)
            .field("error_route", &self.error_route.path)
            .finish_non_exhaustive()
    }
}

/// Builder for [`NavigationGuards`].
pub struct NavigationGuardsBuilder {
    config: RouterConfig,
    tokens: Option<Arc<dyn TokenStorage>>,
    users: Option<Arc<dyn UserService>>,
    store: Option<Arc<dyn RouteStore>>,
    installer: Option<Arc<DynamicRouteInstaller>>,
    registry: Option<Arc<dyn RouteRegistry>>,
    error_route: Option<RouteRecord>,
    not_found_view: Option<RouteComponent>,
    loading: Option<Arc<dyn LoadingIndicator>>,
    title: Option<Arc<dyn TitleSink>>,
}

impl NavigationGuardsBuilder {
    pub fn new(config: RouterConfig) -> Self {
        Self {
            config,
            tokens: None,
            users: None,
            store: None,
            installer: None,
            registry: None,
            error_route: None,
            not_found_view: None,
            loading: None,
            title: None,
        }
    }

    pub fn tokens(mut self, tokens: Arc<dyn TokenStorage>) -> Self {
        self.tokens = Some(tokens);
        self
    }

    pub fn users(mut self, users: Arc<dyn UserService>) -> Self {
        self.users = Some(users);
        self
    }

    pub fn store(mut self, store: Arc<dyn RouteStore>) -> Self {
        self.store = Some(store);
        self
    }

    pub fn installer(mut self, installer: Arc<DynamicRouteInstaller>) -> Self {
        self.installer = Some(installer);
        self
    }

    pub fn registry(mut self, registry: Arc<dyn RouteRegistry>) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Override the default catch-all error page. Its name should match
    /// `config.error_route_name`.
    pub fn error_route(mut self, route: RouteRecord) -> Self {
        self.error_route = Some(route);
        self
    }

    /// View rendered by the default error page. Ignored when
    /// [`error_route`](Self::error_route) is set.
    pub fn not_found_view(mut self, view: RouteComponent) -> Self {
        self.not_found_view = Some(view);
        self
    }

    pub fn loading(mut self, loading: Arc<dyn LoadingIndicator>) -> Self {
        self.loading = Some(loading);
        self
    }

    pub fn title_sink(mut self, title: Arc<dyn TitleSink>) -> Self {
        self.title = Some(title);
        self
    }

    pub fn build(self) -> Result<NavigationGuards, RouterError> {
        fn required<T>(value: Option<T>, what: &str) -> Result<T, RouterError> {
            value.ok_or_else(|| RouterError::config(format!("navigation guards need a {what}")))
        }

        self.config.validate()?;
        let error_name = self.config.error_route_name.clone();
        let error_route = match (self.error_route, self.not_found_view) {
            (Some(route), _) => route,
            (None, Some(view)) => error_page_route_with_view(error_name, view),
            (None, None) => error_page_route(error_name),
        };

        Ok(NavigationGuards {
            tokens: required(self.tokens, "token storage")?,
            users: required(self.users, "user service")?,
            store: required(self.store, "route store")?,
            installer: required(self.installer, "route installer")?,
            registry: required(self.registry, "route registry")?,
            error_route,
            loading: self.loading,
            title: self.title,
            install_lock: Mutex::new(()),
            config: self.config,
        })
    }
}
