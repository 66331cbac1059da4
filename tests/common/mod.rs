//! Shared fixtures for the integration tests.
//!
//! Provides a backend menu, a view index, counting mock services and a fully
//! wired [`Harness`].

#![allow(dead_code)]

use async_trait::async_trait;
use gpui::{div, IntoElement, ParentElement};
use gpui_admin_router::*;
use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Once};
use std::task::{Context, Poll};

static INIT: Once = Once::new();

/// Route logs to the test output (`RUST_LOG=debug cargo test`).
pub fn init_logging() {
    INIT.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

/// Menu tree as the backend sends it.
pub const ADMIN_MENU_JSON: &str = r#"[
  {
    "path": "dashboard",
    "name": "Dashboard",
    "component": "LAYOUT",
    "meta": { "title": "Dashboard", "icon": "dashboard" },
    "children": [
      {
        "path": "console",
        "name": "DashboardConsole",
        "component": "dashboard/console/index",
        "meta": { "title": "Console", "keepAlive": true }
      }
    ]
  },
  {
    "path": "/system",
    "name": "System",
    "component": "LAYOUT",
    "meta": { "title": "System", "permissions": ["system"] },
    "children": [
      {
        "path": "user",
        "name": "SystemUser",
        "component": "system/user/index",
        "meta": { "title": "Users", "keepAlive": true }
      },
      {
        "path": "role",
        "name": "SystemRole",
        "component": "/system/role/index",
        "meta": { "title": "Roles" }
      }
    ]
  },
  {
    "path": "reports",
    "name": "Reports",
    "component": "reports/index",
    "meta": { "title": "Reports" }
  },
  {
    "path": "docs",
    "name": "Docs",
    "meta": { "title": "Docs", "frameSrc": "https://docs.example.com" }
  }
]"#;

pub fn admin_menu() -> Vec<RawRouteNode> {
    parse_route_tree(ADMIN_MENU_JSON).expect("fixture menu parses")
}

pub fn page(label: &'static str) -> ViewLoader {
    view_fn(move |_, _| div().child(label).into_any_element())
}

pub fn view_index() -> ViewModuleIndex {
    ViewModuleIndex::builder()
        .module("../views/dashboard/console/index.vue", page("Console"))
        .module("../views/system/user/index.vue", page("Users"))
        .module("../views/system/role/index.vue", page("Roles"))
        .module("../views/reports/index.vue", page("Reports"))
        .module("../views/login/index.vue", page("Login"))
        .build()
}

pub fn icons() -> IconRegistry {
    IconRegistry::new().icon("dashboard", "icons/dashboard.svg")
}

/// Routes that exist before anyone logs in.
pub fn static_routes() -> Vec<RouteRecord> {
    vec![
        RouteRecord::new("/login")
            .name("Login")
            .meta(RouteMeta::new().title("Login")),
        RouteRecord::new("/redirect/:path*")
            .name("Redirect")
            .component(RouteComponent::Layout),
    ]
}

/// Resolves on the second poll, so concurrent callers interleave.
pub struct YieldOnce(bool);

impl Future for YieldOnce {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        if self.0 {
            Poll::Ready(())
        } else {
            self.0 = true;
            cx.waker().wake_by_ref();
            Poll::Pending
        }
    }
}

pub fn yield_once() -> YieldOnce {
    YieldOnce(false)
}

pub struct CountingMenus {
    pub nodes: Vec<RawRouteNode>,
    pub calls: AtomicUsize,
    pub fail: bool,
}

impl CountingMenus {
    pub fn new(nodes: Vec<RawRouteNode>) -> Self {
        Self {
            nodes,
            calls: AtomicUsize::new(0),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new(Vec::new())
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MenuService for CountingMenus {
    async fn fetch_menus(&self, _user: &UserInfo) -> Result<Vec<RawRouteNode>, RouterError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        yield_once().await;
        if self.fail {
            Err(RouterError::menu_fetch("503 Service Unavailable"))
        } else {
            Ok(self.nodes.clone())
        }
    }
}

#[derive(Default)]
pub struct CountingUsers {
    pub calls: AtomicUsize,
}

impl CountingUsers {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UserService for CountingUsers {
    async fn get_info(&self) -> Result<UserInfo, RouterError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        yield_once().await;
        Ok(UserInfo {
            id: Some("1".into()),
            username: Some("admin".into()),
            permissions: vec!["system".into()],
            raw: serde_json::Map::new(),
        })
    }
}

#[derive(Default)]
pub struct RecordingLoading {
    pub started: AtomicUsize,
    pub finished: AtomicUsize,
    pub active: AtomicBool,
}

impl RecordingLoading {
    pub fn started(&self) -> usize {
        self.started.load(Ordering::SeqCst)
    }

    pub fn finished(&self) -> usize {
        self.finished.load(Ordering::SeqCst)
    }

    /// Whether the last call was `start`.
    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }
}

impl LoadingIndicator for RecordingLoading {
    fn start(&self) {
        self.started.fetch_add(1, Ordering::SeqCst);
        self.active.store(true, Ordering::SeqCst);
    }

    fn finish(&self) {
        self.finished.fetch_add(1, Ordering::SeqCst);
        self.active.store(false, Ordering::SeqCst);
    }
}

/// Everything wired together, with handles on every collaborator.
pub struct Harness {
    pub navigator: Navigator,
    pub guards: Arc<NavigationGuards>,
    pub table: Arc<RouteTable>,
    pub store: Arc<MemoryRouteStore>,
    pub tokens: Arc<MemoryTokenStorage>,
    pub menus: Arc<CountingMenus>,
    pub users: Arc<CountingUsers>,
    pub loading: Arc<RecordingLoading>,
    pub title: Arc<DocumentTitle>,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_menus(CountingMenus::new(admin_menu()))
    }

    pub fn with_menus(menus: CountingMenus) -> Self {
        init_logging();

        let menus = Arc::new(menus);
        let users = Arc::new(CountingUsers::default());
        let tokens = Arc::new(MemoryTokenStorage::new());
        let store = Arc::new(MemoryRouteStore::new());
        let loading = Arc::new(RecordingLoading::default());
        let title = Arc::new(DocumentTitle::new());
        let table =
            Arc::new(RouteTable::with_routes(static_routes()).expect("static routes register"));

        let installer = DynamicRouteInstaller::new(
            menus.clone(),
            Arc::new(LazyViewIndex::new(view_index)),
        )
        .icons(icons())
        .static_routes(static_routes());

        let guards = Arc::new(
            NavigationGuards::builder(RouterConfig::default())
                .tokens(tokens.clone())
                .users(users.clone())
                .store(store.clone())
                .installer(Arc::new(installer))
                .registry(table.clone())
                .loading(loading.clone())
                .title_sink(title.clone())
                .build()
                .expect("guards build"),
        );

        let navigator = Navigator::new(table.clone(), guards.clone());

        Self {
            navigator,
            guards,
            table,
            store,
            tokens,
            menus,
            users,
            loading,
            title,
        }
    }

    pub fn log_in(&self) {
        self.tokens.set("ACCESS-TOKEN", "token-123");
    }

    pub fn push(&self, url: &str) -> NavigationResult {
        pollster::block_on(self.navigator.push(url))
    }
}

impl Default for Harness {
    fn default() -> Self {
        Self::new()
    }
}
