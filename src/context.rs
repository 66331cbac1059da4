//! GPUI integration.
//!
//! The [`Navigator`] lives in an [`AdminRouter`] global so views can reach
//! it through `cx`:
//!
//! ```ignore
//! use gpui_admin_router::{init_router, navigate, AdminRouter};
//!
//! init_router(cx, navigator);
//! navigate(cx, "/dashboard").detach();
//! let path = AdminRouter::current_path(cx);
//! ```

use crate::error::NavigationResult;
use crate::location::NavigationTarget;
use crate::navigator::Navigator;
use crate::services::DocumentTitle;
use crate::trace_log;
use gpui::{App, Global, Task, Window};
use std::sync::Arc;

/// Global holding the application's navigator.
#[derive(Clone)]
pub struct AdminRouter {
    navigator: Arc<Navigator>,
}

impl Global for AdminRouter {}

impl AdminRouter {
    /// The navigator. Panics if [`init_router`] was not called.
    pub fn navigator(cx: &App) -> Arc<Navigator> {
        cx.global::<AdminRouter>().navigator.clone()
    }

    pub fn try_navigator(cx: &App) -> Option<Arc<Navigator>> {
        cx.try_global::<AdminRouter>()
            .map(|router| router.navigator.clone())
    }

    /// Current path, or `None` before [`init_router`].
    pub fn current_path(cx: &App) -> Option<String> {
        Self::try_navigator(cx).map(|navigator| navigator.current_path())
    }
}

/// Install `navigator` as the global router.
pub fn init_router(cx: &mut App, navigator: Arc<Navigator>) {
    cx.set_global(AdminRouter { navigator });
}

/// Start a navigation on the foreground executor and refresh all windows
/// once it settles.
pub fn navigate(cx: &mut App, target: impl Into<NavigationTarget>) -> Task<NavigationResult> {
    let navigator = AdminRouter::navigator(cx);
    let target = target.into();
    let app = cx.to_async();
    trace_log!("Scheduling navigation to '{}'", target.full_path());

    cx.foreground_executor().spawn(async move {
        let result = navigator.push(target).await;
        let _ = app.update(|cx| cx.refresh_windows());
        result
    })
}

/// Copy the last page title onto the window.
pub fn apply_title(window: &mut Window, title: &DocumentTitle) {
    if let Some(title) = title.get() {
        window.set_window_title(&title);
    }
}
