//! Navigation pipeline.
//!
//! Every navigation goes through the same steps:
//!
//! 1. resolve the target against the [`RouteRegistry`];
//! 2. follow a record-level `redirect` on the matched leaf;
//! 3. run [`before_each`](NavigationHooks::before_each): continue, deny or
//!    redirect (redirects start over at step 1);
//! 4. commit the location to the history;
//! 5. run [`after_each`](NavigationHooks::after_each).
//!
//! Redirects are followed at most [`MAX_REDIRECT_DEPTH`] times.
//!
//! Guards may suspend. If another navigation starts meanwhile, the older
//! one is dropped instead of committing.

use crate::action::NavigationAction;
use crate::error::{NavigationResult, RouterError};
use crate::guards::NavigationHooks;
use crate::location::{Location, NavigationTarget};
use crate::state::RouterState;
use crate::table::RouteRegistry;
use crate::{debug_log, info_log, trace_log, warn_log};
use parking_lot::Mutex;
use std::sync::Arc;

/// Maximum redirect depth to prevent infinite redirect loops.
pub const MAX_REDIRECT_DEPTH: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NavigateOp {
    Push,
    Replace,
    Back,
    Forward,
}

/// Drives navigations through the hooks and keeps the history.
pub struct Navigator {
    registry: Arc<dyn RouteRegistry>,
    hooks: Arc<dyn NavigationHooks>,
    state: Mutex<RouterState>,
}

impl Navigator {
    pub fn new(registry: Arc<dyn RouteRegistry>, hooks: Arc<dyn NavigationHooks>) -> Self {
        Self {
            registry,
            hooks,
            state: Mutex::new(RouterState::new()),
        }
    }

    pub fn registry(&self) -> &Arc<dyn RouteRegistry> {
        &self.registry
    }

    pub fn hooks(&self) -> &Arc<dyn NavigationHooks> {
        &self.hooks
    }

    /// The committed location.
    pub fn current(&self) -> Location {
        self.state.lock().current().clone()
    }

    pub fn current_path(&self) -> String {
        self.state.lock().current_path().to_string()
    }

    pub fn can_go_back(&self) -> bool {
        self.state.lock().can_go_back()
    }

    pub fn can_go_forward(&self) -> bool {
        self.state.lock().can_go_forward()
    }

    /// Navigate to a new location. A target with `replace` set replaces the
    /// current entry.
    pub async fn push(&self, target: impl Into<NavigationTarget>) -> NavigationResult {
        let target = target.into();
        let op = if target.replace {
            NavigateOp::Replace
        } else {
            NavigateOp::Push
        };
        self.navigate(target, op).await
    }

    /// Replace the current entry.
    pub async fn replace(&self, target: impl Into<NavigationTarget>) -> NavigationResult {
        self.navigate(target.into().replace(true), NavigateOp::Replace)
            .await
    }

    /// Go back one entry, re-running the guards for it.
    pub async fn back(&self) -> Option<NavigationResult> {
        let url = self.state.lock().peek_back()?;
        Some(
            self.navigate(NavigationTarget::from_url(&url), NavigateOp::Back)
                .await,
        )
    }

    /// Go forward one entry, re-running the guards for it.
    pub async fn forward(&self) -> Option<NavigationResult> {
        let url = self.state.lock().peek_forward()?;
        Some(
            self.navigate(NavigationTarget::from_url(&url), NavigateOp::Forward)
                .await,
        )
    }

    async fn navigate(&self, mut target: NavigationTarget, mut op: NavigateOp) -> NavigationResult {
        let (nav_id, from) = {
            let mut state = self.state.lock();
            (state.start_navigation(), state.current().clone())
        };
        info_log!("Navigation {:?}: '{}' → '{}'", op, from.full_path(), target.full_path());

        let mut depth = 0;
        let mut guarded: Option<Location> = None;
        let to = loop {
            if depth > MAX_REDIRECT_DEPTH {
                let err = RouterError::RedirectLoop {
                    path: target.path.clone(),
                    depth,
                };
                self.hooks.on_error(&err);
                if let Some(last) = &guarded {
                    self.hooks.on_cancelled(last, &from);
                }
                return NavigationResult::Error(err);
            }

            let to = self.registry.resolve(&target);

            if let Some(redirect) = to.matched.last().and_then(|leaf| leaf.redirect.as_deref()) {
                if redirect != to.path {
                    trace_log!("Route '{}' redirects to '{}'", to.path, redirect);
                    target = NavigationTarget::from_url(redirect).replace(target.replace);
                    depth += 1;
                    continue;
                }
            }

            match self.hooks.before_each(&to, &from).await {
                NavigationAction::Continue => break to,
                NavigationAction::Deny { reason } => {
                    warn_log!("Navigation to '{}' blocked: {}", to.path, reason);
                    self.hooks.after_each(&to, &from);
                    return NavigationResult::Blocked {
                        reason,
                        redirect: None,
                    };
                }
                NavigationAction::Redirect {
                    target: next,
                    reason,
                } => {
                    debug_log!(
                        "Guard redirecting from '{}' to '{}': {:?}",
                        to.path,
                        next.full_path(),
                        reason
                    );
                    op = if next.replace {
                        NavigateOp::Replace
                    } else {
                        NavigateOp::Push
                    };
                    target = next;
                    depth += 1;
                    guarded = Some(to);
                }
            }
        };

        if !self.state.lock().is_navigation_current(nav_id) {
            debug_log!("Navigation to '{}' superseded", to.path);
            self.hooks.on_cancelled(&to, &from);
            return NavigationResult::Blocked {
                reason: format!("Navigation to '{}' was superseded", to.path),
                redirect: None,
            };
        }

        if !to.is_matched() {
            let err = RouterError::RouteNotFound {
                path: to.path.clone(),
            };
            self.hooks.on_error(&err);
            self.hooks.after_each(&to, &from);
            return NavigationResult::NotFound { path: to.path };
        }

        let event = {
            let mut state = self.state.lock();
            match op {
                NavigateOp::Push => state.push(to.clone()),
                NavigateOp::Replace => state.replace(to.clone()),
                NavigateOp::Back => match state.back(to.clone()) {
                    Some(event) => event,
                    None => state.push(to.clone()),
                },
                NavigateOp::Forward => match state.forward(to.clone()) {
                    Some(event) => event,
                    None => state.push(to.clone()),
                },
            }
        };

        self.hooks.after_each(&to, &from);
        info_log!("Navigation complete: '{}'", event.to);
        NavigationResult::Success { path: event.to }
    }
}

impl std::fmt::Debug for Navigator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Navigator")
            .field("hooks", &self.hooks.name())
            .field("state", &*self.state.lock())
            .finish_non_exhaustive()
    }
}
