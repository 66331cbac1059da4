//! Guard decisions.
//!
//! [`NavigationAction`] is what a before-navigation guard answers for one
//! navigation attempt: let it through, refuse it, or send the user
//! somewhere else.

use crate::location::NavigationTarget;

/// Result of a before-navigation check.
///
/// ```
/// use gpui_admin_router::{NavigationAction, NavigationTarget};
///
/// let action = NavigationAction::redirect(NavigationTarget::from_url("/login").replace(true));
/// assert_eq!(action.redirect_path(), Some("/login"));
/// assert!(!NavigationAction::deny("nope").is_continue());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum NavigationAction {
    /// Allow navigation to proceed.
    Continue,

    /// Deny navigation with a reason.
    Deny {
        /// Human-readable reason for denying navigation.
        reason: String,
    },

    /// Navigate to another target instead.
    Redirect {
        target: NavigationTarget,
        /// Optional human-readable reason for redirecting.
        reason: Option<String>,
    },
}

impl NavigationAction {
    /// Alias for [`Continue`](Self::Continue).
    pub fn allow() -> Self {
        Self::Continue
    }

    pub fn deny(reason: impl Into<String>) -> Self {
        Self::Deny {
            reason: reason.into(),
        }
    }

    pub fn redirect(target: impl Into<NavigationTarget>) -> Self {
        Self::Redirect {
            target: target.into(),
            reason: None,
        }
    }

    pub fn redirect_with_reason(
        target: impl Into<NavigationTarget>,
        reason: impl Into<String>,
    ) -> Self {
        Self::Redirect {
            target: target.into(),
            reason: Some(reason.into()),
        }
    }

    pub fn is_continue(&self) -> bool {
        matches!(self, Self::Continue)
    }

    pub fn is_deny(&self) -> bool {
        matches!(self, Self::Deny { .. })
    }

    pub fn is_redirect(&self) -> bool {
        matches!(self, Self::Redirect { .. })
    }

    /// The redirect target, if this is a redirect.
    pub fn redirect_target(&self) -> Option<&NavigationTarget> {
        match self {
            Self::Redirect { target, .. } => Some(target),
            _ => None,
        }
    }

    /// Path of the redirect target, if this is a redirect.
    pub fn redirect_path(&self) -> Option<&str> {
        self.redirect_target().map(|target| target.path.as_str())
    }
}
