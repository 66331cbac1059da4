//! Error types for route installation and navigation.
//!
//! - [`RouterError`]: everything that can go wrong while fetching, installing
//!   or navigating (menu fetch failure, user info failure, registration,
//!   unmatched path, redirect loop, bad configuration).
//! - [`NavigationResult`]: the outcome of one navigation through the
//!   [`Navigator`](crate::Navigator) (`Success`, `NotFound`, `Blocked`, `Error`).
//!
//! # Examples
//!
//! ```
//! use gpui_admin_router::error::{NavigationResult, RouterError};
//!
//! let result = NavigationResult::Success { path: "/dashboard".into() };
//! assert!(result.is_success());
//!
//! let err = RouterError::menu_fetch("503 Service Unavailable");
//! assert_eq!(err.to_string(), "Failed to fetch route menu: 503 Service Unavailable");
//! ```

use std::fmt;

/// Errors raised by the dynamic routing subsystem.
#[derive(Debug, Clone, PartialEq)]
pub enum RouterError {
    /// The menu/permission service rejected the request.
    MenuFetch { message: String },

    /// The user info service rejected the request.
    UserInfo { message: String },

    /// A route could not be added to the route table.
    Registration { route: String, message: String },

    /// No registered route matches the path.
    RouteNotFound { path: String },

    /// Guards kept redirecting past the allowed depth.
    RedirectLoop { path: String, depth: usize },

    /// Invalid router configuration.
    Config { message: String },
}

impl RouterError {
    /// Shorthand for [`RouterError::MenuFetch`].
    pub fn menu_fetch(message: impl Into<String>) -> Self {
        Self::MenuFetch {
            message: message.into(),
        }
    }

    /// Shorthand for [`RouterError::UserInfo`].
    pub fn user_info(message: impl Into<String>) -> Self {
        Self::UserInfo {
            message: message.into(),
        }
    }

    /// Shorthand for [`RouterError::Registration`].
    pub fn registration(route: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Registration {
            route: route.into(),
            message: message.into(),
        }
    }

    /// Shorthand for [`RouterError::Config`].
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Whether this error came from an external collaborator (menu or user
    /// service) rather than from the router itself.
    pub fn is_fetch_failure(&self) -> bool {
        matches!(self, Self::MenuFetch { .. } | Self::UserInfo { .. })
    }
}

impl fmt::Display for RouterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouterError::MenuFetch { message } => {
                write!(f, "Failed to fetch route menu: {}", message)
            }
            RouterError::UserInfo { message } => {
                write!(f, "Failed to fetch user info: {}", message)
            }
            RouterError::Registration { route, message } => {
                write!(f, "Failed to register route '{}': {}", route, message)
            }
            RouterError::RouteNotFound { path } => {
                write!(f, "Route not found: {}", path)
            }
            RouterError::RedirectLoop { path, depth } => {
                write!(f, "Redirect loop detected (depth {}) at '{}'", depth, path)
            }
            RouterError::Config { message } => {
                write!(f, "Invalid router configuration: {}", message)
            }
        }
    }
}

impl std::error::Error for RouterError {}

/// Outcome of a navigation attempt.
#[derive(Debug, Clone)]
pub enum NavigationResult {
    /// Navigation committed; `path` is the final full path (after redirects).
    Success { path: String },
    /// Nothing matched the final path and no error page is registered.
    NotFound { path: String },
    /// A guard denied navigation.
    Blocked {
        reason: String,
        redirect: Option<String>,
    },
    /// Navigation failed.
    Error(RouterError),
}

impl NavigationResult {
    /// Check if navigation was successful
    pub fn is_success(&self) -> bool {
        matches!(self, NavigationResult::Success { .. })
    }

    /// Check if route was not found
    pub fn is_not_found(&self) -> bool {
        matches!(self, NavigationResult::NotFound { .. })
    }

    /// Check if navigation was blocked
    pub fn is_blocked(&self) -> bool {
        matches!(self, NavigationResult::Blocked { .. })
    }

    /// Check if there was an error
    pub fn is_error(&self) -> bool {
        matches!(self, NavigationResult::Error(_))
    }

    /// The committed path, if navigation succeeded.
    pub fn path(&self) -> Option<&str> {
        match self {
            NavigationResult::Success { path } => Some(path),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_result_success() {
        let result = NavigationResult::Success {
            path: "/dashboard".to_string(),
        };
        assert!(result.is_success());
        assert!(!result.is_not_found());
        assert!(!result.is_blocked());
        assert!(!result.is_error());
        assert_eq!(result.path(), Some("/dashboard"));
    }

    #[test]
    fn test_navigation_result_error_has_no_path() {
        let result = NavigationResult::Error(RouterError::RouteNotFound {
            path: "/missing".to_string(),
        });
        assert!(result.is_error());
        assert_eq!(result.path(), None);
    }

    #[test]
    fn test_router_error_display() {
        assert_eq!(
            RouterError::registration("Dashboard", "duplicate").to_string(),
            "Failed to register route 'Dashboard': duplicate"
        );
        assert_eq!(
            RouterError::RedirectLoop {
                path: "/a".to_string(),
                depth: 5
            }
            .to_string(),
            "Redirect loop detected (depth 5) at '/a'"
        );
    }

    #[test]
    fn test_fetch_failure_classification() {
        assert!(RouterError::menu_fetch("timeout").is_fetch_failure());
        assert!(RouterError::user_info("401").is_fetch_failure());
        assert!(!RouterError::config("bad").is_fetch_failure());
    }
}
