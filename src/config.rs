//! Router configuration.
//!
//! ```
//! use gpui_admin_router::RouterConfig;
//!
//! let config = RouterConfig::new().login_path("/signin").home_path("/home");
//! assert_eq!(config.whitelist, vec!["/signin".to_string()]);
//!
//! let config = RouterConfig::from_json(r#"{"loginPath":"/auth","accessTokenKey":"TOKEN"}"#).unwrap();
//! assert_eq!(config.login_path, "/auth");
//! assert_eq!(config.home_path, "/dashboard");
//! ```

use crate::error::RouterError;
use serde::Deserialize;

/// Paths, route names and storage keys the guards rely on.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RouterConfig {
    /// Login page; always whitelisted.
    pub login_path: String,
    /// Landing page after login.
    pub home_path: String,
    /// Paths reachable without authentication.
    pub whitelist: Vec<String>,
    /// Token storage key of the access token.
    pub access_token_key: String,
    /// Name of the catch-all error page route.
    pub error_route_name: String,
    /// Name of the refresh pass-through route; never kept alive.
    pub redirect_route_name: String,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            login_path: "/login".to_string(),
            home_path: "/dashboard".to_string(),
            whitelist: vec!["/login".to_string()],
            access_token_key: "ACCESS-TOKEN".to_string(),
            error_route_name: "ErrorPage".to_string(),
            redirect_route_name: "Redirect".to_string(),
        }
    }
}

impl RouterConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse from JSON. Omitted keys keep their defaults; the login path is
    /// added to the whitelist if missing.
    pub fn from_json(json: &str) -> Result<Self, RouterError> {
        let mut config: Self =
            serde_json::from_str(json).map_err(|e| RouterError::config(e.to_string()))?;
        if !config.whitelist.contains(&config.login_path) {
            config.whitelist.push(config.login_path.clone());
        }
        config.validate()?;
        Ok(config)
    }

    /// Set the login path, moving it in the whitelist as well.
    pub fn login_path(mut self, path: impl Into<String>) -> Self {
        let path = path.into();
        let old = std::mem::replace(&mut self.login_path, path.clone());
        self.whitelist.retain(|p| *p != old);
        if !self.whitelist.contains(&path) {
            self.whitelist.push(path);
        }
        self
    }

    pub fn home_path(mut self, path: impl Into<String>) -> Self {
        self.home_path = path.into();
        self
    }

    /// Add a path to the whitelist.
    pub fn whitelist(mut self, path: impl Into<String>) -> Self {
        let path = path.into();
        if !self.whitelist.contains(&path) {
            self.whitelist.push(path);
        }
        self
    }

    pub fn access_token_key(mut self, key: impl Into<String>) -> Self {
        self.access_token_key = key.into();
        self
    }

    pub fn error_route_name(mut self, name: impl Into<String>) -> Self {
        self.error_route_name = name.into();
        self
    }

    pub fn redirect_route_name(mut self, name: impl Into<String>) -> Self {
        self.redirect_route_name = name.into();
        self
    }

    pub fn is_whitelisted(&self, path: &str) -> bool {
        self.whitelist.iter().any(|p| p == path)
    }

    /// Reject paths that can never match a top-level route.
    pub fn validate(&self) -> Result<(), RouterError> {
        for (field, path) in [("loginPath", &self.login_path), ("homePath", &self.home_path)] {
            if !path.starts_with('/') {
                return Err(RouterError::config(format!(
                    "{field} must start with '/': '{path}'"
                )));
            }
        }
        Ok(())
    }
}
