//! Route metadata and menu icons.
//!
//! [`RawRouteMeta`] is the `meta` object exactly as the backend sends it.
//! [`RouteMeta`] is what the router works with after normalization: the
//! backend title is mirrored into `label`, the icon key is looked up in an
//! [`IconRegistry`], and unknown extra keys are carried through untouched.

use gpui::SharedString;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Backend `meta` object of a route node.
///
/// Every field is optional; anything the router does not know about ends up
/// in [`extra`](Self::extra).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawRouteMeta {
    pub title: Option<String>,
    pub icon: Option<String>,
    pub permissions: Option<Vec<String>>,
    /// External page shown through the iframe wrapper.
    pub frame_src: Option<String>,
    pub keep_alive: Option<bool>,
    /// Reachable without an access token.
    pub ignore_auth: Option<bool>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Menu icon, referenced by its asset path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Icon {
    pub path: SharedString,
}

impl Icon {
    pub fn new(path: impl Into<SharedString>) -> Self {
        Self { path: path.into() }
    }
}

/// Lookup table from backend icon keys to application icons.
///
/// ```
/// use gpui_admin_router::{Icon, IconRegistry};
///
/// let icons = IconRegistry::new().icon("DashboardOutlined", "icons/dashboard.svg");
/// assert_eq!(icons.lookup("DashboardOutlined"), Some(Icon::new("icons/dashboard.svg")));
/// assert_eq!(icons.lookup("Unknown"), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct IconRegistry {
    icons: HashMap<String, Icon>,
}

impl IconRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an icon under a backend key.
    pub fn icon(mut self, key: impl Into<String>, path: impl Into<SharedString>) -> Self {
        self.icons.insert(key.into(), Icon::new(path));
        self
    }

    pub fn lookup(&self, key: &str) -> Option<Icon> {
        self.icons.get(key).cloned()
    }

    pub fn len(&self) -> usize {
        self.icons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }
}

/// Normalized route metadata.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RouteMeta {
    /// Page title, also used for the window title after navigation.
    pub title: Option<String>,
    /// Menu label; mirrors `title`.
    pub label: Option<String>,
    pub icon: Option<Icon>,
    pub permissions: Option<Vec<String>>,
    pub frame_src: Option<String>,
    /// Keep the rendered view alive across navigations.
    pub keep_alive: bool,
    pub ignore_auth: bool,
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl RouteMeta {
    pub fn new() -> Self {
        Self::default()
    }

    /// Derive normalized metadata from the backend object.
    pub fn from_raw(raw: &RawRouteMeta, icons: &IconRegistry) -> Self {
        Self {
            title: raw.title.clone(),
            label: raw.title.clone(),
            icon: raw.icon.as_deref().and_then(|key| icons.lookup(key)),
            permissions: raw.permissions.clone(),
            frame_src: raw.frame_src.clone(),
            keep_alive: raw.keep_alive.unwrap_or(false),
            ignore_auth: raw.ignore_auth.unwrap_or(false),
            extra: raw.extra.clone(),
        }
    }

    /// Set the title (and label).
    pub fn title(mut self, title: impl Into<String>) -> Self {
        let title = title.into();
        self.label = Some(title.clone());
        self.title = Some(title);
        self
    }

    pub fn icon(mut self, icon: Icon) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn permissions(mut self, permissions: Vec<String>) -> Self {
        self.permissions = Some(permissions);
        self
    }

    pub fn frame_src(mut self, src: impl Into<String>) -> Self {
        self.frame_src = Some(src.into());
        self
    }

    pub fn keep_alive(mut self, keep_alive: bool) -> Self {
        self.keep_alive = keep_alive;
        self
    }

    pub fn ignore_auth(mut self, ignore_auth: bool) -> Self {
        self.ignore_auth = ignore_auth;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_meta_deserializes_camel_case_and_extra_keys() {
        let raw: RawRouteMeta = serde_json::from_str(
            r#"{"title":"Users","frameSrc":"https://docs","keepAlive":true,"ignoreAuth":false,"sort":3}"#,
        )
        .unwrap();
        assert_eq!(raw.title.as_deref(), Some("Users"));
        assert_eq!(raw.frame_src.as_deref(), Some("https://docs"));
        assert_eq!(raw.keep_alive, Some(true));
        assert_eq!(raw.ignore_auth, Some(false));
        assert_eq!(raw.extra.get("sort"), Some(&serde_json::json!(3)));
    }

    #[test]
    fn test_from_raw_derives_label_icon_permissions() {
        let icons = IconRegistry::new().icon("SettingOutlined", "icons/setting.svg");
        let raw = RawRouteMeta {
            title: Some("System".into()),
            icon: Some("SettingOutlined".into()),
            ..RawRouteMeta::default()
        };
        let meta = RouteMeta::from_raw(&raw, &icons);
        assert_eq!(meta.label.as_deref(), Some("System"));
        assert_eq!(meta.icon, Some(Icon::new("icons/setting.svg")));
        assert_eq!(meta.permissions, None);
        assert!(!meta.keep_alive);
    }

    #[test]
    fn test_unknown_icon_degrades_to_none() {
        let raw = RawRouteMeta {
            icon: Some("Missing".into()),
            ..RawRouteMeta::default()
        };
        assert_eq!(RouteMeta::from_raw(&raw, &IconRegistry::new()).icon, None);
    }
}
