//! External collaborators.
//!
//! The router does not own the backend client, the token store, the loading
//! indicator or the window title. It talks to them through these traits.
//! In-memory implementations are provided for tests and simple apps.

use crate::error::RouterError;
use crate::route::RawRouteNode;
use async_trait::async_trait;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Profile of the signed-in user. Opaque to the router apart from being
/// handed to the [`MenuService`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserInfo {
    pub id: Option<String>,
    pub username: Option<String>,
    pub permissions: Vec<String>,
    /// Anything else the backend returned.
    #[serde(flatten)]
    pub raw: serde_json::Map<String, serde_json::Value>,
}

/// Fetches the permission-scoped route tree.
#[async_trait]
pub trait MenuService: Send + Sync {
    async fn fetch_menus(&self, user: &UserInfo) -> Result<Vec<RawRouteNode>, RouterError>;
}

/// Fetches the current user's profile.
#[async_trait]
pub trait UserService: Send + Sync {
    async fn get_info(&self) -> Result<UserInfo, RouterError>;
}

/// Key/value token storage.
pub trait TokenStorage: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
}

/// In-memory [`TokenStorage`].
#[derive(Debug, Default)]
pub struct MemoryTokenStorage {
    values: RwLock<HashMap<String, String>>,
}

impl MemoryTokenStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, key: impl Into<String>, value: impl Into<String>) {
        self.values.write().insert(key.into(), value.into());
    }

    pub fn remove(&self, key: &str) -> Option<String> {
        self.values.write().remove(key)
    }
}

impl TokenStorage for MemoryTokenStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.values.read().get(key).cloned()
    }
}

/// Global busy indicator shown while a navigation is pending.
pub trait LoadingIndicator: Send + Sync {
    fn start(&self);
    fn finish(&self);
}

/// Receives the page title after each navigation.
pub trait TitleSink: Send + Sync {
    fn set_title(&self, title: &str);
}

/// [`TitleSink`] that remembers the last title.
///
/// The GPUI integration copies it onto the window with
/// [`apply_title`](crate::context::apply_title).
#[derive(Debug, Default)]
pub struct DocumentTitle {
    title: RwLock<Option<String>>,
}

impl DocumentTitle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> Option<String> {
        self.title.read().clone()
    }
}

impl TitleSink for DocumentTitle {
    fn set_title(&self, title: &str) {
        *self.title.write() = Some(title.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_info_from_backend_json() {
        let info: UserInfo = serde_json::from_str(
            r#"{"id":"7","username":"admin","permissions":["system"],"realName":"Ada"}"#,
        )
        .unwrap();
        assert_eq!(info.username.as_deref(), Some("admin"));
        assert_eq!(info.permissions, vec!["system".to_string()]);
        assert_eq!(info.raw.get("realName"), Some(&serde_json::json!("Ada")));

        let empty: UserInfo = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, UserInfo::default());
    }

    #[test]
    fn test_memory_token_storage() {
        let storage = MemoryTokenStorage::new();
        assert_eq!(storage.get("ACCESS-TOKEN"), None);
        storage.set("ACCESS-TOKEN", "abc");
        assert_eq!(storage.get("ACCESS-TOKEN").as_deref(), Some("abc"));
        assert_eq!(storage.remove("ACCESS-TOKEN").as_deref(), Some("abc"));
        assert_eq!(storage.get("ACCESS-TOKEN"), None);
    }

    #[test]
    fn test_document_title() {
        let title = DocumentTitle::new();
        assert_eq!(title.get(), None);
        title.set_title("Dashboard");
        assert_eq!(title.get().as_deref(), Some("Dashboard"));
    }
}
