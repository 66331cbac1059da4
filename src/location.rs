//! Resolved locations and navigation targets.
//!
//! A [`NavigationTarget`] is where someone *asks* to go: a path with an
//! optional query and hash, pushed or replacing the current entry. The
//! [`RouteTable`](crate::RouteTable) resolves it into a [`Location`], which
//! additionally knows the matched route chain, the leaf's name and meta, and
//! the captured parameters. Guards look at `Location`s.

use crate::components::RouteComponent;
use crate::meta::RouteMeta;
use crate::params::{QueryParams, RouteParams};
use crate::route::RouteRecord;

/// Split `"/path?query#hash"` into its three parts.
pub fn split_url(url: &str) -> (&str, Option<&str>, Option<&str>) {
    let (rest, hash) = match url.split_once('#') {
        Some((rest, hash)) => (rest, Some(hash)),
        None => (url, None),
    };
    let (path, query) = match rest.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (rest, None),
    };
    (path, query, hash)
}

fn format_url(path: &str, query: &QueryParams, hash: Option<&str>) -> String {
    let mut url = path.to_string();
    if !query.is_empty() {
        url.push('?');
        url.push_str(&query.to_query_string());
    }
    if let Some(hash) = hash {
        url.push('#');
        url.push_str(hash);
    }
    url
}

/// A navigation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationTarget {
    pub path: String,
    pub query: QueryParams,
    pub hash: Option<String>,
    /// Replace the current history entry instead of pushing.
    pub replace: bool,
}

impl NavigationTarget {
    /// Parse a target from a URL (`"/path?query#hash"`).
    ///
    /// ```
    /// use gpui_admin_router::NavigationTarget;
    ///
    /// let target = NavigationTarget::from_url("/login?redirect=%2Freports");
    /// assert_eq!(target.path, "/login");
    /// assert_eq!(target.query.get("redirect"), Some("/reports"));
    /// assert!(!target.replace);
    /// ```
    pub fn from_url(url: &str) -> Self {
        let (path, query, hash) = split_url(url);
        Self {
            path: path.to_string(),
            query: query.map(QueryParams::from_query_string).unwrap_or_default(),
            hash: hash.map(str::to_string),
            replace: false,
        }
    }

    /// Target reproducing a resolved location exactly (path, query, hash).
    pub fn from_location(location: &Location) -> Self {
        Self {
            path: location.path.clone(),
            query: location.query.clone(),
            hash: location.hash.clone(),
            replace: false,
        }
    }

    pub fn replace(mut self, replace: bool) -> Self {
        self.replace = replace;
        self
    }

    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.set(key, value);
        self
    }

    /// Path plus encoded query and hash.
    pub fn full_path(&self) -> String {
        format_url(&self.path, &self.query, self.hash.as_deref())
    }
}

impl From<&str> for NavigationTarget {
    fn from(url: &str) -> Self {
        Self::from_url(url)
    }
}

impl From<String> for NavigationTarget {
    fn from(url: String) -> Self {
        Self::from_url(&url)
    }
}

/// One record of a matched chain, without its children.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchedRoute {
    pub path: String,
    pub name: Option<String>,
    pub component: RouteComponent,
    pub meta: RouteMeta,
    pub redirect: Option<String>,
}

impl MatchedRoute {
    pub fn from_record(record: &RouteRecord) -> Self {
        Self {
            path: record.path.clone(),
            name: record.name.clone(),
            component: record.component.clone(),
            meta: record.meta.clone(),
            redirect: record.redirect.clone(),
        }
    }
}

/// A resolved navigation endpoint.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Location {
    pub path: String,
    pub query: QueryParams,
    pub hash: Option<String>,
    /// Name of the leaf record.
    pub name: Option<String>,
    /// Meta of the leaf record.
    pub meta: RouteMeta,
    pub params: RouteParams,
    /// Root-to-leaf chain of matched records; empty when nothing matched.
    pub matched: Vec<MatchedRoute>,
}

impl Location {
    /// A location that matched nothing.
    pub fn unmatched(url: &str) -> Self {
        let target = NavigationTarget::from_url(url);
        Self {
            path: target.path,
            query: target.query,
            hash: target.hash,
            ..Self::default()
        }
    }

    pub fn is_matched(&self) -> bool {
        !self.matched.is_empty()
    }

    /// Path plus encoded query and hash.
    pub fn full_path(&self) -> String {
        format_url(&self.path, &self.query, self.hash.as_deref())
    }

    /// The matched record carrying this location's name.
    pub fn matched_named(&self) -> Option<&MatchedRoute> {
        let name = self.name.as_deref()?;
        self.matched
            .iter()
            .find(|route| route.name.as_deref() == Some(name))
    }
}
