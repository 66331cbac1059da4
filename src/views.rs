//! View module index.
//!
//! The application registers every view it ships under a file-like key
//! (`"../views/dashboard/index.rs"`), each paired with a [`ViewLoader`]. A
//! backend component identifier such as `"dashboard/index"` is then matched
//! against the keys with the views prefix and the extension removed.
//!
//! Matching is exact and case-sensitive:
//!
//! - one matching key → its loader ([`ViewMatch::Found`]);
//! - no matching key → [`ViewMatch::Missing`];
//! - several keys differing only by extension → [`ViewMatch::Ambiguous`].
//!   This is a mistake in the view tree and is reported with a warning.
//!
//! ```
//! use gpui::{div, IntoElement};
//! use gpui_admin_router::{view_fn, ViewMatch, ViewModuleIndex};
//!
//! let index = ViewModuleIndex::builder()
//!     .module("../views/dashboard/index.rs", view_fn(|_, _| div().into_any_element()))
//!     .build();
//!
//! assert!(matches!(index.match_view("dashboard/index"), ViewMatch::Found(_)));
//! assert!(matches!(index.match_view("dashboard"), ViewMatch::Missing));
//! ```

use crate::warn_log;
use gpui::{AnyElement, App, Window};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::{Arc, OnceLock};

/// Default prefix stripped from module keys.
pub const DEFAULT_VIEWS_PREFIX: &str = "../views";

/// Produces the element for a view.
pub type ViewLoader = Arc<dyn Fn(&mut Window, &mut App) -> AnyElement + Send + Sync>;

/// Wrap a closure or function as a [`ViewLoader`].
pub fn view_fn<F>(f: F) -> ViewLoader
where
    F: Fn(&mut Window, &mut App) -> AnyElement + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Result of looking up a component identifier.
#[derive(Clone)]
pub enum ViewMatch {
    Found(ViewLoader),
    Missing,
    /// Several modules share the identifier; holds their keys.
    Ambiguous(Vec<String>),
}

impl fmt::Debug for ViewMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewMatch::Found(_) => f.write_str("Found(..)"),
            ViewMatch::Missing => f.write_str("Missing"),
            ViewMatch::Ambiguous(keys) => f.debug_tuple("Ambiguous").field(keys).finish(),
        }
    }
}

/// Immutable map of view modules, keyed by file path.
pub struct ViewModuleIndex {
    prefix: String,
    modules: BTreeMap<String, ViewLoader>,
    /// Component identifier → module keys, in key order.
    by_identifier: HashMap<String, Vec<String>>,
}

impl ViewModuleIndex {
    pub fn builder() -> ViewModuleIndexBuilder {
        ViewModuleIndexBuilder::new()
    }

    /// An index with no modules.
    pub fn empty() -> Self {
        Self::builder().build()
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// All module keys, sorted.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.modules.keys().map(String::as_str)
    }

    /// Match a component identifier against the index.
    pub fn match_view(&self, component: &str) -> ViewMatch {
        let id = component.trim_start_matches('/');
        match self.by_identifier.get(id).map(Vec::as_slice) {
            None | Some([]) => ViewMatch::Missing,
            Some([key]) => self
                .modules
                .get(key)
                .map_or(ViewMatch::Missing, |loader| ViewMatch::Found(loader.clone())),
            Some(keys) => ViewMatch::Ambiguous(keys.to_vec()),
        }
    }

    /// Like [`match_view`](Self::match_view), collapsing the result to an
    /// optional loader. Ambiguous matches are logged.
    pub fn resolve(&self, component: &str) -> Option<ViewLoader> {
        match self.match_view(component) {
            ViewMatch::Found(loader) => Some(loader),
            ViewMatch::Missing => None,
            ViewMatch::Ambiguous(keys) => {
                warn_log!(
                    "View '{}' is ambiguous: {:?}. Do not keep view files that differ only by extension in one directory",
                    component,
                    keys
                );
                None
            }
        }
    }

    /// Identifier a module key is matched under: prefix, leading `/` and
    /// extension removed.
    pub fn identifier_for(&self, key: &str) -> String {
        module_identifier(&self.prefix, key)
    }
}

impl fmt::Debug for ViewModuleIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewModuleIndex")
            .field("prefix", &self.prefix)
            .field("modules", &self.modules.keys().collect::<Vec<_>>())
            .finish()
    }
}

fn module_identifier(prefix: &str, key: &str) -> String {
    let relative = key.strip_prefix(prefix).unwrap_or(key);
    let relative = relative.trim_start_matches('/');
    let file_start = relative.rfind('/').map_or(0, |i| i + 1);
    match relative[file_start..].rfind('.') {
        Some(dot) => relative[..file_start + dot].to_string(),
        None => relative.to_string(),
    }
}

/// Builder for [`ViewModuleIndex`].
#[must_use]
pub struct ViewModuleIndexBuilder {
    prefix: String,
    modules: BTreeMap<String, ViewLoader>,
}

impl ViewModuleIndexBuilder {
    pub fn new() -> Self {
        Self {
            prefix: DEFAULT_VIEWS_PREFIX.to_string(),
            modules: BTreeMap::new(),
        }
    }

    /// Prefix removed from keys before matching. Defaults to `"../views"`.
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Register a view module. A later registration under the same key wins.
    pub fn module(mut self, key: impl Into<String>, loader: ViewLoader) -> Self {
        self.modules.insert(key.into(), loader);
        self
    }

    pub fn build(self) -> ViewModuleIndex {
        let mut by_identifier: HashMap<String, Vec<String>> = HashMap::new();
        for key in self.modules.keys() {
            by_identifier
                .entry(module_identifier(&self.prefix, key))
                .or_default()
                .push(key.clone());
        }
        ViewModuleIndex {
            prefix: self.prefix,
            modules: self.modules,
            by_identifier,
        }
    }
}

impl Default for ViewModuleIndexBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A [`ViewModuleIndex`] built on first use and shared afterwards.
pub struct LazyViewIndex {
    cell: OnceLock<ViewModuleIndex>,
    init: Box<dyn Fn() -> ViewModuleIndex + Send + Sync>,
}

impl LazyViewIndex {
    pub fn new<F>(init: F) -> Self
    where
        F: Fn() -> ViewModuleIndex + Send + Sync + 'static,
    {
        Self {
            cell: OnceLock::new(),
            init: Box::new(init),
        }
    }

    /// Wrap an index that is already built.
    pub fn ready(index: ViewModuleIndex) -> Self {
        let cell = OnceLock::new();
        let _ = cell.set(index);
        Self {
            cell,
            init: Box::new(ViewModuleIndex::empty),
        }
    }

    pub fn get(&self) -> &ViewModuleIndex {
        self.cell.get_or_init(|| (self.init)())
    }

    pub fn is_built(&self) -> bool {
        self.cell.get().is_some()
    }
}

impl fmt::Debug for LazyViewIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LazyViewIndex")
            .field("index", &self.cell.get())
            .finish_non_exhaustive()
    }
}
