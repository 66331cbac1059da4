//! Route resolution caching.
//!
//! [`ResolutionCache`] remembers which chain of records a path resolved to,
//! so repeated navigations to the same page skip the tree walk. It is gated
//! behind the `cache` feature and backed by the [`lru`] crate.
//!
//! The cache is keyed by path only (query and hash do not influence
//! matching) and must be cleared whenever a route is registered; the
//! [`RouteTable`](crate::RouteTable) does this itself.
//!
//! ```
//! use gpui_admin_router::cache::ResolutionCache;
//!
//! let mut cache = ResolutionCache::new();
//! assert!(cache.get("/dashboard").is_none());
//! cache.insert("/dashboard".to_string(), None);
//! assert!(cache.get("/dashboard").is_some());
//! assert_eq!(cache.stats().hits, 1);
//! assert_eq!(cache.stats().misses, 1);
//! ```

use crate::location::MatchedRoute;
use crate::params::RouteParams;
use crate::trace_log;
use lru::LruCache;
use std::num::NonZeroUsize;

/// A cached resolution; `None` records that nothing matched.
pub type CachedResolution = Option<(Vec<MatchedRoute>, RouteParams)>;

/// Hit/miss counters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: usize,
    pub misses: usize,
    /// Number of [`ResolutionCache::clear`] calls.
    pub invalidations: usize,
}

impl CacheStats {
    /// Hit rate in `0.0..=1.0`; `0.0` before the first lookup.
    #[allow(clippy::cast_precision_loss)]
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// LRU cache of path resolutions.
#[derive(Debug)]
pub struct ResolutionCache {
    entries: LruCache<String, CachedResolution>,
    stats: CacheStats,
}

impl ResolutionCache {
    const DEFAULT_CAPACITY: usize = 256;

    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// Create a cache holding at most `capacity` paths (minimum 1).
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: LruCache::new(capacity),
            stats: CacheStats::default(),
        }
    }

    pub fn get(&mut self, path: &str) -> Option<CachedResolution> {
        if let Some(hit) = self.entries.get(path) {
            self.stats.hits += 1;
            trace_log!("Resolution cache hit for '{}'", path);
            Some(hit.clone())
        } else {
            self.stats.misses += 1;
            None
        }
    }

    pub fn insert(&mut self, path: String, resolution: CachedResolution) {
        self.entries.put(path, resolution);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.stats.invalidations += 1;
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn stats(&self) -> &CacheStats {
        &self.stats
    }
}

impl Default for ResolutionCache {
    fn default() -> Self {
        Self::new()
    }
}
