//! Caches owned by a [`Library`](crate::Library).
//!
//! All caches share one [`Generation`], so a single bump invalidates
//! file contents, the path index, search results and titles together.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use docbox_cache::{CacheStats, Generation, LazyCache};

/// Cache key of the path index snapshot.
pub(crate) const INDEX_KEY: &str = "doc_files_recursive";

/// Counters of every cache in a [`Library`](crate::Library).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LibraryStats {
    /// Current cache generation.
    pub generation: u64,
    /// File contents, keyed by physical path.
    pub contents: CacheStats,
    /// Path index snapshot.
    pub index: CacheStats,
    /// Search results, keyed by keyword.
    pub searches: CacheStats,
    /// Resolved titles, keyed by document path.
    pub titles: CacheStats,
}

pub(crate) struct LibraryCache {
    generation: Generation,
    pub(crate) contents: LazyCache<Arc<str>>,
    pub(crate) index: LazyCache<Arc<[PathBuf]>>,
    pub(crate) searches: LazyCache<Arc<[String]>>,
    pub(crate) titles: LazyCache<String>,
}

impl LibraryCache {
    pub(crate) fn new(ttl: Option<Duration>) -> Self {
        let generation = Generation::new();
        Self {
            contents: with_ttl(LazyCache::new("contents", &generation), ttl),
            index: with_ttl(LazyCache::new("index", &generation), ttl),
            searches: with_ttl(LazyCache::new("searches", &generation), ttl),
            titles: with_ttl(LazyCache::new("titles", &generation), ttl),
            generation,
        }
    }

    /// Discard every cached value.
    ///
    /// Returns the new generation.
    pub(crate) fn invalidate(&self) -> u64 {
        let generation = self.generation.bump();
        self.contents.purge_stale();
        self.index.purge_stale();
        self.searches.purge_stale();
        self.titles.purge_stale();
        generation
    }

    pub(crate) fn stats(&self) -> LibraryStats {
        LibraryStats {
            generation: self.generation.current(),
            contents: self.contents.stats(),
            index: self.index.stats(),
            searches: self.searches.stats(),
            titles: self.titles.stats(),
        }
    }
}

fn with_ttl<V: Clone>(cache: LazyCache<V>, ttl: Option<Duration>) -> LazyCache<V> {
    match ttl {
        Some(ttl) => cache.with_ttl(ttl),
        None => cache,
    }
}
