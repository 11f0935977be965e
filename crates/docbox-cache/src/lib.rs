//! Generation-scoped cache for docbox.
//!
//! This crate provides the single concurrency-sensitive primitive of the
//! documentation core: a keyed cache that computes every value at most once
//! per cache generation, no matter how many callers miss at the same time.
//!
//! - [`Generation`]: Shared, monotonically increasing generation counter
//! - [`LazyCache`]: Keyed single-flight cache bound to a [`Generation`]
//! - [`CacheStats`]: Hit and computation counters for a cache
//!
//! Several caches can share one [`Generation`]. Bumping it invalidates all of
//! them at once: every entry computed under an older generation becomes
//! invisible to lookups that start after the bump.
//!
//! # Example
//!
//! ```
//! use docbox_cache::{Generation, LazyCache};
//!
//! let generation = Generation::new();
//! let titles: LazyCache<String> = LazyCache::new("titles", &generation);
//!
//! let title = titles.get_or_compute("guide", || "Guide".to_owned());
//! assert_eq!(title, "Guide");
//!
//! // Served from cache, the closure is not called again
//! let title = titles.get_or_compute("guide", || unreachable!());
//! assert_eq!(title, "Guide");
//!
//! generation.bump();
//! assert_eq!(titles.get("guide"), None);
//! ```

mod generation;
mod lazy;

pub use generation::Generation;
pub use lazy::{CacheStats, LazyCache};
