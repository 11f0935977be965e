//! Keyed single-flight cache.
//!
//! Each key maps to a slot tagged with the generation it was created in. The
//! slot holds a [`OnceLock`], so when several callers miss on the same key at
//! the same time exactly one of them runs the computation and the others
//! block until its value is available.
//!
//! A slot is reused only while its generation equals the current one (and,
//! if a time-to-live is configured, while it is younger than the TTL). A
//! stale slot is replaced on the next lookup; computations still running in
//! a replaced slot finish and hand their value only to the callers that had
//! already joined them.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, OnceLock};
use std::time::{Duration, Instant};

use crate::Generation;

/// Snapshot of cache counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Lookups answered by an already computed (or in-flight) value.
    pub hits: u64,
    /// Number of times a value was computed.
    pub computations: u64,
}

/// A cache entry for one key in one generation.
struct Slot<V> {
    generation: u64,
    created: Instant,
    value: OnceLock<V>,
}

impl<V> Slot<V> {
    fn new(generation: u64) -> Self {
        Self {
            generation,
            created: Instant::now(),
            value: OnceLock::new(),
        }
    }

    fn is_fresh(&self, generation: u64, ttl: Option<Duration>) -> bool {
        self.generation == generation && ttl.is_none_or(|ttl| self.created.elapsed() < ttl)
    }
}

/// Keyed cache computing each value at most once per generation.
///
/// Values are cloned out of the cache, so large values should be wrapped in
/// an [`Arc`].
///
/// # Thread Safety
///
/// - The slot map is guarded by a [`Mutex`] held only for slot lookup
/// - Computations run outside the map lock, inside the slot's [`OnceLock`]
/// - Concurrent misses on one key collapse into a single computation
pub struct LazyCache<V> {
    name: String,
    generation: Generation,
    ttl: Option<Duration>,
    slots: Mutex<HashMap<String, Arc<Slot<V>>>>,
    hits: AtomicU64,
    computations: AtomicU64,
}

impl<V: Clone> LazyCache<V> {
    /// Create an empty cache bound to `generation`.
    ///
    /// # Arguments
    ///
    /// * `name` - Cache name used in log output (e.g., "search")
    /// * `generation` - Shared generation counter controlling invalidation
    #[must_use]
    pub fn new(name: impl Into<String>, generation: &Generation) -> Self {
        Self {
            name: name.into(),
            generation: generation.clone(),
            ttl: None,
            slots: Mutex::new(HashMap::new()),
            hits: AtomicU64::new(0),
            computations: AtomicU64::new(0),
        }
    }

    /// Expire entries after `ttl` in addition to generation invalidation.
    #[must_use]
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = Some(ttl);
        self
    }

    /// Cache name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Return the cached value for `key`, computing it on a miss.
    ///
    /// If another caller is already computing the value for `key` in the
    /// current generation, this call blocks until that computation finishes
    /// and returns its result instead of computing again.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn get_or_compute<F>(&self, key: &str, compute: F) -> V
    where
        F: FnOnce() -> V,
    {
        let slot = self.slot(key);
        let mut computed = false;
        let value = slot.value.get_or_init(|| {
            computed = true;
            self.computations.fetch_add(1, Ordering::Relaxed);
            tracing::debug!(cache = %self.name, key, generation = slot.generation, "cache miss");
            compute()
        });
        if !computed {
            self.hits.fetch_add(1, Ordering::Relaxed);
        }
        value.clone()
    }

    /// Return the cached value for `key` without computing it.
    ///
    /// Returns `None` if the key is absent, stale, expired or still being
    /// computed.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<V> {
        let slots = self.slots.lock().unwrap();
        let generation = self.generation.current();
        slots
            .get(key)
            .filter(|slot| slot.is_fresh(generation, self.ttl))
            .and_then(|slot| slot.value.get().cloned())
    }

    /// Drop every slot that no longer belongs to the current generation.
    ///
    /// Lookups already ignore stale slots; purging only releases their memory.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn purge_stale(&self) {
        let mut slots = self.slots.lock().unwrap();
        let generation = self.generation.current();
        let before = slots.len();
        slots.retain(|_, slot| slot.is_fresh(generation, self.ttl));
        tracing::debug!(
            cache = %self.name,
            purged = before - slots.len(),
            "purged stale cache slots"
        );
    }

    /// Number of slots held, including stale ones not yet purged.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.lock().unwrap().len()
    }

    /// Whether the cache holds no slots.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Snapshot of the hit and computation counters.
    #[must_use]
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            computations: self.computations.load(Ordering::Relaxed),
        }
    }

    /// Find the live slot for `key`, replacing it if stale.
    ///
    /// The generation is read under the map lock so a slot created here is
    /// never older than one inserted concurrently by another caller.
    fn slot(&self, key: &str) -> Arc<Slot<V>> {
        let mut slots = self.slots.lock().unwrap();
        let generation = self.generation.current();
        if let Some(slot) = slots.get(key)
            && slot.is_fresh(generation, self.ttl)
        {
            return Arc::clone(slot);
        }
        let slot = Arc::new(Slot::new(generation));
        slots.insert(key.to_owned(), Arc::clone(&slot));
        slot
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Barrier;
    use std::sync::atomic::AtomicUsize;
    use std::sync::mpsc;
    use std::thread;

    use pretty_assertions::assert_eq;

    use super::*;

    fn cache() -> (Generation, LazyCache<String>) {
        let generation = Generation::new();
        let cache = LazyCache::new("test", &generation);
        (generation, cache)
    }

    #[test]
    fn test_computes_once_per_key() {
        let (_generation, cache) = cache();
        let calls = AtomicUsize::new(0);

        for _ in 0..3 {
            let value = cache.get_or_compute("k", || {
                calls.fetch_add(1, Ordering::SeqCst);
                "v".to_owned()
            });
            assert_eq!(value, "v");
        }

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(
            cache.stats(),
            CacheStats {
                hits: 2,
                computations: 1
            }
        );
    }

    #[test]
    fn test_keys_are_independent() {
        let (_generation, cache) = cache();

        assert_eq!(cache.get_or_compute("a", || "1".to_owned()), "1");
        assert_eq!(cache.get_or_compute("b", || "2".to_owned()), "2");
        assert_eq!(cache.get("a"), Some("1".to_owned()));
        assert_eq!(cache.get("b"), Some("2".to_owned()));
        assert_eq!(cache.stats().computations, 2);
    }

    #[test]
    fn test_get_does_not_compute() {
        let (_generation, cache) = cache();

        assert_eq!(cache.get("missing"), None);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_bump_forces_recomputation() {
        let (generation, cache) = cache();

        assert_eq!(cache.get_or_compute("k", || "old".to_owned()), "old");
        generation.bump();

        assert_eq!(cache.get("k"), None);
        assert_eq!(cache.get_or_compute("k", || "new".to_owned()), "new");
        assert_eq!(cache.stats().computations, 2);
    }

    #[test]
    fn test_bump_invalidates_all_caches_sharing_generation() {
        let generation = Generation::new();
        let first: LazyCache<u32> = LazyCache::new("first", &generation);
        let second: LazyCache<u32> = LazyCache::new("second", &generation);

        first.get_or_compute("k", || 1);
        second.get_or_compute("k", || 2);
        generation.bump();

        assert_eq!(first.get("k"), None);
        assert_eq!(second.get("k"), None);
    }

    #[test]
    fn test_bump_during_computation() {
        let generation = Generation::new();
        let cache: LazyCache<u32> = LazyCache::new("test", &generation);
        let (started_tx, started_rx) = mpsc::channel();
        let (release_tx, release_rx) = mpsc::channel::<()>();

        thread::scope(|s| {
            let cache = &cache;
            let in_flight = s.spawn(move || {
                cache.get_or_compute("k", || {
                    started_tx.send(()).unwrap();
                    release_rx.recv().unwrap();
                    1
                })
            });

            started_rx.recv().unwrap();
            generation.bump();

            // A lookup after the bump does not wait for the old computation.
            assert_eq!(cache.get_or_compute("k", || 2), 2);

            release_tx.send(()).unwrap();
            assert_eq!(in_flight.join().unwrap(), 1);
        });

        assert_eq!(cache.get("k"), Some(2));
        assert_eq!(cache.stats().computations, 2);
    }

    #[test]
    fn test_purge_stale_drops_old_slots() {
        let (generation, cache) = cache();

        cache.get_or_compute("a", || "1".to_owned());
        cache.get_or_compute("b", || "2".to_owned());
        assert_eq!(cache.len(), 2);

        generation.bump();
        cache.purge_stale();
        assert!(cache.is_empty());
    }

    #[test]
    fn test_purge_keeps_current_slots() {
        let (generation, cache) = cache();

        cache.get_or_compute("old", || "1".to_owned());
        generation.bump();
        cache.get_or_compute("new", || "2".to_owned());
        cache.purge_stale();

        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get("new"), Some("2".to_owned()));
    }

    #[test]
    fn test_ttl_expires_entries() {
        let generation = Generation::new();
        let cache: LazyCache<u32> =
            LazyCache::new("ttl", &generation).with_ttl(Duration::from_millis(20));

        cache.get_or_compute("k", || 1);
        assert_eq!(cache.get("k"), Some(1));

        thread::sleep(Duration::from_millis(40));
        assert_eq!(cache.get("k"), None);
        assert_eq!(cache.get_or_compute("k", || 2), 2);
    }

    #[test]
    fn test_concurrent_misses_compute_once() {
        const CALLERS: usize = 16;

        let (_generation, cache) = cache();
        let calls = AtomicUsize::new(0);
        let barrier = Barrier::new(CALLERS);

        let results: Vec<String> = thread::scope(|scope| {
            let handles: Vec<_> = (0..CALLERS)
                .map(|_| {
                    scope.spawn(|| {
                        barrier.wait();
                        cache.get_or_compute("shared", || {
                            calls.fetch_add(1, Ordering::SeqCst);
                            thread::sleep(Duration::from_millis(50));
                            "result".to_owned()
                        })
                    })
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(results.iter().all(|r| r == "result"));
        assert_eq!(cache.stats().computations, 1);
        assert_eq!(cache.stats().hits, (CALLERS - 1) as u64);
    }

    #[test]
    fn test_name() {
        let (_generation, cache) = cache();
        assert_eq!(cache.name(), "test");
    }
}
