//! Shared cache generation counter.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Monotonically increasing cache generation.
///
/// Cloning a `Generation` yields another handle to the same counter, so a
/// single [`bump`](Self::bump) is observed by every cache built from any of
/// the handles.
#[derive(Clone, Debug, Default)]
pub struct Generation {
    counter: Arc<AtomicU64>,
}

impl Generation {
    /// Create a counter starting at generation 0.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current generation.
    #[must_use]
    pub fn current(&self) -> u64 {
        self.counter.load(Ordering::Acquire)
    }

    /// Start a new generation and return its number.
    ///
    /// Entries computed under earlier generations are never returned to
    /// lookups that begin after this call.
    pub fn bump(&self) -> u64 {
        self.counter.fetch_add(1, Ordering::AcqRel) + 1
    }
}
