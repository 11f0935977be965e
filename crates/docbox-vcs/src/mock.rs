//! Mock puller for testing.

use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

use crate::{PullError, Puller};

/// In-memory [`Puller`] that records calls instead of running `git`.
///
/// Succeeds by default; [`failing`](Self::failing) makes every pull return
/// [`PullError::Failed`]. An optional hook runs on each successful pull so
/// tests can mutate storage as if upstream changed.
pub struct MockPuller {
    succeed: AtomicBool,
    delay: Option<Duration>,
    calls: AtomicUsize,
    last_dir: Mutex<Option<PathBuf>>,
    on_pull: Option<Box<dyn Fn() + Send + Sync>>,
}

impl Default for MockPuller {
    fn default() -> Self {
        Self {
            succeed: AtomicBool::new(true),
            delay: None,
            calls: AtomicUsize::new(0),
            last_dir: Mutex::new(None),
            on_pull: None,
        }
    }
}

impl std::fmt::Debug for MockPuller {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockPuller")
            .field("succeed", &self.succeed)
            .field("calls", &self.calls)
            .finish_non_exhaustive()
    }
}

impl MockPuller {
    /// Create a puller whose pulls succeed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a puller whose pulls fail.
    #[must_use]
    pub fn failing() -> Self {
        let puller = Self::default();
        puller.set_succeed(false);
        puller
    }

    /// Sleep for `delay` inside every pull.
    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Run `hook` on each successful pull.
    #[must_use]
    pub fn on_pull(mut self, hook: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_pull = Some(Box::new(hook));
        self
    }

    /// Switch between succeeding and failing pulls.
    pub fn set_succeed(&self, succeed: bool) {
        self.succeed.store(succeed, Ordering::SeqCst);
    }

    /// Number of pulls attempted.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Directory passed to the most recent pull.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn last_dir(&self) -> Option<PathBuf> {
        self.last_dir.lock().unwrap().clone()
    }
}

impl Puller for MockPuller {
    fn pull(&self, dir: &Path) -> Result<(), PullError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_dir.lock().unwrap() = Some(dir.to_path_buf());
        if let Some(delay) = self.delay {
            std::thread::sleep(delay);
        }

        if !self.succeed.load(Ordering::SeqCst) {
            return Err(PullError::Failed {
                code: Some(1),
                stderr: "mock pull failure".to_owned(),
            });
        }
        if let Some(hook) = &self.on_pull {
            hook();
        }
        Ok(())
    }
}
