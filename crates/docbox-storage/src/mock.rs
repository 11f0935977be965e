//! Mock storage implementation for testing.
//!
//! Provides [`MockStorage`] for unit testing without filesystem access.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::RwLock;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::paths::physical_path;
use crate::storage::{Storage, StorageError, StorageErrorKind};

/// Backend identifier for error messages.
const BACKEND: &str = "Mock";

/// Mock storage for testing.
///
/// Stores documents in memory under a fixed root (`/docs` unless changed
/// with [`with_root`](Self::with_root)). Files are keyed by physical path and
/// scanned in path order. Scan and read calls are counted so tests can
/// assert how often the cache layers reach storage.
///
/// # Example
///
/// ```ignore
/// use docbox_storage::{MockStorage, Storage};
///
/// let storage = MockStorage::new()
///     .with_document("guide", "# User Guide\n\nContent.");
///
/// let files = storage.scan().unwrap();
/// let content = storage.read(&files[0]).unwrap();
/// ```
#[derive(Debug)]
pub struct MockStorage {
    root: PathBuf,
    files: RwLock<BTreeMap<PathBuf, String>>,
    scans: AtomicUsize,
    reads: AtomicUsize,
}

impl Default for MockStorage {
    fn default() -> Self {
        Self {
            root: PathBuf::from("/docs"),
            files: RwLock::new(BTreeMap::new()),
            scans: AtomicUsize::new(0),
            reads: AtomicUsize::new(0),
        }
    }
}

impl MockStorage {
    /// Create a new empty mock storage rooted at `/docs`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different document root.
    #[must_use]
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }

    /// Add a document by document path (e.g., `guide/intro`).
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_document(self, document_path: &str, content: impl Into<String>) -> Self {
        self.set_document(document_path, content);
        self
    }

    /// Insert or replace a document after construction.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn set_document(&self, document_path: &str, content: impl Into<String>) {
        let path = physical_path(&self.root, document_path);
        self.files.write().unwrap().insert(path, content.into());
    }

    /// Remove a document.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn remove_document(&self, document_path: &str) {
        let path = physical_path(&self.root, document_path);
        self.files.write().unwrap().remove(&path);
    }

    /// Number of `scan()` calls so far.
    #[must_use]
    pub fn scan_count(&self) -> usize {
        self.scans.load(Ordering::SeqCst)
    }

    /// Number of `read()` calls so far.
    #[must_use]
    pub fn read_count(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }
}

impl Storage for MockStorage {
    fn root(&self) -> &Path {
        &self.root
    }

    fn scan(&self) -> Result<Vec<PathBuf>, StorageError> {
        self.scans.fetch_add(1, Ordering::SeqCst);
        Ok(self.files.read().unwrap().keys().cloned().collect())
    }

    fn read(&self, path: &Path) -> Result<String, StorageError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.files
            .read()
            .unwrap()
            .get(path)
            .cloned()
            .ok_or_else(|| {
                StorageError::new(StorageErrorKind::NotFound)
                    .with_path(path)
                    .with_backend(BACKEND)
            })
    }
}
