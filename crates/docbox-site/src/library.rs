//! Cached access to a document tree.
//!
//! Provides [`Library`], which serves document content, keyword search,
//! breadcrumb titles and rendered HTML from a [`Storage`] backend, and
//! refreshes the tree through a [`Puller`].
//!
//! # Thread Safety
//!
//! `Library` is designed for concurrent access:
//! - Every lookup goes through a single-flight cache, so concurrent misses
//!   on one key run the computation once
//! - `sync()` is serialized by a mutex; only one pull runs at a time
//! - Invalidation is a generation bump; readers never see values from an
//!   earlier generation once `sync()` has returned

use std::path::{Component, Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use docbox_storage::{Storage, StorageErrorKind, physical_path};
use docbox_vcs::{PullError, Puller};

use crate::cache::{INDEX_KEY, LibraryCache, LibraryStats};
use crate::outline;
use crate::search::{find_matches, search_key};

/// Configuration for [`Library`].
#[derive(Clone, Debug)]
pub struct LibraryConfig {
    /// Document path of the table of contents (default: `menus`).
    pub menu: String,
    /// Expire cached values after this long, in addition to sync
    /// invalidation. `None` keeps them until the next successful sync.
    pub cache_ttl: Option<Duration>,
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            menu: "menus".to_owned(),
            cache_ttl: None,
        }
    }
}

/// Cached document library.
///
/// # Example
///
/// ```ignore
/// use std::path::PathBuf;
/// use std::sync::Arc;
/// use docbox_site::{Library, LibraryConfig};
/// use docbox_storage::FsStorage;
/// use docbox_vcs::GitPuller;
///
/// let storage = Arc::new(FsStorage::new(PathBuf::from("docs")));
/// let puller = Arc::new(GitPuller::new("origin", "master"));
/// let library = Library::new(storage, puller, LibraryConfig::default());
///
/// let hits = library.search("install");
/// let title = library.resolve_title("guide/intro");
/// ```
pub struct Library {
    storage: Arc<dyn Storage>,
    puller: Arc<dyn Puller>,
    menu: String,
    cache: LibraryCache,
    /// Serializes `sync()` calls.
    sync_lock: Mutex<()>,
}

impl Library {
    /// Create a library over `storage`, synced by `puller`.
    #[must_use]
    pub fn new(storage: Arc<dyn Storage>, puller: Arc<dyn Puller>, config: LibraryConfig) -> Self {
        Self {
            storage,
            puller,
            menu: config.menu,
            cache: LibraryCache::new(config.cache_ttl),
            sync_lock: Mutex::new(()),
        }
    }

    /// Document root.
    #[must_use]
    pub fn root(&self) -> &Path {
        self.storage.root()
    }

    /// Full text of the file at `path`.
    ///
    /// Returns an empty string if the file does not exist or cannot be read.
    pub fn get_content(&self, path: &Path) -> Arc<str> {
        let key = path.to_string_lossy();
        self.cache.contents.get_or_compute(&key, || {
            match self.storage.read(path) {
                Ok(content) => Arc::from(content),
                Err(e) if *e.kind() == StorageErrorKind::NotFound => {
                    tracing::debug!(path = %path.display(), "document not found");
                    Arc::from("")
                }
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "failed to read document");
                    Arc::from("")
                }
            }
        })
    }

    /// Raw markdown of a document (e.g., `guide/intro`).
    ///
    /// Paths with `..` segments are treated as missing documents.
    pub fn get_markdown(&self, document_path: &str) -> Arc<str> {
        if Path::new(document_path)
            .components()
            .any(|c| matches!(c, Component::ParentDir))
        {
            tracing::debug!(document_path, "rejected document path with parent segment");
            return Arc::from("");
        }
        self.get_content(&physical_path(self.root(), document_path))
    }

    /// Rendered HTML of a document.
    pub fn get_parsed(&self, document_path: &str) -> String {
        docbox_renderer::render(&self.get_markdown(document_path))
    }

    /// Every markdown file under the root, in scan order.
    ///
    /// The snapshot is taken once per cache generation; later filesystem
    /// changes are not observed until the next successful [`sync`](Self::sync).
    pub fn list_documents(&self) -> Arc<[PathBuf]> {
        self.cache.index.get_or_compute(INDEX_KEY, || {
            match self.storage.scan() {
                Ok(files) => {
                    tracing::debug!(count = files.len(), "indexed documents");
                    Arc::from(files)
                }
                Err(e) => {
                    tracing::warn!(error = %e, "failed to index documents");
                    Arc::from(Vec::new())
                }
            }
        })
    }

    /// Document paths whose content contains `keyword`, in index order.
    pub fn search(&self, keyword: &str) -> Arc<[String]> {
        self.cache.searches.get_or_compute(&search_key(keyword), || {
            let files = self.list_documents();
            let matches = find_matches(self.root(), &files, keyword, |path| {
                self.get_content(path)
            });
            tracing::info!(keyword, matches = matches.len(), "searched documents");
            Arc::from(matches)
        })
    }

    /// Breadcrumb title of a document, deepest label first (e.g.,
    /// `Intro - Guide`). Empty if the table of contents does not list it.
    pub fn resolve_title(&self, document_path: &str) -> String {
        let document_path = docbox_storage::normalize_document_path(document_path);
        self.cache.titles.get_or_compute(document_path, || {
            let menu = self.get_markdown(&self.menu);
            outline::resolve_title(&menu, document_path)
        })
    }

    /// Pull upstream changes and invalidate every cache on success.
    ///
    /// Returns `false` (leaving caches intact) if the pull fails.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn sync(&self) -> bool {
        self.try_sync().is_ok()
    }

    /// Like [`sync`](Self::sync), but returns the new cache generation or
    /// the pull failure.
    ///
    /// # Errors
    ///
    /// Returns the [`PullError`] if the pull fails. Caches are left intact.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn try_sync(&self) -> Result<u64, PullError> {
        let _guard = self.sync_lock.lock().unwrap();

        match self.puller.pull(self.root()) {
            Ok(()) => {
                let generation = self.cache.invalidate();
                tracing::info!(root = %self.root().display(), generation, "synced documents");
                Ok(generation)
            }
            Err(e) => {
                tracing::warn!(root = %self.root().display(), error = %e, "sync failed");
                Err(e)
            }
        }
    }

    /// Snapshot of cache counters.
    #[must_use]
    pub fn stats(&self) -> LibraryStats {
        self.cache.stats()
    }
}
