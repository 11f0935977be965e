//! Cached document library for docbox.
//!
//! This crate provides:
//! - [`Library`]: cached content, keyword search, breadcrumb titles and
//!   rendered HTML over a [`Storage`](docbox_storage::Storage) backend
//! - [`resolve_title`]: breadcrumb title lookup in a table-of-contents document
//!
//! Every cache of a library shares one generation. A successful
//! [`Library::sync`] bumps it, and the path index, search results, titles and
//! file contents are rebuilt lazily on next access.
//!
//! # Quick Start
//!
//! ```no_run
//! use std::path::PathBuf;
//! use std::sync::Arc;
//! use docbox_site::{Library, LibraryConfig};
//! use docbox_storage::FsStorage;
//! use docbox_vcs::GitPuller;
//!
//! let storage = Arc::new(FsStorage::new(PathBuf::from("docs")));
//! let puller = Arc::new(GitPuller::new("origin", "master"));
//! let library = Library::new(storage, puller, LibraryConfig::default());
//!
//! for path in library.search("install").iter() {
//!     println!("{path}: {}", library.resolve_title(path));
//! }
//! ```

mod cache;
mod library;
mod outline;
mod search;

pub use cache::LibraryStats;
pub use docbox_cache::CacheStats;
pub use docbox_vcs::PullError;
pub use library::{Library, LibraryConfig};
pub use outline::{OutlineNode, breadcrumb, resolve_title};
