//! Document storage abstraction for docbox.
//!
//! This crate provides a [`Storage`] trait that hides where markdown documents
//! live, so the caching and search layers can be tested without touching the
//! real filesystem.
//!
//! # Architecture
//!
//! The crate provides:
//! - [`Storage`] trait with `root()`, `scan()` and `read()` methods
//! - [`FsStorage`] implementation reading a directory tree of `*.md` files
//! - [`MockStorage`] for testing (behind `mock` feature flag)
//! - Path helpers mapping between document paths (`guide/intro`) and
//!   physical paths (`{root}/guide/intro.md`)
//!
//! # Example
//!
//! ```ignore
//! use std::path::PathBuf;
//! use docbox_storage::{FsStorage, Storage};
//!
//! let storage = FsStorage::new(PathBuf::from("docs"));
//! for path in storage.scan()? {
//!     println!("{}", path.display());
//! }
//! ```

mod fs;
#[cfg(feature = "mock")]
mod mock;
mod paths;
mod storage;

pub use fs::FsStorage;
#[cfg(feature = "mock")]
pub use mock::MockStorage;
pub use paths::{document_path, normalize_document_path, physical_path};
pub use storage::{Storage, StorageError, StorageErrorKind};
