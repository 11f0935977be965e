//! Repository pull for docbox document roots.
//!
//! The document root is a working copy of a version-control repository.
//! Syncing it means running the external `git` executable; no VCS protocol is
//! implemented here. The [`Puller`] trait lets the library be tested with
//! [`MockPuller`] (behind the `mock` feature) instead of a real repository.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use docbox_vcs::{GitPuller, Puller};
//!
//! let puller = GitPuller::new("origin", "master");
//! puller.pull(Path::new("docs"))?;
//! ```

mod git;
#[cfg(feature = "mock")]
mod mock;

use std::path::{Path, PathBuf};

pub use git::GitPuller;
#[cfg(feature = "mock")]
pub use mock::MockPuller;

/// Error returned when a pull does not complete.
#[derive(Debug, thiserror::Error)]
pub enum PullError {
    /// The executable could not be started (missing binary, missing directory).
    #[error("failed to run {}: {source}", program.display())]
    Spawn {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The pull ran and exited unsuccessfully.
    #[error("pull exited with {}: {stderr}", code.map_or_else(|| "signal".to_owned(), |c| format!("status {c}")))]
    Failed { code: Option<i32>, stderr: String },
}

/// Updates a working copy from its upstream.
pub trait Puller: Send + Sync {
    /// Pull upstream changes into `dir`.
    ///
    /// # Errors
    ///
    /// Returns [`PullError`] if the pull could not be started or failed.
    fn pull(&self, dir: &Path) -> Result<(), PullError>;
}
