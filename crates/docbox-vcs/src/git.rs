//! Pull through an external `git` executable.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::time::Instant;

use crate::{PullError, Puller};

/// Runs `<program> pull <remote> <branch>` in the document root.
///
/// Only the exit status is consumed; stderr is captured for the error
/// message and log output.
#[derive(Debug, Clone)]
pub struct GitPuller {
    program: PathBuf,
    remote: String,
    branch: String,
}

impl GitPuller {
    /// Create a puller for `remote`/`branch` using the `git` found on `PATH`.
    #[must_use]
    pub fn new(remote: impl Into<String>, branch: impl Into<String>) -> Self {
        Self {
            program: PathBuf::from("git"),
            remote: remote.into(),
            branch: branch.into(),
        }
    }

    /// Use a different executable instead of `git`.
    #[must_use]
    pub fn with_program(mut self, program: impl Into<PathBuf>) -> Self {
        self.program = program.into();
        self
    }

    /// Remote name.
    #[must_use]
    pub fn remote(&self) -> &str {
        &self.remote
    }

    /// Branch name.
    #[must_use]
    pub fn branch(&self) -> &str {
        &self.branch
    }
}

impl Puller for GitPuller {
    fn pull(&self, dir: &Path) -> Result<(), PullError> {
        let started_at = Instant::now();
        let output = Command::new(&self.program)
            .arg("pull")
            .arg(&self.remote)
            .arg(&self.branch)
            .current_dir(dir)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .output()
            .map_err(|source| PullError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(PullError::Failed {
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_owned(),
            });
        }

        tracing::debug!(
            dir = %dir.display(),
            remote = %self.remote,
            branch = %self.branch,
            elapsed = ?started_at.elapsed(),
            "pull finished"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_defaults_to_git() {
        let puller = GitPuller::new("origin", "master");
        assert_eq!(puller.program, PathBuf::from("git"));
        assert_eq!(puller.remote(), "origin");
        assert_eq!(puller.branch(), "master");
    }

    #[test]
    fn test_missing_program_is_spawn_error() {
        let dir = tempfile::tempdir().unwrap();
        let puller =
            GitPuller::new("origin", "master").with_program("docbox-no-such-program-xyz");

        let err = puller.pull(dir.path()).unwrap_err();

        assert!(matches!(err, PullError::Spawn { .. }));
        assert!(err.to_string().contains("docbox-no-such-program-xyz"));
    }

    #[test]
    fn test_missing_directory_is_spawn_error() {
        let puller = GitPuller::new("origin", "master");

        let err = puller
            .pull(Path::new("/nonexistent/docbox/root"))
            .unwrap_err();

        assert!(matches!(err, PullError::Spawn { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_zero_exit_is_success() {
        let dir = tempfile::tempdir().unwrap();
        let puller = GitPuller::new("origin", "master").with_program("true");

        assert!(puller.pull(dir.path()).is_ok());
    }

    #[cfg(unix)]
    #[test]
    fn test_non_zero_exit_is_failure() {
        let dir = tempfile::tempdir().unwrap();
        let puller = GitPuller::new("origin", "master").with_program("false");

        let err = puller.pull(dir.path()).unwrap_err();

        assert!(matches!(err, PullError::Failed { code: Some(1), .. }));
    }
}
