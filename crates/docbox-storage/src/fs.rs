//! Filesystem storage implementation.
//!
//! Provides [`FsStorage`] for listing and reading markdown documents from a
//! directory tree on the local filesystem (typically a git working copy).

use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::storage::{Storage, StorageError, StorageErrorKind};

/// Backend identifier for error messages.
const BACKEND: &str = "Fs";

/// Filesystem storage implementation.
///
/// Scans the root directory recursively for `*.md` files. Hidden entries
/// (names starting with `.`, such as `.git`) are skipped. Entries are visited
/// in file-name order, so the scan order is the same on every platform.
///
/// # Example
///
/// ```ignore
/// use std::path::PathBuf;
/// use docbox_storage::{FsStorage, Storage};
///
/// let storage = FsStorage::new(PathBuf::from("docs"));
/// let files = storage.scan()?;
/// ```
#[derive(Debug)]
pub struct FsStorage {
    /// Root directory for document storage.
    root: PathBuf,
}

impl FsStorage {
    /// Create a new filesystem storage rooted at `root`.
    #[must_use]
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Validate that a path stays inside the document root.
    ///
    /// Rejects paths outside the root and paths containing parent directory
    /// components (`..`), e.g. `docs/../../etc/passwd`.
    fn validate_path(&self, path: &Path) -> Result<(), StorageError> {
        let has_parent_dir = path
            .components()
            .any(|c| matches!(c, Component::ParentDir));

        if has_parent_dir || !path.starts_with(&self.root) {
            return Err(StorageError::new(StorageErrorKind::InvalidPath)
                .with_path(path)
                .with_backend(BACKEND));
        }
        Ok(())
    }

    /// Scan a directory recursively and collect markdown files.
    fn scan_directory(dir_path: &Path, files: &mut Vec<PathBuf>) {
        let entries = match fs::read_dir(dir_path) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(dir = %dir_path.display(), error = %e, "skipping unreadable directory");
                return;
            }
        };

        // Collect entries with cached file_type to avoid repeated stat calls in sort.
        let mut entries: Vec<_> = entries
            .filter_map(Result::ok)
            .map(|e| {
                let is_dir = e.file_type().is_ok_and(|t| t.is_dir());
                (e, is_dir)
            })
            .collect();
        entries.sort_by_key(|(e, _)| e.file_name());

        for (entry, is_dir) in entries {
            if entry.file_name().to_string_lossy().starts_with('.') {
                continue;
            }

            let path = entry.path();
            if is_dir {
                Self::scan_directory(&path, files);
            } else if path.extension().is_some_and(|e| e == "md") {
                files.push(path);
            }
        }
    }
}

impl Storage for FsStorage {
    fn root(&self) -> &Path {
        &self.root
    }

    fn scan(&self) -> Result<Vec<PathBuf>, StorageError> {
        if !self.root.exists() {
            return Ok(Vec::new());
        }
        if !self.root.is_dir() {
            return Err(StorageError::new(StorageErrorKind::InvalidPath)
                .with_path(&self.root)
                .with_backend(BACKEND));
        }

        let mut files = Vec::new();
        Self::scan_directory(&self.root, &mut files);
        Ok(files)
    }

    fn read(&self, path: &Path) -> Result<String, StorageError> {
        self.validate_path(path)?;
        fs::read_to_string(path)
            .map_err(|e| StorageError::io(e, Some(path.to_path_buf())).with_backend(BACKEND))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_fs_storage_is_send_sync() {
        assert_send_sync::<FsStorage>();
    }

    fn create_test_dir() -> tempfile::TempDir {
        tempfile::tempdir().unwrap()
    }

    #[test]
    fn test_scan_empty_dir() {
        let temp_dir = create_test_dir();

        let storage = FsStorage::new(temp_dir.path().to_path_buf());

        assert!(storage.scan().unwrap().is_empty());
    }

    #[test]
    fn test_scan_missing_dir() {
        let storage = FsStorage::new(PathBuf::from("/nonexistent"));

        assert!(storage.scan().unwrap().is_empty());
    }

    #[test]
    fn test_scan_root_is_file() {
        let temp_dir = create_test_dir();
        let file = temp_dir.path().join("not-a-dir.md");
        fs::write(&file, "# Nope").unwrap();

        let storage = FsStorage::new(file);
        let err = storage.scan().unwrap_err();

        assert_eq!(err.kind(), &StorageErrorKind::InvalidPath);
    }

    #[test]
    fn test_scan_nested_structure_in_name_order() {
        let temp_dir = create_test_dir();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("guide")).unwrap();
        fs::write(root.join("menus.md"), "* [Guide](guide.md)").unwrap();
        fs::write(root.join("guide.md"), "# Guide").unwrap();
        fs::write(root.join("guide/setup.md"), "# Setup").unwrap();
        fs::write(root.join("guide/intro.md"), "# Intro").unwrap();

        let storage = FsStorage::new(root.to_path_buf());
        let files = storage.scan().unwrap();

        assert_eq!(
            files,
            vec![
                root.join("guide/intro.md"),
                root.join("guide/setup.md"),
                root.join("guide.md"),
                root.join("menus.md"),
            ]
        );
    }

    #[test]
    fn test_scan_skips_non_markdown_and_hidden() {
        let temp_dir = create_test_dir();
        let root = temp_dir.path();
        fs::create_dir_all(root.join(".git")).unwrap();
        fs::write(root.join(".git/HEAD.md"), "ref").unwrap();
        fs::write(root.join(".draft.md"), "# Draft").unwrap();
        fs::write(root.join("logo.png"), [0u8, 1, 2]).unwrap();
        fs::write(root.join("index.md"), "# Home").unwrap();

        let storage = FsStorage::new(root.to_path_buf());

        assert_eq!(storage.scan().unwrap(), vec![root.join("index.md")]);
    }

    #[test]
    fn test_read_existing_file() {
        let temp_dir = create_test_dir();
        let path = temp_dir.path().join("guide.md");
        fs::write(&path, "# Guide\n\nContent.").unwrap();

        let storage = FsStorage::new(temp_dir.path().to_path_buf());

        assert_eq!(storage.read(&path).unwrap(), "# Guide\n\nContent.");
    }

    #[test]
    fn test_read_missing_file() {
        let temp_dir = create_test_dir();
        let storage = FsStorage::new(temp_dir.path().to_path_buf());

        let err = storage
            .read(&temp_dir.path().join("missing.md"))
            .unwrap_err();

        assert_eq!(err.kind(), &StorageErrorKind::NotFound);
        assert!(err.to_string().starts_with("[Fs] Not found"));
    }

    #[test]
    fn test_read_rejects_path_traversal() {
        let temp_dir = create_test_dir();
        let storage = FsStorage::new(temp_dir.path().join("docs"));

        let err = storage
            .read(&temp_dir.path().join("docs/../secret.md"))
            .unwrap_err();

        assert_eq!(err.kind(), &StorageErrorKind::InvalidPath);
    }

    #[test]
    fn test_read_rejects_path_outside_root() {
        let temp_dir = create_test_dir();
        let outside = temp_dir.path().join("outside.md");
        fs::write(&outside, "secret").unwrap();
        let storage = FsStorage::new(temp_dir.path().join("docs"));

        let err = storage.read(&outside).unwrap_err();

        assert_eq!(err.kind(), &StorageErrorKind::InvalidPath);
    }
}
