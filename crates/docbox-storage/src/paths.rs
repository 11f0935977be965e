//! Mapping between document paths and physical paths.
//!
//! A document path is the slash-separated, extension-less identifier used by
//! callers (`guide/intro`). Its physical path is `{root}/guide/intro.md`.
//! Document paths are normalized (no leading slash, no `.md` suffix) before
//! they are stored or compared.

use std::path::{Component, Path, PathBuf};

/// Markdown file extension, including the dot.
const MD_SUFFIX: &str = ".md";

/// Normalize a document path: drop leading slashes and a trailing `.md`.
///
/// # Examples
///
/// ```
/// use docbox_storage::normalize_document_path;
///
/// assert_eq!(normalize_document_path("/guide/intro.md"), "guide/intro");
/// assert_eq!(normalize_document_path("index"), "index");
/// ```
#[must_use]
pub fn normalize_document_path(path: &str) -> &str {
    let path = path.trim_start_matches('/');
    path.strip_suffix(MD_SUFFIX).unwrap_or(path)
}

/// Physical location of a document under `root`.
///
/// The document path is normalized first, so `"/guide"` and `"guide.md"`
/// both map to `{root}/guide.md`.
#[must_use]
pub fn physical_path(root: &Path, document_path: &str) -> PathBuf {
    let document_path = normalize_document_path(document_path);
    root.join(format!("{document_path}{MD_SUFFIX}"))
}

/// Document path of a physical file under `root`.
///
/// Strips the root prefix and the `.md` suffix and joins the remaining
/// components with `/` regardless of the platform separator. Returns `None`
/// if `physical` does not live under `root`.
#[must_use]
pub fn document_path(root: &Path, physical: &Path) -> Option<String> {
    let relative = physical.strip_prefix(root).ok()?;
    let joined = relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/");
    Some(normalize_document_path(&joined).to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_leading_slashes_and_suffix() {
        assert_eq!(normalize_document_path("//guide.md"), "guide");
        assert_eq!(normalize_document_path("guide/setup"), "guide/setup");
        assert_eq!(normalize_document_path(""), "");
    }

    #[test]
    fn test_normalize_keeps_inner_md() {
        assert_eq!(normalize_document_path("notes.md/today.md"), "notes.md/today");
    }

    #[test]
    fn test_physical_path() {
        let root = Path::new("/srv/docs");
        assert_eq!(
            physical_path(root, "guide/intro"),
            PathBuf::from("/srv/docs/guide/intro.md")
        );
        assert_eq!(
            physical_path(root, "/index.md"),
            PathBuf::from("/srv/docs/index.md")
        );
    }

    #[test]
    fn test_document_path_strips_root_and_suffix() {
        let root = Path::new("/srv/docs");
        assert_eq!(
            document_path(root, Path::new("/srv/docs/guide/intro.md")),
            Some("guide/intro".to_owned())
        );
    }

    #[test]
    fn test_document_path_outside_root() {
        let root = Path::new("/srv/docs");
        assert_eq!(document_path(root, Path::new("/etc/passwd")), None);
    }

    #[test]
    fn test_paths_round_trip() {
        let root = Path::new("docs");
        let physical = physical_path(root, "reference/api");
        assert_eq!(
            document_path(root, &physical),
            Some("reference/api".to_owned())
        );
    }
}
