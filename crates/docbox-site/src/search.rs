//! Full-text keyword search over the document index.

use std::path::{Path, PathBuf};

use docbox_storage::document_path;

/// Cache key prefix for per-keyword search results.
pub(crate) const SEARCH_KEY_PREFIX: &str = "doc_search_result_";

/// Cache key for the results of `keyword`.
pub(crate) fn search_key(keyword: &str) -> String {
    format!("{SEARCH_KEY_PREFIX}{keyword}")
}

/// Document paths of every indexed file whose content contains `keyword`.
///
/// Matching is a literal, case-sensitive substring test; empty documents
/// never match. Results keep the order of `files`.
pub(crate) fn find_matches<F, C>(
    root: &Path,
    files: &[PathBuf],
    keyword: &str,
    content: F,
) -> Vec<String>
where
    F: Fn(&Path) -> C,
    C: AsRef<str>,
{
    files
        .iter()
        .filter(|path| {
            let text = content(path.as_path());
            let text = text.as_ref();
            !text.is_empty() && text.contains(keyword)
        })
        .filter_map(|path| document_path(root, path))
        .collect()
}
