//! Breadcrumb titles from the table-of-contents document.
//!
//! The table of contents is a markdown bullet list of links, nested by
//! indentation:
//!
//! ```text
//! * [Guide](guide.md)
//!   * [Intro](guide/intro.md)
//! * [Reference](reference.md)
//! ```
//!
//! Lines are read top to bottom while keeping a stack of the ancestors of the
//! current line. When the line linking to the queried path is reached, the
//! stack holds its breadcrumb.

use std::sync::LazyLock;

use docbox_storage::normalize_document_path;
use regex::Regex;

/// `<indent>* [label](target)`; anything after the list marker that does not
/// fit this shape makes the line a non-entry.
static ENTRY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\s*)\*\s+\[(.+)\]\((.+)\)").unwrap());

/// Separator between breadcrumb labels, deepest first.
const TITLE_SEPARATOR: &str = " - ";

/// One level of the breadcrumb stack.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutlineNode {
    /// Leading whitespace length of the entry line.
    pub indent: usize,
    /// Link text.
    pub label: String,
}

/// A parsed table-of-contents line.
#[derive(Debug, PartialEq, Eq)]
struct Entry<'a> {
    indent: usize,
    label: &'a str,
    target: &'a str,
}

fn parse_entry(line: &str) -> Option<Entry<'_>> {
    let caps = ENTRY_RE.captures(line)?;
    Some(Entry {
        indent: caps.get(1)?.len(),
        label: caps.get(2)?.as_str(),
        target: normalize_document_path(caps.get(3)?.as_str()),
    })
}

/// Breadcrumb stack, shallowest node first.
#[derive(Debug, Default)]
struct Outline {
    stack: Vec<OutlineNode>,
    current_indent: usize,
}

impl Outline {
    fn push(&mut self, node: OutlineNode) {
        let indent = node.indent;
        if indent > self.current_indent || self.stack.is_empty() {
            self.stack.push(node);
        } else if indent == self.current_indent {
            if let Some(last) = self.stack.last_mut() {
                *last = node;
            }
        } else {
            self.stack.retain(|n| n.indent < indent);
            self.stack.push(node);
        }
        self.current_indent = indent;
    }
}

/// Breadcrumb of the first entry linking to `path`, shallowest node first.
///
/// Both the entry targets and `path` are compared in normalized form, so
/// `/guide/intro.md` and `guide/intro` are the same document. Returns `None`
/// if no entry links to `path`.
#[must_use]
pub fn breadcrumb(menu: &str, path: &str) -> Option<Vec<OutlineNode>> {
    let path = normalize_document_path(path);
    let mut outline = Outline::default();

    for entry in menu.lines().filter_map(parse_entry) {
        outline.push(OutlineNode {
            indent: entry.indent,
            label: entry.label.to_owned(),
        });
        if entry.target == path {
            return Some(outline.stack);
        }
    }
    None
}

/// Hierarchical title of `path`: labels from deepest to shallowest joined by
/// `" - "`, or an empty string if the table of contents does not list it.
///
/// # Examples
///
/// ```
/// use docbox_site::resolve_title;
///
/// let menu = "* [Guide](guide.md)\n  * [Intro](guide/intro.md)\n";
/// assert_eq!(resolve_title(menu, "guide/intro"), "Intro - Guide");
/// assert_eq!(resolve_title(menu, "missing"), "");
/// ```
#[must_use]
pub fn resolve_title(menu: &str, path: &str) -> String {
    breadcrumb(menu, path)
        .map(|nodes| {
            nodes
                .iter()
                .rev()
                .map(|n| n.label.as_str())
                .collect::<Vec<_>>()
                .join(TITLE_SEPARATOR)
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const MENU: &str = "\
* [Guide](guide.md)
  * [Intro](guide/intro.md)
  * [Setup](guide/setup.md)
* [Reference](reference.md)
";

    #[test]
    fn test_nested_entry() {
        assert_eq!(resolve_title(MENU, "guide/intro"), "Intro - Guide");
    }

    #[test]
    fn test_sibling_replaces_previous() {
        assert_eq!(resolve_title(MENU, "guide/setup"), "Setup - Guide");
    }

    #[test]
    fn test_dedent_back_to_top_level() {
        assert_eq!(resolve_title(MENU, "reference"), "Reference");
    }

    #[test]
    fn test_absent_path_is_empty() {
        assert_eq!(resolve_title(MENU, "nowhere"), "");
        assert_eq!(resolve_title("", "guide"), "");
    }

    #[test]
    fn test_query_is_normalized() {
        assert_eq!(resolve_title(MENU, "/guide/intro.md"), "Intro - Guide");
        assert_eq!(resolve_title(MENU, "guide.md"), "Guide");
    }

    #[test]
    fn test_target_with_leading_slash() {
        let menu = "* [Home](/index.md)\n";
        assert_eq!(resolve_title(menu, "index"), "Home");
    }

    #[test]
    fn test_malformed_lines_skipped() {
        let menu = "\
# Menu

* [Guide](guide.md)
  - [Dash](guide/dash.md)
  *[NoSpace](guide/nospace.md)
  * plain text
  * [Intro](guide/intro.md)
";
        assert_eq!(resolve_title(menu, "guide/intro"), "Intro - Guide");
        assert_eq!(resolve_title(menu, "guide/dash"), "");
        assert_eq!(resolve_title(menu, "guide/nospace"), "");
    }

    #[test]
    fn test_first_occurrence_wins() {
        let menu = "\
* [Guide](guide.md)
  * [Shared](shared.md)
* [Reference](reference.md)
  * [Also Shared](shared.md)
";
        assert_eq!(resolve_title(menu, "shared"), "Shared - Guide");
    }

    #[test]
    fn test_three_levels() {
        let menu = "\
* [A](a.md)
  * [B](a/b.md)
    * [C](a/b/c.md)
  * [D](a/d.md)
";
        assert_eq!(resolve_title(menu, "a/b/c"), "C - B - A");
        assert_eq!(resolve_title(menu, "a/d"), "D - A");
    }

    #[test]
    fn test_dedent_keeps_strictly_shallower_ancestors() {
        // The dedent lands between the two existing levels: only the node
        // with a smaller indent survives.
        let menu = "\
* [A](a.md)
    * [B](a/b.md)
  * [C](a/c.md)
";
        assert_eq!(
            breadcrumb(menu, "a/c"),
            Some(vec![
                OutlineNode {
                    indent: 0,
                    label: "A".to_owned()
                },
                OutlineNode {
                    indent: 2,
                    label: "C".to_owned()
                },
            ])
        );
    }

    #[test]
    fn test_indented_first_entry() {
        let menu = "  * [Deep](deep.md)\n* [Top](top.md)\n";
        assert_eq!(resolve_title(menu, "deep"), "Deep");
        assert_eq!(resolve_title(menu, "top"), "Top");
    }

    #[test]
    fn test_parse_entry() {
        assert_eq!(
            parse_entry("  * [Intro](guide/intro.md)"),
            Some(Entry {
                indent: 2,
                label: "Intro",
                target: "guide/intro"
            })
        );
        assert_eq!(parse_entry("* Intro"), None);
    }
}
