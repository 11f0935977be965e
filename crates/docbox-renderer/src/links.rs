//! Link rewriting for markdown link targets and raw HTML.
//!
//! Documents link to each other with relative markdown paths
//! (`[Setup](guide/setup.md)`). In the served site those become site-rooted
//! routes (`/guide/setup`).

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::{Captures, Regex};

/// `src` or `href` attribute with a double- or single-quoted value.
static LINK_ATTR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(src|href)=(?:"([^"]*)"|'([^']*)')"#).unwrap());

/// Rewrite every relative `src`/`href` attribute into a site-rooted link.
///
/// For a relative value (not starting with `/` or `#`, no `://` scheme) the
/// `.md` markers are removed and a leading `/` is added; the attribute is
/// re-emitted with double quotes. Absolute paths, anchors, external URLs and
/// empty values are left exactly as written.
///
/// # Examples
///
/// ```
/// use docbox_renderer::rewrite_links;
///
/// assert_eq!(
///     rewrite_links(r#"<a href="guide/setup.md">Setup</a>"#),
///     r#"<a href="/guide/setup">Setup</a>"#
/// );
/// assert_eq!(
///     rewrite_links(r#"<a href="https://example.com/a.md">x</a>"#),
///     r#"<a href="https://example.com/a.md">x</a>"#
/// );
/// ```
#[must_use]
pub fn rewrite_links(html: &str) -> Cow<'_, str> {
    LINK_ATTR_RE.replace_all(html, |caps: &Captures<'_>| {
        let whole = &caps[0];
        let attr = &caps[1];
        let value = caps
            .get(2)
            .or_else(|| caps.get(3))
            .map_or("", |m| m.as_str());

        match rewrite_target(value) {
            Some(target) => format!(r#"{attr}="{target}""#),
            None => whole.to_owned(),
        }
    })
}

/// Site-rooted form of a single link target, or `None` if it is kept as is.
///
/// ```
/// use docbox_renderer::rewrite_target;
///
/// assert_eq!(rewrite_target("guide/setup.md").as_deref(), Some("/guide/setup"));
/// assert_eq!(rewrite_target("#top"), None);
/// ```
#[must_use]
pub fn rewrite_target(value: &str) -> Option<String> {
    is_relative(value).then(|| format!("/{}", value.replace(".md", "")))
}

fn is_relative(value: &str) -> bool {
    !value.is_empty()
        && !value.starts_with('/')
        && !value.starts_with('#')
        && !value.contains("://")
}
