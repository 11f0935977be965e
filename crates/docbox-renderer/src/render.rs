//! CommonMark to HTML conversion.

use std::borrow::Cow;

use pulldown_cmark::{CowStr, Event, Options, Parser, Tag, html};

use crate::links::{rewrite_links, rewrite_target};

/// Markdown extensions enabled on top of CommonMark.
fn options() -> Options {
    Options::ENABLE_TABLES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS
        | Options::ENABLE_FOOTNOTES
}

/// Convert markdown into HTML with site-rooted links.
///
/// Empty input yields empty output. Relative link and image targets are
/// rewritten with [`rewrite_target`], and `src`/`href` attributes of raw HTML
/// with [`rewrite_links`]. Text and code are never rewritten.
///
/// # Examples
///
/// ```
/// use docbox_renderer::render;
///
/// assert_eq!(render(""), "");
/// assert_eq!(render("[x](foo.md)"), "<p><a href=\"/foo\">x</a></p>\n");
/// ```
#[must_use]
pub fn render(markdown: &str) -> String {
    if markdown.is_empty() {
        return String::new();
    }

    let parser = Parser::new_ext(markdown, options()).map(rewrite_event);
    let mut output = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut output, parser);
    output
}

fn rewrite_event(event: Event<'_>) -> Event<'_> {
    match event {
        Event::Start(Tag::Link {
            link_type,
            dest_url,
            title,
            id,
        }) => Event::Start(Tag::Link {
            link_type,
            dest_url: rewrite_dest(dest_url),
            title,
            id,
        }),
        Event::Start(Tag::Image {
            link_type,
            dest_url,
            title,
            id,
        }) => Event::Start(Tag::Image {
            link_type,
            dest_url: rewrite_dest(dest_url),
            title,
            id,
        }),
        Event::Html(html) => Event::Html(rewrite_raw(html)),
        Event::InlineHtml(html) => Event::InlineHtml(rewrite_raw(html)),
        other => other,
    }
}

fn rewrite_dest(dest_url: CowStr<'_>) -> CowStr<'_> {
    rewrite_target(&dest_url).map_or(dest_url, CowStr::from)
}

fn rewrite_raw(html: CowStr<'_>) -> CowStr<'_> {
    let rewritten = match rewrite_links(&html) {
        Cow::Owned(rewritten) => Some(rewritten),
        Cow::Borrowed(_) => None,
    };
    rewritten.map_or(html, CowStr::from)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_empty_input() {
        assert_eq!(render(""), "");
    }

    #[test]
    fn test_heading_and_paragraph() {
        assert_eq!(
            render("# Guide\n\nSome **bold** text."),
            "<h1>Guide</h1>\n<p>Some <strong>bold</strong> text.</p>\n"
        );
    }

    #[test]
    fn test_relative_link_rewritten() {
        assert_eq!(
            render("[x](foo.md)"),
            "<p><a href=\"/foo\">x</a></p>\n"
        );
    }

    #[test]
    fn test_external_link_untouched() {
        assert_eq!(
            render("[x](http://ext.com/a)"),
            "<p><a href=\"http://ext.com/a\">x</a></p>\n"
        );
    }

    #[test]
    fn test_anchor_link_untouched() {
        assert_eq!(
            render("[top](#top)"),
            "<p><a href=\"#top\">top</a></p>\n"
        );
    }

    #[test]
    fn test_image_src_rewritten() {
        assert_eq!(
            render("![logo](img/logo.png)"),
            "<p><img src=\"/img/logo.png\" alt=\"logo\" /></p>\n"
        );
    }

    #[test]
    fn test_raw_html_single_quotes_rewritten() {
        let html = render("<a href='guide/setup.md'>Setup</a>");
        assert!(html.contains("<a href=\"/guide/setup\">Setup</a>"));
    }

    #[test]
    fn test_table_extension() {
        let html = render("| a | b |\n|---|---|\n| 1 | 2 |\n");
        assert!(html.contains("<table>"));
        assert!(html.contains("<td>1</td>"));
    }

    #[test]
    fn test_strikethrough_extension() {
        assert_eq!(render("~~old~~"), "<p><del>old</del></p>\n");
    }

    #[test]
    fn test_fenced_code_not_rewritten() {
        let html = render("```html\n<img src=\"logo.png\"> <a href=\"guide.md\">g</a>\n```\n");
        assert_eq!(
            html,
            "<pre><code class=\"language-html\">&lt;img src=\"logo.png\"&gt; \
             &lt;a href=\"guide.md\"&gt;g&lt;/a&gt;\n</code></pre>\n"
        );
    }

    #[test]
    fn test_html_block_rewritten() {
        let html = render("<div>\n<img src=\"img/a.png\">\n</div>\n");
        assert!(html.contains("<img src=\"/img/a.png\">"));
    }

    #[test]
    fn test_link_text_with_attribute_not_rewritten() {
        assert_eq!(
            render("[href=\"a.md\"](b.md)"),
            "<p><a href=\"/b\">href=\"a.md\"</a></p>\n"
        );
    }

    #[test]
    fn test_code_span_not_rewritten() {
        let html = render("`href=\"foo.md\"`");
        assert_eq!(html, "<p><code>href=\"foo.md\"</code></p>\n");
    }
}
