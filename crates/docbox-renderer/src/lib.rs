//! Markdown rendering for docbox.
//!
//! Converts document markdown into HTML with [`pulldown_cmark`] and rewrites
//! relative resource links so that they resolve against the site root:
//!
//! - `[Setup](guide/setup.md)` becomes `<a href="/guide/setup">`
//! - `![logo](img/logo.png)` becomes `<img src="/img/logo.png" ...>`
//! - absolute paths, `#anchors` and `scheme://` URLs are kept as written
//!
//! # Example
//!
//! ```
//! use docbox_renderer::render;
//!
//! let html = render("See [the guide](guide.md).");
//! assert_eq!(html, "<p>See <a href=\"/guide\">the guide</a>.</p>\n");
//! ```

mod links;
mod render;

pub use links::{rewrite_links, rewrite_target};
pub use render::render;
