//! # mdmail-render
//!
//! Markdown to styled email HTML rendering.
//!
//! The documented Markdown subset (headings 1-4, paragraphs, lists,
//! pipe tables, fenced code, blockquotes, rules, plus bold/italic/link/
//! code-span inlines) is classified into typed blocks by a single forward
//! scan and emitted as HTML with per-element inline styling, suitable for
//! email clients that strip stylesheets.
//!
//! ## Quick Start
//!
//! ```
//! use mdmail_render::{Style, render_markdown};
//!
//! let rendered = render_markdown("# Weekly\n\nAll **green**.", Style::Client);
//! assert_eq!(rendered.title, "Weekly");
//! assert!(rendered.html.contains("<strong"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod block;
mod error;
mod html;
mod inline;
mod style;
mod template;

pub use block::{Block, DEFAULT_TITLE, document_title, parse_blocks};
pub use error::{Error, Result};
pub use html::render_blocks;
pub use inline::format_inline;
pub use style::{Style, StyleProfile};
pub use template::wrap_document;

/// A rendered document: the complete HTML page and the extracted title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    /// Complete HTML document (body wrapped in the style's page shell).
    pub html: String,
    /// First level-1 heading, or [`DEFAULT_TITLE`].
    pub title: String,
}

/// Renders a Markdown document to a styled HTML page.
///
/// Pure and deterministic: the same input and style always produce
/// byte-identical output.
#[must_use]
pub fn render_markdown(markdown: &str, style: Style) -> Rendered {
    let blocks = parse_blocks(markdown);
    let title = document_title(markdown);
    let body = render_blocks(&blocks, style.profile());
    let html = wrap_document(&body, &title, style);
    Rendered { html, title }
}
