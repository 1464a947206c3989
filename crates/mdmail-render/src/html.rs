//! Block-to-HTML emission.

use crate::block::Block;
use crate::inline::format_inline;
use crate::style::StyleProfile;
use std::fmt::Write as _;

/// Escapes text for safe literal emission inside HTML.
#[must_use]
pub(crate) fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Renders a block sequence to HTML with the profile's attributes.
///
/// Structure is identical for every profile: only attribute values differ.
/// Row, column and item order is preserved exactly as parsed.
#[must_use]
pub fn render_blocks(blocks: &[Block], profile: &StyleProfile) -> String {
    let mut html = String::new();

    for block in blocks {
        match block {
            Block::Heading { level, text } => {
                let attr = profile.heading(*level);
                let body = format_inline(text, profile);
                let _ = writeln!(html, "<h{level} {attr}>{body}</h{level}>");
            }
            Block::Paragraph(lines) => {
                let attr = profile.p;
                let body = join_inline(lines, " ", profile);
                let _ = writeln!(html, "<p {attr}>{body}</p>");
            }
            Block::UnorderedList(items) => {
                let _ = writeln!(html, "<ul {}>", profile.ul);
                push_items(&mut html, items, profile);
                html.push_str("</ul>\n");
            }
            Block::OrderedList(items) => {
                let _ = writeln!(html, "<ol {}>", profile.ol);
                push_items(&mut html, items, profile);
                html.push_str("</ol>\n");
            }
            Block::Table { header, rows } => {
                let _ = writeln!(html, "<table {}>", profile.table);
                html.push_str("<tr>");
                for cell in header {
                    let body = format_inline(cell, profile);
                    let _ = write!(html, "<th {}>{body}</th>", profile.th);
                }
                html.push_str("</tr>\n");
                for row in rows {
                    html.push_str("<tr>");
                    for cell in row {
                        let body = format_inline(cell, profile);
                        let _ = write!(html, "<td {}>{body}</td>", profile.td);
                    }
                    html.push_str("</tr>\n");
                }
                html.push_str("</table>\n");
            }
            Block::CodeBlock { language, lines } => {
                let _ = write!(html, "<pre {}>", profile.pre);
                match language {
                    Some(lang) => {
                        let _ = write!(html, "<code class=\"language-{lang}\" {}>", profile.code);
                    }
                    None => {
                        let _ = write!(html, "<code {}>", profile.code);
                    }
                }
                // Literal contents, escaped so samples cannot break the
                // surrounding document
                html.push_str(&escape_html(&lines.join("\n")));
                html.push_str("</code></pre>\n");
            }
            Block::Blockquote(lines) => {
                let attr = profile.blockquote;
                let body = join_inline(lines, "<br>", profile);
                let _ = writeln!(html, "<blockquote {attr}>{body}</blockquote>");
            }
            Block::Rule => {
                let _ = writeln!(html, "<hr {}>", profile.hr);
            }
        }
    }

    html
}

fn join_inline(lines: &[String], separator: &str, profile: &StyleProfile) -> String {
    lines
        .iter()
        .map(|line| format_inline(line, profile))
        .collect::<Vec<_>>()
        .join(separator)
}

fn push_items(html: &mut String, items: &[String], profile: &StyleProfile) {
    for item in items {
        let body = format_inline(item, profile);
        let _ = writeln!(html, "<li {}>{body}</li>", profile.li);
    }
}
