//! Inline formatting: bold, italic, links and code spans within a line.

use crate::html::escape_html;
use crate::style::StyleProfile;
use std::fmt::Write as _;

/// Applies inline substitutions to one line of block text.
///
/// Code spans are matched first and their contents become final,
/// HTML-escaped text; the other markers are never re-interpreted inside
/// them. The remaining text gets bold, then italic, then link
/// substitution.
#[must_use]
pub fn format_inline(text: &str, profile: &StyleProfile) -> String {
    let mut out = String::new();
    let mut rest = text;

    while let Some(start) = rest.find('`') {
        let Some(length) = rest[start + 1..].find('`') else {
            break;
        };
        out.push_str(&format_spans(&rest[..start], profile));

        let code = escape_html(&rest[start + 1..start + 1 + length]);
        let attr = profile.code;
        let _ = write!(out, "<code {attr}>{code}</code>");

        rest = &rest[start + length + 2..];
    }

    out.push_str(&format_spans(rest, profile));
    out
}

/// Bold before italic, so the asterisk pairs inside `**...**` are not
/// misread as emphasis markers.
fn format_spans(text: &str, profile: &StyleProfile) -> String {
    let bolded = replace_pairs(text, "**", "strong", profile.strong);
    let emphasized = replace_pairs(&bolded, "*", "em", profile.em);
    replace_links(&emphasized, profile)
}

/// Replaces `{marker}content{marker}` spans with a styled tag. Unpaired
/// or empty markers are left verbatim.
fn replace_pairs(text: &str, marker: &str, tag: &str, attr: &str) -> String {
    let mut out = String::new();
    let mut rest = text;

    while let Some(start) = rest.find(marker) {
        let after = start + marker.len();
        match rest[after..].find(marker) {
            Some(0) | None => {
                out.push_str(&rest[..after]);
                rest = &rest[after..];
            }
            Some(length) => {
                out.push_str(&rest[..start]);
                let content = &rest[after..after + length];
                let _ = write!(out, "<{tag} {attr}>{content}</{tag}>");
                rest = &rest[after + length + marker.len()..];
            }
        }
    }

    out.push_str(rest);
    out
}

/// Replaces `[text](url)` with a styled anchor.
fn replace_links(text: &str, profile: &StyleProfile) -> String {
    let mut out = String::new();
    let mut rest = text;

    while let Some(open) = rest.find('[') {
        let Some(mid) = rest[open..].find("](") else {
            break;
        };
        let url_start = open + mid + 2;
        let Some(close) = rest[url_start..].find(')') else {
            break;
        };

        out.push_str(&rest[..open]);
        let label = &rest[open + 1..open + mid];
        let url = &rest[url_start..url_start + close];
        let attr = profile.a;
        let _ = write!(out, "<a href=\"{url}\" {attr}>{label}</a>");

        rest = &rest[url_start + close + 1..];
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Style;

    fn fmt(text: &str) -> String {
        format_inline(text, Style::Client.profile())
    }

    #[test]
    fn test_bold_before_italic() {
        let html = fmt("**bold** and *em*");
        assert!(html.contains("<strong "));
        assert!(html.contains(">bold</strong>"));
        assert!(html.contains(">em</em>"));
        assert!(!html.contains('*'));
    }

    #[test]
    fn test_bold_not_eaten_by_italic() {
        let html = fmt("**only bold**");
        assert!(html.contains(">only bold</strong>"));
        assert!(!html.contains("<em "));
    }

    #[test]
    fn test_italic_inside_bold() {
        let html = fmt("**a *b* c**");
        assert!(html.contains("<strong "));
        assert!(html.contains("<em "));
        assert!(html.contains(">b</em>"));
    }

    #[test]
    fn test_link() {
        let html = fmt("see [docs](https://example.com/x)");
        assert!(html.contains("<a href=\"https://example.com/x\""));
        assert!(html.contains(">docs</a>"));
    }

    #[test]
    fn test_code_span_is_opaque_and_escaped() {
        let html = fmt("run `**<cmd>**` now");
        assert!(html.contains(">**&lt;cmd&gt;**</code>"));
        assert!(!html.contains("<strong "));
    }

    #[test]
    fn test_unpaired_markers_left_alone() {
        assert_eq!(fmt("a * b"), "a * b");
        assert_eq!(fmt("tick ` here"), "tick ` here");
    }
}
