//! Outer document shell.
//!
//! Pure string substitution of a rendered body and a title into a
//! per-style page template.

use crate::style::Style;

const TITLE_SLOT: &str = "%TITLE%";
const BODY_SLOT: &str = "%BODY%";

const CLIENT_SHELL: &str = "<!DOCTYPE html>\n\
<html>\n\
<head>\n\
<meta charset=\"utf-8\">\n\
<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
<title>%TITLE%</title>\n\
</head>\n\
<body style=\"margin:0;padding:0;background:#eceff1\">\n\
<div style=\"max-width:680px;margin:0 auto;padding:24px\">\n\
<div style=\"background:#ffffff;border:1px solid #b2dfdb;border-radius:10px;padding:28px 32px\">\n\
%BODY%\
</div>\n\
<p style=\"font-family:Helvetica,Arial,sans-serif;font-size:11px;color:#90a4ae;text-align:center;margin:16px 0 0\">%TITLE%</p>\n\
</div>\n\
</body>\n\
</html>\n";

const LABS_SHELL: &str = "<!DOCTYPE html>\n\
<html>\n\
<head>\n\
<meta charset=\"utf-8\">\n\
<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
<title>%TITLE%</title>\n\
</head>\n\
<body style=\"margin:0;padding:0;background:#ffffff\">\n\
<div style=\"max-width:720px;margin:0 auto;padding:24px\">\n\
<div style=\"border:3px solid #000000;padding:28px 32px\">\n\
%BODY%\
</div>\n\
<p style=\"font-family:Arial,sans-serif;font-size:11px;font-weight:700;color:#000000;text-align:center;margin:16px 0 0\">%TITLE%</p>\n\
</div>\n\
</body>\n\
</html>\n";

/// Wraps rendered body HTML and a title in the style's page shell.
///
/// The title is substituted verbatim, without HTML escaping, matching the
/// historical behavior of the report mailer this replaces. Callers own
/// title safety.
#[must_use]
pub fn wrap_document(body_html: &str, title: &str, style: Style) -> String {
    let shell = match style {
        Style::Client => CLIENT_SHELL,
        Style::Labs => LABS_SHELL,
    };
    shell
        .replace(TITLE_SLOT, title)
        .replace(BODY_SLOT, body_html)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_and_body_substituted() {
        let html = wrap_document("<p>hi</p>", "Weekly", Style::Client);
        assert!(html.contains("<title>Weekly</title>"));
        assert!(html.contains("<p>hi</p>"));
        assert!(!html.contains(TITLE_SLOT));
        assert!(!html.contains(BODY_SLOT));
    }

    #[test]
    fn test_title_is_not_escaped() {
        // Documented gap: the title is trusted caller input
        let html = wrap_document("", "A & B", Style::Labs);
        assert!(html.contains("<title>A & B</title>"));
    }
}
