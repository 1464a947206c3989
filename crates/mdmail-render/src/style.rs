//! Style profiles: named presentation-attribute sets per element kind.
//!
//! A profile only supplies attribute strings; it never changes the
//! structure of the rendered HTML.

use crate::error::{Error, Result};

/// Named visual theme for rendered email HTML.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Style {
    /// Teal accents, subtle borders, rounded corners.
    #[default]
    Client,
    /// High-contrast black-border bold style.
    Labs,
}

impl Style {
    /// Parses a style name, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownStyle`] for anything other than `client`
    /// or `labs`.
    pub fn parse(name: &str) -> Result<Self> {
        match name.to_ascii_lowercase().as_str() {
            "client" => Ok(Self::Client),
            "labs" => Ok(Self::Labs),
            _ => Err(Error::UnknownStyle(name.to_string())),
        }
    }

    /// Returns the attribute profile for this style.
    #[must_use]
    pub const fn profile(self) -> &'static StyleProfile {
        match self {
            Self::Client => &CLIENT,
            Self::Labs => &LABS,
        }
    }

    /// Canonical lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Client => "client",
            Self::Labs => "labs",
        }
    }
}

/// Presentation attributes per element kind, as emitted into the tags.
#[derive(Debug)]
#[allow(missing_docs)] // field names mirror the HTML tags they style
pub struct StyleProfile {
    pub h1: &'static str,
    pub h2: &'static str,
    pub h3: &'static str,
    pub h4: &'static str,
    pub p: &'static str,
    pub a: &'static str,
    pub blockquote: &'static str,
    pub code: &'static str,
    pub pre: &'static str,
    pub hr: &'static str,
    pub ul: &'static str,
    pub ol: &'static str,
    pub li: &'static str,
    pub table: &'static str,
    pub th: &'static str,
    pub td: &'static str,
    pub strong: &'static str,
    pub em: &'static str,
}

impl StyleProfile {
    /// Attribute string for a heading of the given level; levels above 4
    /// reuse the h4 attributes.
    #[must_use]
    pub const fn heading(&self, level: u8) -> &'static str {
        match level {
            1 => self.h1,
            2 => self.h2,
            3 => self.h3,
            _ => self.h4,
        }
    }
}

/// Teal-accented profile for client-facing reports.
static CLIENT: StyleProfile = StyleProfile {
    h1: "style=\"font-family:Helvetica,Arial,sans-serif;font-size:26px;color:#00695c;border-bottom:2px solid #b2dfdb;padding-bottom:8px;margin:24px 0 16px\"",
    h2: "style=\"font-family:Helvetica,Arial,sans-serif;font-size:21px;color:#00796b;margin:22px 0 12px\"",
    h3: "style=\"font-family:Helvetica,Arial,sans-serif;font-size:17px;color:#00796b;margin:18px 0 10px\"",
    h4: "style=\"font-family:Helvetica,Arial,sans-serif;font-size:15px;color:#004d40;margin:16px 0 8px\"",
    p: "style=\"font-family:Helvetica,Arial,sans-serif;font-size:14px;color:#37474f;line-height:1.6;margin:0 0 14px\"",
    a: "style=\"color:#00897b;text-decoration:underline\"",
    blockquote: "style=\"border-left:4px solid #80cbc4;background:#e0f2f1;padding:10px 16px;border-radius:0 6px 6px 0;color:#455a64;font-style:italic;margin:0 0 14px\"",
    code: "style=\"font-family:Menlo,Consolas,monospace;font-size:13px;background:#eceff1;border-radius:4px;padding:1px 5px;color:#00695c\"",
    pre: "style=\"background:#263238;border-radius:8px;padding:14px 16px;overflow-x:auto;margin:0 0 14px\"",
    hr: "style=\"border:none;border-top:1px solid #b2dfdb;margin:20px 0\"",
    ul: "style=\"font-family:Helvetica,Arial,sans-serif;font-size:14px;color:#37474f;margin:0 0 14px;padding-left:24px\"",
    ol: "style=\"font-family:Helvetica,Arial,sans-serif;font-size:14px;color:#37474f;margin:0 0 14px;padding-left:24px\"",
    li: "style=\"line-height:1.6;margin:2px 0\"",
    table: "style=\"border-collapse:collapse;width:100%;margin:0 0 14px;border-radius:6px;overflow:hidden\"",
    th: "style=\"font-family:Helvetica,Arial,sans-serif;font-size:13px;background:#00796b;color:#ffffff;text-align:left;padding:8px 12px\"",
    td: "style=\"font-family:Helvetica,Arial,sans-serif;font-size:13px;color:#37474f;border-bottom:1px solid #e0f2f1;padding:8px 12px\"",
    strong: "style=\"color:#004d40\"",
    em: "style=\"color:#00796b\"",
};

/// High-contrast profile for internal lab reports.
static LABS: StyleProfile = StyleProfile {
    h1: "style=\"font-family:Arial,sans-serif;font-size:28px;font-weight:800;color:#000000;border-bottom:4px solid #000000;padding-bottom:6px;margin:24px 0 16px\"",
    h2: "style=\"font-family:Arial,sans-serif;font-size:22px;font-weight:700;color:#000000;border-bottom:2px solid #000000;padding-bottom:4px;margin:22px 0 12px\"",
    h3: "style=\"font-family:Arial,sans-serif;font-size:18px;font-weight:700;color:#000000;margin:18px 0 10px\"",
    h4: "style=\"font-family:Arial,sans-serif;font-size:15px;font-weight:700;color:#000000;text-transform:uppercase;margin:16px 0 8px\"",
    p: "style=\"font-family:Arial,sans-serif;font-size:15px;color:#111111;line-height:1.5;margin:0 0 14px\"",
    a: "style=\"color:#000000;font-weight:700;text-decoration:underline\"",
    blockquote: "style=\"border-left:6px solid #000000;background:#f5f5f5;padding:10px 16px;color:#111111;font-weight:600;margin:0 0 14px\"",
    code: "style=\"font-family:Courier,monospace;font-size:14px;background:#000000;color:#00ff66;padding:1px 6px\"",
    pre: "style=\"background:#000000;border:2px solid #000000;padding:14px 16px;overflow-x:auto;margin:0 0 14px\"",
    hr: "style=\"border:none;border-top:3px solid #000000;margin:20px 0\"",
    ul: "style=\"font-family:Arial,sans-serif;font-size:15px;color:#111111;margin:0 0 14px;padding-left:24px\"",
    ol: "style=\"font-family:Arial,sans-serif;font-size:15px;color:#111111;margin:0 0 14px;padding-left:24px\"",
    li: "style=\"line-height:1.5;margin:3px 0\"",
    table: "style=\"border-collapse:collapse;width:100%;margin:0 0 14px;border:2px solid #000000\"",
    th: "style=\"font-family:Arial,sans-serif;font-size:14px;background:#000000;color:#ffffff;text-align:left;padding:8px 12px;border:1px solid #000000\"",
    td: "style=\"font-family:Arial,sans-serif;font-size:14px;color:#111111;border:1px solid #000000;padding:8px 12px\"",
    strong: "style=\"font-weight:800\"",
    em: "style=\"font-style:italic;background:#ffff00\"",
};
