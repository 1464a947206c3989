//! Envelope assembly.
//!
//! [`EnvelopeBuilder`] chooses exactly one MIME shape from the supplied
//! bodies, attachments and inline images, serializes the message, and
//! encodes it for the Gmail API's `raw` field.

use crate::attachment::{Attachment, InlineImage};
use crate::content_type::ContentType;
use crate::encoding::{encode_base64_wrapped, encode_base64url, encode_quoted_printable};
use crate::error::{Error, Result};
use crate::header::Headers;
use chrono::Utc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Process-wide sequence so envelopes built in the same instant still get
/// distinct boundaries.
static BOUNDARY_SEQ: AtomicU64 = AtomicU64::new(0);

/// Generates a multipart boundary. The underscore never occurs in the
/// Base64 alphabet, so the marker cannot collide with encoded part bodies.
fn boundary(label: &str) -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let seq = BOUNDARY_SEQ.fetch_add(1, Ordering::Relaxed);
    format!("mdmail_{label}_{nanos}_{seq}")
}

/// Converts bare LF line endings to CRLF for transmission.
fn normalize_crlf(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\n', "\r\n")
}

/// One serialized MIME part: its headers plus an already-encoded body.
#[derive(Debug)]
struct Part {
    headers: Headers,
    body: String,
}

impl Part {
    /// Builds a text part, quoted-printable encoded when the text is not
    /// plain ASCII.
    fn text(content_type: &ContentType, text: &str) -> Self {
        let mut headers = Headers::new();
        headers.add("Content-Type", content_type.to_string());

        if text.is_ascii() {
            headers.add("Content-Transfer-Encoding", "7bit");
            Self {
                headers,
                body: normalize_crlf(text),
            }
        } else {
            headers.add("Content-Transfer-Encoding", "quoted-printable");
            Self {
                headers,
                body: encode_quoted_printable(text),
            }
        }
    }

    /// Builds a Base64-encoded attachment part.
    fn attachment(attachment: &Attachment) -> Self {
        let content_type = ContentType::from_media_type(&attachment.media_type)
            .with_parameter("name", attachment.filename.as_str());

        let mut headers = Headers::new();
        headers.add("Content-Type", content_type.to_string());
        headers.add("Content-Transfer-Encoding", "base64");
        headers.add(
            "Content-Disposition",
            format!("attachment; filename=\"{}\"", attachment.filename),
        );

        Self {
            headers,
            body: encode_base64_wrapped(&attachment.bytes),
        }
    }

    /// Builds a Base64-encoded inline image part. The `Content-ID` value is
    /// the caller-supplied content id, verbatim, so `cid:` references in
    /// the HTML resolve to this part.
    fn inline_image(image: &InlineImage) -> Self {
        let mut headers = Headers::new();
        headers.add(
            "Content-Type",
            ContentType::from_media_type(&image.media_type).to_string(),
        );
        headers.add("Content-Transfer-Encoding", "base64");
        headers.add("Content-ID", image.content_id.clone());
        headers.add(
            "Content-Disposition",
            format!("inline; filename=\"{}\"", image.filename),
        );

        Self {
            headers,
            body: encode_base64_wrapped(&image.bytes),
        }
    }

    /// Wraps parts in a multipart container, delimited by the boundary
    /// carried in the content type.
    fn multipart(content_type: &ContentType, parts: &[Self]) -> Self {
        let boundary = content_type.boundary().unwrap_or_default().to_string();

        let mut headers = Headers::new();
        headers.add("Content-Type", content_type.to_string());

        let mut body = String::new();
        for part in parts {
            body.push_str("--");
            body.push_str(&boundary);
            body.push_str("\r\n");
            body.push_str(&part.headers.to_string());
            body.push_str("\r\n");
            body.push_str(&part.body);
            body.push_str("\r\n");
        }
        body.push_str("--");
        body.push_str(&boundary);
        body.push_str("--\r\n");

        Self { headers, body }
    }
}

/// Builder for a complete email payload.
///
/// The builder picks one of six mutually exclusive MIME shapes depending on
/// which optional inputs are present:
///
/// 1. attachments + HTML + inline images: `multipart/mixed` wrapping a
///    `multipart/related` (HTML + images) plus one part per attachment.
/// 2. attachments + HTML: `multipart/mixed` wrapping a
///    `multipart/alternative` (plain + HTML) plus attachments.
/// 3. attachments only: `multipart/mixed` with a plain part plus attachments.
/// 4. HTML + inline images: `multipart/related` (HTML + images).
/// 5. HTML only: `multipart/alternative` (plain + HTML).
/// 6. plain text only: a single `text/plain` part, no multipart wrapper.
///
/// Inline images only participate when an HTML body is present; without
/// HTML there is nothing that could reference them.
#[derive(Debug, Default)]
pub struct EnvelopeBuilder {
    to: Option<String>,
    from: Option<String>,
    subject: String,
    text_body: String,
    html_body: Option<String>,
    attachments: Vec<Attachment>,
    inline_images: Vec<InlineImage>,
}

impl EnvelopeBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the recipient address. Required.
    #[must_use]
    pub fn to(mut self, address: impl Into<String>) -> Self {
        self.to = Some(address.into());
        self
    }

    /// Sets the sender address. Optional; Gmail fills it in when absent.
    #[must_use]
    pub fn from(mut self, address: impl Into<String>) -> Self {
        self.from = Some(address.into());
        self
    }

    /// Sets the subject line. Encoded per RFC 2047 when non-ASCII.
    #[must_use]
    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = subject.into();
        self
    }

    /// Sets the plain-text body, also used as the alternative fallback
    /// when an HTML body is present.
    #[must_use]
    pub fn text_body(mut self, text: impl Into<String>) -> Self {
        self.text_body = text.into();
        self
    }

    /// Sets the HTML body.
    #[must_use]
    pub fn html_body(mut self, html: impl Into<String>) -> Self {
        self.html_body = Some(html.into());
        self
    }

    /// Adds a file attachment.
    #[must_use]
    pub fn attach(mut self, attachment: Attachment) -> Self {
        self.attachments.push(attachment);
        self
    }

    /// Adds an inline image referenced from the HTML body via `cid:`.
    #[must_use]
    pub fn embed(mut self, image: InlineImage) -> Self {
        self.inline_images.push(image);
        self
    }

    /// Serializes the message as RFC 2822 text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingRecipient`] if no recipient was set.
    pub fn build_rfc822(&self) -> Result<String> {
        let to = self.to.as_deref().ok_or(Error::MissingRecipient)?;

        let mut headers = Headers::new();
        headers.add("To", to);
        if let Some(from) = &self.from {
            headers.add("From", from.clone());
        }
        headers.add("Subject", Headers::encode_value(&self.subject));
        headers.add("Date", Utc::now().to_rfc2822());
        headers.add("MIME-Version", "1.0");

        // The structural part's own headers (Content-Type and transfer
        // encoding) become top-level message headers.
        let body_part = self.body_part();
        for (name, value) in body_part.headers.iter() {
            headers.add(name, value);
        }

        Ok(format!("{headers}\r\n{}", body_part.body))
    }

    /// Serializes the message and encodes it as URL-safe unpadded Base64,
    /// ready for the Gmail API's `raw` field.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingRecipient`] if no recipient was set.
    pub fn build_raw(&self) -> Result<String> {
        Ok(encode_base64url(self.build_rfc822()?.as_bytes()))
    }

    /// Shape dispatch per the precedence documented on the type.
    fn body_part(&self) -> Part {
        let has_attachments = !self.attachments.is_empty();
        let has_images = !self.inline_images.is_empty();

        match (&self.html_body, has_attachments, has_images) {
            (Some(html), true, true) => self.mixed_part(self.related_part(html)),
            (Some(html), true, false) => self.mixed_part(self.alternative_part(html)),
            (None, true, _) => {
                self.mixed_part(Part::text(&ContentType::text_plain(), &self.text_body))
            }
            (Some(html), false, true) => self.related_part(html),
            (Some(html), false, false) => self.alternative_part(html),
            (None, false, _) => Part::text(&ContentType::text_plain(), &self.text_body),
        }
    }

    /// `multipart/mixed` wrapping the body part plus one part per attachment.
    fn mixed_part(&self, body: Part) -> Part {
        let mut parts = vec![body];
        parts.extend(self.attachments.iter().map(Part::attachment));
        Part::multipart(&ContentType::multipart_mixed(boundary("mixed")), &parts)
    }

    /// `multipart/related` holding the HTML plus one part per inline image.
    fn related_part(&self, html: &str) -> Part {
        let mut parts = vec![Part::text(&ContentType::text_html(), html)];
        parts.extend(self.inline_images.iter().map(Part::inline_image));
        Part::multipart(&ContentType::multipart_related(boundary("rel")), &parts)
    }

    /// `multipart/alternative` holding the plain fallback plus the HTML.
    fn alternative_part(&self, html: &str) -> Part {
        let parts = [
            Part::text(&ContentType::text_plain(), &self.text_body),
            Part::text(&ContentType::text_html(), html),
        ];
        Part::multipart(&ContentType::multipart_alternative(boundary("alt")), &parts)
    }
}
