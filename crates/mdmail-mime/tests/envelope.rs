//! End-to-end envelope assembly tests: shape selection, boundary hygiene,
//! inline image linkage, and raw-payload encoding.

#![allow(clippy::unwrap_used)]

use mdmail_mime::encoding::{decode_base64url, encode_base64url};
use mdmail_mime::{Attachment, EnvelopeBuilder, InlineImage};
use proptest::prelude::*;

fn decode_raw(raw: &str) -> String {
    String::from_utf8(decode_base64url(raw).unwrap()).unwrap()
}

/// Extracts every boundary declared in a Content-Type header.
fn boundaries(message: &str) -> Vec<String> {
    message
        .match_indices("boundary=")
        .map(|(idx, marker)| {
            message[idx + marker.len()..]
                .chars()
                .take_while(|c| !c.is_whitespace() && *c != ';' && *c != '"')
                .collect()
        })
        .collect()
}

fn count(haystack: &str, needle: &str) -> usize {
    haystack.match_indices(needle).count()
}

fn base_builder() -> EnvelopeBuilder {
    EnvelopeBuilder::new()
        .to("recipient@example.com")
        .from("sender@example.com")
        .subject("Weekly report")
        .text_body("Report body.")
}

fn pdf_attachment() -> Attachment {
    Attachment::new("report.pdf", b"%PDF-1.4 fake".to_vec(), "application/pdf")
}

fn chart_image() -> InlineImage {
    InlineImage::new("chart.png", b"\x89PNG fake".to_vec(), "image/png", "chart01")
}

#[test]
fn plain_text_only_is_single_part() {
    let raw = base_builder().build_raw().unwrap();

    assert!(!raw.contains('+'));
    assert!(!raw.contains('/'));
    assert!(!raw.contains('='));

    let message = decode_raw(&raw);
    assert!(!message.contains("boundary"));
    assert!(message.contains("Content-Type: text/plain; charset=utf-8"));
    assert!(message.contains("Report body."));
}

#[test]
fn attachment_with_html_nests_alternative_inside_mixed() {
    let raw = base_builder()
        .html_body("<p>Report body.</p>")
        .attach(pdf_attachment())
        .build_raw()
        .unwrap();

    let message = decode_raw(&raw);
    assert!(message.contains("multipart/mixed"));
    assert!(message.contains("multipart/alternative"));
    assert!(!message.contains("multipart/related"));

    let declared = boundaries(&message);
    assert_eq!(declared.len(), 2);
    assert_ne!(declared[0], declared[1]);

    for boundary in &declared {
        // Declared once, closed once, never inside a part body
        assert_eq!(count(&message, &format!("boundary={boundary}")), 1);
        assert_eq!(count(&message, &format!("--{boundary}--")), 1);
    }

    // The mixed container holds the alternative plus the attachment
    assert!(message.contains("Content-Disposition: attachment; filename=\"report.pdf\""));
    assert!(message.contains("Content-Type: application/pdf; name=report.pdf"));
    assert!(message.contains("Content-Transfer-Encoding: base64"));
}

#[test]
fn attachments_only_wraps_plain_text_in_mixed() {
    let message = base_builder()
        .attach(pdf_attachment())
        .build_rfc822()
        .unwrap();

    assert!(message.contains("multipart/mixed"));
    assert!(!message.contains("multipart/alternative"));
    assert!(message.contains("Content-Type: text/plain; charset=utf-8"));
    assert!(message.contains("Report body."));
}

#[test]
fn html_with_inline_images_is_related() {
    let message = base_builder()
        .html_body("<img src=\"cid:chart01\">")
        .embed(chart_image())
        .build_rfc822()
        .unwrap();

    assert!(message.contains("multipart/related"));
    assert!(!message.contains("multipart/mixed"));
    assert!(message.contains("Content-ID: chart01\r\n"));
    assert!(message.contains("Content-Disposition: inline; filename=\"chart.png\""));
}

#[test]
fn full_shape_nests_related_inside_mixed() {
    let message = base_builder()
        .html_body("<img src=\"cid:chart01\">")
        .embed(chart_image())
        .attach(pdf_attachment())
        .build_rfc822()
        .unwrap();

    assert!(message.contains("multipart/mixed"));
    assert!(message.contains("multipart/related"));
    assert!(!message.contains("multipart/alternative"));

    let declared = boundaries(&message);
    assert_eq!(declared.len(), 2);

    // The related container must open before the attachment part
    let related_pos = message.find("multipart/related").unwrap();
    let attachment_pos = message.find("Content-Disposition: attachment").unwrap();
    assert!(related_pos < attachment_pos);
}

#[test]
fn inline_image_content_id_is_verbatim() {
    let message = base_builder()
        .html_body("<img src=\"cid:figure-7@mdmail\">")
        .embed(InlineImage::new(
            "figure.png",
            vec![1, 2, 3],
            "image/png",
            "figure-7@mdmail",
        ))
        .build_rfc822()
        .unwrap();

    assert!(message.contains("Content-ID: figure-7@mdmail\r\n"));
}

#[test]
fn attachment_body_lines_stay_within_mime_limit() {
    let message = base_builder()
        .attach(Attachment::new("blob.bin", vec![0xA5; 4096], "application/octet-stream"))
        .build_rfc822()
        .unwrap();

    for line in message.lines() {
        assert!(line.len() <= 78, "line too long: {line}");
    }
}

proptest! {
    #[test]
    fn base64url_round_trips(bytes in proptest::collection::vec(any::<u8>(), 0..2048)) {
        let encoded = encode_base64url(&bytes);
        prop_assert!(!encoded.contains('+'));
        prop_assert!(!encoded.contains('/'));
        prop_assert!(!encoded.contains('='));
        prop_assert_eq!(decode_base64url(&encoded).unwrap(), bytes);
    }
}
