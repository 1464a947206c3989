//! `mdmail` - render Markdown reports to styled email HTML and assemble
//! base64url-encoded raw messages for the Gmail API.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use mdmail_mime::{Attachment, EnvelopeBuilder, InlineImage, media_type};
use mdmail_render::{Style, document_title, render_markdown};
use std::path::{Path, PathBuf};
use tokio::task::JoinSet;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "mdmail", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render a Markdown file to a styled HTML document
    Render {
        /// Markdown input file
        #[arg(short, long)]
        input: PathBuf,
        /// Style profile: client or labs
        #[arg(short, long, default_value = "client")]
        style: String,
        /// Output file; stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Assemble a base64url raw message ready for the Gmail API
    Compose {
        /// Recipient address
        #[arg(long)]
        to: String,
        /// Subject; defaults to the document title
        #[arg(long)]
        subject: Option<String>,
        /// Markdown input file, also used as the plain-text fallback
        #[arg(short, long)]
        input: PathBuf,
        /// Style profile: client or labs
        #[arg(short, long, default_value = "client")]
        style: String,
        /// Skip HTML rendering and send plain text only
        #[arg(long)]
        plain: bool,
        /// File attachment; repeatable
        #[arg(long = "attach", value_name = "PATH")]
        attachments: Vec<PathBuf>,
        /// Inline image as CID=PATH; repeatable
        #[arg(long = "embed", value_name = "CID=PATH", value_parser = parse_embed)]
        embeds: Vec<(String, PathBuf)>,
        /// Output file; stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Parses an `--embed` argument of the form `CID=PATH`.
fn parse_embed(value: &str) -> Result<(String, PathBuf), String> {
    value
        .split_once('=')
        .filter(|(cid, path)| !cid.is_empty() && !path.is_empty())
        .map(|(cid, path)| (cid.to_string(), PathBuf::from(path)))
        .ok_or_else(|| format!("expected CID=PATH, got \"{value}\""))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mdmail=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match Cli::parse().command {
        Command::Render {
            input,
            style,
            output,
        } => render_command(&input, &style, output.as_deref()),
        Command::Compose {
            to,
            subject,
            input,
            style,
            plain,
            attachments,
            embeds,
            output,
        } => {
            compose_command(
                to,
                subject,
                &input,
                &style,
                plain,
                &attachments,
                &embeds,
                output.as_deref(),
            )
            .await
        }
    }
}

fn render_command(input: &Path, style: &str, output: Option<&Path>) -> anyhow::Result<()> {
    let style = Style::parse(style)?;
    let markdown = std::fs::read_to_string(input)
        .with_context(|| format!("cannot read {}", input.display()))?;

    let rendered = render_markdown(&markdown, style);
    info!(title = %rendered.title, style = style.name(), "rendered document");

    write_output(output, &rendered.html)
}

#[allow(clippy::too_many_arguments)]
async fn compose_command(
    to: String,
    subject: Option<String>,
    input: &Path,
    style: &str,
    plain: bool,
    attachment_paths: &[PathBuf],
    embeds: &[(String, PathBuf)],
    output: Option<&Path>,
) -> anyhow::Result<()> {
    let style = Style::parse(style)?;
    let markdown = std::fs::read_to_string(input)
        .with_context(|| format!("cannot read {}", input.display()))?;

    let (attachments, images) = load_files(attachment_paths, embeds).await?;

    let rendered = (!plain).then(|| render_markdown(&markdown, style));
    let subject = subject.unwrap_or_else(|| {
        rendered
            .as_ref()
            .map_or_else(|| document_title(&markdown), |r| r.title.clone())
    });

    let mut builder = EnvelopeBuilder::new()
        .to(to)
        .subject(subject)
        .text_body(markdown);
    if let Some(rendered) = rendered {
        builder = builder.html_body(rendered.html);
    }
    for attachment in attachments {
        builder = builder.attach(attachment);
    }
    for image in images {
        builder = builder.embed(image);
    }

    let raw = builder.build_raw()?;
    info!(bytes = raw.len(), "assembled raw message");

    write_output(output, &raw)
}

/// Reads every attachment and inline image concurrently. Assembly needs
/// all parts at once, so the first read failure aborts the whole compose,
/// naming the offending file.
async fn load_files(
    attachment_paths: &[PathBuf],
    embeds: &[(String, PathBuf)],
) -> anyhow::Result<(Vec<Attachment>, Vec<InlineImage>)> {
    let total_attachments = attachment_paths.len();
    let mut set: JoinSet<(usize, PathBuf, std::io::Result<Vec<u8>>)> = JoinSet::new();

    for (idx, path) in attachment_paths.iter().cloned().enumerate() {
        set.spawn(async move {
            let bytes = tokio::fs::read(&path).await;
            (idx, path, bytes)
        });
    }
    for (offset, (_, path)) in embeds.iter().enumerate() {
        let idx = total_attachments + offset;
        let path = path.clone();
        set.spawn(async move {
            let bytes = tokio::fs::read(&path).await;
            (idx, path, bytes)
        });
    }

    let mut contents: Vec<Vec<u8>> = vec![Vec::new(); total_attachments + embeds.len()];
    while let Some(joined) = set.join_next().await {
        let (idx, path, bytes) = joined?;
        contents[idx] =
            bytes.with_context(|| format!("cannot read attachment {}", path.display()))?;
    }

    let mut contents = contents.into_iter();
    let attachments = attachment_paths
        .iter()
        .zip(contents.by_ref())
        .map(|(path, bytes)| Attachment::new(file_name(path), bytes, media_type::for_path(path)))
        .collect();
    let images = embeds
        .iter()
        .zip(contents)
        .map(|((cid, path), bytes)| {
            InlineImage::new(file_name(path), bytes, media_type::for_path(path), cid.clone())
        })
        .collect();

    Ok((attachments, images))
}

fn file_name(path: &Path) -> String {
    path.file_name().map_or_else(
        || path.display().to_string(),
        |name| name.to_string_lossy().into_owned(),
    )
}

fn write_output(output: Option<&Path>, content: &str) -> anyhow::Result<()> {
    match output {
        Some(path) => std::fs::write(path, content)
            .with_context(|| format!("cannot write {}", path.display()))?,
        None => {
            print!("{content}");
            if !content.ends_with('\n') {
                println!();
            }
        }
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_embed() {
        let (cid, path) = parse_embed("chart=img/chart.png").unwrap();
        assert_eq!(cid, "chart");
        assert_eq!(path, PathBuf::from("img/chart.png"));

        assert!(parse_embed("no-separator").is_err());
        assert!(parse_embed("=path").is_err());
    }

    #[tokio::test]
    async fn test_load_files_preserves_order() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.txt");
        let b = dir.path().join("b.pdf");
        let logo = dir.path().join("logo.png");
        std::fs::write(&a, b"aaa").unwrap();
        std::fs::write(&b, b"bbb").unwrap();
        std::fs::write(&logo, b"png").unwrap();

        let embeds = vec![("logo".to_string(), logo)];
        let (attachments, images) = load_files(&[a, b], &embeds).await.unwrap();

        assert_eq!(attachments.len(), 2);
        assert_eq!(attachments[0].filename, "a.txt");
        assert_eq!(attachments[0].media_type, "text/plain");
        assert_eq!(attachments[1].filename, "b.pdf");
        assert_eq!(attachments[1].bytes, b"bbb");
        assert_eq!(images[0].content_id, "logo");
        assert_eq!(images[0].media_type, "image/png");
    }

    #[tokio::test]
    async fn test_load_files_missing_path_fails() {
        let missing = PathBuf::from("/no/such/attachment.bin");
        let err = load_files(&[missing], &[]).await.unwrap_err();
        assert!(err.to_string().contains("/no/such/attachment.bin"));
    }
}
