//! Markdown block classification.
//!
//! A single forward scan over the document's lines assigns every line to
//! exactly one typed block, in document order. This replaces chained
//! whole-document regex passes, which are fragile against interaction
//! between constructs (a table pattern matching inside a code fence, for
//! example).

/// Title used when the document has no level-1 heading.
pub const DEFAULT_TITLE: &str = "Report";

/// One structural unit of a Markdown document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// Heading of level 1 through 4.
    Heading {
        /// Heading level, 1..=4.
        level: u8,
        /// Heading text with markers stripped.
        text: String,
    },
    /// Run of plain lines merged until a blank line or another construct.
    Paragraph(Vec<String>),
    /// Run of `- ` items, markers stripped.
    UnorderedList(Vec<String>),
    /// Run of `1. ` items, markers stripped.
    OrderedList(Vec<String>),
    /// Pipe-delimited table.
    Table {
        /// Header row cells.
        header: Vec<String>,
        /// Data rows in input order.
        rows: Vec<Vec<String>>,
    },
    /// Fenced code block; contents are opaque literal text.
    CodeBlock {
        /// Optional language tag from the opening fence.
        language: Option<String>,
        /// Literal lines, untouched by any Markdown processing.
        lines: Vec<String>,
    },
    /// Quoted lines collapsed into one visual block.
    Blockquote(Vec<String>),
    /// Horizontal rule.
    Rule,
}

/// Parses a Markdown document into an ordered sequence of blocks.
#[must_use]
pub fn parse_blocks(markdown: &str) -> Vec<Block> {
    let lines: Vec<&str> = markdown.lines().collect();
    let mut blocks = Vec::new();
    let mut paragraph: Vec<String> = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        let line = lines[i];

        // Code fences claim their lines before anything else looks at them
        if let Some(fence_rest) = line.strip_prefix("```") {
            flush_paragraph(&mut blocks, &mut paragraph);
            let tag = fence_rest.trim();
            let language = (!tag.is_empty()).then(|| tag.to_string());

            let mut body = Vec::new();
            i += 1;
            while i < lines.len() && !lines[i].starts_with("```") {
                body.push(lines[i].to_string());
                i += 1;
            }
            i += 1; // closing fence; an unterminated fence runs to EOF
            blocks.push(Block::CodeBlock {
                language,
                lines: body,
            });
            continue;
        }

        if line.starts_with('|') {
            let mut end = i;
            while end < lines.len() && lines[end].starts_with('|') {
                end += 1;
            }
            // A lone pipe line is not a table; it falls through as text
            if end - i >= 2 {
                flush_paragraph(&mut blocks, &mut paragraph);
                blocks.push(parse_table(&lines[i..end]));
                i = end;
                continue;
            }
        }

        if let Some((level, text)) = heading_of(line) {
            flush_paragraph(&mut blocks, &mut paragraph);
            blocks.push(Block::Heading {
                level,
                text: text.to_string(),
            });
            i += 1;
            continue;
        }

        if line == "---" {
            flush_paragraph(&mut blocks, &mut paragraph);
            blocks.push(Block::Rule);
            i += 1;
            continue;
        }

        if line.starts_with("- ") {
            flush_paragraph(&mut blocks, &mut paragraph);
            let mut items = Vec::new();
            while i < lines.len() && lines[i].starts_with("- ") {
                items.push(lines[i][2..].to_string());
                i += 1;
            }
            blocks.push(Block::UnorderedList(items));
            continue;
        }

        if ordered_item(line).is_some() {
            flush_paragraph(&mut blocks, &mut paragraph);
            let mut items = Vec::new();
            while i < lines.len() {
                let Some(item) = ordered_item(lines[i]) else {
                    break;
                };
                items.push(item.to_string());
                i += 1;
            }
            blocks.push(Block::OrderedList(items));
            continue;
        }

        if line.starts_with('>') {
            flush_paragraph(&mut blocks, &mut paragraph);
            let mut quoted = Vec::new();
            while i < lines.len() {
                if lines[i].starts_with('>') {
                    let stripped = strip_quote(lines[i]);
                    if !stripped.trim().is_empty() {
                        quoted.push(stripped.to_string());
                    }
                    i += 1;
                } else {
                    // Adjacent quote runs separated only by blank lines
                    // merge into one logical quote
                    let mut next = i;
                    while next < lines.len() && lines[next].trim().is_empty() {
                        next += 1;
                    }
                    if next > i && next < lines.len() && lines[next].starts_with('>') {
                        i = next;
                    } else {
                        break;
                    }
                }
            }
            blocks.push(Block::Blockquote(quoted));
            continue;
        }

        if line.trim().is_empty() {
            flush_paragraph(&mut blocks, &mut paragraph);
        } else {
            paragraph.push(line.to_string());
        }
        i += 1;
    }

    flush_paragraph(&mut blocks, &mut paragraph);
    blocks
}

/// Extracts the default document title: the text of the first level-1
/// heading, or [`DEFAULT_TITLE`] when there is none.
#[must_use]
pub fn document_title(markdown: &str) -> String {
    markdown
        .lines()
        .find_map(|line| line.strip_prefix("# ").map(|text| text.trim().to_string()))
        .unwrap_or_else(|| DEFAULT_TITLE.to_string())
}

fn flush_paragraph(blocks: &mut Vec<Block>, paragraph: &mut Vec<String>) {
    if !paragraph.is_empty() {
        blocks.push(Block::Paragraph(std::mem::take(paragraph)));
    }
}

/// Matches `#` through `####` followed by a space at line start.
fn heading_of(line: &str) -> Option<(u8, &str)> {
    let level = line.bytes().take_while(|b| *b == b'#').count();
    if !(1..=4).contains(&level) {
        return None;
    }
    let text = line[level..].strip_prefix(' ')?;
    Some((u8::try_from(level).ok()?, text.trim()))
}

/// Matches `1. `-style ordered list items, returning the item text.
fn ordered_item(line: &str) -> Option<&str> {
    let digits = line.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    line[digits..].strip_prefix(". ")
}

/// Strips the `>` marker and one optional following space.
fn strip_quote(line: &str) -> &str {
    let rest = &line[1..];
    rest.strip_prefix(' ').unwrap_or(rest)
}

/// A divider row contains only pipes, dashes, colons and whitespace.
fn is_separator_row(line: &str) -> bool {
    line.chars()
        .all(|c| matches!(c, '|' | '-' | ':') || c.is_whitespace())
}

/// Splits a table row on `|`, dropping the empty outer cells produced by
/// the leading/trailing pipes and trimming the rest.
fn split_row(line: &str) -> Vec<String> {
    let mut cells: Vec<&str> = line.split('|').collect();
    if cells.first().is_some_and(|c| c.trim().is_empty()) {
        cells.remove(0);
    }
    if cells.last().is_some_and(|c| c.trim().is_empty()) {
        cells.pop();
    }
    cells.into_iter().map(|c| c.trim().to_string()).collect()
}

/// Builds a table from a run of two or more pipe lines. The first line is
/// the header; separator-shaped lines are discarded as dividers.
fn parse_table(run: &[&str]) -> Block {
    let mut header = Vec::new();
    let mut rows = Vec::new();

    for (idx, line) in run.iter().enumerate() {
        if idx == 0 {
            header = split_row(line);
        } else if !is_separator_row(line) {
            rows.push(split_row(line));
        }
    }

    Block::Table { header, rows }
}
