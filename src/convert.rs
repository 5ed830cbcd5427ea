//! Block-to-Markdown conversion: the pure core of the exporter.
//!
//! ## Why keep this free of I/O?
//!
//! Everything here is a total function of its input: every block and span,
//! including unrecognised ones, maps to *some* string (possibly empty).
//! There is no error path, no shared state, and no mutation, so the
//! converter can be unit-tested exhaustively without a network and called
//! from any number of tasks without coordination. Fetching lives in
//! [`crate::client`]; this module only ever sees already-materialised
//! blocks.
//!
//! ## Output conventions
//!
//! Headings end in `"\n\n"`; paragraphs, list items, and code fences end in
//! `"\n"`. List and code runs are separated from whatever follows by one
//! extra blank line (see [`blocks_to_markdown`] for the exact rule).
//! Markdown-significant characters in plain text pass through unescaped —
//! downstream consumers rely on byte-for-byte stable output, so escaping is
//! deliberately not applied.

use crate::model::{Block, ImageContent, RichTextSpan};

/// Convert an ordered sequence of blocks into one Markdown string.
///
/// Each block renders to a fragment per its kind; empty fragments (images
/// without an uploaded file, unrecognised block types) are dropped entirely,
/// and the remaining fragments are concatenated with no separator — all
/// spacing is embedded in the fragments themselves.
///
/// After a list item or code block, one extra newline is appended when the
/// following block does not continue the run. Bulleted items continue only
/// after bulleted items. Numbered items *and* code blocks both treat a
/// following `numbered_list_item` as the continuation — for code this is
/// inherited exporter behaviour, kept so existing consumers see identical
/// output.
pub fn blocks_to_markdown(blocks: &[Block]) -> String {
    let mut fragments: Vec<String> = Vec::with_capacity(blocks.len());

    for (i, block) in blocks.iter().enumerate() {
        let mut fragment = match block {
            Block::Heading1 { content } => heading(1, &content.rich_text),
            Block::Heading2 { content } => heading(2, &content.rich_text),
            Block::Heading3 { content } => heading(3, &content.rich_text),
            Block::Paragraph { content } => paragraph(&content.rich_text),
            Block::BulletedListItem { content } => list_item("- ", &content.rich_text),
            Block::NumberedListItem { content } => list_item("1. ", &content.rich_text),
            Block::Code { content } => code_fence(&content.rich_text),
            Block::Image { content } => image(content),
            Block::Other => String::new(),
        };

        let next = blocks.get(i + 1);
        let close_run = match block {
            Block::BulletedListItem { .. } => {
                next.is_some_and(|n| !matches!(n, Block::BulletedListItem { .. }))
            }
            Block::NumberedListItem { .. } | Block::Code { .. } => {
                next.is_some_and(|n| !matches!(n, Block::NumberedListItem { .. }))
            }
            _ => false,
        };
        if close_run {
            fragment.push('\n');
        }

        if !fragment.is_empty() {
            fragments.push(fragment);
        }
    }

    fragments.concat()
}

/// Render a sequence of rich-text spans, concatenated with no separator.
///
/// A non-empty hyperlink always wins over the code annotation; a span that
/// is both linked and code-annotated renders as a plain link.
pub fn render_rich_text(spans: &[RichTextSpan]) -> String {
    let mut out = String::new();
    for span in spans {
        match span.href.as_deref().filter(|href| !href.is_empty()) {
            Some(href) => {
                out.push('[');
                out.push_str(&span.plain_text);
                out.push_str("](");
                out.push_str(href);
                out.push(')');
            }
            None if span.annotations.code => {
                out.push('`');
                out.push_str(&span.plain_text);
                out.push('`');
            }
            None => out.push_str(&span.plain_text),
        }
    }
    out
}

// ── Per-kind fragment renderers ──────────────────────────────────────────

fn heading(level: usize, spans: &[RichTextSpan]) -> String {
    format!("{} {}\n\n", "#".repeat(level), render_rich_text(spans))
}

fn paragraph(spans: &[RichTextSpan]) -> String {
    format!("{}\n", render_rich_text(spans))
}

fn list_item(marker: &str, spans: &[RichTextSpan]) -> String {
    format!("{}{}\n", marker, render_rich_text(spans))
}

fn code_fence(spans: &[RichTextSpan]) -> String {
    format!("```\n{}\n```\n", render_rich_text(spans))
}

/// Only Notion-hosted files carry a renderable URL; external images and
/// images with an empty URL contribute nothing.
fn image(content: &ImageContent) -> String {
    match &content.file {
        Some(file) if !file.url.is_empty() => format!("![Untitled]({})", file.url),
        _ => String::new(),
    }
}

// ── Tests ────────────────────────────────────────────────────────────────
