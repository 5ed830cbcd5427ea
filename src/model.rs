//! Domain model: Notion blocks and rich text, as they arrive on the wire.
//!
//! ## Why a closed enum instead of a type string?
//!
//! The Notion API tags every block with a `"type"` string and nests the
//! payload under a key of the same name
//! (`{"type":"paragraph","paragraph":{"rich_text":[…]}}`). Modelling that as
//! an internally tagged [`Block`] enum gives exhaustive matching in the
//! converter and makes an unrecognised type a first-class [`Block::Other`]
//! value rather than a failed downcast: new block kinds Notion ships
//! tomorrow deserialize cleanly today and simply contribute nothing to the
//! Markdown output.
//!
//! Blocks are read-only inputs to conversion and are never mutated after
//! deserialization.

use serde::Deserialize;

/// One structural unit of a Notion page.
///
/// Only the block kinds the exporter renders are materialised; everything
/// else (tables, quotes, toggles, dividers, …) lands in [`Block::Other`].
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    #[serde(rename = "heading_1")]
    Heading1 {
        #[serde(rename = "heading_1")]
        content: RichTextContent,
    },
    #[serde(rename = "heading_2")]
    Heading2 {
        #[serde(rename = "heading_2")]
        content: RichTextContent,
    },
    #[serde(rename = "heading_3")]
    Heading3 {
        #[serde(rename = "heading_3")]
        content: RichTextContent,
    },
    Paragraph {
        #[serde(rename = "paragraph")]
        content: RichTextContent,
    },
    BulletedListItem {
        #[serde(rename = "bulleted_list_item")]
        content: RichTextContent,
    },
    NumberedListItem {
        #[serde(rename = "numbered_list_item")]
        content: RichTextContent,
    },
    Code {
        #[serde(rename = "code")]
        content: RichTextContent,
    },
    Image {
        #[serde(rename = "image")]
        content: ImageContent,
    },
    /// Any block type this exporter does not render.
    #[serde(other)]
    Other,
}

/// The rich-text payload shared by headings, paragraphs, list items, and code.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RichTextContent {
    #[serde(default)]
    pub rich_text: Vec<RichTextSpan>,
}

/// A run of text within a block.
///
/// Rendering consults exactly three fields: `plain_text`, `href`, and
/// `annotations.code`. The remaining annotations are deserialized so real
/// API payloads parse, but they never affect the output.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RichTextSpan {
    #[serde(default)]
    pub plain_text: String,
    /// Hyperlink target. `None` or the empty string both mean "no link".
    #[serde(default)]
    pub href: Option<String>,
    #[serde(default)]
    pub annotations: Annotations,
}

/// Style annotations attached to a rich-text span.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct Annotations {
    #[serde(default)]
    pub bold: bool,
    #[serde(default)]
    pub italic: bool,
    #[serde(default)]
    pub strikethrough: bool,
    #[serde(default)]
    pub underline: bool,
    #[serde(default)]
    pub code: bool,
}

/// Payload of an image block.
///
/// Notion distinguishes files uploaded to Notion (`file`) from externally
/// hosted images (`external`). Only uploaded files carry a URL the exporter
/// renders; external images are parsed but contribute nothing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ImageContent {
    #[serde(default)]
    pub file: Option<FileObject>,
    #[serde(default)]
    pub external: Option<ExternalFile>,
}

/// A file uploaded to Notion, served via a signed URL.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FileObject {
    #[serde(default)]
    pub url: String,
}

/// An externally hosted file referenced by URL.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExternalFile {
    #[serde(default)]
    pub url: String,
}

/// One page of the paginated `blocks/{id}/children` response.
#[derive(Debug, Clone, Deserialize)]
pub struct BlockChildren {
    pub results: Vec<Block>,
    #[serde(default)]
    pub has_more: bool,
    #[serde(default)]
    pub next_cursor: Option<String>,
}

// ── Construction helpers ─────────────────────────────────────────────────

impl RichTextSpan {
    /// A plain, unstyled, unlinked span.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            plain_text: text.into(),
            ..Self::default()
        }
    }

    /// A span carrying a hyperlink.
    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            plain_text: text.into(),
            href: Some(url.into()),
            ..Self::default()
        }
    }

    /// A code-annotated span.
    pub fn code(text: impl Into<String>) -> Self {
        Self {
            plain_text: text.into(),
            annotations: Annotations {
                code: true,
                ..Annotations::default()
            },
            ..Self::default()
        }
    }
}

impl Block {
    pub fn heading_1(spans: Vec<RichTextSpan>) -> Self {
        Block::Heading1 {
            content: RichTextContent { rich_text: spans },
        }
    }

    pub fn heading_2(spans: Vec<RichTextSpan>) -> Self {
        Block::Heading2 {
            content: RichTextContent { rich_text: spans },
        }
    }

    pub fn heading_3(spans: Vec<RichTextSpan>) -> Self {
        Block::Heading3 {
            content: RichTextContent { rich_text: spans },
        }
    }

    pub fn paragraph(spans: Vec<RichTextSpan>) -> Self {
        Block::Paragraph {
            content: RichTextContent { rich_text: spans },
        }
    }

    pub fn bulleted_list_item(spans: Vec<RichTextSpan>) -> Self {
        Block::BulletedListItem {
            content: RichTextContent { rich_text: spans },
        }
    }

    pub fn numbered_list_item(spans: Vec<RichTextSpan>) -> Self {
        Block::NumberedListItem {
            content: RichTextContent { rich_text: spans },
        }
    }

    pub fn code(spans: Vec<RichTextSpan>) -> Self {
        Block::Code {
            content: RichTextContent { rich_text: spans },
        }
    }

    /// An image block backed by a Notion-hosted file.
    pub fn image_file(url: impl Into<String>) -> Self {
        Block::Image {
            content: ImageContent {
                file: Some(FileObject { url: url.into() }),
                external: None,
            },
        }
    }
}
