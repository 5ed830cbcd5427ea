//! # notion2md
//!
//! Export Notion pages to Markdown.
//!
//! ## Why this crate?
//!
//! Notion's export UI produces zip archives and is manual; its API returns
//! pages as trees of typed JSON blocks. This crate does the one conversion
//! most tooling needs: fetch a page's blocks over the REST API and flatten
//! them into a single Markdown string — headings, paragraphs, bulleted and
//! numbered lists, code fences, rich-text links and inline code, and
//! uploaded images.
//!
//! ## Pipeline Overview
//!
//! ```text
//! page ID
//!  │
//!  ├─ 1. Fetch    GET /v1/blocks/{id}/children (paginated, 100/page)
//!  ├─ 2. Decode   JSON → typed Block enum (unknown types → Other)
//!  └─ 3. Convert  dispatch-by-kind rendering + list/code spacing rules
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use notion2md::{export_page, ExportConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Token read from NOTION_TOKEN
//!     let config = ExportConfig::from_env()?;
//!     let markdown = export_page("d3b1c4f2a8e94b7c9f1e2a3b4c5d6e7f", &config).await?;
//!     println!("{markdown}");
//!     Ok(())
//! }
//! ```
//!
//! The conversion core is also usable on its own — it is a pure function
//! over already-fetched blocks:
//!
//! ```rust
//! use notion2md::{blocks_to_markdown, Block, RichTextSpan};
//!
//! let blocks = [Block::heading_1(vec![RichTextSpan::plain("Title")])];
//! assert_eq!(blocks_to_markdown(&blocks), "# Title\n\n");
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `notion2md` binary (clap + anyhow + tracing-subscriber) |
//!
//! Disable `cli` when using only the library to avoid pulling in CLI-only deps:
//! ```toml
//! notion2md = { version = "0.3", default-features = false }
//! ```
//!
//! ## What is not converted
//!
//! Child blocks are fetched one level deep (no recursion into nested
//! children), and tables, quotes, toggles, dividers, and every other block
//! kind outside the list above are silently skipped. Markdown-significant
//! characters in text are not escaped; output is byte-for-byte stable for
//! existing consumers.

// ── Modules ──────────────────────────────────────────────────────────────

pub mod client;
pub mod config;
pub mod convert;
pub mod error;
pub mod export;
pub mod model;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use client::{BlockSource, NotionClient};
pub use config::{ExportConfig, ExportConfigBuilder};
pub use convert::{blocks_to_markdown, render_rich_text};
pub use error::ExportError;
pub use export::{export_page, export_page_sync, export_page_to_file, export_page_with};
pub use model::{Annotations, Block, BlockChildren, RichTextSpan};
