//! Export entry points: fetch a page's blocks and convert them.
//!
//! The fetch and the conversion compose linearly — there is no pipeline
//! state between them, and a fetch failure propagates to the caller exactly
//! as the collaborator produced it, with no partial output.

use crate::client::{BlockSource, NotionClient};
use crate::config::ExportConfig;
use crate::convert::blocks_to_markdown;
use crate::error::ExportError;
use std::path::Path;
use tracing::{debug, info};

/// Export a Notion page to Markdown.
///
/// This is the primary entry point for the library: it builds a
/// [`NotionClient`] from `config`, fetches the page's direct child blocks,
/// and converts them.
///
/// # Arguments
/// * `page_id` — Notion page (or block) ID, with or without dashes
/// * `config` — export configuration carrying the integration token
///
/// # Errors
/// Any [`ExportError`] from the fetch side; conversion itself cannot fail.
pub async fn export_page(page_id: &str, config: &ExportConfig) -> Result<String, ExportError> {
    let client = NotionClient::new(config)?;
    export_page_with(&client, page_id).await
}

/// Export a page using a caller-supplied [`BlockSource`].
///
/// The seam for callers who hold their own collaborator — tests with a
/// canned source, or middleware layering caching over [`NotionClient`].
pub async fn export_page_with(
    source: &dyn BlockSource,
    page_id: &str,
) -> Result<String, ExportError> {
    info!("Exporting page {}", page_id);
    let blocks = source.fetch_child_blocks(page_id).await?;
    debug!("Converting {} blocks", blocks.len());
    Ok(blocks_to_markdown(&blocks))
}

/// Export a page and write the Markdown directly to a file.
///
/// Uses atomic write (temp file + rename) to prevent partial files.
pub async fn export_page_to_file(
    page_id: &str,
    output_path: impl AsRef<Path>,
    config: &ExportConfig,
) -> Result<(), ExportError> {
    let markdown = export_page(page_id, config).await?;
    let path = output_path.as_ref();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| ExportError::OutputWrite {
                    path: path.to_path_buf(),
                    source: e,
                })?;
        }
    }

    let tmp_path = path.with_extension("md.tmp");
    tokio::fs::write(&tmp_path, &markdown)
        .await
        .map_err(|e| ExportError::OutputWrite {
            path: path.to_path_buf(),
            source: e,
        })?;

    tokio::fs::rename(&tmp_path, path)
        .await
        .map_err(|e| ExportError::OutputWrite {
            path: path.to_path_buf(),
            source: e,
        })?;

    info!("Wrote {} bytes to {}", markdown.len(), path.display());
    Ok(())
}

/// Synchronous wrapper around [`export_page`].
///
/// Creates a temporary tokio runtime internally.
pub fn export_page_sync(page_id: &str, config: &ExportConfig) -> Result<String, ExportError> {
    tokio::runtime::Runtime::new()
        .map_err(|e| ExportError::Internal(format!("Failed to create tokio runtime: {e}")))?
        .block_on(export_page(page_id, config))
}
