//! Error types for the notion2md library.
//!
//! Every variant originates from the fetch side (transport, authentication,
//! pagination) or from local I/O around the export entry points. The
//! conversion core itself is total — every block and span maps to some
//! string — so it contributes no variants here, and fetch errors are
//! returned to the caller untouched: no wrapping, no translation, no retry,
//! and no partial Markdown on failure.

use std::path::PathBuf;
use thiserror::Error;

/// All errors returned by the notion2md library.
#[derive(Debug, Error)]
pub enum ExportError {
    // ── Configuration errors ─────────────────────────────────────────────
    /// No integration token was provided.
    #[error(
        "No Notion integration token provided.\n\
         Set NOTION_TOKEN or pass a token explicitly."
    )]
    MissingToken,

    /// Builder validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // ── Notion API errors ────────────────────────────────────────────────
    /// The API rejected the token (HTTP 401/403).
    #[error(
        "Notion rejected the request: {message}\n\
         Check the token and that the integration is shared with the page."
    )]
    Unauthorized { message: String },

    /// The page or block does not exist, or the integration cannot see it.
    #[error(
        "Page '{page_id}' was not found.\n\
         Check the page ID and that the integration has access to it."
    )]
    PageNotFound { page_id: String },

    /// The API returned HTTP 429 — caller should back off.
    ///
    /// Check `retry_after_secs` for a server-specified delay. The library
    /// never retries on the caller's behalf.
    #[error("Rate limited by the Notion API")]
    RateLimited { retry_after_secs: Option<u64> },

    /// Any other non-success response from the API.
    #[error("Notion API error {status} ({code}): {message}")]
    Api {
        status: u16,
        code: String,
        message: String,
    },

    // ── Transport errors ─────────────────────────────────────────────────
    /// The HTTP request itself failed (DNS, TLS, connection reset, …).
    #[error("Request to the Notion API failed: {source}")]
    Transport {
        #[from]
        source: reqwest::Error,
    },

    /// The request exceeded the configured timeout.
    #[error("Request timed out after {secs}s\nIncrease --timeout for slow connections.")]
    Timeout { secs: u64 },

    // ── I/O errors ───────────────────────────────────────────────────────
    /// Could not create or write the output Markdown file.
    #[error("Failed to write output file '{path}': {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── Catch-all ────────────────────────────────────────────────────────
    /// Unexpected internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_not_found_display() {
        let e = ExportError::PageNotFound {
            page_id: "abc123".into(),
        };
        let msg = e.to_string();
        assert!(msg.contains("abc123"), "got: {msg}");
    }

    #[test]
    fn api_error_display() {
        let e = ExportError::Api {
            status: 400,
            code: "validation_error".into(),
            message: "body failed validation".into(),
        };
        let msg = e.to_string();
        assert!(msg.contains("400"));
        assert!(msg.contains("validation_error"));
        assert!(msg.contains("body failed validation"));
    }

    #[test]
    fn rate_limited_display_with_and_without_retry() {
        let with = ExportError::RateLimited {
            retry_after_secs: Some(30),
        };
        let without = ExportError::RateLimited {
            retry_after_secs: None,
        };
        assert!(with.to_string().contains("Rate limited"));
        assert!(without.to_string().contains("Rate limited"));
    }

    #[test]
    fn timeout_display() {
        let e = ExportError::Timeout { secs: 30 };
        assert!(e.to_string().contains("30s"));
    }

    #[test]
    fn unauthorized_display() {
        let e = ExportError::Unauthorized {
            message: "API token is invalid".into(),
        };
        assert!(e.to_string().contains("API token is invalid"));
    }
}
