//! The Notion API collaborator: a narrow trait plus its reqwest client.
//!
//! ## Why a trait at this seam?
//!
//! The converter needs exactly one capability from the outside world — "give
//! me the child blocks of this page" — so that is the whole surface of
//! [`BlockSource`]. The conversion core and the export entry points compile
//! against the trait, not against reqwest, which keeps pagination mechanics
//! and the authentication scheme out of every other module and lets tests
//! substitute a canned source without a network.
//!
//! ## What the client does *not* do
//!
//! No retries, no backoff, no rate-limit handling: a 429 surfaces as
//! [`ExportError::RateLimited`] (with the server's `Retry-After` when
//! present) and the caller decides what to do with it.

use crate::config::ExportConfig;
use crate::error::ExportError;
use crate::model::{Block, BlockChildren};
use async_trait::async_trait;
use serde::Deserialize;
use std::future::Future;
use std::time::Duration;
use tracing::debug;

/// Capability to fetch the direct children of a page or block.
///
/// Object-safe so callers can hold `&dyn BlockSource` / `Arc<dyn BlockSource>`
/// and layer middleware (caching, recording) without the library knowing.
#[async_trait]
pub trait BlockSource: Send + Sync {
    /// Fetch all direct child blocks of `page_id`, in display order.
    async fn fetch_child_blocks(&self, page_id: &str) -> Result<Vec<Block>, ExportError>;
}

/// reqwest-backed [`BlockSource`] talking to the Notion REST API.
pub struct NotionClient {
    http: reqwest::Client,
    base_url: String,
    token: String,
    notion_version: String,
    page_size: u32,
    timeout_secs: u64,
}

/// Body of a Notion error response (`{"object":"error","code":…,"message":…}`).
#[derive(Debug, Default, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    code: String,
    #[serde(default)]
    message: String,
}

impl NotionClient {
    /// Build a client from the export configuration.
    pub fn new(config: &ExportConfig) -> Result<Self, ExportError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
            notion_version: config.notion_version.clone(),
            page_size: config.page_size,
            timeout_secs: config.timeout_secs,
        })
    }

    fn children_url(&self, page_id: &str) -> String {
        format!("{}/v1/blocks/{}/children", self.base_url, page_id)
    }

    /// Fetch one page of children, starting at `cursor` when given.
    async fn fetch_children_page(
        &self,
        page_id: &str,
        cursor: Option<&str>,
    ) -> Result<BlockChildren, ExportError> {
        let mut request = self
            .http
            .get(self.children_url(page_id))
            .bearer_auth(&self.token)
            .header("Notion-Version", &self.notion_version)
            .query(&[("page_size", self.page_size.to_string())]);
        if let Some(cursor) = cursor {
            request = request.query(&[("start_cursor", cursor)]);
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                ExportError::Timeout {
                    secs: self.timeout_secs,
                }
            } else {
                ExportError::Transport { source: e }
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(api_error(page_id, status, response).await);
        }

        Ok(response.json::<BlockChildren>().await?)
    }
}

#[async_trait]
impl BlockSource for NotionClient {
    async fn fetch_child_blocks(&self, page_id: &str) -> Result<Vec<Block>, ExportError> {
        collect_paginated(|cursor| async move {
            let page = self.fetch_children_page(page_id, cursor.as_deref()).await?;
            debug!(
                "Fetched {} blocks for {} (has_more: {})",
                page.results.len(),
                page_id,
                page.has_more
            );
            Ok(page)
        })
        .await
    }
}

/// Drive the cursor loop over a page fetcher, accumulating all results.
///
/// The fetcher receives `None` on the first call and the previous page's
/// `next_cursor` afterwards. Pagination stops once `has_more` is false;
/// a page claiming `has_more` without a cursor also stops the loop, since
/// refetching without a cursor would spin on the same page forever.
async fn collect_paginated<F, Fut>(mut fetch: F) -> Result<Vec<Block>, ExportError>
where
    F: FnMut(Option<String>) -> Fut,
    Fut: Future<Output = Result<BlockChildren, ExportError>>,
{
    let mut blocks: Vec<Block> = Vec::new();
    let mut cursor: Option<String> = None;

    loop {
        let page = fetch(cursor.take()).await?;
        blocks.extend(page.results);

        match (page.has_more, page.next_cursor) {
            (true, Some(next)) => cursor = Some(next),
            _ => break,
        }
    }

    Ok(blocks)
}

/// Map a non-success response to the error taxonomy, decoding Notion's
/// error body for the code and message.
async fn api_error(
    page_id: &str,
    status: reqwest::StatusCode,
    response: reqwest::Response,
) -> ExportError {
    let retry_after_secs = response
        .headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.parse::<u64>().ok());

    let body: ApiErrorBody = response.json().await.unwrap_or_default();

    classify_status(page_id, status.as_u16(), retry_after_secs, body)
}

/// Pure status→error classification, separated from response decoding.
fn classify_status(
    page_id: &str,
    status: u16,
    retry_after_secs: Option<u64>,
    body: ApiErrorBody,
) -> ExportError {
    match status {
        401 | 403 => ExportError::Unauthorized {
            message: body.message,
        },
        404 => ExportError::PageNotFound {
            page_id: page_id.to_string(),
        },
        429 => ExportError::RateLimited { retry_after_secs },
        status => ExportError::Api {
            status,
            code: body.code,
            message: body.message,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ExportConfig;
    use crate::model::RichTextSpan;
    use std::collections::VecDeque;
    use std::future::ready;

    fn test_config() -> ExportConfig {
        ExportConfig::builder()
            .token("secret_test")
            .base_url("https://api.notion.test/")
            .build()
            .unwrap()
    }

    fn paragraph(text: &str) -> Block {
        Block::paragraph(vec![RichTextSpan::plain(text)])
    }

    fn children(results: Vec<Block>, next_cursor: Option<&str>) -> BlockChildren {
        BlockChildren {
            results,
            has_more: next_cursor.is_some(),
            next_cursor: next_cursor.map(String::from),
        }
    }

    #[test]
    fn children_url_strips_trailing_slash() {
        let client = NotionClient::new(&test_config()).unwrap();
        assert_eq!(
            client.children_url("abc123"),
            "https://api.notion.test/v1/blocks/abc123/children"
        );
    }

    // ── Pagination ───────────────────────────────────────────────────────

    #[tokio::test]
    async fn pagination_follows_cursor_and_accumulates() {
        let mut pages = VecDeque::from([
            children(vec![paragraph("a"), paragraph("b")], Some("cursor-1")),
            children(vec![paragraph("c")], Some("cursor-2")),
            children(vec![paragraph("d")], None),
        ]);
        let mut cursors: Vec<Option<String>> = Vec::new();

        let blocks = collect_paginated(|cursor| {
            cursors.push(cursor);
            ready(Ok(pages.pop_front().expect("fetched past the last page")))
        })
        .await
        .unwrap();

        assert_eq!(blocks.len(), 4);
        assert_eq!(
            cursors,
            vec![None, Some("cursor-1".into()), Some("cursor-2".into())]
        );
    }

    #[tokio::test]
    async fn pagination_stops_when_has_more_is_false() {
        let mut calls = 0usize;
        let blocks = collect_paginated(|_| {
            calls += 1;
            ready(Ok(children(vec![paragraph("only")], None)))
        })
        .await
        .unwrap();

        assert_eq!(blocks.len(), 1);
        assert_eq!(calls, 1);
    }

    #[tokio::test]
    async fn pagination_stops_on_has_more_without_cursor() {
        let mut calls = 0usize;
        let blocks = collect_paginated(|_| {
            calls += 1;
            ready(Ok(BlockChildren {
                results: vec![paragraph("x")],
                has_more: true,
                next_cursor: None,
            }))
        })
        .await
        .unwrap();

        assert_eq!(blocks.len(), 1);
        assert_eq!(calls, 1, "a cursorless page must not be refetched");
    }

    #[tokio::test]
    async fn pagination_propagates_fetch_errors() {
        let result = collect_paginated(|_| {
            ready(Err(ExportError::RateLimited {
                retry_after_secs: Some(10),
            }))
        })
        .await;

        assert!(matches!(
            result,
            Err(ExportError::RateLimited {
                retry_after_secs: Some(10)
            })
        ));
    }

    #[tokio::test]
    async fn pagination_error_on_later_page_discards_partial_results() {
        let mut pages = VecDeque::from([
            Ok(children(vec![paragraph("a")], Some("cursor-1"))),
            Err(ExportError::Api {
                status: 500,
                code: "internal_server_error".into(),
                message: "boom".into(),
            }),
        ]);

        let result = collect_paginated(|_| ready(pages.pop_front().unwrap())).await;
        assert!(matches!(result, Err(ExportError::Api { status: 500, .. })));
    }

    // ── Status classification ────────────────────────────────────────────

    fn body(code: &str, message: &str) -> ApiErrorBody {
        ApiErrorBody {
            code: code.into(),
            message: message.into(),
        }
    }

    #[test]
    fn status_401_and_403_classify_as_unauthorized() {
        for status in [401, 403] {
            let err = classify_status("p1", status, None, body("unauthorized", "bad token"));
            match err {
                ExportError::Unauthorized { message } => assert_eq!(message, "bad token"),
                other => panic!("expected Unauthorized for {status}, got {other:?}"),
            }
        }
    }

    #[test]
    fn status_404_classifies_as_page_not_found() {
        let err = classify_status("p1", 404, None, body("object_not_found", "missing"));
        match err {
            ExportError::PageNotFound { page_id } => assert_eq!(page_id, "p1"),
            other => panic!("expected PageNotFound, got {other:?}"),
        }
    }

    #[test]
    fn status_429_carries_retry_after() {
        let err = classify_status("p1", 429, Some(30), body("rate_limited", "slow down"));
        assert!(matches!(
            err,
            ExportError::RateLimited {
                retry_after_secs: Some(30)
            }
        ));

        let err = classify_status("p1", 429, None, body("rate_limited", "slow down"));
        assert!(matches!(
            err,
            ExportError::RateLimited {
                retry_after_secs: None
            }
        ));
    }

    #[test]
    fn other_statuses_classify_as_api_error() {
        let err = classify_status("p1", 400, None, body("validation_error", "bad body"));
        match err {
            ExportError::Api {
                status,
                code,
                message,
            } => {
                assert_eq!(status, 400);
                assert_eq!(code, "validation_error");
                assert_eq!(message, "bad body");
            }
            other => panic!("expected Api, got {other:?}"),
        }
    }

    // ── Error body decoding ──────────────────────────────────────────────

    #[test]
    fn error_body_tolerates_missing_fields() {
        let body: ApiErrorBody = serde_json::from_str("{}").unwrap();
        assert!(body.code.is_empty());
        assert!(body.message.is_empty());
    }

    #[test]
    fn error_body_decodes_notion_shape() {
        let json = r#"{"object":"error","status":401,"code":"unauthorized","message":"API token is invalid."}"#;
        let body: ApiErrorBody = serde_json::from_str(json).unwrap();
        assert_eq!(body.code, "unauthorized");
        assert_eq!(body.message, "API token is invalid.");
    }
}
