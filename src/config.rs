//! Configuration for page exports.
//!
//! All export behaviour is controlled through [`ExportConfig`], built via
//! its [`ExportConfigBuilder`]. Keeping every knob in one struct makes it
//! trivial to share configs across tasks and to diff two runs to understand
//! why their outputs differ.

use crate::error::ExportError;
use std::fmt;

/// Default Notion API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.notion.com";

/// Default `Notion-Version` header sent with every request.
pub const DEFAULT_NOTION_VERSION: &str = "2022-06-28";

/// Maximum (and default) page size accepted by the block-children endpoint.
pub const MAX_PAGE_SIZE: u32 = 100;

/// Configuration for a Notion-to-Markdown export.
///
/// Built via [`ExportConfig::builder()`] or [`ExportConfig::from_env()`].
///
/// # Example
/// ```rust
/// use notion2md::ExportConfig;
///
/// let config = ExportConfig::builder()
///     .token("secret_abc")
///     .timeout_secs(60)
///     .build()
///     .unwrap();
/// ```
#[derive(Clone)]
pub struct ExportConfig {
    /// Notion integration token (`secret_…` / `ntn_…`).
    pub token: String,

    /// API endpoint. Default: [`DEFAULT_BASE_URL`]. Override to point the
    /// client at a proxy or a local test server.
    pub base_url: String,

    /// `Notion-Version` header value. Default: [`DEFAULT_NOTION_VERSION`].
    pub notion_version: String,

    /// Blocks fetched per request, 1–100. Default: 100 (the API maximum, so
    /// a typical page needs a single request).
    pub page_size: u32,

    /// Per-request HTTP timeout in seconds. Default: 30.
    pub timeout_secs: u64,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            token: String::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            notion_version: DEFAULT_NOTION_VERSION.to_string(),
            page_size: MAX_PAGE_SIZE,
            timeout_secs: 30,
        }
    }
}

impl fmt::Debug for ExportConfig {
    // The token is a live credential; never let it leak through Debug logs.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExportConfig")
            .field("token", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("notion_version", &self.notion_version)
            .field("page_size", &self.page_size)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl ExportConfig {
    /// Create a new builder for `ExportConfig`.
    pub fn builder() -> ExportConfigBuilder {
        ExportConfigBuilder {
            config: Self::default(),
        }
    }

    /// Build a configuration from the `NOTION_TOKEN` environment variable,
    /// with defaults for everything else.
    pub fn from_env() -> Result<Self, ExportError> {
        let token = std::env::var("NOTION_TOKEN").unwrap_or_default();
        Self::builder().token(token).build()
    }
}

/// Builder for [`ExportConfig`].
#[derive(Debug)]
pub struct ExportConfigBuilder {
    config: ExportConfig,
}

impl ExportConfigBuilder {
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.config.token = token.into();
        self
    }

    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    pub fn notion_version(mut self, version: impl Into<String>) -> Self {
        self.config.notion_version = version.into();
        self
    }

    pub fn page_size(mut self, size: u32) -> Self {
        self.config.page_size = size;
        self
    }

    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.config.timeout_secs = secs;
        self
    }

    /// Build the configuration, validating constraints.
    pub fn build(self) -> Result<ExportConfig, ExportError> {
        let c = &self.config;
        if c.token.trim().is_empty() {
            return Err(ExportError::MissingToken);
        }
        if c.base_url.trim().is_empty() {
            return Err(ExportError::InvalidConfig("base_url must not be empty".into()));
        }
        if c.page_size == 0 || c.page_size > MAX_PAGE_SIZE {
            return Err(ExportError::InvalidConfig(format!(
                "page_size must be 1–{MAX_PAGE_SIZE}, got {}",
                c.page_size
            )));
        }
        if c.timeout_secs == 0 {
            return Err(ExportError::InvalidConfig("timeout_secs must be ≥ 1".into()));
        }
        Ok(self.config)
    }
}
