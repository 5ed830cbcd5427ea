//! CLI binary for notion2md.
//!
//! A thin shim over the library crate that maps CLI flags to
//! `ExportConfig` and prints the Markdown.

use anyhow::{Context, Result};
use clap::Parser;
use notion2md::{export_page, export_page_to_file, ExportConfig};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const AFTER_HELP: &str = r#"EXAMPLES:
  # Basic export (stdout)
  notion2md d3b1c4f2a8e94b7c9f1e2a3b4c5d6e7f

  # Export to file
  notion2md d3b1c4f2a8e94b7c9f1e2a3b4c5d6e7f -o page.md

  # Token on the command line instead of the environment
  notion2md --token secret_abc d3b1c4f2a8e94b7c9f1e2a3b4c5d6e7f

  # Longer timeout for slow connections
  notion2md --timeout 120 d3b1c4f2a8e94b7c9f1e2a3b4c5d6e7f

WHAT GETS CONVERTED:
  Block type           Markdown
  ─────────────────    ──────────────────────────
  heading_1/2/3        # / ## / ### heading
  paragraph            plain text
  bulleted_list_item   - item
  numbered_list_item   1. item
  code                 ``` fenced block ```
  image (uploaded)     ![Untitled](url)

  Rich text keeps hyperlinks ([text](url)) and inline code (`code`).
  Tables, quotes, toggles, dividers, and nested children are skipped.

ENVIRONMENT VARIABLES:
  NOTION_TOKEN            Notion integration token (secret_… / ntn_…)
  NOTION2MD_API_URL       Override the API endpoint
  NOTION2MD_VERSION       Override the Notion-Version header

SETUP:
  1. Create an internal integration at https://www.notion.so/my-integrations
  2. Share the page with the integration (Share → Invite)
  3. Export:  NOTION_TOKEN=secret_… notion2md <page-id>
"#;

/// Export Notion pages to Markdown.
#[derive(Parser, Debug)]
#[command(
    name = "notion2md",
    version,
    about = "Export Notion pages to Markdown",
    long_about = "Fetch a Notion page's blocks over the REST API and convert them to a flat \
Markdown document. Requires an integration token with read access to the page.",
    arg_required_else_help = true,
    color = clap::ColorChoice::Auto,
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// Notion page (or block) ID, with or without dashes.
    page_id: String,

    /// Write Markdown to this file instead of stdout.
    #[arg(short, long, env = "NOTION2MD_OUTPUT")]
    output: Option<PathBuf>,

    /// Notion integration token.
    #[arg(long, env = "NOTION_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Notion API endpoint.
    #[arg(long, env = "NOTION2MD_API_URL", default_value = notion2md::config::DEFAULT_BASE_URL)]
    api_url: String,

    /// Notion-Version header value.
    #[arg(long, env = "NOTION2MD_VERSION", default_value = notion2md::config::DEFAULT_NOTION_VERSION)]
    notion_version: String,

    /// HTTP timeout in seconds.
    #[arg(long, env = "NOTION2MD_TIMEOUT", default_value_t = 30)]
    timeout: u64,

    /// Enable DEBUG-level tracing logs.
    #[arg(short, long, env = "NOTION2MD_VERBOSE")]
    verbose: bool,

    /// Suppress all output except errors.
    #[arg(short, long, env = "NOTION2MD_QUIET")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // ── Logging setup ────────────────────────────────────────────────────
    let filter = if cli.quiet {
        "error"
    } else if cli.verbose {
        "debug"
    } else {
        "warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();

    // ── Config ───────────────────────────────────────────────────────────
    let config = ExportConfig::builder()
        .token(cli.token.unwrap_or_default())
        .base_url(cli.api_url)
        .notion_version(cli.notion_version)
        .timeout_secs(cli.timeout)
        .build()
        .context("Invalid configuration")?;

    // ── Export ───────────────────────────────────────────────────────────
    match cli.output {
        Some(path) => {
            export_page_to_file(&cli.page_id, &path, &config)
                .await
                .with_context(|| format!("Failed to export page {}", cli.page_id))?;
            if !cli.quiet {
                eprintln!("Wrote {}", path.display());
            }
        }
        None => {
            let markdown = export_page(&cli.page_id, &config)
                .await
                .with_context(|| format!("Failed to export page {}", cli.page_id))?;
            print!("{markdown}");
        }
    }

    Ok(())
}
