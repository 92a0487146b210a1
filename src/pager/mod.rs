//! Pager module
//!
//! The sequential, fail-fast page loop.
//!
//! # Overview
//!
//! For `page` in `1..=total_pages` the pager builds the page URL, fetches it,
//! reads the whole body, applies the status policy, asks the window strategy
//! for the next window and writes one progress line. The first failure is
//! written as an error line and ends the run; no later page is requested.

mod types;

pub use types::{PageReport, RunSummary};

use crate::config::PagerConfig;
use crate::error::{Error, Result};
use crate::http::{HttpClient, HttpClientConfig, PageFetcher};
use crate::pagination::{build_page_url, strategy_for, NextWindow, Window, WindowStrategy};
use crate::types::OutputFormat;
use serde_json::json;
use std::io::Write;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Longest body excerpt carried by an HTTP status error
const STATUS_BODY_PREVIEW: usize = 512;

/// Drives one paginated run
pub struct Pager<F: PageFetcher> {
    fetcher: F,
    config: PagerConfig,
    strategy: Box<dyn WindowStrategy>,
    format: OutputFormat,
}

impl Pager<HttpClient> {
    /// Create a pager backed by a reqwest client built from the config
    pub fn from_config(config: PagerConfig) -> Result<Self> {
        let client = HttpClient::with_config(HttpClientConfig::from(&config))?;
        Ok(Self::new(client, config))
    }
}

impl<F: PageFetcher> Pager<F> {
    /// Create a pager with the window strategy selected by the config
    pub fn new(fetcher: F, config: PagerConfig) -> Self {
        let strategy = strategy_for(&config);
        Self {
            fetcher,
            config,
            strategy,
            format: OutputFormat::default(),
        }
    }

    /// Set the output format
    #[must_use]
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Replace the window strategy
    #[must_use]
    pub fn with_strategy(mut self, strategy: Box<dyn WindowStrategy>) -> Self {
        self.strategy = strategy;
        self
    }

    /// Get the underlying fetcher
    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Run every page, writing progress lines to `out`
    ///
    /// Configuration is validated first; an invalid config issues no request.
    /// On failure the error line has already been written when this returns.
    pub async fn run<W: Write>(&self, out: &mut W) -> Result<RunSummary> {
        self.config.validate()?;

        let started = Instant::now();
        let total = self.config.total_pages;
        let mut window = Window::new(&self.config.start, &self.config.end);
        let mut summary = RunSummary::default();

        info!(
            "Starting run: {} pages of {} {} over {window}",
            total,
            self.config.base_url,
            self.config.endpoint_path,
        );

        for page in 1..=total {
            let (report, next) = match self.process_page(page, &window).await {
                Ok(processed) => processed,
                Err(e) => {
                    warn!("Run stopped at page {page}/{total}: {e}");
                    // Errors without a page are reported by the caller
                    if e.is_run_failure() {
                        self.emit_error(out, &e);
                    }
                    return Err(e);
                }
            };

            writeln!(out, "{}", report.line(self.format))?;
            summary.pages.push(report);

            let last = next.is_last();
            window = next.into_window();
            if last && page < total {
                info!("Server reported page {page} as the last one");
                summary.ended_early = true;
                break;
            }
        }

        summary.elapsed = started.elapsed();
        info!(
            "Run completed: {} pages, {} bytes in {:?}",
            summary.requests(),
            summary.total_bytes(),
            summary.elapsed
        );

        Ok(summary)
    }

    /// Fetch one page and work out the window for the next one
    async fn process_page(&self, page: u32, window: &Window) -> Result<(PageReport, NextWindow)> {
        let url = build_page_url(
            &self.config.base_url,
            &self.config.endpoint_path,
            window,
            page,
        )?;

        let fetched = self
            .fetcher
            .fetch(&url)
            .await
            .map_err(|e| e.at_page(page))?;

        debug!("Page {page}: HTTP {}, {} bytes", fetched.status, fetched.body.len());

        if self.config.status_policy.rejects(fetched.status) {
            return Err(Error::HttpStatus {
                page,
                status: fetched.status,
                body: fetched.body_preview(STATUS_BODY_PREVIEW),
            });
        }

        let next = self.strategy.next_window(page, &fetched.body, window)?;

        let report = PageReport {
            page,
            status: fetched.status,
            bytes: fetched.body.len(),
            window: next.window().clone(),
        };

        Ok((report, next))
    }

    fn emit_error<W: Write>(&self, out: &mut W, err: &Error) {
        let line = match self.format {
            OutputFormat::Text => err.report_line(),
            OutputFormat::Json => json!({
                "error": err.kind(),
                "page": err.page(),
                "message": err.to_string(),
            })
            .to_string(),
        };

        if let Err(io) = writeln!(out, "{line}") {
            warn!("Failed to write error line: {io}");
        }
    }
}

/// Walk `total_pages` pages of `{base_url}/{endpoint_path}` with a fixed window
///
/// Progress lines go to stdout.
pub async fn run(
    base_url: &str,
    endpoint_path: &str,
    start: &str,
    end: &str,
    total_pages: u32,
) -> Result<RunSummary> {
    let config = PagerConfig::builder()
        .base_url(base_url)
        .endpoint_path(endpoint_path)
        .window(start, end)
        .total_pages(total_pages)
        .build();

    let pager = Pager::from_config(config)?;
    let mut stdout = std::io::stdout();
    pager.run(&mut stdout).await
}
