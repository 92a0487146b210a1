//! Pager types
//!
//! Per-page reports and the summary of a completed run.

use crate::pagination::Window;
use crate::types::OutputFormat;
use serde_json::json;
use std::time::Duration;

/// What was observed for one processed page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageReport {
    /// Page number, starting at 1
    pub page: u32,
    /// HTTP status of the response
    pub status: u16,
    /// Size of the body that was read
    pub bytes: usize,
    /// Window the following page will be queried with
    pub window: Window,
}

impl PageReport {
    /// Render the progress line for this page
    pub fn line(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Text => format!(
                "Page {} processed. New startTime: {}, new endTime: {}",
                self.page, self.window.start, self.window.end
            ),
            OutputFormat::Json => json!({
                "page": self.page,
                "status": self.status,
                "bytes": self.bytes,
                "startTime": self.window.start,
                "endTime": self.window.end,
            })
            .to_string(),
        }
    }
}

/// Summary of a run that finished without error
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// Processed pages, in request order
    pub pages: Vec<PageReport>,
    /// True when the server reported the last page before `total_pages`
    pub ended_early: bool,
    /// Wall time of the run
    pub elapsed: Duration,
}

impl RunSummary {
    /// Number of requests issued
    pub fn requests(&self) -> usize {
        self.pages.len()
    }

    /// Total body bytes read
    pub fn total_bytes(&self) -> usize {
        self.pages.iter().map(|p| p.bytes).sum()
    }

    /// Window after the last processed page
    pub fn final_window(&self) -> Option<&Window> {
        self.pages.last().map(|p| &p.window)
    }
}
