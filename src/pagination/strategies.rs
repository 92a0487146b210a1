//! Window strategy implementations

use super::types::{extract_path, parent_path, NextWindow, Window, WindowStrategy};
use crate::config::PagerConfig;
use crate::error::{Error, Result};
use crate::types::WindowMode;
use serde_json::Value;

// ============================================================================
// Fixed Window
// ============================================================================

/// Keeps the initial window for every page
///
/// The response body is fetched but never looked at.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedWindow;

impl WindowStrategy for FixedWindow {
    fn next_window(&self, _page: u32, _body: &[u8], current: &Window) -> Result<NextWindow> {
        Ok(NextWindow::Continue(current.clone()))
    }
}

// ============================================================================
// Meta Window
// ============================================================================

/// Reads the next window from a `meta` object in the response body
///
/// Expected response shape:
///
/// ```json
/// {
///   "meta": {
///     "total": 22835, "skip": 0, "limit": 1000, "page": 1, "pages": 23,
///     "startTime": "2023-11-14T20:00:45.061Z",
///     "endTime": "2023-11-21T20:00:45.061Z"
///   }
/// }
/// ```
///
/// When `page` and `pages` sit next to the start field and `page >= pages`,
/// the result is [`NextWindow::Last`].
#[derive(Debug, Clone)]
pub struct MetaWindow {
    /// Dotted path to the next start value
    pub start_path: String,
    /// Dotted path to the next end value
    pub end_path: String,
}

impl Default for MetaWindow {
    fn default() -> Self {
        Self::new("meta.startTime", "meta.endTime")
    }
}

impl MetaWindow {
    /// Create a new meta window strategy
    pub fn new(start_path: impl Into<String>, end_path: impl Into<String>) -> Self {
        Self {
            start_path: start_path.into(),
            end_path: end_path.into(),
        }
    }

    fn is_last_page(&self, body: &Value) -> bool {
        let prefix = parent_path(&self.start_path)
            .map(|p| format!("{p}."))
            .unwrap_or_default();

        let read = |field: &str| {
            extract_path(body, &format!("{prefix}{field}")).and_then(|s| s.parse::<u64>().ok())
        };

        match (read("page"), read("pages")) {
            (Some(page), Some(pages)) => page >= pages,
            _ => false,
        }
    }
}

impl WindowStrategy for MetaWindow {
    fn next_window(&self, page: u32, body: &[u8], _current: &Window) -> Result<NextWindow> {
        let json: Value = serde_json::from_slice(body)
            .map_err(|e| Error::cursor(page, format!("response is not JSON: {e}")))?;

        let start = extract_path(&json, &self.start_path)
            .ok_or_else(|| Error::cursor(page, format!("no value at '{}'", self.start_path)))?;
        let end = extract_path(&json, &self.end_path)
            .ok_or_else(|| Error::cursor(page, format!("no value at '{}'", self.end_path)))?;

        let window = Window::new(start, end);
        if self.is_last_page(&json) {
            Ok(NextWindow::Last(window))
        } else {
            Ok(NextWindow::Continue(window))
        }
    }
}

/// Build the strategy selected by a config
pub fn strategy_for(config: &PagerConfig) -> Box<dyn WindowStrategy> {
    match config.window_mode {
        WindowMode::Fixed => Box::new(FixedWindow),
        WindowMode::Meta => Box::new(MetaWindow::new(
            config.meta_start_path.clone(),
            config.meta_end_path.clone(),
        )),
    }
}
