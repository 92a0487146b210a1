//! Pagination types and traits
//!
//! Defines the query window and the strategy trait that decides the window of
//! the next page.

use crate::error::Result;
use serde_json::Value;
use std::fmt;

/// The `startTime`/`endTime` pair sent with every page request
///
/// Both values are opaque: they are URL-encoded and sent as-is, never parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Window {
    /// Value of the `startTime` query parameter
    pub start: String,
    /// Value of the `endTime` query parameter
    pub end: String,
}

impl Window {
    /// Create a new window
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }
}

impl fmt::Display for Window {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// Result of the next window computation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NextWindow {
    /// More pages may follow; query them with this window
    Continue(Window),
    /// The server reported this was the last page
    Last(Window),
}

impl NextWindow {
    /// The window carried by this result
    pub fn window(&self) -> &Window {
        match self {
            Self::Continue(w) | Self::Last(w) => w,
        }
    }

    /// Consume and return the window
    pub fn into_window(self) -> Window {
        match self {
            Self::Continue(w) | Self::Last(w) => w,
        }
    }

    /// Check if no further page should be requested
    pub fn is_last(&self) -> bool {
        matches!(self, Self::Last(_))
    }
}

/// Core trait for window strategies
pub trait WindowStrategy: Send + Sync {
    /// Compute the window for the page after `page` from its response body
    fn next_window(&self, page: u32, body: &[u8], current: &Window) -> Result<NextWindow>;
}

/// Extract a scalar at a dotted path (`meta.startTime` or `$.meta.startTime`)
pub fn extract_path(value: &Value, path: &str) -> Option<String> {
    let mut current = value;
    for part in split_path(path) {
        match current {
            Value::Object(map) => {
                current = map.get(part)?;
            }
            _ => return None,
        }
    }

    match current {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Path of the object that holds the field at `path`, e.g. `meta` for `meta.startTime`
pub fn parent_path(path: &str) -> Option<String> {
    let parts: Vec<&str> = split_path(path).collect();
    match parts.split_last() {
        Some((_, parent)) if !parent.is_empty() => Some(parent.join(".")),
        _ => None,
    }
}

fn split_path(path: &str) -> impl Iterator<Item = &str> {
    path.strip_prefix("$.")
        .unwrap_or(path)
        .split('.')
        .filter(|p| !p.is_empty())
}
