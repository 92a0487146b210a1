//! Common types used throughout pagewalk
//!
//! Small enums shared by the config, the CLI and the pager.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ============================================================================
// Type Aliases
// ============================================================================

/// Generic key-value map with string keys and values
pub type StringMap = HashMap<String, String>;

// ============================================================================
// Window Mode
// ============================================================================

/// How the startTime/endTime window evolves between pages
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum WindowMode {
    /// Every page is queried with the initial window
    #[default]
    Fixed,
    /// The next window is read from each response's `meta` object
    Meta,
}

// ============================================================================
// Status Policy
// ============================================================================

/// What to do with a completed exchange that carries a non-2xx status
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum StatusPolicy {
    /// Non-2xx statuses end the run
    #[default]
    Fail,
    /// Any received response counts as a processed page
    Ignore,
}

impl StatusPolicy {
    /// Whether a response with this status should end the run
    pub fn rejects(self, status: u16) -> bool {
        match self {
            StatusPolicy::Fail => !(200..300).contains(&status),
            StatusPolicy::Ignore => false,
        }
    }
}

// ============================================================================
// Output Format
// ============================================================================

/// Format of the per-page progress lines
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per line
    Json,
}
