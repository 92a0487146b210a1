//! Run configuration
//!
//! `PagerConfig` holds everything a run needs. It can be built in code with
//! [`PagerConfig::builder`], loaded from YAML/JSON with [`load_config`], and is
//! always validated before the first request goes out.

use crate::error::{Error, Result};
use crate::types::{StatusPolicy, StringMap, WindowMode};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;
use url::Url;

// ============================================================================
// Pager Config
// ============================================================================

/// Complete configuration for one paginated run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PagerConfig {
    /// Base URL, e.g. `https://api.example.com/v2`
    pub base_url: String,

    /// Endpoint path appended to the base URL
    pub endpoint_path: String,

    /// Initial `startTime` query value
    pub start: String,

    /// Initial `endTime` query value
    pub end: String,

    /// Number of pages to request
    pub total_pages: u32,

    /// Per-request timeout in seconds (none by default)
    pub timeout_secs: Option<u64>,

    /// How the window changes between pages
    pub window_mode: WindowMode,

    /// Dotted path to the next `startTime` in a response body
    pub meta_start_path: String,

    /// Dotted path to the next `endTime` in a response body
    pub meta_end_path: String,

    /// Treatment of non-2xx responses
    pub status_policy: StatusPolicy,

    /// User agent sent with every request
    pub user_agent: String,

    /// Extra headers sent with every request
    pub headers: StringMap,
}

impl Default for PagerConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            endpoint_path: String::new(),
            start: String::new(),
            end: String::new(),
            total_pages: 0,
            timeout_secs: None,
            window_mode: WindowMode::default(),
            meta_start_path: default_meta_start_path(),
            meta_end_path: default_meta_end_path(),
            status_policy: StatusPolicy::default(),
            user_agent: default_user_agent(),
            headers: StringMap::new(),
        }
    }
}

fn default_meta_start_path() -> String {
    "meta.startTime".to_string()
}

fn default_meta_end_path() -> String {
    "meta.endTime".to_string()
}

fn default_user_agent() -> String {
    format!("pagewalk/{}", env!("CARGO_PKG_VERSION"))
}

impl PagerConfig {
    /// Create a new config builder
    pub fn builder() -> PagerConfigBuilder {
        PagerConfigBuilder::default()
    }

    /// Request timeout, if one is configured
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// Check every field before a run begins
    pub fn validate(&self) -> Result<()> {
        require_non_empty("base_url", &self.base_url)?;
        require_non_empty("endpoint_path", &self.endpoint_path)?;
        require_non_empty("start", &self.start)?;
        require_non_empty("end", &self.end)?;

        let base = Url::parse(&self.base_url)?;
        if !matches!(base.scheme(), "http" | "https") {
            return Err(Error::invalid_value(
                "base_url",
                format!("unsupported scheme '{}'", base.scheme()),
            ));
        }
        if base.query().is_some() || base.fragment().is_some() {
            return Err(Error::invalid_value(
                "base_url",
                "must not carry a query or fragment",
            ));
        }
        if self.endpoint_path.contains(['?', '#']) {
            return Err(Error::invalid_value(
                "endpoint_path",
                "must not contain '?' or '#'",
            ));
        }

        if self.timeout_secs == Some(0) {
            return Err(Error::invalid_value(
                "timeout_secs",
                "must be greater than zero",
            ));
        }

        if self.window_mode == WindowMode::Meta {
            require_non_empty("meta_start_path", &self.meta_start_path)?;
            require_non_empty("meta_end_path", &self.meta_end_path)?;
        }

        Ok(())
    }
}

fn require_non_empty(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::missing_field(field));
    }
    Ok(())
}

/// Builder for [`PagerConfig`]
#[derive(Default)]
pub struct PagerConfigBuilder {
    config: PagerConfig,
}

impl PagerConfigBuilder {
    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    /// Set the endpoint path
    pub fn endpoint_path(mut self, path: impl Into<String>) -> Self {
        self.config.endpoint_path = path.into();
        self
    }

    /// Set the initial window
    pub fn window(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.config.start = start.into();
        self.config.end = end.into();
        self
    }

    /// Set the number of pages
    pub fn total_pages(mut self, pages: u32) -> Self {
        self.config.total_pages = pages;
        self
    }

    /// Set the request timeout
    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.config.timeout_secs = Some(secs);
        self
    }

    /// Set the window mode
    pub fn window_mode(mut self, mode: WindowMode) -> Self {
        self.config.window_mode = mode;
        self
    }

    /// Set the paths the next window is read from
    pub fn meta_paths(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.config.meta_start_path = start.into();
        self.config.meta_end_path = end.into();
        self
    }

    /// Set the status policy
    pub fn status_policy(mut self, policy: StatusPolicy) -> Self {
        self.config.status_policy = policy;
        self
    }

    /// Add a header
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.headers.insert(key.into(), value.into());
        self
    }

    /// Build the config without validating it
    pub fn build(self) -> PagerConfig {
        self.config
    }
}

// ============================================================================
// Loading
// ============================================================================

/// Load a config file; `.json` files are parsed as JSON, anything else as YAML
pub fn load_config(path: impl AsRef<Path>) -> Result<PagerConfig> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(Error::FileNotFound {
            path: path.display().to_string(),
        });
    }

    let content = fs::read_to_string(path)?;
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        Ok(serde_json::from_str(&content)?)
    } else {
        load_config_from_str(&content)
    }
}

/// Parse a config from a YAML string
pub fn load_config_from_str(yaml: &str) -> Result<PagerConfig> {
    Ok(serde_yaml::from_str(yaml)?)
}
