//! reqwest-backed page fetcher
//!
//! One `reqwest::Client` is shared across all pages so connections can be
//! pooled, but every response is consumed inside [`HttpClient::fetch`] and
//! never escapes it.

use super::fetch::{FetchError, FetchedPage, PageFetcher};
use crate::config::PagerConfig;
use crate::error::{Error, Result};
use crate::types::StringMap;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Client;
use std::error::Error as _;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Request timeout; `None` lets a hung request block indefinitely
    pub timeout: Option<Duration>,
    /// Default headers for all requests
    pub default_headers: StringMap,
    /// User agent string
    pub user_agent: String,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout: None,
            default_headers: StringMap::new(),
            user_agent: format!("pagewalk/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl From<&PagerConfig> for HttpClientConfig {
    fn from(config: &PagerConfig) -> Self {
        Self {
            timeout: config.timeout(),
            default_headers: config.headers.clone(),
            user_agent: config.user_agent.clone(),
        }
    }
}

impl HttpClientConfig {
    /// Create a new config builder
    pub fn builder() -> HttpClientConfigBuilder {
        HttpClientConfigBuilder::default()
    }
}

/// Builder for HTTP client config
#[derive(Default)]
pub struct HttpClientConfigBuilder {
    config: HttpClientConfig,
}

impl HttpClientConfigBuilder {
    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = Some(timeout);
        self
    }

    /// Add a default header
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.default_headers.insert(key.into(), value.into());
        self
    }

    /// Set user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Build the config
    pub fn build(self) -> HttpClientConfig {
        self.config
    }
}

/// HTTP client used by the pager
pub struct HttpClient {
    client: Client,
    config: HttpClientConfig,
}

impl HttpClient {
    /// Create a new HTTP client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(HttpClientConfig::default())
    }

    /// Create a new HTTP client with custom configuration
    pub fn with_config(config: HttpClientConfig) -> Result<Self> {
        let mut builder = Client::builder()
            .user_agent(&config.user_agent)
            .default_headers(header_map(&config.default_headers)?);

        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder
            .build()
            .map_err(|e| Error::config(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self { client, config })
    }
}

#[async_trait]
impl PageFetcher for HttpClient {
    async fn fetch(&self, url: &Url) -> std::result::Result<FetchedPage, FetchError> {
        debug!("GET {url}");

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| FetchError::Transport(describe(&e)))?;

        let status = response.status().as_u16();

        // `bytes()` consumes the response; on failure it is dropped here too.
        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::BodyRead(describe(&e)))?;

        debug!("GET {url} -> {status}, {} bytes", body.len());
        Ok(FetchedPage { status, body })
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

fn header_map(headers: &StringMap) -> Result<HeaderMap> {
    let mut map = HeaderMap::new();
    for (key, value) in headers {
        let name = HeaderName::from_bytes(key.as_bytes())
            .map_err(|e| Error::invalid_value("headers", format!("'{key}': {e}")))?;
        let value = HeaderValue::from_str(value)
            .map_err(|e| Error::invalid_value("headers", format!("'{key}': {e}")))?;
        map.insert(name, value);
    }
    Ok(map)
}

/// reqwest's top-level message hides the cause, so walk the source chain
fn describe(err: &reqwest::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
