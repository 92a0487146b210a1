//! The page fetching seam
//!
//! The pager only needs "GET this URL and give me the whole body". Keeping
//! that behind a trait lets the run loop be driven by scripted fetchers.

use crate::error::Error;
use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;
use url::Url;

/// A fully-read response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedPage {
    /// HTTP status code
    pub status: u16,
    /// Entire response body
    pub body: Bytes,
}

impl FetchedPage {
    /// Create a fetched page
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Body as text, lossily decoded and cut to `max` characters
    pub fn body_preview(&self, max: usize) -> String {
        String::from_utf8_lossy(&self.body).chars().take(max).collect()
    }
}

/// Why a single fetch failed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The request never produced a response
    #[error("{0}")]
    Transport(String),

    /// A response arrived but its body could not be read to the end
    #[error("{0}")]
    BodyRead(String),
}

impl FetchError {
    /// Attach the page number, producing the run-level error
    pub fn at_page(self, page: u32) -> Error {
        match self {
            FetchError::Transport(message) => Error::Transport { page, message },
            FetchError::BodyRead(message) => Error::BodyRead { page, message },
        }
    }
}

/// Something that can GET a URL and read the whole body
///
/// Implementations must release the connection before returning, on success
/// and on every error path.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch a URL, reading its body fully into memory
    async fn fetch(&self, url: &Url) -> Result<FetchedPage, FetchError>;
}
