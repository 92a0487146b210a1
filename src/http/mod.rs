//! HTTP client module
//!
//! Provides the [`PageFetcher`] seam and its reqwest implementation.
//!
//! # Features
//!
//! - **Whole-body reads**: every fetch returns the complete body
//! - **Scoped responses**: the response never outlives the fetch call
//! - **Optional timeout**: no timeout unless one is configured

mod client;
mod fetch;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder};
pub use fetch::{FetchError, FetchedPage, PageFetcher};

#[cfg(test)]
mod tests;
