//! # pagewalk
//!
//! Walks a paginated REST endpoint one page at a time, sending a
//! `startTime`/`endTime` window and a page number with every request.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pagewalk::{Pager, PagerConfig, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = PagerConfig::builder()
//!         .base_url("https://api.example.com/v2")
//!         .endpoint_path("devices/measurements")
//!         .window("2022-11-14T20:00:45.061Z", "2023-11-21T20:00:45.061Z")
//!         .total_pages(23)
//!         .build();
//!
//!     let pager = Pager::from_config(config)?;
//!     let summary = pager.run(&mut std::io::stdout()).await?;
//!     println!("{} pages", summary.requests());
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────┐   ┌──────────────┐   ┌──────────────────────────┐
//! │ PagerConfig│──▶│    Pager     │──▶│ PageFetcher (HttpClient) │
//! └────────────┘   │ 1..=N, fail  │   └──────────────────────────┘
//!                  │ fast         │──▶ WindowStrategy (Fixed | Meta)
//!                  └──────────────┘
//! ```
//!
//! Requests are strictly sequential. The first transport, body-read, status
//! or cursor failure ends the run.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types
pub mod types;

/// Run configuration and loading
pub mod config;

/// Query windows, page URLs and window strategies
pub mod pagination;

/// Page fetching over HTTP
pub mod http;

/// The page loop
pub mod pager;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::{load_config, load_config_from_str, PagerConfig};
pub use error::{Error, Result};
pub use pager::{run, PageReport, Pager, RunSummary};
pub use types::*;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
