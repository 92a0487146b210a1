//! Pagination module
//!
//! Supports: fixed windows and windows carried forward from response `meta`.
//!
//! # Overview
//!
//! Every page request carries a `startTime`/`endTime` window and a page
//! number. A [`WindowStrategy`] decides, after each page, which window the
//! next request uses.

mod request;
mod strategies;
mod types;

pub use request::build_page_url;
pub use strategies::{strategy_for, FixedWindow, MetaWindow};
pub use types::{extract_path, NextWindow, Window, WindowStrategy};
