//! CLI arguments and parsing

use crate::types::{OutputFormat, StatusPolicy, WindowMode};
use clap::Parser;
use std::path::PathBuf;

/// Walk a paginated REST endpoint over a startTime/endTime window
#[derive(Parser, Debug)]
#[command(name = "pagewalk")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (YAML, or JSON with a .json extension)
    #[arg(short = 'C', long)]
    pub config: Option<PathBuf>,

    /// Base URL of the API
    #[arg(long)]
    pub base_url: Option<String>,

    /// Endpoint path appended to the base URL
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Initial startTime value
    #[arg(long)]
    pub start: Option<String>,

    /// Initial endTime value
    #[arg(long)]
    pub end: Option<String>,

    /// Number of pages to request
    #[arg(long)]
    pub pages: Option<u32>,

    /// Per-request timeout in seconds (no timeout by default)
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// How the window evolves between pages
    #[arg(long, value_enum)]
    pub window: Option<WindowMode>,

    /// What to do with non-2xx responses
    #[arg(long, value_enum)]
    pub status_policy: Option<StatusPolicy>,

    /// Extra request header as `Name: value` (repeatable)
    #[arg(short = 'H', long = "header", value_parser = parse_header)]
    pub headers: Vec<(String, String)>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

fn parse_header(raw: &str) -> Result<(String, String), String> {
    let (name, value) = raw
        .split_once(':')
        .ok_or_else(|| format!("expected `Name: value`, got '{raw}'"))?;

    let name = name.trim();
    if name.is_empty() {
        return Err(format!("empty header name in '{raw}'"));
    }

    Ok((name.to_string(), value.trim().to_string()))
}
