//! CLI runner - resolves configuration and drives the pager

use crate::cli::commands::Cli;
use crate::config::{load_config, PagerConfig};
use crate::error::Result;
use crate::pager::{Pager, RunSummary};
use std::io::Write;
use tracing::debug;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the pager, writing progress lines to stdout
    pub async fn run(&self) -> Result<RunSummary> {
        let mut stdout = std::io::stdout();
        self.run_with_output(&mut stdout).await
    }

    /// Run the pager, writing progress lines to `out`
    pub async fn run_with_output<W: Write>(&self, out: &mut W) -> Result<RunSummary> {
        let config = self.resolve_config()?;
        debug!("Resolved config: {config:?}");

        let pager = Pager::from_config(config)?.with_format(self.cli.format);
        pager.run(out).await
    }

    /// Load the config file, if any, then apply command-line overrides
    pub fn resolve_config(&self) -> Result<PagerConfig> {
        let mut config = match &self.cli.config {
            Some(path) => load_config(path)?,
            None => PagerConfig::default(),
        };

        let cli = &self.cli;
        if let Some(base_url) = &cli.base_url {
            config.base_url.clone_from(base_url);
        }
        if let Some(endpoint) = &cli.endpoint {
            config.endpoint_path.clone_from(endpoint);
        }
        if let Some(start) = &cli.start {
            config.start.clone_from(start);
        }
        if let Some(end) = &cli.end {
            config.end.clone_from(end);
        }
        if let Some(pages) = cli.pages {
            config.total_pages = pages;
        }
        if let Some(timeout) = cli.timeout_secs {
            config.timeout_secs = Some(timeout);
        }
        if let Some(mode) = cli.window {
            config.window_mode = mode;
        }
        if let Some(policy) = cli.status_policy {
            config.status_policy = policy;
        }
        for (name, value) in &cli.headers {
            config.headers.insert(name.clone(), value.clone());
        }

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::types::{StatusPolicy, WindowMode};
    use clap::Parser;
    use std::io::Write as _;

    fn runner(args: &[&str]) -> Runner {
        let mut argv = vec!["pagewalk"];
        argv.extend_from_slice(args);
        Runner::new(Cli::try_parse_from(argv).unwrap())
    }

    #[test]
    fn test_resolve_from_flags() {
        let config = runner(&[
            "--base-url",
            "http://localhost:9000",
            "--endpoint",
            "events",
            "--start",
            "a",
            "--end",
            "b",
            "--pages",
            "4",
            "--timeout-secs",
            "10",
        ])
        .resolve_config()
        .unwrap();

        assert_eq!(config.base_url, "http://localhost:9000");
        assert_eq!(config.total_pages, 4);
        assert_eq!(config.timeout_secs, Some(10));
        assert_eq!(config.window_mode, WindowMode::Fixed);
    }

    #[test]
    fn test_flags_override_file() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(
            file,
            "base_url: http://from-file\nendpoint_path: events\nstart: a\nend: b\ntotal_pages: 23\nstatus_policy: ignore"
        )
        .unwrap();

        let path = file.path().to_string_lossy().to_string();
        let config = runner(&["-C", path.as_str(), "--pages", "2", "--window", "meta"])
            .resolve_config()
            .unwrap();

        assert_eq!(config.base_url, "http://from-file");
        assert_eq!(config.total_pages, 2);
        assert_eq!(config.window_mode, WindowMode::Meta);
        assert_eq!(config.status_policy, StatusPolicy::Ignore);
    }

    #[test]
    fn test_resolve_rejects_incomplete_config() {
        let result = runner(&["--base-url", "http://localhost"]).resolve_config();
        assert!(matches!(result, Err(Error::MissingConfigField { .. })));
    }

    #[tokio::test]
    async fn test_run_zero_pages() {
        let mut out = Vec::new();
        let summary = runner(&[
            "--base-url",
            "http://localhost:1",
            "--endpoint",
            "events",
            "--start",
            "a",
            "--end",
            "b",
            "--pages",
            "0",
        ])
        .run_with_output(&mut out)
        .await
        .unwrap();

        assert_eq!(summary.requests(), 0);
        assert!(out.is_empty());
    }
}
