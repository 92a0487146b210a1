//! Error types for pagewalk
//!
//! Setup errors (configuration, files, URLs) happen before the first request.
//! Run failures carry the page they happened on and end the run immediately.

use thiserror::Error;

/// The main error type for pagewalk
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Missing required config field: {field}")]
    MissingConfigField { field: String },

    #[error("Invalid config value for '{field}': {message}")]
    InvalidConfigValue { field: String, message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // Run Errors
    // ============================================================================
    #[error("{message}")]
    Transport { page: u32, message: String },

    #[error("{message}")]
    BodyRead { page: u32, message: String },

    #[error("HTTP {status} on page {page}: {body}")]
    HttpStatus { page: u32, status: u16, body: String },

    #[error("Failed to read next window from page {page}: {message}")]
    Cursor { page: u32, message: String },

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File not found: {path}")]
    FileNotFound { path: String },
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingConfigField {
            field: field.into(),
        }
    }

    /// Create an invalid value error
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfigValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a cursor extraction error
    pub fn cursor(page: u32, message: impl Into<String>) -> Self {
        Self::Cursor {
            page,
            message: message.into(),
        }
    }

    /// Page the run stopped on, if this error ended a started run
    pub fn page(&self) -> Option<u32> {
        match self {
            Error::Transport { page, .. }
            | Error::BodyRead { page, .. }
            | Error::HttpStatus { page, .. }
            | Error::Cursor { page, .. } => Some(*page),
            _ => None,
        }
    }

    /// Check if this error terminated a run after it started issuing requests
    pub fn is_run_failure(&self) -> bool {
        self.page().is_some()
    }

    /// Short machine-readable kind, used by the JSON output format
    pub fn kind(&self) -> &'static str {
        match self {
            Error::Transport { .. } => "transport",
            Error::BodyRead { .. } => "body_read",
            Error::HttpStatus { .. } => "http_status",
            Error::Cursor { .. } => "cursor",
            Error::Io(_) => "io",
            _ => "config",
        }
    }

    /// The console line reported when this error ends a run
    pub fn report_line(&self) -> String {
        match self {
            Error::BodyRead { message, .. } => format!("Error reading response body: {message}"),
            other => format!("Error: {other}"),
        }
    }
}

/// Result type alias for pagewalk
pub type Result<T> = std::result::Result<T, Error>;
