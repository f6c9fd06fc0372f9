use std::fmt;

use crate::core::constants::exit_codes;

/// Error types for fatal urlsweep failures.
///
/// Per-URL problems never show up here; they are recorded inside an
/// [`Outcome`](crate::core::types::Outcome).
#[derive(Debug)]
pub enum UrlSweepError {
    /// IO error (file operations, etc.)
    Io(std::io::Error),

    /// Configuration error
    Config(String),

    /// HTTP client construction error
    Http(reqwest::Error),

    /// TOML parsing error
    TomlParsing(toml::de::Error),

    /// JSON serialization error
    Json(serde_json::Error),

    /// File not found error
    FileNotFound(String),

    /// Input file contained no URLs
    EmptyInput(String),
}

impl UrlSweepError {
    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            UrlSweepError::EmptyInput(_) => exit_codes::EMPTY_INPUT,
            _ => exit_codes::FAILURE,
        }
    }
}

impl fmt::Display for UrlSweepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UrlSweepError::Io(err) => write!(f, "IO error: {err}"),
            UrlSweepError::Config(msg) => write!(f, "Configuration error: {msg}"),
            UrlSweepError::Http(err) => write!(f, "HTTP error: {err}"),
            UrlSweepError::TomlParsing(err) => write!(f, "TOML parsing error: {err}"),
            UrlSweepError::Json(err) => write!(f, "JSON error: {err}"),
            UrlSweepError::FileNotFound(path) => write!(f, "File not found: {path}"),
            UrlSweepError::EmptyInput(path) => write!(f, "No URLs found in: {path}"),
        }
    }
}

impl std::error::Error for UrlSweepError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            UrlSweepError::Io(err) => Some(err),
            UrlSweepError::Http(err) => Some(err),
            UrlSweepError::TomlParsing(err) => Some(err),
            UrlSweepError::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for UrlSweepError {
    fn from(err: std::io::Error) -> Self {
        UrlSweepError::Io(err)
    }
}

impl From<reqwest::Error> for UrlSweepError {
    fn from(err: reqwest::Error) -> Self {
        UrlSweepError::Http(err)
    }
}

impl From<toml::de::Error> for UrlSweepError {
    fn from(err: toml::de::Error) -> Self {
        UrlSweepError::TomlParsing(err)
    }
}

impl From<serde_json::Error> for UrlSweepError {
    fn from(err: serde_json::Error) -> Self {
        UrlSweepError::Json(err)
    }
}

/// Type alias for Results using UrlSweepError
pub type Result<T> = std::result::Result<T, UrlSweepError>;
