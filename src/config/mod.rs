//! Configuration management
//!
//! This module handles loading and managing configuration from
//! TOML files and CLI arguments.

use serde::{Deserialize, Deserializer, de};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::core::constants::{defaults, timeouts, workers};
use crate::core::error::{Result, UrlSweepError};

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Config {
    /// File with one URL per line
    pub file: Option<String>,

    /// Number of concurrent workers
    pub workers: Option<usize>,

    /// Timeout for each HTTP request: whole seconds or a duration string like "500ms"
    #[serde(default, deserialize_with = "deserialize_timeout")]
    pub timeout: Option<Duration>,

    /// Substring searched for in every response body
    pub contains: Option<String>,

    /// Where to write JSON results, if anywhere
    pub json_output: Option<String>,

    /// Custom User-Agent header
    pub user_agent: Option<String>,

    /// Enable verbose logging
    pub verbose: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            file: Some(defaults::INPUT_FILE.to_string()),
            workers: Some(defaults::WORKERS),
            timeout: Some(timeouts::DEFAULT),
            contains: None,
            json_output: None, // No JSON file by default
            user_agent: None,
            verbose: Some(false),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            UrlSweepError::Config(format!(
                "Could not read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| {
            UrlSweepError::Config(format!(
                "Invalid TOML in config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Look for a config file in `start_dir` and up to three of its parents
    pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
        start_dir
            .ancestors()
            .take(defaults::CONFIG_SEARCH_DEPTH + 1)
            .map(|dir| dir.join(defaults::CONFIG_FILE))
            .find(|candidate| candidate.is_file())
    }

    /// Load the nearest config file, falling back to defaults when there is none.
    ///
    /// A config file that exists but cannot be parsed is an error.
    pub fn load_from_standard_locations() -> Result<Self> {
        let cwd = std::env::current_dir()?;
        match Self::find_config_file(&cwd) {
            Some(path) => {
                log::debug!("Using config file {}", path.display());
                Self::load_from_file(path)
            }
            None => Ok(Self::default()),
        }
    }

    /// Merge this config with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli_config: &CliConfig) {
        if let Some(ref file) = cli_config.file {
            self.file = Some(file.clone());
        }
        if let Some(workers) = cli_config.workers {
            self.workers = Some(workers);
        }
        if let Some(timeout) = cli_config.timeout {
            self.timeout = Some(timeout);
        }
        if let Some(ref contains) = cli_config.contains {
            self.contains = Some(contains.clone());
        }
        if let Some(ref json_output) = cli_config.json_output {
            self.json_output = Some(json_output.clone());
        }
        if let Some(ref user_agent) = cli_config.user_agent {
            self.user_agent = Some(user_agent.clone());
        }
        if cli_config.verbose {
            self.verbose = Some(true);
        }
    }

    /// Input file path
    pub fn input_path(&self) -> PathBuf {
        PathBuf::from(self.file.as_deref().unwrap_or(defaults::INPUT_FILE))
    }

    /// Worker pool size
    pub fn worker_count(&self) -> usize {
        self.workers.unwrap_or(defaults::WORKERS)
    }

    /// Per-request timeout
    pub fn timeout_duration(&self) -> Duration {
        self.timeout.unwrap_or(timeouts::DEFAULT)
    }

    /// Search substring; an empty string counts as not configured
    pub fn search_substring(&self) -> Option<&str> {
        self.contains.as_deref().filter(|s| !s.is_empty())
    }

    /// JSON destination, if JSON output was requested
    pub fn json_output_path(&self) -> Option<PathBuf> {
        self.json_output
            .as_deref()
            .filter(|s| !s.is_empty())
            .map(PathBuf::from)
    }

    /// User-Agent header sent with every request
    pub fn user_agent(&self) -> &str {
        self.user_agent.as_deref().unwrap_or(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ))
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if let Some(timeout) = self.timeout {
            if timeout < timeouts::MIN {
                return Err(UrlSweepError::Config(format!(
                    "Timeout of {} is too short. Expected at least {}.",
                    humantime::format_duration(timeout),
                    humantime::format_duration(timeouts::MIN)
                )));
            }
            if timeout > timeouts::MAX {
                return Err(UrlSweepError::Config(format!(
                    "Timeout of {} is extremely large (>24 hours). Consider using a smaller value.",
                    humantime::format_duration(timeout)
                )));
            }
        }

        if let Some(count) = self.workers {
            if count < workers::MIN {
                return Err(UrlSweepError::Config(
                    "Worker count cannot be 0. Expected a positive integer.".to_string(),
                ));
            }
            if count > workers::MAX {
                return Err(UrlSweepError::Config(format!(
                    "Worker count of {count} is extremely high and may cause system instability. Expected at most {}.",
                    workers::MAX
                )));
            }
        }

        if let Some(ref file) = self.file
            && file.trim().is_empty()
        {
            return Err(UrlSweepError::Config(
                "Input file path cannot be empty.".to_string(),
            ));
        }

        Ok(())
    }
}

/// Parse a timeout: a plain integer is seconds, anything else a duration
/// such as `500ms`, `10s` or `1m 30s`.
pub fn parse_timeout(value: &str) -> std::result::Result<Duration, String> {
    let value = value.trim();
    if let Ok(seconds) = value.parse::<u64>() {
        return Ok(Duration::from_secs(seconds));
    }
    humantime::parse_duration(value).map_err(|e| format!("invalid duration '{value}': {e}"))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawTimeout {
    Seconds(u64),
    Text(String),
}

fn deserialize_timeout<'de, D>(deserializer: D) -> std::result::Result<Option<Duration>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<RawTimeout>::deserialize(deserializer)? {
        None => Ok(None),
        Some(RawTimeout::Seconds(seconds)) => Ok(Some(Duration::from_secs(seconds))),
        Some(RawTimeout::Text(text)) => parse_timeout(&text).map(Some).map_err(de::Error::custom),
    }
}

/// Configuration options that can come from CLI
#[derive(Debug, Default)]
pub struct CliConfig {
    pub file: Option<String>,        // --file
    pub workers: Option<usize>,      // --workers
    pub timeout: Option<Duration>,   // --timeout
    pub contains: Option<String>,    // --contains
    pub json_output: Option<String>, // --json
    pub user_agent: Option<String>,  // --user-agent

    // Output & verbosity
    pub quiet: bool,       // --quiet
    pub verbose: bool,     // --verbose
    pub no_progress: bool, // --no-progress

    // Configuration
    pub config_file: Option<String>, // --config
    pub no_config: bool,             // --no-config
}
