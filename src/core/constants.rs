//! Application-wide constants to avoid magic values throughout the codebase.

/// Default configuration values
pub mod defaults {
    /// Input file read when none is given
    pub const INPUT_FILE: &str = "urls.txt";
    /// JSON destination used when `--json` is passed without a path
    pub const JSON_OUTPUT_FILE: &str = "results.json";
    /// Config file name searched in the current and parent directories
    pub const CONFIG_FILE: &str = ".urlsweep.toml";
    /// How many parent directories are searched for a config file
    pub const CONFIG_SEARCH_DEPTH: usize = 3;
    /// Default worker pool size
    pub const WORKERS: usize = 5;
    /// Maximum redirects followed per request
    pub const REDIRECT_LIMIT: usize = 10;
}

/// HTTP status helpers
pub mod http_status {
    /// Whether a status code lies in the 2xx range
    pub fn is_success(status_code: u16) -> bool {
        (200..300).contains(&status_code)
    }
}

/// Timeout and duration constants
pub mod timeouts {
    use std::time::Duration;

    /// Default per-request timeout
    pub const DEFAULT: Duration = Duration::from_secs(10);
    /// Largest accepted timeout (24 hours)
    pub const MAX: Duration = Duration::from_secs(86400);
    /// Smallest accepted timeout
    pub const MIN: Duration = Duration::from_millis(1);
}

/// Worker pool limits
pub mod workers {
    /// Minimum worker count
    pub const MIN: usize = 1;
    /// Maximum worker count accepted from config or CLI
    pub const MAX: usize = 1000;
}

/// URL scheme prefixes
pub mod schemes {
    pub const HTTP: &str = "http://";
    pub const HTTPS: &str = "https://";
    /// Prefix added to targets without an explicit scheme
    pub const DEFAULT: &str = HTTPS;
}

/// Table rendering constants
pub mod table {
    /// Shown in place of a missing value
    pub const PLACEHOLDER: &str = "-";
    /// Width of the separator line under the header
    pub const SEPARATOR_WIDTH: usize = 80;
    /// Spaces between columns
    pub const COLUMN_PADDING: usize = 2;
    /// Column headers in display order
    pub const HEADERS: [&str; 7] = ["URL", "Status", "OK", "TTFB(ms)", "Bytes", "Contains", "Error"];
}

/// Process exit codes
pub mod exit_codes {
    /// Run completed, regardless of per-URL failures
    pub const SUCCESS: i32 = 0;
    /// Configuration or input I/O error
    pub const FAILURE: i32 = 1;
    /// Input file held no URLs
    pub const EMPTY_INPUT: i32 = 3;
}

/// Error message constants
pub mod error_messages {
    /// Reported for requests that exceed the timeout
    pub const OPERATION_TIMED_OUT: &str = "operation timed out";
    /// Reported for targets whose worker died before producing an outcome
    pub const WORKER_TERMINATED: &str = "worker terminated unexpectedly";
    /// Unknown error fallback
    pub const UNKNOWN_ERROR: &str = "Unknown error";
}
