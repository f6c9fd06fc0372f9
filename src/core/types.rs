use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::constants::{http_status, schemes};

/// A normalized request target: scheme, host and path.
///
/// Targets are only produced by [`Target::normalize`], so every value
/// carries an explicit `http://` or `https://` scheme.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Target(String);

impl Target {
    /// Normalize one raw input line into a target.
    ///
    /// Surrounding whitespace is trimmed and blank lines yield `None`.
    /// Lines without an `http://` or `https://` prefix get `https://` prepended;
    /// lines that already carry one are kept as they are.
    ///
    /// # Examples
    /// ```
    /// use urlsweep::Target;
    ///
    /// let target = Target::normalize("  example.com ").unwrap();
    /// assert_eq!(target.as_str(), "https://example.com");
    ///
    /// let target = Target::normalize("http://example.com").unwrap();
    /// assert_eq!(target.as_str(), "http://example.com");
    ///
    /// assert!(Target::normalize("   ").is_none());
    /// ```
    pub fn normalize(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }

        if has_scheme(trimmed, schemes::HTTP) || has_scheme(trimmed, schemes::HTTPS) {
            Some(Self(trimmed.to_string()))
        } else {
            Some(Self(format!("{}{trimmed}", schemes::DEFAULT)))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn has_scheme(url: &str, scheme: &str) -> bool {
    url.get(..scheme.len())
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Target {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// The result of checking one target.
///
/// Outcomes are only built by the constructors below, which keep the fields
/// consistent with each other.
///
/// * `status_code == 0` means no response was obtained and `error` is set.
/// * `error` set with a non-zero `status_code` means the headers arrived but
///   the body could not be read. The status is kept; `ok` is false.
/// * `contains` is only present when a search substring was configured and
///   the body was read in full.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    /// The target that was checked
    url: String,
    /// HTTP status code, 0 if no response was obtained
    status_code: u16,
    /// Response obtained with a 2xx status and no error
    ok: bool,
    /// Milliseconds from request start until headers were received
    ttfb_ms: u64,
    /// Bytes read from the response body
    size_bytes: u64,
    /// Whether the body contained the search substring
    #[serde(default, skip_serializing_if = "Option::is_none")]
    contains: Option<bool>,
    /// Description of what went wrong
    #[serde(default, skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl Outcome {
    /// No response was obtained (DNS failure, refused connection, timeout, TLS).
    pub fn unreachable(target: &Target, error: String) -> Self {
        Self {
            url: target.to_string(),
            status_code: 0,
            ok: false,
            ttfb_ms: 0,
            size_bytes: 0,
            contains: None,
            error: Some(error),
        }
    }

    /// A response was obtained and its body read in full.
    pub fn responded(
        target: &Target,
        status_code: u16,
        ttfb_ms: u64,
        size_bytes: u64,
        contains: Option<bool>,
    ) -> Self {
        Self {
            url: target.to_string(),
            status_code,
            ok: http_status::is_success(status_code),
            ttfb_ms,
            size_bytes,
            contains,
            error: None,
        }
    }

    /// Headers arrived but reading the body failed.
    pub fn body_failed(target: &Target, status_code: u16, ttfb_ms: u64, error: String) -> Self {
        Self {
            url: target.to_string(),
            status_code,
            ok: false,
            ttfb_ms,
            size_bytes: 0,
            contains: None,
            error: Some(error),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// HTTP status code, 0 if no response was obtained
    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    pub fn ttfb_ms(&self) -> u64 {
        self.ttfb_ms
    }

    pub fn size_bytes(&self) -> u64 {
        self.size_bytes
    }

    /// `None` when no search substring was configured or the body was not read
    pub fn contains(&self) -> Option<bool> {
        self.contains
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    /// Success flag as reported: never true when an error was recorded.
    pub fn is_ok(&self) -> bool {
        self.ok && !self.has_error()
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match (&self.error, self.status_code) {
            (Some(err), 0) => write!(f, "{} - {}", self.url, err),
            (Some(err), status) => write!(f, "{} - {} - {}", status, self.url, err),
            (None, status) => write!(f, "{} - {}", status, self.url),
        }
    }
}
