use async_trait::async_trait;
use memchr::memmem;
use reqwest::redirect::Policy;
use tokio::time::Instant;

use crate::config::Config;
use crate::core::constants::{defaults, error_messages};
use crate::core::error::Result;
use crate::core::types::{Outcome, Target};

/// Checks a single target and reports what happened.
///
/// Implementations never fail: every problem is recorded in the returned
/// [`Outcome`].
#[async_trait]
pub trait CheckTarget: Send + Sync {
    async fn check(&self, target: &Target) -> Outcome;
}

/// Checks targets with a plain HTTP GET.
#[derive(Debug, Clone)]
pub struct HttpChecker {
    client: reqwest::Client,
    search: Option<String>,
}

impl HttpChecker {
    /// Build a checker sharing one connection pool across all checks.
    pub fn new(config: &Config) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout_duration())
            .redirect(Policy::limited(defaults::REDIRECT_LIMIT))
            .user_agent(config.user_agent())
            .build()?;

        Ok(Self::with_client(
            client,
            config.search_substring().map(str::to_string),
        ))
    }

    pub fn with_client(client: reqwest::Client, search: Option<String>) -> Self {
        Self {
            client,
            search: search.filter(|s| !s.is_empty()),
        }
    }

    fn find_match(&self, body: &[u8]) -> Option<bool> {
        self.search
            .as_deref()
            .map(|needle| memmem::find(body, needle.as_bytes()).is_some())
    }
}

#[async_trait]
impl CheckTarget for HttpChecker {
    async fn check(&self, target: &Target) -> Outcome {
        let start = Instant::now();

        let response = match self.client.get(target.as_str()).send().await {
            Ok(response) => response,
            Err(err) => return Outcome::unreachable(target, describe_error(&err)),
        };

        let ttfb_ms = elapsed_ms(start);
        let status_code = response.status().as_u16();

        // Consumes the response, so the connection is released on every path
        match response.bytes().await {
            Ok(body) => Outcome::responded(
                target,
                status_code,
                ttfb_ms,
                body.len() as u64,
                self.find_match(&body),
            ),
            Err(err) => Outcome::body_failed(target, status_code, ttfb_ms, describe_error(&err)),
        }
    }
}

fn elapsed_ms(start: Instant) -> u64 {
    u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX)
}

/// Human-readable cause of a request failure, never empty.
///
/// The messages of the whole `source()` chain are joined with `": "`, so the
/// innermost cause (refused connection, failed lookup, TLS error) is kept.
pub fn describe_error(err: &reqwest::Error) -> String {
    if err.is_timeout() {
        return error_messages::OPERATION_TIMED_OUT.to_string();
    }

    let mut causes: Vec<String> = Vec::new();
    let mut source = std::error::Error::source(err);
    while let Some(cause) = source {
        let message = cause.to_string();
        // Some wrappers already repeat their inner message
        if !message.trim().is_empty() && !causes.iter().any(|c| c.contains(&message)) {
            causes.push(message);
        }
        source = cause.source();
    }

    if causes.is_empty() {
        let message = err.to_string();
        if message.trim().is_empty() {
            return error_messages::UNKNOWN_ERROR.to_string();
        }
        return message;
    }

    causes.join(": ")
}
