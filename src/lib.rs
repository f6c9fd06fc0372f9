//! urlsweep checks a list of URLs concurrently and reports how each one
//! responded.
//!
//! URLs are read from a text file, one per line, and handed to a fixed-size
//! pool of workers. Every URL produces exactly one [`Outcome`], whether the
//! request succeeded, returned an error status, or never reached a server.
//! Outcomes are sorted by URL and rendered as a table, and can optionally be
//! exported as JSON.

pub mod checking;
pub mod config;
pub mod core;
pub mod input;
pub mod reporting;
pub mod ui;

// Re-export commonly used types for convenience
pub use checking::{CheckTarget, HttpChecker, WorkerPool};
pub use config::{CliConfig, Config};
pub use crate::core::{Outcome, Result, Target, UrlSweepError};
pub use input::{ensure_not_empty, load_targets};
pub use reporting::{render_summary, render_table, sort_outcomes, write_json};
