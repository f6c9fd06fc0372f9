//! Reporting
//!
//! This module renders the final outcome table and summary, writes the
//! optional JSON export, and holds the structured logging helpers.

pub mod json;
pub mod logging;
pub mod table;

// Re-export commonly used items
pub use json::write_json;
pub use table::{render_summary, render_table, sort_outcomes};
