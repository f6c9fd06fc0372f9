//! Input loading
//!
//! Turns a file with one URL per line into an ordered list of targets.

pub mod loader;

// Re-export commonly used items
pub use loader::{ensure_not_empty, load_targets, read_targets};
