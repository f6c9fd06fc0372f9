//! URL checking
//!
//! The [`checker`] performs one HTTP probe per target; the [`pool`] fans
//! targets out to a fixed number of workers and collects every outcome.

pub mod checker;
pub mod pool;

pub use checker::{CheckTarget, HttpChecker, describe_error};
pub use pool::WorkerPool;
