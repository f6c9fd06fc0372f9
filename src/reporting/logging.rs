use crate::config::Config;
use crate::core::types::Outcome;
use log::{debug, error, info, warn};
use std::io::Write;
use std::path::Path;

/// Initialize the logger with appropriate level based on verbosity
pub fn init_logger(verbose: bool, quiet: bool) {
    let level = level_for(verbose, quiet);

    let result = env_logger::Builder::from_default_env()
        .filter_level(level)
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .try_init();

    if result.is_ok() {
        debug!("Logger initialized with level: {level:?}");
    }
}

fn level_for(verbose: bool, quiet: bool) -> log::LevelFilter {
    if quiet {
        log::LevelFilter::Off
    } else if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Off // Only show structured logs in verbose mode
    }
}

/// Log configuration information
pub fn log_config_info(config: &Config) {
    info!(
        "Configuration: workers={}, timeout={}, contains={:?}",
        config.worker_count(),
        humantime::format_duration(config.timeout_duration()),
        config.search_substring()
    );
    info!(
        "Output: json={:?}, user_agent={}",
        config.json_output_path(),
        config.user_agent()
    );
}

/// Log input loading information
pub fn log_input_info(path: &Path, target_count: usize) {
    info!("Loaded {target_count} URL(s) from {}", path.display());
}

/// Log check start
pub fn log_check_start(target_count: usize, workers: usize) {
    info!("Starting checks of {target_count} URL(s) with {workers} worker(s)");
}

/// Log check completion
pub fn log_check_complete(total: usize, failed: usize, duration_ms: u128) {
    if failed == 0 {
        info!("✅ Checks complete: {total}/{total} URLs OK ({duration_ms}ms)");
    } else {
        warn!(
            "❌ Checks complete: {}/{} URLs OK, {} failed ({}ms)",
            total - failed,
            total,
            failed,
            duration_ms
        );
    }
}

/// Log individual outcomes for debugging
pub fn log_outcome(outcome: &Outcome) {
    match (outcome.status_code(), outcome.error()) {
        (0, Some(err)) => debug!("✗ {} -> {err}", outcome.url()),
        (status, Some(err)) => debug!("✗ {} -> {status} ({err})", outcome.url()),
        (status, None) if outcome.is_ok() => {
            debug!("✓ {} -> {status} in {}ms", outcome.url(), outcome.ttfb_ms())
        }
        (status, None) => debug!("✗ {} -> {status}", outcome.url()),
    }
}

/// Log error information
pub fn log_error(message: &str, source: Option<&dyn std::error::Error>) {
    match source {
        Some(err) => error!("{message}: {err}"),
        None => error!("{message}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Target;
    use std::io;

    #[test]
    fn test_level_for() {
        assert_eq!(level_for(false, false), log::LevelFilter::Off);
        assert_eq!(level_for(true, false), log::LevelFilter::Debug);
        assert_eq!(level_for(false, true), log::LevelFilter::Off);
        // Quiet takes precedence
        assert_eq!(level_for(true, true), log::LevelFilter::Off);
    }

    #[test]
    fn test_logger_initialization_twice_does_not_panic() {
        init_logger(true, false);
        init_logger(false, true);
    }

    #[test]
    fn test_log_config_info() {
        log_config_info(&Config::default());
        log_config_info(&Config {
            workers: Some(50),
            contains: Some("needle".to_string()),
            json_output: Some("out.json".to_string()),
            ..Default::default()
        });
    }

    #[test]
    fn test_log_input_and_check_info() {
        log_input_info(Path::new("urls.txt"), 0);
        log_input_info(Path::new("urls.txt"), 1000);
        log_check_start(10, 5);
        log_check_complete(10, 0, 1000);
        log_check_complete(10, 10, 0);
        log_check_complete(10, 3, 1500);
    }

    #[test]
    fn test_log_outcome_variants() {
        let target = Target::normalize("example.com").unwrap();
        log_outcome(&Outcome::responded(&target, 200, 1, 2, None));
        log_outcome(&Outcome::responded(&target, 404, 1, 2, None));
        log_outcome(&Outcome::unreachable(&target, "dns".to_string()));
        log_outcome(&Outcome::body_failed(&target, 200, 1, "eof".to_string()));
    }

    #[test]
    fn test_log_error() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        log_error("Failed to read file", Some(&io_error));
        log_error("Something went wrong", None);
    }
}
