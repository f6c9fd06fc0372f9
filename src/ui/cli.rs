// Command-line interface definitions and parsing for urlsweep

use crate::config::{CliConfig, parse_timeout};
use crate::core::constants::defaults;
use clap::Parser;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    // Core Options
    /// File with one URL per line (default: urls.txt)
    #[arg(short = 'f', long, value_name = "FILE", help_heading = "Core Options")]
    pub file: Option<String>,

    /// Number of concurrent workers (default: 5)
    #[arg(short = 'w', long, value_name = "COUNT", help_heading = "Core Options")]
    pub workers: Option<usize>,

    /// Per-request timeout, e.g. 10, 10s or 500ms (default: 10s)
    #[arg(
        short = 't',
        long,
        value_name = "DURATION",
        value_parser = parse_timeout,
        help_heading = "Core Options"
    )]
    pub timeout: Option<Duration>,

    /// Substring to look for in every response body
    #[arg(short = 'c', long, value_name = "TEXT", help_heading = "Core Options")]
    pub contains: Option<String>,

    // Output & Verbosity
    /// Write results as JSON (default path: results.json)
    #[arg(
        long,
        value_name = "PATH",
        num_args = 0..=1,
        default_missing_value = defaults::JSON_OUTPUT_FILE,
        help_heading = "Output & Verbosity"
    )]
    pub json: Option<String>,

    /// Suppress progress and summary output
    #[arg(short = 'q', long, help_heading = "Output & Verbosity")]
    pub quiet: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long, help_heading = "Output & Verbosity")]
    pub verbose: bool,

    /// Disable progress bar
    #[arg(long, help_heading = "Output & Verbosity")]
    pub no_progress: bool,

    // Network
    /// Custom User-Agent header
    #[arg(long, value_name = "AGENT", help_heading = "Network")]
    pub user_agent: Option<String>,

    // Configuration
    /// Use specific config file
    #[arg(long, value_name = "FILE", help_heading = "Configuration")]
    pub config: Option<String>,

    /// Ignore config files
    #[arg(long, conflicts_with = "config", help_heading = "Configuration")]
    pub no_config: bool,
}

/// Convert parsed CLI arguments into a CliConfig
pub fn cli_to_config(cli: &Cli) -> CliConfig {
    CliConfig {
        file: cli.file.clone(),
        workers: cli.workers,
        timeout: cli.timeout,
        contains: cli.contains.clone(),
        json_output: cli.json.clone(),
        user_agent: cli.user_agent.clone(),
        quiet: cli.quiet,
        verbose: cli.verbose,
        no_progress: cli.no_progress,
        config_file: cli.config.clone(),
        no_config: cli.no_config,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Cli {
        let mut argv = vec!["urlsweep"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).expect("arguments parse")
    }

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_to_config_default() {
        let config = cli_to_config(&parse(&[]));

        assert_eq!(config.file, None);
        assert_eq!(config.workers, None);
        assert_eq!(config.timeout, None);
        assert_eq!(config.contains, None);
        assert_eq!(config.json_output, None);
        assert_eq!(config.user_agent, None);
        assert!(!config.quiet);
        assert!(!config.verbose);
        assert!(!config.no_progress);
        assert_eq!(config.config_file, None);
        assert!(!config.no_config);
    }

    #[test]
    fn test_cli_to_config_all_options() {
        let cli = parse(&[
            "--file",
            "list.txt",
            "--workers",
            "10",
            "--timeout",
            "3",
            "--contains",
            "ok",
            "--json",
            "out.json",
            "--user-agent",
            "agent/1",
            "--quiet",
            "--verbose",
            "--no-progress",
            "--config",
            "custom.toml",
        ]);
        let config = cli_to_config(&cli);

        assert_eq!(config.file.as_deref(), Some("list.txt"));
        assert_eq!(config.workers, Some(10));
        assert_eq!(config.timeout, Some(Duration::from_secs(3)));
        assert_eq!(config.contains.as_deref(), Some("ok"));
        assert_eq!(config.json_output.as_deref(), Some("out.json"));
        assert_eq!(config.user_agent.as_deref(), Some("agent/1"));
        assert!(config.quiet);
        assert!(config.verbose);
        assert!(config.no_progress);
        assert_eq!(config.config_file.as_deref(), Some("custom.toml"));
    }

    #[test]
    fn test_short_flags() {
        let cli = parse(&["-f", "a.txt", "-w", "2", "-t", "7", "-c", "x", "-q", "-v"]);

        assert_eq!(cli.file.as_deref(), Some("a.txt"));
        assert_eq!(cli.workers, Some(2));
        assert_eq!(cli.timeout, Some(Duration::from_secs(7)));
        assert_eq!(cli.contains.as_deref(), Some("x"));
        assert!(cli.quiet);
        assert!(cli.verbose);
    }

    #[test]
    fn test_json_without_value_uses_default_path() {
        let cli = parse(&["--json"]);
        assert_eq!(cli.json.as_deref(), Some("results.json"));
    }

    #[test]
    fn test_json_followed_by_flag_uses_default_path() {
        let cli = parse(&["--json", "--workers", "3"]);
        assert_eq!(cli.json.as_deref(), Some("results.json"));
        assert_eq!(cli.workers, Some(3));
    }

    #[test]
    fn test_json_with_value() {
        assert_eq!(parse(&["--json", "r.json"]).json.as_deref(), Some("r.json"));
        assert_eq!(parse(&["--json=r2.json"]).json.as_deref(), Some("r2.json"));
    }

    #[test]
    fn test_timeout_accepts_durations() {
        assert_eq!(
            parse(&["--timeout", "500ms"]).timeout,
            Some(Duration::from_millis(500))
        );
        assert_eq!(
            parse(&["-t", "10s"]).timeout,
            Some(Duration::from_secs(10))
        );
        assert_eq!(
            parse(&["--timeout=2m"]).timeout,
            Some(Duration::from_secs(120))
        );
    }

    #[test]
    fn test_invalid_numbers_are_rejected() {
        assert!(Cli::try_parse_from(["urlsweep", "--workers", "many"]).is_err());
        assert!(Cli::try_parse_from(["urlsweep", "--timeout", "-1"]).is_err());
        assert!(Cli::try_parse_from(["urlsweep", "--timeout", "later"]).is_err());
    }

    #[test]
    fn test_config_conflicts_with_no_config() {
        assert!(
            Cli::try_parse_from(["urlsweep", "--config", "a.toml", "--no-config"]).is_err()
        );
    }
}
