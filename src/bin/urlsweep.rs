use clap::Parser;
use urlsweep::checking::{HttpChecker, WorkerPool};
use urlsweep::config::{CliConfig, Config};
use urlsweep::core::constants::exit_codes;
use urlsweep::input::{ensure_not_empty, load_targets};
use urlsweep::reporting::{logging, render_summary, render_table, sort_outcomes, write_json};
use urlsweep::ui::color::{Colors, colorize};
use urlsweep::ui::{Cli, ProgressReporter, cli_to_config};
use urlsweep::{Outcome, Result};

use std::io::{self, IsTerminal, Write};
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    match run(&cli).await {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(e) => {
            logging::log_error("Run aborted", Some(&e));
            eprintln!("{} {e}", colorize("Error:", Colors::BRIGHT_RED));
            std::process::exit(e.exit_code());
        }
    }
}

/// Load, check, report. Returns the process exit code.
async fn run(cli: &Cli) -> Result<i32> {
    let cli_config = cli_to_config(cli);
    let config = load_and_merge_config(&cli_config)?;

    let verbose = config.verbose.unwrap_or(false);
    logging::init_logger(verbose, cli_config.quiet);
    logging::log_config_info(&config);

    let input_path = config.input_path();
    let targets = load_targets(&input_path)?;
    let targets = ensure_not_empty(targets, &input_path)?;
    logging::log_input_info(&input_path, targets.len());

    let checker = Arc::new(HttpChecker::new(&config)?);
    let pool = WorkerPool::new(config.worker_count(), checker);

    let mut progress = create_progress_reporter(&cli_config);

    logging::log_check_start(targets.len(), pool.workers());
    let start = Instant::now();
    let mut outcomes = pool.run(targets, progress.as_mut()).await;
    let failed = outcomes.iter().filter(|o| !o.is_ok()).count();
    logging::log_check_complete(outcomes.len(), failed, start.elapsed().as_millis());

    if let Some(ref progress) = progress {
        progress.finish_and_clear();
    }

    sort_outcomes(&mut outcomes);
    print_report(&outcomes, cli_config.quiet)?;

    if let Some(path) = config.json_output_path() {
        export_json(&path, &outcomes);
    }

    Ok(exit_codes::SUCCESS)
}

/// Load configuration from file or standard locations and merge with CLI config
fn load_and_merge_config(cli_config: &CliConfig) -> Result<Config> {
    let mut config = if cli_config.no_config {
        Config::default()
    } else if let Some(ref config_file) = cli_config.config_file {
        Config::load_from_file(config_file)?
    } else {
        Config::load_from_standard_locations()?
    };

    // CLI takes precedence over the config file
    config.merge_with_cli(cli_config);
    config.validate()?;
    Ok(config)
}

/// Progress is drawn on stderr, and only when a person is watching it
fn create_progress_reporter(cli_config: &CliConfig) -> Option<ProgressReporter> {
    let show = !cli_config.quiet && !cli_config.no_progress && io::stderr().is_terminal();
    show.then(|| ProgressReporter::new(true))
}

fn print_report(outcomes: &[Outcome], quiet: bool) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    render_table(&mut out, outcomes)?;

    if !quiet {
        let summary = render_summary(outcomes);
        let color = if outcomes.iter().all(Outcome::is_ok) {
            Colors::GREEN
        } else {
            Colors::YELLOW
        };
        writeln!(out)?;
        writeln!(out, "{}", colorize(&summary, color))?;
    }

    out.flush()?;
    Ok(())
}

/// The table has already been printed, so a failed export only warns.
fn export_json(path: &Path, outcomes: &[Outcome]) {
    match write_json(path, outcomes) {
        Ok(()) => println!("JSON saved to {}", path.display()),
        Err(e) => {
            logging::log_error("Could not write JSON output", Some(&e));
            eprintln!(
                "{} could not write JSON to {}: {e}",
                colorize("Warning:", Colors::BRIGHT_YELLOW),
                path.display()
            );
        }
    }
}
